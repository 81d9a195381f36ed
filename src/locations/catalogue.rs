use crate::locations::models::{Location, LocationSeed, Media};
use crate::locations::pick_random;
use crate::locations::provider::{LocationProvider, ProviderError};
use async_trait::async_trait;
use rand::Rng;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use thiserror::Error;
use uuid::Uuid;

#[derive(Debug, Error)]
pub enum CatalogueError {
    #[error("failed to read the locations file: {0}")]
    Io(#[from] std::io::Error),

    #[error("line {line} of the locations file is not a valid location: {source}")]
    Parse {
        line: usize,
        source: serde_json::Error,
    },

    #[error("line {line} of the locations file has out-of-range coordinates ({lat}, {lng})")]
    InvalidCoordinates { line: usize, lat: f64, lng: f64 },

    #[error("the locations catalogue is empty")]
    Empty,
}

/// Places the game can pick from. Loaded once, read-only afterwards.
#[derive(Clone, Debug)]
pub struct SeedCatalogue {
    seeds: Vec<LocationSeed>,
}

impl SeedCatalogue {
    pub fn new(seeds: Vec<LocationSeed>) -> Result<Self, CatalogueError> {
        if seeds.is_empty() {
            return Err(CatalogueError::Empty);
        }
        for (index, seed) in seeds.iter().enumerate() {
            if !seed.coordinates().is_valid() {
                return Err(CatalogueError::InvalidCoordinates {
                    line: index + 1,
                    lat: seed.lat,
                    lng: seed.lng,
                });
            }
        }
        Ok(Self { seeds })
    }

    /// Reads a newline-delimited JSON file, one `LocationSeed` per line. Blank lines are skipped.
    pub fn from_path(path: &Path) -> Result<Self, CatalogueError> {
        let file = File::open(path)?;
        Self::from_reader(BufReader::new(file))
    }

    pub fn from_reader(reader: impl BufRead) -> Result<Self, CatalogueError> {
        let mut seeds = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let seed: LocationSeed = serde_json::from_str(&line).map_err(|source| {
                CatalogueError::Parse {
                    line: index + 1,
                    source,
                }
            })?;
            seeds.push(seed);
        }
        Self::new(seeds)
    }

    pub fn seeds(&self) -> &[LocationSeed] {
        &self.seeds
    }

    pub fn random(&self) -> &LocationSeed {
        let mut rng = rand::thread_rng();
        // Never empty, checked in `new`.
        let index = rng.gen_range(0..self.seeds.len());
        &self.seeds[index]
    }
}

/// Serves the catalogue's own pictures, no network involved.
pub struct CatalogueLocationProvider {
    catalogue: SeedCatalogue,
}

impl CatalogueLocationProvider {
    pub fn new(catalogue: SeedCatalogue) -> Self {
        Self { catalogue }
    }
}

#[async_trait]
impl LocationProvider for CatalogueLocationProvider {
    async fn fetch_random_location(&self) -> Result<Location, ProviderError> {
        let illustrated = self
            .catalogue
            .seeds()
            .iter()
            .filter(|seed| seed.image_url.is_some())
            .collect::<Vec<_>>();
        let seed = pick_random(&illustrated)
            .copied()
            .ok_or_else(|| {
                ProviderError::NoResults("no catalogue location has an image".to_string())
            })?;
        let url = seed.image_url.clone().unwrap_or_default();
        Ok(Location {
            id: Uuid::new_v4().to_string(),
            name: seed.name.clone(),
            coordinates: seed.coordinates(),
            media: Media::Image { url },
            description: seed.clue(),
        })
    }

    fn name(&self) -> &'static str {
        "catalogue"
    }
}
