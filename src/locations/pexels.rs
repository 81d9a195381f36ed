use crate::locations::catalogue::SeedCatalogue;
use crate::locations::consts::{GENERIC_CLUE, PEXELS_RESULTS_PER_PAGE};
use crate::locations::env::PEXELS_API_KEY;
use crate::locations::models::{Location, LocationSeed, Media};
use crate::locations::provider::{LocationProvider, ProviderError};
use crate::locations::{endpoint, pick_random};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

#[derive(Debug, Deserialize)]
pub struct PexelsSearchResponse {
    pub videos: Vec<PexelsVideo>,
}

#[derive(Debug, Deserialize)]
pub struct PexelsVideo {
    pub id: u64,
    /// Thumbnail.
    pub image: String,
    pub video_files: Vec<PexelsVideoFile>,
}

#[derive(Debug, Deserialize)]
pub struct PexelsVideoFile {
    #[serde(default)]
    pub quality: Option<String>,
    pub link: String,
}

/// Pairs a random catalogue place with a random matching video from Pexels.
pub struct PexelsLocationProvider {
    client: Client,
    search_url: Url,
    api_key: Option<String>,
    catalogue: SeedCatalogue,
}

impl PexelsLocationProvider {
    pub fn new(
        api_url: &Url,
        api_key: Option<String>,
        catalogue: SeedCatalogue,
    ) -> Result<Self, url::ParseError> {
        Ok(Self {
            client: Client::new(),
            search_url: endpoint(api_url, "search")?,
            api_key,
            catalogue,
        })
    }

    pub fn from_env(api_url: &Url, catalogue: SeedCatalogue) -> Result<Self, url::ParseError> {
        Self::new(api_url, std::env::var(PEXELS_API_KEY).ok(), catalogue)
    }
}

#[async_trait]
impl LocationProvider for PexelsLocationProvider {
    async fn fetch_random_location(&self) -> Result<Location, ProviderError> {
        let api_key = self
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredentials(PEXELS_API_KEY))?;
        let seed = self.catalogue.random();
        let response = self
            .client
            .get(self.search_url.clone())
            .query(&[
                ("query", seed.search.as_str()),
                ("per_page", PEXELS_RESULTS_PER_PAGE),
                ("orientation", "landscape"),
            ])
            .header("Authorization", api_key)
            .send()
            .await?;
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(ProviderError::Api {
                status: status.as_u16(),
                message: body,
            });
        }
        let search: PexelsSearchResponse = serde_json::from_str(&body)?;
        let video = pick_random(&search.videos).ok_or_else(|| {
            ProviderError::NoResults(format!("no videos found for `{}`", seed.search))
        })?;
        video_to_location(video, seed)
    }

    fn name(&self) -> &'static str {
        "pexels"
    }
}

pub fn video_to_location(
    video: &PexelsVideo,
    seed: &LocationSeed,
) -> Result<Location, ProviderError> {
    let file = video
        .video_files
        .iter()
        .find(|file| matches!(file.quality.as_deref(), Some("hd") | Some("sd")))
        .or_else(|| video.video_files.first())
        .ok_or_else(|| ProviderError::Malformed(format!("video {} has no files", video.id)))?;
    Ok(Location {
        id: format!("pexels-{}", video.id),
        name: seed.name.clone(),
        coordinates: seed.coordinates(),
        media: Media::Video {
            url: file.link.clone(),
            poster_url: video.image.clone(),
        },
        description: GENERIC_CLUE.to_string(),
    })
}
