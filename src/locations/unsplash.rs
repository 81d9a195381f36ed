use crate::locations::catalogue::SeedCatalogue;
use crate::locations::consts::{GENERIC_CLUE, UNSPLASH_RESULTS_PER_PAGE};
use crate::locations::env::UNSPLASH_ACCESS_KEY;
use crate::locations::models::{Location, LocationSeed, Media};
use crate::locations::provider::{LocationProvider, ProviderError};
use crate::locations::{endpoint, pick_random};
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

#[derive(Debug, Deserialize)]
pub struct UnsplashSearchResponse {
    pub results: Vec<UnsplashPhoto>,
}

#[derive(Debug, Deserialize)]
pub struct UnsplashPhoto {
    pub id: String,
    pub urls: UnsplashPhotoUrls,
    #[serde(default)]
    pub alt_description: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UnsplashPhotoUrls {
    pub regular: String,
}

/// Pairs a random catalogue place with a random matching photo from Unsplash.
pub struct UnsplashLocationProvider {
    client: Client,
    search_url: Url,
    access_key: Option<String>,
    catalogue: SeedCatalogue,
}

impl UnsplashLocationProvider {
    pub fn new(
        api_url: &Url,
        access_key: Option<String>,
        catalogue: SeedCatalogue,
    ) -> Result<Self, url::ParseError> {
        Ok(Self {
            client: Client::new(),
            search_url: endpoint(api_url, "search/photos")?,
            access_key,
            catalogue,
        })
    }

    pub fn from_env(api_url: &Url, catalogue: SeedCatalogue) -> Result<Self, url::ParseError> {
        Self::new(api_url, std::env::var(UNSPLASH_ACCESS_KEY).ok(), catalogue)
    }
}

#[async_trait]
impl LocationProvider for UnsplashLocationProvider {
    async fn fetch_random_location(&self) -> Result<Location, ProviderError> {
        let access_key = self
            .access_key
            .as_deref()
            .ok_or(ProviderError::MissingCredentials(UNSPLASH_ACCESS_KEY))?;
        let seed = self.catalogue.random();
        let response = self
            .client
            .get(self.search_url.clone())
            .query(&[
                ("query", seed.search.as_str()),
                ("orientation", "landscape"),
                ("per_page", UNSPLASH_RESULTS_PER_PAGE),
            ])
            .header("Authorization", format!("Client-ID {access_key}"))
            .header("Accept-Version", "v1")
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
        let search: UnsplashSearchResponse = serde_json::from_str(&body)?;
        let photo = pick_random(&search.results).ok_or_else(|| {
            ProviderError::NoResults(format!("no photos found for `{}`", seed.search))
        })?;
        Ok(photo_to_location(photo, seed))
    }

    fn name(&self) -> &'static str {
        "unsplash"
    }
}

pub fn photo_to_location(photo: &UnsplashPhoto, seed: &LocationSeed) -> Location {
    let description = photo
        .alt_description
        .as_deref()
        .map(str::trim)
        .filter(|alt| !alt.is_empty())
        .map_or_else(|| GENERIC_CLUE.to_string(), str::to_string);
    Location {
        id: format!("unsplash-{}", photo.id),
        name: seed.name.clone(),
        coordinates: seed.coordinates(),
        media: Media::Image {
            url: photo.urls.regular.clone(),
        },
        description,
    }
}
