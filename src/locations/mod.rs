use crate::cli::Args;
use crate::locations::catalogue::{CatalogueError, CatalogueLocationProvider, SeedCatalogue};
use crate::locations::env::{PEXELS_API_KEY, UNSPLASH_ACCESS_KEY};
use crate::locations::pexels::PexelsLocationProvider;
use crate::locations::provider::LocationProvider;
use crate::locations::unsplash::UnsplashLocationProvider;
use crate::warn_if_env_var_is_missing;
use clap::ValueEnum;
use rand::seq::SliceRandom;
use std::sync::Arc;
use thiserror::Error;
use url::Url;

pub mod catalogue;
pub mod consts;
pub mod env;
pub mod models;
pub mod pexels;
pub mod provider;
pub mod unsplash;
#[cfg(test)]
pub mod testing;
#[cfg(test)]
mod tests;

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ProviderKind {
    /// Pictures listed in the locations file itself.
    Catalogue,
    /// Photos from the Unsplash search API.
    Unsplash,
    /// Videos from the Pexels search API.
    Pexels,
}

#[derive(Debug, Error)]
pub enum InitError {
    #[error(transparent)]
    Catalogue(#[from] CatalogueError),

    #[error("invalid media API URL: {0}")]
    ApiUrl(#[from] url::ParseError),
}

pub fn init(args: &Args) -> Result<Arc<dyn LocationProvider>, InitError> {
    let catalogue = SeedCatalogue::from_path(&args.locations)?;
    tracing::info!(
        locations = catalogue.seeds().len(),
        path = %args.locations.display(),
        "Loaded the locations catalogue."
    );
    let provider: Arc<dyn LocationProvider> = match args.location_provider {
        ProviderKind::Catalogue => Arc::new(CatalogueLocationProvider::new(catalogue)),
        ProviderKind::Unsplash => {
            warn_if_env_var_is_missing!(UNSPLASH_ACCESS_KEY, "Every location fetch will fail.");
            Arc::new(UnsplashLocationProvider::from_env(
                &args.unsplash_api_url,
                catalogue,
            )?)
        }
        ProviderKind::Pexels => {
            warn_if_env_var_is_missing!(PEXELS_API_KEY, "Every location fetch will fail.");
            Arc::new(PexelsLocationProvider::from_env(
                &args.pexels_api_url,
                catalogue,
            )?)
        }
    };
    tracing::info!(provider = provider.name(), "Initialized the location provider.");
    Ok(provider)
}

/// Appends `path` to `base`, keeping whatever path `base` already has.
pub fn endpoint(base: &Url, path: &str) -> Result<Url, url::ParseError> {
    Url::parse(&format!("{}/{}", base.as_str().trim_end_matches('/'), path))
}

pub fn pick_random<T>(items: &[T]) -> Option<&T> {
    items.choose(&mut rand::thread_rng())
}
