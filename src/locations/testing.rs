use crate::geo::models::LatLng;
use crate::locations::models::{Location, LocationSeed, Media};
use crate::locations::provider::{LocationProvider, ProviderError};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tokio::sync::Notify;

pub fn fake_seed(name: &str, lat: f64, lng: f64) -> LocationSeed {
    LocationSeed {
        name: name.to_string(),
        search: name.to_lowercase(),
        lat,
        lng,
        image_url: Some(format!("https://img.test/{}.jpg", name.to_lowercase())),
        description: Some(String::from("Somewhere nice")),
    }
}

pub fn fake_location(name: &str, lat: f64, lng: f64) -> Location {
    Location {
        id: format!("fake-{}", name.to_lowercase()),
        name: name.to_string(),
        coordinates: LatLng { lat, lng },
        media: Media::Image {
            url: format!("https://img.test/{}.jpg", name.to_lowercase()),
        },
        description: String::from("Somewhere nice"),
    }
}

pub fn paris() -> Location {
    fake_location("Paris", 48.8566, 2.3522)
}

/// Replays queued outcomes in order, then keeps returning `fallback`.
pub struct ScriptedLocationProvider {
    script: Mutex<VecDeque<Result<Location, ProviderError>>>,
    fallback: Location,
    calls: AtomicUsize,
}

impl ScriptedLocationProvider {
    pub fn new(script: Vec<Result<Location, ProviderError>>, fallback: Location) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fallback,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn always(location: Location) -> Self {
        Self::new(vec![], location)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl LocationProvider for ScriptedLocationProvider {
    async fn fetch_random_location(&self) -> Result<Location, ProviderError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let next = self
            .script
            .lock()
            .expect("Scripted provider lock was poisoned.")
            .pop_front();
        next.unwrap_or_else(|| Ok(self.fallback.clone()))
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

/// Blocks every fetch until the test releases it.
pub struct GatedLocationProvider {
    pub started: Notify,
    pub release: Notify,
    location: Location,
}

impl GatedLocationProvider {
    pub fn new(location: Location) -> Self {
        Self {
            started: Notify::new(),
            release: Notify::new(),
            location,
        }
    }
}

#[async_trait]
impl LocationProvider for GatedLocationProvider {
    async fn fetch_random_location(&self) -> Result<Location, ProviderError> {
        self.started.notify_one();
        self.release.notified().await;
        Ok(self.location.clone())
    }

    fn name(&self) -> &'static str {
        "gated"
    }
}
