use crate::geo::models::LatLng;
use crate::locations::consts::GENERIC_CLUE;
use serde::{Deserialize, Serialize};

/// A place the player has to find on the map.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: String,
    pub name: String,
    pub coordinates: LatLng,
    pub media: Media,
    /// Never contains the name of the place.
    pub description: String,
}

impl Location {
    pub fn clue(&self) -> LocationClue {
        LocationClue {
            id: self.id.clone(),
            media: self.media.clone(),
            description: self.description.clone(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum Media {
    Image {
        url: String,
    },
    Video {
        url: String,
        #[serde(rename = "posterUrl")]
        poster_url: String,
    },
}

/// What the player gets to see while the round is still being played.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationClue {
    pub id: String,
    pub media: Media,
    pub description: String,
}

/// One line of the locations catalogue file.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocationSeed {
    pub name: String,
    /// Query sent to the media search APIs.
    pub search: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl LocationSeed {
    pub fn coordinates(&self) -> LatLng {
        LatLng {
            lat: self.lat,
            lng: self.lng,
        }
    }

    pub fn clue(&self) -> String {
        self.description
            .clone()
            .unwrap_or_else(|| GENERIC_CLUE.to_string())
    }
}
