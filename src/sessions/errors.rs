use crate::sessions::models::SessionState;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("session not found")]
    SessionNotFound,

    #[error("`{operation}` is not allowed while the session is {state:?}")]
    InvalidTransition {
        operation: &'static str,
        state: SessionState,
    },

    #[error("coordinates ({lat}, {lng}) are outside of the map")]
    InvalidCoordinates { lat: f64, lng: f64 },

    #[error("a location is already being fetched for this session")]
    FetchInFlight,

    #[error("a game has between 1 and {max} rounds, got {requested}")]
    InvalidRoundCount { requested: u32, max: u32 },

    #[error("max score {max_score} is either zero or too large to add up over a game")]
    InvalidMaxScore { max_score: u64 },

    #[error("zero-score distance must be a positive number of kilometers, got {distance_km}")]
    InvalidZeroScoreDistance { distance_km: f64 },
}
