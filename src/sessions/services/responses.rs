use crate::geo::models::LatLng;
use crate::locations::provider::ProviderError;
use crate::sessions::errors::SessionError;
use crate::sessions::models::{GameSummary, RoundResult, SessionView};
use serde::Serialize;

/// All possible reasons why a session request may fail.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionErrorCode {
    SessionNotFound,
    InvalidTransition,
    InvalidCoordinates,
    FetchInFlight,
    InvalidRoundCount,
    InvalidScoring,
    /// The location provider failed, the session keeps waiting for a location.
    LocationUnavailable,
}

impl From<&SessionError> for SessionErrorCode {
    fn from(err: &SessionError) -> Self {
        match err {
            SessionError::SessionNotFound => Self::SessionNotFound,
            SessionError::InvalidTransition { .. } => Self::InvalidTransition,
            SessionError::InvalidCoordinates { .. } => Self::InvalidCoordinates,
            SessionError::FetchInFlight => Self::FetchInFlight,
            SessionError::InvalidRoundCount { .. } => Self::InvalidRoundCount,
            SessionError::InvalidMaxScore { .. }
            | SessionError::InvalidZeroScoreDistance { .. } => Self::InvalidScoring,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SessionErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionView>,
}

impl SessionResponse {
    pub fn ok(session: SessionView) -> Self {
        Self {
            error: false,
            error_code: None,
            message: None,
            session: Some(session),
        }
    }

    pub fn failed(err: &SessionError, session: Option<SessionView>) -> Self {
        Self {
            error: true,
            error_code: Some(err.into()),
            message: Some(err.to_string()),
            session,
        }
    }

    pub fn location_unavailable(err: &ProviderError, session: Option<SessionView>) -> Self {
        Self {
            error: true,
            error_code: Some(SessionErrorCode::LocationUnavailable),
            message: Some(err.to_string()),
            session,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuessResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SessionErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<RoundResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<SessionView>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HintResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SessionErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Where the map should be centered to help the player.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub center: Option<LatLng>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SessionErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub summary: Option<GameSummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteSessionResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<SessionErrorCode>,
}
