use crate::geo::models::LatLng;
use crate::locations::models::Location;
use crate::locations::provider::ProviderError;
use crate::sessions::errors::SessionError;
use crate::sessions::models::{
    FetchOutcome, FetchTicket, GameSummary, RoundResult, SessionConfig, SessionState, SessionView,
};

pub trait ISessionStorage: SessionRepo + SessionGameFlowHandler + SessionFetchHandler {}

pub trait SessionRepo {
    async fn create(&self, config: SessionConfig) -> String;

    async fn view(&self, session_id: &str) -> Result<SessionView, SessionError>;

    /// Returns whether there was such a session.
    async fn delete(&self, session_id: &str) -> bool;
}

pub trait SessionGameFlowHandler {
    async fn submit_guess(
        &self,
        session_id: &str,
        guess: LatLng,
    ) -> Result<RoundResult, SessionError>;

    async fn advance(&self, session_id: &str) -> Result<SessionState, SessionError>;

    async fn restart(&self, session_id: &str) -> Result<(), SessionError>;

    async fn hint(&self, session_id: &str) -> Result<LatLng, SessionError>;

    async fn summary(&self, session_id: &str) -> Result<GameSummary, SessionError>;
}

/// Bookkeeping around location fetches. The fetch itself never runs under the storage lock.
pub trait SessionFetchHandler {
    async fn begin_fetch(&self, session_id: &str) -> Result<FetchTicket, SessionError>;

    async fn location_ready(
        &self,
        session_id: &str,
        ticket: FetchTicket,
        location: Location,
    ) -> FetchOutcome;

    async fn location_fetch_failed(
        &self,
        session_id: &str,
        ticket: FetchTicket,
        error: &ProviderError,
    ) -> FetchOutcome;

    async fn cancel_fetch(&self, session_id: &str) -> Result<bool, SessionError>;
}
