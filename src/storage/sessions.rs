use crate::geo::models::LatLng;
use crate::locations::models::Location;
use crate::locations::provider::ProviderError;
use crate::sessions::errors::SessionError;
use crate::sessions::models::{
    FetchOutcome, FetchTicket, GameSession, GameSummary, RoundResult, SessionConfig,
    SessionState, SessionView,
};
use crate::storage::interface::{
    ISessionStorage, SessionFetchHandler, SessionGameFlowHandler, SessionRepo,
};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Clone, Default)]
pub struct HashMapSessionsStorage {
    storage: Arc<RwLock<HashMap<String, GameSession>>>,
}

impl HashMapSessionsStorage {
    async fn with_session<T>(
        &self,
        session_id: &str,
        action: impl FnOnce(&GameSession) -> Result<T, SessionError>,
    ) -> Result<T, SessionError> {
        self.storage
            .read()
            .await
            .get(session_id)
            .ok_or(SessionError::SessionNotFound)
            .and_then(action)
    }

    async fn with_session_mut<T>(
        &self,
        session_id: &str,
        action: impl FnOnce(&mut GameSession) -> Result<T, SessionError>,
    ) -> Result<T, SessionError> {
        self.storage
            .write()
            .await
            .get_mut(session_id)
            .ok_or(SessionError::SessionNotFound)
            .and_then(action)
    }
}

impl ISessionStorage for HashMapSessionsStorage {}

impl SessionRepo for HashMapSessionsStorage {
    async fn create(&self, config: SessionConfig) -> String {
        let session_id = Uuid::new_v4().to_string();
        let session = GameSession::start(session_id.clone(), config);
        self.storage
            .write()
            .await
            .insert(session_id.clone(), session);
        session_id
    }

    async fn view(&self, session_id: &str) -> Result<SessionView, SessionError> {
        self.with_session(session_id, |session| Ok(session.view()))
            .await
    }

    async fn delete(&self, session_id: &str) -> bool {
        self.storage.write().await.remove(session_id).is_some()
    }
}

impl SessionGameFlowHandler for HashMapSessionsStorage {
    async fn submit_guess(
        &self,
        session_id: &str,
        guess: LatLng,
    ) -> Result<RoundResult, SessionError> {
        self.with_session_mut(session_id, |session| session.submit_guess(guess))
            .await
    }

    async fn advance(&self, session_id: &str) -> Result<SessionState, SessionError> {
        self.with_session_mut(session_id, GameSession::advance)
            .await
    }

    async fn restart(&self, session_id: &str) -> Result<(), SessionError> {
        self.with_session_mut(session_id, GameSession::restart)
            .await
    }

    async fn hint(&self, session_id: &str) -> Result<LatLng, SessionError> {
        self.with_session(session_id, |session| {
            session.hint(&mut rand::thread_rng())
        })
        .await
    }

    async fn summary(&self, session_id: &str) -> Result<GameSummary, SessionError> {
        self.with_session(session_id, GameSession::summary).await
    }
}

impl SessionFetchHandler for HashMapSessionsStorage {
    async fn begin_fetch(&self, session_id: &str) -> Result<FetchTicket, SessionError> {
        self.with_session_mut(session_id, GameSession::begin_fetch)
            .await
    }

    async fn location_ready(
        &self,
        session_id: &str,
        ticket: FetchTicket,
        location: Location,
    ) -> FetchOutcome {
        // The session may have been deleted while the fetch was running.
        self.with_session_mut(session_id, |session| {
            Ok(session.location_ready(ticket, location))
        })
        .await
        .unwrap_or(FetchOutcome::Discarded)
    }

    async fn location_fetch_failed(
        &self,
        session_id: &str,
        ticket: FetchTicket,
        error: &ProviderError,
    ) -> FetchOutcome {
        self.with_session_mut(session_id, |session| {
            Ok(session.location_fetch_failed(ticket, error))
        })
        .await
        .unwrap_or(FetchOutcome::Discarded)
    }

    async fn cancel_fetch(&self, session_id: &str) -> Result<bool, SessionError> {
        self.with_session_mut(session_id, GameSession::cancel_fetch)
            .await
    }
}
