use crate::app_context::{AppContext, RequestContext};
use crate::geo::models::LatLng;
use crate::locations::provider::ProviderError;
use crate::sessions::errors::SessionError;
use crate::sessions::models::{FetchOutcome, SessionState, SessionView};
use crate::sessions::services::requests::CreateSessionRequest;
use crate::sessions::services::responses::{
    DeleteSessionResponse, GuessResponse, HintResponse, SessionErrorCode, SessionResponse,
    SummaryResponse,
};
use crate::storage::interface::ISessionStorage;
use std::time::Instant;

pub struct CreateSessionHttpHandler<SS: ISessionStorage> {
    app_context: AppContext<SS>,
}

impl<SS> CreateSessionHttpHandler<SS>
where
    SS: ISessionStorage + Clone,
{
    pub fn new(app_context: AppContext<SS>) -> Self {
        Self { app_context }
    }

    /// Creates a session and requests the location of its first round.
    pub async fn create(&self, request: CreateSessionRequest) -> SessionResponse {
        let config = match request.total_rounds {
            Some(total_rounds) => self.app_context.defaults.with_total_rounds(total_rounds),
            None => Ok(self.app_context.defaults),
        };
        let config = match config {
            Ok(config) => config,
            Err(err) => return SessionResponse::failed(&err, None),
        };
        let session_id = self.app_context.sessions.create(config).await;
        tracing::info!(
            task = "session_event",
            session_id = %session_id,
            transition = "created",
            total_rounds = config.total_rounds,
        );
        let request_context = RequestContext { session_id };
        SessionHttpHandler::new(self.app_context.clone(), &request_context)
            .load_location()
            .await
    }
}

pub struct SessionHttpHandler<'a, SS: ISessionStorage> {
    app_context: AppContext<SS>,
    request_context: &'a RequestContext,
}

impl<'a, SS> SessionHttpHandler<'a, SS>
where
    SS: ISessionStorage,
{
    pub fn new(app_context: AppContext<SS>, request_context: &'a RequestContext) -> Self {
        Self {
            app_context,
            request_context,
        }
    }

    pub async fn view(&self) -> SessionResponse {
        match self.app_context.sessions.view(self.session_id()).await {
            Ok(view) => SessionResponse::ok(view),
            Err(err) => SessionResponse::failed(&err, None),
        }
    }

    pub async fn delete(&self) -> DeleteSessionResponse {
        if !self.app_context.sessions.delete(self.session_id()).await {
            return DeleteSessionResponse {
                error: true,
                error_code: Some(SessionErrorCode::SessionNotFound),
            };
        }
        tracing::info!(
            task = "session_event",
            session_id = self.session_id(),
            transition = "deleted",
        );
        DeleteSessionResponse {
            error: false,
            error_code: None,
        }
    }

    pub async fn submit_guess(&self, guess: LatLng) -> GuessResponse {
        let result = match self
            .app_context
            .sessions
            .submit_guess(self.session_id(), guess)
            .await
        {
            Ok(result) => result,
            Err(err) => {
                return GuessResponse {
                    error: true,
                    error_code: Some((&err).into()),
                    message: Some(err.to_string()),
                    result: None,
                    session: self.current_view().await,
                }
            }
        };
        let session = self.current_view().await;
        tracing::info!(
            task = "session_event",
            session_id = self.session_id(),
            transition = "guess_scored",
            round = result.round,
            distance_km = result.distance_km,
            points_awarded = result.points_awarded,
            cumulative_score = ?session.as_ref().map(|view| view.cumulative_score),
        );
        GuessResponse {
            error: false,
            error_code: None,
            message: None,
            result: Some(result),
            session,
        }
    }

    /// Moves on from the round result. Entering a new round requests its location.
    pub async fn advance(&self) -> SessionResponse {
        let state = match self.app_context.sessions.advance(self.session_id()).await {
            Ok(state) => state,
            Err(err) => return self.failed(&err).await,
        };
        tracing::info!(
            task = "session_event",
            session_id = self.session_id(),
            transition = "advanced",
            state = ?state,
        );
        match state {
            SessionState::Loading => self.load_location().await,
            _ => self.view().await,
        }
    }

    pub async fn restart(&self) -> SessionResponse {
        if let Err(err) = self.app_context.sessions.restart(self.session_id()).await {
            return self.failed(&err).await;
        }
        tracing::info!(
            task = "session_event",
            session_id = self.session_id(),
            transition = "restarted",
        );
        self.load_location().await
    }

    pub async fn retry_fetch(&self) -> SessionResponse {
        self.load_location().await
    }

    pub async fn cancel_fetch(&self) -> SessionResponse {
        match self
            .app_context
            .sessions
            .cancel_fetch(self.session_id())
            .await
        {
            Ok(cancelled) => {
                tracing::info!(
                    task = "session_event",
                    session_id = self.session_id(),
                    transition = "fetch_cancelled",
                    cancelled,
                );
                self.view().await
            }
            Err(err) => self.failed(&err).await,
        }
    }

    pub async fn hint(&self) -> HintResponse {
        match self.app_context.sessions.hint(self.session_id()).await {
            Ok(center) => HintResponse {
                error: false,
                error_code: None,
                message: None,
                center: Some(center),
            },
            Err(err) => HintResponse {
                error: true,
                error_code: Some((&err).into()),
                message: Some(err.to_string()),
                center: None,
            },
        }
    }

    pub async fn summary(&self) -> SummaryResponse {
        match self.app_context.sessions.summary(self.session_id()).await {
            Ok(summary) => SummaryResponse {
                error: false,
                error_code: None,
                message: None,
                summary: Some(summary),
            },
            Err(err) => SummaryResponse {
                error: true,
                error_code: Some((&err).into()),
                message: Some(err.to_string()),
                summary: None,
            },
        }
    }

    /// Fetches a location for the current round and reports the session afterwards.
    async fn load_location(&self) -> SessionResponse {
        match self.fetch_location().await {
            Ok(None) => self.view().await,
            Ok(Some(err)) => SessionResponse::location_unavailable(&err, self.current_view().await),
            Err(err) => self.failed(&err).await,
        }
    }

    /// Runs the provider outside of the storage lock. Returns the provider error, if any.
    async fn fetch_location(&self) -> Result<Option<ProviderError>, SessionError> {
        let session_id = self.session_id();
        let sessions = &self.app_context.sessions;
        let provider = self.app_context.locations.clone();
        let ticket = sessions.begin_fetch(session_id).await?;

        let start_time = Instant::now();
        let fetched = provider.fetch_random_location().await;
        let processing_time_ms = start_time.elapsed().as_millis() as u64;

        match fetched {
            Ok(location) => {
                let location_id = location.id.clone();
                let outcome = sessions.location_ready(session_id, ticket, location).await;
                tracing::info!(
                    task = "location_fetch",
                    session_id,
                    provider = provider.name(),
                    location_id = %location_id,
                    outcome = ?outcome,
                    processing_time_ms,
                );
                Ok(None)
            }
            Err(err) => {
                let outcome = sessions
                    .location_fetch_failed(session_id, ticket, &err)
                    .await;
                tracing::warn!(
                    task = "location_fetch",
                    session_id,
                    provider = provider.name(),
                    error = %err,
                    outcome = ?outcome,
                    processing_time_ms,
                );
                match outcome {
                    FetchOutcome::Applied => Ok(Some(err)),
                    FetchOutcome::Discarded => Ok(None),
                }
            }
        }
    }

    async fn failed(&self, err: &SessionError) -> SessionResponse {
        SessionResponse::failed(err, self.current_view().await)
    }

    async fn current_view(&self) -> Option<SessionView> {
        self.app_context.sessions.view(self.session_id()).await.ok()
    }

    fn session_id(&self) -> &str {
        &self.request_context.session_id
    }
}
