use crate::app_context::AppContext;
use crate::cli::Args;
use crate::storage::sessions::HashMapSessionsStorage;
use crate::{health, sessions};
use axum::{
    routing::{get, post},
    Router,
};

pub fn new(args: &Args, app_context: AppContext<HashMapSessionsStorage>) -> Router {
    let cors_policy = super::cors(args);
    tracing::info!("Initialized HTTP configuration.");

    let health_routes = Router::new().route("/check", get(health::handlers::healthcheck));
    let sessions_routes = Router::new()
        .route("/", post(sessions::handlers::create))
        .route(
            "/:session_id",
            get(sessions::handlers::view).delete(sessions::handlers::delete),
        )
        .route("/:session_id/guess", post(sessions::handlers::submit_guess))
        .route("/:session_id/advance", post(sessions::handlers::advance))
        .route("/:session_id/restart", post(sessions::handlers::restart))
        .route(
            "/:session_id/retry-fetch",
            post(sessions::handlers::retry_fetch),
        )
        .route(
            "/:session_id/cancel-fetch",
            post(sessions::handlers::cancel_fetch),
        )
        .route("/:session_id/hint", get(sessions::handlers::hint))
        .route("/:session_id/summary", get(sessions::handlers::summary));

    Router::new()
        .nest("/health", health_routes)
        .nest("/sessions", sessions_routes)
        .with_state(app_context)
        .layer(cors_policy)
        .layer(axum::middleware::from_fn(super::middleware::tracing))
}
