use crate::app_context::{AppContext, RequestContext};
use crate::geo::models::LatLng;
use crate::sessions::services::http::{CreateSessionHttpHandler, SessionHttpHandler};
use crate::sessions::services::requests::CreateSessionRequest;
use crate::sessions::services::responses::{
    DeleteSessionResponse, GuessResponse, HintResponse, SessionResponse, SummaryResponse,
};
use crate::storage::sessions::HashMapSessionsStorage;
use axum::body::Bytes;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::Json;


#[axum::debug_handler]
pub async fn create(
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
    body: Bytes,
) -> Result<Json<SessionResponse>, JsonRejection> {
    // A bodyless request starts a session with the server defaults.
    let request = if body.is_empty() {
        CreateSessionRequest::default()
    } else {
        let Json(request) = Json::<CreateSessionRequest>::from_bytes(&body)?;
        request
    };
    let response = CreateSessionHttpHandler::new(app_context)
        .create(request)
        .await;
    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn view(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<SessionResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .view()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn delete(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<DeleteSessionResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .delete()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn submit_guess(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
    Json(guess): Json<LatLng>,
) -> Json<GuessResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .submit_guess(guess)
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn advance(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<SessionResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .advance()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn restart(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<SessionResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .restart()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn retry_fetch(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<SessionResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .retry_fetch()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn cancel_fetch(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<SessionResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .cancel_fetch()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn hint(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<HintResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .hint()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn summary(
    Path(session_id): Path<String>,
    State(app_context): State<AppContext<HashMapSessionsStorage>>,
) -> Json<SummaryResponse> {
    let request_context = RequestContext { session_id };
    let response = SessionHttpHandler::new(app_context, &request_context)
        .summary()
        .await;
    Json(response)
}
