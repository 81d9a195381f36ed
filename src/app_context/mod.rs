use crate::cli::Args;
use crate::locations::provider::LocationProvider;
use crate::scoring::{ScoringConfig, ScoringPolicy};
use crate::sessions::errors::SessionError;
use crate::sessions::models::SessionConfig;
use crate::storage::interface::ISessionStorage;
use crate::storage::sessions::HashMapSessionsStorage;
use std::sync::Arc;


#[derive(Clone)]
pub struct AppContext<SS: ISessionStorage> {
    pub sessions: SS,
    pub locations: Arc<dyn LocationProvider>,
    /// Applied to every new session, the client may only change the number of rounds.
    pub defaults: SessionConfig,
}

pub struct RequestContext {
    pub session_id: String,
}

pub fn init(
    args: &Args,
    locations: Arc<dyn LocationProvider>,
) -> Result<AppContext<HashMapSessionsStorage>, SessionError> {
    let scoring = ScoringConfig {
        max_score: args.max_score,
        policy: ScoringPolicy::from_kind(args.scoring_policy, args.zero_score_distance_km),
    };
    let defaults = SessionConfig::new(args.total_rounds, scoring)?;
    tracing::info!(
        total_rounds = defaults.total_rounds,
        max_score = defaults.scoring.max_score,
        "Initialized the application context."
    );
    Ok(AppContext {
        sessions: HashMapSessionsStorage::default(),
        locations,
        defaults,
    })
}
