use crate::geo::models::LatLng;
use crate::locations::models::{Location, LocationClue};
use crate::scoring::{ScoringConfig, ScoringPolicy};
use crate::sessions::consts::{
    DEFAULT_TOTAL_ROUNDS, GEOGRAPHY_MASTER_SHARE, GOOD_EFFORT_SHARE, GREAT_JOB_SHARE,
    MAX_TOTAL_ROUNDS,
};
use crate::sessions::errors::SessionError;
use serde::Serialize;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionState {
    /// Waiting for the location of the current round.
    Loading,
    /// The player is looking for the location.
    Playing,
    /// The guess was scored, the outcome is on display.
    Result,
    /// All rounds were played.
    Finished,
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionConfig {
    pub total_rounds: u32,
    pub scoring: ScoringConfig,
}

impl SessionConfig {
    pub fn new(total_rounds: u32, scoring: ScoringConfig) -> Result<Self, SessionError> {
        if !(1..=MAX_TOTAL_ROUNDS).contains(&total_rounds) {
            return Err(SessionError::InvalidRoundCount {
                requested: total_rounds,
                max: MAX_TOTAL_ROUNDS,
            });
        }
        // The longest game must not overflow the cumulative score.
        if scoring.max_score == 0
            || u64::from(MAX_TOTAL_ROUNDS)
                .checked_mul(scoring.max_score)
                .is_none()
        {
            return Err(SessionError::InvalidMaxScore {
                max_score: scoring.max_score,
            });
        }
        if let ScoringPolicy::Linear {
            zero_score_distance_km,
        } = scoring.policy
        {
            if !zero_score_distance_km.is_finite() || zero_score_distance_km <= 0.0 {
                return Err(SessionError::InvalidZeroScoreDistance {
                    distance_km: zero_score_distance_km,
                });
            }
        }
        Ok(Self {
            total_rounds,
            scoring,
        })
    }

    pub fn with_total_rounds(self, total_rounds: u32) -> Result<Self, SessionError> {
        Self::new(total_rounds, self.scoring)
    }

    pub fn max_possible_score(&self) -> u64 {
        u64::from(self.total_rounds) * self.scoring.max_score
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            total_rounds: DEFAULT_TOTAL_ROUNDS,
            scoring: ScoringConfig::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundResult {
    pub round: u32,
    pub location: Location,
    pub guess: LatLng,
    pub distance_km: f64,
    pub points_awarded: u64,
}

/// Identifies one location fetch. Only the response carrying the ticket of the fetch
/// currently in flight is applied to the session.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct FetchTicket(pub(super) u64);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FetchSlot {
    Idle,
    InFlight(FetchTicket),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FetchOutcome {
    Applied,
    /// The fetch was cancelled or superseded, the session was left untouched.
    Discarded,
}

/// One single-player play-through.
#[derive(Clone, Debug)]
pub struct GameSession {
    pub(super) id: String,
    pub(super) config: SessionConfig,
    pub(super) state: SessionState,
    pub(super) current_round: u32,
    pub(super) cumulative_score: u64,
    pub(super) current_location: Option<Location>,
    pub(super) last_result: Option<RoundResult>,
    pub(super) last_fetch_error: Option<String>,
    pub(super) fetch: FetchSlot,
    pub(super) issued_tickets: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub id: String,
    pub state: SessionState,
    pub current_round: u32,
    pub total_rounds: u32,
    pub cumulative_score: u64,
    pub max_score: u64,
    /// Name and coordinates stay hidden until the guess is scored.
    pub current_location: Option<LocationClue>,
    pub last_result: Option<RoundResult>,
    pub fetch_in_flight: bool,
    pub last_fetch_error: Option<String>,
    pub is_last_round: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSummary {
    pub final_score: u64,
    pub max_possible_score: u64,
    pub rounds_played: u32,
    pub rating: Rating,
    pub message: String,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Rating {
    GeographyMaster,
    GreatJob,
    GoodEffort,
    KeepPracticing,
}

impl Rating {
    pub fn for_score(final_score: u64, max_possible_score: u64) -> Self {
        if max_possible_score == 0 {
            return Self::KeepPracticing;
        }
        let share = final_score as f64 / max_possible_score as f64;
        if share >= GEOGRAPHY_MASTER_SHARE {
            Self::GeographyMaster
        } else if share >= GREAT_JOB_SHARE {
            Self::GreatJob
        } else if share >= GOOD_EFFORT_SHARE {
            Self::GoodEffort
        } else {
            Self::KeepPracticing
        }
    }

    pub fn to_human_readable(&self) -> String {
        match self {
            Self::GeographyMaster => "Excellent! You're a geography master!",
            Self::GreatJob => "Great job! You know your world!",
            Self::GoodEffort => "Good effort! Keep exploring!",
            Self::KeepPracticing => "Keep practicing! The world is waiting to be discovered!",
        }
        .to_string()
    }
}
