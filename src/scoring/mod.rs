use clap::ValueEnum;
use consts::{DEFAULT_MAX_SCORE, DEFAULT_ZERO_SCORE_DISTANCE_KM, SCORE_TIERS};
use serde::Serialize;

pub mod consts;

#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoringConfig {
    pub max_score: u64,
    pub policy: ScoringPolicy,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            max_score: DEFAULT_MAX_SCORE,
            policy: ScoringPolicy::Linear {
                zero_score_distance_km: DEFAULT_ZERO_SCORE_DISTANCE_KM,
            },
        }
    }
}

/// How points decay with the distance between the guess and the target.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind")]
pub enum ScoringPolicy {
    /// Full score at zero distance, dropping linearly to nothing at `zero_score_distance_km`.
    Linear {
        #[serde(rename = "zeroScoreDistanceKm")]
        zero_score_distance_km: f64,
    },
    /// Fixed shares of the max score per distance bucket, see `SCORE_TIERS`.
    Tiered,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ScoringPolicyKind {
    Linear,
    Tiered,
}

impl ScoringPolicy {
    pub fn from_kind(kind: ScoringPolicyKind, zero_score_distance_km: f64) -> Self {
        match kind {
            ScoringPolicyKind::Linear => Self::Linear {
                zero_score_distance_km,
            },
            ScoringPolicyKind::Tiered => Self::Tiered,
        }
    }
}

pub fn score_for_distance(distance_km: f64, config: &ScoringConfig) -> u64 {
    if distance_km.is_nan() {
        return 0;
    }
    let distance_km = distance_km.max(0.0);
    let max_score = config.max_score as f64;
    let points = match config.policy {
        ScoringPolicy::Linear {
            zero_score_distance_km,
        } => {
            if zero_score_distance_km <= 0.0 {
                return if distance_km == 0.0 { config.max_score } else { 0 };
            }
            (max_score * (1.0 - distance_km / zero_score_distance_km)).round()
        }
        ScoringPolicy::Tiered => {
            if distance_km == 0.0 {
                return config.max_score;
            }
            SCORE_TIERS
                .iter()
                .find(|(upper_bound_km, _)| distance_km <= *upper_bound_km)
                .map_or(0.0, |(_, share)| (max_score * share).round())
        }
    };
    (points.max(0.0) as u64).min(config.max_score)
}
