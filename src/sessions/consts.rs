pub const DEFAULT_TOTAL_ROUNDS: u32 = 5;
pub const MAX_TOTAL_ROUNDS: u32 = 50;

/// A hint is at most this many degrees away from the target.
pub const HINT_MAX_LAT_OFFSET: f64 = 10.0;
pub const HINT_MAX_LNG_OFFSET: f64 = 20.0;

/// Minimal shares of the max possible score for each rating, best first.
pub const GEOGRAPHY_MASTER_SHARE: f64 = 0.8;
pub const GREAT_JOB_SHARE: f64 = 0.6;
pub const GOOD_EFFORT_SHARE: f64 = 0.4;
