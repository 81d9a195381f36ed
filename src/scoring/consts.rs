pub const DEFAULT_MAX_SCORE: u64 = 5000;
/// Roughly the antipodal distance on Earth.
pub const DEFAULT_ZERO_SCORE_DISTANCE_KM: f64 = 20_000.0;

/// `(upper distance bound in km, share of the max score)`, checked in order. Anything
/// beyond the last bound scores zero.
pub const SCORE_TIERS: [(f64, f64); 3] = [(1_000.0, 0.95), (5_000.0, 0.75), (10_000.0, 0.50)];
