/// Shown to the player when the media source doesn't provide a usable description.
pub const GENERIC_CLUE: &str = "A beautiful location waiting to be discovered.";

pub const DEFAULT_UNSPLASH_API_URL: &str = "https://api.unsplash.com";
pub const DEFAULT_PEXELS_API_URL: &str = "https://api.pexels.com/videos";

pub const UNSPLASH_RESULTS_PER_PAGE: &str = "30";
pub const PEXELS_RESULTS_PER_PAGE: &str = "15";
