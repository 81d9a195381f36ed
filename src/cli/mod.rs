use crate::locations::consts::{DEFAULT_PEXELS_API_URL, DEFAULT_UNSPLASH_API_URL};
use crate::locations::ProviderKind;
use crate::scoring::consts::{DEFAULT_MAX_SCORE, DEFAULT_ZERO_SCORE_DISTANCE_KM};
use crate::scoring::ScoringPolicyKind;
use crate::sessions::consts::DEFAULT_TOTAL_ROUNDS;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Parser)]
#[command(version, about = "Geography guessing game server")]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    /// NDJSON file with one location seed per line.
    #[arg(long)]
    #[arg(default_value = "locations.example.ndjson")]
    pub locations: PathBuf,
    #[arg(long, value_enum)]
    #[arg(default_value_t = ProviderKind::Catalogue)]
    pub location_provider: ProviderKind,
    #[arg(long)]
    #[arg(default_value = DEFAULT_UNSPLASH_API_URL)]
    pub unsplash_api_url: Url,
    #[arg(long)]
    #[arg(default_value = DEFAULT_PEXELS_API_URL)]
    pub pexels_api_url: Url,
    /// Rounds per game, unless the client asks for another number.
    #[arg(long)]
    #[arg(default_value_t = DEFAULT_TOTAL_ROUNDS)]
    pub total_rounds: u32,
    /// Points awarded for a perfect guess.
    #[arg(long)]
    #[arg(default_value_t = DEFAULT_MAX_SCORE)]
    pub max_score: u64,
    #[arg(long, value_enum)]
    #[arg(default_value_t = ScoringPolicyKind::Linear)]
    pub scoring_policy: ScoringPolicyKind,
    /// Distance at which the linear policy stops awarding points.
    #[arg(long)]
    #[arg(default_value_t = DEFAULT_ZERO_SCORE_DISTANCE_KM)]
    pub zero_score_distance_km: f64,
    /// Comma-separated list of origins allowed to call the API from a browser.
    #[arg(long, value_delimiter = ',')]
    #[arg(default_value = "http://127.0.0.1:3000,http://localhost:3000")]
    pub allowed_origins: Vec<String>,
}
