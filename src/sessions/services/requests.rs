use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSessionRequest {
    /// Falls back to the server default when missing.
    #[serde(default)]
    pub total_rounds: Option<u32>,
}
