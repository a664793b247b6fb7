use serde::{Deserialize, Serialize};

/// Body for a successful `PUT /profile`
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileResponse {
    pub success: bool,
    pub message: String,
    /// The stored credential hash was replaced
    pub credential_changed: bool,
}
