use serde::Deserialize;

/// Query string for `GET /profile`
#[derive(Debug, Deserialize)]
pub struct ProfileQuery {
    /// Identity key; optional here so a missing key gets the JSON error body
    #[serde(default)]
    pub email: Option<String>,
}
