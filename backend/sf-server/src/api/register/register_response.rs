use serde::{Deserialize, Serialize};

/// Acknowledgment body for `POST /register` (201)
#[derive(Debug, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub success: bool,
    pub data: RegisteredIdentity,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RegisteredIdentity {
    /// Store-assigned reference
    pub id: String,
    pub email: String,
}
