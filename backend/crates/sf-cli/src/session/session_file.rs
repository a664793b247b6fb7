use serde::{Deserialize, Serialize};

pub const SESSION_FILENAME: &str = "session.json";

/// On-disk form of the session identity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct SessionFile {
    pub(crate) email: String,
    /// RFC 3339
    pub(crate) established_at: String,
}
