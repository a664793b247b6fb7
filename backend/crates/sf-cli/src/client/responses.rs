use serde::Deserialize;

/// `data` of a successful registration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RegisterAck {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RegisterEnvelope {
    pub(crate) data: RegisterAck,
}

/// Body of a successful profile save
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveOutcome {
    pub message: String,
    #[serde(default)]
    pub credential_changed: bool,
}

/// Failure envelope shared by every endpoint
#[derive(Debug, Deserialize)]
pub(crate) struct ErrorEnvelope {
    pub(crate) message: String,
    #[serde(default)]
    pub(crate) code: Option<String>,
    #[serde(default)]
    pub(crate) field: Option<String>,
}
