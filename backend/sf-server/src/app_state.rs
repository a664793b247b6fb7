use sf_auth::CredentialHasher;
use sf_core::FieldLimits;

use std::sync::Arc;

use sqlx::SqlitePool;

/// Shared handler state
#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
    pub hasher: Arc<CredentialHasher>,
    pub limits: FieldLimits,
}
