//! Registration handler

use crate::{ApiError, ApiJson, ApiResult, AppState, RegisterResponse, RegisteredIdentity};

use sf_core::RegistrationCandidate;
use sf_db::IdentityRepository;

use axum::{Json, extract::State, http::StatusCode};
use log::{info, warn};

/// POST /register
///
/// Validate, reject duplicates, hash the credential, persist. Exactly one
/// record is written on success and none on any failure.
pub async fn register(
    State(state): State<AppState>,
    ApiJson(candidate): ApiJson<RegistrationCandidate>,
) -> ApiResult<(StatusCode, Json<RegisterResponse>)> {
    // Limits apply to what is stored
    let candidate = candidate.escaped();
    candidate.validate(&state.limits)?;

    let repo = IdentityRepository::new(state.pool.clone());
    if repo.exists(&candidate.email).await? {
        warn!("Registration rejected, email already registered");
        return Err(ApiError::duplicate());
    }

    let credential_hash = state.hasher.hash_blocking(candidate.password.clone()).await?;

    let email = candidate.email.clone();
    let record = candidate.into_record(credential_hash);

    // A concurrent registration can still win the race; the UNIQUE
    // constraint surfaces it as DbError::Duplicate
    let id = repo.create(&record).await?;

    info!("Registered identity {}", id);

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            success: true,
            data: RegisteredIdentity {
                id: id.to_string(),
                email,
            },
        }),
    ))
}
