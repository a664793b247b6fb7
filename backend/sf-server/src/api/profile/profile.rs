//! Profile REST API handlers

use crate::{ApiError, ApiJson, ApiResult, AppState, ProfileQuery, UpdateProfileResponse};

use sf_core::{Profile, ProfileDraft, escape_markup};
use sf_db::IdentityRepository;

use std::panic::Location;

use axum::{
    Json,
    extract::{Query, State},
};
use error_location::ErrorLocation;
use log::info;

pub const PROFILE_UPDATED_MESSAGE: &str = "Profile updated successfully!";

/// GET /profile?email=<identity-key>
///
/// The key is escaped the same way stored emails are, so a raw address
/// and its escaped form find the same record.
pub async fn get_profile(
    State(state): State<AppState>,
    Query(query): Query<ProfileQuery>,
) -> ApiResult<Json<Profile>> {
    let email = query
        .email
        .as_deref()
        .map(escape_markup)
        .filter(|email| !email.is_empty())
        .ok_or_else(|| ApiError::Validation {
            message: "email query parameter is required".to_string(),
            field: Some("email".to_string()),
            location: ErrorLocation::from(Location::caller()),
        })?;

    let repo = IdentityRepository::new(state.pool.clone());
    let record = repo
        .find_by_email(&email)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("No profile found for {}", email)))?;

    Ok(Json(record.to_profile()))
}

/// PUT /profile
///
/// Full-record replace keyed by the draft's email. Absent optional fields
/// clear the stored value. A non-empty password replaces the credential
/// hash; otherwise the stored hash is kept.
pub async fn update_profile(
    State(state): State<AppState>,
    ApiJson(draft): ApiJson<ProfileDraft>,
) -> ApiResult<Json<UpdateProfileResponse>> {
    let draft = draft.escaped();
    draft.validate(&state.limits)?;

    let repo = IdentityRepository::new(state.pool.clone());
    let existing = repo
        .find_by_email(&draft.email)
        .await?
        .ok_or_else(|| ApiError::not_found(format!("No profile found for {}", draft.email)))?;

    let new_hash = match draft.password.as_deref().filter(|p| !p.is_empty()) {
        Some(password) => Some(state.hasher.hash_blocking(password.to_string()).await?),
        None => None,
    };
    let credential_changed = new_hash.is_some();

    repo.replace(&existing.replaced_by(&draft, new_hash)).await?;

    info!(
        "Profile {} replaced (credential changed: {})",
        existing.id, credential_changed
    );

    Ok(Json(UpdateProfileResponse {
        success: true,
        message: PROFILE_UPDATED_MESSAGE.to_string(),
        credential_changed,
    }))
}
