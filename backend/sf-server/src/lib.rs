pub mod api;
pub mod app_state;
pub mod error;
pub mod health;
pub mod logger;
pub mod routes;

#[cfg(test)]
mod tests;

pub use api::{
    error::ApiError,
    error::Result as ApiResult,
    extractors::api_json::ApiJson,
    profile::{
        profile::{get_profile, update_profile},
        profile_query::ProfileQuery,
        update_profile_response::UpdateProfileResponse,
    },
    register::{
        register::register,
        register_response::{RegisterResponse, RegisteredIdentity},
    },
};
pub use app_state::AppState;

pub use crate::routes::build_router;
