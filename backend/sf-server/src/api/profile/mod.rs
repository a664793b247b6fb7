#[allow(clippy::module_inception)]
pub mod profile;
pub mod profile_query;
pub mod update_profile_response;
