#[allow(clippy::module_inception)]
pub mod register;
pub mod register_response;
