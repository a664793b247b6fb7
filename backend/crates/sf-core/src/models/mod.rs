pub mod identity_record;
pub mod profile;
pub mod profile_draft;
pub mod registration_candidate;
