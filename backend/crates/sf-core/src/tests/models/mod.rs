mod identity_record;
mod profile_draft;
mod registration_candidate;
