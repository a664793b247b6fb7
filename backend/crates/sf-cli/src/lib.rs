//! sf-cli library
//!
//! HTTP client, session context, registration form and the profile editor
//! state machine. The `sf` binary is a thin front end over these.

pub(crate) mod attachment_file;
pub(crate) mod client;
pub(crate) mod editor;
pub(crate) mod registration_form;
pub(crate) mod session;

#[cfg(test)]
mod tests;

pub use attachment_file::{mime_for_path, read_attachment};
pub use client::{CliClientResult, Client, ClientError, RegisterAck, SaveOutcome};
pub use editor::{
    EditableField, EditorState, PASSWORD_CHANGED_NOTICE, PROFILE_SAVED_NOTICE, ProfileBackend,
    ProfileEditor,
};
pub use registration_form::{PASSWORD_MISMATCH_MESSAGE, REGISTERED_MESSAGE, RegistrationForm};
pub use session::SessionContext;
