//! Profile editor state machine.
//!
//! The record is loaded once, edited as an in-memory draft and submitted
//! wholesale. Every operation takes `&mut self`, so transitions are
//! serialised and a save cannot overlap another save. Operations invoked
//! from a state that does not allow them fail with `InvalidTransition` and
//! leave the state untouched.
//!
//! Two output channels exist for the front end: blocking notices (an
//! ordered log drained with `drain_notices`) and a single inline message.

use crate::client::error::{FETCH_FAILED_MESSAGE, MISSING_SESSION_MESSAGE, SAVE_FAILED_MESSAGE};
use crate::{
    CliClientResult, ClientError, EditableField, EditorState, ProfileBackend, SessionContext,
};

use sf_core::{Profile, ProfileDraft, encode_image_data_url};

use std::mem;
use std::panic::Location;

use error_location::ErrorLocation;
use log::{debug, info, warn};

pub const PROFILE_SAVED_NOTICE: &str = "Profile updated successfully!";
pub const PASSWORD_CHANGED_NOTICE: &str = "Password updated. Please log in again.";

pub struct ProfileEditor<B: ProfileBackend> {
    backend: B,
    session: SessionContext,
    state: EditorState,
    notices: Vec<String>,
    inline_message: Option<String>,
}

impl<B: ProfileBackend> ProfileEditor<B> {
    pub fn new(backend: B, session: SessionContext) -> Self {
        Self {
            backend,
            session,
            state: EditorState::Loading,
            notices: Vec::new(),
            inline_message: None,
        }
    }

    pub fn state(&self) -> &EditorState {
        &self.state
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn inline_message(&self) -> Option<&str> {
        self.inline_message.as_deref()
    }

    /// Take all pending notices, oldest first
    pub fn drain_notices(&mut self) -> Vec<String> {
        mem::take(&mut self.notices)
    }

    /// Record currently shown: the loaded record, or the pre-edit snapshot
    pub fn record(&self) -> Option<&Profile> {
        match self.state {
            EditorState::Viewing { ref record } => Some(record),
            EditorState::Editing { ref snapshot, .. } => Some(snapshot),
            _ => None,
        }
    }

    pub fn draft(&self) -> Option<&ProfileDraft> {
        match self.state {
            EditorState::Editing { ref draft, .. } => Some(draft),
            _ => None,
        }
    }

    /// Image to display: the draft's while editing, else the record's
    pub fn preview(&self) -> Option<&str> {
        match self.state {
            EditorState::Viewing { ref record } => record.profile_image.as_deref(),
            EditorState::Editing { ref draft, .. } => draft.profile_image.as_deref(),
            _ => None,
        }
    }

    #[track_caller]
    fn invalid(&self, operation: &'static str) -> ClientError {
        ClientError::InvalidTransition {
            state: self.state.name(),
            operation,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// `Loading -> Viewing`, or `Loading -> Unauthenticated` without a session.
    ///
    /// A failed fetch stays in `Loading` so the load can be retried.
    pub async fn load(&mut self) -> CliClientResult<()> {
        if !matches!(self.state, EditorState::Loading) {
            return Err(self.invalid("load"));
        }

        let Some(email) = self.session.identity().map(String::from) else {
            warn!("Profile requested without a session");
            self.state = EditorState::Unauthenticated;
            self.notices.push(MISSING_SESSION_MESSAGE.to_string());
            return Err(ClientError::MissingSession {
                location: ErrorLocation::from(Location::caller()),
            });
        };

        match self.backend.fetch_profile(&email).await {
            Ok(record) => {
                debug!("Profile loaded for {}", email);
                self.inline_message = None;
                self.state = EditorState::Viewing { record };
                Ok(())
            }
            Err(e) => {
                self.inline_message = Some(if e.is_transport() {
                    FETCH_FAILED_MESSAGE.to_string()
                } else {
                    e.user_message()
                });
                Err(e)
            }
        }
    }

    /// `Viewing -> Editing` with a fresh draft copied from the record
    pub fn begin_edit(&mut self) -> CliClientResult<()> {
        let EditorState::Viewing { ref record } = self.state else {
            return Err(self.invalid("edit"));
        };

        let snapshot = record.clone();
        let draft = ProfileDraft::from(&snapshot);
        self.inline_message = None;
        self.state = EditorState::Editing { snapshot, draft };
        Ok(())
    }

    /// Change one draft field; nothing is sent
    pub fn set_field(&mut self, field: EditableField, value: &str) -> CliClientResult<()> {
        let operation = "change a field";
        match self.state {
            EditorState::Editing { ref mut draft, .. } => {
                field.apply(draft, value);
                Ok(())
            }
            _ => Err(self.invalid(operation)),
        }
    }

    /// Replace the draft image with `bytes` encoded as a data URL.
    ///
    /// Non-image MIME types are rejected and leave the draft unchanged.
    pub fn attach_image(&mut self, mime: &str, bytes: &[u8]) -> CliClientResult<()> {
        if !matches!(self.state, EditorState::Editing { .. }) {
            return Err(self.invalid("attach an image"));
        }

        let data_url = match encode_image_data_url(mime, bytes) {
            Ok(url) => url,
            Err(e) => {
                let error = ClientError::from(e);
                self.inline_message = Some(error.user_message());
                return Err(error);
            }
        };

        if let EditorState::Editing { ref mut draft, .. } = self.state {
            draft.profile_image = Some(data_url);
        }
        Ok(())
    }

    /// `Editing -> Viewing`, discarding the draft. No network call.
    pub fn cancel(&mut self) -> CliClientResult<()> {
        if !matches!(self.state, EditorState::Editing { .. }) {
            return Err(self.invalid("cancel"));
        }

        if let EditorState::Editing { snapshot, .. } =
            mem::replace(&mut self.state, EditorState::Loading)
        {
            self.state = EditorState::Viewing { record: snapshot };
        }
        self.inline_message = None;
        Ok(())
    }

    /// Submit the whole draft.
    ///
    /// On success with a changed credential the session is cleared and the
    /// editor ends `Unauthenticated`; otherwise the saved draft becomes the
    /// viewed record. On failure the editor stays `Editing` with the draft
    /// untouched.
    pub async fn save(&mut self) -> CliClientResult<()> {
        let EditorState::Editing {
            ref snapshot,
            ref draft,
        } = self.state
        else {
            return Err(self.invalid("save"));
        };

        // Escaped copy is what goes on the wire; the held draft stays as typed
        let payload = draft.escaped();
        let saved = payload.promote(snapshot);
        let credential_changed = draft.credential_changed();

        match self.backend.save_profile(&payload).await {
            Ok(outcome) => {
                self.notices.push(PROFILE_SAVED_NOTICE.to_string());
                self.inline_message = None;

                if credential_changed || outcome.credential_changed {
                    info!("Credential changed, ending session");
                    self.notices.push(PASSWORD_CHANGED_NOTICE.to_string());
                    self.state = EditorState::Unauthenticated;
                    self.session.clear()?;
                } else {
                    self.state = EditorState::Viewing { record: saved };
                }
                Ok(())
            }
            Err(e) => {
                self.notices.push(if e.is_transport() {
                    SAVE_FAILED_MESSAGE.to_string()
                } else {
                    e.user_message()
                });
                Err(e)
            }
        }
    }
}
