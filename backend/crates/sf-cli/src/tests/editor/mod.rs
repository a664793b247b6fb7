mod editable_field;
mod profile_editor;

use crate::{CliClientResult, ClientError, ProfileBackend, SaveOutcome};

use sf_core::{Profile, ProfileDraft};

use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;

#[derive(Debug, Clone, Copy)]
pub(crate) enum Failure {
    Transport,
    Rejected,
}

impl Failure {
    fn error(self) -> ClientError {
        match self {
            Failure::Transport => ClientError::transport("connection refused"),
            Failure::Rejected => ClientError::validation("firstName is required", Some("firstName")),
        }
    }
}

/// In-memory backend that records every call
#[derive(Default)]
pub(crate) struct FakeBackend {
    pub(crate) stored: Mutex<Option<Profile>>,
    pub(crate) failure: Mutex<Option<Failure>>,
    pub(crate) fetches: AtomicUsize,
    pub(crate) saves: Mutex<Vec<ProfileDraft>>,
}

impl FakeBackend {
    pub(crate) fn with(profile: Profile) -> Self {
        Self {
            stored: Mutex::new(Some(profile)),
            ..Self::default()
        }
    }

    pub(crate) fn fail_with(&self, failure: Option<Failure>) {
        *self.failure.lock().unwrap() = failure;
    }

    pub(crate) fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    pub(crate) fn save_count(&self) -> usize {
        self.saves.lock().unwrap().len()
    }
}

#[async_trait]
impl ProfileBackend for FakeBackend {
    async fn fetch_profile(&self, _email: &str) -> CliClientResult<Profile> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        if let Some(failure) = *self.failure.lock().unwrap() {
            return Err(failure.error());
        }
        self.stored
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| ClientError::transport("no such profile"))
    }

    async fn save_profile(&self, draft: &ProfileDraft) -> CliClientResult<SaveOutcome> {
        self.saves.lock().unwrap().push(draft.clone());
        if let Some(failure) = *self.failure.lock().unwrap() {
            return Err(failure.error());
        }
        let mut stored = self.stored.lock().unwrap();
        if let Some(previous) = stored.as_ref() {
            *stored = Some(draft.promote(previous));
        }
        Ok(SaveOutcome {
            message: "Profile updated successfully!".into(),
            credential_changed: draft.credential_changed(),
        })
    }
}

pub(crate) fn ann_lee() -> Profile {
    Profile {
        id: "00000000-0000-0000-0000-000000000001".into(),
        first_name: "Ann".into(),
        last_name: "Lee".into(),
        email: "a@x.com".into(),
        contact_number: Some("555-0100".into()),
        profile_image: None,
    }
}
