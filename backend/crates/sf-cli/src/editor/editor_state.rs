use sf_core::{Profile, ProfileDraft};

/// Profile editor lifecycle.
///
/// `Loading -> Viewing <-> Editing`, with `Unauthenticated` terminal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditorState {
    Loading,
    Viewing {
        record: Profile,
    },
    /// `snapshot` is the record as loaded; `draft` is the working copy
    Editing {
        snapshot: Profile,
        draft: ProfileDraft,
    },
    Unauthenticated,
}

impl EditorState {
    pub fn name(&self) -> &'static str {
        match self {
            EditorState::Loading => "loading",
            EditorState::Viewing { .. } => "viewing",
            EditorState::Editing { .. } => "editing",
            EditorState::Unauthenticated => "unauthenticated",
        }
    }
}
