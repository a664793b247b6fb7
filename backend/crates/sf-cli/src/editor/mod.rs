pub(crate) mod editable_field;
pub(crate) mod editor_state;
pub(crate) mod profile_backend;
pub(crate) mod profile_editor;

pub use editable_field::EditableField;
pub use editor_state::EditorState;
pub use profile_backend::ProfileBackend;
pub use profile_editor::{PASSWORD_CHANGED_NOTICE, PROFILE_SAVED_NOTICE, ProfileEditor};
