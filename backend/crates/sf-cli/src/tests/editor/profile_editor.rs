use crate::tests::editor::{FakeBackend, Failure, ann_lee};
use crate::{
    ClientError, EditableField, EditorState, PASSWORD_CHANGED_NOTICE, PROFILE_SAVED_NOTICE,
    ProfileEditor, SessionContext,
};

use tempfile::TempDir;

fn signed_in() -> SessionContext {
    SessionContext::in_memory(Some("a@x.com".into()))
}

async fn viewing_editor() -> ProfileEditor<FakeBackend> {
    let mut editor = ProfileEditor::new(FakeBackend::with(ann_lee()), signed_in());
    editor.load().await.unwrap();
    editor
}

async fn editing_editor() -> ProfileEditor<FakeBackend> {
    let mut editor = viewing_editor().await;
    editor.begin_edit().unwrap();
    editor
}

#[tokio::test]
async fn given_no_session_when_load_then_unauthenticated_without_fetch() {
    let mut editor = ProfileEditor::new(
        FakeBackend::with(ann_lee()),
        SessionContext::in_memory(None),
    );

    let result = editor.load().await;

    assert!(matches!(result, Err(ClientError::MissingSession { .. })));
    assert_eq!(*editor.state(), EditorState::Unauthenticated);
    assert_eq!(
        editor.drain_notices(),
        vec!["You must be logged in to access this page.".to_string()]
    );
    assert_eq!(editor.backend().fetch_count(), 0);
}

#[tokio::test]
async fn given_session_when_load_then_viewing_fetched_record() {
    let editor = viewing_editor().await;

    assert_eq!(
        *editor.state(),
        EditorState::Viewing { record: ann_lee() }
    );
    assert_eq!(editor.record(), Some(&ann_lee()));
}

#[tokio::test]
async fn given_transport_failure_when_load_then_stays_loading_with_generic_message() {
    // Given
    let backend = FakeBackend::with(ann_lee());
    backend.fail_with(Some(Failure::Transport));
    let mut editor = ProfileEditor::new(backend, signed_in());

    // When
    let result = editor.load().await;

    // Then
    assert!(result.is_err());
    assert_eq!(*editor.state(), EditorState::Loading);
    assert_eq!(
        editor.inline_message(),
        Some("An unexpected error occurred while fetching profile data.")
    );

    // Retry succeeds once the backend recovers
    editor.backend().fail_with(None);
    editor.load().await.unwrap();
    assert_eq!(editor.state().name(), "viewing");
    assert_eq!(editor.inline_message(), None);
}

#[tokio::test]
async fn given_viewing_when_load_again_then_invalid_transition() {
    let mut editor = viewing_editor().await;

    let result = editor.load().await;

    assert!(matches!(result, Err(ClientError::InvalidTransition { .. })));
    assert_eq!(editor.state().name(), "viewing");
    assert_eq!(editor.backend().fetch_count(), 1);
}

#[tokio::test]
async fn given_viewing_when_begin_edit_then_draft_copies_record() {
    let editor = editing_editor().await;

    let draft = editor.draft().unwrap();
    assert_eq!(draft.first_name, "Ann");
    assert_eq!(draft.contact_number.as_deref(), Some("555-0100"));
    assert_eq!(draft.password, None);
}

#[tokio::test]
async fn given_loading_when_edit_or_save_then_invalid_transition_and_state_unchanged() {
    let mut editor = ProfileEditor::new(FakeBackend::with(ann_lee()), signed_in());

    assert!(matches!(
        editor.begin_edit(),
        Err(ClientError::InvalidTransition { .. })
    ));
    assert!(matches!(
        editor.set_field(EditableField::FirstName, "Bea"),
        Err(ClientError::InvalidTransition { .. })
    ));
    assert!(matches!(
        editor.save().await,
        Err(ClientError::InvalidTransition { .. })
    ));
    assert!(matches!(
        editor.cancel(),
        Err(ClientError::InvalidTransition { .. })
    ));
    assert_eq!(*editor.state(), EditorState::Loading);
}

#[tokio::test]
async fn given_edits_when_cancel_then_original_restored_without_network() {
    // Given
    let mut editor = editing_editor().await;
    editor.set_field(EditableField::FirstName, "Bea").unwrap();
    editor.set_field(EditableField::ContactNumber, "").unwrap();
    editor.attach_image("image/png", b"\x89PNG").unwrap();
    let fetches_before = editor.backend().fetch_count();

    // When
    editor.cancel().unwrap();

    // Then
    assert_eq!(
        *editor.state(),
        EditorState::Viewing { record: ann_lee() }
    );
    assert_eq!(editor.preview(), None);
    assert_eq!(editor.backend().fetch_count(), fetches_before);
    assert_eq!(editor.backend().save_count(), 0);
}

#[tokio::test]
async fn given_contact_change_when_save_then_viewing_promoted_draft() {
    // Given
    let mut editor = editing_editor().await;
    editor
        .set_field(EditableField::ContactNumber, "555-0199")
        .unwrap();

    // When
    editor.save().await.unwrap();

    // Then
    let mut expected = ann_lee();
    expected.contact_number = Some("555-0199".into());
    assert_eq!(*editor.state(), EditorState::Viewing { record: expected });
    assert_eq!(editor.drain_notices(), vec![PROFILE_SAVED_NOTICE.to_string()]);
    assert!(editor.session().is_active());
}

#[tokio::test]
async fn given_password_change_when_save_succeeds_then_session_cleared_and_unauthenticated() {
    // Given: a file-backed session
    let temp = TempDir::new().unwrap();
    let mut session = SessionContext::load_from(temp.path()).unwrap();
    session.establish("a@x.com").unwrap();
    let mut editor = ProfileEditor::new(FakeBackend::with(ann_lee()), session);
    editor.load().await.unwrap();
    editor.begin_edit().unwrap();
    editor
        .set_field(EditableField::Password, "NewSecret456!")
        .unwrap();

    // When
    editor.save().await.unwrap();

    // Then
    assert_eq!(*editor.state(), EditorState::Unauthenticated);
    assert!(!editor.session().is_active());
    assert!(!temp.path().join("session.json").exists());
    assert_eq!(
        editor.drain_notices(),
        vec![
            PROFILE_SAVED_NOTICE.to_string(),
            PASSWORD_CHANGED_NOTICE.to_string()
        ]
    );
}

#[tokio::test]
async fn given_transport_failure_when_save_then_still_editing_with_draft_retained() {
    // Given
    let mut editor = editing_editor().await;
    editor.set_field(EditableField::FirstName, "Bea").unwrap();
    editor.backend().fail_with(Some(Failure::Transport));
    let draft_before = editor.draft().cloned();

    // When
    let result = editor.save().await;

    // Then
    assert!(result.is_err());
    assert_eq!(editor.state().name(), "editing");
    assert_eq!(editor.draft().cloned(), draft_before);
    assert_eq!(
        editor.drain_notices(),
        vec!["An error occurred while saving profile data.".to_string()]
    );
}

#[tokio::test]
async fn given_rejected_save_then_message_distinct_from_transport_failure() {
    let mut editor = editing_editor().await;
    editor.backend().fail_with(Some(Failure::Rejected));

    let result = editor.save().await;

    assert!(matches!(result, Err(ClientError::ValidationFailure { .. })));
    assert_eq!(
        editor.drain_notices(),
        vec!["firstName is required".to_string()]
    );
    assert_eq!(editor.state().name(), "editing");
}

#[tokio::test]
async fn given_markup_in_draft_when_save_then_escaped_on_wire_but_not_in_memory() {
    let mut editor = editing_editor().await;
    editor.set_field(EditableField::FirstName, "<Bea>").unwrap();
    editor.backend().fail_with(Some(Failure::Transport));

    let _ = editor.save().await;

    let sent = editor.backend().saves.lock().unwrap()[0].clone();
    assert_eq!(sent.first_name, "&lt;Bea&gt;");
    assert_eq!(editor.draft().unwrap().first_name, "<Bea>");
}

#[tokio::test]
async fn given_image_upload_when_editing_then_preview_updates() {
    let mut editor = editing_editor().await;

    editor.attach_image("image/png", b"\x89PNG").unwrap();

    assert_eq!(editor.preview(), Some("data:image/png;base64,iVBORw=="));
}

#[tokio::test]
async fn given_non_image_upload_when_editing_then_rejected_and_draft_unchanged() {
    let mut editor = editing_editor().await;

    let result = editor.attach_image("application/pdf", b"%PDF");

    assert!(matches!(
        result,
        Err(ClientError::InvalidAttachmentFormat { .. })
    ));
    assert_eq!(editor.preview(), None);
    assert!(editor.inline_message().is_some());
}

#[tokio::test]
async fn given_unauthenticated_when_any_operation_then_invalid_transition() {
    let mut editor = ProfileEditor::new(
        FakeBackend::with(ann_lee()),
        SessionContext::in_memory(None),
    );
    let _ = editor.load().await;

    assert!(matches!(
        editor.load().await,
        Err(ClientError::InvalidTransition { .. })
    ));
    assert!(matches!(
        editor.begin_edit(),
        Err(ClientError::InvalidTransition { .. })
    ));
    assert_eq!(*editor.state(), EditorState::Unauthenticated);
}
