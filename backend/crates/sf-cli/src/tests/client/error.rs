use crate::ClientError;

use sf_core::CoreError;

use std::panic::Location;

use error_location::ErrorLocation;

#[test]
fn test_server_side_api_error_is_transport() {
    let error = ClientError::Api {
        status: 500,
        code: "INTERNAL_ERROR".into(),
        message: "Database operation failed".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    assert!(error.is_transport());
}

#[test]
fn test_not_found_api_error_is_not_transport() {
    let error = ClientError::Api {
        status: 404,
        code: "NOT_FOUND".into(),
        message: "No profile found".into(),
        location: ErrorLocation::from(Location::caller()),
    };

    assert!(!error.is_transport());
    assert_eq!(error.user_message(), "No profile found");
}

#[test]
fn test_user_message_omits_location() {
    let error = ClientError::validation("Passwords do not match!", Some("confirmPassword"));

    assert_eq!(error.user_message(), "Passwords do not match!");
    assert!(error.to_string().contains("Passwords do not match!"));
}

#[test]
fn test_core_attachment_error_maps_to_invalid_attachment_format() {
    let error = ClientError::from(CoreError::attachment("Invalid profile picture format."));

    assert!(matches!(error, ClientError::InvalidAttachmentFormat { .. }));
}

#[test]
fn test_missing_session_user_message() {
    let error = ClientError::MissingSession {
        location: ErrorLocation::from(Location::caller()),
    };

    assert_eq!(
        error.user_message(),
        "You must be logged in to access this page."
    );
}
