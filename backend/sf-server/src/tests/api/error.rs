use crate::ApiError;

use sf_core::CoreError;
use sf_db::DbError;

use std::panic::Location;

use axum::response::IntoResponse;
use error_location::ErrorLocation;
use http::StatusCode;
use http_body_util::BodyExt;

async fn body_json(error: ApiError) -> (StatusCode, serde_json::Value) {
    let response = error.into_response();
    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&body).unwrap())
}

#[tokio::test]
async fn test_not_found_returns_404_with_envelope() {
    let (status, json) = body_json(ApiError::not_found("No profile found for a@x.com")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["success"], false);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["message"], "No profile found for a@x.com");
    assert!(json.get("field").is_none());
}

#[tokio::test]
async fn test_validation_error_returns_400_with_field() {
    let error = ApiError::Validation {
        message: "firstName is required".into(),
        field: Some("firstName".into()),
        location: ErrorLocation::from(Location::caller()),
    };

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["field"], "firstName");
}

#[tokio::test]
async fn test_duplicate_returns_409() {
    let (status, json) = body_json(ApiError::duplicate()).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "DUPLICATE_IDENTITY");
    assert_eq!(json["message"], "Email already registered.");
}

#[tokio::test]
async fn test_core_attachment_error_maps_to_invalid_attachment() {
    let error: ApiError = CoreError::attachment("Invalid profile picture format.").into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "INVALID_ATTACHMENT_FORMAT");
    assert_eq!(json["message"], "Invalid profile picture format.");
}

#[tokio::test]
async fn test_db_duplicate_maps_to_conflict() {
    let error: ApiError = DbError::Duplicate {
        email: "a@x.com".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    assert_eq!(error.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_internal_db_error_hides_details() {
    let error: ApiError = DbError::Migration {
        message: "secret table layout".into(),
        location: ErrorLocation::from(Location::caller()),
    }
    .into();

    let (status, json) = body_json(error).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert!(!json["message"].as_str().unwrap().contains("secret"));
}
