use crate::client::responses::{ErrorEnvelope, RegisterEnvelope};
use crate::{CliClientResult, ClientError, RegisterAck, SaveOutcome};

use sf_core::{Profile, ProfileDraft, RegistrationCandidate};

use std::panic::Location;

use error_location::ErrorLocation;
use reqwest::{Client as ReqwestClient, Method, StatusCode};
use serde::de::DeserializeOwned;

/// HTTP client for the sf-server REST API
#[derive(Clone)]
pub struct Client {
    pub base_url: String,
    client: ReqwestClient,
}

impl Client {
    /// `base_url` e.g. "http://127.0.0.1:8000"
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: ReqwestClient::new(),
        }
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let url = format!("{}{}", self.base_url, path);
        self.client.request(method, &url)
    }

    /// Send, then decode a 2xx body as `T` or map the failure envelope
    async fn execute<T: DeserializeOwned>(
        &self,
        req: reqwest::RequestBuilder,
    ) -> CliClientResult<T> {
        let response = req.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        if status.is_success() {
            return Ok(serde_json::from_slice(&bytes)?);
        }

        log::debug!("Request failed with status {}", status);

        match serde_json::from_slice::<ErrorEnvelope>(&bytes) {
            Ok(envelope) => Err(Self::map_failure(status, envelope)),
            Err(_) => Err(ClientError::transport(format!(
                "Server returned {}",
                status
            ))),
        }
    }

    #[track_caller]
    fn map_failure(status: StatusCode, envelope: ErrorEnvelope) -> ClientError {
        let location = ErrorLocation::from(Location::caller());
        let code = envelope.code.unwrap_or_default();

        match status {
            StatusCode::CONFLICT => ClientError::DuplicateIdentity {
                message: envelope.message,
                location,
            },
            StatusCode::BAD_REQUEST if code == "INVALID_ATTACHMENT_FORMAT" => {
                ClientError::InvalidAttachmentFormat {
                    message: envelope.message,
                    location,
                }
            }
            StatusCode::BAD_REQUEST => ClientError::ValidationFailure {
                message: envelope.message,
                field: envelope.field,
                location,
            },
            _ => ClientError::Api {
                status: status.as_u16(),
                code,
                message: envelope.message,
                location,
            },
        }
    }

    /// POST /register
    pub async fn register(&self, candidate: &RegistrationCandidate) -> CliClientResult<RegisterAck> {
        let req = self.request(Method::POST, "/register").json(candidate);
        let envelope: RegisterEnvelope = self.execute(req).await?;
        Ok(envelope.data)
    }

    /// GET /profile?email=
    pub async fn fetch_profile(&self, email: &str) -> CliClientResult<Profile> {
        let mut url = reqwest::Url::parse(&format!("{}/profile", self.base_url))
            .map_err(|e| ClientError::transport(format!("Invalid server URL: {}", e)))?;
        url.query_pairs_mut().append_pair("email", email);

        let req = self.client.request(Method::GET, url);
        self.execute(req).await
    }

    /// PUT /profile
    pub async fn save_profile(&self, draft: &ProfileDraft) -> CliClientResult<SaveOutcome> {
        let req = self.request(Method::PUT, "/profile").json(draft);
        self.execute(req).await
    }
}
