use crate::{CliClientResult, Client, SaveOutcome};

use sf_core::{Profile, ProfileDraft};

use async_trait::async_trait;

/// Remote side of the profile editor
#[async_trait]
pub trait ProfileBackend: Send + Sync {
    async fn fetch_profile(&self, email: &str) -> CliClientResult<Profile>;

    async fn save_profile(&self, draft: &ProfileDraft) -> CliClientResult<SaveOutcome>;
}

#[async_trait]
impl ProfileBackend for Client {
    async fn fetch_profile(&self, email: &str) -> CliClientResult<Profile> {
        Client::fetch_profile(self, email).await
    }

    async fn save_profile(&self, draft: &ProfileDraft) -> CliClientResult<SaveOutcome> {
        Client::save_profile(self, draft).await
    }
}
