use api::{ApiError, ApiReply, VerificationApi, VerifyClient};
use async_trait::async_trait;

/// [`VerificationApi`] backed by the real backend.
///
/// The API location is fetched from the server on each call, so a page that
/// never makes a call never touches the network.
#[derive(Clone, Copy, Default)]
pub struct RemoteVerificationApi;

impl RemoteVerificationApi {
    async fn client(&self) -> Result<VerifyClient, ApiError> {
        let config = api::public_config()
            .await
            .map_err(|e| ApiError::Config(e.to_string()))?;
        Ok(VerifyClient::new(config.api_url))
    }
}

#[async_trait(?Send)]
impl VerificationApi for RemoteVerificationApi {
    async fn send_verification_email(&self, email: &str) -> Result<ApiReply, ApiError> {
        self.client().await?.send_verification_email(email).await
    }

    async fn confirm_verification(&self, token: &str) -> Result<ApiReply, ApiError> {
        self.client().await?.confirm_verification(token).await
    }

    async fn delete_account(&self, token: &str) -> Result<ApiReply, ApiError> {
        self.client().await?.delete_account(token).await
    }
}
