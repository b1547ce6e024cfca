use crate::error::ApiError;
use crate::types::{
    ApiReply, SendVerificationRequest, SessionGrant, VerificationStatus, VerificationStatusReply,
    VerifiedUserRequest,
};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tracing::debug;

/// Calls the verification pages depend on.
///
/// Every call is a single attempt: no timeout, no retry.
#[async_trait(?Send)]
pub trait VerificationApi {
    async fn send_verification_email(&self, email: &str) -> Result<ApiReply, ApiError>;
    async fn confirm_verification(&self, token: &str) -> Result<ApiReply, ApiError>;
    async fn delete_account(&self, token: &str) -> Result<ApiReply, ApiError>;
}

/// HTTP client for the `/verify` endpoints of the marketplace backend.
#[derive(Debug, Clone)]
pub struct VerifyClient {
    http: reqwest::Client,
    base_url: String,
}

impl VerifyClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_http(reqwest::Client::new(), base_url)
    }

    pub fn with_http(http: reqwest::Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Exchange a verified email address for a session token.
    pub async fn issue_session_token(&self, email: &str) -> Result<SessionGrant, ApiError> {
        let url = self.url("/verify/get-token");
        debug!("verify_client.issue_session_token: email_len={}", email.len());
        let response = self
            .http
            .post(url)
            .json(&SendVerificationRequest {
                email: email.to_string(),
            })
            .send()
            .await?;
        decode(into_reply(response).await?)
    }

    /// Look up the verification status of the account a token belongs to.
    pub async fn verification_status(&self, token: &str) -> Result<VerificationStatus, ApiError> {
        let url = self.url("/verify/get-verified-user");
        debug!("verify_client.verification_status: token_len={}", token.len());
        let response = self
            .http
            .post(url)
            .json(&VerifiedUserRequest {
                token: token.to_string(),
            })
            .send()
            .await?;
        let reply: VerificationStatusReply = decode(into_reply(response).await?)?;
        Ok(reply.verification_status)
    }

    async fn get_with_token(&self, path: &str, token: &str) -> Result<ApiReply, ApiError> {
        let response = self
            .http
            .get(self.url(path))
            .query(&[("token", token)])
            .send()
            .await?;
        into_reply(response).await
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }
}

#[async_trait(?Send)]
impl VerificationApi for VerifyClient {
    async fn send_verification_email(&self, email: &str) -> Result<ApiReply, ApiError> {
        debug!(
            "verify_client.send_verification_email: email_len={}",
            email.len()
        );
        let response = self
            .http
            .post(self.url("/verify/send"))
            .json(&SendVerificationRequest {
                email: email.to_string(),
            })
            .send()
            .await?;
        into_reply(response).await
    }

    async fn confirm_verification(&self, token: &str) -> Result<ApiReply, ApiError> {
        debug!("verify_client.confirm_verification: token_len={}", token.len());
        self.get_with_token("/verify/confirm", token).await
    }

    async fn delete_account(&self, token: &str) -> Result<ApiReply, ApiError> {
        debug!("verify_client.delete_account: token_len={}", token.len());
        self.get_with_token("/verify/delete-account", token).await
    }
}

pub(crate) fn join_url(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

async fn into_reply(response: reqwest::Response) -> Result<ApiReply, ApiError> {
    let status = response.status().as_u16();
    let ok = response.status().is_success();
    let text = response.text().await?;
    let body = serde_json::from_str::<serde_json::Value>(&text).ok();

    if ok {
        Ok(ApiReply {
            status,
            body: body.unwrap_or(serde_json::Value::Null),
        })
    } else {
        debug!("verify_client: status={} body_len={}", status, text.len());
        Err(ApiError::Status { status, body })
    }
}

fn decode<T: DeserializeOwned>(reply: ApiReply) -> Result<T, ApiError> {
    serde_json::from_value(reply.body).map_err(|e| ApiError::Decode(e.to_string()))
}
