use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("server responded with status {status}")]
    Status {
        status: u16,
        body: Option<serde_json::Value>,
    },

    #[error("failed to decode response: {0}")]
    Decode(String),
}

impl ApiError {
    /// HTTP status of the failed response, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// User-facing message carried in an error payload.
    ///
    /// Accepts both `{"error": "..."}` and `{"error": {"message": "..."}}`.
    pub fn server_message(&self) -> Option<&str> {
        let ApiError::Status {
            body: Some(body), ..
        } = self
        else {
            return None;
        };

        match body.get("error")? {
            serde_json::Value::String(message) => Some(message.as_str()),
            serde_json::Value::Object(fields) => fields.get("message")?.as_str(),
            _ => None,
        }
    }
}
