use crate::error::ApiError;
use crate::types::PublicConfig;

/// Fallback API location for local development (the Flask backend's default port).
pub const LOCAL_API_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    Local,
    Production,
}

impl AppMode {
    pub fn from_env() -> Self {
        match std::env::var("APP_MODE")
            .unwrap_or_default()
            .to_lowercase()
            .as_str()
        {
            "local" => AppMode::Local,
            _ => AppMode::Production, // Default to production for safety
        }
    }
}

/// Process configuration, read once at server start.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub mode: AppMode,
    pub api_url: String,
}

impl AppConfig {
    /// Read `APP_MODE` and `VERIFY_API_URL`.
    ///
    /// Production requires `VERIFY_API_URL`; local mode falls back to
    /// [`LOCAL_API_URL`].
    pub fn from_env() -> Result<Self, ApiError> {
        let mode = AppMode::from_env();
        let raw = std::env::var("VERIFY_API_URL").ok();
        let api_url = match (raw.as_deref().map(str::trim), mode) {
            (Some(value), _) if !value.is_empty() => value.to_string(),
            (_, AppMode::Local) => LOCAL_API_URL.to_string(),
            (_, AppMode::Production) => {
                return Err(ApiError::Config(
                    "VERIFY_API_URL must be set in production".to_string(),
                ))
            }
        };

        Ok(Self {
            mode,
            api_url: normalize_api_url(&api_url)?,
        })
    }

    pub fn public(&self) -> PublicConfig {
        PublicConfig {
            api_url: self.api_url.clone(),
        }
    }
}

/// Validate an absolute http(s) URL and strip the trailing slash.
pub fn normalize_api_url(value: &str) -> Result<String, ApiError> {
    let trimmed = value.trim();
    let url = reqwest::Url::parse(trimmed)
        .map_err(|e| ApiError::Config(format!("invalid VERIFY_API_URL {trimmed:?}: {e}")))?;

    match url.scheme() {
        "http" | "https" => Ok(trimmed.trim_end_matches('/').to_string()),
        other => Err(ApiError::Config(format!(
            "VERIFY_API_URL must use http or https, got {other}"
        ))),
    }
}
