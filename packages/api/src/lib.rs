//! Client and shared types for the marketplace verification API.
use dioxus::prelude::*;

pub mod client;
pub mod config;
pub mod error;
pub mod types;

#[cfg(feature = "server")]
pub mod state;

pub use client::{VerificationApi, VerifyClient};
pub use error::ApiError;
pub use types::{ApiReply, PublicConfig, SessionGrant, VerificationStatus, VerifiedUser};

/// Runtime configuration for the browser, so the API location is never compiled in.
#[get("/api/config")]
pub async fn public_config() -> Result<PublicConfig, ServerFnError> {
    #[cfg(feature = "server")]
    tracing::debug!("public_config");
    load_public_config()
}

#[cfg(feature = "server")]
fn load_public_config() -> Result<PublicConfig, ServerFnError> {
    state::AppState::try_global()
        .map(|state| state.config.public())
        .ok_or_else(|| ServerFnError::new("server state not initialized"))
}

#[cfg(not(feature = "server"))]
fn load_public_config() -> Result<PublicConfig, ServerFnError> {
    Err(ServerFnError::new("configuration is only available on the server"))
}
