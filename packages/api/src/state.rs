use crate::config::{AppConfig, AppMode};
use std::sync::{Arc, OnceLock};

/// Server-side process state.
#[derive(Debug)]
pub struct AppState {
    pub config: AppConfig,
}

impl AppState {
    /// Load configuration from the environment and log what was picked up.
    ///
    /// In local mode a `.env` file is read first if one exists.
    pub fn from_env() -> anyhow::Result<Self> {
        if AppMode::from_env() == AppMode::Local {
            match dotenvy::dotenv() {
                Ok(path) => tracing::info!("Loaded environment from {}", path.display()),
                Err(err) => tracing::debug!("No .env file loaded: {}", err),
            }
        }

        let config = AppConfig::from_env()?;

        match config.mode {
            AppMode::Local => tracing::info!("🔧 App Mode: LOCAL"),
            AppMode::Production => tracing::info!("🚀 App Mode: PRODUCTION"),
        }
        tracing::info!("   Verification API: {}", config.api_url);

        Ok(Self { config })
    }

    /// Set the global AppState instance
    ///
    /// This should be called once at server startup.
    /// Panics if called more than once.
    pub fn set_global(state: Arc<Self>) {
        STATE
            .set(state)
            .expect("AppState::set_global called more than once");
    }

    /// Get the global AppState instance, if startup installed one.
    pub fn try_global() -> Option<Arc<Self>> {
        STATE.get().cloned()
    }
}

static STATE: OnceLock<Arc<AppState>> = OnceLock::new();
