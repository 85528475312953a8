//! Backend connection configuration read from the environment.

use crate::dao::postgrest::{GatewayError, GatewayResult};

/// Environment variable carrying the backend project URL.
pub const BACKEND_URL_ENV: &str = "SUPABASE_URL";
/// Environment variable carrying the anonymous API key.
pub const BACKEND_KEY_ENV: &str = "SUPABASE_ANON_KEY";

/// Runtime configuration describing how to reach the hosted backend.
#[derive(Debug, Clone)]
pub struct BackendConfig {
    /// Project base URL, without the `/rest/v1` suffix.
    pub base_url: String,
    /// Anonymous API key sent with every request.
    pub api_key: String,
}

impl BackendConfig {
    /// Construct a configuration from an explicit URL and key.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Build a configuration by reading the expected environment variables.
    pub fn from_env() -> GatewayResult<Self> {
        let base_url = std::env::var(BACKEND_URL_ENV).map_err(|_| GatewayError::MissingEnvVar {
            var: BACKEND_URL_ENV,
        })?;
        let api_key = std::env::var(BACKEND_KEY_ENV).map_err(|_| GatewayError::MissingEnvVar {
            var: BACKEND_KEY_ENV,
        })?;

        Ok(Self::new(base_url, api_key))
    }
}
