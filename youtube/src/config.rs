//! Configuration for talking to the YouTube Data API.

use crate::error::{Error, Result};

/// The environment variable holding the YouTube Data API key.
pub const API_KEY_VAR: &str = "YT_API_KEY";

/// Base URL of the YouTube Data API v3.
pub const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3";

/// Everything needed to build a [`YouTubeClient`](crate::YouTubeClient).
///
/// Construct one explicitly with [`ApiConfig::new`], or from the process environment with
/// [`ApiConfig::from_env`].
#[derive(Clone)]
pub struct ApiConfig {
    api_key: String,
    base_url: String,
}

impl ApiConfig {
    /// Creates a configuration that uses `api_key` against the public API endpoint.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::Configuration("API key is empty".to_string()));
        }
        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Loads the API key from [`API_KEY_VAR`].
    ///
    /// A `.env` file in the working directory (or any parent) is read first if one exists, so
    /// the key can live there instead of in the shell environment. A missing `.env` file is not
    /// an error; a missing key is.
    pub fn from_env() -> Result<Self> {
        if let Ok(path) = dotenv::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env file");
        }
        Self::from_key(std::env::var(API_KEY_VAR).ok())
    }

    fn from_key(api_key: Option<String>) -> Result<Self> {
        match api_key {
            Some(key) if key.trim().is_empty() => {
                Err(Error::Configuration(format!("{API_KEY_VAR} is empty")))
            }
            Some(key) => Self::new(key),
            None => Err(Error::Configuration(format!("{API_KEY_VAR} is not set"))),
        }
    }

    /// Points the client at a different API root, such as a local mock server.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .finish()
    }
}
