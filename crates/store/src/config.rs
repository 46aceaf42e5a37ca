//! Store configuration
//!
//! Built explicitly once at process start and handed to whichever client
//! needs it. Nothing in this crate reads the environment on its own after
//! construction, which keeps the store swappable in tests.

use std::env;
use std::time::Duration;

use crate::store::StoreError;

pub const ENV_STORE_URL: &str = "INSIGHT_STORE_URL";
pub const ENV_STORE_API_KEY: &str = "INSIGHT_STORE_API_KEY";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for the Insight Store's table API.
#[derive(Debug, Clone)]
pub struct StoreConfig {
  /// Base URL of the table API, without a trailing slash.
  pub base_url: String,
  /// Key sent as both the `apikey` header and the bearer token.
  pub api_key: String,
  pub timeout: Duration,
}

impl StoreConfig {
  pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
    let mut base_url = base_url.into();
    while base_url.ends_with('/') {
      base_url.pop();
    }
    Self {
      base_url,
      api_key: api_key.into(),
      timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    }
  }

  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }

  /// Read the connection settings from the environment.
  pub fn from_env() -> Result<Self, StoreError> {
    let base_url =
      env::var(ENV_STORE_URL).map_err(|_| StoreError::Config(ENV_STORE_URL.to_string()))?;
    let api_key =
      env::var(ENV_STORE_API_KEY).map_err(|_| StoreError::Config(ENV_STORE_API_KEY.to_string()))?;
    Ok(Self::new(base_url, api_key))
  }
}
