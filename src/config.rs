//! Validator connection settings.

use std::env;
use std::time::Duration;

/// Base address used when `PIPELINE_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";
/// Request timeout used when `PIPELINE_API_TIMEOUT_SECS` is unset or unparsable.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

pub const API_URL_ENV: &str = "PIPELINE_API_URL";
pub const TIMEOUT_ENV: &str = "PIPELINE_API_TIMEOUT_SECS";

/// Where the pipeline validator lives and how long to wait for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
  /// Base address without a trailing `/`.
  pub base_url: String,
  pub timeout: Duration,
}

impl Default for ValidatorConfig {
  fn default() -> Self {
    Self::new(DEFAULT_API_URL)
  }
}

impl ValidatorConfig {
  pub fn new(base_url: impl Into<String>) -> Self {
    Self {
      base_url: normalize_base_url(&base_url.into()),
      timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    }
  }

  pub fn with_timeout(mut self, timeout: Duration) -> Self {
    self.timeout = timeout;
    self
  }

  /// Reads `PIPELINE_API_URL` and `PIPELINE_API_TIMEOUT_SECS` from the process environment.
  pub fn from_env() -> Self {
    Self::from_lookup(|key| env::var(key).ok())
  }

  /// Like [from_env](Self::from_env) but with an arbitrary variable source.
  pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
    let base_url = lookup(API_URL_ENV)
      .filter(|v| !v.trim().is_empty())
      .unwrap_or_else(|| DEFAULT_API_URL.to_string());
    let timeout_secs = lookup(TIMEOUT_ENV)
      .and_then(|v| v.trim().parse::<u64>().ok())
      .filter(|secs| *secs > 0)
      .unwrap_or(DEFAULT_TIMEOUT_SECS);
    Self::new(base_url).with_timeout(Duration::from_secs(timeout_secs))
  }

  /// `{base_url}/pipelines/parse`
  pub fn parse_url(&self) -> String {
    format!("{}/pipelines/parse", self.base_url)
  }
}

fn normalize_base_url(raw: &str) -> String {
  raw.trim().trim_end_matches('/').to_string()
}
