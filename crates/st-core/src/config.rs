/*
 *
 *
 *
 *
 * MIT License
 * Copyright (c) 2025. Dwight J. Browne
 * dwight[-at-]dwightjbrowne[-dot-]com
 *
 *
 * Permission is hereby granted, free of charge, to any person obtaining a copy
 * of this software and associated documentation files (the "Software"), to deal
 * in the Software without restriction, including without limitation the rights
 * to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
 * copies of the Software, and to permit persons to whom the Software is
 * furnished to do so, subject to the following conditions:
 *
 * The above copyright notice and this permission notice shall be included in all
 * copies or substantial portions of the Software.
 *
 * THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
 * IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
 * FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
 * AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
 * LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
 * OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
 * SOFTWARE.
 */

//! Configuration management for the sentiment tracker client

use crate::error::{Error, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use url::Url;

/// Runtime configuration, resolved once at startup
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
  /// Base URL of the sentiment backend, without a trailing slash
  pub base_url: String,

  /// Request timeout in seconds
  pub timeout_secs: u64,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      base_url: crate::DEFAULT_BASE_URL.to_string(),
      timeout_secs: crate::DEFAULT_TIMEOUT_SECS,
    }
  }
}

impl Config {
  /// Load configuration from environment variables (and `.env`, if present)
  pub fn from_env() -> Result<Self> {
    dotenv().ok();

    Self::from_values(env::var(crate::BASE_URL_ENV).ok(), env::var(crate::TIMEOUT_ENV).ok())
  }

  /// Build a configuration from raw, possibly absent, values.
  ///
  /// Empty strings count as unset.
  pub fn from_values(base_url: Option<String>, timeout_secs: Option<String>) -> Result<Self> {
    let base_url = match base_url.filter(|v| !v.trim().is_empty()) {
      Some(raw) => normalize_base_url(&raw)?,
      None => crate::DEFAULT_BASE_URL.to_string(),
    };

    let timeout_secs = match timeout_secs.filter(|v| !v.trim().is_empty()) {
      Some(raw) => raw
        .trim()
        .parse()
        .map_err(|_| Error::Config(format!("Invalid {}: {}", crate::TIMEOUT_ENV, raw)))?,
      None => crate::DEFAULT_TIMEOUT_SECS,
    };

    Ok(Config { base_url, timeout_secs })
  }

  /// Replace the base URL (used for pointing at mock servers)
  pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
    self.base_url = normalize_base_url(base_url)?;
    Ok(self)
  }
}

fn normalize_base_url(raw: &str) -> Result<String> {
  let trimmed = raw.trim().trim_end_matches('/');
  let parsed = Url::parse(trimmed)
    .map_err(|e| Error::Config(format!("Invalid {}: {} ({})", crate::BASE_URL_ENV, raw, e)))?;

  if !matches!(parsed.scheme(), "http" | "https") {
    return Err(Error::Config(format!(
      "Invalid {}: unsupported scheme '{}'",
      crate::BASE_URL_ENV,
      parsed.scheme()
    )));
  }

  Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_defaults_when_unset() {
    let config = Config::from_values(None, None).unwrap();
    assert_eq!(config, Config::default());
    assert_eq!(config.base_url, "http://localhost:8000");
    assert_eq!(config.timeout_secs, 30);
  }

  #[test]
  fn test_empty_values_fall_back_to_defaults() {
    let config = Config::from_values(Some("  ".to_string()), Some(String::new())).unwrap();
    assert_eq!(config, Config::default());
  }

  #[test]
  fn test_trailing_slash_is_stripped() {
    let config =
      Config::from_values(Some("https://api.example.com/".to_string()), Some("5".to_string()))
        .unwrap();
    assert_eq!(config.base_url, "https://api.example.com");
    assert_eq!(config.timeout_secs, 5);
  }

  #[test]
  fn test_invalid_base_url_rejected() {
    let result = Config::from_values(Some("not a url".to_string()), None);
    assert!(matches!(result, Err(Error::Config(_))));

    let result = Config::from_values(Some("ftp://example.com".to_string()), None);
    assert!(matches!(result, Err(Error::Config(_))));
  }

  #[test]
  fn test_invalid_timeout_rejected() {
    let result = Config::from_values(None, Some("soon".to_string()));
    assert!(matches!(result, Err(Error::Config(_))));
  }

  #[test]
  fn test_with_base_url() {
    let config = Config::default().with_base_url("http://127.0.0.1:4010/").unwrap();
    assert_eq!(config.base_url, "http://127.0.0.1:4010");
  }
}
