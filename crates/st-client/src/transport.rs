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

//! HTTP transport layer for sentiment backend requests

use reqwest::header::{HeaderMap, HeaderValue, CACHE_CONTROL, CONTENT_TYPE, PRAGMA};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use st_core::{Config, Error, Result};
use std::time::Duration;
use tracing::{debug, instrument};
use url::Url;

/// HTTP transport for making GET requests against the backend.
///
/// Each request sends `Content-Type: application/json` and asks every cache
/// on the way to stay out of it. A failure is returned once; there is no
/// retry loop.
#[derive(Debug)]
pub struct Transport {
  client: Client,
  base_url: String,
  timeout: Duration,
}

impl Transport {
  /// Create a new transport instance
  pub fn new(config: &Config) -> Result<Self> {
    let timeout = Duration::from_secs(config.timeout_secs);

    let client = Client::builder()
      .timeout(timeout)
      .user_agent(concat!("st-client/", env!("CARGO_PKG_VERSION")))
      .default_headers(default_headers())
      .build()
      .map_err(|e| Error::Http(format!("Failed to create HTTP client: {}", e)))?;

    Ok(Self { client, base_url: config.base_url.clone(), timeout })
  }

  /// GET `{base_url}{path}` with the given query pairs and decode the JSON body
  ///
  /// # Errors
  ///
  /// * [`Error::Http`] when the request cannot be sent or the body cannot be read
  /// * [`Error::Status`] on a non-2xx response
  /// * [`Error::Parse`] when the body is not the expected JSON
  #[instrument(skip(self, query), fields(base_url = %self.base_url))]
  pub async fn get<T>(&self, path: &str, query: &[(&str, String)]) -> Result<T>
  where
    T: DeserializeOwned,
  {
    let url = self.build_url(path, query)?;
    debug!("Making request to: {}", url);

    let response = self.make_request(url).await?;
    let text = response
      .text()
      .await
      .map_err(|e| Error::Http(format!("Failed to read response body: {}", e)))?;

    debug!("Response body length: {} bytes", text.len());

    serde_json::from_str::<T>(&text).map_err(|e| {
      Error::Parse(format!(
        "Failed to parse response: {}. Response: {}",
        e,
        text.chars().take(200).collect::<String>()
      ))
    })
  }

  /// Build the full URL for a request
  pub(crate) fn build_url(&self, path: &str, query: &[(&str, String)]) -> Result<Url> {
    let mut url = Url::parse(&format!("{}{}", self.base_url, path))?;

    if !query.is_empty() {
      let mut pairs = url.query_pairs_mut();
      for (key, value) in query {
        pairs.append_pair(key, value);
      }
    }

    Ok(url)
  }

  async fn make_request(&self, url: Url) -> Result<Response> {
    let response = self
      .client
      .get(url.clone())
      .send()
      .await
      .map_err(|e| Error::Http(format!("Request failed: {}", e)))?;

    let status = response.status();
    if status.is_success() {
      debug!("Request successful with status: {}", status);
      Ok(response)
    } else {
      Err(Error::Status { status: status.as_u16(), url: url.to_string() })
    }
  }

  /// Get the base URL being used
  pub fn base_url(&self) -> &str {
    &self.base_url
  }

  /// Get request timeout duration
  pub fn timeout(&self) -> Duration {
    self.timeout
  }
}

fn default_headers() -> HeaderMap {
  let mut headers = HeaderMap::new();
  headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
  headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store"));
  headers.insert(PRAGMA, HeaderValue::from_static("no-cache"));
  headers
}
