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

//! Top-level client handle

use crate::endpoints::coins::CoinEndpoints;
use crate::transport::Transport;
use st_core::{Config, Result};
use std::sync::Arc;

/// Main sentiment backend client
///
/// Owns the transport built from an immutable [`Config`] and hands out
/// endpoint groups that share it.
///
/// # Examples
///
/// ```rust,no_run
/// use st_client::SentimentClient;
/// use st_core::Config;
///
/// let config = Config::from_env().expect("Invalid configuration");
/// let client = SentimentClient::new(config).expect("Failed to create client");
/// let coins = client.coins();
/// ```
#[derive(Debug, Clone)]
pub struct SentimentClient {
  transport: Arc<Transport>,
}

impl SentimentClient {
  /// Create a new client
  ///
  /// # Errors
  ///
  /// Returns an error if the HTTP client cannot be created.
  pub fn new(config: Config) -> Result<Self> {
    let transport = Arc::new(Transport::new(&config)?);
    Ok(Self { transport })
  }

  /// Get access to coin endpoints
  pub fn coins(&self) -> CoinEndpoints {
    CoinEndpoints::new(self.transport.clone())
  }

  /// Base URL requests are sent to
  pub fn base_url(&self) -> &str {
    self.transport.base_url()
  }
}
