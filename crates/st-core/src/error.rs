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

use thiserror::Error;

/// Low-level error type for st-* crates.
///
/// These carry the diagnostic detail of a failure (status codes, transport
/// messages, decode errors). The client logs them and hands callers a
/// stable, operation-scoped message instead.
#[derive(Error, Debug)]
pub enum Error {
  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),

  /// Transport failure: connection refused, timeout, TLS, body read
  #[error("HTTP error: {0}")]
  Http(String),

  /// Server answered with a non-success status
  #[error("HTTP error! status: {status} ({url})")]
  Status {
    /// Numeric status code
    status: u16,
    /// Requested URL
    url: String,
  },

  /// Response body could not be decoded
  #[error("Parse error: {0}")]
  Parse(String),

  /// Malformed request URL
  #[error("Invalid URL: {0}")]
  Url(#[from] url::ParseError),
}

/// Result type alias for st-* crates
pub type Result<T> = std::result::Result<T, Error>;
