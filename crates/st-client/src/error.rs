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

//! Caller-facing errors for the client lookups

use thiserror::Error;

/// Failure of one of the three backend lookups.
///
/// The message is fixed per operation. Callers can show it as-is; the
/// low-level cause has already been logged.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchError {
  /// Listing coins failed
  #[error("Failed to fetch coin data")]
  Coins,

  /// Fetching a single coin's detail failed
  #[error("Failed to fetch coin details")]
  CoinDetails,

  /// Fetching a coin's articles failed
  #[error("Failed to fetch coin articles")]
  CoinArticles,
}

impl FetchError {
  /// Name of the failed operation, for log fields
  pub fn operation(&self) -> &'static str {
    match self {
      FetchError::Coins => "list_coins",
      FetchError::CoinDetails => "coin_details",
      FetchError::CoinArticles => "coin_articles",
    }
  }
}
