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

//! # st-client
//!
//! Read-only client for the crypto sentiment tracker backend.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use st_client::SentimentClient;
//! use st_core::Config;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_env()?;
//!     let client = SentimentClient::new(config)?;
//!
//!     let coins = client.coins().list().await?;
//!     println!("Tracking {} coins", coins.len());
//!
//!     let articles = client.coins().articles(1, 10).await?;
//!     println!("Latest headline: {:?}", articles.first().map(|a| &a.title));
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Error Handling
//!
//! Every lookup returns [`FetchError`], whose message is one of a fixed set
//! ("Failed to fetch coin data", ...). The underlying transport, status or
//! decode failure is logged through `tracing` and never returned.

#![deny(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod endpoints;
pub mod error;
pub mod transport;

pub use client::SentimentClient;
pub use endpoints::coins::CoinEndpoints;
pub use error::FetchError;
pub use st_core::{Config, Error, Result};
pub use st_models::*;
