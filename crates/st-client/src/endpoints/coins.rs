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

//! Coin endpoints
//!
//! - `GET /api/coins`: every tracked coin's latest snapshot
//! - `GET /api/coins/{coin_id}`: one coin's detail payload
//! - `GET /api/coins/{coin_id}/articles?limit={n}`: recent articles for a coin

use super::collapse;
use crate::error::FetchError;
use crate::transport::Transport;
use st_models::{ArticleSummary, Coin, CoinDetail};
use std::sync::Arc;
use tracing::{instrument, warn};

/// Read-only coin lookups
#[derive(Debug, Clone)]
pub struct CoinEndpoints {
  transport: Arc<Transport>,
}

impl CoinEndpoints {
  /// Create a new coin endpoints instance
  pub fn new(transport: Arc<Transport>) -> Self {
    Self { transport }
  }

  /// List every tracked coin.
  ///
  /// The records come back in the order the server sent them; ordering for
  /// display is the table engine's job.
  ///
  /// # Examples
  ///
  /// ```rust,no_run
  /// # async fn run(client: st_client::SentimentClient) -> Result<(), st_client::FetchError> {
  /// let coins = client.coins().list().await?;
  /// for coin in &coins {
  ///     println!("{} {:?}", coin.symbol, coin.sentiment_score);
  /// }
  /// # Ok(())
  /// # }
  /// ```
  #[instrument(skip(self))]
  pub async fn list(&self) -> Result<Vec<Coin>, FetchError> {
    self.transport.get("/api/coins", &[]).await.map_err(collapse(FetchError::Coins))
  }

  /// Get the detail payload for one coin
  #[instrument(skip(self))]
  pub async fn detail(&self, coin_id: i64) -> Result<CoinDetail, FetchError> {
    self
      .transport
      .get(&format!("/api/coins/{}", coin_id), &[])
      .await
      .map_err(collapse(FetchError::CoinDetails))
  }

  /// Get up to `limit` recent articles mentioning a coin
  ///
  /// The decoded list is returned unchanged.
  #[instrument(skip(self))]
  pub async fn articles(&self, coin_id: i64, limit: u32) -> Result<Vec<ArticleSummary>, FetchError> {
    let articles: Vec<ArticleSummary> = self
      .transport
      .get(&format!("/api/coins/{}/articles", coin_id), &[("limit", limit.to_string())])
      .await
      .map_err(collapse(FetchError::CoinArticles))?;

    if articles.len() > limit as usize {
      warn!("Backend returned {} articles for limit {}", articles.len(), limit);
    }

    Ok(articles)
  }

  /// [`articles`](Self::articles) with the default limit of 10
  pub async fn recent_articles(&self, coin_id: i64) -> Result<Vec<ArticleSummary>, FetchError> {
    self.articles(coin_id, st_core::DEFAULT_ARTICLE_LIMIT).await
  }
}
