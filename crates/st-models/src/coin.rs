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

//! Coin records returned by the coin listing endpoint

use serde::{Deserialize, Serialize};

/// One tracked cryptocurrency's price, market and sentiment snapshot.
///
/// Nullable numbers stay `Option<f64>`; the two ways of reading them (zero
/// for ordering, placeholder for display) live in the accessors below.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Coin {
  pub coin_id: i64,
  pub coingecko_id: String,
  pub symbol: String,
  pub name: String,
  pub price_usd: Option<f64>,
  pub market_cap: Option<f64>,
  /// Conceptually in [-1, 1]
  pub sentiment_score: Option<f64>,
  pub mentions_count: u64,
  /// Zero qualifying mentions in the analysis window
  pub no_mentions: bool,
}

impl Coin {
  /// Whether the record carries usable sentiment.
  ///
  /// A record flagged `no_mentions` has no data even when a stale score is
  /// present. Ordering and display both go through this predicate.
  pub fn has_sentiment_data(&self) -> bool {
    !self.no_mentions && self.sentiment_score.is_some()
  }

  /// The score to show, or `None` for a no-data record
  pub fn display_sentiment(&self) -> Option<f64> {
    if self.has_sentiment_data() { self.sentiment_score } else { None }
  }

  /// Market cap for ordering, null read as zero
  pub fn market_cap_or_zero(&self) -> f64 {
    self.market_cap.unwrap_or(0.0)
  }

  /// Price for ordering, null read as zero
  pub fn price_or_zero(&self) -> f64 {
    self.price_usd.unwrap_or(0.0)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  fn bitcoin() -> Coin {
    Coin {
      coin_id: 1,
      coingecko_id: "bitcoin".to_string(),
      symbol: "BTC".to_string(),
      name: "Bitcoin".to_string(),
      price_usd: Some(50000.0),
      market_cap: Some(900_000_000_000.0),
      sentiment_score: Some(0.8),
      mentions_count: 1000,
      no_mentions: false,
    }
  }

  #[test]
  fn test_deserialize_with_nulls() {
    let payload = json!({
      "coin_id": 7,
      "coingecko_id": "zed",
      "symbol": "ZED",
      "name": "Zed",
      "price_usd": null,
      "market_cap": null,
      "sentiment_score": null,
      "mentions_count": 0,
      "no_mentions": true
    });

    let coin: Coin = serde_json::from_value(payload).unwrap();
    assert_eq!(coin.coin_id, 7);
    assert!(coin.price_usd.is_none());
    assert!(coin.market_cap.is_none());
    assert!(!coin.has_sentiment_data());
    assert_eq!(coin.market_cap_or_zero(), 0.0);
    assert_eq!(coin.price_or_zero(), 0.0);
  }

  #[test]
  fn test_no_mentions_overrides_stale_score() {
    let coin = Coin { no_mentions: true, sentiment_score: Some(0.5), ..bitcoin() };
    assert!(!coin.has_sentiment_data());
    assert_eq!(coin.display_sentiment(), None);
  }

  #[test]
  fn test_null_score_is_no_data() {
    let coin = Coin { sentiment_score: None, ..bitcoin() };
    assert!(!coin.has_sentiment_data());
  }

  #[test]
  fn test_scored_coin_has_data() {
    let coin = bitcoin();
    assert!(coin.has_sentiment_data());
    assert_eq!(coin.display_sentiment(), Some(0.8));
  }
}
