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

//! Coin detail payload
//!
//! The backend owns this schema. The known parts are typed; anything else
//! is kept verbatim in `extra` so nothing the server sends is dropped.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// Detail view for a single coin
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoinDetail {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub coin: Option<CoinInfo>,
  /// Newest first
  #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
  pub recent_prices: Vec<PricePoint>,
  /// Newest first
  #[serde(deserialize_with = "null_as_empty", skip_serializing_if = "Vec::is_empty")]
  pub recent_sentiment: Vec<SentimentPoint>,
  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

/// An explicit `null` list reads the same as a missing one
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
  D: Deserializer<'de>,
  T: Deserialize<'de>,
{
  Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Static identity of a coin
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoinInfo {
  pub id: i64,
  pub coingecko_id: String,
  pub symbol: String,
  pub name: String,
  pub created_at: Option<String>,
}

/// One day's price observation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricePoint {
  pub date: String,
  pub price_usd: Option<f64>,
  pub market_cap: Option<f64>,
}

/// One day's sentiment observation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SentimentPoint {
  pub date: String,
  pub sentiment_score: Option<f64>,
  pub mentions_count: Option<u64>,
  pub no_mentions: Option<bool>,
}

impl SentimentPoint {
  /// The day's score, or `None` when the day had no mentions or no score
  pub fn display_sentiment(&self) -> Option<f64> {
    if self.no_mentions.unwrap_or(false) { None } else { self.sentiment_score }
  }
}

impl CoinDetail {
  /// Most recent price observation, if any
  pub fn latest_price(&self) -> Option<&PricePoint> {
    self.recent_prices.first()
  }

  /// Most recent sentiment observation, if any
  pub fn latest_sentiment(&self) -> Option<&SentimentPoint> {
    self.recent_sentiment.first()
  }

  /// Mean score over the days that had mentions and a score
  pub fn average_sentiment(&self) -> Option<f64> {
    let scores: Vec<f64> = self
      .recent_sentiment
      .iter()
      .filter_map(SentimentPoint::display_sentiment)
      .collect();

    if scores.is_empty() {
      return None;
    }
    Some(scores.iter().sum::<f64>() / scores.len() as f64)
  }
}
