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

//! Sentiment classification for colour coding

use serde::{Deserialize, Serialize};
use st_models::Coin;
use std::fmt;

/// Scores at or above this are positive
pub const POSITIVE_THRESHOLD: f64 = 0.1;

/// Scores at or below this are negative
pub const NEGATIVE_THRESHOLD: f64 = -0.1;

/// Colour bucket of a coin's sentiment.
///
/// `Neutral` (a real score near zero) and `NoData` look alike numerically
/// but use different tokens: yellow for the former, gray for the latter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentBucket {
  Positive,
  Neutral,
  Negative,
  NoData,
}

impl SentimentBucket {
  /// Legend order
  pub const ALL: [SentimentBucket; 4] =
    [SentimentBucket::Positive, SentimentBucket::Neutral, SentimentBucket::Negative, SentimentBucket::NoData];

  /// Classify a coin
  pub fn of(coin: &Coin) -> Self {
    Self::classify(coin.display_sentiment())
  }

  /// Classify an already-derived display score (`None` means no data)
  pub fn classify(display_score: Option<f64>) -> Self {
    match display_score {
      None => SentimentBucket::NoData,
      Some(score) if score >= POSITIVE_THRESHOLD => SentimentBucket::Positive,
      Some(score) if score <= NEGATIVE_THRESHOLD => SentimentBucket::Negative,
      Some(_) => SentimentBucket::Neutral,
    }
  }

  /// Text colour token
  pub fn text_class(&self) -> &'static str {
    match self {
      SentimentBucket::Positive => "text-green-600",
      SentimentBucket::Neutral => "text-yellow-600",
      SentimentBucket::Negative => "text-red-600",
      SentimentBucket::NoData => "text-gray-500",
    }
  }

  /// Row background colour token
  pub fn bg_class(&self) -> &'static str {
    match self {
      SentimentBucket::Positive => "bg-green-50",
      SentimentBucket::Neutral => "bg-yellow-50",
      SentimentBucket::Negative => "bg-red-50",
      SentimentBucket::NoData => "bg-gray-100",
    }
  }

  /// Legend text
  pub fn label(&self) -> &'static str {
    match self {
      SentimentBucket::Positive => "Positive",
      SentimentBucket::Neutral => "Neutral",
      SentimentBucket::Negative => "Negative",
      SentimentBucket::NoData => "No Data",
    }
  }
}

impl fmt::Display for SentimentBucket {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.label())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn coin(score: Option<f64>, no_mentions: bool) -> Coin {
    Coin {
      coin_id: 1,
      coingecko_id: "x".to_string(),
      symbol: "X".to_string(),
      name: "X".to_string(),
      price_usd: None,
      market_cap: None,
      sentiment_score: score,
      mentions_count: 1,
      no_mentions,
    }
  }

  #[test]
  fn test_thresholds_are_inclusive() {
    assert_eq!(SentimentBucket::of(&coin(Some(0.1), false)), SentimentBucket::Positive);
    assert_eq!(SentimentBucket::of(&coin(Some(-0.1), false)), SentimentBucket::Negative);
    assert_eq!(SentimentBucket::of(&coin(Some(0.0999), false)), SentimentBucket::Neutral);
    assert_eq!(SentimentBucket::of(&coin(Some(-0.0999), false)), SentimentBucket::Neutral);
    assert_eq!(SentimentBucket::of(&coin(Some(0.0), false)), SentimentBucket::Neutral);
  }

  #[test]
  fn test_no_data_cases() {
    assert_eq!(SentimentBucket::of(&coin(None, false)), SentimentBucket::NoData);
    assert_eq!(SentimentBucket::of(&coin(Some(0.9), true)), SentimentBucket::NoData);
    assert_eq!(SentimentBucket::of(&coin(Some(0.0), true)), SentimentBucket::NoData);
  }

  #[test]
  fn test_neutral_and_no_data_tokens_differ() {
    let neutral = SentimentBucket::Neutral;
    let no_data = SentimentBucket::NoData;
    assert_ne!(neutral.text_class(), no_data.text_class());
    assert_ne!(neutral.bg_class(), no_data.bg_class());
    assert_eq!(no_data.text_class(), "text-gray-500");
    assert_eq!(neutral.text_class(), "text-yellow-600");
  }

  #[test]
  fn test_legend_labels() {
    let labels: Vec<&str> = SentimentBucket::ALL.iter().map(|b| b.label()).collect();
    assert_eq!(labels, vec!["Positive", "Neutral", "Negative", "No Data"]);
  }
}
