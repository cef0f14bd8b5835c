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

//! Ordered, annotated table rows

use crate::bucket::SentimentBucket;
use crate::format::{format_market_cap, format_price, format_score};
use crate::sort::{sort_coins, SortState};
use st_models::Coin;

/// A coin ready to render: the record plus its derived cells
#[derive(Debug, Clone, PartialEq)]
pub struct CoinRow<'a> {
  pub coin: &'a Coin,
  pub bucket: SentimentBucket,
  pub score: String,
  pub mentions: String,
  pub market_cap: String,
  pub price: String,
}

impl<'a> CoinRow<'a> {
  pub fn new(coin: &'a Coin) -> Self {
    Self {
      coin,
      bucket: SentimentBucket::of(coin),
      score: format_score(coin),
      mentions: coin.mentions_count.to_string(),
      market_cap: format_market_cap(coin.market_cap),
      price: format_price(coin.price_usd),
    }
  }
}

/// Sort `coins` under `state` and annotate each one
pub fn build_rows(coins: &[Coin], state: SortState) -> Vec<CoinRow<'_>> {
  sort_coins(coins, state).into_iter().map(CoinRow::new).collect()
}

/// Footer counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TableSummary {
  pub total: usize,
  pub positive: usize,
  pub neutral: usize,
  pub negative: usize,
  pub no_data: usize,
}

impl TableSummary {
  pub fn from_coins(coins: &[Coin]) -> Self {
    coins.iter().fold(Self::default(), |mut summary, coin| {
      summary.total += 1;
      match SentimentBucket::of(coin) {
        SentimentBucket::Positive => summary.positive += 1,
        SentimentBucket::Neutral => summary.neutral += 1,
        SentimentBucket::Negative => summary.negative += 1,
        SentimentBucket::NoData => summary.no_data += 1,
      }
      summary
    })
  }

  pub fn count(&self, bucket: SentimentBucket) -> usize {
    match bucket {
      SentimentBucket::Positive => self.positive,
      SentimentBucket::Neutral => self.neutral,
      SentimentBucket::Negative => self.negative,
      SentimentBucket::NoData => self.no_data,
    }
  }

  /// "Showing N cryptocurrencies"
  pub fn caption(&self) -> String {
    format!("Showing {} cryptocurrencies", self.total)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::sort::{SortColumn, SortDirection};

  fn coins() -> Vec<Coin> {
    let base = Coin {
      coin_id: 1,
      coingecko_id: "bitcoin".to_string(),
      symbol: "BTC".to_string(),
      name: "Bitcoin".to_string(),
      price_usd: Some(50000.0),
      market_cap: Some(900e9),
      sentiment_score: Some(0.8),
      mentions_count: 1000,
      no_mentions: false,
    };

    vec![
      Coin {
        coin_id: 2,
        name: "Zed".to_string(),
        symbol: "ZED".to_string(),
        price_usd: None,
        market_cap: Some(50e9),
        sentiment_score: None,
        mentions_count: 0,
        no_mentions: true,
        ..base.clone()
      },
      base.clone(),
      Coin {
        coin_id: 3,
        name: "Down".to_string(),
        symbol: "DWN".to_string(),
        price_usd: Some(0.00001234),
        market_cap: Some(10e9),
        sentiment_score: Some(-0.3),
        mentions_count: 12,
        ..base.clone()
      },
      Coin { coin_id: 4, name: "Flat".to_string(), sentiment_score: Some(0.02), market_cap: None, ..base },
    ]
  }

  #[test]
  fn test_rows_are_sorted_and_annotated() {
    let coins = coins();
    let rows = build_rows(&coins, SortState::default());

    let names: Vec<&str> = rows.iter().map(|r| r.coin.name.as_str()).collect();
    assert_eq!(names, vec!["Bitcoin", "Flat", "Down", "Zed"]);

    assert_eq!(rows[0].bucket, SentimentBucket::Positive);
    assert_eq!(rows[0].score, "0.800");
    assert_eq!(rows[0].market_cap, "$900.00B");
    assert_eq!(rows[0].price, "$50,000.00");
    assert_eq!(rows[0].mentions, "1000");

    assert_eq!(rows[1].bucket, SentimentBucket::Neutral);
    assert_eq!(rows[1].market_cap, "—");

    assert_eq!(rows[2].bucket, SentimentBucket::Negative);
    assert_eq!(rows[2].price, "$0.000012");

    assert_eq!(rows[3].bucket, SentimentBucket::NoData);
    assert_eq!(rows[3].score, "—");
    assert_eq!(rows[3].price, "—");
  }

  #[test]
  fn test_rows_follow_selected_column() {
    let coins = coins();
    let rows = build_rows(&coins, SortState::new(SortColumn::Name, SortDirection::Asc));
    let names: Vec<&str> = rows.iter().map(|r| r.coin.name.as_str()).collect();
    assert_eq!(names, vec!["Bitcoin", "Down", "Flat", "Zed"]);
  }

  #[test]
  fn test_summary_counts() {
    let summary = TableSummary::from_coins(&coins());
    assert_eq!(
      summary,
      TableSummary { total: 4, positive: 1, neutral: 1, negative: 1, no_data: 1 }
    );
    assert_eq!(summary.count(SentimentBucket::NoData), 1);
    assert_eq!(summary.caption(), "Showing 4 cryptocurrencies");
  }
}
