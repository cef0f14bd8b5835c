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

//! Sort state and coin ordering
//!
//! Ordering rules, in priority order:
//!
//! 1. Records with sentiment data come before records without, whatever the
//!    active column or direction.
//! 2. Records without data are ordered by market cap, highest first, with a
//!    null cap read as zero. The active column has no say here.
//! 3. Records with data are ordered by the active column in the active
//!    direction. Null numbers read as zero; names compare case-insensitively.
//!
//! Ties keep their input order.

use serde::{Deserialize, Serialize};
use st_models::Coin;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Column the table can be ordered by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
  #[default]
  Sentiment,
  MarketCap,
  Mentions,
  Price,
  Name,
}

impl SortColumn {
  /// Every column, in table header order
  pub const ALL: [SortColumn; 5] =
    [SortColumn::Name, SortColumn::Sentiment, SortColumn::Mentions, SortColumn::MarketCap, SortColumn::Price];

  /// Wire name
  pub fn as_str(&self) -> &'static str {
    match self {
      SortColumn::Sentiment => "sentiment",
      SortColumn::MarketCap => "market_cap",
      SortColumn::Mentions => "mentions",
      SortColumn::Price => "price",
      SortColumn::Name => "name",
    }
  }

  /// Table header text
  pub fn label(&self) -> &'static str {
    match self {
      SortColumn::Sentiment => "Sentiment Score",
      SortColumn::MarketCap => "Market Cap",
      SortColumn::Mentions => "Mentions",
      SortColumn::Price => "Price (USD)",
      SortColumn::Name => "Coin",
    }
  }
}

impl fmt::Display for SortColumn {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// Unrecognised column or direction name
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown sort key: {0}")]
pub struct UnknownSortKey(pub String);

impl FromStr for SortColumn {
  type Err = UnknownSortKey;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "sentiment" => Ok(SortColumn::Sentiment),
      "market_cap" => Ok(SortColumn::MarketCap),
      "mentions" => Ok(SortColumn::Mentions),
      "price" => Ok(SortColumn::Price),
      "name" => Ok(SortColumn::Name),
      _ => Err(UnknownSortKey(s.to_string())),
    }
  }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
  Asc,
  #[default]
  Desc,
}

impl SortDirection {
  /// The other direction
  pub fn toggled(self) -> Self {
    match self {
      SortDirection::Asc => SortDirection::Desc,
      SortDirection::Desc => SortDirection::Asc,
    }
  }

  /// Wire name
  pub fn as_str(&self) -> &'static str {
    match self {
      SortDirection::Asc => "asc",
      SortDirection::Desc => "desc",
    }
  }

  /// Header arrow
  pub fn arrow(&self) -> &'static str {
    match self {
      SortDirection::Asc => "↑",
      SortDirection::Desc => "↓",
    }
  }

  fn apply(self, ordering: Ordering) -> Ordering {
    match self {
      SortDirection::Asc => ordering,
      SortDirection::Desc => ordering.reverse(),
    }
  }
}

impl fmt::Display for SortDirection {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

impl FromStr for SortDirection {
  type Err = UnknownSortKey;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.trim().to_ascii_lowercase().as_str() {
      "asc" => Ok(SortDirection::Asc),
      "desc" => Ok(SortDirection::Desc),
      _ => Err(UnknownSortKey(s.to_string())),
    }
  }
}

/// Active (column, direction) pair. Starts as sentiment, descending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct SortState {
  pub column: SortColumn,
  pub direction: SortDirection,
}

impl SortState {
  pub fn new(column: SortColumn, direction: SortDirection) -> Self {
    Self { column, direction }
  }

  /// Apply a user column selection.
  ///
  /// Reselecting the active column flips the direction; any other column
  /// starts descending.
  pub fn select(&mut self, column: SortColumn) {
    self.direction =
      if self.column == column { self.direction.toggled() } else { SortDirection::Desc };
    self.column = column;
  }

  /// By-value form of [`select`](Self::select)
  pub fn selected(mut self, column: SortColumn) -> Self {
    self.select(column);
    self
  }

  /// Header arrow for `column`, only when it is the active one
  pub fn indicator(&self, column: SortColumn) -> Option<&'static str> {
    (self.column == column).then(|| self.direction.arrow())
  }
}

fn cmp_f64(a: f64, b: f64) -> Ordering {
  a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}

/// Compare two coins under `state`
pub fn compare_coins(a: &Coin, b: &Coin, state: SortState) -> Ordering {
  match (a.has_sentiment_data(), b.has_sentiment_data()) {
    (true, false) => Ordering::Less,
    (false, true) => Ordering::Greater,
    (false, false) => cmp_f64(b.market_cap_or_zero(), a.market_cap_or_zero()),
    (true, true) => {
      let ordering = match state.column {
        SortColumn::Sentiment => cmp_f64(
          a.display_sentiment().unwrap_or(0.0),
          b.display_sentiment().unwrap_or(0.0),
        ),
        SortColumn::MarketCap => cmp_f64(a.market_cap_or_zero(), b.market_cap_or_zero()),
        SortColumn::Mentions => a.mentions_count.cmp(&b.mentions_count),
        SortColumn::Price => cmp_f64(a.price_or_zero(), b.price_or_zero()),
        SortColumn::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
      };
      state.direction.apply(ordering)
    }
  }
}

/// Order `coins` for display without touching the source slice
pub fn sort_coins(coins: &[Coin], state: SortState) -> Vec<&Coin> {
  let mut ordered: Vec<&Coin> = coins.iter().collect();
  ordered.sort_by(|a, b| compare_coins(a, b, state));
  ordered
}

#[cfg(test)]
mod tests {
  use super::*;

  fn coin(
    name: &str,
    score: Option<f64>,
    no_mentions: bool,
    market_cap: Option<f64>,
    price: Option<f64>,
    mentions: u64,
  ) -> Coin {
    Coin {
      coin_id: name.len() as i64,
      coingecko_id: name.to_lowercase(),
      symbol: name.chars().take(3).collect::<String>().to_uppercase(),
      name: name.to_string(),
      price_usd: price,
      market_cap,
      sentiment_score: score,
      mentions_count: mentions,
      no_mentions,
    }
  }

  fn fixture() -> Vec<Coin> {
    vec![
      coin("Zed", None, true, Some(50e9), None, 0),
      coin("Bitcoin", Some(0.8), false, Some(900e9), Some(50000.0), 1000),
      coin("stale", Some(0.9), true, Some(70e9), Some(1.0), 0),
      coin("Down", Some(-0.3), false, Some(10e9), Some(2.5), 40),
      coin("ghost", None, false, None, Some(0.1), 3),
      coin("alpha", Some(0.05), false, None, None, 40),
      coin("Ether", Some(0.05), false, Some(400e9), Some(3000.0), 700),
      coin("Orphan", None, true, Some(70e9), None, 0),
    ]
  }

  fn names(ordered: &[&Coin]) -> Vec<String> {
    ordered.iter().map(|c| c.name.clone()).collect()
  }

  fn all_states() -> Vec<SortState> {
    SortColumn::ALL
      .iter()
      .flat_map(|&c| [SortState::new(c, SortDirection::Asc), SortState::new(c, SortDirection::Desc)])
      .collect()
  }

  #[test]
  fn test_default_state() {
    let state = SortState::default();
    assert_eq!(state.column, SortColumn::Sentiment);
    assert_eq!(state.direction, SortDirection::Desc);
  }

  #[test]
  fn test_select_same_column_toggles() {
    let mut state = SortState::default();
    state.select(SortColumn::Sentiment);
    assert_eq!(state, SortState::new(SortColumn::Sentiment, SortDirection::Asc));
    state.select(SortColumn::Sentiment);
    assert_eq!(state, SortState::default());
  }

  #[test]
  fn test_select_new_column_resets_to_desc() {
    let state = SortState::new(SortColumn::Price, SortDirection::Asc).selected(SortColumn::Name);
    assert_eq!(state, SortState::new(SortColumn::Name, SortDirection::Desc));

    let state = SortState::default().selected(SortColumn::MarketCap);
    assert_eq!(state.direction, SortDirection::Desc);
  }

  #[test]
  fn test_toggle_is_involution_for_every_state() {
    for start in all_states() {
      let twice = start.selected(start.column).selected(start.column);
      assert_eq!(twice, start);
    }
  }

  #[test]
  fn test_indicator_only_on_active_column() {
    let state = SortState::new(SortColumn::Price, SortDirection::Asc);
    assert_eq!(state.indicator(SortColumn::Price), Some("↑"));
    assert_eq!(state.indicator(SortColumn::Name), None);
    assert_eq!(SortState::default().indicator(SortColumn::Sentiment), Some("↓"));
  }

  #[test]
  fn test_parse_wire_names() {
    assert_eq!("market_cap".parse::<SortColumn>().unwrap(), SortColumn::MarketCap);
    assert_eq!(" Name ".parse::<SortColumn>().unwrap(), SortColumn::Name);
    assert_eq!("ASC".parse::<SortDirection>().unwrap(), SortDirection::Asc);
    assert!("volume".parse::<SortColumn>().is_err());
    for column in SortColumn::ALL {
      assert_eq!(column.to_string().parse::<SortColumn>().unwrap(), column);
    }
  }

  #[test]
  fn test_serde_wire_names() {
    let state = SortState::new(SortColumn::MarketCap, SortDirection::Asc);
    let value = serde_json::to_value(state).unwrap();
    assert_eq!(value, serde_json::json!({"column": "market_cap", "direction": "asc"}));
  }

  #[test]
  fn test_reference_example() {
    let coins = vec![
      coin("Bitcoin", Some(0.8), false, Some(900e9), None, 0),
      coin("Zed", None, true, Some(50e9), None, 0),
      coin("Down", Some(-0.3), false, Some(10e9), None, 0),
    ];

    let ordered = sort_coins(&coins, SortState::default());
    assert_eq!(names(&ordered), vec!["Bitcoin", "Down", "Zed"]);
  }

  #[test]
  fn test_source_is_untouched() {
    let coins = fixture();
    let before = coins.clone();
    let _ = sort_coins(&coins, SortState::new(SortColumn::Name, SortDirection::Asc));
    assert_eq!(coins, before);
  }

  #[test]
  fn test_no_data_always_last() {
    let coins = fixture();
    for state in all_states() {
      let ordered = sort_coins(&coins, state);
      let first_no_data = ordered.iter().position(|c| !c.has_sentiment_data()).unwrap();
      assert!(
        ordered[first_no_data..].iter().all(|c| !c.has_sentiment_data()),
        "data record after no-data record under {:?}: {:?}",
        state,
        names(&ordered)
      );
    }
  }

  #[test]
  fn test_no_data_group_by_market_cap_desc() {
    let coins = fixture();
    for state in all_states() {
      let ordered = sort_coins(&coins, state);
      let caps: Vec<f64> =
        ordered.iter().filter(|c| !c.has_sentiment_data()).map(|c| c.market_cap_or_zero()).collect();
      assert!(caps.windows(2).all(|w| w[0] >= w[1]), "{:?} under {:?}", caps, state);
    }
  }

  #[test]
  fn test_no_data_ties_keep_input_order() {
    let coins = fixture();
    let ordered = sort_coins(&coins, SortState::new(SortColumn::Name, SortDirection::Asc));
    let tail: Vec<String> = names(&ordered).into_iter().skip(4).collect();
    assert_eq!(tail, vec!["stale", "Orphan", "Zed", "ghost"]);
  }

  #[test]
  fn test_sort_by_each_column() {
    let coins = fixture();

    let by = |column, direction| {
      names(&sort_coins(&coins, SortState::new(column, direction))).into_iter().take(4).collect::<Vec<_>>()
    };

    assert_eq!(by(SortColumn::Sentiment, SortDirection::Desc), vec!["Bitcoin", "alpha", "Ether", "Down"]);
    assert_eq!(by(SortColumn::Sentiment, SortDirection::Asc), vec!["Down", "alpha", "Ether", "Bitcoin"]);
    assert_eq!(by(SortColumn::MarketCap, SortDirection::Desc), vec!["Bitcoin", "Ether", "Down", "alpha"]);
    assert_eq!(by(SortColumn::Mentions, SortDirection::Desc), vec!["Bitcoin", "Ether", "Down", "alpha"]);
    assert_eq!(by(SortColumn::Price, SortDirection::Asc), vec!["alpha", "Down", "Ether", "Bitcoin"]);
    assert_eq!(by(SortColumn::Name, SortDirection::Asc), vec!["alpha", "Bitcoin", "Down", "Ether"]);
  }

  #[test]
  fn test_reversing_direction_reverses_unequal_pairs() {
    let coins = fixture();
    for column in SortColumn::ALL {
      let asc = sort_coins(&coins, SortState::new(column, SortDirection::Asc));
      let desc = sort_coins(&coins, SortState::new(column, SortDirection::Desc));
      let position = |list: &[&Coin], name: &str| list.iter().position(|c| c.name == name).unwrap();

      let with_data: Vec<&Coin> = coins.iter().filter(|c| c.has_sentiment_data()).collect();
      for a in &with_data {
        for b in &with_data {
          let natural = compare_coins(a, b, SortState::new(column, SortDirection::Asc));
          if natural == Ordering::Less {
            assert!(position(&asc, &a.name) < position(&asc, &b.name));
            assert!(position(&desc, &a.name) > position(&desc, &b.name));
          }
        }
      }
    }
  }

  #[test]
  fn test_sort_is_idempotent() {
    let coins = fixture();
    for state in all_states() {
      let once: Vec<Coin> = sort_coins(&coins, state).into_iter().cloned().collect();
      let twice: Vec<Coin> = sort_coins(&once, state).into_iter().cloned().collect();
      assert_eq!(once, twice);
    }
  }

  #[test]
  fn test_empty_input() {
    assert!(sort_coins(&[], SortState::default()).is_empty());
  }
}
