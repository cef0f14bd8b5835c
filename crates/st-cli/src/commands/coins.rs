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

use crate::render;
use anyhow::Result;
use chrono::Local;
use clap::Args;
use st_client::SentimentClient;
use st_table::{build_rows, SortColumn, SortDirection, SortState, TableSummary};
use tracing::info;

#[derive(Args, Debug)]
pub struct CoinsCommand {
  /// Column to sort by; repeat to click the same header again
  /// (sentiment, market_cap, mentions, price, name)
  #[arg(short, long = "sort")]
  sort: Vec<SortColumn>,

  /// Force a direction after the column selections (asc, desc)
  #[arg(short, long)]
  direction: Option<SortDirection>,
}

impl CoinsCommand {
  fn sort_state(&self) -> SortState {
    let mut state = SortState::default();
    for &column in &self.sort {
      state.select(column);
    }
    if let Some(direction) = self.direction {
      state.direction = direction;
    }
    state
  }
}

pub async fn execute(cmd: CoinsCommand, client: &SentimentClient) -> Result<()> {
  let state = cmd.sort_state();
  info!("Loading coin data from {} (sort: {} {})", client.base_url(), state.column, state.direction);

  let coins = client.coins().list().await?;
  let last_updated = Local::now();

  let rows = build_rows(&coins, state);
  let summary = TableSummary::from_coins(&coins);

  render::print_banner(Some(last_updated));
  render::coin_table(&rows, state).printstd();
  render::print_footer(&summary);

  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  fn cmd(sort: Vec<SortColumn>, direction: Option<SortDirection>) -> CoinsCommand {
    CoinsCommand { sort, direction }
  }

  #[test]
  fn test_default_sort_state() {
    assert_eq!(cmd(vec![], None).sort_state(), SortState::default());
  }

  #[test]
  fn test_repeated_column_acts_like_header_clicks() {
    let state = cmd(vec![SortColumn::Mentions, SortColumn::Mentions], None).sort_state();
    assert_eq!(state, SortState::new(SortColumn::Mentions, SortDirection::Asc));

    let state = cmd(vec![SortColumn::Sentiment], None).sort_state();
    assert_eq!(state, SortState::new(SortColumn::Sentiment, SortDirection::Asc));
  }

  #[test]
  fn test_explicit_direction_wins() {
    let state = cmd(vec![SortColumn::Price], Some(SortDirection::Asc)).sort_state();
    assert_eq!(state, SortState::new(SortColumn::Price, SortDirection::Asc));
  }
}
