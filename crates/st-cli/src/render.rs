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

//! Terminal rendering for the sentiment table

use chrono::{DateTime, Local};
use colored::Colorize;
use prettytable::{format, Cell, Row, Table};
use st_models::SentimentPoint;
use st_table::{format_sentiment, CoinRow, SentimentBucket, SortColumn, SortState, TableSummary};

/// prettytable foreground style for a bucket
fn bucket_style(bucket: SentimentBucket) -> &'static str {
  match bucket {
    SentimentBucket::Positive => "Fg",
    SentimentBucket::Neutral => "Fy",
    SentimentBucket::Negative => "Fr",
    SentimentBucket::NoData => "FD",
  }
}

fn legend_swatch(bucket: SentimentBucket) -> String {
  let swatch = "■";
  let colored = match bucket {
    SentimentBucket::Positive => swatch.green(),
    SentimentBucket::Neutral => swatch.yellow(),
    SentimentBucket::Negative => swatch.red(),
    SentimentBucket::NoData => swatch.bright_black(),
  };
  format!("{} {}", colored, bucket.label())
}

pub fn print_banner(last_updated: Option<DateTime<Local>>) {
  println!("{}", "24 Hour Crypto Sentiment Tracker".bold());
  println!("{}", "Cryptocurrency sentiment analysis based on news sources".dimmed());
  if let Some(ts) = last_updated {
    println!("{}", format!("Last updated: {}", ts.format("%Y-%m-%d %H:%M:%S")).dimmed());
  }
  println!();
}

fn header_cell(column: SortColumn, state: SortState) -> Cell {
  match state.indicator(column) {
    Some(arrow) => Cell::new(&format!("{} {}", column.label(), arrow)).style_spec("bFb"),
    None => Cell::new(column.label()).style_spec("b"),
  }
}

/// Build the main table. Columns follow `SortColumn::ALL`.
pub fn coin_table(rows: &[CoinRow<'_>], state: SortState) -> Table {
  let mut table = Table::new();
  table.set_format(*format::consts::FORMAT_BOX_CHARS);
  table.set_titles(Row::new(SortColumn::ALL.iter().map(|&c| header_cell(c, state)).collect()));

  for row in rows {
    let cells = SortColumn::ALL
      .iter()
      .map(|column| match column {
        SortColumn::Name => Cell::new(&format!("{} ({})", row.coin.name, row.coin.symbol)),
        SortColumn::Sentiment => Cell::new(&row.score).style_spec(bucket_style(row.bucket)),
        SortColumn::Mentions => Cell::new(&row.mentions).style_spec("r"),
        SortColumn::MarketCap => Cell::new(&row.market_cap).style_spec("r"),
        SortColumn::Price => Cell::new(&row.price).style_spec("r"),
      })
      .collect();
    table.add_row(Row::new(cells));
  }

  table
}

pub fn print_footer(summary: &TableSummary) {
  let legend: Vec<String> = SentimentBucket::ALL
    .iter()
    .map(|&b| format!("{} ({})", legend_swatch(b), summary.count(b)))
    .collect();
  println!("{}    {}", summary.caption(), legend.join("  "));
}

/// Day-by-day sentiment for the detail view
pub fn sentiment_history(points: &[SentimentPoint]) -> Table {
  let mut table = Table::new();
  table.set_format(*format::consts::FORMAT_BOX_CHARS);
  table.set_titles(Row::new(vec![
    Cell::new("Date").style_spec("b"),
    Cell::new("Sentiment Score").style_spec("b"),
    Cell::new("Mentions").style_spec("b"),
  ]));

  for point in points {
    let score = point.display_sentiment();
    table.add_row(Row::new(vec![
      Cell::new(&point.date),
      Cell::new(&format_sentiment(score)).style_spec(bucket_style(SentimentBucket::classify(score))),
      Cell::new(&point.mentions_count.unwrap_or(0).to_string()).style_spec("r"),
    ]));
  }

  table
}

#[cfg(test)]
mod tests {
  use super::*;
  use st_models::Coin;
  use st_table::build_rows;

  fn coin(name: &str, score: Option<f64>, no_mentions: bool) -> Coin {
    Coin {
      coin_id: 1,
      coingecko_id: name.to_lowercase(),
      symbol: name.to_uppercase(),
      name: name.to_string(),
      price_usd: Some(1.0),
      market_cap: Some(2e9),
      sentiment_score: score,
      mentions_count: 5,
      no_mentions,
    }
  }

  #[test]
  fn test_table_has_row_per_coin() {
    let coins = vec![coin("Up", Some(0.5), false), coin("Gone", None, true)];
    let rows = build_rows(&coins, SortState::default());
    let table = coin_table(&rows, SortState::default());

    assert_eq!(table.len(), 2);
    let rendered = table.to_string();
    assert!(rendered.contains("Sentiment Score ↓"));
    assert!(rendered.contains("$2.00B"));
    assert!(rendered.contains("—"));
  }

  #[test]
  fn test_no_data_cells_are_muted() {
    assert_eq!(bucket_style(SentimentBucket::NoData), "FD");
    assert_eq!(bucket_style(SentimentBucket::classify(None)), "FD");

    let styles: Vec<&str> = SentimentBucket::ALL.iter().map(|b| bucket_style(*b)).collect();
    for (i, style) in styles.iter().enumerate() {
      assert!(!styles[i + 1..].contains(style), "{style} reused");
    }
  }

  #[test]
  fn test_history_table() {
    let points = vec![
      SentimentPoint {
        date: "2024-01-02".to_string(),
        sentiment_score: Some(0.25),
        mentions_count: Some(4),
        no_mentions: Some(false),
      },
      SentimentPoint {
        date: "2024-01-01".to_string(),
        sentiment_score: Some(0.25),
        mentions_count: None,
        no_mentions: Some(true),
      },
    ];

    let rendered = sentiment_history(&points).to_string();
    assert!(rendered.contains("0.250"));
    assert!(rendered.contains("—"));
  }
}
