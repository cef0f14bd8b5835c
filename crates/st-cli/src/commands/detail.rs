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
use clap::Args;
use colored::Colorize;
use st_client::SentimentClient;
use st_table::{format_market_cap, format_price, format_sentiment};

#[derive(Args, Debug)]
pub struct DetailCommand {
  /// Coin id as listed by `st coins`
  coin_id: i64,
}

pub async fn execute(cmd: DetailCommand, client: &SentimentClient) -> Result<()> {
  let detail = client.coins().detail(cmd.coin_id).await?;

  match &detail.coin {
    Some(coin) => println!("{} ({})", coin.name.bold(), coin.symbol),
    None => println!("{}", format!("Coin #{}", cmd.coin_id).bold()),
  }

  if let Some(latest) = detail.latest_price() {
    println!(
      "Price: {}   Market Cap: {}   ({})",
      format_price(latest.price_usd),
      format_market_cap(latest.market_cap),
      latest.date
    );
  }

  println!("Average sentiment: {}", format_sentiment(detail.average_sentiment()));

  if detail.recent_sentiment.is_empty() {
    println!("{}", "No sentiment history".dimmed());
  } else {
    render::sentiment_history(&detail.recent_sentiment).printstd();
  }

  Ok(())
}
