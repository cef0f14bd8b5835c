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

use anyhow::Result;
use clap::Args;
use colored::Colorize;
use st_client::SentimentClient;

#[derive(Args, Debug)]
pub struct ArticlesCommand {
  /// Coin id as listed by `st coins`
  coin_id: i64,

  /// Maximum number of articles
  #[arg(short, long, default_value_t = st_core::DEFAULT_ARTICLE_LIMIT)]
  limit: u32,
}

pub async fn execute(cmd: ArticlesCommand, client: &SentimentClient) -> Result<()> {
  let articles = client.coins().articles(cmd.coin_id, cmd.limit).await?;

  if articles.is_empty() {
    println!("{}", "No recent articles".dimmed());
    return Ok(());
  }

  for article in &articles {
    let published = article
      .published_at()
      .map(|dt| dt.format("%Y-%m-%d %H:%M UTC").to_string())
      .unwrap_or_else(|| article.published_date.clone());

    println!("{}  {}", published.dimmed(), article.title.bold());
    if let Some(summary) = article.summary.as_deref().filter(|s| !s.is_empty()) {
      println!("    {}", summary);
    }
    if let Some(link) = article.link.as_deref() {
      println!("    {}", link.blue());
    }
  }

  Ok(())
}
