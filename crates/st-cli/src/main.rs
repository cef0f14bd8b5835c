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
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use st_client::SentimentClient;
use st_core::Config;

mod commands;
mod render;

use commands::{articles::ArticlesCommand, coins::CoinsCommand, detail::DetailCommand};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(name = "st")]
#[command(propagate_version = true)]
struct Cli {
  #[command(subcommand)]
  command: Commands,

  /// Backend base URL (overrides SENTIMENT_API_URL)
  #[arg(long, global = true)]
  api_url: Option<String>,

  /// Verbose output
  #[arg(short, long, global = true)]
  verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
  /// Show the sentiment table for every tracked coin
  Coins(CoinsCommand),
  /// Show one coin's recent prices and sentiment
  Detail(DetailCommand),
  /// List recent articles mentioning a coin
  Articles(ArticlesCommand),
}

#[tokio::main]
async fn main() -> Result<()> {
  // Load environment variables
  dotenv().ok();

  let cli = Cli::parse();

  let log_level = if cli.verbose { "debug" } else { "info" };
  tracing_subscriber::fmt().with_env_filter(log_level).init();

  // Resolved once; the client only ever sees this value
  let mut config = Config::from_env()?;
  if let Some(api_url) = cli.api_url.as_deref() {
    config = config.with_base_url(api_url)?;
  }

  let client = SentimentClient::new(config)?;

  match cli.command {
    Commands::Coins(cmd) => commands::coins::execute(cmd, &client).await?,
    Commands::Detail(cmd) => commands::detail::execute(cmd, &client).await?,
    Commands::Articles(cmd) => commands::articles::execute(cmd, &client).await?,
  }

  Ok(())
}
