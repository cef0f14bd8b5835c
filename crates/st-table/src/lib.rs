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

//! # st-table
//!
//! The sentiment table engine: a pure transform from fetched coin records to
//! an ordered, annotated sequence ready for rendering.
//!
//! - [`sort`]: sort state and the ordering rules
//! - [`bucket`]: sentiment classification and its colour tokens
//! - [`format`]: score, price and market cap text
//! - [`table`]: rows and footer summary
//!
//! ```
//! use st_table::{build_rows, SortColumn, SortState};
//! # let coins: Vec<st_models::Coin> = Vec::new();
//!
//! let mut state = SortState::default();
//! state.select(SortColumn::MarketCap);
//! for row in build_rows(&coins, state) {
//!     println!("{} {} {}", row.coin.name, row.score, row.market_cap);
//! }
//! ```

#![warn(clippy::all)]

pub mod bucket;
pub mod format;
pub mod sort;
pub mod table;

pub use bucket::SentimentBucket;
pub use format::{format_market_cap, format_price, format_score, format_sentiment, PLACEHOLDER};
pub use sort::{compare_coins, sort_coins, SortColumn, SortDirection, SortState, UnknownSortKey};
pub use table::{build_rows, CoinRow, TableSummary};
