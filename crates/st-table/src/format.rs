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

//! Display text for table cells
//!
//! Output matches the browser dashboard digit for digit: scores and market
//! caps round like `Number.prototype.toFixed`, prices like an en-US USD
//! `Intl.NumberFormat` with 2 to 6 fraction digits.

use rust_decimal::{Decimal, RoundingStrategy};
use st_models::Coin;
use std::str::FromStr;

/// Shown in place of any absent value
pub const PLACEHOLDER: &str = "—";

const TRILLION: f64 = 1e12;
const BILLION: f64 = 1e9;
const MILLION: f64 = 1e6;

/// Sentiment score to three decimals, or the placeholder for a no-data record
pub fn format_score(coin: &Coin) -> String {
  format_sentiment(coin.display_sentiment())
}

/// A bare score to three decimals, or the placeholder when absent
pub fn format_sentiment(score: Option<f64>) -> String {
  match score {
    Some(score) => to_fixed(score, 3),
    None => PLACEHOLDER.to_string(),
  }
}

/// USD price with grouping and 2 to 6 fraction digits
pub fn format_price(price: Option<f64>) -> String {
  match price {
    Some(price) => format_usd(price, 2, 6),
    None => PLACEHOLDER.to_string(),
  }
}

/// Market cap abbreviated by magnitude: `$1.23T`, `$4.56B`, `$7.89M`, `$999`.
///
/// Each tier includes its lower bound.
pub fn format_market_cap(market_cap: Option<f64>) -> String {
  let Some(cap) = market_cap else {
    return PLACEHOLDER.to_string();
  };

  if cap >= TRILLION {
    format!("${}T", to_fixed(cap / TRILLION, 2))
  } else if cap >= BILLION {
    format!("${}B", to_fixed(cap / BILLION, 2))
  } else if cap >= MILLION {
    format!("${}M", to_fixed(cap / MILLION, 2))
  } else {
    format!("${}", to_fixed(cap, 0))
  }
}

/// `Number.prototype.toFixed`: round the exact binary value, ties away from zero.
pub(crate) fn to_fixed(value: f64, digits: u32) -> String {
  if !value.is_finite() {
    return value.to_string();
  }

  let sign = if value < 0.0 { "-" } else { "" };
  let magnitude = value.abs();

  let body = match Decimal::from_f64_retain(magnitude) {
    Some(exact) => {
      let mut rounded = exact.round_dp_with_strategy(digits, RoundingStrategy::MidpointAwayFromZero);
      rounded.rescale(digits);
      rounded.to_string()
    }
    None => format!("{:.*}", digits as usize, magnitude),
  };

  format!("{}{}", sign, body)
}

/// en-US currency formatting: round the shortest decimal form of `value`
/// half away from zero to `max_digits`, trim trailing zeros down to
/// `min_digits`, and group the integer part by thousands.
fn format_usd(value: f64, min_digits: u32, max_digits: u32) -> String {
  if !value.is_finite() {
    return format!("${}", value);
  }

  let sign = if value < 0.0 { "-" } else { "" };
  let magnitude = value.abs();

  let decimal = Decimal::from_str(&magnitude.to_string())
    .ok()
    .or_else(|| Decimal::from_f64_retain(magnitude));

  let Some(decimal) = decimal else {
    return format!("{}${:.*}", sign, min_digits as usize, magnitude);
  };

  let mut rounded =
    decimal.round_dp_with_strategy(max_digits, RoundingStrategy::MidpointAwayFromZero).normalize();
  if rounded.scale() < min_digits {
    rounded.rescale(min_digits);
  }

  let text = rounded.to_string();
  let (integer, fraction) = match text.split_once('.') {
    Some((integer, fraction)) => (integer, Some(fraction)),
    None => (text.as_str(), None),
  };

  match fraction {
    Some(fraction) => format!("{}${}.{}", sign, group_thousands(integer), fraction),
    None => format!("{}${}", sign, group_thousands(integer)),
  }
}

fn group_thousands(digits: &str) -> String {
  let len = digits.len();
  let mut grouped = String::with_capacity(len + len / 3);
  for (i, ch) in digits.chars().enumerate() {
    if i > 0 && (len - i) % 3 == 0 {
      grouped.push(',');
    }
    grouped.push(ch);
  }
  grouped
}
