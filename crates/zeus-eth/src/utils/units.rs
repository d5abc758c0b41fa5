//! Unit conversions used when rendering amounts to the user.
//!
//! Amounts are rounded with integer arithmetic on [U256], fiat values are plain `f64`.

use alloy_primitives::{U256, utils::format_units};

/// Decimals shown for coin and token amounts
pub const RENDER_DECIMALS: u8 = 5;

/// Decimals shown for fiat amounts
pub const FIAT_DECIMALS: u32 = 2;

pub const ETH_DECIMALS: u8 = 18;

const GWEI_DECIMALS: u8 = 9;

/// Parse a hex quantity as found in transaction records (`0x1a`, `1a`, `0X1A`)
///
/// Returns `None` for an empty quantity or invalid digits.
pub fn hex_to_u256(value: &str) -> Option<U256> {
   let trimmed = value.trim();
   let digits = trimmed
      .strip_prefix("0x")
      .or_else(|| trimmed.strip_prefix("0X"))
      .unwrap_or(trimmed);

   if digits.is_empty() {
      return None;
   }

   U256::from_str_radix(digits, 16).ok()
}

fn pow10(exp: u8) -> Option<U256> {
   U256::from(10u64).checked_pow(U256::from(exp))
}

/// Render `amount` (in minimal units) with at most `places` decimals, rounding half up
fn round_units(amount: U256, decimals: u8, places: u8) -> String {
   let (scaled, places) = if decimals <= places {
      (amount, decimals)
   } else {
      let Some(shift) = pow10(decimals - places) else {
         // 10^decimals does not fit in 256 bits, nothing survives the rounding
         return "0".to_string();
      };
      let half = shift / U256::from(2u64);
      (amount.saturating_add(half) / shift, places)
   };

   if places == 0 {
      return scaled.to_string();
   }

   // places <= RENDER_DECIMALS here so the power always fits
   let unit = pow10(places).unwrap_or(U256::from(1u64));
   let integer = scaled / unit;
   let fraction = (scaled % unit).to_string();
   let fraction = format!("{:0>width$}", fraction, width = places as usize);
   let fraction = fraction.trim_end_matches('0');

   if fraction.is_empty() {
      integer.to_string()
   } else {
      format!("{}.{}", integer, fraction)
   }
}

/// Render a token amount given in its minimal unit
///
/// Non-zero amounts below `0.00001` render as `< 0.00001`.
pub fn render_from_token_minimal_unit(amount: U256, decimals: u8) -> String {
   if amount.is_zero() {
      return "0".to_string();
   }

   if decimals > RENDER_DECIMALS {
      let below_threshold = match pow10(decimals - RENDER_DECIMALS) {
         Some(threshold) => amount < threshold,
         None => true,
      };
      if below_threshold {
         return format!("< 0.{:0>width$}", 1, width = RENDER_DECIMALS as usize);
      }
   }

   round_units(amount, decimals, RENDER_DECIMALS)
}

/// Render a wei amount in ether
pub fn render_from_wei(wei: U256) -> String {
   render_from_token_minimal_unit(wei, ETH_DECIMALS)
}

/// Convert a minimal unit amount to a float in whole tokens
///
/// Zero if `decimals` is out of range.
pub fn from_token_minimal_unit(amount: U256, decimals: u8) -> f64 {
   format_units(amount, decimals)
      .ok()
      .and_then(|units| units.parse().ok())
      .unwrap_or(0.0)
}

/// Render a wei amount in gwei, rounded to the nearest integer
pub fn render_to_gwei(wei: U256) -> String {
   round_units(wei, GWEI_DECIMALS, 0)
}

fn round_to(value: f64, decimals: u32) -> f64 {
   let base = 10f64.powi(decimals as i32);
   (value * base).round() / base
}

fn floor_to(value: f64, decimals: u32) -> f64 {
   let base = 10f64.powi(decimals as i32);
   (value * base).floor() / base
}

/// Ether value of `wei` in fiat, rounded to cents
pub fn wei_to_fiat_number(wei: U256, conversion_rate: f64) -> f64 {
   let eth = from_token_minimal_unit(wei, ETH_DECIMALS);
   round_to(eth * conversion_rate, FIAT_DECIMALS)
}

/// Render the fiat value of `wei`
///
/// `None` while the conversion rate is unknown.
pub fn wei_to_fiat(wei: U256, conversion_rate: Option<f64>, currency: &str) -> Option<String> {
   let rate = conversion_rate.filter(|rate| *rate != 0.0)?;
   Some(add_currency_symbol(
      wei_to_fiat_number(wei, rate),
      currency,
   ))
}

/// Fiat value of a token balance priced in ether
pub fn balance_to_fiat_number(
   balance: f64,
   conversion_rate: f64,
   exchange_rate: f64,
   decimals_to_show: u32,
) -> f64 {
   floor_to(balance * exchange_rate * conversion_rate, decimals_to_show)
}

/// Render the fiat value of a token balance
///
/// `None` when the token has no exchange rate or the conversion rate is unknown.
pub fn balance_to_fiat(
   balance: f64,
   conversion_rate: Option<f64>,
   exchange_rate: Option<f64>,
   currency: &str,
) -> Option<String> {
   let exchange_rate = exchange_rate.filter(|rate| *rate != 0.0)?;
   let conversion_rate = conversion_rate?;
   let fiat = balance_to_fiat_number(balance, conversion_rate, exchange_rate, FIAT_DECIMALS);
   Some(add_currency_symbol(fiat, currency))
}

/// Symbol shown in front of amounts for well known currencies
pub fn currency_symbol(currency: &str) -> Option<&'static str> {
   let symbol = match currency.to_ascii_lowercase().as_str() {
      "usd" | "aud" | "cad" | "nzd" | "sgd" | "hkd" => "$",
      "eur" => "€",
      "gbp" => "£",
      "jpy" | "cny" => "¥",
      "krw" => "₩",
      "inr" => "₹",
      "rub" => "₽",
      "brl" => "R$",
      "try" => "₺",
      "php" => "₱",
      _ => return None,
   };
   Some(symbol)
}

/// Attach the currency to a fiat amount, `$12.50` or `12.50 CHF`
pub fn add_currency_symbol(amount: f64, currency: &str) -> String {
   let decimals = FIAT_DECIMALS as usize;
   match currency_symbol(currency) {
      Some(symbol) => format!("{}{:.*}", symbol, decimals, amount),
      None => format!("{:.*} {}", decimals, amount, currency.to_uppercase()),
   }
}

#[cfg(test)]
mod tests {
   use super::*;
   use alloy_primitives::utils::parse_ether;

   #[test]
   fn parse_hex_quantities() {
      assert_eq!(hex_to_u256("0x5208"), Some(U256::from(21000u64)));
      assert_eq!(hex_to_u256("5208"), Some(U256::from(21000u64)));
      assert_eq!(hex_to_u256("0X3B9ACA00"), Some(U256::from(1_000_000_000u64)));
      assert_eq!(hex_to_u256("0x0"), Some(U256::ZERO));
      assert_eq!(hex_to_u256("0x"), None);
      assert_eq!(hex_to_u256(""), None);
      assert_eq!(hex_to_u256("0xzz"), None);
   }

   #[test]
   fn render_wei_amounts() {
      assert_eq!(render_from_wei(U256::ZERO), "0");
      assert_eq!(render_from_wei(parse_ether("1").unwrap()), "1");
      assert_eq!(render_from_wei(parse_ether("0.5").unwrap()), "0.5");
      assert_eq!(render_from_wei(parse_ether("1.234567").unwrap()), "1.23457");
      assert_eq!(render_from_wei(parse_ether("1.234564").unwrap()), "1.23456");
      assert_eq!(render_from_wei(parse_ether("12345.000001").unwrap()), "12345");
   }

   #[test]
   fn render_dust() {
      assert_eq!(render_from_wei(U256::from(1u64)), "< 0.00001");
      assert_eq!(render_from_wei(parse_ether("0.0000099").unwrap()), "< 0.00001");
      assert_eq!(render_from_wei(parse_ether("0.00001").unwrap()), "0.00001");
   }

   #[test]
   fn render_token_amounts() {
      // 6 decimals (USDC like)
      assert_eq!(render_from_token_minimal_unit(U256::from(1_500_000u64), 6), "1.5");
      assert_eq!(render_from_token_minimal_unit(U256::from(9u64), 6), "< 0.00001");
      // less decimals than we render
      assert_eq!(render_from_token_minimal_unit(U256::from(1234u64), 2), "12.34");
      assert_eq!(render_from_token_minimal_unit(U256::from(7u64), 0), "7");
      // absurd decimals never panic
      assert_eq!(render_from_token_minimal_unit(U256::from(7u64), 200), "< 0.00001");
   }

   #[test]
   fn minimal_unit_to_float() {
      assert_eq!(from_token_minimal_unit(U256::from(12_500_000u64), 6), 12.5);
      assert_eq!(
         from_token_minimal_unit(parse_ether("0.001834247995202872").unwrap(), ETH_DECIMALS),
         0.001834247995202872
      );
      assert_eq!(from_token_minimal_unit(U256::ZERO, ETH_DECIMALS), 0.0);
      assert_eq!(from_token_minimal_unit(U256::from(7u64), 200), 0.0);
   }

   #[test]
   fn render_gwei() {
      assert_eq!(render_to_gwei(U256::from(20_000_000_000u64)), "20");
      assert_eq!(render_to_gwei(U256::from(1_500_000_000u64)), "2");
      assert_eq!(render_to_gwei(U256::from(1_499_999_999u64)), "1");
      assert_eq!(render_to_gwei(U256::ZERO), "0");
   }

   #[test]
   fn fiat_rendering() {
      let wei = parse_ether("0.5").unwrap();
      assert_eq!(wei_to_fiat_number(wei, 200.0), 100.0);
      assert_eq!(wei_to_fiat(wei, Some(200.0), "usd").unwrap(), "$100.00");
      assert_eq!(wei_to_fiat(wei, Some(200.0), "chf").unwrap(), "100.00 CHF");
      assert_eq!(wei_to_fiat(wei, None, "usd"), None);
      assert_eq!(wei_to_fiat(wei, Some(0.0), "usd"), None);
   }

   #[test]
   fn balance_fiat() {
      // 10 tokens worth 0.005 ETH each, ETH at 200 USD
      assert_eq!(balance_to_fiat_number(10.0, 200.0, 0.005, 2), 10.0);
      assert_eq!(balance_to_fiat(10.0, Some(200.0), Some(0.005), "usd").unwrap(), "$10.00");
      assert_eq!(balance_to_fiat(10.0, Some(200.0), None, "usd"), None);
      assert_eq!(balance_to_fiat(10.0, Some(200.0), Some(0.0), "usd"), None);
      assert_eq!(balance_to_fiat(10.0, None, Some(0.005), "usd"), None);
   }

   #[test]
   fn balance_fiat_floors() {
      assert_eq!(balance_to_fiat_number(1.0, 1.0, 0.129, 2), 0.12);
   }

   #[test]
   fn currency_symbols() {
      assert_eq!(add_currency_symbol(3.5, "EUR"), "€3.50");
      assert_eq!(add_currency_symbol(0.0, "usd"), "$0.00");
      assert_eq!(add_currency_symbol(12.0, "eth"), "12.00 ETH");
   }
}
