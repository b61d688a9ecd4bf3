//! Display currency for quoted prices.
//!
//! Prices are computed in plain floating point. The currency only decides how
//! a price is rounded and printed.
//!
//! # Examples
//!
//! ```
//! use ratecard_core::types::currency::Currency;
//!
//! let php = Currency::PHP;
//! assert_eq!(php.code(), "PHP");
//! assert_eq!(php.format_amount(1234.5), "Php 1,234.50");
//!
//! let jpy = Currency::JPY;
//! assert_eq!(jpy.format_amount(1234.4), "¥ 1,234");
//! ```

use std::fmt;
use std::str::FromStr;

use super::error::CurrencyError;

/// ISO 4217 currencies with display metadata.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Currency {
    /// Philippine Peso
    #[default]
    PHP,

    /// United States Dollar
    USD,

    /// Euro
    EUR,

    /// British Pound Sterling
    GBP,

    /// Japanese Yen (no minor units)
    JPY,
}

impl Currency {
    /// Returns the ISO 4217 three-letter currency code.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::PHP => "PHP",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::JPY => "JPY",
        }
    }

    /// Prefix printed before an amount.
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::PHP => "Php",
            Currency::USD => "$",
            Currency::EUR => "€",
            Currency::GBP => "£",
            Currency::JPY => "¥",
        }
    }

    /// Returns the standard number of decimal places for this currency.
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::JPY => 0,
            _ => 2,
        }
    }

    /// Round `amount` to the currency's minor unit.
    pub fn round(&self, amount: f64) -> f64 {
        let scale = 10f64.powi(self.decimal_places() as i32);
        (amount * scale).round() / scale
    }

    /// Format `amount` with the currency symbol and thousands separators.
    pub fn format_amount(&self, amount: f64) -> String {
        let places = self.decimal_places() as usize;
        let fixed = format!("{:.*}", places, self.round(amount).abs());
        let (whole, fraction) = match fixed.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (fixed.as_str(), None),
        };

        let is_zero = fixed.chars().all(|c| c == '0' || c == '.');
        let sign = if amount < 0.0 && !is_zero { "-" } else { "" };

        let mut out = format!("{} {}{}", self.symbol(), sign, group_thousands(whole));
        if let Some(fraction) = fraction {
            out.push('.');
            out.push_str(fraction);
        }
        out
    }
}

fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for Currency {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PHP" => Ok(Currency::PHP),
            "USD" => Ok(Currency::USD),
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "JPY" => Ok(Currency::JPY),
            _ => Err(CurrencyError::UnknownCurrency(s.to_string())),
        }
    }
}
