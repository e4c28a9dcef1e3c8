//! Prices
//!
//! Catalog listings are scraped from storefronts, so a price may arrive as a plain number or as a
//! formatted string such as `"₹45,999"`. Everything past this module works with a non-negative
//! [`Decimal`].

use rust_decimal::{Decimal, RoundingStrategy, prelude::ToPrimitive};
use rusty_money::{
    Money,
    iso::{self, Currency},
};
use serde::{Deserialize, Serialize};

/// Currency markers accepted on either side of a formatted amount, longest first.
const CURRENCY_MARKERS: [&str; 4] = ["Rs.", "INR", "Rs", "₹"];

/// Normalize a formatted price string into a plain amount.
///
/// Rupee symbols and codes around the number, thousands separators and whitespace are
/// discarded. Anything else left in the text, or a negative amount, normalizes to zero.
pub fn normalize_price(raw: &str) -> Decimal {
    if raw.contains('-') {
        return Decimal::ZERO;
    }

    let digits: String = strip_currency(raw)
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();

    digits.parse::<Decimal>().unwrap_or(Decimal::ZERO)
}

/// Remove currency markers from both ends until none remain.
fn strip_currency(raw: &str) -> &str {
    let mut text = raw.trim();
    let mut stripped = true;

    while stripped {
        stripped = false;

        for marker in CURRENCY_MARKERS {
            if let Some(rest) = strip_marker_prefix(text, marker) {
                text = rest.trim_start();
                stripped = true;
            }

            if let Some(rest) = strip_marker_suffix(text, marker) {
                text = rest.trim_end();
                stripped = true;
            }
        }
    }

    text
}

fn strip_marker_prefix<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    text.get(..marker.len())
        .filter(|head| head.eq_ignore_ascii_case(marker))
        .and_then(|_| text.get(marker.len()..))
}

fn strip_marker_suffix<'a>(text: &'a str, marker: &str) -> Option<&'a str> {
    let split = text.len().checked_sub(marker.len())?;

    text.get(split..)
        .filter(|tail| tail.eq_ignore_ascii_case(marker))
        .and_then(|_| text.get(..split))
}

/// Clamp a numeric amount to the non-negative range.
pub fn non_negative(amount: Decimal) -> Decimal {
    amount.max(Decimal::ZERO)
}

/// Convert an amount into minor units (paise) of the catalog currency, rounding half away from
/// zero. Amounts too large to represent fall back to zero.
pub fn to_minor_units(amount: Decimal) -> i64 {
    amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|minor| {
            minor
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .to_i64()
        })
        .unwrap_or_default()
}

/// Express an amount as money in the catalog currency (Indian rupees).
pub fn as_money(amount: Decimal) -> Money<'static, Currency> {
    Money::from_minor(to_minor_units(amount), iso::INR)
}

/// A price as it appears in a catalog document: either already numeric or a formatted string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawPrice {
    /// Numeric amount.
    Amount(Decimal),

    /// Currency-formatted text.
    Formatted(String),
}

impl RawPrice {
    /// Resolve the raw value into a non-negative amount.
    pub fn normalize(&self) -> Decimal {
        match self {
            Self::Amount(amount) => non_negative(*amount),
            Self::Formatted(text) => normalize_price(text),
        }
    }
}

impl Default for RawPrice {
    fn default() -> Self {
        Self::Amount(Decimal::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::Decimal;

    use super::*;

    #[test]
    fn strips_rupee_symbol_and_thousands_separators() {
        assert_eq!(normalize_price("₹45,999"), Decimal::from(45_999));
    }

    #[test]
    fn keeps_fractional_amounts() {
        assert_eq!(normalize_price("₹1,299.50"), Decimal::new(129_950, 2));
    }

    #[test]
    fn strips_currency_codes_on_either_side() {
        assert_eq!(normalize_price("Rs. 12,000"), Decimal::from(12_000));
        assert_eq!(normalize_price("12,000 INR"), Decimal::from(12_000));
    }

    #[test]
    fn plain_numbers_pass_through() {
        assert_eq!(normalize_price("899"), Decimal::from(899));
    }

    #[test]
    fn malformed_input_normalizes_to_zero() {
        assert_eq!(normalize_price("call for price"), Decimal::ZERO);
        assert_eq!(normalize_price("1.2.3"), Decimal::ZERO);
        assert_eq!(normalize_price(""), Decimal::ZERO);
    }

    #[test]
    fn text_around_digits_normalizes_to_zero() {
        for raw in ["12abc", "abc12", "approx 5", "call for price 999", "Model 3080 Ti", "₹"] {
            assert_eq!(normalize_price(raw), Decimal::ZERO, "{raw:?} should not parse");
        }
    }

    #[test]
    fn currency_markers_are_case_insensitive() {
        assert_eq!(normalize_price("rs 2,499"), Decimal::from(2_499));
        assert_eq!(normalize_price("₹ 2,499 inr"), Decimal::from(2_499));
        assert_eq!(normalize_price("Rs.2,499"), Decimal::from(2_499));
    }

    #[test]
    fn negative_input_normalizes_to_zero() {
        assert_eq!(normalize_price("-₹500"), Decimal::ZERO);
        assert_eq!(RawPrice::Amount(Decimal::from(-5)).normalize(), Decimal::ZERO);
    }

    #[test]
    fn minor_units_round_to_paise() {
        assert_eq!(to_minor_units(Decimal::new(45_999, 0)), 4_599_900);
        assert_eq!(to_minor_units(Decimal::new(10_005, 3)), 1_001);
    }

    #[test]
    fn raw_price_deserializes_numbers_and_strings() -> Result<(), serde_norway::Error> {
        let number: RawPrice = serde_norway::from_str("45999")?;
        let text: RawPrice = serde_norway::from_str("\"₹45,999\"")?;

        assert_eq!(number.normalize(), Decimal::from(45_999));
        assert_eq!(text.normalize(), Decimal::from(45_999));

        Ok(())
    }
}
