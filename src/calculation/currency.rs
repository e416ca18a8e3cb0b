//! Output rounding for currency amounts.
//!
//! Internal arithmetic keeps full precision; amounts are rounded only when
//! they leave the engine.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places in an output amount (USD cents).
pub const CURRENCY_DECIMAL_PLACES: u32 = 2;

/// Rounds an amount to the cent, half away from zero, with exactly two decimal places.
///
/// # Examples
///
/// ```
/// use valuation_engine::calculation::round_currency;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_currency(Decimal::new(2086, 0)).to_string(), "2086.00");
/// assert_eq!(round_currency(Decimal::new(4585, 3)).to_string(), "4.59");
/// ```
pub fn round_currency(amount: Decimal) -> Decimal {
    let mut rounded = amount.round_dp_with_strategy(
        CURRENCY_DECIMAL_PLACES,
        RoundingStrategy::MidpointAwayFromZero,
    );
    rounded.rescale(CURRENCY_DECIMAL_PLACES);
    rounded
}

/// Truncates an amount to the cent, with exactly two decimal places.
pub(crate) fn truncate_currency(amount: Decimal) -> Decimal {
    let mut truncated =
        amount.round_dp_with_strategy(CURRENCY_DECIMAL_PLACES, RoundingStrategy::ToZero);
    truncated.rescale(CURRENCY_DECIMAL_PLACES);
    truncated
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_round_pads_to_two_places() {
        assert_eq!(round_currency(dec("1550")).to_string(), "1550.00");
        assert_eq!(round_currency(dec("2086.0")).to_string(), "2086.00");
    }

    #[test]
    fn test_round_half_away_from_zero() {
        assert_eq!(round_currency(dec("0.125")), dec("0.13"));
        assert_eq!(round_currency(dec("0.135")), dec("0.14"));
        assert_eq!(round_currency(dec("0.124")), dec("0.12"));
    }

    #[test]
    fn test_round_repeating_share() {
        let share = dec("1550.00") / dec("3");
        assert_eq!(round_currency(share).to_string(), "516.67");
    }

    #[test]
    fn test_truncate_drops_fraction_of_cent() {
        let share = dec("1550.00") / dec("3");
        assert_eq!(truncate_currency(share).to_string(), "516.66");
        assert_eq!(truncate_currency(dec("4")).to_string(), "4.00");
    }
}
