//! US dollar display formatting.
//!
//! Statements are printed in en-US convention: `$` prefix, comma thousands
//! separator, exactly two decimal places. This is the only place cents are
//! turned into major units.

use std::num::NonZeroU64;

use rust_decimal::{Decimal, RoundingStrategy};

/// Format an amount in minor units as US dollars, e.g. `$1,730.00`.
///
/// `cents_per_unit` is the scale factor between minor and major units
/// (100 for cents). Results with more than two decimal places are rounded
/// half away from zero.
pub fn format_usd(cents: u64, cents_per_unit: NonZeroU64) -> String {
    let major = Decimal::from(cents) / Decimal::from(cents_per_unit.get());
    let rounded = major.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let plain = format!("{rounded:.2}");
    let (whole, fraction) = plain.split_once('.').unwrap_or((plain.as_str(), "00"));
    format!("${}.{}", group_thousands(whole), fraction)
}

/// Insert a comma between every group of three digits, counted from the right.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cents() -> NonZeroU64 {
        NonZeroU64::new(100).unwrap()
    }

    #[test]
    fn formats_whole_dollars() {
        assert_eq!(format_usd(65_000, cents()), "$650.00");
        assert_eq!(format_usd(0, cents()), "$0.00");
    }

    #[test]
    fn formats_fractional_cents() {
        assert_eq!(format_usd(5, cents()), "$0.05");
        assert_eq!(format_usd(123_456, cents()), "$1,234.56");
    }

    #[test]
    fn groups_thousands() {
        assert_eq!(format_usd(173_000, cents()), "$1,730.00");
        assert_eq!(format_usd(100_000_000, cents()), "$1,000,000.00");
        assert_eq!(format_usd(99_999, cents()), "$999.99");
    }

    #[test]
    fn other_scale_factors() {
        let mills = NonZeroU64::new(1000).unwrap();
        assert_eq!(format_usd(1_234_565, mills), "$1,234.57");
        assert_eq!(format_usd(42, NonZeroU64::new(1).unwrap()), "$42.00");
    }
}
