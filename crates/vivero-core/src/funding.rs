//! Funding amount parsing.
//!
//! The source sheets carry funding as free text: plain euro amounts
//! ("500000"), currency-decorated amounts ("€1.200.000"), millions
//! shorthand ("2.5"), and display strings with magnitude suffixes
//! ("€1.5M"). Two parsers cover these families:
//!
//! - [`parse_funding_amount`] is the canonical parser used by filtering,
//!   scoring, sorting, and analytics.
//! - [`parse_labeled_funding`] understands K/M/B magnitude suffixes and is
//!   meant for display strings that carry one.
//!
//! Both are total: anything unparseable is 0.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::defaults::{MILLIONS_MULTIPLIER, MILLIONS_SHORTHAND_THRESHOLD};

/// Leading decimal number after separator cleanup.
static LEADING_NUMBER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(?:\d+(?:\.\d+)?|\.\d+)").unwrap());

/// Digit run plus optional magnitude suffix in a display string.
static LABELED_AMOUNT: Lazy<Regex> = Lazy::new(|| Regex::new(r"([\d.,]+)([KMBkmb]?)").unwrap());

/// Parse a loosely-formatted funding string into euros.
///
/// Every character except digits and the `.`/`,` separators is dropped,
/// commas become decimal points, and the leading decimal number of what
/// remains is taken (a second separator group like the tail of
/// "1.200.000" is ignored, so that value reads as 1.2 million).
///
/// Amounts below [`MILLIONS_SHORTHAND_THRESHOLD`] that were written with a
/// decimal separator are shorthand for millions: "2.5" means €2,500,000.
/// Bare integers are taken literally. This shorthand is ambiguous by
/// nature (a genuine €2.50 cannot be told apart from €2.5M); a
/// unit-tagged funding column is the durable fix, until then the rule
/// matches how the sheets are filled in.
pub fn parse_funding_amount(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, '.' | ','))
        .map(|c| if c == ',' { '.' } else { c })
        .collect();

    let Some(number) = LEADING_NUMBER.find(&cleaned) else {
        return 0.0;
    };
    let Ok(value) = number.as_str().parse::<f64>() else {
        return 0.0;
    };

    if value < MILLIONS_SHORTHAND_THRESHOLD && number.as_str().contains('.') {
        value * MILLIONS_MULTIPLIER
    } else {
        value
    }
}

/// Parse a display funding string with an optional K/M/B magnitude suffix.
///
/// "€1.5M" is €1,500,000 and "500K" is €500,000. Strings without a suffix
/// are read at face value with no millions shorthand applied. Unparseable
/// input is 0.
pub fn parse_labeled_funding(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| *c != '€' && !c.is_whitespace())
        .collect();

    let Some(caps) = LABELED_AMOUNT.captures(&cleaned) else {
        return 0.0;
    };

    let number = caps[1].replace(',', ".");
    let Some(prefix) = LEADING_NUMBER.find(&number) else {
        return 0.0;
    };
    let Ok(amount) = prefix.as_str().parse::<f64>() else {
        return 0.0;
    };

    let multiplier = match caps[2].to_ascii_uppercase().as_str() {
        "B" => 1_000_000_000.0,
        "M" => 1_000_000.0,
        "K" => 1_000.0,
        _ => 1.0,
    };

    amount * multiplier
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_amount(got: f64, want: f64) {
        assert!((got - want).abs() < 1e-3, "got {}, want {}", got, want);
    }

    #[test]
    fn plain_amount_is_literal() {
        assert_amount(parse_funding_amount("500000"), 500_000.0);
    }

    #[test]
    fn decimal_below_threshold_is_millions() {
        assert_amount(parse_funding_amount("2.5"), 2_500_000.0);
    }

    #[test]
    fn empty_is_zero() {
        assert_amount(parse_funding_amount(""), 0.0);
    }

    #[test]
    fn currency_and_grouping_separators() {
        // The first separator is read as a decimal point, so the value is
        // 1.2 and the shorthand brings it back to 1.2 million.
        assert_amount(parse_funding_amount("€1.200.000"), 1_200_000.0);
    }

    #[test]
    fn bare_integer_below_threshold_is_literal() {
        assert_amount(parse_funding_amount("100"), 100.0);
    }

    #[test]
    fn comma_is_a_decimal_point() {
        assert_amount(parse_funding_amount("1,5"), 1_500_000.0);
    }

    #[test]
    fn leading_dot_parses() {
        assert_amount(parse_funding_amount(".5"), 500_000.0);
    }

    #[test]
    fn garbage_is_zero() {
        assert_amount(parse_funding_amount("pendiente"), 0.0);
        assert_amount(parse_funding_amount("N/A"), 0.0);
    }

    #[test]
    fn labeled_millions_suffix() {
        assert_amount(parse_labeled_funding("€1.5M"), 1_500_000.0);
        assert_amount(parse_labeled_funding("2m"), 2_000_000.0);
    }

    #[test]
    fn labeled_thousands_suffix() {
        assert_amount(parse_labeled_funding("500K"), 500_000.0);
    }

    #[test]
    fn labeled_billions_suffix() {
        assert_amount(parse_labeled_funding("1B"), 1_000_000_000.0);
    }

    #[test]
    fn labeled_without_suffix_is_face_value() {
        // No millions shorthand on the labeled path.
        assert_amount(parse_labeled_funding("2.5"), 2.5);
    }

    #[test]
    fn labeled_garbage_is_zero() {
        assert_amount(parse_labeled_funding("por confirmar"), 0.0);
        assert_amount(parse_labeled_funding(""), 0.0);
    }

    #[test]
    fn labeled_comma_decimal() {
        assert_amount(parse_labeled_funding("€1,2M"), 1_200_000.0);
    }
}
