use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use super::{group_thousands, parse_numeric};

/// Render a numeric string rounded to one decimal place with thousands
/// separators: `"1234.56"` → `"1,234.6"`, `"1000"` → `"1,000"`.
///
/// Non-numeric input renders as `"NaN"`.
pub fn format_number(input: &str) -> String {
    let value = parse_numeric(input);
    if !value.is_finite() {
        return "NaN".to_string();
    }

    match Decimal::from_f64(value) {
        Some(dec) => format_decimal(dec),
        None => "NaN".to_string(),
    }
}

/// Same rendering for in-model amounts.
pub fn format_decimal(value: Decimal) -> String {
    let rounded = value
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let text = rounded.to_string();

    let (sign, unsigned) = match text.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", text.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((int_part, frac)) => (int_part, Some(frac)),
        None => (unsigned, None),
    };

    let mut out = String::from(sign);
    out.push_str(&group_thousands(int_part));
    if let Some(frac) = frac_part {
        out.push('.');
        out.push_str(frac);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rounds_to_one_decimal_with_separators() {
        assert_eq!(format_number("1234.56"), "1,234.6");
        assert_eq!(format_number("999.99"), "1,000");
        assert_eq!(format_number("0.25"), "0.3");
    }

    #[test]
    fn whole_numbers_drop_the_fraction() {
        assert_eq!(format_number("1000"), "1,000");
        assert_eq!(format_number("1234.0"), "1,234");
        assert_eq!(format_number("0"), "0");
    }

    #[test]
    fn negative_amounts() {
        assert_eq!(format_number("-1234.56"), "-1,234.6");
    }

    #[test]
    fn non_numeric_renders_nan() {
        assert_eq!(format_number("12abc"), "NaN");
        assert_eq!(format_number("--5"), "NaN");
    }

    #[test]
    fn empty_input_is_zero() {
        assert_eq!(format_number(""), "0");
        assert_eq!(format_number("   "), "0");
    }

    #[test]
    fn decimal_rendering_matches() {
        assert_eq!(format_decimal(dec!(1234.56)), "1,234.6");
        assert_eq!(format_decimal(dec!(900)), "900");
        assert_eq!(format_decimal(dec!(1000000)), "1,000,000");
    }
}
