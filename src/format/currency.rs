use rust_decimal::prelude::FromPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::core::Currency;

use super::{group_thousands, parse_numeric};

/// Render a numeric string as a two-decimal currency amount:
/// `format_currency("1234.5", Currency::Usd)` → `"$1,234.50"`.
///
/// The sign precedes the symbol (`"-$1,234.50"`); alphabetic symbols
/// are separated from the amount by a non-breaking space. Non-numeric
/// input keeps the symbol and renders the amount as `"NaN"`.
pub fn format_currency(input: &str, currency: Currency) -> String {
    let symbol = currency.symbol();
    let separator = if symbol.ends_with(|c: char| c.is_ascii_alphabetic()) {
        "\u{a0}"
    } else {
        ""
    };

    let value = parse_numeric(input);
    let Some(dec) = value
        .is_finite()
        .then(|| Decimal::from_f64(value))
        .flatten()
    else {
        return format!("{symbol}{separator}NaN");
    };

    let rounded = dec.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };

    format!(
        "{sign}{symbol}{separator}{}.{frac_part}",
        group_thousands(int_part)
    )
}
