use num_format::{Locale, ToFormattedString};
use rust_decimal::{Decimal, RoundingStrategy};

/// Formats an amount as Brazilian real, e.g. `R$ 1.234,56`.
pub fn format_price(value: Decimal) -> String {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    let cents = rounded.mantissa().abs();
    let units = (cents / 100).to_formatted_string(&Locale::pt);

    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    format!("{sign}R$ {units},{:02}", cents % 100)
}
