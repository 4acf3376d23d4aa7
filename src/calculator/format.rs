use std::ops::Range;

use crate::util::num::f64_to_i64_exact;

/// Results closer than this to their nearest integer render as that integer.
const INTEGER_TOLERANCE: f64 = 1e-12;
/// Number of significant digits carried by the compact rendering.
const SIGNIFICANT_DIGITS: i32 = 10;
/// Decimal exponents in this range render in fixed notation; outside it,
/// scientific notation is used.
const FIXED_EXPONENT_RANGE: Range<i32> = -4..SIGNIFICANT_DIGITS;

/// Renders a finite result as a human-readable string.
///
/// A value within `1e-12` of its nearest integer is rendered as that integer
/// with no decimal point, provided the integer is exactly representable as
/// an `f64`. Anything else is rendered with up to ten significant digits, in
/// fixed notation for moderate magnitudes and scientific notation otherwise,
/// with trailing insignificant zeros and a trailing decimal point dropped.
/// The integer collapse favors readability over full precision: it is lossy
/// for values very close to but not exactly integral.
///
/// # Parameters
/// - `value`: The finite value to render.
///
/// # Returns
/// The rendered string.
///
/// # Example
/// ```
/// use numera::calculator::format::format_result;
///
/// assert_eq!(format_result(10.0), "10");
/// assert_eq!(format_result(10.000_000_000_000_1), "10");
/// assert_eq!(format_result(1.5), "1.5");
/// assert_eq!(format_result(1.0 / 3.0), "0.3333333333");
/// ```
#[must_use]
pub fn format_result(value: f64) -> String {
    let nearest = value.round();
    if (value - nearest).abs() < INTEGER_TOLERANCE {
        if let Some(integer) = f64_to_i64_exact(nearest) {
            return integer.to_string();
        }
    }

    format_significant(value)
}

/// Renders `value` with up to [`SIGNIFICANT_DIGITS`] significant digits,
/// choosing fixed or scientific notation by decimal exponent.
#[allow(clippy::cast_sign_loss)]
#[allow(clippy::cast_possible_truncation)]
fn format_significant(value: f64) -> String {
    let precision = (SIGNIFICANT_DIGITS - 1) as usize;
    let scientific = format!("{value:.precision$e}");

    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return scientific;
    };
    let Ok(exponent) = exponent.parse::<i32>() else {
        return scientific;
    };

    if FIXED_EXPONENT_RANGE.contains(&exponent) {
        // Decimal places that keep the total at ten significant digits.
        let decimals = (SIGNIFICANT_DIGITS - 1 - exponent).max(0) as usize;
        trim_trailing_zeros(&format!("{value:.decimals$}"))
    } else {
        format!("{}e{exponent}", trim_trailing_zeros(mantissa))
    }
}

/// Drops trailing insignificant zeros and a trailing decimal point.
fn trim_trailing_zeros(rendered: &str) -> String {
    if rendered.contains('.') {
        rendered.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        rendered.to_string()
    }
}
