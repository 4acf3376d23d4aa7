/// Largest signed integer exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_I64_INT: i64 = 9_007_199_254_740_991;

/// Converts an `f64` to `i64` if and only if it is exactly representable.
///
/// ## Parameters
/// - `value`: The value to convert.
///
/// ## Returns
/// - `Some(i64)`: The converted value if the conversion is lossless.
/// - `None`: If the value is non-finite, fractional, or exceeds
///   `MAX_SAFE_I64_INT` in absolute value.
///
/// ## Example
/// ```
/// use numera::util::num::f64_to_i64_exact;
///
/// assert_eq!(f64_to_i64_exact(1024.0), Some(1024));
/// assert_eq!(f64_to_i64_exact(-3.0), Some(-3));
/// assert_eq!(f64_to_i64_exact(1.5), None);
/// assert_eq!(f64_to_i64_exact(1e300), None);
/// ```
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn f64_to_i64_exact(value: f64) -> Option<i64> {
    if !value.is_finite() || value.fract() != 0.0 {
        return None;
    }
    if value.abs() > MAX_SAFE_I64_INT as f64 {
        return None;
    }
    Some(value as i64)
}
