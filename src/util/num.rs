/// Largest integer value exactly representable as an `f64` (`2^53 - 1`).
pub const MAX_SAFE_U64_INT: u64 = 9_007_199_254_740_991;

/// Safely converts an `f64` to `u64` if the value is finite, non-negative,
/// within the exactly representable range, and not fractional.
///
/// ## Returns
/// - `Some(u64)`: The converted value if it is safe.
/// - `None`: For non-finite, negative, out-of-range, or fractional values.
///
/// ## Example
/// ```
/// use opcalc::util::num::{MAX_SAFE_U64_INT, f64_to_u64_checked};
///
/// assert_eq!(f64_to_u64_checked(7.0), Some(7));
/// assert_eq!(f64_to_u64_checked(-5.0), None);
/// assert_eq!(f64_to_u64_checked(1.23), None);
/// assert_eq!(f64_to_u64_checked(f64::NAN), None);
/// assert_eq!(f64_to_u64_checked(MAX_SAFE_U64_INT as f64 * 2.0), None);
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
#[must_use]
pub fn f64_to_u64_checked(value: f64) -> Option<u64> {
    if !value.is_finite() || value < 0.0 || value > MAX_SAFE_U64_INT as f64 {
        return None;
    }
    if value.fract() != 0.0 {
        return None;
    }
    Some(value as u64)
}

/// Renders a calculation result for display.
///
/// Whole numbers are printed without a decimal point and everything else with
/// the shortest representation that round-trips. Negative zero is printed as
/// `0`.
///
/// ## Example
/// ```
/// use opcalc::util::num::format_number;
///
/// assert_eq!(format_number(15.0), "15");
/// assert_eq!(format_number(-4.0), "-4");
/// assert_eq!(format_number(3.5), "3.5");
/// assert_eq!(format_number(-0.0), "0");
/// ```
#[must_use]
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    value.to_string()
}
