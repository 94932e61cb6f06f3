/// Numeric conversion and formatting helpers.
///
/// This module provides a safe conversion from `f64` to `u64` that refuses
/// fractional, negative or out-of-range values, and the display rule for
/// results: whole numbers render without a decimal point.
pub mod num;
