// Every operator shares the `OperatorFn` signature, even the infallible ones.
#![allow(clippy::unnecessary_wraps)]

use crate::{error::RuntimeError, interpreter::evaluator::EvalResult, util::num::f64_to_u64_checked};

/// Largest `n` for which `n!` is finite as an `f64`.
pub const MAX_FACTORIAL: u64 = 170;

pub fn add(left: f64, right: f64) -> EvalResult<f64> {
    Ok(left + right)
}

pub fn subtract(left: f64, right: f64) -> EvalResult<f64> {
    Ok(left - right)
}

pub fn multiply(left: f64, right: f64) -> EvalResult<f64> {
    Ok(left * right)
}

/// `left / right`, rejecting a zero divisor.
///
/// # Example
/// ```
/// use opcalc::{error::RuntimeError, interpreter::operator::builtin::divide};
///
/// assert_eq!(divide(9.0, 2.0).unwrap(), 4.5);
/// assert_eq!(divide(5.0, 0.0).unwrap_err(), RuntimeError::DivisionByZero);
/// ```
pub fn divide(left: f64, right: f64) -> EvalResult<f64> {
    if right == 0.0 {
        return Err(RuntimeError::DivisionByZero);
    }
    Ok(left / right)
}

pub fn power(base: f64, exponent: f64) -> EvalResult<f64> {
    Ok(base.powf(exponent))
}

/// Floored modulo: the result carries the sign of the divisor.
///
/// # Example
/// ```
/// use opcalc::interpreter::operator::builtin::modulo;
///
/// assert_eq!(modulo(10.0, 3.0).unwrap(), 1.0);
/// assert_eq!(modulo(-7.0, 3.0).unwrap(), 2.0);
/// assert_eq!(modulo(7.0, -3.0).unwrap(), -2.0);
/// assert!(modulo(1.0, 0.0).is_err());
/// ```
pub fn modulo(left: f64, right: f64) -> EvalResult<f64> {
    if right == 0.0 {
        return Err(RuntimeError::DivisionByZero);
    }
    let remainder = left % right;
    if remainder != 0.0 && (remainder < 0.0) != (right < 0.0) {
        Ok(remainder + right)
    } else {
        Ok(remainder)
    }
}

pub fn maximum(left: f64, right: f64) -> EvalResult<f64> {
    Ok(left.max(right))
}

pub fn minimum(left: f64, right: f64) -> EvalResult<f64> {
    Ok(left.min(right))
}

pub fn average(left: f64, right: f64) -> EvalResult<f64> {
    Ok((left + right) / 2.0)
}

pub fn negate(value: f64) -> EvalResult<f64> {
    Ok(-value)
}

/// `n!` for a non-negative whole `n`.
///
/// Values above [`MAX_FACTORIAL`] yield infinity, which the solver reports as
/// a non-finite result.
///
/// # Example
/// ```
/// use opcalc::interpreter::operator::builtin::factorial;
///
/// assert_eq!(factorial(0.0).unwrap(), 1.0);
/// assert_eq!(factorial(5.0).unwrap(), 120.0);
/// assert!(factorial(-3.0).is_err());
/// assert!(factorial(2.5).is_err());
/// assert!(factorial(171.0).unwrap().is_infinite());
/// ```
#[allow(clippy::cast_precision_loss)]
pub fn factorial(value: f64) -> EvalResult<f64> {
    let n = f64_to_u64_checked(value).ok_or(RuntimeError::FactorialDomain { value })?;
    if n > MAX_FACTORIAL {
        return Ok(f64::INFINITY);
    }

    Ok((2..=n).fold(1.0, |acc, k| acc * k as f64))
}

/// Sums the decimal digits of `value` as it is displayed, ignoring the sign
/// and the decimal point.
///
/// # Example
/// ```
/// use opcalc::interpreter::operator::builtin::digit_sum;
///
/// assert_eq!(digit_sum(123.123).unwrap(), 12.0);
/// assert_eq!(digit_sum(-56.0).unwrap(), 11.0);
/// ```
pub fn digit_sum(value: f64) -> EvalResult<f64> {
    let total: u32 = value.to_string().chars().filter_map(|c| c.to_digit(10)).sum();
    Ok(f64::from(total))
}
