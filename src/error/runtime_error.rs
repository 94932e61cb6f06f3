use thiserror::Error;

use crate::error::UnknownOperator;

/// Represents all errors that can occur while solving a postfix sequence.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum RuntimeError {
    /// The postfix sequence held no tokens at all.
    #[error("Error: Nothing to evaluate.")]
    EmptyExpression,
    /// After all tokens were consumed the value stack did not hold exactly one
    /// value, or a parenthesis reached the solver.
    #[error("Error: Malformed expression, {remaining} values left after evaluation.")]
    MalformedExpression {
        /// Number of values left on the stack.
        remaining: usize,
    },
    /// An operator needed more operands than were on the stack.
    #[error("Error: Operator '{symbol}' expects {expected} operand(s) but found {found}.")]
    InsufficientOperands {
        /// The operator symbol.
        symbol:   String,
        /// Operands the operator consumes.
        expected: usize,
        /// Values that were available.
        found:    usize,
    },
    /// The postfix sequence names an operator the registry does not hold.
    #[error("Error: {0}")]
    UnknownOperator(#[from] UnknownOperator),
    /// Attempted division (or modulo) by zero.
    #[error("Error: Division by zero.")]
    DivisionByZero,
    /// Factorial of a negative or fractional value.
    #[error("Error: Factorial is only defined for non-negative whole numbers, but found {value}.")]
    FactorialDomain {
        /// The rejected operand.
        value: f64,
    },
    /// An operator produced an infinite or NaN result.
    #[error("Error: Operator '{symbol}' produced a result that is not a finite number.")]
    NotFinite {
        /// The operator symbol.
        symbol: String,
    },
}
