use thiserror::Error;

/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing an expression or
/// converting it to postfix order. Parse errors include illegal characters,
/// malformed number literals, operators in positions their placement forbids
/// and unbalanced parentheses.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while solving a postfix
/// sequence. Runtime errors include missing operands, leftover values and the
/// domain failures of individual operators such as division by zero.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// A symbol was looked up that the operator registry does not know.
///
/// Returned by [`OperatorRegistry::get`](crate::interpreter::registry::OperatorRegistry::get)
/// and converted into the error of whichever phase performed the lookup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown operator '{symbol}'.")]
pub struct UnknownOperator {
    /// The symbol that was not found.
    pub symbol: String,
}

/// Any failure of a full `calculate` call.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// The expression could not be tokenized or parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The postfix sequence could not be solved.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
