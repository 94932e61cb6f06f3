use thiserror::Error;

use crate::error::UnknownOperator;

/// Represents all errors that can occur during tokenizing or parsing.
///
/// Positions are character indices into the normalized expression, that is
/// the expression with all spaces and tabs removed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character that is neither a digit, a parenthesis, a minus sign nor a
    /// registered operator symbol.
    #[error("Error at index {index}: Illegal character '{character}'.")]
    IllegalCharacter {
        /// The offending character.
        character: char,
        /// Where it was found.
        index:     usize,
    },
    /// A number literal with more than one decimal point, or one that does not
    /// parse as a float.
    #[error("Error at index {index}: Invalid number '{literal}'.")]
    InvalidNumber {
        /// The literal as it was scanned.
        literal: String,
        /// Where the literal starts.
        index:   usize,
    },
    /// A prefix operator directly follows a unary or sign minus (or another
    /// prefix operator), or the expression is a lone minus.
    #[error("Error at index {index}: Unary operator is missing its operand.")]
    UnaryMishandle {
        /// Where the misplaced operator was found.
        index: usize,
    },
    /// An operator appears where its placement class forbids it, such as a
    /// binary operator with nothing on its left.
    #[error("Error at index {index}: Operator '{symbol}' is not allowed here.")]
    Placement {
        /// The operator symbol.
        symbol: String,
        /// Where the operator was found.
        index:  usize,
    },
    /// A `)` without a matching `(`.
    #[error("Error: Mismatched parentheses, too many right parentheses.")]
    TooManyRightParentheses,
    /// A `(` that is never closed.
    #[error("Error: Mismatched parentheses, too many left parentheses.")]
    TooManyLeftParentheses,
    /// The token stream names an operator the registry does not hold.
    #[error("Error: {0}")]
    UnknownOperator(#[from] UnknownOperator),
}

impl ParseError {
    /// Returns `true` for the two unbalanced-parentheses variants.
    ///
    /// # Example
    /// ```
    /// use opcalc::error::ParseError;
    ///
    /// assert!(ParseError::TooManyLeftParentheses.is_parentheses());
    /// assert!(!ParseError::UnaryMishandle { index: 0 }.is_parentheses());
    /// ```
    #[must_use]
    pub const fn is_parentheses(&self) -> bool {
        matches!(self, Self::TooManyRightParentheses | Self::TooManyLeftParentheses)
    }
}
