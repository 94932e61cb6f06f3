use crate::{
    error::RuntimeError,
    interpreter::{lexer::Token, registry::OperatorRegistry},
};

/// Result type used by the solver and by operator functions.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Reduces postfix sequences to a single value.
#[derive(Debug, Clone, Copy)]
pub struct Solver<'r> {
    registry: &'r OperatorRegistry,
}

impl<'r> Solver<'r> {
    #[must_use]
    pub const fn new(registry: &'r OperatorRegistry) -> Self {
        Self { registry }
    }

    /// Evaluates `postfix` with a value stack.
    ///
    /// Numbers are pushed. An operator pops its operands (the right operand
    /// first, since it was pushed last), applies its function and pushes the
    /// result. Exactly one value must remain at the end.
    ///
    /// # Errors
    /// - `EmptyExpression` for an empty sequence.
    /// - `UnknownOperator` for a symbol missing from the registry.
    /// - `InsufficientOperands` when the stack runs dry.
    /// - `MalformedExpression` when more than one value remains, or a
    ///   parenthesis is found.
    /// - `NotFinite` when an operator produces infinity or NaN.
    /// - Domain errors of the operators themselves.
    ///
    /// # Example
    /// ```
    /// use opcalc::interpreter::{
    ///     evaluator::Solver,
    ///     lexer::Token,
    ///     registry::{BINARY_MINUS, OperatorRegistry},
    /// };
    ///
    /// let registry = OperatorRegistry::standard();
    /// let postfix = [Token::Number(10.0), Token::Number(4.0), Token::Operator(BINARY_MINUS)];
    ///
    /// assert_eq!(Solver::new(&registry).solve(&postfix).unwrap(), 6.0);
    /// ```
    pub fn solve(&self, postfix: &[Token<'_>]) -> EvalResult<f64> {
        if postfix.is_empty() {
            return Err(RuntimeError::EmptyExpression);
        }

        let mut stack: Vec<f64> = Vec::with_capacity(postfix.len());

        for token in postfix {
            match token {
                Token::Number(value) => stack.push(*value),
                Token::Operator(symbol) => self.apply(symbol, &mut stack)?,
                Token::LeftParen | Token::RightParen => {
                    return Err(RuntimeError::MalformedExpression { remaining: stack.len() });
                },
            }
        }

        match stack.as_slice() {
            [value] => Ok(*value),
            _ => Err(RuntimeError::MalformedExpression { remaining: stack.len() }),
        }
    }

    fn apply(&self, symbol: &str, stack: &mut Vec<f64>) -> EvalResult<()> {
        let operator = self.registry.get(symbol)?;
        let expected = operator.arity().operands();

        if stack.len() < expected {
            return Err(RuntimeError::InsufficientOperands { symbol: symbol.to_string(),
                                                            expected,
                                                            found: stack.len() });
        }

        let operands = stack.split_off(stack.len() - expected);
        let result = operator.apply(&operands)?;
        if !result.is_finite() {
            return Err(RuntimeError::NotFinite { symbol: symbol.to_string() });
        }

        stack.push(result);
        Ok(())
    }
}
