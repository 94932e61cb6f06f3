use tracing::{debug, trace};

use crate::{
    error::Error,
    interpreter::{
        evaluator::Solver,
        lexer::{Token, Tokenizer, normalize},
        parser::Parser,
        registry::OperatorRegistry,
    },
};

/// Runs the tokenizer, parser and solver over an operator registry.
///
/// A calculator owns its registry and never mutates it, so one instance can
/// serve any number of evaluations, from any number of threads. Each call
/// works on its own stacks and keeps nothing between calls.
///
/// ## Usage
///
/// ```
/// use opcalc::interpreter::calculator::Calculator;
///
/// let calculator = Calculator::new();
/// assert_eq!(calculator.calculate("(3+5)*2-4/2^2+((10-10)*5)").unwrap(), 15.0);
/// assert!(calculator.calculate("5/0").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Calculator {
    registry: OperatorRegistry,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl Calculator {
    /// Creates a calculator over [`OperatorRegistry::standard`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_registry(OperatorRegistry::standard())
    }

    /// Creates a calculator over a custom operator table.
    #[must_use]
    pub const fn with_registry(registry: OperatorRegistry) -> Self {
        Self { registry }
    }

    #[must_use]
    pub const fn registry(&self) -> &OperatorRegistry {
        &self.registry
    }

    /// Tokenizes and parses `expression` without solving it.
    ///
    /// # Example
    /// ```
    /// use opcalc::interpreter::calculator::Calculator;
    ///
    /// let calculator = Calculator::new();
    /// let postfix = calculator.to_postfix("2 ^ 2 ^ 3").unwrap();
    /// let rendered: Vec<String> = postfix.iter().map(ToString::to_string).collect();
    /// assert_eq!(rendered.join(" "), "2 2 3 ^ ^");
    /// ```
    pub fn to_postfix(&self, expression: &str) -> Result<Vec<Token<'_>>, Error> {
        let normalized = normalize(expression);
        let tokens = Tokenizer::new(&self.registry).tokenize(&normalized);
        let postfix = Parser::new(&self.registry).parse(tokens)?;

        trace!(expression, postfix = %render(&postfix), "converted to postfix");
        Ok(postfix)
    }

    /// Evaluates `expression`.
    ///
    /// # Errors
    /// Returns the first error raised by any stage, unchanged.
    pub fn calculate(&self, expression: &str) -> Result<f64, Error> {
        let solver = Solver::new(&self.registry);
        let result = self.to_postfix(expression)
                         .and_then(|postfix| solver.solve(&postfix).map_err(Error::from));

        match &result {
            Ok(value) => debug!(expression, value, "evaluated"),
            Err(error) => debug!(expression, %error, "evaluation failed"),
        }
        result
    }
}

fn render(postfix: &[Token<'_>]) -> String {
    postfix.iter().map(ToString::to_string).collect::<Vec<_>>().join(" ")
}
