use crate::{error::RuntimeError, interpreter::evaluator::EvalResult};

/// Evaluation functions of the standard operator table.
///
/// Each function is pure and reports domain failures (division by zero,
/// factorial of a fraction) as a `RuntimeError`.
pub mod builtin;

/// Number of operands an operator consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// One operand.
    Unary,
    /// Two operands.
    Binary,
}

impl Arity {
    /// How many values the operator pops from the evaluation stack.
    #[must_use]
    pub const fn operands(self) -> usize {
        match self {
            Self::Unary => 1,
            Self::Binary => 2,
        }
    }
}

/// Tie-break rule between operators of equal precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` groups as `a ^ (b ^ c)`.
    Right,
}

/// Where an operator symbol sits relative to its operand(s).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Prefix, e.g. `~3`.
    LeftOfValue,
    /// Infix, every binary operator.
    BetweenValues,
    /// Postfix, e.g. `3!`.
    RightOfValue,
}

/// The evaluation function of an operator, tagged with its arity.
#[derive(Debug, Clone, Copy)]
pub enum OperatorFn {
    /// Takes the single operand.
    Unary(fn(f64) -> EvalResult<f64>),
    /// Takes the left and right operand, in that order.
    Binary(fn(f64, f64) -> EvalResult<f64>),
}

/// Immutable descriptor of a registered operator.
///
/// Descriptors are built through [`Operator::binary`], [`Operator::prefix`]
/// and [`Operator::postfix`], which keep arity, placement and associativity
/// consistent with each other: binary operators are always placed between
/// values, prefix operators associate to the right and postfix operators to
/// the left.
#[derive(Debug, Clone)]
pub struct Operator {
    symbol:        String,
    name:          String,
    precedence:    u8,
    associativity: Associativity,
    placement:     Placement,
    function:      OperatorFn,
}

impl Operator {
    /// Creates an infix operator.
    ///
    /// # Example
    /// ```
    /// use opcalc::interpreter::operator::{Arity, Associativity, Operator, Placement};
    ///
    /// let plus = Operator::binary("+", "addition", 1, Associativity::Left, |a, b| Ok(a + b));
    /// assert_eq!(plus.arity(), Arity::Binary);
    /// assert_eq!(plus.placement(), Placement::BetweenValues);
    /// assert_eq!(plus.apply(&[2.0, 3.0]).unwrap(), 5.0);
    /// ```
    pub fn binary(symbol: impl Into<String>,
                  name: impl Into<String>,
                  precedence: u8,
                  associativity: Associativity,
                  function: fn(f64, f64) -> EvalResult<f64>)
                  -> Self {
        Self { symbol: symbol.into(),
               name: name.into(),
               precedence,
               associativity,
               placement: Placement::BetweenValues,
               function: OperatorFn::Binary(function) }
    }

    /// Creates a unary operator written in front of its operand.
    pub fn prefix(symbol: impl Into<String>,
                  name: impl Into<String>,
                  precedence: u8,
                  function: fn(f64) -> EvalResult<f64>)
                  -> Self {
        Self { symbol: symbol.into(),
               name: name.into(),
               precedence,
               associativity: Associativity::Right,
               placement: Placement::LeftOfValue,
               function: OperatorFn::Unary(function) }
    }

    /// Creates a unary operator written after its operand.
    pub fn postfix(symbol: impl Into<String>,
                   name: impl Into<String>,
                   precedence: u8,
                   function: fn(f64) -> EvalResult<f64>)
                   -> Self {
        Self { symbol: symbol.into(),
               name: name.into(),
               precedence,
               associativity: Associativity::Left,
               placement: Placement::RightOfValue,
               function: OperatorFn::Unary(function) }
    }

    /// The registry key.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Human readable name, used when listing operators.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Higher binds tighter.
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        self.precedence
    }

    #[must_use]
    pub const fn associativity(&self) -> Associativity {
        self.associativity
    }

    #[must_use]
    pub const fn placement(&self) -> Placement {
        self.placement
    }

    #[must_use]
    pub const fn function(&self) -> OperatorFn {
        self.function
    }

    #[must_use]
    pub const fn arity(&self) -> Arity {
        match self.function {
            OperatorFn::Unary(_) => Arity::Unary,
            OperatorFn::Binary(_) => Arity::Binary,
        }
    }

    /// Applies the operator to `operands`, given left to right.
    ///
    /// The caller is responsible for passing exactly [`Arity::operands`]
    /// values; extra values are ignored and missing ones are reported as
    /// `InsufficientOperands`.
    pub fn apply(&self, operands: &[f64]) -> EvalResult<f64> {
        match (self.function(), operands) {
            (OperatorFn::Unary(f), [value, ..]) => f(*value),
            (OperatorFn::Binary(f), [left, right, ..]) => f(*left, *right),
            _ => Err(RuntimeError::InsufficientOperands { symbol:   self.symbol.clone(),
                                                          expected: self.arity().operands(),
                                                          found:    operands.len(), }),
        }
    }
}
