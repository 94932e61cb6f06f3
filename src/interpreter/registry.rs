use std::collections::{HashMap, HashSet};

use crate::{
    error::UnknownOperator,
    interpreter::operator::{
        Associativity::{Left, Right},
        Operator,
        builtin::{
            add, average, digit_sum, divide, factorial, maximum, minimum, modulo, multiply, negate,
            power, subtract,
        },
    },
};

/// Registry key of the minus that subtracts (`2-3`).
pub const BINARY_MINUS: &str = "b-";
/// Registry key of the minus that opens an expression (`-2^2`).
pub const UNARY_MINUS: &str = "u-";
/// Registry key of the chainable minus that follows an operator, an opening
/// parenthesis or another minus (`2*-3`, `--3`).
pub const SIGN_MINUS: &str = "s-";

/// Maps operator symbols to their descriptors.
///
/// A registry is filled once during setup and only read afterwards, so a
/// shared reference can be handed to any number of concurrent evaluations.
/// The tokenizer resolves the source character `-` to one of
/// [`BINARY_MINUS`], [`UNARY_MINUS`] or [`SIGN_MINUS`]; every other operator
/// is matched by its single-character symbol.
#[derive(Debug, Clone, Default)]
pub struct OperatorRegistry {
    operators: HashMap<String, Operator>,
}

impl OperatorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the standard operator table.
    ///
    /// | symbol | operator       | precedence |
    /// |--------|----------------|------------|
    /// | `+` `-`| add, subtract  | 1          |
    /// | `*` `/`| multiply, divide | 2        |
    /// | `-x`   | unary minus    | 3          |
    /// | `^`    | power (right)  | 4          |
    /// | `%`    | modulo         | 5          |
    /// | `$` `&` `@` | max, min, average | 6  |
    /// | `!` `~` `#` | factorial, negate, digit sum | 7 |
    /// | `--x`  | sign minus     | 8          |
    ///
    /// # Example
    /// ```
    /// use opcalc::interpreter::registry::{OperatorRegistry, SIGN_MINUS};
    ///
    /// let registry = OperatorRegistry::standard();
    /// assert_eq!(registry.get("^").unwrap().precedence(), 4);
    /// assert_eq!(registry.get(SIGN_MINUS).unwrap().precedence(), 8);
    /// assert!(registry.get("?").is_err());
    /// ```
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new();

        registry.register(Operator::binary("+", "addition", 1, Left, add));
        registry.register(Operator::binary(BINARY_MINUS, "subtraction", 1, Left, subtract));

        registry.register(Operator::binary("*", "multiplication", 2, Left, multiply));
        registry.register(Operator::binary("/", "division", 2, Left, divide));

        registry.register(Operator::prefix(UNARY_MINUS, "unary minus", 3, negate));

        registry.register(Operator::binary("^", "power", 4, Right, power));

        registry.register(Operator::binary("%", "modulo", 5, Left, modulo));

        registry.register(Operator::binary("$", "maximum", 6, Left, maximum));
        registry.register(Operator::binary("&", "minimum", 6, Left, minimum));
        registry.register(Operator::binary("@", "average", 6, Left, average));

        registry.register(Operator::postfix("!", "factorial", 7, factorial));
        registry.register(Operator::prefix("~", "negation", 7, negate));
        registry.register(Operator::postfix("#", "digit sum", 7, digit_sum));

        registry.register(Operator::prefix(SIGN_MINUS, "sign minus", 8, negate));

        registry
    }

    /// Inserts `operator` under its symbol, replacing any operator already
    /// registered under the same symbol.
    pub fn register(&mut self, operator: Operator) {
        self.operators.insert(operator.symbol().to_string(), operator);
    }

    /// Looks up the operator registered under `symbol`.
    pub fn get(&self, symbol: &str) -> Result<&Operator, UnknownOperator> {
        self.operators.get(symbol).ok_or_else(|| UnknownOperator { symbol: symbol.to_string() })
    }

    #[must_use]
    pub fn contains(&self, symbol: &str) -> bool {
        self.operators.contains_key(symbol)
    }

    /// Every registered symbol, the minus keys included.
    #[must_use]
    pub fn all_symbols(&self) -> HashSet<&str> {
        self.operators.keys().map(String::as_str).collect()
    }

    /// Operators ordered by precedence, then symbol.
    pub fn iter(&self) -> impl Iterator<Item = &Operator> {
        let mut operators: Vec<&Operator> = self.operators.values().collect();
        operators.sort_by(|a, b| a.precedence().cmp(&b.precedence()).then_with(|| a.symbol().cmp(b.symbol())));
        operators.into_iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.operators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.operators.is_empty()
    }
}
