use std::cmp::Ordering;

use crate::{
    error::ParseError,
    interpreter::{
        lexer::Token,
        operator::{Associativity, Operator},
        registry::OperatorRegistry,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Entry of the operator stack.
#[derive(Debug, Clone, Copy)]
enum StackEntry<'t, 'r> {
    LeftParen,
    Operator(&'t str, &'r Operator),
}

/// Decides whether `top`, the operator on top of the stack, must be moved to
/// the output before `current` is pushed.
///
/// Lower precedence of `current` always pops; equal precedence pops only when
/// `current` is left-associative, which keeps `2^2^3` grouped as `2^(2^3)`.
///
/// # Example
/// ```
/// use opcalc::interpreter::{parser::should_pop, registry::OperatorRegistry};
///
/// let registry = OperatorRegistry::standard();
/// let plus = registry.get("+").unwrap();
/// let times = registry.get("*").unwrap();
/// let power = registry.get("^").unwrap();
///
/// assert!(should_pop(plus, times));
/// assert!(should_pop(plus, plus));
/// assert!(!should_pop(times, plus));
/// assert!(!should_pop(power, power));
/// ```
#[must_use]
pub fn should_pop(current: &Operator, top: &Operator) -> bool {
    match current.precedence().cmp(&top.precedence()) {
        Ordering::Less => true,
        Ordering::Equal => current.associativity() == Associativity::Left,
        Ordering::Greater => false,
    }
}

/// Converts infix token streams to postfix order (shunting-yard).
#[derive(Debug, Clone, Copy)]
pub struct Parser<'r> {
    registry: &'r OperatorRegistry,
}

impl<'r> Parser<'r> {
    #[must_use]
    pub const fn new(registry: &'r OperatorRegistry) -> Self {
        Self { registry }
    }

    /// Reorders `tokens` into postfix order.
    ///
    /// Tokens are pulled one at a time, so a tokenizer error surfaces exactly
    /// when the parser reaches it. The result holds numbers and operator
    /// symbols only.
    ///
    /// # Errors
    /// - `TooManyRightParentheses` as soon as a `)` has no matching `(`.
    /// - `TooManyLeftParentheses` at the end of input for an unclosed `(`.
    /// - `UnknownOperator` for a symbol missing from the registry.
    /// - Any error yielded by `tokens`.
    ///
    /// # Example
    /// ```
    /// use opcalc::interpreter::{
    ///     lexer::Token,
    ///     parser::Parser,
    ///     registry::OperatorRegistry,
    /// };
    ///
    /// let registry = OperatorRegistry::standard();
    /// let infix = [Token::Number(2.0),
    ///              Token::Operator("+"),
    ///              Token::Number(3.0),
    ///              Token::Operator("*"),
    ///              Token::Number(4.0)];
    ///
    /// let postfix = Parser::new(&registry).parse(infix.into_iter().map(Ok)).unwrap();
    /// let rendered: Vec<String> = postfix.iter().map(ToString::to_string).collect();
    /// assert_eq!(rendered.join(" "), "2 3 4 * +");
    /// ```
    pub fn parse<'t, I>(&self, tokens: I) -> ParseResult<Vec<Token<'t>>>
        where I: IntoIterator<Item = ParseResult<Token<'t>>>
    {
        let mut output = Vec::new();
        let mut stack = Vec::new();

        for token in tokens {
            match token? {
                Token::Number(value) => output.push(Token::Number(value)),
                Token::LeftParen => stack.push(StackEntry::LeftParen),
                Token::RightParen => close_parenthesis(&mut stack, &mut output)?,
                Token::Operator(symbol) => self.push_operator(symbol, &mut stack, &mut output)?,
            }
        }

        while let Some(entry) = stack.pop() {
            match entry {
                StackEntry::LeftParen => return Err(ParseError::TooManyLeftParentheses),
                StackEntry::Operator(symbol, _) => output.push(Token::Operator(symbol)),
            }
        }

        Ok(output)
    }

    fn push_operator<'t>(&self,
                         symbol: &'t str,
                         stack: &mut Vec<StackEntry<'t, 'r>>,
                         output: &mut Vec<Token<'t>>)
                         -> ParseResult<()> {
        let current = self.registry.get(symbol)?;

        while let Some(&StackEntry::Operator(top_symbol, top)) = stack.last() {
            if !should_pop(current, top) {
                break;
            }
            output.push(Token::Operator(top_symbol));
            stack.pop();
        }

        stack.push(StackEntry::Operator(symbol, current));
        Ok(())
    }
}

/// Moves operators to the output up to the matching `(`, which is dropped.
fn close_parenthesis<'t>(stack: &mut Vec<StackEntry<'t, '_>>,
                         output: &mut Vec<Token<'t>>)
                         -> ParseResult<()> {
    loop {
        match stack.pop() {
            Some(StackEntry::LeftParen) => return Ok(()),
            Some(StackEntry::Operator(symbol, _)) => output.push(Token::Operator(symbol)),
            None => return Err(ParseError::TooManyRightParentheses),
        }
    }
}
