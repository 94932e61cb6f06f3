use std::{fmt, iter::FusedIterator};

use logos::Logos;

use crate::{
    error::ParseError,
    interpreter::{
        operator::Placement,
        parser::ParseResult,
        registry::{BINARY_MINUS, OperatorRegistry, SIGN_MINUS, UNARY_MINUS},
    },
};

/// Represents a token handed from the tokenizer to the parser.
///
/// Operator tokens carry the registry symbol, which for the minus sign is one
/// of the three minus keys rather than the source character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token<'a> {
    /// Numeric literal, such as `3` or `2.5`.
    Number(f64),
    /// A registered operator symbol.
    Operator(&'a str),
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Operator(symbol) => write!(f, "{symbol}"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
        }
    }
}

/// Classification of the previously emitted token.
///
/// This is the whole state of the tokenizer: it decides what a `-` means and
/// whether an operator may appear at the current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenClass {
    /// Nothing has been emitted yet.
    Start,
    /// A number, or a postfix operator that closed a value.
    Number,
    /// A binary operator.
    Operator,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
    /// A unary minus, sign minus or prefix operator still waiting for its
    /// operand.
    PendingUnary,
}

impl TokenClass {
    /// Whether a complete value ends right before the current position.
    #[must_use]
    pub const fn is_value(self) -> bool {
        matches!(self, Self::Number | Self::RightParen)
    }
}

/// The three meanings of the source character `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Minus {
    /// Subtraction.
    Binary,
    /// Negation at the very start of the expression.
    Unary,
    /// Chainable negation after an operator, `(` or another minus.
    Sign,
}

impl Minus {
    /// The registry key this minus resolves to.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Binary => BINARY_MINUS,
            Self::Unary => UNARY_MINUS,
            Self::Sign => SIGN_MINUS,
        }
    }

    /// The state left behind after emitting this minus.
    #[must_use]
    pub const fn class(self) -> TokenClass {
        match self {
            Self::Binary => TokenClass::Operator,
            Self::Unary | Self::Sign => TokenClass::PendingUnary,
        }
    }
}

/// Decides which minus a `-` is, given the previous token and the character
/// that follows it.
///
/// Returns `None` when a unary or sign minus ends the expression, since it
/// has no operand to negate. A trailing binary minus is left for the solver.
///
/// # Example
/// ```
/// use opcalc::interpreter::lexer::{Minus, TokenClass, resolve_minus};
///
/// assert_eq!(resolve_minus(TokenClass::Start, Some('1')), Some(Minus::Unary));
/// assert_eq!(resolve_minus(TokenClass::Start, Some('-')), Some(Minus::Sign));
/// assert_eq!(resolve_minus(TokenClass::Number, Some('3')), Some(Minus::Binary));
/// assert_eq!(resolve_minus(TokenClass::Operator, Some('3')), Some(Minus::Sign));
/// assert_eq!(resolve_minus(TokenClass::Start, None), None);
/// assert_eq!(resolve_minus(TokenClass::Operator, None), None);
/// ```
#[must_use]
pub const fn resolve_minus(previous: TokenClass, next: Option<char>) -> Option<Minus> {
    match (previous, next) {
        (TokenClass::Number | TokenClass::RightParen, _) => Some(Minus::Binary),
        (_, None) => None,
        (TokenClass::Start, Some('-')) => Some(Minus::Sign),
        (TokenClass::Start, Some(_)) => Some(Minus::Unary),
        (TokenClass::Operator | TokenClass::LeftParen | TokenClass::PendingUnary, Some(_)) => {
            Some(Minus::Sign)
        },
    }
}

/// Removes every space and tab, so whitespace never separates tokens.
///
/// # Example
/// ```
/// use opcalc::interpreter::lexer::normalize;
///
/// assert_eq!(normalize(" 1 0\t+ 2 "), "10+2");
/// ```
#[must_use]
pub fn normalize(expression: &str) -> String {
    expression.chars().filter(|c| !matches!(c, ' ' | '\t')).collect()
}

/// Raw lexemes of a normalized expression, before minus disambiguation and
/// operator lookup.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(error = LexemeError)]
enum Lexeme<'s> {
    /// A digit followed by any run of digits and dots.
    #[regex(r"[0-9][0-9.]*", parse_number)]
    Number(f64),
    /// `-`
    #[token("-")]
    Minus,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Any other single character, resolved against the registry.
    #[regex(r"[^0-9()\-]", |lex| lex.slice())]
    Symbol(&'s str),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum LexemeError {
    #[default]
    Unrecognized,
    InvalidNumber,
}

fn parse_number<'s>(lex: &logos::Lexer<'s, Lexeme<'s>>) -> Result<f64, LexemeError> {
    let literal = lex.slice();
    if literal.matches('.').count() > 1 {
        return Err(LexemeError::InvalidNumber);
    }
    literal.parse().map_err(|_| LexemeError::InvalidNumber)
}

/// Turns normalized expressions into [`Token`]s.
///
/// # Example
/// ```
/// use opcalc::interpreter::{
///     lexer::{Token, Tokenizer},
///     registry::{BINARY_MINUS, OperatorRegistry},
/// };
///
/// let registry = OperatorRegistry::standard();
/// let tokens: Vec<_> = Tokenizer::new(&registry).tokenize("(1-2)!")
///                                               .collect::<Result<_, _>>()
///                                               .unwrap();
///
/// assert_eq!(tokens,
///            vec![Token::LeftParen,
///                 Token::Number(1.0),
///                 Token::Operator(BINARY_MINUS),
///                 Token::Number(2.0),
///                 Token::RightParen,
///                 Token::Operator("!")]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'r> {
    registry: &'r OperatorRegistry,
}

impl<'r> Tokenizer<'r> {
    #[must_use]
    pub const fn new(registry: &'r OperatorRegistry) -> Self {
        Self { registry }
    }

    /// Starts scanning `normalized`, which must already have gone through
    /// [`normalize`].
    ///
    /// Tokens are produced lazily. The first invalid character, number or
    /// operator placement is yielded as an error and ends the stream.
    #[must_use]
    pub fn tokenize<'s>(&self, normalized: &'s str) -> Tokens<'s, 'r> {
        Tokens { lexer:    Lexeme::lexer(normalized),
                 registry: self.registry,
                 previous: TokenClass::Start,
                 finished: false, }
    }
}

/// Lazy token stream returned by [`Tokenizer::tokenize`].
pub struct Tokens<'s, 'r> {
    lexer:    logos::Lexer<'s, Lexeme<'s>>,
    registry: &'r OperatorRegistry,
    previous: TokenClass,
    finished: bool,
}

impl<'r> Tokens<'_, 'r> {
    /// Character index of the current lexeme in the normalized expression.
    fn index(&self) -> usize {
        self.lexer.source()[..self.lexer.span().start].chars().count()
    }

    fn illegal_character(&self) -> ParseError {
        ParseError::IllegalCharacter { character: self.lexer.slice().chars().next().unwrap_or_default(),
                                       index:     self.index(), }
    }

    fn classify(&mut self, lexeme: Lexeme<'_>) -> ParseResult<Token<'r>> {
        let (token, class) = match lexeme {
            Lexeme::Number(value) => (Token::Number(value), TokenClass::Number),
            Lexeme::LParen => (Token::LeftParen, TokenClass::LeftParen),
            Lexeme::RParen => (Token::RightParen, TokenClass::RightParen),
            Lexeme::Minus => {
                let next = self.lexer.remainder().chars().next();
                let Some(minus) = resolve_minus(self.previous, next) else {
                    return Err(ParseError::UnaryMishandle { index: self.index() });
                };
                (Token::Operator(minus.symbol()), minus.class())
            },
            Lexeme::Symbol(symbol) => self.classify_operator(symbol)?,
        };

        self.previous = class;
        Ok(token)
    }

    /// Checks a registered operator against the previous token and decides
    /// the state it leaves behind.
    fn classify_operator(&self, symbol: &str) -> ParseResult<(Token<'r>, TokenClass)> {
        let Ok(operator) = self.registry.get(symbol) else {
            return Err(self.illegal_character());
        };

        if self.previous == TokenClass::PendingUnary {
            return Err(ParseError::UnaryMishandle { index: self.index() });
        }

        let after_value = self.previous.is_value();
        let allowed = match operator.placement() {
            Placement::LeftOfValue => !after_value,
            Placement::BetweenValues | Placement::RightOfValue => after_value,
        };
        if !allowed {
            return Err(ParseError::Placement { symbol: operator.symbol().to_string(),
                                               index:  self.index(), });
        }

        let class = match operator.placement() {
            Placement::LeftOfValue => TokenClass::PendingUnary,
            Placement::BetweenValues => TokenClass::Operator,
            Placement::RightOfValue => TokenClass::Number,
        };
        Ok((Token::Operator(operator.symbol()), class))
    }
}

impl<'r> Iterator for Tokens<'_, 'r> {
    type Item = ParseResult<Token<'r>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = match self.lexer.next()? {
            Ok(lexeme) => self.classify(lexeme),
            Err(LexemeError::InvalidNumber) => {
                Err(ParseError::InvalidNumber { literal: self.lexer.slice().to_string(),
                                                index:   self.index(), })
            },
            Err(LexemeError::Unrecognized) => Err(self.illegal_character()),
        };

        self.finished = result.is_err();
        Some(result)
    }
}

impl FusedIterator for Tokens<'_, '_> {}
