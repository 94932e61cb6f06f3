use std::sync::LazyLock;

use opcalc::{
    error::{Error, ParseError, UnknownOperator},
    interpreter::{
        calculator::Calculator,
        lexer::Token,
        operator::{Associativity, Operator},
        parser::{ParseResult, Parser, should_pop},
        registry::{OperatorRegistry, SIGN_MINUS, UNARY_MINUS},
    },
};
use pretty_assertions::assert_eq;

static CALCULATOR: LazyLock<Calculator> = LazyLock::new(Calculator::new);

fn postfix(src: &str) -> String {
    match CALCULATOR.to_postfix(src) {
        Ok(tokens) => tokens.iter().map(ToString::to_string).collect::<Vec<_>>().join(" "),
        Err(e) => panic!("`{src}` failed to parse: {e}"),
    }
}

fn parse_failure(src: &str) -> ParseError {
    match CALCULATOR.to_postfix(src) {
        Ok(tokens) => panic!("`{src}` parsed to {tokens:?} but was expected to fail"),
        Err(Error::Parse(e)) => e,
        Err(e) => panic!("`{src}` failed outside the parser: {e}"),
    }
}

#[test]
fn precedence_orders_operators() {
    assert_eq!(postfix("1+2*3"), "1 2 3 * +");
    assert_eq!(postfix("2*3^2"), "2 3 2 ^ *");
    assert_eq!(postfix("1+2%3"), "1 2 3 % +");
    assert_eq!(postfix("(1+2)*3"), "1 2 + 3 *");
    assert_eq!(postfix("(((1)))"), "1");
}

#[test]
fn associativity_breaks_ties() {
    assert_eq!(postfix("10-4-3"), "10 4 b- 3 b-");
    assert_eq!(postfix("8/4/2"), "8 4 / 2 /");
    assert_eq!(postfix("2$3@4"), "2 3 $ 4 @");
    assert_eq!(postfix("2^2^3"), "2 2 3 ^ ^");
}

#[test]
fn prefix_and_postfix_operators() {
    assert_eq!(postfix("-1+7"), "1 u- 7 +");
    assert_eq!(postfix("-2^4"), "2 4 ^ u-");
    assert_eq!(postfix("-3!"), "3 ! u-");
    assert_eq!(postfix("--3!"), "3 s- s- !");
    assert_eq!(postfix("~-3!"), "3 s- ~ !");
    assert_eq!(postfix("2*-3"), "2 3 s- *");
    assert_eq!(postfix("55#@30"), "55 # 30 @");
}

#[test]
fn parentheses_must_balance() {
    assert_eq!(parse_failure("("), ParseError::TooManyLeftParentheses);
    assert_eq!(parse_failure("(1+(2*3)"), ParseError::TooManyLeftParentheses);
    assert_eq!(parse_failure(")"), ParseError::TooManyRightParentheses);
    assert_eq!(parse_failure("(1))+(2"), ParseError::TooManyRightParentheses);
    assert!(parse_failure("((2)").is_parentheses());
    assert!(!parse_failure("2+x").is_parentheses());
}

#[test]
fn empty_parentheses_parse_to_nothing() {
    assert_eq!(postfix("()"), "");
    assert_eq!(postfix(""), "");
}

#[test]
fn unknown_operators_are_rejected() {
    let registry = OperatorRegistry::standard();
    let infix = [Token::Number(1.0), Token::Operator("?"), Token::Number(2.0)];

    assert_eq!(Parser::new(&registry).parse(infix.into_iter().map(Ok)),
               Err(ParseError::UnknownOperator(UnknownOperator { symbol: "?".to_string() })));
}

#[test]
fn first_tokenizer_error_is_returned() {
    let registry = OperatorRegistry::standard();
    let error = ParseError::IllegalCharacter { character: 'x',
                                               index:     1, };
    let infix: Vec<ParseResult<Token<'_>>> = vec![Ok(Token::Number(1.0)),
                                                  Err(error.clone()),
                                                  Ok(Token::RightParen),
                                                  Ok(Token::RightParen)];

    assert_eq!(Parser::new(&registry).parse(infix), Err(error));
}

#[test]
fn pop_decision_follows_precedence_then_associativity() {
    let registry = OperatorRegistry::standard();
    let get = |symbol: &str| registry.get(symbol).unwrap();

    assert!(should_pop(get("+"), get("*")));
    assert!(should_pop(get("*"), get("/")));
    assert!(should_pop(get("!"), get(SIGN_MINUS)));
    assert!(should_pop(get("!"), get("~")));
    assert!(!should_pop(get("^"), get("^")));
    assert!(!should_pop(get(SIGN_MINUS), get(SIGN_MINUS)));
    assert!(!should_pop(get("!"), get(UNARY_MINUS)));
    assert!(!should_pop(get("%"), get("^")));
}

#[test]
fn minus_needs_its_registry_key() {
    let mut registry = OperatorRegistry::new();
    registry.register(Operator::binary("+", "addition", 1, Associativity::Left, |a, b| Ok(a + b)));
    registry.register(Operator::prefix(UNARY_MINUS, "unary minus", 3, |x| Ok(-x)));
    registry.register(Operator::prefix(SIGN_MINUS, "sign minus", 8, |x| Ok(-x)));
    let calculator = Calculator::with_registry(registry);

    assert_eq!(calculator.calculate("-1+-2"), Ok(-3.0));
    assert_eq!(calculator.calculate("2-1"),
               Err(Error::Parse(ParseError::UnknownOperator(UnknownOperator { symbol: "b-".to_string() }))));
}
