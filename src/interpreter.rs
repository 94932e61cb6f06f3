/// The calculator facade.
///
/// Wires tokenizer, parser and solver together over one operator registry
/// and exposes the `calculate` entry point used by the command line.
pub mod calculator;
/// The evaluator module solves postfix sequences.
///
/// The solver walks a postfix sequence with a value stack, applies each
/// operator to the values it consumes and reports runtime errors such as
/// missing operands or division by zero.
pub mod evaluator;
/// The lexer module tokenizes expressions for the parser.
///
/// The tokenizer scans a normalized expression and produces numbers, operator
/// symbols and parentheses. It also resolves what each `-` means and rejects
/// operators placed where their placement class forbids.
///
/// # Responsibilities
/// - Converts the input characters into tokens, lazily and in order.
/// - Tracks the class of the previous token to disambiguate the minus sign.
/// - Reports lexical errors with the index at which they occur.
pub mod lexer;
/// Operator descriptors.
///
/// Declares the `Operator` type together with its arity, associativity and
/// placement, and the evaluation functions of the standard operators.
pub mod operator;
/// The parser module converts infix token streams to postfix order.
///
/// Implements the shunting-yard algorithm: an operator stack and an output
/// queue, with precedence and associativity deciding when operators leave the
/// stack.
pub mod parser;
/// The operator registry.
///
/// Maps operator symbols to descriptors and provides the standard operator
/// table, including the three registry keys of the minus sign.
pub mod registry;
