//! # opcalc
//!
//! opcalc is a calculator for arithmetic expressions written in Rust.
//! It tokenizes an expression, converts it to postfix order with the
//! shunting-yard algorithm and solves the postfix sequence, driven by a table
//! of operators with their own precedence, associativity and placement.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use std::sync::LazyLock;

use crate::{error::Error, interpreter::calculator::Calculator};

/// Provides unified error types for tokenizing, parsing and solving.
///
/// This module defines all errors that can be raised while an expression is
/// evaluated. Each phase has its own error enum, and the crate-level `Error`
/// wraps both so callers can match on a single type.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (tokenizer, parser, solver).
/// - Attaches positions and offending symbols for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the evaluation pipeline.
///
/// This module ties together the operator registry, tokenizer, parser and
/// solver, and exposes the `Calculator` facade.
///
/// # Responsibilities
/// - Holds the operator table every stage reads from.
/// - Provides entry points for tokenizing, parsing and solving expressions.
/// - Manages the flow of tokens and errors between phases.
pub mod interpreter;
/// General utilities for numeric conversion and formatting.
///
/// # Responsibilities
/// - Safely convert `f64` to `u64` without silent data loss.
/// - Render results the way the command line prints them.
pub mod util;

static STANDARD: LazyLock<Calculator> = LazyLock::new(Calculator::new);

/// Evaluates `expression` with the standard operator table.
///
/// The calculator behind this function is built on first use and shared,
/// read-only, by every later call.
///
/// # Errors
/// Returns an error if tokenizing, parsing or solving fails.
///
/// # Examples
/// ```
/// use opcalc::calculate;
///
/// assert_eq!(calculate("-1 + 7").unwrap(), 6.0);
/// assert_eq!(calculate("2 ^ 2 ^ 3").unwrap(), 256.0);
/// assert_eq!(calculate("2---3!").unwrap(), -4.0);
///
/// // Adjacent prefix operators are rejected.
/// assert!(calculate("~~3").is_err());
/// ```
pub fn calculate(expression: &str) -> Result<f64, Error> {
    STANDARD.calculate(expression)
}
