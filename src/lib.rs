//! # keylang
//!
//! keylang interprets small scripting languages whose keywords, comment
//! marker, file extension and block style are chosen by a language
//! definition. The same program can be written with `{ }` blocks or with
//! indentation, and with `if` spelled `wenn` or anything else.

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

use std::io::{BufRead, Write};

use crate::{
    config::LanguageConfig,
    error::Error,
    interpreter::{core::Interpreter, environment::Environment},
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum for expressions and the `Statement`
/// enum for statements that need no block. Both are built by the parser and
/// carry the source line for error reporting.
pub mod ast;
/// The language definition.
///
/// Declares `LanguageConfig` with its keywords, block style, comment marker
/// and file extension, and loads it from JSON.
///
/// # Responsibilities
/// - Provides the default language.
/// - Applies keyword overrides of the form `CONSTRUCT=WORD`.
/// - Validates settings and checks source file extensions.
pub mod config;
/// Provides unified error types for configuration, parsing and execution.
///
/// This module defines all errors that can be raised while building a
/// language, tokenizing or parsing a program, or executing it. Every error
/// carries a readable message, and source errors carry their line number.
///
/// # Responsibilities
/// - Defines one error enum per category.
/// - Labels errors for the user (`SyntaxError`, `IOError`, ...).
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, keyword classification, parsing,
/// evaluation and the two block-style executors.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator and value
///   types.
/// - Provides the `Interpreter` entry point.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// Runs a program and returns the final variable environment.
///
/// This builds an interpreter for `config`, reads `input` statements from
/// `input` and writes `print` output to `output`.
///
/// # Errors
/// Returns an error if the language definition is invalid, or if the program
/// fails to tokenize, parse or execute.
///
/// # Examples
/// ```
/// use keylang::{config::LanguageConfig, interpreter::value::Value, run_source};
///
/// let mut output = Vec::new();
/// let source = "i = 0; while (i < 3) { print(i); i = i + 1; }";
///
/// let env = run_source(source, LanguageConfig::default(), &b""[..], &mut output).unwrap();
///
/// assert_eq!(String::from_utf8(output).unwrap(), "0.0\n1.0\n2.0\n");
/// assert_eq!(env.lookup("i"), Value::Number(3.0));
///
/// // `y` was never assigned, so it reads as zero.
/// assert!(run_source("print y + 1;", LanguageConfig::default(), &b""[..], Vec::new()).is_ok());
/// ```
pub fn run_source<R: BufRead, W: Write>(source: &str,
                                        config: LanguageConfig,
                                        input: R,
                                        output: W)
                                        -> Result<Environment, Error> {
    let mut interpreter = Interpreter::new(config, input, output)?;
    interpreter.run(source)?;
    Ok(interpreter.into_environment())
}
