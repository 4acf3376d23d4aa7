//! # numera
//!
//! numera is an interactive command-line calculator written in Rust.
//! It prompts for two operands and an operator, validates every line of
//! input, evaluates the operation, and prints a compactly formatted result,
//! looping until the user declines to continue.

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

use std::io::{self, BufRead, Write};

use crate::session::Session;

/// Parses and evaluates the pieces of a single calculation.
///
/// This module holds the pure half of every component: turning an input line
/// into an operand, an operator, or a yes/no answer, applying an operator to
/// two operands, and rendering a result for display. Nothing in here touches
/// the terminal.
///
/// # Responsibilities
/// - Defines the closed operator set and its line parser.
/// - Parses operand lines into finite numbers, with comma normalization.
/// - Parses continuation answers.
/// - Evaluates one binary operation, classifying division by zero.
/// - Formats finite results compactly.
pub mod calculator;
/// Provides unified error types for validation and computation.
///
/// This module defines all errors that can be raised while reading input or
/// evaluating a calculation. Validation errors are recovered by reprompting;
/// computation errors are reported and the session moves on. Their `Display`
/// output is the exact text shown to the user.
///
/// # Responsibilities
/// - Defines error enums for malformed input lines.
/// - Defines error enums for evaluation failures.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the interactive read-validate-compute-print loop.
///
/// This module ties together the calculator components over a pair of I/O
/// streams: it prompts, reprompts on invalid input, routes evaluation
/// outcomes to the right message, and repeats until the user opts out.
///
/// # Responsibilities
/// - Owns the prompting loops around each pure parser.
/// - Drives the running/terminated session state machine.
/// - Maps computation failures to their user-facing messages.
pub mod session;
/// General utilities for safe numeric conversion.
///
/// # Responsibilities
/// - Safely convert `f64` to `i64` without silent data loss.
pub mod util;

/// Runs a complete interactive session over the given streams.
///
/// This is the crate's entry point: it constructs a [`Session`] and runs it
/// until the user declines to continue. The binary passes locked
/// stdin/stdout; tests pass in-memory buffers.
///
/// # Errors
/// Returns an `io::Error` if reading or writing fails, including
/// `UnexpectedEof` when input ends while a prompt is awaiting an answer.
///
/// # Examples
/// ```
/// // A session computing 2 ** 10, then declining to continue.
/// let input = &b"2\n**\n10\nn\n"[..];
/// let mut output = Vec::new();
///
/// numera::run_session(input, &mut output).unwrap();
///
/// let transcript = String::from_utf8(output).unwrap();
/// assert!(transcript.contains("Result: 1024"));
/// assert!(transcript.ends_with("Goodbye!\n"));
/// ```
pub fn run_session(input: impl BufRead, output: impl Write) -> io::Result<()> {
    Session::new(input, output).run()
}
