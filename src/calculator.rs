/// Yes/no answer parsing.
///
/// Interprets the continuation prompt's answer line. Accepts `y`/`yes` and
/// `n`/`no` in any casing; everything else is a validation error.
pub mod confirm;
/// Pure evaluation of a single binary operation.
///
/// Applies an operator to two finite operands and produces a finite result
/// or a computation error. Has no side effects and performs no I/O.
pub mod evaluator;
/// Result rendering.
///
/// Renders a finite result as a compact human-readable string, collapsing
/// values within tolerance of an integer to plain integer form and limiting
/// everything else to ten significant digits.
pub mod format;
/// Operand parsing.
///
/// Turns one line of user input into a finite number, normalizing a comma
/// decimal separator to a period first.
pub mod number;
/// Operator tokens and parsing.
///
/// Defines the closed set of operator tokens the calculator understands and
/// turns one line of user input into exactly one of them.
pub mod operator;
