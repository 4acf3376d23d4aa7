use logos::Logos;

use crate::error::ValidationError;

/// Represents an arithmetic operator token.
///
/// A token is produced by lexing one trimmed line of user input. This enum
/// is the closed set of operations the calculator understands; an operator
/// outside it cannot be represented, so every downstream consumer is total
/// over this type.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// Addition (`+`)
    #[token("+")]
    Add,
    /// Subtraction (`-`)
    #[token("-")]
    Sub,
    /// Multiplication (`*`)
    #[token("*")]
    Mul,
    /// Division (`/`)
    #[token("/")]
    Div,
    /// Exponentiation (`^`, also spelled `**`)
    #[token("^")]
    #[token("**")]
    Pow,
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Pow => "**",
        };
        write!(f, "{operator}")
    }
}

/// Parses one line of user input as an operator.
///
/// The line is trimmed and tokenized; it must consist of exactly one
/// operator token with nothing after it. Both `^` and `**` produce
/// [`Operator::Pow`].
///
/// # Parameters
/// - `line`: The raw line of user input.
///
/// # Returns
/// - `Ok(Operator)`: The recognized operator.
/// - `Err(ValidationError::InvalidOperator)`: If the line is empty, is not
///   an operator, or carries trailing input.
///
/// # Example
/// ```
/// use numera::calculator::operator::{parse_operator, Operator};
///
/// assert_eq!(parse_operator(" * "), Ok(Operator::Mul));
/// assert_eq!(parse_operator("**"), Ok(Operator::Pow));
/// assert_eq!(parse_operator("^"), Ok(Operator::Pow));
/// assert!(parse_operator("%").is_err());
/// assert!(parse_operator("+ -").is_err());
/// ```
pub fn parse_operator(line: &str) -> Result<Operator, ValidationError> {
    let mut tokens = Operator::lexer(line.trim());

    match (tokens.next(), tokens.next()) {
        (Some(Ok(operator)), None) => Ok(operator),
        _ => Err(ValidationError::InvalidOperator),
    }
}
