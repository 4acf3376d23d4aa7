#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Represents all errors that can occur while validating user input.
///
/// Every variant is recovered locally by reprompting; none of them ever
/// reaches the session loop.
pub enum ValidationError {
    /// The operand line did not parse as a finite number.
    InvalidNumber,
    /// The operator line was not one of the supported operators.
    InvalidOperator,
    /// The continuation answer was neither yes nor no.
    InvalidAnswer,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidNumber => {
                write!(f, "Invalid number. Please enter a valid numeric value (e.g., 12, 3.5).")
            },
            Self::InvalidOperator => write!(f, "Invalid operator. Allowed: +  -  *  /  **"),
            Self::InvalidAnswer => write!(f, "Please answer with 'y' or 'n'."),
        }
    }
}

impl std::error::Error for ValidationError {}
