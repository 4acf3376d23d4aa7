#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a calculation.
pub enum ComputationError {
    /// Attempted division by zero.
    DivisionByZero,
    /// The computation did not produce a finite number.
    NotFinite {
        /// The expression that produced the non-finite result.
        details: String,
    },
}

impl std::fmt::Display for ComputationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero => write!(f, "Division by zero is not allowed."),
            Self::NotFinite { details } => {
                write!(f, "'{details}' does not have a finite result.")
            },
        }
    }
}

impl std::error::Error for ComputationError {}
