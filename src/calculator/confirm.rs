use crate::error::ValidationError;

/// Parses one line of user input as a yes/no answer.
///
/// The line is trimmed and lowercased, so `Y`, `yes` and `YES` all count as
/// yes.
///
/// # Returns
/// - `Ok(true)`: For `y` or `yes`.
/// - `Ok(false)`: For `n` or `no`.
/// - `Err(ValidationError::InvalidAnswer)`: For anything else.
///
/// # Example
/// ```
/// use numera::calculator::confirm::parse_confirmation;
///
/// assert_eq!(parse_confirmation("YES"), Ok(true));
/// assert_eq!(parse_confirmation(" n "), Ok(false));
/// assert!(parse_confirmation("maybe").is_err());
/// ```
pub fn parse_confirmation(line: &str) -> Result<bool, ValidationError> {
    match line.trim().to_lowercase().as_str() {
        "y" | "yes" => Ok(true),
        "n" | "no" => Ok(false),
        _ => Err(ValidationError::InvalidAnswer),
    }
}
