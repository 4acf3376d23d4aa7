use crate::error::ValidationError;

/// Parses one line of user input as a finite number.
///
/// Surrounding whitespace is trimmed and a comma decimal separator is
/// normalized to a period before parsing, so `3,5` reads as `3.5`. Values
/// that parse but are not finite (the `inf` and `NaN` spellings) are
/// rejected; an operand is always a finite real number. There are no range
/// checks beyond finiteness, so negative numbers and zero are accepted.
///
/// # Parameters
/// - `line`: The raw line of user input.
///
/// # Returns
/// - `Ok(f64)`: The parsed operand.
/// - `Err(ValidationError::InvalidNumber)`: If the line does not parse as a
///   finite number.
///
/// # Example
/// ```
/// use numera::calculator::number::parse_number;
///
/// assert_eq!(parse_number("12"), Ok(12.0));
/// assert_eq!(parse_number(" 3,5 "), Ok(3.5));
/// assert_eq!(parse_number("-2.5e3"), Ok(-2500.0));
/// assert!(parse_number("twelve").is_err());
/// assert!(parse_number("inf").is_err());
/// ```
pub fn parse_number(line: &str) -> Result<f64, ValidationError> {
    match line.trim().replace(',', ".").parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::InvalidNumber),
    }
}
