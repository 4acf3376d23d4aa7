use crate::{calculator::operator::Operator, error::ComputationError};

/// The result type returned by the evaluator.
pub type CalcResult<T> = Result<T, ComputationError>;

/// Evaluates a single binary operation on two operands.
///
/// Division checks the divisor against exact zero (no epsilon tolerance)
/// before dividing. Exponentiation follows real-number semantics via `powf`;
/// undefined combinations such as a negative base with a fractional exponent
/// yield NaN and are reported as a non-finite failure rather than classified
/// specially. Every successful result is finite: overflow to infinity in any
/// operation is a failure, never an `Ok` value.
///
/// # Parameters
/// - `a`: Left operand.
/// - `op`: The operator to apply.
/// - `b`: Right operand.
///
/// # Returns
/// A `CalcResult<f64>` containing the finite result.
///
/// # Errors
/// - `ComputationError::DivisionByZero`: If `op` is division and `b` is
///   zero.
/// - `ComputationError::NotFinite`: If the result is NaN or infinite.
///
/// # Example
/// ```
/// use numera::calculator::{evaluator::evaluate, operator::Operator};
///
/// assert_eq!(evaluate(6.0, Operator::Add, 4.0), Ok(10.0));
/// assert_eq!(evaluate(6.0, Operator::Div, 4.0), Ok(1.5));
/// assert_eq!(evaluate(2.0, Operator::Pow, 3.0), Ok(8.0));
/// assert!(evaluate(6.0, Operator::Div, 0.0).is_err());
/// ```
pub fn evaluate(a: f64, op: Operator, b: f64) -> CalcResult<f64> {
    use Operator::{Add, Div, Mul, Pow, Sub};

    let result = match op {
        Add => a + b,
        Sub => a - b,
        Mul => a * b,
        Div => {
            if b == 0.0 {
                return Err(ComputationError::DivisionByZero);
            }
            a / b
        },
        Pow => a.powf(b),
    };

    if result.is_finite() {
        Ok(result)
    } else {
        Err(ComputationError::NotFinite { details: format!("{a} {op} {b}") })
    }
}
