/// Computation errors.
///
/// Contains all error types that can be raised while evaluating a
/// calculation. Division by zero is classified specifically; every other
/// failure mode (such as a result that is not a finite number) falls under a
/// generic variant carrying the offending expression.
pub mod computation_error;
/// Input validation errors.
///
/// Defines all error types that can occur while interpreting user-typed
/// input lines: operand text that is not a finite number, operator text
/// outside the supported set, and unrecognized yes/no answers. The `Display`
/// output of these errors is exactly what the session prints before
/// reprompting.
pub mod validation_error;

pub use computation_error::ComputationError;
pub use validation_error::ValidationError;
