/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between floating-point
/// and integer types without risking silent data loss or rounding errors.
/// The result formatter uses these to decide whether a value can be rendered
/// in plain integer form.
pub mod num;
