//! Two-operand arithmetic over loosely-typed arguments.
//!
//! Overflow, NaN and infinity are not special-cased; results follow plain
//! `f64` semantics.

use serde_json::Value;

use crate::error::ToolkitError;

pub const NUMBERS_REQUIRED: &str = "Both arguments must be numbers";

fn operands(a: impl Into<Value>, b: impl Into<Value>) -> Result<(f64, f64), ToolkitError> {
    match (a.into().as_f64(), b.into().as_f64()) {
        (Some(a), Some(b)) => Ok((a, b)),
        _ => Err(ToolkitError::InvalidArgument(NUMBERS_REQUIRED)),
    }
}

pub fn add(a: impl Into<Value>, b: impl Into<Value>) -> Result<f64, ToolkitError> {
    let (a, b) = operands(a, b)?;
    Ok(a + b)
}

pub fn subtract(a: impl Into<Value>, b: impl Into<Value>) -> Result<f64, ToolkitError> {
    let (a, b) = operands(a, b)?;
    Ok(a - b)
}

pub fn multiply(a: impl Into<Value>, b: impl Into<Value>) -> Result<f64, ToolkitError> {
    let (a, b) = operands(a, b)?;
    Ok(a * b)
}

/// Divide `a` by `b`, rejecting a divisor of exactly zero.
pub fn divide(a: impl Into<Value>, b: impl Into<Value>) -> Result<f64, ToolkitError> {
    let (a, b) = operands(a, b)?;
    if b == 0.0 {
        return Err(ToolkitError::DivisionByZero);
    }
    Ok(a / b)
}
