//! Reductions over arrays of numbers.

use serde_json::Value;

use crate::error::ToolkitError;

pub const NON_EMPTY_ARRAY_REQUIRED: &str = "Input must be a non-empty array";
pub const ALL_NUMBERS_REQUIRED: &str = "All elements must be numbers";

/// Check that `input` is a non-empty array of numbers and extract them.
fn numbers(input: impl Into<Value>) -> Result<Vec<f64>, ToolkitError> {
    let items = match input.into() {
        Value::Array(items) if !items.is_empty() => items,
        _ => return Err(ToolkitError::InvalidArgument(NON_EMPTY_ARRAY_REQUIRED)),
    };
    items
        .iter()
        .map(Value::as_f64)
        .collect::<Option<Vec<f64>>>()
        .ok_or(ToolkitError::InvalidArgument(ALL_NUMBERS_REQUIRED))
}

pub fn find_max(input: impl Into<Value>) -> Result<f64, ToolkitError> {
    Ok(numbers(input)?.into_iter().fold(f64::NEG_INFINITY, f64::max))
}

pub fn find_min(input: impl Into<Value>) -> Result<f64, ToolkitError> {
    Ok(numbers(input)?.into_iter().fold(f64::INFINITY, f64::min))
}

/// Arithmetic mean of the elements.
pub fn calculate_average(input: impl Into<Value>) -> Result<f64, ToolkitError> {
    let values = numbers(input)?;
    let sum: f64 = values.iter().sum();
    Ok(sum / values.len() as f64)
}
