//! Sample calls used by `rowboard demo`.

use crate::arithmetic::{add, subtract};
use crate::error::ToolkitError;
use crate::person::Person;
use crate::stats::find_max;

/// Run a handful of toolkit calls and describe their results, one per line.
pub fn demo_lines() -> Result<Vec<String>, ToolkitError> {
    let user = Person::new("John Doe", "john@example.com", 25)?;

    Ok(vec![
        "Hello from the rowboard toolkit!".to_string(),
        format!("5 + 3 = {}", add(5, 3)?),
        format!("10 - 4 = {}", subtract(10, 4)?),
        format!("Max of [1, 5, 3, 9, 2] = {}", find_max(vec![1, 5, 3, 9, 2])?),
        format!("User info: {}", user.full_info()),
        format!("Is adult: {}", user.is_adult()),
    ])
}
