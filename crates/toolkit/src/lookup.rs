//! Simulated slow user lookup.
//!
//! Stands in for a latent backend: every valid request waits
//! [`LOOKUP_DELAY`] before resolving, and one sentinel id always misses.

use std::future::Future;
use std::time::Duration;

use serde::Serialize;
use serde_json::{Number, Value};

use crate::error::ToolkitError;

pub const INVALID_USER_ID: &str = "User ID must be a positive number";
pub const USER_NOT_FOUND: &str = "User not found";

/// Artificial latency applied to every accepted lookup.
pub const LOOKUP_DELAY: Duration = Duration::from_millis(100);

/// Id that resolves to [`ToolkitError::NotFound`] after the delay.
pub const MISSING_USER_ID: f64 = 999.0;

/// Largest integer an `f64` holds exactly.
const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserData {
    /// The requested id. Whole numbers are kept as integers, so `1.0`
    /// serializes and formats as `1`.
    pub id: Number,
    pub name: String,
    pub email: String,
}

impl UserData {
    fn for_id(id: Number) -> Self {
        Self {
            id: id.clone(),
            name: format!("User {id}"),
            email: format!("user{id}@example.co.in"),
        }
    }
}

/// Look up a user by id.
///
/// The id is checked when this function is called, before the returned
/// future is first polled, so an invalid id never waits on the delay.
pub fn fetch_user_data(
    user_id: impl Into<Value>,
) -> impl Future<Output = Result<UserData, ToolkitError>> {
    let checked = match user_id.into() {
        Value::Number(id) if id.as_f64().is_some_and(|n| n > 0.0) => Ok(whole_as_integer(id)),
        _ => Err(ToolkitError::InvalidArgument(INVALID_USER_ID)),
    };

    async move {
        let id = checked?;
        tracing::debug!(user_id = %id, "Looking up user");
        tokio::time::sleep(LOOKUP_DELAY).await;

        if id.as_f64() == Some(MISSING_USER_ID) {
            return Err(ToolkitError::NotFound(USER_NOT_FOUND));
        }
        Ok(UserData::for_id(id))
    }
}

fn whole_as_integer(id: Number) -> Number {
    match id.as_f64() {
        Some(n) if id.is_f64() && n.fract() == 0.0 && n <= MAX_EXACT_INTEGER => {
            Number::from(n as u64)
        }
        _ => id,
    }
}
