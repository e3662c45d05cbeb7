//! A validated person value.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::error::ToolkitError;

pub const INVALID_NAME: &str = "Name must be a non-empty string";
pub const INVALID_EMAIL: &str = "Email must be a valid email address";
pub const INVALID_AGE: &str = "Age must be a non-negative number";

/// Age at which [`Person::is_adult`] becomes true.
pub const ADULT_AGE: f64 = 18.0;

/// `local@domain.tld` with no whitespace and a single `@`.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid regex"));

/// A person whose name, email and age were checked at construction.
///
/// The scalar fields are read-only afterwards; only the active flag can
/// change, through [`activate`](Person::activate) and
/// [`deactivate`](Person::deactivate).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Person {
    name: String,
    email: String,
    age: f64,
    is_active: bool,
}

impl Person {
    /// Validate the arguments and build an active person.
    pub fn new(
        name: impl Into<Value>,
        email: impl Into<Value>,
        age: impl Into<Value>,
    ) -> Result<Self, ToolkitError> {
        let name = match name.into() {
            Value::String(s) if !s.is_empty() => s,
            _ => return Err(ToolkitError::InvalidArgument(INVALID_NAME)),
        };
        let email = match email.into() {
            Value::String(s) if is_valid_email(&s) => s,
            _ => return Err(ToolkitError::InvalidArgument(INVALID_EMAIL)),
        };
        let age = match age.into().as_f64() {
            Some(age) if age >= 0.0 => age,
            _ => return Err(ToolkitError::InvalidArgument(INVALID_AGE)),
        };

        Ok(Self {
            name,
            email,
            age,
            is_active: true,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn age(&self) -> f64 {
        self.age
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// `"name (email) - Age: age"`.
    pub fn full_info(&self) -> String {
        format!("{} ({}) - Age: {}", self.name, self.email, self.age)
    }

    pub fn is_adult(&self) -> bool {
        self.age >= ADULT_AGE
    }

    pub fn activate(&mut self) {
        self.is_active = true;
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.full_info())
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email)
}
