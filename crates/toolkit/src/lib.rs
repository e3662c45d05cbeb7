//! Standalone utility functions: arithmetic, array statistics, string
//! helpers, a validated [`Person`] and a simulated slow user lookup.
//!
//! Arguments are taken as anything convertible into a JSON value, so
//! callers feeding in loosely-typed data (CLI arguments, request bodies)
//! get a [`ToolkitError::InvalidArgument`] instead of a panic when a
//! value has the wrong shape.

pub mod arithmetic;
pub mod demo;
pub mod error;
pub mod lookup;
pub mod person;
pub mod stats;
pub mod text;

pub use arithmetic::{add, divide, multiply, subtract};
pub use error::ToolkitError;
pub use lookup::{fetch_user_data, UserData};
pub use person::Person;
pub use stats::{calculate_average, find_max, find_min};
pub use text::{capitalize_words, is_palindrome};
