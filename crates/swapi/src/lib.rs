//! HTTP client for the public people listing endpoint.

pub mod api;

pub use api::{PeopleResponse, SwapiClient, SwapiError, DEFAULT_PEOPLE_URL};
