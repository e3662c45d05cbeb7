//! Where table rows come from.

use async_trait::async_trait;
use rowboard_core::{Character, Member};
use rowboard_swapi::{SwapiClient, SwapiError};

/// Something that can produce the remote people listing.
///
/// Implemented by [`SwapiClient`]; tests substitute in-memory fakes.
#[async_trait]
pub trait PeopleSource: Send + Sync {
    /// Fetch the listing once, returning the rows in source order.
    async fn fetch_people(&self) -> Result<Vec<Character>, SwapiError>;
}

#[async_trait]
impl PeopleSource for SwapiClient {
    async fn fetch_people(&self) -> Result<Vec<Character>, SwapiError> {
        Ok(SwapiClient::fetch_people(self).await?.results)
    }
}

/// Sample rows for the seeded variant.
pub fn seed_members() -> Vec<Member> {
    vec![
        Member::new(1, "John Doe", "john@example.com", "Developer"),
        Member::new(2, "Jane Smith", "jane@example.com", "Designer"),
        Member::new(3, "Bob Johnson", "bob@example.com", "Manager"),
    ]
}
