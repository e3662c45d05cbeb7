//! Shared row shapes and form state for the rowboard table view.

pub mod draft;
pub mod error;
pub mod record;

pub use draft::Draft;
pub use error::CoreError;
pub use record::{Character, FieldSpec, Member, Record};
