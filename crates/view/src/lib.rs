//! Table view: an ordered list of rows plus a form for appending new ones.
//!
//! State lives in a [`TableView`], which notifies subscribers through a
//! `tokio::sync::watch` channel after every mutation. [`render`] turns a
//! state snapshot into the text a host displays.
//!
//! Two variants exist:
//!
//! - remote: starts [`Phase::Pending`] and is filled by
//!   [`TableView::load`] from a [`PeopleSource`];
//! - seeded: starts [`Phase::Ready`] with [`seed_members`].

pub mod render;
pub mod source;
pub mod state;
pub mod table;

pub use render::render;
pub use source::{seed_members, PeopleSource};
pub use state::{Phase, TableState};
pub use table::TableView;
