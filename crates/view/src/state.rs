use rowboard_core::{Draft, Record};

/// Request lifecycle of the table's contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Phase {
    /// Waiting on the remote listing.
    Pending,
    /// Rows are available and the form is usable.
    Ready,
    /// The remote listing failed; holds the message shown to the user.
    Failed(String),
}

/// Everything the view displays.
#[derive(Debug, Clone, PartialEq)]
pub struct TableState<R: Record> {
    pub phase: Phase,
    /// Rows in arrival/insertion order.
    pub items: Vec<R>,
    pub draft: Draft,
}

impl<R: Record> TableState<R> {
    /// No rows yet, waiting on a load.
    pub fn pending() -> Self {
        Self {
            phase: Phase::Pending,
            items: Vec::new(),
            draft: Draft::empty(R::DRAFT_FIELDS),
        }
    }

    /// Ready with the given rows.
    pub fn ready(items: Vec<R>) -> Self {
        Self {
            phase: Phase::Ready,
            items,
            draft: Draft::empty(R::DRAFT_FIELDS),
        }
    }
}
