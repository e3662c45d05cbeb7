//! The table view state container.
//!
//! [`TableView`] is the single writer of a [`TableState`]. Each operation
//! applies its change and notifies subscribers in the same call, so a
//! rendering consumer holding a [`watch::Receiver`] always sees the latest
//! state. Draft edits and submissions never fail: they either apply or
//! leave the state untouched. The form only exists while the view is
//! [`Phase::Ready`], so both are ignored while pending or failed.

use rowboard_core::{Character, Record};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;

use crate::render::render;
use crate::source::PeopleSource;
use crate::state::{Phase, TableState};

pub struct TableView<R: Record> {
    state: watch::Sender<TableState<R>>,
}

impl<R: Record> TableView<R> {
    fn with_state(initial: TableState<R>) -> Self {
        let (state, _) = watch::channel(initial);
        Self { state }
    }

    /// A view waiting for [`load`](TableView::load).
    pub fn pending() -> Self {
        Self::with_state(TableState::pending())
    }

    /// A view that is immediately ready with `items`.
    pub fn seeded(items: Vec<R>) -> Self {
        Self::with_state(TableState::ready(items))
    }

    /// Receive a notification after every state change.
    pub fn subscribe(&self) -> watch::Receiver<TableState<R>> {
        self.state.subscribe()
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> TableState<R> {
        self.state.borrow().clone()
    }

    /// Render the current state.
    pub fn render(&self) -> String {
        render(&self.state.borrow())
    }

    /// Replace one draft field. Unknown field names are ignored.
    pub fn update_draft_field(&self, field: &str, value: impl Into<String>) {
        let value = value.into();
        self.state.send_if_modified(|state| {
            if state.phase != Phase::Ready {
                tracing::debug!(field, phase = ?state.phase, "Form not shown, draft edit ignored");
                return false;
            }
            match state.draft.clone().with_field(field, value) {
                Ok(draft) => {
                    tracing::debug!(field, "Draft field updated");
                    state.draft = draft;
                    true
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Ignoring draft edit");
                    false
                }
            }
        });
    }

    /// Append the draft as a new row if every field is filled in, then
    /// clear the draft. Returns whether a row was appended.
    pub fn submit_draft(&self) -> bool {
        self.state.send_if_modified(|state| {
            if state.phase != Phase::Ready {
                tracing::warn!(phase = ?state.phase, "Form not shown, submission ignored");
                return false;
            }
            if !state.draft.is_complete() {
                tracing::debug!("Draft incomplete, nothing appended");
                return false;
            }

            let row = R::from_draft(&state.draft, state.items.len());
            state.items.push(row);
            state.draft = state.draft.cleared();
            tracing::info!(rows = state.items.len(), "Row appended");
            true
        })
    }
}

impl TableView<Character> {
    /// Fetch the listing once and move to [`Phase::Ready`] or
    /// [`Phase::Failed`]. No retry and no timeout.
    pub async fn load(&self, source: &dyn PeopleSource) {
        tracing::info!("Loading people listing");
        let result = source.fetch_people().await;
        self.finish_load(result);
    }

    /// Like [`load`](TableView::load), but gives up when `cancel` fires.
    ///
    /// A cancelled load leaves the view [`Phase::Pending`]. Returns whether
    /// the request ran to completion.
    pub async fn load_until_cancelled(
        &self,
        source: &dyn PeopleSource,
        cancel: &CancellationToken,
    ) -> bool {
        tokio::select! {
            _ = cancel.cancelled() => {
                tracing::info!("People listing load cancelled");
                false
            }
            result = source.fetch_people() => {
                self.finish_load(result);
                true
            }
        }
    }

    fn finish_load(&self, result: Result<Vec<Character>, rowboard_swapi::SwapiError>) {
        self.state.send_modify(|state| match result {
            Ok(people) => {
                tracing::info!(count = people.len(), "People listing loaded");
                state.items = people;
                state.phase = Phase::Ready;
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load people listing");
                state.phase = Phase::Failed(e.to_string());
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use rowboard_core::Member;

    use super::*;
    use crate::source::seed_members;

    fn fill(view: &TableView<Member>, name: &str, email: &str, role: &str) {
        view.update_draft_field("name", name);
        view.update_draft_field("email", email);
        view.update_draft_field("role", role);
    }

    #[test]
    fn update_sets_one_field() {
        let view = TableView::seeded(seed_members());
        view.update_draft_field("name", "Test User");

        let draft = view.snapshot().draft;
        assert_eq!(draft.get("name"), Some("Test User"));
        assert_eq!(draft.get("email"), Some(""));
        assert_eq!(draft.get("role"), Some(""));
    }

    #[test]
    fn unknown_field_leaves_draft_unchanged() {
        let view = TableView::seeded(seed_members());
        let before = view.snapshot();
        view.update_draft_field("salary", "lots");
        assert_eq!(view.snapshot(), before);
    }

    #[test]
    fn complete_draft_appends_with_next_id_and_clears() {
        let view = TableView::seeded(seed_members());
        fill(&view, "New User", "newuser@example.com", "New Role");

        assert!(view.submit_draft());

        let state = view.snapshot();
        assert_eq!(state.items.len(), 4);
        assert_eq!(
            state.items[3],
            Member::new(4, "New User", "newuser@example.com", "New Role")
        );
        assert!(state.draft.fields().all(|(_, v)| v.is_empty()));
    }

    #[test]
    fn partial_draft_is_silent_noop() {
        let view = TableView::seeded(seed_members());
        view.update_draft_field("name", "Partial User");
        let before = view.snapshot();

        assert!(!view.submit_draft());
        assert_eq!(view.snapshot(), before);
        assert!(!view.render().contains("Partial User |"));
    }

    #[test]
    fn empty_draft_is_silent_noop() {
        let view = TableView::seeded(seed_members());
        assert!(!view.submit_draft());
        assert_eq!(view.snapshot().items.len(), 3);
    }

    #[test]
    fn whitespace_fields_are_accepted() {
        let view = TableView::seeded(seed_members());
        fill(&view, " ", " ", " ");
        assert!(view.submit_draft());
        assert_eq!(view.snapshot().items.len(), 4);
    }

    #[test]
    fn successive_submissions_keep_order_and_increasing_ids() {
        let view = TableView::seeded(seed_members());
        fill(&view, "First New", "first@example.com", "First Role");
        view.submit_draft();
        fill(&view, "Second New", "second@example.com", "Second Role");
        view.submit_draft();

        let text = view.render();
        assert!(text.contains("4 | First New | first@example.com | First Role"));
        assert!(text.contains("5 | Second New | second@example.com | Second Role"));

        let ids: Vec<u32> = view.snapshot().items.iter().map(|m| m.id).collect();
        assert_eq!(ids, [1, 2, 3, 4, 5]);
    }

    #[test]
    fn submit_notifies_subscriber_only_on_change() {
        let view = TableView::seeded(seed_members());
        let mut rx = view.subscribe();
        rx.mark_unchanged();

        view.submit_draft();
        assert!(!rx.has_changed().unwrap());

        fill(&view, "A", "a@example.com", "R");
        assert!(rx.has_changed().unwrap());
        rx.mark_unchanged();

        view.submit_draft();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().items.len(), 4);
    }
}
