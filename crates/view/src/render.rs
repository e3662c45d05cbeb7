//! Plain-text rendering of a [`TableState`].
//!
//! While pending or failed only a single status line is produced; the
//! table and form are shown once the state is [`Phase::Ready`].

use rowboard_core::Record;

use crate::state::{Phase, TableState};

pub const LOADING_TEXT: &str = "Loading...";

pub fn render<R: Record>(state: &TableState<R>) -> String {
    match &state.phase {
        Phase::Pending => LOADING_TEXT.to_string(),
        Phase::Failed(message) => format!("Error fetching data: {message}"),
        Phase::Ready => render_table(state),
    }
}

fn render_table<R: Record>(state: &TableState<R>) -> String {
    let mut lines = vec![R::TITLE.to_string(), String::new(), R::HEADER.to_string()];
    lines.extend(state.items.iter().map(R::display_line));

    lines.push(String::new());
    lines.push(R::FORM_TITLE.to_string());
    for spec in R::DRAFT_FIELDS {
        let value = state.draft.get(spec.name).unwrap_or_default();
        lines.push(format!("[{}: {}]", spec.placeholder, value));
    }
    lines.push(format!("[{}]", R::ACTION_LABEL));

    lines.join("\n")
}
