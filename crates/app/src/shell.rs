//! Line-oriented terminal host for a [`TableView`].
//!
//! Each input line is one command. Draft edits and submissions go through
//! the view; re-rendering is left to the subscriber started with
//! [`spawn_renderer`].

use rowboard_core::Record;
use rowboard_view::{render, TableState, TableView};
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tokio::sync::watch;
use tokio::task::JoinHandle;

pub const HELP_TEXT: &str = "\
Commands:
  set <field> <value>   edit one field of the new row
  add                   append the new row
  show                  print the table
  help                  print this help
  quit                  exit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Set { field: String, value: String },
    Add,
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShellError {
    #[error("Unknown command: {0} (try `help`)")]
    UnknownCommand(String),

    #[error("Usage: set <field> <value>")]
    MissingField,
}

/// What the loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Print(String),
    Quit,
}

/// Parse one input line. Blank lines yield `Ok(None)`.
///
/// Everything after `set <field> ` is the value, inner spaces included;
/// `set <field>` alone clears the field.
pub fn parse_command(line: &str) -> Result<Option<Command>, ShellError> {
    let line = line.trim_start();
    if line.trim().is_empty() {
        return Ok(None);
    }

    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));
    let command = match word.trim_end() {
        "set" => {
            let rest = rest.trim_start();
            let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
            let field = field.trim_end();
            if field.is_empty() {
                return Err(ShellError::MissingField);
            }
            Command::Set {
                field: field.to_string(),
                value: value.trim_end_matches(['\r', '\n']).to_string(),
            }
        }
        "add" => Command::Add,
        "show" => Command::Show,
        "help" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => return Err(ShellError::UnknownCommand(other.to_string())),
    };
    Ok(Some(command))
}

/// Apply one command to the view.
pub fn execute<R: Record>(view: &TableView<R>, command: Command) -> Outcome {
    match command {
        Command::Set { field, value } => {
            view.update_draft_field(&field, value);
            Outcome::Continue
        }
        Command::Add => {
            view.submit_draft();
            Outcome::Continue
        }
        Command::Show => Outcome::Print(view.render()),
        Command::Help => Outcome::Print(HELP_TEXT.to_string()),
        Command::Quit => Outcome::Quit,
    }
}

/// Read commands from `input` until `quit` or end of input, printing any
/// command output to stdout.
pub async fn run<R, I>(view: &TableView<R>, input: I) -> std::io::Result<()>
where
    R: Record,
    I: AsyncBufRead + Unpin,
{
    let mut lines = input.lines();
    while let Some(line) = lines.next_line().await? {
        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(command)) => match execute(view, command) {
                Outcome::Continue => {}
                Outcome::Print(text) => println!("{text}"),
                Outcome::Quit => break,
            },
            Err(e) => eprintln!("{e}"),
        }
    }
    tracing::debug!("Shell input finished");
    Ok(())
}

/// Print the rendered table every time the view's state changes.
///
/// The task ends when the view is dropped.
pub fn spawn_renderer<R: Record>(mut rx: watch::Receiver<TableState<R>>) -> JoinHandle<()> {
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let text = render(&rx.borrow_and_update());
            println!("{text}\n");
        }
    })
}

/// How a background load task ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadExit {
    Completed,
    Cancelled,
    Panicked,
}

/// Wind down the background load once the shell has finished.
///
/// With `wait` the task is allowed to finish (so piped input still sees
/// the listing rendered); otherwise it is aborted. A panic inside the task
/// is logged rather than dropped.
pub async fn settle_loader(loader: JoinHandle<()>, wait: bool) -> LoadExit {
    if !wait {
        loader.abort();
    }
    match loader.await {
        Ok(()) => LoadExit::Completed,
        Err(e) if e.is_cancelled() => {
            tracing::debug!("People listing load aborted");
            LoadExit::Cancelled
        }
        Err(e) => {
            tracing::error!(error = %e, "People listing task failed");
            LoadExit::Panicked
        }
    }
}
