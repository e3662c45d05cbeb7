//! `rowboard` -- terminal host for the table view and toolkit.
//!
//! # Usage
//!
//! | Invocation                          | Effect                                   |
//! |-------------------------------------|------------------------------------------|
//! | `rowboard`                          | Mount the table view, read commands from stdin |
//! | `rowboard toolkit <op> <args...>`   | Run one toolkit function, print JSON     |
//! | `rowboard demo`                     | Print the toolkit demo lines             |
//!
//! # Environment variables
//!
//! | Variable              | Required | Default                              |
//! |-----------------------|----------|--------------------------------------|
//! | `ROWBOARD_VARIANT`    | no       | `remote`                             |
//! | `ROWBOARD_PEOPLE_URL` | no       | `https://swapi.py4e.com/api/people/` |
//! | `RUST_LOG`            | no       | `rowboard_app=info,rowboard_view=info,rowboard_swapi=info` |

use std::io::IsTerminal;
use std::sync::Arc;

use anyhow::Context;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rowboard_app::cli::{self, OPERATIONS};
use rowboard_app::config::{AppConfig, Variant};
use rowboard_app::shell;
use rowboard_core::{Character, Record};
use rowboard_swapi::SwapiClient;
use rowboard_toolkit::demo::demo_lines;
use rowboard_view::{seed_members, TableView};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so the rendered table on stdout stays readable.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "rowboard_app=info,rowboard_view=info,rowboard_swapi=info".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        None => run_view().await,
        Some("toolkit") => run_toolkit(&args[1..]).await,
        Some("demo") => {
            for line in demo_lines()? {
                println!("{line}");
            }
            Ok(())
        }
        Some(other) => anyhow::bail!("Unknown subcommand: {other} (expected `toolkit` or `demo`)"),
    }
}

async fn run_toolkit(args: &[String]) -> anyhow::Result<()> {
    let Some((op, rest)) = args.split_first() else {
        anyhow::bail!("Usage: rowboard toolkit <op> <args...>; ops: {}", OPERATIONS.join(", "));
    };

    let values = rest.iter().map(|raw| cli::parse_arg(raw)).collect();
    match cli::invoke(op, values).await {
        Ok(result) => {
            println!("{result}");
            Ok(())
        }
        Err(e) => {
            tracing::error!(op = %op, error = %e, "Toolkit operation failed");
            Err(e.into())
        }
    }
}

async fn run_view() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("Invalid configuration")?;
    tracing::info!(variant = ?config.variant, people_url = %config.people_url, "Loaded configuration");

    println!("{}\n", shell::HELP_TEXT);
    let stdin = BufReader::new(tokio::io::stdin());

    match config.variant {
        Variant::Remote => {
            let view = Arc::new(TableView::<Character>::pending());
            let renderer = mount(view.as_ref());

            let client = SwapiClient::new(config.people_url);
            let loader = {
                let view = Arc::clone(&view);
                tokio::spawn(async move { view.load(&client).await })
            };

            shell::run(view.as_ref(), stdin).await?;
            // Piped input ends immediately; let the listing arrive first.
            let wait = !std::io::stdin().is_terminal();
            shell::settle_loader(loader, wait).await;
            drop(view);
            renderer.await.ok();
        }
        Variant::Seeded => {
            let view = TableView::seeded(seed_members());
            let renderer = mount(&view);

            shell::run(&view, stdin).await?;
            drop(view);
            renderer.await.ok();
        }
    }

    tracing::info!("Shutting down");
    Ok(())
}

/// Print the initial render and start re-rendering on every change.
fn mount<R: Record>(view: &TableView<R>) -> tokio::task::JoinHandle<()> {
    println!("{}\n", view.render());
    shell::spawn_renderer(view.subscribe())
}
