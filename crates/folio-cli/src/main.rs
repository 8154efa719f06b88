//! Folio CLI
//!
//! Thin wrapper around folio-core for inspecting the portfolio page from
//! the command line.
//!
//! ## Usage
//!
//! ```bash
//! # Print the interactive state of the freshly loaded page
//! folio snapshot
//!
//! # Same, for a custom page description, as JSON
//! folio snapshot --page page.json --json
//!
//! # Replay a script of clicks, key presses and clock advances
//! folio replay script.json
//!
//! # List the project description table
//! folio projects --config config.json
//! ```

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use folio_core::{
    build_document, FolioConfig, PageSpec, RecordingHost, Script, ScrollRequest, SessionSnapshot,
    StepOutcome, UiSession,
};
use serde::Serialize;
use tracing::info;

/// Folio - portfolio page interactions, headless
#[derive(Parser)]
#[command(name = "folio")]
#[command(version = "0.1.0")]
#[command(about = "Folio - portfolio page interactions, headless")]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Page description (default: built-in portfolio page)
    #[arg(short, long, global = true)]
    page: Option<PathBuf>,

    /// Behaviour config (default: built-in settings)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print machine-readable JSON
    #[arg(long, global = true)]
    json: bool,

    /// Pin the year stamped into the footer
    #[arg(long, global = true)]
    year: Option<i32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build and initialize the page, then print its state
    Snapshot,

    /// Run a JSON script of steps against the page
    Replay {
        /// Script file ({"steps": [...]})
        script: PathBuf,
    },

    /// List the project description table
    Projects,
}

/// Everything a replay produced.
#[derive(Serialize)]
struct ReplayReport {
    steps: Vec<StepOutcome>,
    alerts: Vec<String>,
    scrolls: Vec<ScrollRequest>,
    state: SessionSnapshot,
}

fn load_page(path: Option<&Path>) -> Result<PageSpec> {
    match path {
        Some(path) => PageSpec::load(path)
            .with_context(|| format!("Failed to load page from {}", path.display())),
        None => Ok(PageSpec::default()),
    }
}

fn load_config(path: Option<&Path>) -> Result<FolioConfig> {
    match path {
        Some(path) => FolioConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        None => Ok(FolioConfig::default()),
    }
}

fn start_session(cli: &Cli) -> Result<UiSession<RecordingHost>> {
    let page = load_page(cli.page.as_deref())?;
    let config = load_config(cli.config.as_deref())?;
    let host = match cli.year {
        Some(year) => RecordingHost::with_year(year),
        None => RecordingHost::new(),
    };
    info!(owner = %page.owner, "Building page");
    Ok(UiSession::start(build_document(&page), config, host))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    folio_core::logging::init(cli.verbose);

    match &cli.command {
        Commands::Snapshot => {
            let session = start_session(&cli)?;
            let snapshot = session.snapshot();
            if cli.json {
                print_json(&snapshot)?;
            } else {
                print!("{}", snapshot);
            }
        }

        Commands::Replay { script } => {
            let script = Script::load(script)
                .with_context(|| format!("Failed to load script from {}", script.display()))?;
            let mut session = start_session(&cli)?;
            let steps = script.run(&mut session).context("Replay failed")?;

            let report = ReplayReport {
                steps,
                alerts: session.host().alerts.clone(),
                scrolls: session.host().scrolls.clone(),
                state: session.snapshot(),
            };

            if cli.json {
                print_json(&report)?;
            } else {
                println!("Steps ({}):", report.steps.len());
                for outcome in &report.steps {
                    let prevented = if outcome.default_prevented {
                        " [default prevented]"
                    } else {
                        ""
                    };
                    println!(
                        "  {} -> {} handler(s){}",
                        outcome.step, outcome.handlers_run, prevented
                    );
                }
                for alert in &report.alerts {
                    println!("Alert: {}", alert);
                }
                for scroll in &report.scrolls {
                    println!("Scroll: #{}", scroll.element_id);
                }
                println!();
                print!("{}", report.state);
            }
        }

        Commands::Projects => {
            let config = load_config(cli.config.as_deref())?;
            if cli.json {
                print_json(&config.projects)?;
            } else if config.projects.is_empty() {
                println!("No projects configured.");
            } else {
                println!("Projects ({}):", config.projects.len());
                for (key, description) in config.projects.iter() {
                    println!();
                    println!("  {}", key);
                    println!("    {}", description);
                }
            }
        }
    }

    Ok(())
}
