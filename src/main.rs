#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod host;
mod theme;

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use anyhow::{Context, Result};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use folio_core::{FolioConfig, PageSpec};

/// Page and config loaded at startup
pub struct Startup {
    pub page: PageSpec,
    pub config: FolioConfig,
}

static STARTUP: OnceLock<Startup> = OnceLock::new();

/// Get the startup page and config (built-in defaults if unset)
pub fn startup() -> &'static Startup {
    STARTUP.get_or_init(|| Startup {
        page: PageSpec::default(),
        config: FolioConfig::default(),
    })
}

/// Default config location (~/.config/folio/config.json on Linux)
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("folio").join("config.json"))
}

/// Folio - Portfolio page
#[derive(Parser, Debug)]
#[command(name = "folio-desktop")]
#[command(about = "Folio - portfolio page in a desktop window")]
struct Args {
    /// Page description (default: built-in portfolio page)
    #[arg(short, long)]
    page: Option<PathBuf>,

    /// Behaviour config (default: ~/.config/folio/config.json if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn load_config(explicit: Option<&Path>) -> Result<FolioConfig> {
    if let Some(path) = explicit {
        return FolioConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()));
    }
    match default_config_path() {
        Some(path) if path.exists() => FolioConfig::load(&path)
            .with_context(|| format!("Failed to load config from {}", path.display())),
        _ => Ok(FolioConfig::default()),
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    folio_core::logging::init(args.verbose);

    let page = match &args.page {
        Some(path) => PageSpec::load(path)
            .with_context(|| format!("Failed to load page from {}", path.display()))?,
        None => PageSpec::default(),
    };
    let config = load_config(args.config.as_deref())?;

    let title = format!("{} - Portfolio", page.owner);
    tracing::info!(owner = %page.owner, projects = config.projects.len(), "Starting Folio");

    let _ = STARTUP.set(Startup { page, config });

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
