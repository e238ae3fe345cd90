//! # majorem-render
//!
//! Renders the landing page to a static HTML file.
//!
//! ## Usage
//!
//! ```bash
//! # Plain page
//! majorem-render --out dist/index.html
//!
//! # Preview with the address demo open
//! majorem-render --demo address-cleaning --out dist/address.html
//!
//! # Replay a recorded visitor state
//! majorem-render --state demos/sentiment.json --seed 7
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use majorem::config::CONFIG_FILE;
use majorem::sentiment::RngSource;
use majorem::{DemoId, PageSnapshot, SiteConfig};
use majorem_site::{render_page, PageState};

#[derive(Parser, Debug)]
#[command(name = "majorem-render")]
#[command(about = "Render the Majorem landing page to static HTML")]
#[command(version)]
struct Args {
    /// Output file
    #[arg(long, short, default_value = "dist/index.html")]
    out: PathBuf,

    /// Site config (default: ./majorem.toml if present)
    #[arg(long)]
    config: Option<PathBuf>,

    /// JSON page snapshot to replay before rendering
    #[arg(long)]
    state: Option<PathBuf>,

    /// Open a demo modal (address-cleaning, sentiment-analysis)
    #[arg(long)]
    demo: Option<DemoId>,

    /// Seed for the sentiment demo, for reproducible previews
    #[arg(long)]
    seed: Option<u64>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> ExitCode {
    let args = Args::parse();

    // Logs go to stderr so stdout stays free for shell pipelines
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.log_level.parse().unwrap_or_default()),
        )
        .with_target(false)
        .init();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("[majorem-render] Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config = match &args.config {
        Some(path) => {
            if !path.exists() {
                anyhow::bail!("config file not found: {}", path.display());
            }
            SiteConfig::load_from_path(path)
        }
        None => SiteConfig::load(Path::new(".")),
    };
    debug!(brand = %config.brand, "Site config ready (default file: {})", CONFIG_FILE);

    let mut snapshot = match &args.state {
        Some(path) => load_snapshot(path)?,
        None => PageSnapshot::default(),
    };
    if let Some(demo) = args.demo {
        snapshot.open_demo = Some(demo);
    }

    let source = match args.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };

    let state = PageState::from_snapshot(&snapshot, source);
    let html = render_page(state, config);

    if let Some(parent) = args.out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(&args.out, &html)
        .with_context(|| format!("Failed to write {}", args.out.display()))?;

    info!(
        out = %args.out.display(),
        bytes = html.len(),
        demo = ?snapshot.open_demo,
        "Page rendered"
    );
    Ok(())
}

fn load_snapshot(path: &Path) -> Result<PageSnapshot> {
    let json = fs::read_to_string(path)
        .with_context(|| format!("Failed to read state file {}", path.display()))?;
    PageSnapshot::from_json(&json)
        .with_context(|| format!("Invalid state file {}", path.display()))
}
