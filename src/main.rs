use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use chrono::Local;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use freee_receipts::config::{ReceiptPaths, Settings};
use freee_receipts::display::format_export_summary;
use freee_receipts::services::{ConvertService, SelectAll, Selector};
use freee_receipts::tui::FuzzyFinder;

#[derive(Parser)]
#[command(
    name = "freee-receipts",
    version,
    about = "Convert purchase receipt CSV exports into a freee import file",
    long_about = "Reads order-history CSV exports, lets you pick the purchases to book \
                  in an interactive finder, and writes them as expense entries to \
                  freee-YYYY-MM-DD.csv in freee's import format."
)]
struct Cli {
    /// Receipt CSV files exported from the order history
    files: Vec<PathBuf>,

    /// Select every receipt without opening the finder
    #[arg(long)]
    all: bool,

    /// Directory to write the import file to
    #[arg(short, long, default_value = ".")]
    output_dir: PathBuf,

    /// Settings file (defaults to config.json in the config directory)
    #[arg(short, long, env = "FREEE_RECEIPTS_CONFIG")]
    config: Option<PathBuf>,

    /// Write a settings file with the default values and exit
    #[arg(long, conflicts_with = "all")]
    init_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging();

    if cli.init_config {
        return init_config(cli.config.as_deref());
    }

    // Load settings
    let settings = match &cli.config {
        Some(path) => Settings::load_from(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::load_default()?,
    };

    let mut selector: Box<dyn Selector> = if cli.all {
        Box::new(SelectAll)
    } else {
        Box::new(FuzzyFinder::default())
    };

    let service = ConvertService::new(&settings);
    let today = Local::now().date_naive();
    let report = service.run(&cli.files, selector.as_mut(), &cli.output_dir, today)?;

    print!("{}", format_export_summary(&report.output_path, &report.records));

    Ok(())
}

/// Write default settings to `path`, or to the config directory
fn init_config(path: Option<&Path>) -> Result<()> {
    let settings = Settings::default();
    let written = match path {
        Some(path) => {
            if path.exists() {
                bail!("Settings file already exists: {}", path.display());
            }
            settings.save_to(path)?;
            path.to_path_buf()
        }
        None => {
            let paths = ReceiptPaths::new()?;
            let file = paths.settings_file();
            if file.exists() {
                bail!("Settings file already exists: {}", file.display());
            }
            settings.save(&paths)?;
            file
        }
    };

    println!("Wrote default settings to {}", written.display());
    Ok(())
}

/// Diagnostics go to stderr, filtered by `RUST_LOG` (default: warn)
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
