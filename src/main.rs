use std::path::PathBuf;
use std::process;

use anyhow::Context;
use clap::Parser;

use dexview::config::{Config, Overrides};

/// Browse a REST catalog in the terminal.
#[derive(Debug, Parser)]
#[command(name = "dexview", version, about)]
struct Cli {
    /// Path to the config file (default: ~/.config/dexview/config.toml)
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the catalog API base URL
    #[arg(long, value_name = "URL")]
    base_url: Option<String>,

    /// Override the number of entries requested from the catalog
    #[arg(long, value_name = "N")]
    limit: Option<u32>,

    /// Override the number of rows per page
    #[arg(long, value_name = "N")]
    page_size: Option<usize>,

    /// Override the log file location
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn overrides(&self) -> Overrides {
        Overrides {
            base_url: self.base_url.clone(),
            list_limit: self.limit,
            page_size: self.page_size,
            log_file: self.log_file.clone(),
        }
    }
}

fn load_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    config.apply(cli.overrides());
    config.validate()?;
    Ok(config)
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            process::exit(1);
        }
    };

    if let Err(err) = run(config) {
        eprintln!("Error: {err:#}");
        process::exit(1);
    }
}

fn run(config: Config) -> anyhow::Result<()> {
    let log_path = dexview::logging::init_tracing(&config.logging)
        .context("Failed to initialize logging")?;
    tracing::info!(log = %log_path.display(), "Logging initialized");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start async runtime")?;

    runtime
        .block_on(dexview::ui::run(&config))
        .context("Catalog view failed")
}
