//! File logging. The terminal belongs to the TUI, so nothing goes to stdout.

use anyhow::{Context, Result};
use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::{prelude::*, EnvFilter};

use crate::config::project_dirs;
use crate::defaults::Defaults;

pub fn default_log_dir() -> PathBuf {
    project_dirs()
        .map(|d| d.data_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Install the global subscriber writing to `<dir>/food-meme.log`.
/// `RUST_LOG` overrides the default filter.
pub fn init_logging(dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("creating log directory {}", dir.display()))?;
    let log_path = dir.join(Defaults::LOG_FILE);

    let file = OpenOptions::new()
        .append(true)
        .create(true)
        .open(&log_path)
        .with_context(|| format!("opening {}", log_path.display()))?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(Defaults::LOG_FILTER))
        .context("parsing log filter")?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Arc::new(file))
                .with_ansi(false),
        )
        .try_init()
        .context("installing tracing subscriber")?;

    tracing::info!("Logging initialized to: {:?}", log_path);
    Ok(log_path)
}
