use anyhow::Result;
use std::path::Path;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV: &str = "CHIPSEARCH_LOG";

/// Installs a file-backed subscriber when `CHIPSEARCH_LOG` is set.
///
/// The terminal belongs to the UI, so nothing is ever written to stdout or
/// stderr. Returns `false` when logging stays disabled.
pub fn init(log_path: &Path) -> Result<bool> {
    let Ok(directive) = std::env::var(LOG_ENV) else {
        return Ok(false);
    };

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_path)?;

    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new("debug"));
    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to install log subscriber: {e}"))?;

    tracing::info!(path = %log_path.display(), "chipsearch log started");
    Ok(true)
}
