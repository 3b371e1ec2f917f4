//! Logging init: append to a file under the XDG state dir, or write to stderr.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,proxylink=debug,proxylink_core=debug";

/// Path of the log file: `~/.local/state/proxylink/proxylink.log`.
pub fn log_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("proxylink")?;
    Ok(xdg_dirs.get_state_home().join("proxylink").join("proxylink.log"))
}

/// `RUST_LOG` when set and valid, otherwise the crate defaults.
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn open_append(path: &Path) -> Result<fs::File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("create log dir: {}", dir.display()))?;
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("open log file: {}", path.display()))
}

/// Install the global subscriber writing to the XDG state log file.
/// Returns Err when the file cannot be opened (the caller then uses
/// [`init_logging_stderr`]) or a subscriber is already installed.
pub fn init_logging() -> Result<()> {
    let path = log_path()?;
    let file = open_append(&path)?;

    // Events are serialised through the lock; the file stays open for the process lifetime.
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install tracing subscriber: {e}"))?;

    tracing::info!("proxylink logging initialized at {}", path.display());
    Ok(())
}

/// Install a stderr-only subscriber. A no-op if one is already installed.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn open_append_creates_dirs_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state").join("proxylink.log");

        open_append(&path).unwrap().write_all(b"one\n").unwrap();
        open_append(&path).unwrap().write_all(b"two\n").unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "one\ntwo\n");
    }

}
