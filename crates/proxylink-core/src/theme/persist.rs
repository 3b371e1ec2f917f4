//! Persist theme flags (TOML under the XDG state dir).

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::Appearance;

/// The two persisted flags. Missing keys mean "never set".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ThemePrefs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Appearance>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auto_theme: Option<bool>,
}

impl ThemePrefs {
    /// Default path: `~/.local/state/proxylink/theme.toml`.
    pub fn default_path() -> Result<PathBuf> {
        let xdg_dirs = xdg::BaseDirectories::with_prefix("proxylink")?;
        Ok(xdg_dirs.get_state_home().join("proxylink").join("theme.toml"))
    }

    /// Loads flags from `path`; a missing file yields empty flags.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let data = match std::fs::read_to_string(path) {
            Ok(d) => d,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(e).with_context(|| format!("read theme prefs: {}", path.display())),
        };
        toml::from_str(&data).with_context(|| format!("parse theme prefs: {}", path.display()))
    }

    /// Writes flags to `path`, creating the parent dir if needed.
    pub fn save_to_path(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("create dir: {}", parent.display()))?;
        }
        let data = toml::to_string_pretty(self).context("serialize theme prefs")?;
        std::fs::write(path, data)
            .with_context(|| format!("write theme prefs: {}", path.display()))?;
        Ok(())
    }
}
