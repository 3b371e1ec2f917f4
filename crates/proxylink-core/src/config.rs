use anyhow::{ensure, Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::proxy_path::DEFAULT_MAX_PATH_LEN;
use crate::theme::ThemeSchedule;
use crate::validate::TargetPolicy;

/// Global configuration loaded from `~/.config/proxylink/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkConfig {
    /// Origin (scheme + host[:port]) the proxy is reachable at; prefixed to display URLs.
    pub origin: String,
    /// Maximum accepted proxy path length in bytes.
    #[serde(default = "default_max_url_length")]
    pub max_url_length: usize,
    /// Host suffixes whose targets skip structural validation.
    #[serde(default = "default_trusted_hosts")]
    pub trusted_hosts: Vec<String>,
    /// Optional auto-theme hours; if missing, 20:00 to 06:00 is dark.
    #[serde(default)]
    pub theme: Option<ThemeSchedule>,
}

fn default_max_url_length() -> usize {
    DEFAULT_MAX_PATH_LEN
}

fn default_trusted_hosts() -> Vec<String> {
    TargetPolicy::default().trusted_hosts
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            origin: "http://127.0.0.1:8080".to_string(),
            max_url_length: default_max_url_length(),
            trusted_hosts: default_trusted_hosts(),
            theme: None,
        }
    }
}

impl LinkConfig {
    pub fn target_policy(&self) -> TargetPolicy {
        TargetPolicy {
            trusted_hosts: self.trusted_hosts.clone(),
        }
    }

    pub fn theme_schedule(&self) -> ThemeSchedule {
        self.theme.unwrap_or_default()
    }

    /// Rejects values the rest of the crate assumes are in range.
    pub fn check(&self) -> Result<()> {
        if let Some(theme) = &self.theme {
            ensure!(
                theme.dark_from_hour < 24 && theme.light_from_hour < 24,
                "hours must be 0-23, got dark_from_hour = {}, light_from_hour = {}",
                theme.dark_from_hour,
                theme.light_from_hour
            );
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("proxylink")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<LinkConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as [`load_or_init`] against an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<LinkConfig> {
    if !path.exists() {
        let default_cfg = LinkConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write config: {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data =
        fs::read_to_string(path).with_context(|| format!("read config: {}", path.display()))?;
    let cfg: LinkConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    cfg.check()
        .with_context(|| format!("invalid [theme] hours in config: {}", path.display()))?;
    Ok(cfg)
}
