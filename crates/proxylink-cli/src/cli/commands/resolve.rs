//! `proxylink resolve <path>` – recover the target behind a proxy path.

use anyhow::{Context, Result};
use proxylink_core::config::LinkConfig;
use proxylink_core::proxy_path;
use proxylink_core::url_model::{content_type_for, safe_filename};
use proxylink_core::validate::validate_target;

pub fn run_resolve(cfg: &LinkConfig, path: &str, query: Option<&str>) -> Result<()> {
    let target = proxy_path::target_from_path(path, query, cfg.max_url_length)?;
    validate_target(&target, &cfg.target_policy())
        .with_context(|| format!("target refused: {}", target))?;

    let file_name = safe_filename(&target);
    tracing::info!("resolved {} -> {}", path, target);

    println!("{:<14} {}", "target:", target);
    println!("{:<14} {}", "filename:", file_name);
    println!("{:<14} {}", "content-type:", content_type_for(&file_name));
    Ok(())
}
