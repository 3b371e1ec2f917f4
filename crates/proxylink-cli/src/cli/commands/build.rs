//! `proxylink build <url>` – print the proxy link for a target URL.

use anyhow::Result;
use proxylink_core::link;

pub fn run_build(url: &str, origin: &str) -> Result<()> {
    let link = link::build(url, origin)?;
    println!("{:<10} {}", "link:", link.display_url());
    println!("{:<10} {}", "path:", link.download_path());
    let name = match link.suggested_file_name() {
        "" => "-",
        name => name,
    };
    println!("{:<10} {}", "filename:", name);
    Ok(())
}
