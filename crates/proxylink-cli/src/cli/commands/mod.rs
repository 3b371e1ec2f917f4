//! CLI command handlers, one file per command.

mod build;
mod resolve;
mod theme;

pub use build::run_build;
pub use resolve::run_resolve;
pub use theme::run_theme;
