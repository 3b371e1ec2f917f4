pub mod config;
pub mod logging;

pub mod link;
pub mod proxy_path;
pub mod theme;
pub mod url_model;
pub mod validate;

pub use link::{build, InputError, ProxyLink};
