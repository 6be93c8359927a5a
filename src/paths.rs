//! Path and URL conversion utilities.
//!
//! This module handles conversions between:
//! - Page titles and the URLs pages are served at
//! - Config-relative paths and absolute paths

use std::path::{Path, PathBuf};

/// Convert a page title to the URL it is served at.
///
/// # Examples
/// ```ignore
/// page_url("/page", "Golang") => "/page/Golang"
/// page_url("/page/", "Golang") => "/page/Golang"
/// page_url("/", "Golang") => "/Golang"
/// ```
pub fn page_url(route_prefix: &str, title: &str) -> String {
    format!("{}/{}", route_prefix.trim_end_matches('/'), title)
}

/// The axum route pattern that serves pages under `route_prefix`.
pub fn page_route(route_prefix: &str) -> String {
    format!("{}/{{title}}", route_prefix.trim_end_matches('/'))
}

/// Directory that config-relative paths are resolved against.
pub fn base_path_from_config(config_path: &Path) -> PathBuf {
    config_path
        .parent()
        .map(|p| p.to_path_buf())
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Resolve a path from the config file against the config's directory.
pub fn resolve_path(base_path: &Path, path: &Path) -> PathBuf {
    if path.is_relative() {
        base_path.join(path)
    } else {
        path.to_path_buf()
    }
}
