//! Configuration type definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

// =============================================================================
// Site configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site name, available to templates as `site.name`
    #[serde(default = "default_site_name")]
    pub name: String,
}

fn default_site_name() -> String {
    "miniwiki".to_string()
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            name: default_site_name(),
        }
    }
}

// =============================================================================
// Page storage
// =============================================================================

/// Where page markup is read from.
///
/// A page titled `Main_Page` lives at `<dir>/Main_Page.<extension>`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PagesConfig {
    /// Directory holding page files (relative to the config file)
    #[serde(default = "default_pages_dir")]
    pub dir: PathBuf,
    /// File extension of page files, without the dot
    #[serde(default = "default_extension")]
    pub extension: String,
    /// Page that `/` redirects to
    #[serde(default = "default_home")]
    pub home: String,
}

fn default_pages_dir() -> PathBuf {
    PathBuf::from("pages")
}

fn default_extension() -> String {
    "wiki".to_string()
}

fn default_home() -> String {
    "Main_Page".to_string()
}

impl Default for PagesConfig {
    fn default() -> Self {
        Self {
            dir: default_pages_dir(),
            extension: default_extension(),
            home: default_home(),
        }
    }
}

// =============================================================================
// Markup configuration
// =============================================================================

/// Which markup engine renders page content.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Ordered regex rewrite stages
    #[default]
    Rewrite,
    /// Lexer, parser and tree renderer
    Tree,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkupConfig {
    #[serde(default)]
    pub engine: EngineKind,
    /// Path prefix for internal links; also the route pages are served on
    #[serde(default = "default_route_prefix")]
    pub route_prefix: String,
    /// Escape `<`, `>`, `&` and `"` in page text before markup is applied
    #[serde(default)]
    pub escape_html: bool,
}

fn default_route_prefix() -> String {
    "/page".to_string()
}

impl Default for MarkupConfig {
    fn default() -> Self {
        Self {
            engine: EngineKind::default(),
            route_prefix: default_route_prefix(),
            escape_html: false,
        }
    }
}

// =============================================================================
// Server configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

// =============================================================================
// Theme configuration
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThemeConfig {
    /// Theme directory containing `templates/page.html`; the built-in
    /// template is used when unset
    #[serde(default)]
    pub path: Option<PathBuf>,
    /// Arbitrary settings passed to templates as `theme.*`
    #[serde(default = "default_theme_settings")]
    pub settings: serde_json::Value,
}

fn default_theme_settings() -> serde_json::Value {
    serde_json::Value::Object(Default::default())
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            path: None,
            settings: default_theme_settings(),
        }
    }
}
