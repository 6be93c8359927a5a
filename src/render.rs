use std::path::Path;

use serde::Serialize;
use tera::{Context, Tera};

/// Name of the template every theme must provide.
pub const PAGE_TEMPLATE: &str = "page.html";

/// Template used when no theme directory is configured.
const DEFAULT_PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{{ page.title }} - {{ site.name }}</title>
</head>
<body>
    <h1>{{ page.title }}</h1>
    <div>{{ content | safe }}</div>
</body>
</html>
"#;

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("template error: {0}")]
    Template(#[from] tera::Error),

    #[error("theme not found: {0}")]
    ThemeNotFound(String),

    #[error("theme {0} has no templates/page.html")]
    MissingPageTemplate(String),
}

/// The page renderer, wrapping Tera.
///
/// Wraps a rendered HTML fragment in a complete HTML document. Templates
/// ending in `.html` are auto-escaped, so templates must mark the fragment
/// with `| safe`.
pub struct PageRenderer {
    tera: Tera,
}

impl PageRenderer {
    /// Create a renderer using the built-in page template.
    pub fn builtin() -> Result<Self, RenderError> {
        let mut tera = Tera::default();
        tera.add_raw_template(PAGE_TEMPLATE, DEFAULT_PAGE_TEMPLATE)?;
        Ok(Self { tera })
    }

    /// Create a new renderer loading templates from the given theme directory.
    pub fn from_theme(theme_path: &Path) -> Result<Self, RenderError> {
        let templates_path = theme_path.join("templates");
        if !templates_path.exists() {
            return Err(RenderError::ThemeNotFound(
                theme_path.display().to_string(),
            ));
        }

        let glob = templates_path.join("**/*.html");
        let glob_str = glob.to_string_lossy();
        let tera = Tera::new(&glob_str)?;

        if !tera.get_template_names().any(|name| name == PAGE_TEMPLATE) {
            return Err(RenderError::MissingPageTemplate(
                theme_path.display().to_string(),
            ));
        }

        Ok(Self { tera })
    }

    /// Use the configured theme directory, or the built-in template if none
    /// is set. Relative theme paths are resolved against `base_path`.
    pub fn from_config(theme_path: Option<&Path>, base_path: &Path) -> Result<Self, RenderError> {
        match theme_path {
            Some(path) => Self::from_theme(&base_path.join(path)),
            None => Self::builtin(),
        }
    }

    /// Render a page with the given context.
    pub fn render_page(&self, context: &PageContext) -> Result<String, RenderError> {
        let mut tera_context = Context::new();
        tera_context.insert("site", &context.site);
        tera_context.insert("page", &context.page);
        tera_context.insert("content", &context.content);
        tera_context.insert("theme", &context.theme);

        Ok(self.tera.render(PAGE_TEMPLATE, &tera_context)?)
    }
}

/// Context passed to page templates.
#[derive(Debug, Serialize)]
pub struct PageContext {
    pub site: SiteContext,
    pub page: PageInfo,
    /// Rendered HTML fragment
    pub content: String,
    /// Theme settings from config, accessible as `theme.*` in templates
    pub theme: serde_json::Value,
}

/// Site-level information.
#[derive(Debug, Clone, Serialize)]
pub struct SiteContext {
    pub name: String,
}

/// Information about the current page.
#[derive(Debug, Serialize)]
pub struct PageInfo {
    /// Display title ("Main Page")
    pub title: String,
    /// Title as it appears in URLs ("Main_Page")
    pub name: String,
    pub url: String,
}
