//! The wiki: page lookup, markup rendering and page templating wired
//! together.
//!
//! Each collaborator is passed in explicitly; nothing here is global. The
//! HTTP server and the CLI share one `Wiki` per process.

use std::path::Path;

use tracing::debug;

use crate::config::Config;
use crate::markup::{MarkupEngine, engine_for};
use crate::paths::{page_url, resolve_path};
use crate::render::{PageContext, PageInfo, PageRenderer, RenderError, SiteContext};
use crate::store::{DirectoryStore, PageStore, StoreError};
use crate::util::display_title;

#[derive(thiserror::Error, Debug)]
pub enum WikiError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("failed to render page: {0}")]
    Render(#[from] RenderError),
}

pub struct Wiki {
    store: Box<dyn PageStore>,
    engine: Box<dyn MarkupEngine>,
    renderer: PageRenderer,
    site: SiteContext,
    route_prefix: String,
    home: String,
    theme_settings: serde_json::Value,
}

impl Wiki {
    /// Create a wiki around the given store and renderer, with the engine
    /// and settings taken from the config.
    pub fn new<S: PageStore + 'static>(config: &Config, store: S, renderer: PageRenderer) -> Self {
        Self {
            store: Box::new(store),
            engine: engine_for(&config.markup),
            renderer,
            site: SiteContext {
                name: config.site.name.clone(),
            },
            route_prefix: config.markup.route_prefix.clone(),
            home: config.pages.home.clone(),
            theme_settings: config.theme.settings.clone(),
        }
    }

    /// Create a wiki reading pages from the configured directory.
    ///
    /// Relative paths in the config are resolved against `base_path`.
    pub fn from_config(config: &Config, base_path: &Path) -> Result<Self, WikiError> {
        let pages_dir = resolve_path(base_path, &config.pages.dir);
        debug!(dir = %pages_dir.display(), "reading pages from directory");
        let store = DirectoryStore::new(pages_dir, config.pages.extension.clone());
        let renderer = PageRenderer::from_config(config.theme.path.as_deref(), base_path)?;
        Ok(Self::new(config, store, renderer))
    }

    /// Name of the markup engine in use.
    pub fn engine_name(&self) -> &'static str {
        self.engine.name()
    }

    pub fn route_prefix(&self) -> &str {
        &self.route_prefix
    }

    /// URL of the home page.
    pub fn home_url(&self) -> String {
        page_url(&self.route_prefix, &self.home)
    }

    /// Render markup to an HTML fragment.
    pub fn render_fragment(&self, markup: &str) -> String {
        self.engine.render(markup)
    }

    /// Render markup as a complete HTML document for the titled page.
    pub fn render_document(&self, title: &str, markup: &str) -> Result<String, WikiError> {
        let context = PageContext {
            site: self.site.clone(),
            page: PageInfo {
                title: display_title(title),
                name: title.to_string(),
                url: page_url(&self.route_prefix, title),
            },
            content: self.render_fragment(markup),
            theme: self.theme_settings.clone(),
        };
        Ok(self.renderer.render_page(&context)?)
    }

    /// Look up a page and render it as a complete HTML document.
    ///
    /// Returns `Ok(None)` if the page doesn't exist.
    pub fn render_page(&self, title: &str) -> Result<Option<String>, WikiError> {
        let Some(markup) = self.store.lookup(title)? else {
            return Ok(None);
        };
        debug!(title, engine = self.engine.name(), "rendering page");
        self.render_document(title, &markup).map(Some)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EngineKind;
    use crate::store::MemoryStore;

    fn wiki(config: &Config) -> Wiki {
        Wiki::new(
            config,
            MemoryStore::with_sample("Main_Page"),
            PageRenderer::builtin().unwrap(),
        )
    }

    #[test]
    fn test_render_page() {
        let html = wiki(&Config::default())
            .render_page("Main_Page")
            .unwrap()
            .unwrap();

        assert!(html.contains("<title>Main Page - miniwiki</title>"));
        assert!(html.contains("<h1>Welcome to the Wiki</h1>"));
        assert!(html.contains("<i>Golang</i>"));
        assert!(html.contains("<b>Golang Page</b>"));
        assert!(html.contains("<a href=\"/page/Golang\">Golang</a>"));
        assert!(html.contains("<a href=\"https://golang.org\">https://golang.org</a>"));
    }

    #[test]
    fn test_missing_page() {
        assert!(wiki(&Config::default()).render_page("Nope").unwrap().is_none());
    }

    #[test]
    fn test_invalid_title() {
        assert!(matches!(
            wiki(&Config::default()).render_page("../etc"),
            Err(WikiError::Store(StoreError::InvalidTitle(_)))
        ));
    }

    #[test]
    fn test_engine_and_prefix_follow_config() {
        let mut config = Config::default();
        config.markup.engine = EngineKind::Tree;
        config.markup.route_prefix = "/wiki".to_string();
        config.pages.home = "Start".to_string();

        let wiki = wiki(&config);
        assert_eq!(wiki.engine_name(), "tree");
        assert_eq!(wiki.home_url(), "/wiki/Start");
        assert_eq!(
            wiki.render_fragment("'''''x''''' [[A]]"),
            "<b><i>x</i></b> <a href=\"/wiki/A\">A</a>"
        );
    }

    #[test]
    fn test_from_config_reads_page_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("pages")).unwrap();
        std::fs::write(dir.path().join("pages/Home.wiki"), "== Hi ==").unwrap();

        let wiki = Wiki::from_config(&Config::default(), dir.path()).unwrap();
        let html = wiki.render_page("Home").unwrap().unwrap();
        assert!(html.contains("<h2>Hi</h2>"));
    }
}
