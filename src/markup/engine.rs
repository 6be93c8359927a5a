//! Pluggable markup engines.
//!
//! Two engines turn page markup into an HTML fragment:
//!
//! - [`RewriteEngine`] runs the ordered regex stages of the rewrite
//!   [`Pipeline`]. This is the default.
//! - [`TreeEngine`] lexes and parses into a document tree and renders it in
//!   one pass. Overlapping bold/italic spans come out properly nested.
//!
//! Both are pure and `Send + Sync`; one instance serves every request.

use crate::config::{EngineKind, MarkupConfig};
use crate::markup::pipeline::Pipeline;
use crate::markup::tree::{HtmlWriter, parse};

/// A markup engine that renders page markup to an HTML fragment.
pub trait MarkupEngine: Send + Sync {
    /// The name of this engine (e.g., "rewrite", "tree").
    fn name(&self) -> &'static str;

    /// Render markup to an HTML fragment. Never fails: unrecognized markup
    /// is kept as text.
    fn render(&self, markup: &str) -> String;
}

/// Engine backed by the ordered rewrite pipeline.
pub struct RewriteEngine {
    pipeline: Pipeline,
}

impl RewriteEngine {
    pub fn new(config: &MarkupConfig) -> Self {
        Self {
            pipeline: Pipeline::rewrite(config),
        }
    }
}

impl MarkupEngine for RewriteEngine {
    fn name(&self) -> &'static str {
        "rewrite"
    }

    fn render(&self, markup: &str) -> String {
        self.pipeline.run(markup)
    }
}

/// Engine backed by the lexer/parser and tree writer.
pub struct TreeEngine {
    route_prefix: String,
    escape_html: bool,
}

impl TreeEngine {
    pub fn new(config: &MarkupConfig) -> Self {
        Self {
            route_prefix: config.route_prefix.clone(),
            escape_html: config.escape_html,
        }
    }
}

impl MarkupEngine for TreeEngine {
    fn name(&self) -> &'static str {
        "tree"
    }

    fn render(&self, markup: &str) -> String {
        HtmlWriter::new(&self.route_prefix, self.escape_html).write_document(&parse(markup))
    }
}

/// Build the engine selected by the markup configuration.
pub fn engine_for(config: &MarkupConfig) -> Box<dyn MarkupEngine> {
    match config.engine {
        EngineKind::Rewrite => Box::new(RewriteEngine::new(config)),
        EngineKind::Tree => Box::new(TreeEngine::new(config)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "= Welcome to the Wiki =\nThis is a simple page about ''Golang''. Visit the '''Golang Page''' by clicking [[Golang]]. \nTo learn more, visit [https://golang.org].";

    fn engines() -> Vec<Box<dyn MarkupEngine>> {
        [EngineKind::Rewrite, EngineKind::Tree]
            .into_iter()
            .map(|engine| {
                engine_for(&MarkupConfig {
                    engine,
                    ..MarkupConfig::default()
                })
            })
            .collect()
    }

    #[test]
    fn test_engine_selection() {
        let names: Vec<_> = engines().iter().map(|e| e.name()).collect();
        assert_eq!(names, vec!["rewrite", "tree"]);
    }

    #[test]
    fn test_engines_agree_on_simple_markup() {
        let cases = [
            ("'''bold'''", "<b>bold</b>"),
            ("''italic''", "<i>italic</i>"),
            ("== Level 2 ==", "<h2>Level 2</h2>"),
            ("=== Odd ==", "=== Odd =="),
            ("[[PageName]]", "<a href=\"/page/PageName\">PageName</a>"),
            ("[[a]b]]", "[[a]b]]"),
            (
                "[https://example.com]",
                "<a href=\"https://example.com\">https://example.com</a>",
            ),
            ("[mailto:me@example.com]", "[mailto:me@example.com]"),
            ("''unclosed", "''unclosed"),
        ];
        for engine in engines() {
            for (input, expected) in cases {
                assert_eq!(
                    engine.render(input),
                    expected,
                    "engine {} on {:?}",
                    engine.name(),
                    input
                );
            }
        }
    }

    #[test]
    fn test_engines_agree_on_sample_page() {
        let [rewrite, tree]: [Box<dyn MarkupEngine>; 2] = engines().try_into().ok().unwrap();
        assert_eq!(rewrite.render(SAMPLE), tree.render(SAMPLE));
    }

    #[test]
    fn test_engines_differ_on_overlapping_quotes() {
        let [rewrite, tree]: [Box<dyn MarkupEngine>; 2] = engines().try_into().ok().unwrap();
        assert_eq!(rewrite.render("'''''both'''''"), "<b><i>both</b></i>");
        assert_eq!(tree.render("'''''both'''''"), "<b><i>both</i></b>");
    }

    #[test]
    fn test_tree_engine_uses_route_prefix() {
        let engine = TreeEngine::new(&MarkupConfig {
            route_prefix: "/wiki".to_string(),
            ..MarkupConfig::default()
        });
        assert_eq!(engine.render("[[Home]]"), "<a href=\"/wiki/Home\">Home</a>");
    }
}
