//! HTML output for the document tree.

use std::fmt::Write;

use super::{Block, Document, Inline};
use crate::markup::patterns::escape_html;
use crate::paths::page_url;

/// Writes a parsed document as an HTML fragment.
pub struct HtmlWriter<'a> {
    route_prefix: &'a str,
    escape: bool,
}

impl<'a> HtmlWriter<'a> {
    pub fn new(route_prefix: &'a str, escape: bool) -> Self {
        Self {
            route_prefix,
            escape,
        }
    }

    pub fn write_document(&self, doc: &Document) -> String {
        let mut out = String::new();
        for line in &doc.lines {
            match &line.block {
                Block::Heading { level, content } => {
                    let _ = write!(out, "<h{level}>");
                    self.write_inlines(&mut out, content);
                    let _ = write!(out, "</h{level}>");
                }
                Block::Text(content) => self.write_inlines(&mut out, content),
            }
            out.push_str(line.ending.as_str());
        }
        out
    }

    // Writes to a String can't fail, so their results are ignored
    fn write_inlines(&self, out: &mut String, inlines: &[Inline]) {
        for inline in inlines {
            match inline {
                Inline::Text(text) => out.push_str(&self.text(text)),
                Inline::Bold(children) => {
                    out.push_str("<b>");
                    self.write_inlines(out, children);
                    out.push_str("</b>");
                }
                Inline::Italic(children) => {
                    out.push_str("<i>");
                    self.write_inlines(out, children);
                    out.push_str("</i>");
                }
                Inline::InternalLink(page) => {
                    let href = page_url(self.route_prefix, page);
                    let _ = write!(
                        out,
                        "<a href=\"{}\">{}</a>",
                        self.text(&href),
                        self.text(page)
                    );
                }
                Inline::ExternalLink(url) => {
                    let url = self.text(url);
                    let _ = write!(out, "<a href=\"{url}\">{url}</a>");
                }
            }
        }
    }

    fn text<'t>(&self, s: &'t str) -> std::borrow::Cow<'t, str> {
        if self.escape {
            escape_html(s)
        } else {
            std::borrow::Cow::Borrowed(s)
        }
    }
}
