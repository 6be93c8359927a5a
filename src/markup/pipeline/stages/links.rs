//! Internal and external link stages.

use std::borrow::Cow;

use regex::Captures;

use crate::markup::patterns::{EXTERNAL_LINK_RE, INTERNAL_LINK_RE};
use crate::markup::pipeline::Stage;
use crate::paths::page_url;

/// Stage that converts `[[PageName]]` to a link to the page route.
///
/// The page name is copied verbatim into both the target and the label.
pub struct InternalLinkStage {
    route_prefix: String,
}

impl InternalLinkStage {
    /// Create a stage linking to `<route_prefix>/<PageName>`.
    pub fn new(route_prefix: &str) -> Self {
        Self {
            route_prefix: route_prefix.trim_end_matches('/').to_string(),
        }
    }
}

impl Stage for InternalLinkStage {
    fn name(&self) -> &'static str {
        "internal-link"
    }

    fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        INTERNAL_LINK_RE.replace_all(text, |caps: &Captures| {
            let page = &caps[1];
            format!(
                "<a href=\"{}\">{}</a>",
                page_url(&self.route_prefix, page),
                page
            )
        })
    }
}

/// Stage that converts `[https://example.com]` to a link showing the URL.
pub struct ExternalLinkStage;

impl Stage for ExternalLinkStage {
    fn name(&self) -> &'static str {
        "external-link"
    }

    fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        EXTERNAL_LINK_RE.replace_all(text, "<a href=\"$1\">$1</a>")
    }
}
