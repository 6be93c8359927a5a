//! Escape stage.
//!
//! Runs before every other stage when `markup.escape_html` is on. None of the
//! escaped characters are markup markers, so the later stages see the same
//! structure they would have seen unescaped.

use std::borrow::Cow;

use crate::markup::patterns::escape_html;
use crate::markup::pipeline::Stage;

/// Stage that escapes `&`, `<`, `>` and `"` in the raw markup.
pub struct EscapeStage;

impl Stage for EscapeStage {
    fn name(&self) -> &'static str {
        "escape"
    }

    fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        escape_html(text)
    }
}
