//! Bold and italic stages.
//!
//! Both are single regex replacements with shortest-match spans. Bold has to
//! come first in the pipeline; see the pipeline module docs.

use std::borrow::Cow;

use crate::markup::patterns::{BOLD_RE, ITALIC_RE};
use crate::markup::pipeline::Stage;

/// Stage that converts `'''text'''` to `<b>text</b>`.
pub struct BoldStage;

impl Stage for BoldStage {
    fn name(&self) -> &'static str {
        "bold"
    }

    fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        BOLD_RE.replace_all(text, "<b>$1</b>")
    }
}

/// Stage that converts `''text''` to `<i>text</i>`.
pub struct ItalicStage;

impl Stage for ItalicStage {
    fn name(&self) -> &'static str {
        "italic"
    }

    fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        ITALIC_RE.replace_all(text, "<i>$1</i>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bold() {
        assert_eq!(BoldStage.apply("'''bold'''"), "<b>bold</b>");
        assert_eq!(
            BoldStage.apply("'''a''' and '''b'''"),
            "<b>a</b> and <b>b</b>"
        );
    }

    #[test]
    fn test_bold_is_non_greedy() {
        assert_eq!(BoldStage.apply("'''a'''b'''c'''"), "<b>a</b>b<b>c</b>");
    }

    #[test]
    fn test_unmatched_bold_is_literal() {
        assert_eq!(BoldStage.apply("'''open"), "'''open");
        assert_eq!(BoldStage.apply("'''a''' '''b"), "<b>a</b> '''b");
    }

    #[test]
    fn test_spans_stop_at_line_breaks() {
        assert_eq!(BoldStage.apply("'''a\nb'''"), "'''a\nb'''");
        assert_eq!(ItalicStage.apply("''a\nb''"), "''a\nb''");
    }

    #[test]
    fn test_italic() {
        assert_eq!(ItalicStage.apply("''italic''"), "<i>italic</i>");
        assert_eq!(ItalicStage.apply("''open"), "''open");
    }

    #[test]
    fn test_italic_first_corrupts_bold() {
        // The reason for the fixed order: italic alone eats the bold markers
        let italic_first = BoldStage.apply(&ItalicStage.apply("'''bold'''")).into_owned();
        assert_eq!(italic_first, "<i>'bold</i>'");

        let bold_first = ItalicStage.apply(&BoldStage.apply("'''bold'''")).into_owned();
        assert_eq!(bold_first, "<b>bold</b>");
    }
}
