//! Heading stage.
//!
//! Turns `== Title ==` lines into `<h2>Title</h2>`, one line at a time.

use std::borrow::Cow;
use std::fmt::Write;

use crate::markup::patterns::{split_heading, split_terminator};
use crate::markup::pipeline::Stage;

/// Stage that converts heading lines to `<h1>` .. `<h6>` elements.
///
/// Only whole lines are replaced. The interior text is trimmed but
/// otherwise left alone, so later stages still format it.
pub struct HeadingStage;

impl Stage for HeadingStage {
    fn name(&self) -> &'static str {
        "heading"
    }

    fn apply<'t>(&self, text: &'t str) -> Cow<'t, str> {
        if !text.contains('=') {
            return Cow::Borrowed(text);
        }

        let mut output = String::with_capacity(text.len());
        let mut changed = false;

        for line in text.split_inclusive('\n') {
            let (body, terminator) = split_terminator(line);
            match split_heading(body) {
                Some(heading) => {
                    changed = true;
                    // Writing to a String can't fail
                    let _ = write!(
                        output,
                        "<h{level}>{text}</h{level}>",
                        level = heading.level,
                        text = heading.text
                    );
                    output.push_str(terminator);
                }
                None => output.push_str(line),
            }
        }

        if changed {
            Cow::Owned(output)
        } else {
            Cow::Borrowed(text)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(text: &str) -> String {
        HeadingStage.apply(text).into_owned()
    }

    #[test]
    fn test_all_levels() {
        for level in 1..=6 {
            let marker = "=".repeat(level);
            assert_eq!(
                apply(&format!("{marker}  Section  {marker}")),
                format!("<h{level}>Section</h{level}>")
            );
        }
    }

    #[test]
    fn test_mismatched_markers_pass_through() {
        assert_eq!(apply("== Section ="), "== Section =");
        assert_eq!(apply("= Section ==="), "= Section ===");
    }

    #[test]
    fn test_only_heading_lines_change() {
        assert_eq!(
            apply("intro\n== Usage ==\nbody = value\n"),
            "intro\n<h2>Usage</h2>\nbody = value\n"
        );
    }

    #[test]
    fn test_crlf_line_endings() {
        assert_eq!(apply("= A =\r\nb\r\n"), "<h1>A</h1>\r\nb\r\n");
    }

    #[test]
    fn test_heading_does_not_span_lines() {
        assert_eq!(apply("= A\nB ="), "= A\nB =");
    }

    #[test]
    fn test_untouched_text_is_borrowed() {
        assert!(matches!(HeadingStage.apply("no headings"), Cow::Borrowed(_)));
        assert!(matches!(HeadingStage.apply("a = b"), Cow::Borrowed(_)));
    }
}
