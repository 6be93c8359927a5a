//! Shared recognition patterns for wiki markup.
//!
//! Regexes are compiled once on first use and shared by every render. The
//! heading and URL rules are plain functions because both engines need them
//! and the heading rule (matching marker counts) can't be written as a regex
//! without backreferences.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

/// Headings go from `= h1 =` to `====== h6 ======`.
pub const MAX_HEADING_LEVEL: usize = 6;

/// Matches `'''bold'''`, shortest span first
pub static BOLD_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"'''(.*?)'''").unwrap());

/// Matches `''italic''`, shortest span first
pub static ITALIC_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"''(.*?)''").unwrap());

/// Matches `[[PageName]]`; the name stops at the first `]`
pub static INTERNAL_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[\[([^\]]+?)\]\]").unwrap());

/// Matches `[https://example.com]`
pub static EXTERNAL_LINK_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[(https?://[^\s\]]+)\]").unwrap());

/// A heading line split into its level and trimmed text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeadingLine<'a> {
    pub level: usize,
    pub text: &'a str,
}

/// Recognize a heading line (without its line terminator).
///
/// The leading and trailing runs of `=` must have the same length, between
/// 1 and 6. A line of only markers is an empty heading when it splits evenly.
pub fn split_heading(line: &str) -> Option<HeadingLine<'_>> {
    let lead = line.bytes().take_while(|&b| b == b'=').count();
    if lead == 0 {
        return None;
    }

    if lead == line.len() {
        let level = lead / 2;
        return (lead % 2 == 0 && level <= MAX_HEADING_LEVEL)
            .then_some(HeadingLine { level, text: "" });
    }

    let trail = line.bytes().rev().take_while(|&b| b == b'=').count();
    if lead != trail || lead > MAX_HEADING_LEVEL {
        return None;
    }

    Some(HeadingLine {
        level: lead,
        text: line[lead..line.len() - trail].trim(),
    })
}

/// Split a line produced by `str::split_inclusive('\n')` into its body and
/// terminator (`""`, `"\n"` or `"\r\n"`).
pub fn split_terminator(line: &str) -> (&str, &str) {
    match line.strip_suffix('\n') {
        Some(rest) => match rest.strip_suffix('\r') {
            Some(body) => (body, "\r\n"),
            None => (rest, "\n"),
        },
        None => (line, ""),
    }
}

/// Whether bracketed text is an external link target.
pub fn is_external_url(s: &str) -> bool {
    let rest = s
        .strip_prefix("https://")
        .or_else(|| s.strip_prefix("http://"));
    match rest {
        Some(rest) => !rest.is_empty() && !s.contains(|c: char| c.is_whitespace() || c == ']'),
        None => false,
    }
}

/// Escape the characters that are significant in HTML text and
/// double-quoted attribute values.
pub fn escape_html(s: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(s)
}
