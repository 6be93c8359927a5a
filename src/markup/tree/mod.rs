//! Tree engine: lex, parse, then render in one pass.
//!
//! Unlike the rewrite pipeline, nothing here depends on the order in which
//! constructs are recognized. Quote runs are paired per style before the
//! tree is built, and a style closed out of order closes and reopens the
//! styles nested inside it, so the output is always well-formed.

mod html;
mod lexer;
mod parser;

pub use html::HtmlWriter;
pub use parser::parse;

/// A parsed page: one entry per source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub lines: Vec<Line>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub block: Block,
    pub ending: LineEnding,
}

/// How a source line was terminated, so output keeps the input's line breaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEnding {
    /// Last line without a trailing newline
    None,
    Lf,
    CrLf,
}

impl LineEnding {
    pub fn as_str(self) -> &'static str {
        match self {
            LineEnding::None => "",
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    fn from_terminator(terminator: &str) -> Self {
        match terminator {
            "\n" => LineEnding::Lf,
            "\r\n" => LineEnding::CrLf,
            _ => LineEnding::None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Heading { level: usize, content: Vec<Inline> },
    Text(Vec<Inline>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Inline {
    Text(String),
    Bold(Vec<Inline>),
    Italic(Vec<Inline>),
    /// Page name, verbatim
    InternalLink(String),
    /// Absolute http(s) URL
    ExternalLink(String),
}
