//! Parser from markup lines to the document tree.

use std::cmp::Reverse;

use super::lexer::{Token, tokenize};
use super::{Block, Document, Inline, Line, LineEnding};
use crate::markup::patterns::{is_external_url, split_heading, split_terminator};

/// Parse markup into a document tree. Never fails; anything that isn't
/// well-formed markup becomes text.
pub fn parse(src: &str) -> Document {
    Document {
        lines: src.split_inclusive('\n').map(parse_line).collect(),
    }
}

fn parse_line(line: &str) -> Line {
    let (body, terminator) = split_terminator(line);
    let block = match split_heading(body) {
        Some(heading) => Block::Heading {
            level: heading.level,
            content: parse_inline(heading.text),
        },
        None => Block::Text(parse_inline(body)),
    };
    Line {
        block,
        ending: LineEnding::from_terminator(terminator),
    }
}

// =============================================================================
// Inline content
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Style {
    Bold,
    Italic,
}

impl Style {
    fn index(self) -> usize {
        match self {
            Style::Bold => 0,
            Style::Italic => 1,
        }
    }

    fn marker(self) -> &'static str {
        match self {
            Style::Bold => "'''",
            Style::Italic => "''",
        }
    }

    fn wrap(self, children: Vec<Inline>) -> Inline {
        match self {
            Style::Bold => Inline::Bold(children),
            Style::Italic => Inline::Italic(children),
        }
    }
}

/// What a run of apostrophes means: leading literal apostrophes, then
/// the styles it toggles.
fn run_styles(len: usize) -> (usize, &'static [Style]) {
    match len {
        0 | 1 => (len, &[]),
        2 => (0, &[Style::Italic]),
        3 => (0, &[Style::Bold]),
        4 => (1, &[Style::Bold]),
        n => (n - 5, &[Style::Bold, Style::Italic]),
    }
}

/// A line after links have been recognized, before styles are resolved.
enum Piece<'a> {
    Text(&'a str),
    Link(Inline),
    Quotes(usize),
}

fn parse_inline(src: &str) -> Vec<Inline> {
    let pieces = scan(src);
    let mut pairing = Pairing::new(&pieces);
    let mut builder = TreeBuilder::new();

    for piece in pieces {
        match piece {
            Piece::Text(text) => builder.push_text(text),
            Piece::Link(link) => builder.push_node(link),
            Piece::Quotes(len) => {
                let (literal, styles) = run_styles(len);
                builder.push_text(&"'".repeat(literal));

                let mut closing = Vec::new();
                let mut opening = Vec::new();
                for &style in styles {
                    match pairing.next(style) {
                        Toggle::Literal => builder.push_text(style.marker()),
                        Toggle::Close => closing.push(style),
                        Toggle::Open => opening.push(style),
                    }
                }

                // Innermost first, so closing both styles of a ''''' run
                // doesn't split either of them
                closing.sort_by_key(|&style| Reverse(builder.depth(style)));
                for style in closing {
                    builder.close(style);
                }
                for style in opening {
                    builder.open(style);
                }
            }
        }
    }

    builder.finish()
}

/// Split a line into text, links and quote runs.
fn scan(src: &str) -> Vec<Piece<'_>> {
    let mut pieces = Vec::new();
    let mut resume_at = 0;

    for lexeme in tokenize(src) {
        if lexeme.span.start < resume_at {
            continue;
        }
        match lexeme.token {
            Token::BracketOpen => match match_link(src, lexeme.span.start) {
                Some((link, end)) => {
                    pieces.push(Piece::Link(link));
                    resume_at = end;
                }
                None => pieces.push(Piece::Text(&src[lexeme.span])),
            },
            Token::Quotes => pieces.push(Piece::Quotes(lexeme.run_len())),
            Token::Equals
            | Token::Apostrophe
            | Token::BracketClose
            | Token::Text => pieces.push(Piece::Text(&src[lexeme.span])),
        }
    }

    pieces
}

/// Recognize `[[PageName]]` or `[URL]` starting at `start`, returning the
/// link and the byte offset just past it.
fn match_link(src: &str, start: usize) -> Option<(Inline, usize)> {
    let rest = &src[start..];

    if let Some(inner) = rest.strip_prefix("[[")
        && let Some(close) = inner.find(']')
        && close > 0
        && inner[close..].starts_with("]]")
    {
        let page = inner[..close].to_string();
        return Some((Inline::InternalLink(page), start + close + 4));
    }

    let inner = rest.strip_prefix('[')?;
    let close = inner.find(']')?;
    let target = &inner[..close];
    is_external_url(target)
        .then(|| (Inline::ExternalLink(target.to_string()), start + close + 2))
}

// =============================================================================
// Style pairing
// =============================================================================

enum Toggle {
    Open,
    Close,
    Literal,
}

/// Pairs style toggles in order within a line. With an odd number of
/// toggles for a style, the last one has no partner and stays literal.
struct Pairing {
    totals: [usize; 2],
    seen: [usize; 2],
}

impl Pairing {
    fn new(pieces: &[Piece<'_>]) -> Self {
        let mut totals = [0; 2];
        for piece in pieces {
            if let Piece::Quotes(len) = piece {
                for style in run_styles(*len).1 {
                    totals[style.index()] += 1;
                }
            }
        }
        Self {
            totals,
            seen: [0; 2],
        }
    }

    fn next(&mut self, style: Style) -> Toggle {
        let i = style.index();
        let n = self.seen[i];
        self.seen[i] += 1;

        if n + 1 == self.totals[i] && self.totals[i] % 2 == 1 {
            Toggle::Literal
        } else if n % 2 == 0 {
            Toggle::Open
        } else {
            Toggle::Close
        }
    }
}

// =============================================================================
// Tree building
// =============================================================================

struct Frame {
    style: Option<Style>,
    children: Vec<Inline>,
}

impl Frame {
    fn new(style: Option<Style>) -> Self {
        Self {
            style,
            children: Vec::new(),
        }
    }

    fn push_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        match self.children.last_mut() {
            Some(Inline::Text(last)) => last.push_str(text),
            _ => self.children.push(Inline::Text(text.to_string())),
        }
    }

    /// Close this frame into a node. Empty spans (left behind when a style
    /// is reopened and immediately closed) produce nothing.
    fn into_node(self) -> Option<Inline> {
        match self.style {
            Some(style) if !self.children.is_empty() => Some(style.wrap(self.children)),
            _ => None,
        }
    }
}

struct TreeBuilder {
    /// Open styles, outermost first; the root frame has no style
    stack: Vec<Frame>,
}

impl TreeBuilder {
    fn new() -> Self {
        Self {
            stack: vec![Frame::new(None)],
        }
    }

    fn top(&mut self) -> &mut Frame {
        let last = self.stack.len() - 1;
        &mut self.stack[last]
    }

    fn push_text(&mut self, text: &str) {
        self.top().push_text(text);
    }

    fn push_node(&mut self, node: Inline) {
        self.top().children.push(node);
    }

    fn depth(&self, style: Style) -> Option<usize> {
        self.stack.iter().rposition(|frame| frame.style == Some(style))
    }

    fn open(&mut self, style: Style) {
        self.stack.push(Frame::new(Some(style)));
    }

    fn close(&mut self, style: Style) {
        let Some(pos) = self.depth(style) else {
            self.push_text(style.marker());
            return;
        };

        let mut inner = self.stack.split_off(pos + 1);
        let reopen: Vec<Style> = inner.iter().filter_map(|frame| frame.style).collect();

        let Some(mut target) = self.stack.pop() else {
            return;
        };
        while let Some(frame) = inner.pop() {
            if let Some(node) = frame.into_node() {
                match inner.last_mut() {
                    Some(parent) => parent.children.push(node),
                    None => target.children.push(node),
                }
            }
        }
        if let Some(node) = target.into_node() {
            self.push_node(node);
        }

        for style in reopen {
            self.open(style);
        }
    }

    fn finish(mut self) -> Vec<Inline> {
        // Every toggle is paired, so only the root should be left. Anything
        // else is flattened back to literal markers.
        while self.stack.len() > 1 {
            if let Some(frame) = self.stack.pop() {
                if let Some(style) = frame.style {
                    self.push_text(style.marker());
                }
                for child in frame.children {
                    match child {
                        Inline::Text(text) => self.push_text(&text),
                        node => self.push_node(node),
                    }
                }
            }
        }
        self.stack.pop().map(|root| root.children).unwrap_or_default()
    }
}
