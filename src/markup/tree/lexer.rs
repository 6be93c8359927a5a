//! Token types for the tree engine.
//!
//! Lexing works on a single line at a time; line structure is handled by
//! the parser before any tokens are produced. Run tokens (`=`, `''`) keep
//! their full length in the span so the parser can decide what a run means.

use std::ops::Range;

use logos::Logos;

#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// A run of `=`
    #[regex("=+")]
    Equals,

    /// A run of two or more apostrophes
    #[regex("''+")]
    Quotes,

    /// A lone apostrophe, which is never markup
    #[token("'")]
    Apostrophe,

    #[token("[")]
    BracketOpen,

    #[token("]")]
    BracketClose,

    /// Anything else
    #[regex(r"[^='\[\]]+")]
    Text,
}

/// A token with its byte range in the lexed line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexeme {
    pub token: Token,
    pub span: Range<usize>,
}

impl Lexeme {
    /// Length of the token in bytes (the run length for run tokens).
    pub fn run_len(&self) -> usize {
        self.span.len()
    }
}

/// Split a line into lexemes.
///
/// Every byte of the input is covered by exactly one lexeme. The token set
/// is total over its input, so a lexer error can only mean a character the
/// patterns missed; it is kept as text.
pub fn tokenize(line: &str) -> Vec<Lexeme> {
    Token::lexer(line)
        .spanned()
        .map(|(token, span)| Lexeme {
            token: token.unwrap_or(Token::Text),
            span,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(line: &str) -> Vec<(Token, &str)> {
        tokenize(line)
            .into_iter()
            .map(|lexeme| (lexeme.token, &line[lexeme.span]))
            .collect()
    }

    #[test]
    fn test_runs() {
        assert_eq!(
            kinds("== a '''b'''"),
            vec![
                (Token::Equals, "=="),
                (Token::Text, " a "),
                (Token::Quotes, "'''"),
                (Token::Text, "b"),
                (Token::Quotes, "'''"),
            ]
        );
    }

    #[test]
    fn test_single_apostrophe_is_not_a_run() {
        assert_eq!(
            kinds("don't"),
            vec![
                (Token::Text, "don"),
                (Token::Apostrophe, "'"),
                (Token::Text, "t"),
            ]
        );
    }

    #[test]
    fn test_brackets_are_single_tokens() {
        assert_eq!(
            kinds("[[a]]"),
            vec![
                (Token::BracketOpen, "["),
                (Token::BracketOpen, "["),
                (Token::Text, "a"),
                (Token::BracketClose, "]"),
                (Token::BracketClose, "]"),
            ]
        );
    }

    #[test]
    fn test_spans_cover_input() {
        let line = "x = ''y'' [z] 'w' ü";
        let rebuilt: String = tokenize(line)
            .iter()
            .map(|lexeme| &line[lexeme.span.clone()])
            .collect();
        assert_eq!(rebuilt, line);
    }
}
