//! Raw lexing of a source string into tokens.
//!
//! The lexer knows nothing about commands or macros. It splits the input
//! into control sequences, characters, braces, argument markers and runs of
//! whitespace, dropping `%` comments on the way. Macro expansion happens on
//! the resulting token list, see [`crate::macro_expander`].

use crate::types::{SourceLocation, Token, TokenKind};

const fn is_combining_mark(ch: char) -> bool {
    (ch as u32) >= 0x0300 && (ch as u32) <= 0x036F
}

const fn is_space(ch: char) -> bool {
    matches!(ch, ' ' | '\r' | '\n' | '\t')
}

fn match_space(s: &str) -> Option<usize> {
    let len: usize = s
        .chars()
        .take_while(|c| is_space(*c))
        .map(char::len_utf8)
        .sum();
    (len > 0).then_some(len)
}

/// A control word, returned as (length of the word, length of the
/// whitespace following it).
fn match_control_word(s: &str) -> Option<(usize, usize)> {
    let rest = s.strip_prefix('\\')?;
    let len = rest
        .bytes()
        .take_while(|b| b.is_ascii_alphabetic() || *b == b'@')
        .count();
    if len == 0 {
        return None;
    }
    let skip = match_space(&rest[len..]).unwrap_or(0);
    Some((1 + len, skip))
}

fn match_control_symbol(s: &str) -> Option<usize> {
    let rest = s.strip_prefix('\\')?;
    let c = rest.chars().next()?;
    Some(1 + c.len_utf8())
}

/// A character followed by any combining marks.
fn match_char_with_accents(s: &str) -> Option<usize> {
    let mut chars = s.chars();
    let first = chars.next()?;
    let marks: usize = chars
        .take_while(|c| is_combining_mark(*c))
        .map(char::len_utf8)
        .sum();
    Some(first.len_utf8() + marks)
}

/// The tokenizer state over one input string.
pub struct Lexer<'a> {
    input: &'a str,
    last_index: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer positioned at the start of `input`.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            last_index: 0,
        }
    }

    /// Lexes the next token, or `None` at the end of the input.
    pub fn lex(&mut self) -> Option<Token> {
        loop {
            let start = self.last_index;
            let slice = &self.input[start..];
            let Some(first) = slice.chars().next() else {
                return None;
            };

            // A comment may also run to the end of the input
            if first == '%' {
                self.last_index = slice
                    .find('\n')
                    .map_or(self.input.len(), |nl| start + nl + 1);
                continue;
            }

            let (kind, len, skip) = if let Some(len) = match_space(slice) {
                (TokenKind::Space, len, 0)
            } else if let Some((len, skip)) = match_control_word(slice) {
                (TokenKind::Command, len, skip)
            } else if let Some(len) = match_control_symbol(slice) {
                (TokenKind::Command, len, 0)
            } else if first == '{' {
                (TokenKind::GroupOpen, 1, 0)
            } else if first == '}' {
                (TokenKind::GroupClose, 1, 0)
            } else if first == '#' {
                match slice[1..].chars().next() {
                    Some('1'..='9') => (TokenKind::ArgumentMarker, 2, 0),
                    Some('?' | '@') => (TokenKind::Placeholder, 2, 0),
                    _ => (TokenKind::Character, 1, 0),
                }
            } else {
                let len = match_char_with_accents(slice).unwrap_or(first.len_utf8());
                (TokenKind::Character, len, 0)
            };

            self.last_index += len + skip;
            let text = if kind == TokenKind::Space {
                " "
            } else {
                &slice[..len]
            };
            return Some(Token::new(
                kind,
                text,
                Some(SourceLocation::new(start, start + len)),
            ));
        }
    }

    /// Lexes the whole input.
    #[must_use]
    pub fn lex_all(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.lex() {
            tokens.push(token);
        }
        tokens
    }

    /// Current byte offset in the input.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.last_index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lex(input: &str) -> Vec<Token> {
        Lexer::new(input).lex_all()
    }

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn control_words_swallow_trailing_space() {
        let tokens = lex(r"\alpha  x");
        assert_eq!(texts(&tokens), [r"\alpha", "x"]);
        assert_eq!(tokens[0].loc, Some(SourceLocation::new(0, 6)));
        assert_eq!(tokens[1].loc, Some(SourceLocation::new(8, 9)));
    }

    #[test]
    fn control_symbols_and_groups() {
        let tokens = lex(r"\,{a}\{");
        assert_eq!(texts(&tokens), [r"\,", "{", "a", "}", r"\{"]);
        assert_eq!(tokens[1].kind, TokenKind::GroupOpen);
        assert_eq!(tokens[3].kind, TokenKind::GroupClose);
    }

    #[test]
    fn whitespace_runs_collapse() {
        let tokens = lex("a \t\n b");
        assert_eq!(texts(&tokens), ["a", " ", "b"]);
        assert_eq!(tokens[1].kind, TokenKind::Space);
    }

    #[test]
    fn markers_and_placeholders() {
        let tokens = lex("#1#?#@#x");
        assert_eq!(tokens[0].kind, TokenKind::ArgumentMarker);
        assert_eq!(tokens[0].argument_index(), Some(1));
        assert_eq!(tokens[1].kind, TokenKind::Placeholder);
        assert_eq!(tokens[2].kind, TokenKind::Placeholder);
        assert_eq!(tokens[3].kind, TokenKind::Character);
        assert_eq!(tokens[3].text, "#");
    }

    #[test]
    fn comments_are_dropped() {
        let tokens = lex("a% comment\nb");
        assert_eq!(texts(&tokens), ["a", "b"]);
    }

    #[test]
    fn a_comment_can_end_the_input() {
        let tokens = lex("x % note");
        assert_eq!(texts(&tokens), ["x", " "]);
        assert!(lex("%").is_empty());
    }

    #[test]
    fn combining_marks_stay_with_their_base() {
        let tokens = lex("e\u{301}x");
        assert_eq!(texts(&tokens), ["e\u{301}", "x"]);
    }
}
