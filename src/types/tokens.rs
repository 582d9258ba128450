//! Token produced by the lexer and consumed by the parser.

use core::fmt;

use crate::types::{ErrorLocationProvider, SourceLocation};

/// Classification of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum TokenKind {
    /// A backslash command, e.g. `\frac` or `\,`
    Command,
    /// Any single character that is not otherwise special
    Character,
    /// A run of whitespace, only meaningful in text mode
    Space,
    /// `{`
    GroupOpen,
    /// `}`
    GroupClose,
    /// `#1` through `#9`
    ArgumentMarker,
    /// `#?` (empty slot) or `#@` (selection slot)
    Placeholder,
}

/// A lexed token with its source range.
///
/// The text of a command token keeps its leading backslash, so `\alpha` is
/// stored as `"\\alpha"`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    /// Token classification
    pub kind: TokenKind,
    /// Raw text of the token
    pub text: String,
    /// Position in the source, if the token was lexed rather than synthesized
    pub loc: Option<SourceLocation>,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, text: impl Into<String>, loc: Option<SourceLocation>) -> Self {
        Self {
            kind,
            text: text.into(),
            loc,
        }
    }

    /// Creates a command token without a source location.
    pub fn command(name: impl Into<String>) -> Self {
        Self::new(TokenKind::Command, name, None)
    }

    /// Creates a character token without a source location.
    #[must_use]
    pub fn character(ch: char) -> Self {
        Self::new(TokenKind::Character, ch.to_string(), None)
    }

    /// Whether this is the command `name` (including the backslash).
    #[must_use]
    pub fn is_command(&self, name: &str) -> bool {
        self.kind == TokenKind::Command && self.text == name
    }

    /// Whether this is the single character `ch`.
    #[must_use]
    pub fn is_char(&self, ch: char) -> bool {
        self.kind == TokenKind::Character && self.text.chars().eq(core::iter::once(ch))
    }

    /// Returns the single character of a character token.
    #[must_use]
    pub fn as_char(&self) -> Option<char> {
        if self.kind != TokenKind::Character {
            return None;
        }
        let mut chars = self.text.chars();
        let ch = chars.next()?;
        chars.next().is_none().then_some(ch)
    }

    /// Argument number of a `#n` marker.
    #[must_use]
    pub fn argument_index(&self) -> Option<usize> {
        if self.kind != TokenKind::ArgumentMarker {
            return None;
        }
        self.text
            .strip_prefix('#')
            .and_then(|n| n.parse::<usize>().ok())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}

impl ErrorLocationProvider for Token {
    fn loc(&self) -> Option<SourceLocation> {
        self.loc
    }
}
