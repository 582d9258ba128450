//! Hard failures of the pipeline.
//!
//! Grammar problems never end up here; they become error atoms inside the
//! tree. A `ParseError` means the whole tree must be discarded: the macro
//! expander looped, nesting exceeded the recursion bound, or an edited tree
//! no longer satisfies its structural invariants.

extern crate alloc;

use alloc::boxed::Box;
use alloc::string::String;

use thiserror::Error;

use crate::types::SourceLocation;

/// Anything that can point at a range of the source string.
pub trait ErrorLocationProvider {
    /// Location of the item, if known.
    fn loc(&self) -> Option<SourceLocation>;
}

/// Unrecoverable error raised by `tokenize`, `parse_tokens` or `decompose`.
#[derive(Debug, Error)]
#[error("mathbox error: {kind}{}", position_suffix(.position, .length))]
pub struct ParseError {
    /// Categorised reason for the failure.
    #[source]
    pub kind: Box<ParseErrorKind>,
    /// Byte offset of the offending input, when known.
    pub position: Option<usize>,
    /// Length in bytes of the offending input, when known.
    pub length: Option<usize>,
}

#[allow(clippy::ref_option)]
fn position_suffix(position: &Option<usize>, length: &Option<usize>) -> String {
    match (*position, *length) {
        (Some(start), Some(len)) if len > 0 => format!(" at position {}-{}", start, start + len),
        (Some(start), _) => format!(" at position {start}"),
        _ => String::new(),
    }
}

impl ParseError {
    /// Creates an error without location.
    pub fn new<T: Into<ParseErrorKind>>(kind: T) -> Self {
        Self {
            kind: Box::new(kind.into()),
            position: None,
            length: None,
        }
    }

    /// Creates an error located at the given token or atom.
    pub fn with_token<T: Into<ParseErrorKind>>(kind: T, token: &dyn ErrorLocationProvider) -> Self {
        let mut err = Self::new(kind);
        if let Some(loc) = token.loc().filter(|loc| loc.start <= loc.end) {
            err.position = Some(loc.start);
            err.length = Some(loc.len());
        }
        err
    }

    /// Short kebab-case code of the failure, e.g. `macro-recursion`.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match *self.kind {
            ParseErrorKind::MacroRecursion { .. } => "macro-recursion",
            ParseErrorKind::TooDeeplyNested { .. } => "too-deeply-nested",
            ParseErrorKind::CyclicTree { .. } => "cyclic-tree",
            ParseErrorKind::MalformedTree { .. } => "malformed-tree",
            ParseErrorKind::InvalidAtomId { .. } => "invalid-atom-id",
            ParseErrorKind::StrictModeError { .. } => "strict-mode",
            ParseErrorKind::Message(_) => "internal",
        }
    }
}

/// Describes the specific reason for a [`ParseError`].
#[derive(Debug, Error)]
pub enum ParseErrorKind {
    /// Macro expansion exceeded `Settings::max_expand` levels or
    /// `Settings::max_expansions` expansions in total.
    #[error(r"macro-recursion: expanding \{name} exceeded the limit of {limit}")]
    MacroRecursion {
        /// Macro being expanded when the limit was hit
        name: String,
        /// The configured limit
        limit: usize,
    },
    /// Group or matchfix nesting exceeded `Settings::max_depth`.
    #[error("too-deeply-nested: nesting exceeds the limit of {limit}")]
    TooDeeplyNested {
        /// The configured limit
        limit: usize,
    },
    /// An atom is reachable from itself.
    #[error("cyclic-tree: atom {atom} is its own descendant")]
    CyclicTree {
        /// Index of the atom closing the cycle
        atom: usize,
    },
    /// A structural invariant of the atom tree does not hold.
    #[error("malformed-tree: atom {atom} {reason}")]
    MalformedTree {
        /// Index of the offending atom
        atom: usize,
        /// What is wrong with it
        reason: &'static str,
    },
    /// An atom id does not belong to the tree.
    #[error("invalid-atom-id: no atom with index {atom}")]
    InvalidAtomId {
        /// The dangling index
        atom: usize,
    },
    /// Non-standard input rejected because strict mode is set to error.
    #[error("{message} [{code}]")]
    StrictModeError {
        /// Human readable description
        message: String,
        /// Machine readable code
        code: String,
    },
    /// Any other internal failure.
    #[error("{0}")]
    Message(String),
}

impl From<&str> for ParseErrorKind {
    fn from(message: &str) -> Self {
        Self::Message(message.to_owned())
    }
}

impl From<String> for ParseErrorKind {
    fn from(message: String) -> Self {
        Self::Message(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Token;
    use crate::types::TokenKind;

    #[test]
    fn error_reports_token_position() {
        let token = Token::new(
            TokenKind::Command,
            r"\loop",
            Some(SourceLocation::new(3, 8)),
        );
        let err = ParseError::with_token(
            ParseErrorKind::MacroRecursion {
                name: "loop".to_owned(),
                limit: 64,
            },
            &token,
        );
        assert_eq!(err.position, Some(3));
        assert_eq!(err.length, Some(5));
        assert_eq!(err.code(), "macro-recursion");
        assert!(err.to_string().ends_with("at position 3-8"));
    }
}
