//! Shared value types: tokens, argument kinds, error codes and settings.

mod error_code;
mod parse_error;
mod settings;
mod source_location;
mod tokens;

pub use error_code::ErrorCode;
pub use parse_error::{ErrorLocationProvider, ParseError, ParseErrorKind};
pub use settings::{Settings, StrictMode};
pub use source_location::SourceLocation;
pub use tokens::{Token, TokenKind};

use strum::{AsRefStr, Display, EnumString};

/// Kind of argument a command expects.
///
/// `Auto` takes the argument in the mode of the surrounding expression;
/// `Math` and `Text` switch mode for that one argument. The remaining kinds
/// are read as raw text and validated by the parser.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ArgType {
    /// A group or single token in the current mode
    Auto,
    /// A group parsed in math mode
    Math,
    /// A group parsed in text mode
    Text,
    /// A color name or `#rrggbb`
    Color,
    /// A length such as `2pt` or `-1.5em`
    Dimension,
    /// A delimiter character or named delimiter
    Delimiter,
    /// A length with optional `plus`/`minus` stretch
    Glue,
    /// Raw text, read up to the closing brace
    String,
    /// A decimal, `"hex` or `'octal` integer
    Number,
}

/// One entry of a command's argument grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ArgSpec {
    /// Kind of the argument
    pub kind: ArgType,
    /// Optional arguments are written in `[...]`
    pub optional: bool,
}

impl ArgSpec {
    /// A required argument of the given kind.
    #[must_use]
    pub const fn required(kind: ArgType) -> Self {
        Self {
            kind,
            optional: false,
        }
    }

    /// An optional `[...]` argument of the given kind.
    #[must_use]
    pub const fn optional(kind: ArgType) -> Self {
        Self {
            kind,
            optional: true,
        }
    }
}
