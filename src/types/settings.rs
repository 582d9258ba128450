//! Per-parse configuration.

use bon::bon;

use crate::macros::MacroDefinition;
use crate::namespace::Mapping;
use crate::types::{ErrorLocationProvider, ParseError, ParseErrorKind};

/// How to react to input that is accepted but not standard LaTeX.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StrictMode {
    /// Accept silently.
    Ignore,
    /// Accept and print a warning to stderr.
    #[default]
    Warn,
    /// Reject. The parser turns the rejection into an error atom.
    Error,
}

/// Resolved configuration for one tokenize/parse/layout pipeline.
///
/// Construct with [`Settings::builder`]; every field has a default, so
/// `Settings::default()` is a valid inline-mode configuration.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Start layout in displaystyle rather than textstyle.
    pub display_mode: bool,
    /// Reaction to non-standard input.
    pub strict: StrictMode,
    /// Color used for error atoms.
    pub error_color: String,
    /// User macros, consulted before the builtin macros.
    pub macros: Mapping<MacroDefinition>,
    /// Maximum nesting of macro expansions.
    pub max_expand: usize,
    /// Maximum number of macro expansions in one source.
    pub max_expansions: usize,
    /// Maximum nesting of groups, arguments and matchfix bodies.
    pub max_depth: usize,
    /// Lower bound for rule thickness, in em.
    pub min_rule_thickness: f64,
}

#[bon]
impl Settings {
    /// Creates settings, applying defaults for anything left unset.
    ///
    /// Defaults: inline mode, strict mode `Warn`, error color `#cc0000`,
    /// no user macros, `max_expand` 64, `max_expansions` 1000, `max_depth`
    /// 256 and no minimum rule thickness.
    #[must_use]
    #[builder]
    pub fn new(
        /// Display mode (true for block, false for inline).
        display_mode: Option<bool>,
        /// Strict mode.
        strict: Option<StrictMode>,
        /// Color for error atoms.
        error_color: Option<String>,
        /// User macro dictionary.
        macros: Option<Mapping<MacroDefinition>>,
        /// Macro expansion depth limit.
        max_expand: Option<usize>,
        /// Total macro expansion limit.
        max_expansions: Option<usize>,
        /// Nesting depth limit.
        max_depth: Option<usize>,
        /// Minimum rule thickness in em.
        min_rule_thickness: Option<f64>,
    ) -> Self {
        Self {
            display_mode: display_mode.unwrap_or(false),
            strict: strict.unwrap_or_default(),
            error_color: error_color.unwrap_or_else(|| "#cc0000".to_owned()),
            macros: macros.unwrap_or_default(),
            max_expand: max_expand.unwrap_or(64),
            max_expansions: max_expansions.unwrap_or(1000),
            max_depth: max_depth.unwrap_or(256),
            min_rule_thickness: min_rule_thickness.unwrap_or(0.0).max(0.0),
        }
    }

    /// Reports non-standard input according to [`Settings::strict`].
    ///
    /// Returns an error only in `Error` mode; the caller decides how to
    /// surface it.
    #[expect(clippy::print_stderr)]
    pub fn report_nonstrict(
        &self,
        error_code: &str,
        error_msg: &str,
        token: Option<&dyn ErrorLocationProvider>,
    ) -> Result<(), ParseError> {
        match self.strict {
            StrictMode::Ignore => Ok(()),
            StrictMode::Error => {
                let kind = ParseErrorKind::StrictModeError {
                    message: error_msg.to_owned(),
                    code: error_code.to_owned(),
                };
                Err(match token {
                    Some(t) => ParseError::with_token(kind, t),
                    None => ParseError::new(kind),
                })
            }
            StrictMode::Warn => {
                eprintln!(
                    "LaTeX-incompatible input and strict mode is set to 'warn': {error_msg} [{error_code}]"
                );
                Ok(())
            }
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::builder().build()
    }
}
