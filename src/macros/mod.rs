//! Substitution macros.
//!
//! A macro replaces a command with a template in which `#1`..`#9` stand for
//! its arguments. There are no conditionals and no definitions at parse
//! time: the builtin dictionary below plus [`Settings::macros`] is all the
//! expander ever sees.
//!
//! [`Settings::macros`]: crate::types::Settings::macros

use alloc::borrow::Cow;

mod builtins;

pub use builtins::BUILTIN_MACROS;

/// Replacement template and arity of a macro.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroDefinition {
    /// LaTeX source substituted for the macro
    pub template: Cow<'static, str>,
    /// Number of arguments consumed after the macro name
    pub num_args: usize,
}

impl MacroDefinition {
    /// A macro with a static template.
    #[must_use]
    pub const fn from_static(template: &'static str, num_args: usize) -> Self {
        Self {
            template: Cow::Borrowed(template),
            num_args,
        }
    }

    /// A macro with an owned template.
    #[must_use]
    pub fn new<S: Into<String>>(template: S, num_args: usize) -> Self {
        Self {
            template: Cow::Owned(template.into()),
            num_args,
        }
    }

    /// Infers the arity from the highest `#n` marker in `template`.
    #[must_use]
    pub fn inferring_args<S: Into<String>>(template: S) -> Self {
        let template = template.into();
        let num_args = template
            .as_bytes()
            .windows(2)
            .filter(|w| w[0] == b'#' && (b'1'..=b'9').contains(&w[1]))
            .map(|w| usize::from(w[1] - b'0'))
            .max()
            .unwrap_or(0);
        Self::new(template, num_args)
    }
}

impl From<&'static str> for MacroDefinition {
    fn from(template: &'static str) -> Self {
        Self::inferring_args(template)
    }
}

/// Looks up a builtin macro.
#[must_use]
pub fn builtin_macro(name: &str) -> Option<&'static MacroDefinition> {
    BUILTIN_MACROS.get(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn arity_is_inferred_from_markers() {
        assert_eq!(MacroDefinition::from(r"\frac{#1}{#2}").num_args, 2);
        assert_eq!(MacroDefinition::from(r"\alpha").num_args, 0);
    }

    #[test]
    fn builtins_are_found() {
        let half = builtin_macro(r"\half").unwrap();
        assert_eq!(half.num_args, 0);
        assert_eq!(builtin_macro(r"\abs").unwrap().num_args, 1);
        assert!(builtin_macro(r"\frac").is_none());
    }
}
