//! Command registration.
//!
//! Every builtin command lives in a file under `functions/` that calls
//! [`MathContext::define_function`](crate::context::MathContext::define_function)
//! with a [`FunctionDefSpec`]. The parser reads the argument grammar from the
//! resulting [`FunctionSpec`], resolves the arguments and hands them to the
//! handler, which builds the atom.

use crate::atom::{Atom, AtomId, AtomTree};
use crate::spacing_data::MeasurementOwned;
use crate::symbols::Mode;
use crate::types::{ArgSpec, ErrorCode, SourceLocation};
use crate::units::Glue;

/// Context passed to a command handler.
pub struct FunctionContext<'a> {
    /// Command name, including the backslash
    pub func_name: &'a str,
    /// Mode the command appeared in
    pub mode: Mode,
    /// Source range of the command and its arguments
    pub loc: Option<SourceLocation>,
    /// Tree the argument atoms were pushed into
    pub tree: &'a mut AtomTree,
}

impl FunctionContext<'_> {
    /// Name without the leading backslash.
    #[must_use]
    pub fn bare_name(&self) -> &str {
        self.func_name.trim_start_matches('\\')
    }

    /// Pushes a helper atom, e.g. the body of a one-symbol argument.
    pub fn push(&mut self, atom: Atom) -> AtomId {
        self.tree.push(atom)
    }
}

/// A resolved command argument.
#[derive(Debug, Clone, PartialEq)]
pub enum Argument {
    /// Parsed content of an `auto`, `math` or `text` argument
    Atoms(Vec<AtomId>),
    /// A validated color, lowercased, with `#` for hex colors
    Color(String),
    /// A length
    Dimension(MeasurementOwned),
    /// A length with stretch and shrink
    Glue(Glue),
    /// A delimiter, `.` for the null delimiter
    Delimiter(String),
    /// Raw text
    String(String),
    /// A number
    Number(f64),
}

impl Argument {
    /// Atoms of an `Atoms` argument.
    #[must_use]
    pub fn into_atoms(self) -> Option<Vec<AtomId>> {
        match self {
            Self::Atoms(atoms) => Some(atoms),
            _ => None,
        }
    }

    /// Text of a `Color`, `Delimiter` or `String` argument.
    #[must_use]
    pub fn into_text(self) -> Option<String> {
        match self {
            Self::Color(text) | Self::Delimiter(text) | Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Value of a `Dimension` argument, or the base length of a `Glue`.
    #[must_use]
    pub fn into_dimension(self) -> Option<MeasurementOwned> {
        match self {
            Self::Dimension(m) => Some(m),
            Self::Glue(glue) => Some(glue.glue),
            _ => None,
        }
    }

    /// Value of a `Glue` argument; a plain dimension becomes rigid glue.
    #[must_use]
    pub fn into_glue(self) -> Option<Glue> {
        match self {
            Self::Glue(glue) => Some(glue),
            Self::Dimension(m) => Some(Glue {
                glue: m,
                grow: None,
                shrink: None,
            }),
            _ => None,
        }
    }

    /// Value of a `Number` argument.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }
}

/// Takes argument `index` out of `args` as an atom list. Missing required
/// atom arguments have already been replaced by a placeholder, so this is
/// empty only for an absent optional argument.
pub fn take_atoms(args: &mut [Option<Argument>], index: usize) -> Vec<AtomId> {
    args.get_mut(index)
        .and_then(Option::take)
        .and_then(Argument::into_atoms)
        .unwrap_or_default()
}

/// Takes an optional atom argument; `None` when it was not written.
pub fn take_optional_atoms(args: &mut [Option<Argument>], index: usize) -> Option<Vec<AtomId>> {
    args.get_mut(index)
        .and_then(Option::take)
        .and_then(Argument::into_atoms)
}

/// Takes a text-like argument (color, delimiter or string).
pub fn take_text(args: &mut [Option<Argument>], index: usize) -> Option<String> {
    args.get_mut(index)
        .and_then(Option::take)
        .and_then(Argument::into_text)
}

/// Builds the atom for one occurrence of a command.
///
/// Required arguments that are missing reach the handler as a placeholder
/// (for atom arguments) or `None` (for the other kinds); the parser has
/// already emitted the error atom, so handlers fall back to a default.
pub type FunctionHandler =
    fn(context: FunctionContext<'_>, args: Vec<Option<Argument>>) -> Result<Atom, ErrorCode>;

/// Parsing properties of a command.
#[derive(Debug, Clone)]
pub struct FunctionPropSpec {
    /// Argument grammar, in order
    pub args: Vec<ArgSpec>,
    /// Whether the command may appear in math mode
    pub allowed_in_math: bool,
    /// Whether the command may appear in text mode
    pub allowed_in_text: bool,
    /// Infix commands take everything before them in the group as the first
    /// argument and everything after as the second
    pub infix: bool,
    /// TeX primitive, e.g. `\kern`
    pub primitive: bool,
    /// Switch commands like `\color` or `\large` take the rest of the
    /// enclosing group as their last argument
    pub rest_of_group: bool,
}

impl Default for FunctionPropSpec {
    fn default() -> Self {
        Self {
            args: Vec::new(),
            allowed_in_math: true,
            allowed_in_text: false,
            infix: false,
            primitive: false,
            rest_of_group: false,
        }
    }
}

/// Input to [`MathContext::define_function`](crate::context::MathContext::define_function).
pub struct FunctionDefSpec<'b> {
    /// Names sharing the definition
    pub names: &'b [&'b str],
    /// Parsing properties
    pub props: FunctionPropSpec,
    /// Atom builder
    pub handler: FunctionHandler,
}

/// Registry entry for one command name.
#[derive(Debug, Clone)]
pub struct FunctionSpec {
    /// Argument grammar
    pub args: Vec<ArgSpec>,
    /// Allowed in math mode
    pub allowed_in_math: bool,
    /// Allowed in text mode
    pub allowed_in_text: bool,
    /// Infix operator
    pub infix: bool,
    /// TeX primitive
    pub primitive: bool,
    /// Takes the rest of the group
    pub rest_of_group: bool,
    /// Atom builder
    pub handler: FunctionHandler,
}

impl FunctionSpec {
    /// Number of required arguments.
    #[must_use]
    pub fn required_args(&self) -> usize {
        self.args.iter().filter(|arg| !arg.optional).count()
    }

    /// Whether the command may appear in `mode`.
    #[must_use]
    pub const fn allowed_in(&self, mode: Mode) -> bool {
        match mode {
            Mode::Math => self.allowed_in_math,
            Mode::Text => self.allowed_in_text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ArgType;

    fn handler(_: FunctionContext<'_>, _: Vec<Option<Argument>>) -> Result<Atom, ErrorCode> {
        Ok(Atom::placeholder(Mode::Math))
    }

    #[test]
    fn required_args_skip_optional_ones() {
        let spec = FunctionSpec {
            args: vec![
                ArgSpec::optional(ArgType::Auto),
                ArgSpec::required(ArgType::Auto),
            ],
            allowed_in_math: true,
            allowed_in_text: false,
            infix: false,
            primitive: false,
            rest_of_group: false,
            handler,
        };
        assert_eq!(spec.required_args(), 1);
        assert!(spec.allowed_in(Mode::Math));
        assert!(!spec.allowed_in(Mode::Text));
    }

    #[test]
    fn dimension_arguments_become_rigid_glue() {
        let m = MeasurementOwned {
            number: 2.0,
            unit: "pt".to_owned(),
        };
        let glue = Argument::Dimension(m.clone()).into_glue().unwrap();
        assert_eq!(glue.glue, m);
        assert!(glue.grow.is_none());
    }
}
