//! Recoverable error codes carried by error atoms.

use core::fmt;

use strum::IntoStaticStr;

/// Reason attached to an error atom.
///
/// These never abort a parse. The parser embeds an error atom carrying the
/// code and keeps going, so the tree stays renderable after every edit.
/// `Display` renders the kebab-case code, with the command name prefixed for
/// the two parameterized families (`sqrt-requires-one-operand`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, IntoStaticStr)]
#[strum(serialize_all = "kebab-case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum ErrorCode {
    /// A required argument is missing or unusable
    ExpectedArgument,
    /// An argument marker has no corresponding argument
    UnexpectedArgument,
    /// A modifier is missing the operand it applies to
    ExpectedOperand,
    /// A color or delimiter name is not recognized
    InvalidName,
    /// A character has no meaning in the current mode
    UnknownSymbol,
    /// A command is neither registered nor a symbol nor a macro
    UnknownCommand,
    /// `{` and `}` do not balance
    UnbalancedBraces,
    /// `\left` and `\right` do not balance
    UnbalancedMatchfixOperator,
    /// A second superscript on the same atom
    UnexpectedSuperscript,
    /// A second subscript on the same atom
    UnexpectedSubscript,
    /// A command used where it cannot appear
    UnexpectedSequence,
    /// More than one infix command in a group
    NonAssociativeOperator,
    /// A one-argument command is missing its argument
    RequiresOneOperand(String),
    /// A multi-argument command ran out of arguments
    HasTooFewArguments(String),
    /// Malformed dimension, number or other raw argument
    SyntaxError,
}

impl ErrorCode {
    /// Default human readable message for this code.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::ExpectedArgument => "Expected an argument".to_owned(),
            Self::UnexpectedArgument => "Unexpected argument marker".to_owned(),
            Self::ExpectedOperand => "Expected an operand".to_owned(),
            Self::InvalidName => "Invalid name".to_owned(),
            Self::UnknownSymbol => "Unknown symbol".to_owned(),
            Self::UnknownCommand => "Unknown command".to_owned(),
            Self::UnbalancedBraces => "Unbalanced braces".to_owned(),
            Self::UnbalancedMatchfixOperator => r"Unbalanced \left and \right".to_owned(),
            Self::UnexpectedSuperscript => "Double superscript".to_owned(),
            Self::UnexpectedSubscript => "Double subscript".to_owned(),
            Self::UnexpectedSequence => "Unexpected command here".to_owned(),
            Self::NonAssociativeOperator => "Only one infix operator per group".to_owned(),
            Self::RequiresOneOperand(name) => format!(r"\{name} requires one operand"),
            Self::HasTooFewArguments(name) => format!(r"\{name} has too few arguments"),
            Self::SyntaxError => "Syntax error".to_owned(),
        }
    }

    /// Builds the family code for a missing argument of `command`.
    ///
    /// `command` may include the leading backslash.
    #[must_use]
    pub fn missing_argument(command: &str, arity: usize, index: usize) -> Self {
        let name = command.trim_start_matches('\\').to_owned();
        if arity == 1 {
            Self::RequiresOneOperand(name)
        } else if index == 0 {
            Self::ExpectedArgument
        } else {
            Self::HasTooFewArguments(name)
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RequiresOneOperand(name) => write!(f, "{name}-requires-one-operand"),
            Self::HasTooFewArguments(name) => write!(f, "{name}-has-too-few-arguments"),
            other => f.write_str(other.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_codes_are_kebab_case() {
        assert_eq!(ErrorCode::UnbalancedBraces.to_string(), "unbalanced-braces");
        assert_eq!(
            ErrorCode::UnbalancedMatchfixOperator.to_string(),
            "unbalanced-matchfix-operator"
        );
        assert_eq!(
            ErrorCode::NonAssociativeOperator.to_string(),
            "non-associative-operator"
        );
    }

    #[test]
    fn family_codes_carry_the_command_name() {
        assert_eq!(
            ErrorCode::missing_argument(r"\sqrt", 1, 0).to_string(),
            "sqrt-requires-one-operand"
        );
        assert_eq!(
            ErrorCode::missing_argument(r"\frac", 2, 1).to_string(),
            "frac-has-too-few-arguments"
        );
        assert_eq!(
            ErrorCode::missing_argument(r"\frac", 2, 0),
            ErrorCode::ExpectedArgument
        );
    }
}
