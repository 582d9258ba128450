use strum::{AsRefStr, Display, EnumString};

use crate::spacing_data::AtomClass;

/// Parsing mode of a token or atom.
///
/// Math mode classifies characters into TeX atom classes and italicizes
/// letters; text mode keeps whitespace and sets characters upright.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Mode {
    /// Math mode
    #[default]
    Math,
    /// Text mode
    Text,
}

/// Font family a symbol is drawn from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, AsRefStr)]
#[strum(ascii_case_insensitive)]
pub enum Font {
    /// The Computer Modern based main fonts
    Main,
    /// The AMS symbol font
    Ams,
}

/// Symbol groups that are TeX atom classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Atom {
    /// Binary operator, e.g. `+`
    Bin,
    /// Closing delimiter, e.g. `)`
    Close,
    /// Inner, e.g. `\cdots`
    Inner,
    /// Opening delimiter, e.g. `(`
    Open,
    /// Punctuation, e.g. `,`
    Punct,
    /// Relation, e.g. `=`
    Rel,
}

/// Symbol groups that need further treatment before they get a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum NonAtom {
    /// Ordinary symbol set in math italic when a letter
    MathOrd,
    /// Ordinary symbol set upright
    TextOrd,
    /// Large operator, e.g. `\sum`
    OpToken,
    /// Fixed-width space, e.g. `~`
    Spacing,
}

/// Classification of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Group {
    /// One of the TeX atom classes
    Atom(Atom),
    /// Ordinary symbols, operators and spaces
    NonAtom(NonAtom),
}

impl Group {
    /// Spacing class of atoms built from this symbol.
    #[must_use]
    pub const fn class(self) -> AtomClass {
        match self {
            Self::Atom(Atom::Bin) => AtomClass::Mbin,
            Self::Atom(Atom::Close) => AtomClass::Mclose,
            Self::Atom(Atom::Inner) => AtomClass::Minner,
            Self::Atom(Atom::Open) => AtomClass::Mopen,
            Self::Atom(Atom::Punct) => AtomClass::Mpunct,
            Self::Atom(Atom::Rel) => AtomClass::Mrel,
            Self::NonAtom(NonAtom::OpToken) => AtomClass::Mop,
            Self::NonAtom(NonAtom::MathOrd | NonAtom::TextOrd | NonAtom::Spacing) => {
                AtomClass::Mord
            }
        }
    }
}

/// Everything the parser and the layout need to know about a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CharInfo {
    /// Font family
    pub font: Font,
    /// Classification
    pub group: Group,
    /// Character drawn for the symbol
    pub replace: Option<char>,
}

impl CharInfo {
    /// Creates a symbol entry.
    #[must_use]
    pub const fn new(font: Font, group: Group, replace: Option<char>) -> Self {
        Self {
            font,
            group,
            replace,
        }
    }
}
