//! TeX math styles and the transitions between them.
//!
//! TeX has four math styles, each in a normal and a cramped variant. A
//! [`Style`] is one of those eight combinations; the methods on it return the
//! style used for superscripts, subscripts, numerators and denominators of
//! content set in that style (TeXbook, Appendix G).

use strum::{AsRefStr, Display, EnumIter, EnumString};

/// One of the four TeX math styles.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, AsRefStr, Display, EnumString, EnumIter,
)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum MathStyle {
    /// `\displaystyle`
    #[strum(serialize = "displaystyle")]
    Display,
    /// `\textstyle`
    #[strum(serialize = "textstyle")]
    Text,
    /// `\scriptstyle`
    #[strum(serialize = "scriptstyle")]
    Script,
    /// `\scriptscriptstyle`
    #[strum(serialize = "scriptscriptstyle")]
    ScriptScript,
}

impl MathStyle {
    /// 0 for display up to 3 for scriptscript.
    #[must_use]
    pub const fn level(self) -> usize {
        match self {
            Self::Display => 0,
            Self::Text => 1,
            Self::Script => 2,
            Self::ScriptScript => 3,
        }
    }

    /// The command selecting this style.
    #[must_use]
    pub const fn command(self) -> &'static str {
        match self {
            Self::Display => "\\displaystyle",
            Self::Text => "\\textstyle",
            Self::Script => "\\scriptstyle",
            Self::ScriptScript => "\\scriptscriptstyle",
        }
    }
}

/// A math style together with its cramped flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Style {
    /// Display, text, script or scriptscript
    pub math_style: MathStyle,
    /// Cramped styles lower superscripts and raise nothing
    pub cramped: bool,
}

impl Style {
    /// Creates a style.
    #[must_use]
    pub const fn new(math_style: MathStyle, cramped: bool) -> Self {
        Self {
            math_style,
            cramped,
        }
    }

    const fn id(self) -> usize {
        self.math_style.level() * 2 + self.cramped as usize
    }

    const fn from_id(id: usize) -> Self {
        STYLES[id]
    }

    /// Style of a superscript attached to content in this style.
    #[must_use]
    pub const fn sup(self) -> Self {
        Self::from_id(SUP[self.id()])
    }

    /// Style of a subscript attached to content in this style.
    #[must_use]
    pub const fn sub(self) -> Self {
        Self::from_id(SUB[self.id()])
    }

    /// Style of a fraction numerator.
    #[must_use]
    pub const fn frac_num(self) -> Self {
        Self::from_id(FRAC_NUM[self.id()])
    }

    /// Style of a fraction denominator.
    #[must_use]
    pub const fn frac_den(self) -> Self {
        Self::from_id(FRAC_DEN[self.id()])
    }

    /// Cramped variant of this style.
    #[must_use]
    pub const fn cramp(self) -> Self {
        Self::from_id(CRAMP[self.id()])
    }

    /// Text-size equivalent: script styles map to text.
    #[must_use]
    pub const fn text(self) -> Self {
        Self::from_id(TEXT_LOOKUP[self.id()])
    }

    /// Script and scriptscript styles use the tight spacing table.
    #[must_use]
    pub const fn is_tight(self) -> bool {
        self.math_style.level() >= 2
    }

    /// Whether this is displaystyle, cramped or not.
    #[must_use]
    pub const fn is_display(self) -> bool {
        matches!(self.math_style, MathStyle::Display)
    }
}

// IDs of the different styles
const D: usize = 0;
const DC: usize = 1;
const T: usize = 2;
const TC: usize = 3;
const S: usize = 4;
const SC: usize = 5;
const SS: usize = 6;
const SSC: usize = 7;

const STYLES: [Style; 8] = [
    Style::new(MathStyle::Display, false),
    Style::new(MathStyle::Display, true),
    Style::new(MathStyle::Text, false),
    Style::new(MathStyle::Text, true),
    Style::new(MathStyle::Script, false),
    Style::new(MathStyle::Script, true),
    Style::new(MathStyle::ScriptScript, false),
    Style::new(MathStyle::ScriptScript, true),
];

// Lookup tables for switching from one style to another
const SUP: [usize; 8] = [S, SC, S, SC, SS, SSC, SS, SSC];
const SUB: [usize; 8] = [SC, SC, SC, SC, SSC, SSC, SSC, SSC];
const FRAC_NUM: [usize; 8] = [T, TC, S, SC, SS, SSC, SS, SSC];
const FRAC_DEN: [usize; 8] = [TC, TC, SC, SC, SSC, SSC, SSC, SSC];
const CRAMP: [usize; 8] = [DC, DC, TC, TC, SC, SC, SSC, SSC];
const TEXT_LOOKUP: [usize; 8] = [D, DC, T, TC, T, TC, T, TC];

/// Uncramped displaystyle.
pub const DISPLAY: Style = STYLES[D];
/// Uncramped textstyle.
pub const TEXT: Style = STYLES[T];
/// Uncramped scriptstyle.
pub const SCRIPT: Style = STYLES[S];
/// Uncramped scriptscriptstyle.
pub const SCRIPTSCRIPT: Style = STYLES[SS];
