//! The atom tree.
//!
//! Atoms are the nodes of the parsed expression. They live in an arena
//! ([`AtomTree`]) and refer to each other through [`AtomId`] indices: an atom
//! owns the atoms listed in its slots (body, numerator, scripts, ...) and
//! points back to its parent without owning it.
//!
//! [`AtomKind`] is closed: the layout engine and the serializer match on it
//! exhaustively, so adding a kind means handling it everywhere.

mod tree;

use strum::{AsRefStr, Display, EnumDiscriminants, EnumString};

use crate::layout_context::{FontFamily, FontSeries, FontShape};
use crate::spacing_data::{AtomClass, MeasurementOwned};
use crate::style::MathStyle;
use crate::symbols::Mode;
use crate::types::{ErrorCode, ErrorLocationProvider, SourceLocation};
use crate::units::Glue;

pub use tree::{Ancestors, AtomTree, MAX_TREE_DEPTH};

/// Index of an atom in its [`AtomTree`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AtomId(pub usize);

impl AtomId {
    /// Position in the arena.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// How scripts attach to an atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Limits {
    /// No preference recorded
    #[default]
    None,
    /// Above and below (`\limits`)
    Limits,
    /// To the right (`\nolimits`)
    NoLimits,
    /// Above and below in display style only
    Auto,
    /// Attached to the accented body before the accent is stacked
    Accent,
}

/// Which horizontal line a `line` atom draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum LinePosition {
    /// `\overline`
    Over,
    /// `\underline`
    Under,
}

/// Alignment of an `overlap` atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum OverlapAlign {
    /// `\llap`: content sticks out to the left
    Left,
    /// `\rlap`: content sticks out to the right
    Right,
    /// `\clap`: content centered on the insertion point
    Center,
}

/// Which side a stretchy brace is drawn on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BracePosition {
    /// `\overbrace`
    Over,
    /// `\underbrace`
    Under,
}

/// Named child list of an atom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum Branch {
    /// Content of a group, root, accent, wrapper...
    Body,
    /// Fraction numerator
    Numer,
    /// Fraction denominator
    Denom,
    /// Root index
    Index,
    /// Content set over an `overunder` atom
    Above,
    /// Content set under an `overunder` atom
    Below,
    /// Superscript
    Superscript,
    /// Subscript
    Subscript,
}

/// Kind of an atom, with its kind-specific slots.
#[derive(Debug, Clone, PartialEq, EnumDiscriminants)]
#[strum_discriminants(vis(pub))]
#[strum_discriminants(doc = "Kind of an atom without its payload")]
#[strum_discriminants(derive(Display, Hash, AsRefStr), strum(serialize_all = "lowercase"))]
#[strum_discriminants(name(AtomType))]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum AtomKind {
    /// Ordinary symbol
    Ord,
    /// Binary operator
    Bin,
    /// Relation
    Rel,
    /// Opening delimiter
    Open,
    /// Closing delimiter
    Close,
    /// Punctuation
    Punct,
    /// Inner atom, e.g. `\cdots`
    Inner,
    /// Large operator or named function. `\sum` has a glyph in `value`,
    /// `\sin` has its name in `value`, `\operatorname{..}` a body.
    Op {
        /// Content of `\operatorname` and `\mathop`
        body: Vec<AtomId>,
        /// Whether `value` is a single large-operator glyph
        symbol: bool,
    },
    /// Braced group
    Group {
        /// Content
        body: Vec<AtomId>,
    },
    /// Generalized fraction
    Genfrac {
        /// Numerator
        numer: Vec<AtomId>,
        /// Denominator
        denom: Vec<AtomId>,
        /// Whether the fraction bar is drawn
        has_bar_line: bool,
        /// Delimiter on the left, e.g. `(` for `\binom`
        left_delim: Option<String>,
        /// Delimiter on the right
        right_delim: Option<String>,
        /// Forced style (`\dfrac`, `\tfrac`), `None` for automatic
        math_style: Option<MathStyle>,
        /// `\cfrac`: numerator in display style, no shrinking
        continued: bool,
    },
    /// Radical
    Surd {
        /// Radicand
        body: Vec<AtomId>,
        /// Optional index
        index: Option<Vec<AtomId>>,
    },
    /// Accent over a body
    Accent {
        /// Accented content
        body: Vec<AtomId>,
        /// Accent glyph
        accent: char,
        /// Whether the accent stretches to the width of the body
        wide: bool,
    },
    /// Content stacked over and/or under a body
    OverUnder {
        /// Base
        body: Vec<AtomId>,
        /// Content above
        above: Option<Vec<AtomId>>,
        /// Content below
        below: Option<Vec<AtomId>>,
        /// Stretchy brace drawn between body and scripts
        brace: Option<BracePosition>,
    },
    /// `\left ... \right` pair
    LeftRight {
        /// Content between the delimiters
        body: Vec<AtomId>,
        /// Opening delimiter, `.` for none
        left_delim: String,
        /// Closing delimiter. `None` when the `\right` is missing.
        right_delim: Option<String>,
    },
    /// `\middle` delimiter, sized like the enclosing pair
    Delim {
        /// Delimiter
        delim: String,
    },
    /// `\big` and friends
    SizedDelim {
        /// Delimiter
        delim: String,
        /// Size 1 to 4
        size: usize,
        /// Spacing class (open, close, rel or ord)
        class: AtomClass,
    },
    /// Framed or colored box
    Box {
        /// Content
        body: Vec<AtomId>,
        /// Whether a frame is drawn
        frame: bool,
        /// Background color
        background: Option<String>,
        /// Frame color
        border_color: Option<String>,
    },
    /// Filled rectangle
    Rule {
        /// Width
        width: MeasurementOwned,
        /// Height
        height: MeasurementOwned,
        /// Raise
        shift: Option<MeasurementOwned>,
    },
    /// Over or under line
    Line {
        /// Content
        body: Vec<AtomId>,
        /// Over or under
        position: LinePosition,
    },
    /// Zero width box
    Overlap {
        /// Content
        body: Vec<AtomId>,
        /// Direction the content sticks out
        align: OverlapAlign,
    },
    /// Explicit space. `None` is an interword space.
    Spacing {
        /// Amount of space
        glue: Option<Glue>,
    },
    /// Color change
    Color {
        /// Content
        body: Vec<AtomId>,
        /// Color name or `#rrggbb`
        color: String,
    },
    /// Size change, e.g. `\large`
    Sizing {
        /// Content
        body: Vec<AtomId>,
        /// Size 1 to 11
        size: usize,
    },
    /// Math style change, e.g. `\displaystyle`
    MathStyle {
        /// Content
        body: Vec<AtomId>,
        /// New style
        style: MathStyle,
    },
    /// Font change, e.g. `\mathbf`
    Font {
        /// Content
        body: Vec<AtomId>,
        /// Family override
        family: Option<FontFamily>,
        /// Weight override
        series: Option<FontSeries>,
        /// Shape override
        shape: Option<FontShape>,
    },
    /// Content with an explicit spacing class, e.g. `\mathbin{..}`
    MathClass {
        /// Content
        body: Vec<AtomId>,
        /// Class
        class: AtomClass,
    },
    /// Recoverable parse error
    Error {
        /// Reason
        code: ErrorCode,
        /// Human readable description
        message: String,
    },
    /// Empty slot to be filled in
    Placeholder,
}

impl AtomKind {
    /// Kind of a single symbol with the given spacing class.
    #[must_use]
    pub const fn from_class(class: AtomClass) -> Self {
        match class {
            AtomClass::Mord => Self::Ord,
            AtomClass::Mbin => Self::Bin,
            AtomClass::Mrel => Self::Rel,
            AtomClass::Mopen => Self::Open,
            AtomClass::Mclose => Self::Close,
            AtomClass::Mpunct => Self::Punct,
            AtomClass::Minner => Self::Inner,
            AtomClass::Mop => Self::Op {
                body: Vec::new(),
                symbol: true,
            },
        }
    }

    /// Error kind with the default message of `code`.
    #[must_use]
    pub fn error(code: ErrorCode) -> Self {
        let message = code.message();
        Self::Error { code, message }
    }

    /// Spacing class of the box this kind lays out to.
    #[must_use]
    pub const fn class(&self) -> AtomClass {
        match self {
            Self::Bin => AtomClass::Mbin,
            Self::Rel => AtomClass::Mrel,
            Self::Open => AtomClass::Mopen,
            Self::Close => AtomClass::Mclose,
            Self::Punct => AtomClass::Mpunct,
            Self::Inner | Self::Genfrac { .. } | Self::LeftRight { .. } => AtomClass::Minner,
            Self::Op { .. } => AtomClass::Mop,
            Self::SizedDelim { class, .. } | Self::MathClass { class, .. } => *class,
            Self::Ord
            | Self::Group { .. }
            | Self::Surd { .. }
            | Self::Accent { .. }
            | Self::OverUnder { .. }
            | Self::Delim { .. }
            | Self::Box { .. }
            | Self::Rule { .. }
            | Self::Line { .. }
            | Self::Overlap { .. }
            | Self::Spacing { .. }
            | Self::Color { .. }
            | Self::Sizing { .. }
            | Self::MathStyle { .. }
            | Self::Font { .. }
            | Self::Error { .. }
            | Self::Placeholder => AtomClass::Mord,
        }
    }

    /// The kind-specific child lists, in reading order.
    #[must_use]
    pub fn slots(&self) -> Vec<(Branch, &Vec<AtomId>)> {
        match self {
            Self::Op { body, .. }
            | Self::Group { body }
            | Self::Accent { body, .. }
            | Self::LeftRight { body, .. }
            | Self::Box { body, .. }
            | Self::Line { body, .. }
            | Self::Overlap { body, .. }
            | Self::Color { body, .. }
            | Self::Sizing { body, .. }
            | Self::MathStyle { body, .. }
            | Self::Font { body, .. }
            | Self::MathClass { body, .. } => vec![(Branch::Body, body)],
            Self::Genfrac { numer, denom, .. } => {
                vec![(Branch::Numer, numer), (Branch::Denom, denom)]
            }
            Self::Surd { body, index } => {
                let mut slots = Vec::with_capacity(2);
                if let Some(index) = index {
                    slots.push((Branch::Index, index));
                }
                slots.push((Branch::Body, body));
                slots
            }
            Self::OverUnder {
                body, above, below, ..
            } => {
                let mut slots = Vec::with_capacity(3);
                if let Some(above) = above {
                    slots.push((Branch::Above, above));
                }
                slots.push((Branch::Body, body));
                if let Some(below) = below {
                    slots.push((Branch::Below, below));
                }
                slots
            }
            Self::Ord
            | Self::Bin
            | Self::Rel
            | Self::Open
            | Self::Close
            | Self::Punct
            | Self::Inner
            | Self::Delim { .. }
            | Self::SizedDelim { .. }
            | Self::Rule { .. }
            | Self::Spacing { .. }
            | Self::Error { .. }
            | Self::Placeholder => Vec::new(),
        }
    }

    /// Mutable access to the child list `branch`, if this kind has it.
    pub fn slot_mut(&mut self, branch: Branch) -> Option<&mut Vec<AtomId>> {
        match (self, branch) {
            (
                Self::Op { body, .. }
                | Self::Group { body }
                | Self::Surd { body, .. }
                | Self::Accent { body, .. }
                | Self::OverUnder { body, .. }
                | Self::LeftRight { body, .. }
                | Self::Box { body, .. }
                | Self::Line { body, .. }
                | Self::Overlap { body, .. }
                | Self::Color { body, .. }
                | Self::Sizing { body, .. }
                | Self::MathStyle { body, .. }
                | Self::Font { body, .. }
                | Self::MathClass { body, .. },
                Branch::Body,
            ) => Some(body),
            (Self::Genfrac { numer, .. }, Branch::Numer) => Some(numer),
            (Self::Genfrac { denom, .. }, Branch::Denom) => Some(denom),
            (Self::Surd { index, .. }, Branch::Index) => Some(index.get_or_insert_with(Vec::new)),
            (Self::OverUnder { above, .. }, Branch::Above) => {
                Some(above.get_or_insert_with(Vec::new))
            }
            (Self::OverUnder { below, .. }, Branch::Below) => {
                Some(below.get_or_insert_with(Vec::new))
            }
            _ => None,
        }
    }
}

/// Per-atom style overrides, applied on top of the inherited context.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AtomStyle {
    /// Foreground color
    pub color: Option<String>,
    /// Font family
    pub font_family: Option<FontFamily>,
    /// Font weight
    pub font_series: Option<FontSeries>,
    /// Font shape
    pub font_shape: Option<FontShape>,
    /// Size 1 to 11
    pub font_size: Option<usize>,
}

impl AtomStyle {
    /// Whether no override is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.color.is_none()
            && self.font_family.is_none()
            && self.font_series.is_none()
            && self.font_shape.is_none()
            && self.font_size.is_none()
    }
}

/// A node of the atom tree.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Atom {
    /// Kind and kind-specific slots
    pub kind: AtomKind,
    /// Mode the atom was parsed in
    pub mode: Mode,
    /// Glyph or symbol text
    pub value: Option<String>,
    /// Command that produced the atom, e.g. `\frac`
    pub command: Option<String>,
    /// Superscript list
    pub superscript: Option<Vec<AtomId>>,
    /// Subscript list
    pub subscript: Option<Vec<AtomId>>,
    /// Script placement
    pub limits: Limits,
    /// Style overrides
    pub style: AtomStyle,
    /// Editors move over the atom in one step
    pub skip_boundary: bool,
    /// Editors select the atom as a whole
    pub capture_selection: bool,
    /// Owning atom, `None` at the top level
    pub parent: Option<AtomId>,
    /// Source range the atom was parsed from
    pub loc: Option<SourceLocation>,
}

impl Atom {
    /// Creates an atom of `kind` with everything else unset.
    #[must_use]
    pub fn new(kind: AtomKind, mode: Mode) -> Self {
        Self {
            kind,
            mode,
            value: None,
            command: None,
            superscript: None,
            subscript: None,
            limits: Limits::None,
            style: AtomStyle::default(),
            skip_boundary: false,
            capture_selection: false,
            parent: None,
            loc: None,
        }
    }

    /// An error atom.
    #[must_use]
    pub fn error(code: ErrorCode, mode: Mode) -> Self {
        Self::new(AtomKind::error(code), mode)
    }

    /// An empty placeholder.
    #[must_use]
    pub fn placeholder(mode: Mode) -> Self {
        Self::new(AtomKind::Placeholder, mode)
    }

    /// Sets the glyph or symbol text.
    #[must_use]
    pub fn with_value<S: Into<String>>(mut self, value: S) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Sets the producing command.
    #[must_use]
    pub fn with_command<S: Into<String>>(mut self, command: S) -> Self {
        self.command = Some(command.into());
        self
    }

    /// Sets the source range.
    #[must_use]
    pub const fn with_loc(mut self, loc: Option<SourceLocation>) -> Self {
        self.loc = loc;
        self
    }

    /// Sets the script placement.
    #[must_use]
    pub const fn with_limits(mut self, limits: Limits) -> Self {
        self.limits = limits;
        self
    }

    /// Payload-free kind.
    #[must_use]
    pub fn atom_type(&self) -> AtomType {
        AtomType::from(&self.kind)
    }

    /// Whether this is an error atom.
    #[must_use]
    pub const fn is_error(&self) -> bool {
        matches!(self.kind, AtomKind::Error { .. })
    }

    /// The error code of an error atom.
    #[must_use]
    pub const fn error_code(&self) -> Option<&ErrorCode> {
        match &self.kind {
            AtomKind::Error { code, .. } => Some(code),
            _ => None,
        }
    }

    /// Whether the atom has a superscript or subscript.
    #[must_use]
    pub const fn has_scripts(&self) -> bool {
        self.superscript.is_some() || self.subscript.is_some()
    }

    /// The single character in `value`, if that is what it holds.
    #[must_use]
    pub fn single_char(&self) -> Option<char> {
        let mut chars = self.value.as_deref()?.chars();
        let ch = chars.next()?;
        chars.next().is_none().then_some(ch)
    }

    /// Child lists including the scripts, in reading order.
    #[must_use]
    pub fn branches(&self) -> Vec<(Branch, &Vec<AtomId>)> {
        let mut branches = self.kind.slots();
        if let Some(sup) = &self.superscript {
            branches.push((Branch::Superscript, sup));
        }
        if let Some(sub) = &self.subscript {
            branches.push((Branch::Subscript, sub));
        }
        branches
    }

    /// Mutable access to a child list, creating an empty script list when
    /// asked for one.
    pub fn branch_mut(&mut self, branch: Branch) -> Option<&mut Vec<AtomId>> {
        match branch {
            Branch::Superscript => Some(self.superscript.get_or_insert_with(Vec::new)),
            Branch::Subscript => Some(self.subscript.get_or_insert_with(Vec::new)),
            other => self.kind.slot_mut(other),
        }
    }
}

impl ErrorLocationProvider for Atom {
    fn loc(&self) -> Option<SourceLocation> {
        self.loc
    }
}
