//! Glyph metrics for the fonts the layout engine knows about.
//!
//! Each table maps a code point to `[depth, height, italic, skew, width]` in
//! em. Values come from the TeX font metric files of the Computer Modern
//! fonts. Only the glyphs reachable from the symbol table are listed; the
//! lookup in [`crate::font_metrics`] falls back to Main-Regular for anything
//! else.

use phf::{Map, phf_map};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Font metrics for a single character
/// The array contains: [depth, height, italic, skew, width]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CharacterMetrics {
    /// Depth of the character
    pub depth: f64,
    /// Height of the character
    pub height: f64,
    /// Italic correction
    pub italic: f64,
    /// Skew of the character
    pub skew: f64,
    /// Width of the character
    pub width: f64,
}

impl CharacterMetrics {
    /// Create a new metrics record
    #[must_use]
    pub const fn new(depth: f64, height: f64, italic: f64, skew: f64, width: f64) -> Self {
        Self {
            depth,
            height,
            italic,
            skew,
            width,
        }
    }
}

/// A font family and variant with a metrics table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FontName {
    /// Upright roman, used for digits, operators and text
    #[strum(serialize = "Main-Regular")]
    MainRegular,
    /// Bold roman
    #[strum(serialize = "Main-Bold")]
    MainBold,
    /// Italic text
    #[strum(serialize = "Main-Italic")]
    MainItalic,
    /// Math italic, the default for letters in math mode
    #[strum(serialize = "Math-Italic")]
    MathItalic,
    /// Blackboard bold
    #[strum(serialize = "AMS-Regular")]
    AmsRegular,
    /// Calligraphic capitals
    #[strum(serialize = "Caligraphic-Regular")]
    CaligraphicRegular,
    /// Sans serif
    #[strum(serialize = "SansSerif-Regular")]
    SansSerifRegular,
    /// Monospace
    #[strum(serialize = "Typewriter-Regular")]
    TypewriterRegular,
    /// First size of large delimiters and text-style large operators
    #[strum(serialize = "Size1-Regular")]
    Size1Regular,
    /// Second size, display-style large operators
    #[strum(serialize = "Size2-Regular")]
    Size2Regular,
    /// Third delimiter size
    #[strum(serialize = "Size3-Regular")]
    Size3Regular,
    /// Fourth delimiter size and stacked delimiter pieces
    #[strum(serialize = "Size4-Regular")]
    Size4Regular,
}

impl FontName {
    /// Metrics table holding this font's glyphs.
    ///
    /// Italic, sans-serif and typewriter share tables with the fonts they
    /// are closest to; [`crate::font_metrics::get_character_metrics`] adjusts
    /// the widths.
    #[must_use]
    pub fn table(self) -> &'static Map<u32, CharacterMetrics> {
        match self {
            Self::MainRegular | Self::SansSerifRegular | Self::TypewriterRegular => &MAIN_REGULAR,
            Self::MainBold => &MAIN_BOLD,
            Self::MainItalic | Self::MathItalic => &MATH_ITALIC,
            Self::AmsRegular => &AMS_REGULAR,
            Self::CaligraphicRegular => &CALIGRAPHIC_REGULAR,
            Self::Size1Regular => &SIZE1_REGULAR,
            Self::Size2Regular => &SIZE2_REGULAR,
            Self::Size3Regular => &SIZE3_REGULAR,
            Self::Size4Regular => &SIZE4_REGULAR,
        }
    }

    /// Large-delimiter font for size 1 to 4.
    #[must_use]
    pub const fn delimiter_size(size: usize) -> Self {
        match size {
            0 | 1 => Self::Size1Regular,
            2 => Self::Size2Regular,
            3 => Self::Size3Regular,
            _ => Self::Size4Regular,
        }
    }
}


pub(crate) static MAIN_REGULAR: Map<u32, CharacterMetrics> = phf_map! {
    32u32 => CharacterMetrics::new(0.0, 0.0, 0.0, 0.0, 0.25),
    33u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.27778),
    34u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.5),
    35u32 => CharacterMetrics::new(0.19444, 0.69444, 0.0, 0.0, 0.83334),
    36u32 => CharacterMetrics::new(0.05556, 0.75, 0.0, 0.0, 0.5),
    37u32 => CharacterMetrics::new(0.05556, 0.75, 0.0, 0.0, 0.83334),
    38u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.77778),
    39u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.27778),
    40u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.38889),
    41u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.38889),
    42u32 => CharacterMetrics::new(0.0, 0.75, 0.0, 0.0, 0.5),
    43u32 => CharacterMetrics::new(0.08333, 0.58333, 0.0, 0.0, 0.77778),
    44u32 => CharacterMetrics::new(0.19444, 0.10556, 0.0, 0.0, 0.27778),
    45u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.33333),
    46u32 => CharacterMetrics::new(0.0, 0.10556, 0.0, 0.0, 0.27778),
    47u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.5),
    48u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5),
    49u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5),
    50u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5),
    51u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5),
    52u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5),
    53u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5),
    54u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5),
    55u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5),
    56u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5),
    57u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.5),
    58u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.27778),
    59u32 => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.0, 0.27778),
    60u32 => CharacterMetrics::new(0.0391, 0.5391, 0.0, 0.0, 0.77778),
    61u32 => CharacterMetrics::new(-0.13313, 0.36687, 0.0, 0.0, 0.77778),
    62u32 => CharacterMetrics::new(0.0391, 0.5391, 0.0, 0.0, 0.77778),
    63u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.47222),
    64u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.77778),
    65u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.75),
    66u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.70834),
    67u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.72222),
    68u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.76389),
    69u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.68056),
    70u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.65278),
    71u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.78472),
    72u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.75),
    73u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.36111),
    74u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.51389),
    75u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.77778),
    76u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.625),
    77u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.91667),
    78u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.75),
    79u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.77778),
    80u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.68056),
    81u32 => CharacterMetrics::new(0.19444, 0.68333, 0.0, 0.0, 0.77778),
    82u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.73611),
    83u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.55556),
    84u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.72222),
    85u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.75),
    86u32 => CharacterMetrics::new(0.0, 0.68333, 0.01389, 0.0, 0.75),
    87u32 => CharacterMetrics::new(0.0, 0.68333, 0.01389, 0.0, 1.02778),
    88u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.75),
    89u32 => CharacterMetrics::new(0.0, 0.68333, 0.025, 0.0, 0.75),
    90u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.61111),
    91u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.27778),
    92u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.5),
    93u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.27778),
    94u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.5),
    95u32 => CharacterMetrics::new(0.31, 0.12056, 0.02778, 0.0, 0.5),
    97u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.5),
    98u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.55556),
    99u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.44445),
    100u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.55556),
    101u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.44445),
    102u32 => CharacterMetrics::new(0.0, 0.69444, 0.07778, 0.0, 0.30556),
    103u32 => CharacterMetrics::new(0.19444, 0.43056, 0.01389, 0.0, 0.5),
    104u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.55556),
    105u32 => CharacterMetrics::new(0.0, 0.66786, 0.0, 0.0, 0.27778),
    106u32 => CharacterMetrics::new(0.19444, 0.66786, 0.0, 0.0, 0.30556),
    107u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.52778),
    108u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.27778),
    109u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.83334),
    110u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.55556),
    111u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.5),
    112u32 => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.0, 0.55556),
    113u32 => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.0, 0.52778),
    114u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.39167),
    115u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.39445),
    116u32 => CharacterMetrics::new(0.0, 0.61508, 0.0, 0.0, 0.38889),
    117u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.55556),
    118u32 => CharacterMetrics::new(0.0, 0.43056, 0.01389, 0.0, 0.52778),
    119u32 => CharacterMetrics::new(0.0, 0.43056, 0.01389, 0.0, 0.72222),
    120u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.52778),
    121u32 => CharacterMetrics::new(0.19444, 0.43056, 0.01389, 0.0, 0.52778),
    122u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.44445),
    123u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.5),
    124u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.27778),
    125u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.5),
    126u32 => CharacterMetrics::new(0.35, 0.31786, 0.0, 0.0, 0.5),
    160u32 => CharacterMetrics::new(0.0, 0.0, 0.0, 0.0, 0.25),
    168u32 => CharacterMetrics::new(0.0, 0.66786, 0.0, 0.0, 0.5),
    172u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.66667),
    175u32 => CharacterMetrics::new(0.0, 0.56778, 0.0, 0.0, 0.5),
    176u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.75),
    177u32 => CharacterMetrics::new(0.08333, 0.58333, 0.0, 0.0, 0.77778),
    180u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.5),
    215u32 => CharacterMetrics::new(0.08333, 0.58333, 0.0, 0.0, 0.77778),
    247u32 => CharacterMetrics::new(0.08333, 0.58333, 0.0, 0.0, 0.77778),
    710u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.5),
    711u32 => CharacterMetrics::new(0.0, 0.62847, 0.0, 0.0, 0.5),
    713u32 => CharacterMetrics::new(0.0, 0.56778, 0.0, 0.0, 0.5),
    714u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.5),
    715u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.5),
    728u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.5),
    729u32 => CharacterMetrics::new(0.0, 0.66786, 0.0, 0.0, 0.27778),
    730u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.75),
    732u32 => CharacterMetrics::new(0.0, 0.66786, 0.0, 0.0, 0.5),
    915u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.625),
    916u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.83334),
    920u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.77778),
    923u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.69445),
    926u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.66667),
    928u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.75),
    931u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.72222),
    933u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.77778),
    934u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.72222),
    936u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.77778),
    937u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.72222),
    8230u32 => CharacterMetrics::new(0.0, 0.12, 0.0, 0.0, 1.172),
    8242u32 => CharacterMetrics::new(0.0, 0.55556, 0.0, 0.0, 0.275),
    8407u32 => CharacterMetrics::new(0.0, 0.71444, 0.15382, 0.0, 0.5),
    8463u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.54028),
    8467u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.11111, 0.41667),
    8592u32 => CharacterMetrics::new(-0.13313, 0.36687, 0.0, 0.0, 1.0),
    8593u32 => CharacterMetrics::new(0.19444, 0.69444, 0.0, 0.0, 0.5),
    8594u32 => CharacterMetrics::new(-0.13313, 0.36687, 0.0, 0.0, 1.0),
    8595u32 => CharacterMetrics::new(0.19444, 0.69444, 0.0, 0.0, 0.5),
    8596u32 => CharacterMetrics::new(-0.13313, 0.36687, 0.0, 0.0, 1.0),
    8614u32 => CharacterMetrics::new(0.011, 0.511, 0.0, 0.0, 1.0),
    8656u32 => CharacterMetrics::new(-0.13313, 0.36687, 0.0, 0.0, 1.0),
    8658u32 => CharacterMetrics::new(-0.13313, 0.36687, 0.0, 0.0, 1.0),
    8660u32 => CharacterMetrics::new(-0.13313, 0.36687, 0.0, 0.0, 1.0),
    8704u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.55556),
    8706u32 => CharacterMetrics::new(0.0, 0.69444, 0.05556, 0.08334, 0.5566),
    8707u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.55556),
    8709u32 => CharacterMetrics::new(0.05556, 0.75, 0.0, 0.0, 0.5),
    8711u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.0, 0.83334),
    8712u32 => CharacterMetrics::new(0.0391, 0.5391, 0.0, 0.0, 0.66667),
    8715u32 => CharacterMetrics::new(0.0391, 0.5391, 0.0, 0.0, 0.66667),
    8722u32 => CharacterMetrics::new(0.08333, 0.58333, 0.0, 0.0, 0.77778),
    8723u32 => CharacterMetrics::new(0.08333, 0.58333, 0.0, 0.0, 0.77778),
    8726u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.5),
    8727u32 => CharacterMetrics::new(-0.03472, 0.46528, 0.0, 0.0, 0.5),
    8728u32 => CharacterMetrics::new(-0.05555, 0.44445, 0.0, 0.0, 0.5),
    8729u32 => CharacterMetrics::new(-0.05555, 0.44445, 0.0, 0.0, 0.5),
    8730u32 => CharacterMetrics::new(0.2, 0.8, 0.0, 0.0, 0.83334),
    8733u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.77778),
    8734u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 1.0),
    8739u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.27778),
    8741u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.5),
    8743u32 => CharacterMetrics::new(0.0, 0.55556, 0.0, 0.0, 0.66667),
    8744u32 => CharacterMetrics::new(0.0, 0.55556, 0.0, 0.0, 0.66667),
    8745u32 => CharacterMetrics::new(0.0, 0.55556, 0.0, 0.0, 0.66667),
    8746u32 => CharacterMetrics::new(0.0, 0.55556, 0.0, 0.0, 0.66667),
    8747u32 => CharacterMetrics::new(0.19444, 0.69444, 0.11111, 0.0, 0.41667),
    8764u32 => CharacterMetrics::new(-0.13313, 0.36687, 0.0, 0.0, 0.77778),
    8771u32 => CharacterMetrics::new(-0.03625, 0.46375, 0.0, 0.0, 0.77778),
    8773u32 => CharacterMetrics::new(0.022, 0.589, 0.0, 0.0, 0.77778),
    8776u32 => CharacterMetrics::new(-0.01688, 0.48312, 0.0, 0.0, 0.77778),
    8800u32 => CharacterMetrics::new(0.215, 0.716, 0.0, 0.0, 0.77778),
    8801u32 => CharacterMetrics::new(-0.03625, 0.46375, 0.0, 0.0, 0.77778),
    8804u32 => CharacterMetrics::new(0.13597, 0.63597, 0.0, 0.0, 0.77778),
    8805u32 => CharacterMetrics::new(0.13597, 0.63597, 0.0, 0.0, 0.77778),
    8810u32 => CharacterMetrics::new(0.0391, 0.5391, 0.0, 0.0, 1.0),
    8811u32 => CharacterMetrics::new(0.0391, 0.5391, 0.0, 0.0, 1.0),
    8834u32 => CharacterMetrics::new(0.0391, 0.5391, 0.0, 0.0, 0.77778),
    8835u32 => CharacterMetrics::new(0.0391, 0.5391, 0.0, 0.0, 0.77778),
    8838u32 => CharacterMetrics::new(0.13597, 0.63597, 0.0, 0.0, 0.77778),
    8839u32 => CharacterMetrics::new(0.13597, 0.63597, 0.0, 0.0, 0.77778),
    8853u32 => CharacterMetrics::new(0.08333, 0.58333, 0.0, 0.0, 0.77778),
    8854u32 => CharacterMetrics::new(0.08333, 0.58333, 0.0, 0.0, 0.77778),
    8855u32 => CharacterMetrics::new(0.08333, 0.58333, 0.0, 0.0, 0.77778),
    8857u32 => CharacterMetrics::new(0.08333, 0.58333, 0.0, 0.0, 0.77778),
    8866u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.61111),
    8867u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.61111),
    8868u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.77778),
    8869u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.77778),
    8901u32 => CharacterMetrics::new(-0.05555, 0.44445, 0.0, 0.0, 0.27778),
    8942u32 => CharacterMetrics::new(0.03, 0.9, 0.0, 0.0, 0.27778),
    8943u32 => CharacterMetrics::new(-0.05555, 0.44445, 0.0, 0.0, 1.172),
    8945u32 => CharacterMetrics::new(-0.03, 0.83, 0.0, 0.0, 1.172),
    8968u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.44445),
    8969u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.44445),
    8970u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.44445),
    8971u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.44445),
    9651u32 => CharacterMetrics::new(0.19444, 0.69444, 0.0, 0.0, 0.88889),
    10216u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.38889),
    10217u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.38889),
    10229u32 => CharacterMetrics::new(0.011, 0.511, 0.0, 0.0, 1.609),
    10230u32 => CharacterMetrics::new(0.011, 0.511, 0.0, 0.0, 1.638),
    10231u32 => CharacterMetrics::new(0.011, 0.511, 0.0, 0.0, 1.859),
    10232u32 => CharacterMetrics::new(0.024, 0.525, 0.0, 0.0, 1.609),
    10233u32 => CharacterMetrics::new(0.024, 0.525, 0.0, 0.0, 1.638),
    10234u32 => CharacterMetrics::new(0.024, 0.525, 0.0, 0.0, 1.859),
};

pub(crate) static MAIN_BOLD: Map<u32, CharacterMetrics> = phf_map! {
    40u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.44722),
    41u32 => CharacterMetrics::new(0.25, 0.75, 0.0, 0.0, 0.44722),
    43u32 => CharacterMetrics::new(0.13333, 0.63333, 0.0, 0.0, 0.89444),
    44u32 => CharacterMetrics::new(0.19444, 0.15556, 0.0, 0.0, 0.31944),
    45u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.38333),
    46u32 => CharacterMetrics::new(0.0, 0.15556, 0.0, 0.0, 0.31944),
    48u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.575),
    49u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.575),
    50u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.575),
    51u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.575),
    52u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.575),
    53u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.575),
    54u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.575),
    55u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.575),
    56u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.575),
    57u32 => CharacterMetrics::new(0.0, 0.64444, 0.0, 0.0, 0.575),
    61u32 => CharacterMetrics::new(-0.10889, 0.39111, 0.0, 0.0, 0.89444),
    65u32 => CharacterMetrics::new(0.0, 0.68611, 0.0, 0.0, 0.86944),
    66u32 => CharacterMetrics::new(0.0, 0.68611, 0.0, 0.0, 0.81805),
    67u32 => CharacterMetrics::new(0.0, 0.68611, 0.0, 0.0, 0.83055),
    68u32 => CharacterMetrics::new(0.0, 0.68611, 0.0, 0.0, 0.88194),
    69u32 => CharacterMetrics::new(0.0, 0.68611, 0.0, 0.0, 0.75555),
    70u32 => CharacterMetrics::new(0.0, 0.68611, 0.0, 0.0, 0.72361),
    71u32 => CharacterMetrics::new(0.0, 0.68611, 0.0, 0.0, 0.90416),
    72u32 => CharacterMetrics::new(0.0, 0.68611, 0.0, 0.0, 0.9),
    73u32 => CharacterMetrics::new(0.0, 0.68611, 0.0, 0.0, 0.43611),
    74u32 => CharacterMetrics::new(0.0, 0.68611, 0.0, 0.0, 0.59444),
    75u32 => CharacterMetrics::new(0.0, 0.68611, 0.0, 0.0, 0.90138),
    76u32 => CharacterMetrics::new(0.0, 0.68611, 0.0, 0.0, 0.69166),
    77u32 => CharacterMetrics::new(0.0, 0.68611, 0.0, 0.0, 1.09166),
    78u32 => CharacterMetrics::new(0.0, 0.68611, 0.0, 0.0, 0.9),
    79u32 => CharacterMetrics::new(0.0, 0.68611, 0.0, 0.0, 0.86388),
    80u32 => CharacterMetrics::new(0.0, 0.68611, 0.0, 0.0, 0.78611),
    81u32 => CharacterMetrics::new(0.19444, 0.68611, 0.0, 0.0, 0.86388),
    82u32 => CharacterMetrics::new(0.0, 0.68611, 0.0, 0.0, 0.8625),
    83u32 => CharacterMetrics::new(0.0, 0.68611, 0.0, 0.0, 0.63889),
    84u32 => CharacterMetrics::new(0.0, 0.68611, 0.0, 0.0, 0.8),
    85u32 => CharacterMetrics::new(0.0, 0.68611, 0.0, 0.0, 0.88472),
    86u32 => CharacterMetrics::new(0.0, 0.68611, 0.0, 0.0, 0.86944),
    87u32 => CharacterMetrics::new(0.0, 0.68611, 0.0, 0.0, 1.18888),
    88u32 => CharacterMetrics::new(0.0, 0.68611, 0.0, 0.0, 0.86944),
    89u32 => CharacterMetrics::new(0.0, 0.68611, 0.0, 0.0, 0.86944),
    90u32 => CharacterMetrics::new(0.0, 0.68611, 0.0, 0.0, 0.70277),
    97u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.55902),
    98u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.63889),
    99u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.51111),
    100u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.63889),
    101u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.52708),
    102u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.38333),
    103u32 => CharacterMetrics::new(0.19444, 0.44444, 0.0, 0.0, 0.575),
    104u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.63889),
    105u32 => CharacterMetrics::new(0.0, 0.69326, 0.0, 0.0, 0.31944),
    106u32 => CharacterMetrics::new(0.19444, 0.69326, 0.0, 0.0, 0.35139),
    107u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.60694),
    108u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.31944),
    109u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.95833),
    110u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.63889),
    111u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.575),
    112u32 => CharacterMetrics::new(0.19444, 0.44444, 0.0, 0.0, 0.63889),
    113u32 => CharacterMetrics::new(0.19444, 0.44444, 0.0, 0.0, 0.60694),
    114u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.47361),
    115u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.45361),
    116u32 => CharacterMetrics::new(0.0, 0.63492, 0.0, 0.0, 0.44722),
    117u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.63889),
    118u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.60694),
    119u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.83055),
    120u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.60694),
    121u32 => CharacterMetrics::new(0.19444, 0.44444, 0.0, 0.0, 0.60694),
    122u32 => CharacterMetrics::new(0.0, 0.44444, 0.0, 0.0, 0.51111),
};

pub(crate) static MATH_ITALIC: Map<u32, CharacterMetrics> = phf_map! {
    65u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.13889, 0.75),
    66u32 => CharacterMetrics::new(0.0, 0.68333, 0.05017, 0.08334, 0.75851),
    67u32 => CharacterMetrics::new(0.0, 0.68333, 0.07153, 0.08334, 0.71472),
    68u32 => CharacterMetrics::new(0.0, 0.68333, 0.02778, 0.05556, 0.82792),
    69u32 => CharacterMetrics::new(0.0, 0.68333, 0.05764, 0.08334, 0.7382),
    70u32 => CharacterMetrics::new(0.0, 0.68333, 0.13889, 0.08334, 0.64306),
    71u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.08334, 0.78625),
    72u32 => CharacterMetrics::new(0.0, 0.68333, 0.08125, 0.05556, 0.83125),
    73u32 => CharacterMetrics::new(0.0, 0.68333, 0.07847, 0.11111, 0.43958),
    74u32 => CharacterMetrics::new(0.0, 0.68333, 0.09618, 0.16667, 0.55451),
    75u32 => CharacterMetrics::new(0.0, 0.68333, 0.07153, 0.05556, 0.84931),
    76u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.02778, 0.68056),
    77u32 => CharacterMetrics::new(0.0, 0.68333, 0.10903, 0.08334, 0.97014),
    78u32 => CharacterMetrics::new(0.0, 0.68333, 0.10903, 0.08334, 0.80347),
    79u32 => CharacterMetrics::new(0.0, 0.68333, 0.02778, 0.08334, 0.76278),
    80u32 => CharacterMetrics::new(0.0, 0.68333, 0.13889, 0.08334, 0.64201),
    81u32 => CharacterMetrics::new(0.19444, 0.68333, 0.0, 0.08334, 0.79056),
    82u32 => CharacterMetrics::new(0.0, 0.68333, 0.00773, 0.08334, 0.75929),
    83u32 => CharacterMetrics::new(0.0, 0.68333, 0.05764, 0.08334, 0.6132),
    84u32 => CharacterMetrics::new(0.0, 0.68333, 0.13889, 0.08334, 0.58438),
    85u32 => CharacterMetrics::new(0.0, 0.68333, 0.10903, 0.02778, 0.68278),
    86u32 => CharacterMetrics::new(0.0, 0.68333, 0.22222, 0.0, 0.58333),
    87u32 => CharacterMetrics::new(0.0, 0.68333, 0.13889, 0.0, 0.94445),
    88u32 => CharacterMetrics::new(0.0, 0.68333, 0.07847, 0.08334, 0.82847),
    89u32 => CharacterMetrics::new(0.0, 0.68333, 0.22222, 0.0, 0.58056),
    90u32 => CharacterMetrics::new(0.0, 0.68333, 0.07153, 0.08334, 0.68264),
    97u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.52859),
    98u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.42917),
    99u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.05556, 0.43276),
    100u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.16667, 0.52049),
    101u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.05556, 0.46563),
    102u32 => CharacterMetrics::new(0.19444, 0.69444, 0.10764, 0.16667, 0.48959),
    103u32 => CharacterMetrics::new(0.19444, 0.43056, 0.03588, 0.02778, 0.47697),
    104u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.57616),
    105u32 => CharacterMetrics::new(0.0, 0.65952, 0.0, 0.0, 0.34451),
    106u32 => CharacterMetrics::new(0.19444, 0.65952, 0.05724, 0.0, 0.41181),
    107u32 => CharacterMetrics::new(0.0, 0.69444, 0.03148, 0.0, 0.5206),
    108u32 => CharacterMetrics::new(0.0, 0.69444, 0.01968, 0.08334, 0.29838),
    109u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.87801),
    110u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.60023),
    111u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.05556, 0.48472),
    112u32 => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.08334, 0.50313),
    113u32 => CharacterMetrics::new(0.19444, 0.43056, 0.03588, 0.08334, 0.44641),
    114u32 => CharacterMetrics::new(0.0, 0.43056, 0.02778, 0.05556, 0.45116),
    115u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.05556, 0.46875),
    116u32 => CharacterMetrics::new(0.0, 0.61508, 0.0, 0.08334, 0.36111),
    117u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.02778, 0.57246),
    118u32 => CharacterMetrics::new(0.0, 0.43056, 0.03588, 0.02778, 0.48472),
    119u32 => CharacterMetrics::new(0.0, 0.43056, 0.02691, 0.08334, 0.71592),
    120u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.02778, 0.57153),
    121u32 => CharacterMetrics::new(0.19444, 0.43056, 0.03588, 0.05556, 0.49028),
    122u32 => CharacterMetrics::new(0.0, 0.43056, 0.04398, 0.05556, 0.46505),
    945u32 => CharacterMetrics::new(0.0, 0.43056, 0.0037, 0.02778, 0.6397),
    946u32 => CharacterMetrics::new(0.19444, 0.69444, 0.05278, 0.08334, 0.56563),
    947u32 => CharacterMetrics::new(0.19444, 0.43056, 0.05556, 0.0, 0.51773),
    948u32 => CharacterMetrics::new(0.0, 0.69444, 0.03785, 0.05556, 0.44444),
    949u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.08334, 0.46632),
    950u32 => CharacterMetrics::new(0.19444, 0.69444, 0.07378, 0.08334, 0.4375),
    951u32 => CharacterMetrics::new(0.19444, 0.43056, 0.03588, 0.05556, 0.49653),
    952u32 => CharacterMetrics::new(0.0, 0.69444, 0.02778, 0.08334, 0.46944),
    953u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.05556, 0.35394),
    954u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.0, 0.57616),
    955u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.0, 0.58334),
    956u32 => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.02778, 0.60255),
    957u32 => CharacterMetrics::new(0.0, 0.43056, 0.06366, 0.02778, 0.49398),
    958u32 => CharacterMetrics::new(0.19444, 0.69444, 0.04601, 0.11111, 0.43751),
    960u32 => CharacterMetrics::new(0.0, 0.43056, 0.03588, 0.0, 0.57003),
    961u32 => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.08334, 0.51702),
    962u32 => CharacterMetrics::new(0.09722, 0.43056, 0.07986, 0.08334, 0.36285),
    963u32 => CharacterMetrics::new(0.0, 0.43056, 0.03588, 0.0, 0.57141),
    964u32 => CharacterMetrics::new(0.0, 0.43056, 0.1132, 0.02778, 0.43715),
    965u32 => CharacterMetrics::new(0.0, 0.43056, 0.03588, 0.02778, 0.54028),
    966u32 => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.08334, 0.65417),
    967u32 => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.05556, 0.62569),
    968u32 => CharacterMetrics::new(0.19444, 0.69444, 0.03588, 0.11111, 0.65139),
    969u32 => CharacterMetrics::new(0.0, 0.43056, 0.03588, 0.0, 0.62245),
    977u32 => CharacterMetrics::new(0.0, 0.69444, 0.0, 0.08334, 0.59144),
    981u32 => CharacterMetrics::new(0.19444, 0.69444, 0.0, 0.08334, 0.59583),
    982u32 => CharacterMetrics::new(0.0, 0.43056, 0.02778, 0.0, 0.82813),
    1009u32 => CharacterMetrics::new(0.19444, 0.43056, 0.0, 0.08334, 0.517),
    1013u32 => CharacterMetrics::new(0.0, 0.43056, 0.0, 0.05556, 0.40555),
};

pub(crate) static AMS_REGULAR: Map<u32, CharacterMetrics> = phf_map! {
    65u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.72222),
    66u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.66667),
    67u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.72222),
    68u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.72222),
    69u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.66667),
    70u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.61111),
    71u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.77778),
    72u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.77778),
    73u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.38889),
    74u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.5),
    75u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.77778),
    76u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.66667),
    77u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.94445),
    78u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.72222),
    79u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.77778),
    80u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.61111),
    81u32 => CharacterMetrics::new(0.16667, 0.68889, 0.0, 0.0, 0.77778),
    82u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.72222),
    83u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.55556),
    84u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.66667),
    85u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.72222),
    86u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.72222),
    87u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 1.0),
    88u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.72222),
    89u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.72222),
    90u32 => CharacterMetrics::new(0.0, 0.68889, 0.0, 0.0, 0.66667),
    9633u32 => CharacterMetrics::new(0.0, 0.675, 0.0, 0.0, 0.77778),
};

pub(crate) static CALIGRAPHIC_REGULAR: Map<u32, CharacterMetrics> = phf_map! {
    65u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.13889, 0.79834),
    66u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.13889, 0.65694),
    67u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.13889, 0.52694),
    68u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.13889, 0.77139),
    69u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.13889, 0.52778),
    70u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.13889, 0.71875),
    71u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.13889, 0.59487),
    72u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.13889, 0.84452),
    73u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.13889, 0.54452),
    74u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.13889, 0.67778),
    75u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.13889, 0.76195),
    76u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.13889, 0.68965),
    77u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.13889, 1.2009),
    78u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.13889, 0.82049),
    79u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.13889, 0.79611),
    80u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.13889, 0.69556),
    81u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.13889, 0.81667),
    82u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.13889, 0.8475),
    83u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.13889, 0.60556),
    84u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.13889, 0.54464),
    85u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.13889, 0.62583),
    86u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.13889, 0.61278),
    87u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.13889, 0.98778),
    88u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.13889, 0.7133),
    89u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.13889, 0.66834),
    90u32 => CharacterMetrics::new(0.0, 0.68333, 0.0, 0.13889, 0.72499),
};

pub(crate) static SIZE1_REGULAR: Map<u32, CharacterMetrics> = phf_map! {
    40u32 => CharacterMetrics::new(0.35001, 0.85, 0.0, 0.0, 0.45834),
    41u32 => CharacterMetrics::new(0.35001, 0.85, 0.0, 0.0, 0.45834),
    47u32 => CharacterMetrics::new(0.35001, 0.85, 0.0, 0.0, 0.57778),
    91u32 => CharacterMetrics::new(0.35001, 0.85, 0.0, 0.0, 0.41667),
    92u32 => CharacterMetrics::new(0.35001, 0.85, 0.0, 0.0, 0.57778),
    93u32 => CharacterMetrics::new(0.35001, 0.85, 0.0, 0.0, 0.41667),
    123u32 => CharacterMetrics::new(0.35001, 0.85, 0.0, 0.0, 0.58334),
    124u32 => CharacterMetrics::new(-0.00099, 0.601, 0.0, 0.0, 0.33333),
    125u32 => CharacterMetrics::new(0.35001, 0.85, 0.0, 0.0, 0.58334),
    710u32 => CharacterMetrics::new(0.0, 0.72222, 0.0, 0.0, 0.55556),
    732u32 => CharacterMetrics::new(0.0, 0.72222, 0.0, 0.0, 0.55556),
    8593u32 => CharacterMetrics::new(1e-05, 0.6, 0.0, 0.0, 0.66667),
    8595u32 => CharacterMetrics::new(1e-05, 0.6, 0.0, 0.0, 0.66667),
    8657u32 => CharacterMetrics::new(1e-05, 0.6, 0.0, 0.0, 0.77778),
    8659u32 => CharacterMetrics::new(1e-05, 0.6, 0.0, 0.0, 0.77778),
    8719u32 => CharacterMetrics::new(0.25001, 0.75, 0.0, 0.0, 0.94445),
    8720u32 => CharacterMetrics::new(0.25001, 0.75, 0.0, 0.0, 0.94445),
    8721u32 => CharacterMetrics::new(0.25001, 0.75, 0.0, 0.0, 1.05556),
    8730u32 => CharacterMetrics::new(0.35001, 0.85, 0.0, 0.0, 1.0),
    8739u32 => CharacterMetrics::new(-0.00099, 0.601, 0.0, 0.0, 0.33333),
    8741u32 => CharacterMetrics::new(-0.00099, 0.601, 0.0, 0.0, 0.55556),
    8747u32 => CharacterMetrics::new(0.30612, 0.805, 0.19445, 0.0, 0.47222),
    8748u32 => CharacterMetrics::new(0.30612, 0.805, 0.19445, 0.0, 0.83334),
    8749u32 => CharacterMetrics::new(0.30612, 0.805, 0.19445, 0.0, 1.19445),
    8750u32 => CharacterMetrics::new(0.30612, 0.805, 0.19445, 0.0, 0.47222),
    8896u32 => CharacterMetrics::new(0.25001, 0.75, 0.0, 0.0, 0.83334),
    8897u32 => CharacterMetrics::new(0.25001, 0.75, 0.0, 0.0, 0.83334),
    8898u32 => CharacterMetrics::new(0.25001, 0.75, 0.0, 0.0, 0.83334),
    8899u32 => CharacterMetrics::new(0.25001, 0.75, 0.0, 0.0, 0.83334),
    8968u32 => CharacterMetrics::new(0.35001, 0.85, 0.0, 0.0, 0.47222),
    8969u32 => CharacterMetrics::new(0.35001, 0.85, 0.0, 0.0, 0.47222),
    8970u32 => CharacterMetrics::new(0.35001, 0.85, 0.0, 0.0, 0.47222),
    8971u32 => CharacterMetrics::new(0.35001, 0.85, 0.0, 0.0, 0.47222),
    10216u32 => CharacterMetrics::new(0.35001, 0.85, 0.0, 0.0, 0.47222),
    10217u32 => CharacterMetrics::new(0.35001, 0.85, 0.0, 0.0, 0.47222),
    10752u32 => CharacterMetrics::new(0.25001, 0.75, 0.0, 0.0, 1.11111),
    10753u32 => CharacterMetrics::new(0.25001, 0.75, 0.0, 0.0, 1.11111),
    10754u32 => CharacterMetrics::new(0.25001, 0.75, 0.0, 0.0, 1.11111),
    10756u32 => CharacterMetrics::new(0.25001, 0.75, 0.0, 0.0, 0.83334),
};

pub(crate) static SIZE2_REGULAR: Map<u32, CharacterMetrics> = phf_map! {
    40u32 => CharacterMetrics::new(0.65002, 1.15, 0.0, 0.0, 0.59722),
    41u32 => CharacterMetrics::new(0.65002, 1.15, 0.0, 0.0, 0.59722),
    47u32 => CharacterMetrics::new(0.65002, 1.15, 0.0, 0.0, 0.81111),
    91u32 => CharacterMetrics::new(0.65002, 1.15, 0.0, 0.0, 0.47222),
    92u32 => CharacterMetrics::new(0.65002, 1.15, 0.0, 0.0, 0.81111),
    93u32 => CharacterMetrics::new(0.65002, 1.15, 0.0, 0.0, 0.47222),
    123u32 => CharacterMetrics::new(0.65002, 1.15, 0.0, 0.0, 0.66667),
    125u32 => CharacterMetrics::new(0.65002, 1.15, 0.0, 0.0, 0.66667),
    710u32 => CharacterMetrics::new(0.0, 0.75, 0.0, 0.0, 1.0),
    732u32 => CharacterMetrics::new(0.0, 0.75, 0.0, 0.0, 1.0),
    8719u32 => CharacterMetrics::new(0.55001, 1.05, 0.0, 0.0, 1.27778),
    8720u32 => CharacterMetrics::new(0.55001, 1.05, 0.0, 0.0, 1.27778),
    8721u32 => CharacterMetrics::new(0.55001, 1.05, 0.0, 0.0, 1.44445),
    8730u32 => CharacterMetrics::new(0.65002, 1.15, 0.0, 0.0, 1.0),
    8747u32 => CharacterMetrics::new(0.86225, 1.36, 0.44445, 0.0, 0.55556),
    8748u32 => CharacterMetrics::new(0.86225, 1.36, 0.44445, 0.0, 1.11111),
    8749u32 => CharacterMetrics::new(0.86225, 1.36, 0.44445, 0.0, 1.66667),
    8750u32 => CharacterMetrics::new(0.86225, 1.36, 0.44445, 0.0, 0.55556),
    8896u32 => CharacterMetrics::new(0.55001, 1.05, 0.0, 0.0, 1.11111),
    8897u32 => CharacterMetrics::new(0.55001, 1.05, 0.0, 0.0, 1.11111),
    8898u32 => CharacterMetrics::new(0.55001, 1.05, 0.0, 0.0, 1.11111),
    8899u32 => CharacterMetrics::new(0.55001, 1.05, 0.0, 0.0, 1.11111),
    8968u32 => CharacterMetrics::new(0.65002, 1.15, 0.0, 0.0, 0.52778),
    8969u32 => CharacterMetrics::new(0.65002, 1.15, 0.0, 0.0, 0.52778),
    8970u32 => CharacterMetrics::new(0.65002, 1.15, 0.0, 0.0, 0.52778),
    8971u32 => CharacterMetrics::new(0.65002, 1.15, 0.0, 0.0, 0.52778),
    10216u32 => CharacterMetrics::new(0.65002, 1.15, 0.0, 0.0, 0.61111),
    10217u32 => CharacterMetrics::new(0.65002, 1.15, 0.0, 0.0, 0.61111),
    10752u32 => CharacterMetrics::new(0.55001, 1.05, 0.0, 0.0, 1.51112),
    10753u32 => CharacterMetrics::new(0.55001, 1.05, 0.0, 0.0, 1.51112),
    10754u32 => CharacterMetrics::new(0.55001, 1.05, 0.0, 0.0, 1.51112),
    10756u32 => CharacterMetrics::new(0.55001, 1.05, 0.0, 0.0, 1.11111),
};

pub(crate) static SIZE3_REGULAR: Map<u32, CharacterMetrics> = phf_map! {
    40u32 => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 0.73611),
    41u32 => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 0.73611),
    47u32 => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 1.04445),
    91u32 => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 0.52778),
    92u32 => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 1.04445),
    93u32 => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 0.52778),
    123u32 => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 0.75),
    125u32 => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 0.75),
    710u32 => CharacterMetrics::new(0.0, 0.75, 0.0, 0.0, 1.44445),
    732u32 => CharacterMetrics::new(0.0, 0.75, 0.0, 0.0, 1.44445),
    8730u32 => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 1.0),
    8968u32 => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 0.58334),
    8969u32 => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 0.58334),
    8970u32 => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 0.58334),
    8971u32 => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 0.58334),
    10216u32 => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 0.75),
    10217u32 => CharacterMetrics::new(0.95003, 1.45, 0.0, 0.0, 0.75),
};

pub(crate) static SIZE4_REGULAR: Map<u32, CharacterMetrics> = phf_map! {
    40u32 => CharacterMetrics::new(1.25003, 1.75, 0.0, 0.0, 0.79167),
    41u32 => CharacterMetrics::new(1.25003, 1.75, 0.0, 0.0, 0.79167),
    47u32 => CharacterMetrics::new(1.25003, 1.75, 0.0, 0.0, 1.27778),
    91u32 => CharacterMetrics::new(1.25003, 1.75, 0.0, 0.0, 0.58334),
    92u32 => CharacterMetrics::new(1.25003, 1.75, 0.0, 0.0, 1.27778),
    93u32 => CharacterMetrics::new(1.25003, 1.75, 0.0, 0.0, 0.58334),
    123u32 => CharacterMetrics::new(1.25003, 1.75, 0.0, 0.0, 0.80556),
    125u32 => CharacterMetrics::new(1.25003, 1.75, 0.0, 0.0, 0.80556),
    710u32 => CharacterMetrics::new(0.0, 0.825, 0.0, 0.0, 1.8889),
    732u32 => CharacterMetrics::new(0.0, 0.825, 0.0, 0.0, 1.8889),
    8730u32 => CharacterMetrics::new(1.25003, 1.75, 0.0, 0.0, 1.0),
    8968u32 => CharacterMetrics::new(1.25003, 1.75, 0.0, 0.0, 0.63889),
    8969u32 => CharacterMetrics::new(1.25003, 1.75, 0.0, 0.0, 0.63889),
    8970u32 => CharacterMetrics::new(1.25003, 1.75, 0.0, 0.0, 0.63889),
    8971u32 => CharacterMetrics::new(1.25003, 1.75, 0.0, 0.0, 0.63889),
    10216u32 => CharacterMetrics::new(1.25003, 1.75, 0.0, 0.0, 0.80556),
    10217u32 => CharacterMetrics::new(1.25003, 1.75, 0.0, 0.0, 0.80556),
};
