//! Font metrics module
//!
//! This module contains metrics regarding fonts and individual symbols. The
//! sigma and xi variables, as well as the metric tables in
//! [`crate::font_metrics_data`], contain data extracted from TeX font metrics.
//!
//! In TeX, there are actually three sets of dimensions, one for each of
//! textstyle (size index 5 and higher: >=9pt), scriptstyle (size index 3 and 4:
//! 7-8pt), and scriptscriptstyle (size index 1 and 2: 5-6pt).
//!
//! The font metrics are stored in fonts cmsy10, cmsy7, and cmsy5 respectively.

use phf::{Map, phf_map};

pub use crate::font_metrics_data::{CharacterMetrics, FontName};
use crate::symbols::Mode;

/// TeX font parameters for one size class.
#[derive(Debug, Clone, PartialEq)]
pub struct FontMetrics {
    /// Slant of the italic font, per unit height
    pub slant: f64,
    /// Interword space
    pub space: f64,
    /// Interword stretch
    pub stretch: f64,
    /// Interword shrink
    pub shrink: f64,
    /// sigma5: height of lowercase x
    pub x_height: f64,
    /// sigma6: 1em
    pub quad: f64,
    /// Extra space after sentences
    pub extra_space: f64,
    /// sigma8: numerator shift, display style
    pub num1: f64,
    /// sigma9: numerator shift, text style with bar
    pub num2: f64,
    /// sigma10: numerator shift, text style without bar
    pub num3: f64,
    /// sigma11: denominator shift, display style
    pub denom1: f64,
    /// sigma12: denominator shift, text style
    pub denom2: f64,
    /// sigma13: superscript shift, display style
    pub sup1: f64,
    /// sigma14: superscript shift, not cramped
    pub sup2: f64,
    /// sigma15: superscript shift, cramped
    pub sup3: f64,
    /// sigma16: subscript shift without superscript
    pub sub1: f64,
    /// sigma17: subscript shift with superscript
    pub sub2: f64,
    /// sigma18: superscript baseline drop for boxes
    pub sup_drop: f64,
    /// sigma19: subscript baseline drop for boxes
    pub sub_drop: f64,
    /// sigma20: delimiter size for display-style fractions
    pub delim1: f64,
    /// sigma21: delimiter size otherwise
    pub delim2: f64,
    /// sigma22: height of the math axis
    pub axis_height: f64,
    /// xi8: fraction bar and radical rule thickness
    pub default_rule_thickness: f64,
    /// xi9: minimum clearance above limits
    pub big_op_spacing1: f64,
    /// xi10: minimum clearance below limits
    pub big_op_spacing2: f64,
    /// xi11: baseline raise of upper limits
    pub big_op_spacing3: f64,
    /// xi12: baseline drop of lower limits
    pub big_op_spacing4: f64,
    /// xi13: padding above and below limits
    pub big_op_spacing5: f64,
    /// Thickness of the radical rule
    pub sqrt_rule_thickness: f64,
    /// Points per em at this size
    pub pt_per_em: f64,
    /// Gap between the rules of a double rule
    pub double_rule_sep: f64,
    /// Thickness of box frames
    pub fbox_rule: f64,
    /// Padding inside box frames
    pub fbox_sep: f64,
    /// 1mu in em, i.e. quad / 18
    pub css_em_per_mu: f64,
}

/// Font parameters for textstyle, scriptstyle and scriptscriptstyle.
pub static FONT_METRICS: [FontMetrics; 3] = [
    FontMetrics {
        slant: 0.25,
        space: 0.0,
        stretch: 0.0,
        shrink: 0.0,
        x_height: 0.431,
        quad: 1.0,
        extra_space: 0.0,
        num1: 0.677,
        num2: 0.394,
        num3: 0.444,
        denom1: 0.686,
        denom2: 0.345,
        sup1: 0.413,
        sup2: 0.363,
        sup3: 0.289,
        sub1: 0.15,
        sub2: 0.247,
        sup_drop: 0.386,
        sub_drop: 0.05,
        delim1: 2.39,
        delim2: 1.01,
        axis_height: 0.25,
        default_rule_thickness: 0.04,
        big_op_spacing1: 0.111,
        big_op_spacing2: 0.166,
        big_op_spacing3: 0.2,
        big_op_spacing4: 0.6,
        big_op_spacing5: 0.1,
        sqrt_rule_thickness: 0.04,
        pt_per_em: 10.0,
        double_rule_sep: 0.2,
        fbox_rule: 0.04,
        fbox_sep: 0.3,
        css_em_per_mu: 1.0 / 18.0,
    },
    FontMetrics {
        slant: 0.25,
        space: 0.0,
        stretch: 0.0,
        shrink: 0.0,
        x_height: 0.431,
        quad: 1.171,
        extra_space: 0.0,
        num1: 0.732,
        num2: 0.384,
        num3: 0.471,
        denom1: 0.752,
        denom2: 0.344,
        sup1: 0.503,
        sup2: 0.431,
        sup3: 0.286,
        sub1: 0.143,
        sub2: 0.286,
        sup_drop: 0.353,
        sub_drop: 0.071,
        delim1: 1.7,
        delim2: 1.157,
        axis_height: 0.25,
        default_rule_thickness: 0.049,
        big_op_spacing1: 0.111,
        big_op_spacing2: 0.166,
        big_op_spacing3: 0.2,
        big_op_spacing4: 0.611,
        big_op_spacing5: 0.143,
        sqrt_rule_thickness: 0.04,
        pt_per_em: 10.0,
        double_rule_sep: 0.2,
        fbox_rule: 0.04,
        fbox_sep: 0.3,
        css_em_per_mu: 1.171 / 18.0,
    },
    FontMetrics {
        slant: 0.25,
        space: 0.0,
        stretch: 0.0,
        shrink: 0.0,
        x_height: 0.431,
        quad: 1.472,
        extra_space: 0.0,
        num1: 0.925,
        num2: 0.387,
        num3: 0.504,
        denom1: 1.025,
        denom2: 0.532,
        sup1: 0.504,
        sup2: 0.404,
        sup3: 0.294,
        sub1: 0.2,
        sub2: 0.4,
        sup_drop: 0.494,
        sub_drop: 0.1,
        delim1: 1.98,
        delim2: 1.42,
        axis_height: 0.25,
        default_rule_thickness: 0.049,
        big_op_spacing1: 0.111,
        big_op_spacing2: 0.166,
        big_op_spacing3: 0.2,
        big_op_spacing4: 0.611,
        big_op_spacing5: 0.143,
        sqrt_rule_thickness: 0.04,
        pt_per_em: 10.0,
        double_rule_sep: 0.2,
        fbox_rule: 0.04,
        fbox_sep: 0.3,
        css_em_per_mu: 1.472 / 18.0,
    },
];

impl FontMetrics {
    /// The same parameters measured in a font `factor` times as large.
    ///
    /// Slant is a ratio and `pt_per_em` a conversion constant, so both are
    /// kept.
    #[must_use]
    pub fn scaled(&self, factor: f64) -> Self {
        Self {
            slant: self.slant,
            pt_per_em: self.pt_per_em,
            space: self.space * factor,
            stretch: self.stretch * factor,
            shrink: self.shrink * factor,
            x_height: self.x_height * factor,
            quad: self.quad * factor,
            extra_space: self.extra_space * factor,
            num1: self.num1 * factor,
            num2: self.num2 * factor,
            num3: self.num3 * factor,
            denom1: self.denom1 * factor,
            denom2: self.denom2 * factor,
            sup1: self.sup1 * factor,
            sup2: self.sup2 * factor,
            sup3: self.sup3 * factor,
            sub1: self.sub1 * factor,
            sub2: self.sub2 * factor,
            sup_drop: self.sup_drop * factor,
            sub_drop: self.sub_drop * factor,
            delim1: self.delim1 * factor,
            delim2: self.delim2 * factor,
            axis_height: self.axis_height * factor,
            default_rule_thickness: self.default_rule_thickness * factor,
            big_op_spacing1: self.big_op_spacing1 * factor,
            big_op_spacing2: self.big_op_spacing2 * factor,
            big_op_spacing3: self.big_op_spacing3 * factor,
            big_op_spacing4: self.big_op_spacing4 * factor,
            big_op_spacing5: self.big_op_spacing5 * factor,
            sqrt_rule_thickness: self.sqrt_rule_thickness * factor,
            double_rule_sep: self.double_rule_sep * factor,
            fbox_rule: self.fbox_rule * factor,
            fbox_sep: self.fbox_sep * factor,
            css_em_per_mu: self.css_em_per_mu * factor,
        }
    }
}

/// Font parameters for a size index (1 to 11).
#[must_use]
pub fn get_global_metrics(size: usize) -> &'static FontMetrics {
    let index = if size >= 5 {
        0
    } else if size >= 3 {
        1
    } else {
        2
    };
    &FONT_METRICS[index]
}

/// Accented Latin letters laid out with the metrics of their base letter.
pub const EXTRA_CHARACTER_MAP: Map<char, char> = phf_map! {
    '\u{c0}' => 'A', '\u{c1}' => 'A', '\u{c2}' => 'A', '\u{c3}' => 'A', '\u{c4}' => 'A', '\u{c5}' => 'A',
    '\u{c7}' => 'C', '\u{c8}' => 'E', '\u{c9}' => 'E', '\u{ca}' => 'E', '\u{cb}' => 'E',
    '\u{cc}' => 'I', '\u{cd}' => 'I', '\u{ce}' => 'I', '\u{cf}' => 'I', '\u{d0}' => 'D',
    '\u{d1}' => 'N', '\u{d2}' => 'O', '\u{d3}' => 'O', '\u{d4}' => 'O', '\u{d5}' => 'O', '\u{d6}' => 'O',
    '\u{d9}' => 'U', '\u{da}' => 'U', '\u{db}' => 'U', '\u{dc}' => 'U', '\u{dd}' => 'Y',
    '\u{e0}' => 'a', '\u{e1}' => 'a', '\u{e2}' => 'a', '\u{e3}' => 'a', '\u{e4}' => 'a', '\u{e5}' => 'a',
    '\u{e7}' => 'c', '\u{e8}' => 'e', '\u{e9}' => 'e', '\u{ea}' => 'e', '\u{eb}' => 'e',
    '\u{ec}' => 'i', '\u{ed}' => 'i', '\u{ee}' => 'i', '\u{ef}' => 'i', '\u{f0}' => 'd',
    '\u{f1}' => 'n', '\u{f2}' => 'o', '\u{f3}' => 'o', '\u{f4}' => 'o', '\u{f5}' => 'o', '\u{f6}' => 'o',
    '\u{f9}' => 'u', '\u{fa}' => 'u', '\u{fb}' => 'u', '\u{fc}' => 'u', '\u{fd}' => 'y', '\u{ff}' => 'y',
};

/// Width of every glyph of the typewriter font.
const TYPEWRITER_WIDTH: f64 = 0.525;

/// Metrics of a character in a font.
///
/// Lookup order: the font's own table, the base letter of an accented Latin
/// character, then Main-Regular. In text mode, characters with no metrics at
/// all fall back to the metrics of `M` so that unknown scripts still occupy
/// space. Returns `None` only for math-mode characters with no metrics.
#[must_use]
pub fn get_character_metrics(character: char, font: FontName, mode: Mode) -> Option<CharacterMetrics> {
    let lookup = |ch: char| {
        font.table()
            .get(&u32::from(ch))
            .or_else(|| FontName::MainRegular.table().get(&u32::from(ch)))
            .copied()
    };

    let found = lookup(character)
        .or_else(|| EXTRA_CHARACTER_MAP.get(&character).and_then(|&base| lookup(base)))
        .or_else(|| (mode == Mode::Text).then(|| lookup('M')).flatten());

    found.map(|mut metrics| {
        if font == FontName::TypewriterRegular {
            metrics.width = TYPEWRITER_WIDTH;
            metrics.italic = 0.0;
        }
        metrics
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn size_classes_select_sigma_sets() {
        assert_eq!(get_global_metrics(5).quad, 1.0);
        assert_eq!(get_global_metrics(3).quad, 1.171);
        assert_eq!(get_global_metrics(1).quad, 1.472);
        assert!((get_global_metrics(6).css_em_per_mu - 1.0 / 18.0).abs() < 1e-12);
        let script = get_global_metrics(6).scaled(0.5);
        assert!((script.x_height - 0.2155).abs() < 1e-12);
        assert!((script.slant - get_global_metrics(6).slant).abs() < 1e-12);
    }

    #[test]
    fn letters_have_italic_metrics() {
        let f = get_character_metrics('f', FontName::MathItalic, Mode::Math).unwrap();
        assert!(f.italic > 0.1);
        assert!(f.depth > 0.0);
    }

    #[test]
    fn missing_glyphs_fall_back() {
        let plus = get_character_metrics('+', FontName::MathItalic, Mode::Math).unwrap();
        assert_eq!(plus.width, 0.77778);
        let accented = get_character_metrics('\u{e9}', FontName::MainRegular, Mode::Text).unwrap();
        assert_eq!(accented.width, 0.44445);
        let tt = get_character_metrics('m', FontName::TypewriterRegular, Mode::Text).unwrap();
        assert_eq!(tt.width, 0.525);
        assert!(get_character_metrics('\u{4e00}', FontName::MainRegular, Mode::Text).is_some());
        assert!(get_character_metrics('\u{4e00}', FontName::MainRegular, Mode::Math).is_none());
    }
}
