//! Layout context
//!
//! A [`LayoutContext`] holds everything the box builder needs to know about
//! the surroundings of an atom: the math style and cramping, the size, the
//! color and the font. Contexts are immutable; every `having_*`/`with_*`
//! method returns a derived copy for the recursion into a child.

use bon::bon;
use strum::{AsRefStr, Display, EnumString};

use crate::font_metrics::{FontMetrics, get_global_metrics};
use crate::style::{DISPLAY, MathStyle, Style, TEXT};
use crate::types::Settings;

/// Font family selected by a font command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FontFamily {
    /// Upright roman (`\mathrm`, `\textrm`)
    #[strum(serialize = "rm")]
    Roman,
    /// Sans serif (`\mathsf`, `\textsf`)
    #[strum(serialize = "sf")]
    SansSerif,
    /// Monospace (`\mathtt`, `\texttt`)
    #[strum(serialize = "tt")]
    Typewriter,
    /// Calligraphic capitals (`\mathcal`)
    #[strum(serialize = "cal")]
    Calligraphic,
    /// Blackboard bold (`\mathbb`)
    #[strum(serialize = "bb")]
    Blackboard,
}

/// Font weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FontSeries {
    /// Regular weight
    Medium,
    /// Bold
    Bold,
}

/// Font shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, AsRefStr, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum FontShape {
    /// Upright
    Upright,
    /// Italic
    Italic,
}

/// Size for each of the 11 sizes in text, script and scriptscript style.
const SIZE_STYLE_MAP: [[usize; 3]; 11] = [
    [1, 1, 1],   // size1: [5, 5, 5]              \tiny
    [2, 1, 1],   // size2: [6, 5, 5]
    [3, 1, 1],   // size3: [7, 5, 5]              \scriptsize
    [4, 2, 1],   // size4: [8, 6, 5]              \footnotesize
    [5, 2, 1],   // size5: [9, 6, 5]              \small
    [6, 3, 1],   // size6: [10, 7, 5]             \normalsize
    [7, 4, 2],   // size7: [12, 8, 6]             \large
    [8, 6, 3],   // size8: [14.4, 10, 7]          \Large
    [9, 7, 6],   // size9: [17.28, 12, 10]        \LARGE
    [10, 8, 7],  // size10: [20.74, 14.4, 12]     \huge
    [11, 10, 9], // size11: [24.88, 20.74, 17.28] \HUGE
];

/// Scale of each size relative to `\normalsize`.
pub const SIZE_MULTIPLIERS: [f64; 11] = [0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.2, 1.44, 1.728, 2.074, 2.488];

fn size_at_style(size: usize, style: Style) -> usize {
    let level = style.math_style.level();
    if level < 2 {
        size
    } else {
        SIZE_STYLE_MAP[size.clamp(1, 11) - 1][level - 1]
    }
}

fn multiplier(size: usize) -> f64 {
    SIZE_MULTIPLIERS[size.clamp(1, 11) - 1]
}

/// Inherited layout state for one atom.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutContext {
    /// Current math style, including cramping
    pub style: Style,
    /// Current color, `None` for the renderer default
    pub color: Option<String>,
    /// Effective size (1 to 11) after the style has been applied
    pub size: usize,
    /// Size selected by sizing commands, before script shrinking
    pub text_size: usize,
    /// Font family override
    pub font_family: Option<FontFamily>,
    /// Weight override
    pub font_series: Option<FontSeries>,
    /// Shape override
    pub font_shape: Option<FontShape>,
    /// Scale of `size` relative to normal size
    pub size_multiplier: f64,
    /// Lower bound for rule thickness, in em
    pub min_rule_thickness: f64,
    /// Color for error atoms
    pub error_color: String,
}

#[bon]
impl LayoutContext {
    /// `\normalsize`
    pub const BASESIZE: usize = 6;

    /// Creates a context.
    ///
    /// Unset fields default to uncramped displaystyle at normal size with no
    /// color or font overrides.
    #[builder]
    pub fn new(
        /// Math style
        math_style: Option<MathStyle>,
        /// Cramped flag
        cramped: Option<bool>,
        /// Color
        color: Option<String>,
        /// Size, 1 to 11
        size: Option<usize>,
        /// Font family override
        font_family: Option<FontFamily>,
        /// Weight override
        font_series: Option<FontSeries>,
        /// Shape override
        font_shape: Option<FontShape>,
        /// Minimum rule thickness in em
        min_rule_thickness: Option<f64>,
        /// Color for error atoms
        error_color: Option<String>,
    ) -> Self {
        let style = Style::new(
            math_style.unwrap_or(MathStyle::Display),
            cramped.unwrap_or(false),
        );
        let text_size = size.unwrap_or(Self::BASESIZE).clamp(1, 11);
        let size = size_at_style(text_size, style);
        Self {
            style,
            color,
            size,
            text_size,
            font_family,
            font_series,
            font_shape,
            size_multiplier: multiplier(size),
            min_rule_thickness: min_rule_thickness.unwrap_or(0.0),
            error_color: error_color.unwrap_or_else(|| "#cc0000".to_owned()),
        }
    }
}

impl Default for LayoutContext {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl LayoutContext {
    /// Root context for a parse made with `settings`.
    #[must_use]
    pub fn from_settings(settings: &Settings) -> Self {
        Self::builder()
            .math_style(if settings.display_mode {
                DISPLAY.math_style
            } else {
                TEXT.math_style
            })
            .min_rule_thickness(settings.min_rule_thickness)
            .error_color(settings.error_color.clone())
            .build()
    }

    /// The math style without the cramped flag.
    #[must_use]
    pub const fn math_style(&self) -> MathStyle {
        self.style.math_style
    }

    /// Whether the current style is cramped.
    #[must_use]
    pub const fn cramped(&self) -> bool {
        self.style.cramped
    }

    /// TeX font parameters for the current size.
    #[must_use]
    pub fn font_metrics(&self) -> &'static FontMetrics {
        get_global_metrics(self.size)
    }

    /// TeX font parameters for the current size, converted to em of the
    /// normal size. Layout works in these units throughout.
    #[must_use]
    pub fn metrics(&self) -> FontMetrics {
        self.font_metrics().scaled(self.size_multiplier)
    }

    /// Rule thickness in em of the normal size, honoring the configured
    /// minimum.
    #[must_use]
    pub fn rule_thickness(&self) -> f64 {
        (self.font_metrics().default_rule_thickness * self.size_multiplier)
            .max(self.min_rule_thickness)
    }

    /// Context for content set in `style`, keeping the text size.
    #[must_use]
    pub fn having_style(&self, style: Style) -> Self {
        if self.style == style {
            return self.clone();
        }
        let size = size_at_style(self.text_size, style);
        Self {
            style,
            size,
            size_multiplier: multiplier(size),
            ..self.clone()
        }
    }

    /// Cramped variant of the current style.
    #[must_use]
    pub fn having_cramped_style(&self) -> Self {
        self.having_style(self.style.cramp())
    }

    /// Context after a sizing command such as `\large`.
    ///
    /// Script styles are lifted to textstyle; display style is kept.
    #[must_use]
    pub fn having_size(&self, size: usize) -> Self {
        let size = size.clamp(1, 11);
        if self.size == size && self.text_size == size {
            return self.clone();
        }
        Self {
            style: self.style.text(),
            size,
            text_size: size,
            size_multiplier: multiplier(size),
            ..self.clone()
        }
    }

    /// Context at normal size in `style` (default: the text equivalent of
    /// the current style). Used for delimiters, which are sized in absolute
    /// terms.
    #[must_use]
    pub fn having_base_style(&self, style: Option<Style>) -> Self {
        let style = style.unwrap_or_else(|| self.style.text());
        let size = size_at_style(Self::BASESIZE, style);
        Self {
            style,
            size,
            text_size: Self::BASESIZE,
            size_multiplier: multiplier(size),
            ..self.clone()
        }
    }

    /// Context with a different color.
    #[must_use]
    pub fn with_color(&self, color: impl Into<String>) -> Self {
        Self {
            color: Some(color.into()),
            ..self.clone()
        }
    }

    /// Context with a font family override.
    #[must_use]
    pub fn with_font_family(&self, family: FontFamily) -> Self {
        Self {
            font_family: Some(family),
            ..self.clone()
        }
    }

    /// Context with a weight override.
    #[must_use]
    pub fn with_font_series(&self, series: FontSeries) -> Self {
        Self {
            font_series: Some(series),
            ..self.clone()
        }
    }

    /// Context with a shape override.
    #[must_use]
    pub fn with_font_shape(&self, shape: FontShape) -> Self {
        Self {
            font_shape: Some(shape),
            ..self.clone()
        }
    }

    /// Whether glue and symbols should use the tight spacing table.
    #[must_use]
    pub const fn is_tight(&self) -> bool {
        self.style.is_tight()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{SCRIPT, SCRIPTSCRIPT};

    #[test]
    fn default_is_uncramped_display() {
        let context = LayoutContext::default();
        assert_eq!(context.math_style(), MathStyle::Display);
        assert!(!context.cramped());
        assert_eq!(context.size, LayoutContext::BASESIZE);
        assert_eq!(context.size_multiplier, 1.0);
    }

    #[test]
    fn script_styles_shrink() {
        let context = LayoutContext::default();
        let script = context.having_style(SCRIPT);
        assert_eq!(script.size, 3);
        assert_eq!(script.size_multiplier, 0.7);
        let scriptscript = context.having_style(SCRIPTSCRIPT);
        assert_eq!(scriptscript.size, 1);
        assert_eq!(scriptscript.size_multiplier, 0.5);
    }

    #[test]
    fn sizing_resets_style() {
        let context = LayoutContext::default().having_style(SCRIPT);
        let large = context.having_size(7);
        assert_eq!(large.style, TEXT);
        assert_eq!(large.size_multiplier, 1.2);
    }

    #[test]
    fn derivation_leaves_original_untouched() {
        let context = LayoutContext::default();
        let red = context.with_color("red");
        assert_eq!(context.color, None);
        assert_eq!(red.color.as_deref(), Some("red"));
    }
}
