//! Delimiter sizing.
//!
//! A delimiter that has to cover some height is chosen from a sequence of
//! candidates: the Main-Regular glyph at scriptscript, script and text size,
//! the four Size fonts, and finally a stacked delimiter of arbitrary height.
//! Stacked delimiters and radicals taller than the fonts are emitted as
//! [`BoxContent::Stretchy`] boxes for the renderer to draw.

use phf::{Set, phf_set};

use crate::box_tree::{BoxContent, LayoutBox};
use crate::build_common::{make_glyph_in, make_kern};
use crate::context::MathContext;
use crate::font_metrics::get_character_metrics;
use crate::font_metrics_data::FontName;
use crate::layout_context::LayoutContext;
use crate::style::{SCRIPT, SCRIPTSCRIPT, Style, TEXT};
use crate::symbols::Mode;

const SIZE_TO_MAX_HEIGHT: [f64; 5] = [0.0, 1.2, 1.8, 2.4, 3.0];

/// Total height covered by the delimiter fonts Size1 to Size4.
#[must_use]
pub fn size_to_max_height(size: usize) -> f64 {
    SIZE_TO_MAX_HEIGHT[size.min(SIZE_TO_MAX_HEIGHT.len() - 1)]
}

/// Width of the null delimiter `.`, TeX's `\nulldelimiterspace` (1.2pt)
pub const NULL_DELIMITER_SPACE: f64 = 0.12;

/// One candidate of a sizing sequence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DelimiterType {
    /// Main-Regular glyph set in the given style
    Small(Style),
    /// Glyph from one of the Size1 to Size4 fonts
    Large(usize),
    /// Built to any height
    Stack,
}

/// Radical sign sized for a body.
#[derive(Debug)]
pub struct SqrtImage {
    /// The sign, including the vinculum over the body
    pub image: LayoutBox,
    /// Thickness of the vinculum
    pub rule_width: f64,
    /// Space taken by the sign before the body starts
    pub advance_width: f64,
}

/// Character drawn for a delimiter name such as `\langle` or `(`.
#[must_use]
pub fn delimiter_char(ctx: &MathContext, delim: &str) -> Option<char> {
    if delim == "." {
        return None;
    }
    ctx.symbols
        .get_math(delim)
        .and_then(|info| info.replace)
        .or_else(|| {
            let mut chars = delim.chars();
            match (chars.next(), chars.next()) {
                (Some(ch), None) => Some(ch),
                _ => None,
            }
        })
}

fn normalize(delim: &str) -> &str {
    match delim {
        "<" | "\\lt" | "\u{27e8}" => "\\langle",
        ">" | "\\gt" | "\u{27e9}" => "\\rangle",
        _ => delim,
    }
}

fn delim_type_to_font(delimiter_type: DelimiterType) -> FontName {
    match delimiter_type {
        DelimiterType::Small(_) => FontName::MainRegular,
        DelimiterType::Large(size) => FontName::delimiter_size(size),
        DelimiterType::Stack => FontName::Size4Regular,
    }
}

fn symbol_height(ch: char, font: FontName) -> f64 {
    get_character_metrics(ch, font, Mode::Math).map_or(0.0, |m| m.height + m.depth)
}

/// Picks the first candidate of `sequence` covering `height`.
///
/// Smaller styles start earlier in the sequence, so a script-size
/// expression may use a scriptscript-size parenthesis.
fn traverse_sequence(
    ch: char,
    height: f64,
    sequence: &[DelimiterType],
    context: &LayoutContext,
) -> DelimiterType {
    let size_level = context.math_style().level().saturating_sub(1);
    let start = (3 - size_level.min(3)).min(2);
    for &delim_type in sequence.iter().skip(start) {
        if delim_type == DelimiterType::Stack {
            break;
        }
        let mut height_depth = symbol_height(ch, delim_type_to_font(delim_type));
        if let DelimiterType::Small(style) = delim_type {
            height_depth *= context.having_base_style(Some(style)).size_multiplier;
        }
        if height_depth > height {
            return delim_type;
        }
    }
    sequence.last().copied().unwrap_or(DelimiterType::Stack)
}

/// Moves a delimiter designed for the normal-size axis onto the axis of
/// the current size.
fn center_on_axis(mut delim: LayoutBox, context: &LayoutContext) -> LayoutBox {
    let base_axis = context.having_base_style(Some(TEXT)).metrics().axis_height;
    let shift = base_axis - context.metrics().axis_height;
    delim.height -= shift;
    delim.depth += shift;
    delim
}

/// Main-Regular delimiter drawn at the size of `style`.
#[must_use]
pub fn make_small_delim(ch: char, style: Style, center: bool, context: &LayoutContext) -> LayoutBox {
    let glyph = make_glyph_in(
        ch,
        FontName::MainRegular,
        Mode::Math,
        &context.having_base_style(Some(style)),
    );
    if center {
        center_on_axis(glyph, context)
    } else {
        glyph
    }
}

/// Delimiter from one of the Size1 to Size4 fonts, always at text size.
#[must_use]
pub fn make_large_delim(ch: char, size: usize, center: bool, context: &LayoutContext) -> LayoutBox {
    let glyph = make_glyph_in(
        ch,
        FontName::delimiter_size(size),
        Mode::Math,
        &context.having_base_style(Some(TEXT)),
    );
    if center {
        center_on_axis(glyph, context)
    } else {
        glyph
    }
}

/// Delimiter of total height at least `height_total`, centered on the axis.
#[must_use]
pub fn make_stacked_delim(
    delim: &str,
    ch: char,
    height_total: f64,
    center: bool,
    context: &LayoutContext,
) -> LayoutBox {
    let width = get_character_metrics(ch, FontName::Size4Regular, Mode::Math)
        .or_else(|| get_character_metrics(ch, FontName::Size1Regular, Mode::Math))
        .map_or(0.5, |m| m.width);
    let axis = if center {
        context.metrics().axis_height
    } else {
        context.having_base_style(Some(TEXT)).metrics().axis_height
    };
    LayoutBox {
        content: BoxContent::Stretchy {
            name: delim.to_owned(),
        },
        width,
        height: height_total / 2.0 + axis,
        depth: height_total / 2.0 - axis,
        ..LayoutBox::default()
    }
}

fn sequence_for(delim: &str) -> &'static [DelimiterType] {
    if STACK_NEVER_DELIMITERS.contains(delim) {
        STACK_NEVER_DELIMITER_SEQUENCE
    } else if STACK_LARGE_DELIMITERS.contains(delim) {
        STACK_LARGE_DELIMITER_SEQUENCE
    } else {
        STACK_ALWAYS_DELIMITER_SEQUENCE
    }
}

/// Delimiter of size 1 to 4, for `\big` and friends. Never centered
/// differently from the glyph's own design.
#[must_use]
pub fn sized_delim(ctx: &MathContext, delim: &str, size: usize, context: &LayoutContext) -> LayoutBox {
    let delim = normalize(delim);
    let Some(ch) = delimiter_char(ctx, delim) else {
        return make_kern(NULL_DELIMITER_SPACE * context.size_multiplier);
    };
    if STACK_ALWAYS_DELIMITERS.contains(delim) {
        make_stacked_delim(delim, ch, size_to_max_height(size), false, context)
    } else {
        make_large_delim(ch, size.clamp(1, 4), false, context)
    }
}

/// Delimiter covering `height`, chosen from the sequence for `delim`.
#[must_use]
pub fn custom_sized_delim(
    ctx: &MathContext,
    delim: &str,
    height: f64,
    center: bool,
    context: &LayoutContext,
) -> LayoutBox {
    let delim = normalize(delim);
    let Some(ch) = delimiter_char(ctx, delim) else {
        return make_kern(NULL_DELIMITER_SPACE * context.size_multiplier);
    };
    match traverse_sequence(ch, height, sequence_for(delim), context) {
        DelimiterType::Small(style) => make_small_delim(ch, style, center, context),
        DelimiterType::Large(size) => make_large_delim(ch, size, center, context),
        DelimiterType::Stack => make_stacked_delim(delim, ch, height, center, context),
    }
}

/// Delimiter for `\left`/`\right` around content of the given height and
/// depth, following TeX's `make_left_right`.
#[must_use]
pub fn left_right_delim(
    ctx: &MathContext,
    delim: &str,
    height: f64,
    depth: f64,
    context: &LayoutContext,
) -> LayoutBox {
    let metrics = context.metrics();
    let axis_height = metrics.axis_height;

    // \delimiterfactor and \delimitershortfall from plain TeX
    let delimiter_factor = 901.0;
    let delimiter_extend = 5.0 / metrics.pt_per_em;

    let max_dist_from_axis = (height - axis_height).max(depth + axis_height);
    let total_height = (max_dist_from_axis / 500.0 * delimiter_factor)
        .max(2.0f64.mul_add(max_dist_from_axis, -delimiter_extend));

    custom_sized_delim(ctx, delim, total_height, true, context)
}

/// Radical sign tall enough for `height`.
#[must_use]
pub fn make_sqrt_image(height: f64, context: &LayoutContext) -> SqrtImage {
    let delimiter_type = traverse_sequence(
        '\u{221a}',
        height,
        STACK_LARGE_DELIMITER_SEQUENCE,
        context,
    );
    let sqrt_rule_thickness = context.having_base_style(Some(TEXT)).metrics().sqrt_rule_thickness;
    let extra_vinculum = (context.min_rule_thickness - sqrt_rule_thickness).max(0.0);

    let (name, tex_height, advance_width, scale) = match delimiter_type {
        DelimiterType::Small(style) => {
            let scale = context.having_base_style(Some(style)).size_multiplier;
            ("sqrtMain".to_owned(), (1.0 + extra_vinculum) * scale, 0.833 * scale, scale)
        }
        DelimiterType::Large(size) => (
            format!("sqrtSize{size}"),
            size_to_max_height(size) + extra_vinculum,
            1.0,
            1.0,
        ),
        DelimiterType::Stack => ("sqrtTall".to_owned(), height + extra_vinculum, 1.056, 1.0),
    };

    SqrtImage {
        image: LayoutBox {
            content: BoxContent::Stretchy { name },
            width: advance_width,
            height: tex_height,
            ..LayoutBox::default()
        },
        rule_width: (sqrt_rule_thickness + extra_vinculum) * scale,
        advance_width,
    }
}

const STACK_LARGE_DELIMITERS: Set<&str> = phf_set!(
    "(", "\\lparen", ")", "\\rparen", "[", "\\lbrack", "]", "\\rbrack", "\\{", "\\lbrace", "\\}",
    "\\rbrace", "\\lfloor", "\\rfloor", "\u{230a}", "\u{230b}", "\\lceil", "\\rceil", "\u{2308}",
    "\u{2309}", "\\surd",
);

const STACK_ALWAYS_DELIMITERS: Set<&str> = phf_set!(
    "\\uparrow",
    "\\downarrow",
    "\\updownarrow",
    "\\Uparrow",
    "\\Downarrow",
    "\\Updownarrow",
    "|",
    "\\|",
    "\\vert",
    "\\Vert",
    "\\lvert",
    "\\rvert",
    "\\lVert",
    "\\rVert",
);

const STACK_NEVER_DELIMITERS: Set<&str> = phf_set!(
    "<",
    ">",
    "\\langle",
    "\\rangle",
    "/",
    "\\backslash",
    "\\lt",
    "\\gt",
);

const STACK_NEVER_DELIMITER_SEQUENCE: &[DelimiterType] = &[
    DelimiterType::Small(SCRIPTSCRIPT),
    DelimiterType::Small(SCRIPT),
    DelimiterType::Small(TEXT),
    DelimiterType::Large(1),
    DelimiterType::Large(2),
    DelimiterType::Large(3),
    DelimiterType::Large(4),
];

const STACK_ALWAYS_DELIMITER_SEQUENCE: &[DelimiterType] = &[
    DelimiterType::Small(SCRIPTSCRIPT),
    DelimiterType::Small(SCRIPT),
    DelimiterType::Small(TEXT),
    DelimiterType::Stack,
];

const STACK_LARGE_DELIMITER_SEQUENCE: &[DelimiterType] = &[
    DelimiterType::Small(SCRIPTSCRIPT),
    DelimiterType::Small(SCRIPT),
    DelimiterType::Small(TEXT),
    DelimiterType::Large(1),
    DelimiterType::Large(2),
    DelimiterType::Large(3),
    DelimiterType::Large(4),
    DelimiterType::Stack,
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_content_gets_the_text_glyph() {
        let ctx = MathContext::default();
        let context = LayoutContext::default();
        let paren = left_right_delim(&ctx, "(", 0.43, 0.0, &context);
        assert_eq!(paren.glyph_text(), Some("("));
        assert_eq!(paren.style.font, Some(FontName::MainRegular));
    }

    #[test]
    fn tall_content_gets_a_larger_delimiter() {
        let ctx = MathContext::default();
        let context = LayoutContext::default();
        let paren = left_right_delim(&ctx, "(", 1.5, 1.0, &context);
        assert!(paren.total_height() >= 2.0 * 1.25 * 901.0 / 1000.0 - 1e-9);
        let huge = left_right_delim(&ctx, "(", 5.0, 5.0, &context);
        assert!(matches!(huge.content, BoxContent::Stretchy { .. }));
        assert!(huge.total_height() > 9.0);
    }

    #[test]
    fn null_delimiter_is_a_kern() {
        let ctx = MathContext::default();
        let dot = left_right_delim(&ctx, ".", 1.0, 1.0, &LayoutContext::default());
        assert!(dot.is_glue());
        assert!((dot.width - NULL_DELIMITER_SPACE).abs() < 1e-12);
    }

    #[test]
    fn big_selects_size_fonts() {
        let ctx = MathContext::default();
        let context = LayoutContext::default();
        let big = sized_delim(&ctx, "(", 1, &context);
        assert_eq!(big.style.font, Some(FontName::Size1Regular));
        let bigg = sized_delim(&ctx, "\\langle", 4, &context);
        assert_eq!(bigg.style.font, Some(FontName::Size4Regular));
        let vert = sized_delim(&ctx, "|", 2, &context);
        assert!((vert.total_height() - 1.8).abs() < 1e-9);
    }

    #[test]
    fn sqrt_grows_with_its_body() {
        let context = LayoutContext::default();
        let small = make_sqrt_image(0.8, &context);
        let large = make_sqrt_image(2.5, &context);
        assert!(large.image.height > small.image.height);
        assert!(small.rule_width > 0.0);
    }
}
