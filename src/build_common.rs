//! Box constructors shared by the layout functions.
//!
//! Vertical lists follow TeX's `\vbox`/`\vtop` model: children are listed
//! bottom to top, with kerns between them, and the list is anchored to the
//! baseline in one of several ways ([`VListParam`]). [`make_v_list`] turns
//! that description into absolute child offsets.

use bon::Builder;

use crate::box_tree::{BoxContent, LayoutBox, VListOffset};
use crate::context::MathContext;
use crate::font_metrics::get_character_metrics;
use crate::font_metrics_data::{CharacterMetrics, FontName};
use crate::layout_context::{FontFamily, FontSeries, FontShape, LayoutContext};
use crate::symbols::{Font, Mode};

/// Element of a vertical list.
#[derive(Debug, Builder)]
pub struct VListElem {
    /// The box
    pub elem: LayoutBox,
    /// Horizontal offset of the box within the list
    pub margin_left: Option<f64>,
}

/// Kern element of a vertical list.
#[derive(Debug, Clone, Copy)]
pub struct VListKern {
    /// Size of the kern
    pub size: f64,
}

impl From<f64> for VListKern {
    fn from(size: f64) -> Self {
        Self { size }
    }
}

/// Child of a vertical list, bottom to top.
#[derive(Debug)]
pub enum VListChild {
    /// A box
    Elem(Box<VListElem>),
    /// Space between boxes
    Kern(VListKern),
}

impl From<VListElem> for VListChild {
    fn from(elem: VListElem) -> Self {
        Self::Elem(Box::new(elem))
    }
}

impl From<LayoutBox> for VListChild {
    fn from(elem: LayoutBox) -> Self {
        Self::Elem(Box::new(VListElem {
            elem,
            margin_left: None,
        }))
    }
}

impl From<VListKern> for VListChild {
    fn from(kern: VListKern) -> Self {
        Self::Kern(kern)
    }
}

/// Element with its own baseline shift, for [`VListParam::IndividualShift`].
#[derive(Debug, Builder)]
pub struct VListElemAndShift {
    /// The box
    pub elem: LayoutBox,
    /// Distance the baseline is moved down
    pub shift: f64,
    /// Horizontal offset of the box within the list
    pub margin_left: Option<f64>,
}

/// How a vertical list is anchored to the baseline.
#[derive(Debug)]
pub enum VListParam {
    /// Each child's baseline is moved down by its own shift
    IndividualShift {
        /// Children, bottom to top
        children: Vec<VListElemAndShift>,
    },
    /// The top of the list is at `position_data`
    Top {
        /// Height of the top of the list
        position_data: f64,
        /// Children, bottom to top
        children: Vec<VListChild>,
    },
    /// The bottom of the list is `position_data` below the baseline
    Bottom {
        /// Depth of the bottom of the list
        position_data: f64,
        /// Children, bottom to top
        children: Vec<VListChild>,
    },
    /// The first child's baseline is moved down by `position_data`
    Shift {
        /// Downward shift of the first child
        position_data: f64,
        /// Children, bottom to top
        children: Vec<VListChild>,
    },
    /// The first child sits on the baseline
    FirstBaseline {
        /// Children, bottom to top
        children: Vec<VListChild>,
    },
}

/// Children of a vertical list and the position of its bottom edge.
#[derive(Debug)]
pub struct VListChildrenAndDepth {
    /// Children, bottom to top, with kerns inserted for individual shifts
    pub children: Vec<VListChild>,
    /// Position of the bottom of the list relative to the baseline
    pub depth: f64,
}

fn first_elem(children: &[VListChild]) -> Option<&LayoutBox> {
    children.iter().find_map(|child| match child {
        VListChild::Elem(elem) => Some(&elem.elem),
        VListChild::Kern(_) => None,
    })
}

/// Resolves the anchoring of a vertical list to the position of its bottom.
#[must_use]
pub fn get_v_list_children_and_depth(params: VListParam) -> VListChildrenAndDepth {
    match params {
        VListParam::IndividualShift {
            children: old_children,
        } => {
            let mut children: Vec<VListChild> = Vec::with_capacity(old_children.len() * 2);
            let mut depth = 0.0;
            let mut curr_pos = 0.0;
            let mut previous_size = 0.0;

            for (i, child) in old_children.into_iter().enumerate() {
                let elem_depth = child.elem.depth;
                if i == 0 {
                    depth = -child.shift - elem_depth;
                    curr_pos = depth;
                } else {
                    // Kern so that this child lands at its own shift
                    let diff = -child.shift - curr_pos - elem_depth;
                    children.push(VListKern::from(diff - previous_size).into());
                    curr_pos += diff;
                }
                previous_size = child.elem.total_height();
                children.push(
                    VListElem {
                        elem: child.elem,
                        margin_left: child.margin_left,
                    }
                    .into(),
                );
            }

            VListChildrenAndDepth { children, depth }
        }
        VListParam::Top {
            position_data,
            children,
        } => {
            // Lists are built upwards from the bottom
            let bottom = children.iter().fold(position_data, |bottom, child| {
                bottom
                    - match child {
                        VListChild::Kern(kern) => kern.size,
                        VListChild::Elem(elem) => elem.elem.total_height(),
                    }
            });
            VListChildrenAndDepth {
                children,
                depth: bottom,
            }
        }
        VListParam::Bottom {
            position_data,
            children,
        } => VListChildrenAndDepth {
            children,
            depth: -position_data,
        },
        VListParam::Shift {
            position_data,
            children,
        } => {
            let depth =
                first_elem(&children).map_or(-position_data, |elem| -elem.depth - position_data);
            VListChildrenAndDepth { children, depth }
        }
        VListParam::FirstBaseline { children } => {
            let depth = first_elem(&children).map_or(0.0, |elem| -elem.depth);
            VListChildrenAndDepth { children, depth }
        }
    }
}

/// Builds a vertical list box.
///
/// The list's height and depth are the extremes reached while stacking, so
/// kerns that overlap children do not extend the box.
#[must_use]
pub fn make_v_list(params: VListParam) -> LayoutBox {
    let VListChildrenAndDepth { children, depth } = get_v_list_children_and_depth(params);

    let mut min_pos = depth;
    let mut max_pos = depth;
    let mut curr_pos = depth;
    let mut width: f64 = 0.0;
    let mut offsets = Vec::with_capacity(children.len());
    let mut boxes = Vec::with_capacity(children.len());

    for child in children {
        match child {
            VListChild::Kern(kern) => curr_pos += kern.size,
            VListChild::Elem(child) => {
                let VListElem { elem, margin_left } = *child;
                let indent = margin_left.unwrap_or(0.0);
                offsets.push(VListOffset {
                    shift: curr_pos + elem.depth,
                    indent,
                });
                width = width.max(indent + elem.width);
                curr_pos += elem.total_height();
                boxes.push(elem);
            }
        }
        min_pos = min_pos.min(curr_pos);
        max_pos = max_pos.max(curr_pos);
    }

    LayoutBox {
        content: BoxContent::VList { offsets },
        width,
        height: max_pos,
        depth: -min_pos,
        children: boxes,
        ..LayoutBox::default()
    }
}

/// Raises `elem` by `shift` (a negative shift lowers it).
#[must_use]
pub fn make_shifted(elem: LayoutBox, shift: f64) -> LayoutBox {
    let class = elem.class;
    let italic = elem.italic;
    let mut shifted = make_v_list(VListParam::Shift {
        position_data: -shift,
        children: vec![elem.into()],
    });
    shifted.class = class;
    shifted.italic = italic;
    shifted
}

/// Lays boxes side by side.
///
/// The list carries the italic correction of its last child so that a
/// script after a one-letter group is placed like one after the letter.
#[must_use]
pub fn make_hlist(children: Vec<LayoutBox>) -> LayoutBox {
    let mut list = LayoutBox::with_content(BoxContent::HList);
    for child in &children {
        list.width += child.width;
        list.height = list.height.max(child.height);
        list.depth = list.depth.max(child.depth);
    }
    list.italic = children.last().map_or(0.0, |last| last.italic);
    if let [only] = children.as_slice() {
        list.skew = only.skew;
    }
    list.children = children;
    list
}

/// Horizontal space.
#[must_use]
pub fn make_glue(width: f64, stretch: f64, shrink: f64) -> LayoutBox {
    LayoutBox {
        content: BoxContent::Glue { stretch, shrink },
        width,
        ..LayoutBox::default()
    }
}

/// Rigid horizontal space.
#[must_use]
pub fn make_kern(width: f64) -> LayoutBox {
    make_glue(width, 0.0, 0.0)
}

/// Filled rectangle.
#[must_use]
pub fn make_rule(width: f64, height: f64, depth: f64) -> LayoutBox {
    LayoutBox {
        content: BoxContent::Rule,
        width,
        height,
        depth,
        ..LayoutBox::default()
    }
}

/// Horizontal line of the current rule thickness, or `thickness`.
#[must_use]
pub fn make_line(width: f64, context: &LayoutContext, thickness: Option<f64>) -> LayoutBox {
    let height = thickness
        .unwrap_or_else(|| context.rule_thickness())
        .max(context.min_rule_thickness);
    make_rule(width, height, 0.0)
}

/// Whether math mode sets `ch` in math italic when no font is selected.
#[must_use]
pub fn is_math_italic(ch: char) -> bool {
    ch.is_ascii_alphabetic()
        || ('\u{3b1}'..='\u{3c9}').contains(&ch)
        || matches!(
            ch,
            '\u{131}' | '\u{237}' | '\u{3d1}' | '\u{3d5}' | '\u{3d6}' | '\u{3f1}' | '\u{3f5}'
        )
}

/// Font for a symbol, from the font overrides in `context`.
#[must_use]
pub fn font_for(ctx: &MathContext, ch: char, mode: Mode, context: &LayoutContext) -> FontName {
    let bold = context.font_series == Some(FontSeries::Bold);
    match context.font_family {
        Some(FontFamily::Blackboard) if ch.is_ascii_uppercase() => return FontName::AmsRegular,
        Some(FontFamily::Calligraphic) if ch.is_ascii_uppercase() => {
            return FontName::CaligraphicRegular;
        }
        Some(FontFamily::SansSerif) => return FontName::SansSerifRegular,
        Some(FontFamily::Typewriter) => return FontName::TypewriterRegular,
        Some(FontFamily::Roman) => {
            return match (bold, context.font_shape) {
                (true, _) => FontName::MainBold,
                (false, Some(FontShape::Italic)) => FontName::MainItalic,
                _ => FontName::MainRegular,
            };
        }
        _ => {}
    }

    let ams = ctx
        .symbols
        .get(mode, ch.encode_utf8(&mut [0; 4]))
        .is_some_and(|info| info.font == Font::Ams);
    if ams {
        return FontName::AmsRegular;
    }
    if bold {
        return FontName::MainBold;
    }
    match (mode, context.font_shape) {
        (_, Some(FontShape::Italic)) if mode == Mode::Text => FontName::MainItalic,
        (Mode::Math, Some(FontShape::Upright)) => FontName::MainRegular,
        (Mode::Math, _) if is_math_italic(ch) => FontName::MathItalic,
        _ => FontName::MainRegular,
    }
}

/// Metrics of `ch`, falling back to the metrics of `M` for characters no
/// font covers.
fn character_metrics(ch: char, font: FontName, mode: Mode) -> CharacterMetrics {
    get_character_metrics(ch, font, mode)
        .or_else(|| get_character_metrics(ch, font, Mode::Text))
        .unwrap_or_else(|| CharacterMetrics::new(0.0, 0.0, 0.0, 0.0, 0.0))
}

/// Glyph box for one character in an explicit font.
///
/// Italic correction is added to the advance width, and recorded so that
/// scripts can be pulled back under it. Text fonts and upright fonts carry
/// none.
#[must_use]
pub fn make_glyph_in(ch: char, font: FontName, mode: Mode, context: &LayoutContext) -> LayoutBox {
    let metrics = character_metrics(ch, font, mode);
    let scale = context.size_multiplier;
    let italic = if mode == Mode::Text && font != FontName::MathItalic {
        0.0
    } else {
        metrics.italic * scale
    };

    let mut glyph = LayoutBox {
        content: BoxContent::Glyph {
            text: ch.to_string(),
        },
        width: metrics.width * scale + italic,
        height: metrics.height * scale,
        depth: metrics.depth * scale,
        italic,
        skew: metrics.skew * scale,
        is_tight: context.is_tight(),
        ..LayoutBox::default()
    };
    glyph.style.font = Some(font);
    glyph.style.scale = Some(scale);
    glyph.style.color.clone_from(&context.color);
    glyph
}

/// Glyph box for one character in the font selected by `context`.
#[must_use]
pub fn make_glyph(ctx: &MathContext, ch: char, mode: Mode, context: &LayoutContext) -> LayoutBox {
    make_glyph_in(ch, font_for(ctx, ch, mode, context), mode, context)
}

/// Horizontal list of glyphs for a string, e.g. the name of `\sin`.
#[must_use]
pub fn make_text(
    ctx: &MathContext,
    text: &str,
    mode: Mode,
    context: &LayoutContext,
) -> LayoutBox {
    let glyphs: Vec<LayoutBox> = text
        .chars()
        .map(|ch| make_glyph(ctx, ch, mode, context))
        .collect();
    if glyphs.len() == 1 {
        glyphs.into_iter().next().unwrap_or_default()
    } else {
        make_hlist(glyphs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::SCRIPT;

    fn strut(height: f64, depth: f64) -> LayoutBox {
        LayoutBox::strut(1.0, height, depth)
    }

    fn offsets(vlist: &LayoutBox) -> Vec<f64> {
        match &vlist.content {
            BoxContent::VList { offsets } => offsets.iter().map(|o| o.shift).collect(),
            _ => Vec::new(),
        }
    }

    #[test]
    fn first_baseline_keeps_first_child_on_baseline() {
        let vlist = make_v_list(VListParam::FirstBaseline {
            children: vec![strut(0.5, 0.25).into(), VListKern::from(0.1).into(), strut(0.3, 0.2).into()],
        });
        let shifts = offsets(&vlist);
        assert!(shifts[0].abs() < 1e-12);
        // 0.5 up to the top of the first child, 0.1 kern, 0.2 depth
        assert!((shifts[1] - 0.8).abs() < 1e-12);
        assert!((vlist.height - 1.1).abs() < 1e-12);
        assert!((vlist.depth - 0.25).abs() < 1e-12);
    }

    #[test]
    fn shift_moves_first_child_down() {
        let vlist = make_v_list(VListParam::Shift {
            position_data: 0.3,
            children: vec![strut(0.5, 0.1).into()],
        });
        assert!((offsets(&vlist)[0] + 0.3).abs() < 1e-12);
        assert!((vlist.height - 0.2).abs() < 1e-12);
        assert!((vlist.depth - 0.4).abs() < 1e-12);
    }

    #[test]
    fn top_anchors_the_top_edge() {
        let vlist = make_v_list(VListParam::Top {
            position_data: 0.7,
            children: vec![strut(0.4, 0.1).into(), VListKern::from(0.2).into(), strut(0.3, 0.0).into()],
        });
        assert!((vlist.height - 0.7).abs() < 1e-12);
        assert!((vlist.depth - 0.3).abs() < 1e-12);
    }

    #[test]
    fn individual_shifts_are_honored() {
        let vlist = make_v_list(VListParam::IndividualShift {
            children: vec![
                VListElemAndShift::builder().elem(strut(0.3, 0.1)).shift(0.2).build(),
                VListElemAndShift::builder().elem(strut(0.3, 0.1)).shift(-0.6).build(),
            ],
        });
        let shifts = offsets(&vlist);
        assert!((shifts[0] + 0.2).abs() < 1e-12);
        assert!((shifts[1] - 0.6).abs() < 1e-12);
    }

    #[test]
    fn hlist_sums_widths_and_takes_extremes() {
        let list = make_hlist(vec![strut(0.5, 0.0), strut(0.2, 0.3)]);
        assert!((list.width - 2.0).abs() < 1e-12);
        assert!((list.height - 0.5).abs() < 1e-12);
        assert!((list.depth - 0.3).abs() < 1e-12);
    }

    #[test]
    fn letters_use_math_italic_with_italic_correction() {
        let ctx = MathContext::default();
        let context = LayoutContext::default();
        let f = make_glyph(&ctx, 'f', Mode::Math, &context);
        assert_eq!(f.style.font, Some(FontName::MathItalic));
        assert!(f.italic > 0.0);
        let one = make_glyph(&ctx, '1', Mode::Math, &context);
        assert_eq!(one.style.font, Some(FontName::MainRegular));
        let text = make_glyph(&ctx, 'f', Mode::Text, &context);
        assert_eq!(text.style.font, Some(FontName::MainRegular));
        assert!(text.italic.abs() < 1e-12);
    }

    #[test]
    fn script_glyphs_are_scaled() {
        let ctx = MathContext::default();
        let normal = make_glyph(&ctx, 'x', Mode::Math, &LayoutContext::default());
        let script = make_glyph(
            &ctx,
            'x',
            Mode::Math,
            &LayoutContext::default().having_style(SCRIPT),
        );
        assert!((script.height - normal.height * 0.7).abs() < 1e-9);
        assert!(script.is_tight);
    }

    #[test]
    fn font_overrides_pick_the_family() {
        let ctx = MathContext::default();
        let context = LayoutContext::default().with_font_family(FontFamily::Blackboard);
        assert_eq!(font_for(&ctx, 'R', Mode::Math, &context), FontName::AmsRegular);
        let context = LayoutContext::default().with_font_series(FontSeries::Bold);
        assert_eq!(font_for(&ctx, 'v', Mode::Math, &context), FontName::MainBold);
    }
}
