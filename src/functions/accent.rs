//! Math accents: `\hat`, `\vec`, ..., and the stretchy `\widehat`,
//! `\widetilde`, `\overrightarrow`, `\overleftarrow`.
//!
//! Accents are handled in the TeXbook pg. 443, rule 12.

use phf::{Map, phf_map};

use crate::atom::{Atom, AtomId, AtomKind, Limits};
use crate::box_tree::{BoxContent, LayoutBox};
use crate::build_common::{VListChild, VListElem, VListKern, VListParam, make_glyph_in, make_v_list};
use crate::build_layout::{LayoutBuilder, is_symbol_kind};
use crate::context::MathContext;
use crate::define_function::{
    Argument, FunctionContext, FunctionDefSpec, FunctionPropSpec, take_atoms,
};
use crate::font_metrics_data::FontName;
use crate::functions::supsub;
use crate::layout_context::LayoutContext;
use crate::symbols::Mode;
use crate::types::{ArgSpec, ArgType, ErrorCode, ParseError};

/// Accent glyph and whether it stretches over the body.
const MATH_ACCENTS: Map<&'static str, (char, bool)> = phf_map! {
    "\\hat" => ('\u{2c6}', false),
    "\\check" => ('\u{2c7}', false),
    "\\tilde" => ('\u{2dc}', false),
    "\\acute" => ('\u{2ca}', false),
    "\\grave" => ('\u{2cb}', false),
    "\\dot" => ('\u{2d9}', false),
    "\\ddot" => ('\u{a8}', false),
    "\\breve" => ('\u{2d8}', false),
    "\\bar" => ('\u{2c9}', false),
    "\\vec" => ('\u{20d7}', false),
    "\\mathring" => ('\u{2da}', false),
    "\\widehat" => ('\u{2c6}', true),
    "\\widetilde" => ('\u{2dc}', true),
    "\\overrightarrow" => ('\u{2192}', true),
    "\\overleftarrow" => ('\u{2190}', true),
};

/// Accent command for a glyph, preferring the narrow form.
#[must_use]
pub fn accent_command(accent: char, wide: bool) -> Option<&'static str> {
    MATH_ACCENTS
        .entries()
        .filter(|(_, (ch, is_wide))| *ch == accent && *is_wide == wide)
        .map(|(name, _)| *name)
        .min()
}

/// Name and height of the shape drawn for a stretchy accent.
fn stretchy_shape(accent: char) -> (&'static str, f64) {
    match accent {
        '\u{2dc}' => ("widetilde", 0.26),
        '\u{2192}' => ("overrightarrow", 0.522),
        '\u{2190}' => ("overleftarrow", 0.522),
        _ => ("widehat", 0.24),
    }
}

/// Registers the accent commands.
pub fn define_accent(ctx: &mut MathContext) {
    let names: Vec<&'static str> = MATH_ACCENTS.keys().copied().collect();
    ctx.define_function(FunctionDefSpec {
        names: &names,
        props: FunctionPropSpec {
            args: vec![ArgSpec::required(ArgType::Auto)],
            ..Default::default()
        },
        handler: |context: FunctionContext<'_>, mut args: Vec<Option<Argument>>| {
            let body = take_atoms(&mut args, 0);
            let (accent, wide) = MATH_ACCENTS
                .get(context.func_name)
                .copied()
                .ok_or(ErrorCode::UnknownCommand)?;
            // Scripts on an accented character go on the character
            let character = match body.as_slice() {
                [id] => context
                    .tree
                    .get(*id)
                    .is_some_and(|atom| is_symbol_kind(&atom.kind) && atom.single_char().is_some()),
                _ => false,
            };
            let atom = Atom::new(AtomKind::Accent { body, accent, wide }, context.mode);
            Ok(if character {
                atom.with_limits(Limits::Accent)
            } else {
                atom
            })
        },
    });
}

/// Lays out an accent over `body`.
pub fn layout(
    builder: &mut LayoutBuilder<'_>,
    body: &[AtomId],
    accent: char,
    wide: bool,
    context: &LayoutContext,
) -> Result<LayoutBox, ParseError> {
    let base = builder.build_group(body, &context.having_cramped_style())?;
    let skew = if builder.is_character_list(body) {
        base.skew
    } else {
        0.0
    };
    Ok(stack_accent(base, accent, wide, skew, context))
}

/// Lays out an accent whose scripts attach to the accented character, so
/// the scripts are placed as if the accent were not there.
pub fn layout_with_scripts(
    builder: &mut LayoutBuilder<'_>,
    atom: &Atom,
    body: &[AtomId],
    accent: char,
    wide: bool,
    context: &LayoutContext,
) -> Result<LayoutBox, ParseError> {
    let base = builder.build_group(body, &context.having_cramped_style())?;
    let skew = base.skew;
    let mut scripted = supsub::layout(builder, atom, base.clone(), context)?;
    let accented = stack_accent(base, accent, wide, skew, context);

    // Swap the accented box in for the nucleus
    scripted.height = scripted.height.max(accented.height);
    match scripted.children.first_mut() {
        Some(nucleus) if scripted.content == BoxContent::HList => *nucleus = accented,
        _ => return Ok(accented),
    }
    Ok(scripted)
}

fn stack_accent(
    base: LayoutBox,
    accent: char,
    wide: bool,
    skew: f64,
    context: &LayoutContext,
) -> LayoutBox {
    let base_width = base.width;
    let base_italic = base.italic;

    let mut list = if wide {
        let (name, height) = stretchy_shape(accent);
        let shape = LayoutBox {
            content: BoxContent::Stretchy {
                name: name.to_owned(),
            },
            width: (base_width - 2.0 * skew.max(0.0)).max(0.0),
            height: height * context.size_multiplier,
            ..LayoutBox::default()
        };
        make_v_list(VListParam::FirstBaseline {
            children: vec![
                base.into(),
                VListElem {
                    elem: shape,
                    margin_left: Some(2.0 * skew.max(0.0)),
                }
                .into(),
            ],
        })
    } else {
        // Clearance between the body and the accent
        let clearance = base.height.min(context.metrics().x_height);

        // The accent's italic correction would only push it sideways
        let mut glyph = make_glyph_in(accent, FontName::MainRegular, Mode::Math, context);
        glyph.width -= glyph.italic;
        glyph.italic = 0.0;

        // Centered over the body, then moved over by the skew
        let indent = (base_width - glyph.width) / 2.0 + skew;
        make_v_list(VListParam::FirstBaseline {
            children: vec![
                base.into(),
                VListChild::Kern(VListKern::from(-clearance)),
                VListElem {
                    elem: glyph,
                    margin_left: Some(indent),
                }
                .into(),
            ],
        })
    };

    // The accent does not widen the body
    list.width = base_width;
    list.italic = base_italic;
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{parse, render_to_box};
    use crate::types::Settings;

    fn build(source: &str) -> LayoutBox {
        render_to_box(&MathContext::default(), source, &Settings::default()).unwrap()
    }

    #[test]
    fn accent_sits_on_the_body() {
        let a = build("a");
        let hat = build("\\hat{a}");
        assert!(hat.height > a.height);
        assert!((hat.width - a.width).abs() < 1e-9);
        let glyphs: Vec<&str> = hat.iter().filter_map(LayoutBox::glyph_text).collect();
        assert_eq!(glyphs, ["a", "\u{2c6}"]);
    }

    #[test]
    fn tall_bodies_use_x_height_clearance() {
        let hat = build("\\hat{A}");
        let BoxContent::VList { offsets } = &hat.children[0].content else {
            panic!("expected a vertical list");
        };
        // The accent is lowered by the x-height (0.431em), not the height of A
        let a_height = build("A").height;
        assert!(offsets[1].shift < a_height);
    }

    #[test]
    fn wide_accents_stretch() {
        let root = build("\\widehat{abc}");
        let shape = root
            .iter()
            .find(|b| matches!(b.content, BoxContent::Stretchy { .. }))
            .unwrap();
        assert_eq!(shape.content, BoxContent::Stretchy { name: "widehat".to_owned() });
        assert!(shape.width > 1.0);
    }

    #[test]
    fn single_characters_take_scripts_inside() {
        let ctx = MathContext::default();
        let parsed = parse(&ctx, "\\hat{x}^2", &Settings::default()).unwrap();
        let atom = parsed.tree.get(parsed.root[0]).unwrap();
        assert_eq!(atom.limits, Limits::Accent);
        let parsed = parse(&ctx, "\\hat{xy}^2", &Settings::default()).unwrap();
        assert_eq!(parsed.tree.get(parsed.root[0]).unwrap().limits, Limits::None);

        // The superscript sits where it would on a bare x
        let plain = build("x^2");
        let accented = build("\\hat{x}^2");
        assert!((plain.width - accented.width).abs() < 1e-9);
    }

    #[test]
    fn commands_round_trip_through_the_table() {
        assert_eq!(accent_command('\u{2c6}', false), Some("\\hat"));
        assert_eq!(accent_command('\u{2c6}', true), Some("\\widehat"));
        assert_eq!(accent_command('x', false), None);
    }
}
