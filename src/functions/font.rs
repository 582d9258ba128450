//! Math font commands: `\mathrm`, `\mathbf`, `\mathbb`, ... and the
//! old-style switches `\rm`, `\bf`, `\it`, `\sf`, `\tt` and `\cal`.

use phf::{Map, phf_map};

use crate::atom::{Atom, AtomId, AtomKind};
use crate::box_tree::LayoutBox;
use crate::build_layout::LayoutBuilder;
use crate::context::MathContext;
use crate::define_function::{
    Argument, FunctionContext, FunctionDefSpec, FunctionPropSpec, take_atoms,
};
use crate::layout_context::{FontFamily, FontSeries, FontShape, LayoutContext};
use crate::types::{ArgSpec, ArgType, ErrorCode, ParseError};

/// Family, weight and shape set by a font command. `None` leaves that
/// property as inherited.
pub type FontOverrides = (Option<FontFamily>, Option<FontSeries>, Option<FontShape>);

const UPRIGHT: (Option<FontSeries>, Option<FontShape>) =
    (Some(FontSeries::Medium), Some(FontShape::Upright));

/// Math font commands taking one argument.
pub const MATH_FONTS: Map<&'static str, FontOverrides> = phf_map! {
    "\\mathrm" => (Some(FontFamily::Roman), UPRIGHT.0, UPRIGHT.1),
    "\\mathit" => (Some(FontFamily::Roman), Some(FontSeries::Medium), Some(FontShape::Italic)),
    "\\mathbf" => (Some(FontFamily::Roman), Some(FontSeries::Bold), Some(FontShape::Upright)),
    "\\mathsf" => (Some(FontFamily::SansSerif), UPRIGHT.0, UPRIGHT.1),
    "\\mathtt" => (Some(FontFamily::Typewriter), UPRIGHT.0, UPRIGHT.1),
    "\\mathcal" => (Some(FontFamily::Calligraphic), UPRIGHT.0, UPRIGHT.1),
    "\\mathbb" => (Some(FontFamily::Blackboard), UPRIGHT.0, UPRIGHT.1),
    "\\boldsymbol" => (None, Some(FontSeries::Bold), None),
    "\\mathnormal" => (None, Some(FontSeries::Medium), Some(FontShape::Italic)),
};

/// Switches that apply to the rest of the group, with the command they
/// are equivalent to.
const OLD_FONTS: Map<&'static str, &'static str> = phf_map! {
    "\\rm" => "\\mathrm",
    "\\it" => "\\mathit",
    "\\bf" => "\\mathbf",
    "\\sf" => "\\mathsf",
    "\\tt" => "\\mathtt",
    "\\cal" => "\\mathcal",
};

fn font_atom(context: &FunctionContext<'_>, overrides: FontOverrides, body: Vec<AtomId>) -> Atom {
    let (family, series, shape) = overrides;
    let kind = AtomKind::Font {
        body,
        family,
        series,
        shape,
    };
    Atom::new(kind, context.mode)
}

/// Registers the math font commands.
pub fn define_font(ctx: &mut MathContext) {
    let names: Vec<&'static str> = MATH_FONTS.keys().copied().collect();
    ctx.define_function(FunctionDefSpec {
        names: &names,
        props: FunctionPropSpec {
            args: vec![ArgSpec::required(ArgType::Math)],
            ..Default::default()
        },
        handler: |context: FunctionContext<'_>, mut args: Vec<Option<Argument>>| {
            let overrides = MATH_FONTS
                .get(context.func_name)
                .copied()
                .ok_or(ErrorCode::UnknownCommand)?;
            let body = take_atoms(&mut args, 0);
            Ok(font_atom(&context, overrides, body))
        },
    });

    let names: Vec<&'static str> = OLD_FONTS.keys().copied().collect();
    ctx.define_function(FunctionDefSpec {
        names: &names,
        props: FunctionPropSpec {
            rest_of_group: true,
            ..Default::default()
        },
        handler: |context: FunctionContext<'_>, mut args: Vec<Option<Argument>>| {
            let overrides = OLD_FONTS
                .get(context.func_name)
                .and_then(|name| MATH_FONTS.get(name))
                .copied()
                .ok_or(ErrorCode::UnknownCommand)?;
            let body = take_atoms(&mut args, 0);
            Ok(font_atom(&context, overrides, body))
        },
    });
}

/// Whether `name` is one of the switches that take the rest of the group.
#[must_use]
pub fn is_old_font_command(name: &str) -> bool {
    OLD_FONTS.contains_key(name)
}

/// The single-argument command equivalent to `overrides`, if any.
#[must_use]
pub fn math_font_command(overrides: FontOverrides) -> Option<&'static str> {
    MATH_FONTS
        .entries()
        .find(|(_, entry)| **entry == overrides)
        .map(|(name, _)| *name)
}

/// Lays out `body` with the font overrides applied.
pub fn layout(
    builder: &mut LayoutBuilder<'_>,
    body: &[AtomId],
    overrides: FontOverrides,
    context: &LayoutContext,
) -> Result<LayoutBox, ParseError> {
    let (family, series, shape) = overrides;
    let mut inner = context.clone();
    if let Some(family) = family {
        inner = inner.with_font_family(family);
    }
    if let Some(series) = series {
        inner = inner.with_font_series(series);
    }
    if let Some(shape) = shape {
        inner = inner.with_font_shape(shape);
    }
    builder.build_group(body, &inner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{parse, render_to_box};
    use crate::font_metrics_data::FontName;
    use crate::types::Settings;
    use pretty_assertions::assert_eq;

    fn fonts(source: &str) -> Vec<Option<FontName>> {
        render_to_box(&MathContext::default(), source, &Settings::default())
            .unwrap()
            .iter()
            .filter(|b| b.is_glyph())
            .map(|b| b.style.font)
            .collect()
    }

    #[test]
    fn families_select_fonts() {
        assert_eq!(
            fonts("x\\mathrm{x}\\mathbf{x}\\mathit{x}"),
            [
                Some(FontName::MathItalic),
                Some(FontName::MainRegular),
                Some(FontName::MainBold),
                Some(FontName::MainItalic),
            ]
        );
        assert_eq!(
            fonts("\\mathbb{R}\\mathcal{L}\\mathsf{a}\\mathtt{a}"),
            [
                Some(FontName::AmsRegular),
                Some(FontName::CaligraphicRegular),
                Some(FontName::SansSerifRegular),
                Some(FontName::TypewriterRegular),
            ]
        );
    }

    #[test]
    fn inner_font_wins() {
        assert_eq!(fonts("\\mathbf{\\mathrm{x}}"), [Some(FontName::MainRegular)]);
        assert_eq!(fonts("\\boldsymbol{x}"), [Some(FontName::MainBold)]);
    }

    #[test]
    fn old_style_switches_take_the_rest_of_the_group() {
        let ctx = MathContext::default();
        let parsed = parse(&ctx, "a{\\bf xy}b", &Settings::default()).unwrap();
        let group = parsed.tree.children(parsed.root[1]);
        let font = parsed.tree.get(group[0]).unwrap();
        assert!(matches!(
            &font.kind,
            AtomKind::Font { body, series: Some(FontSeries::Bold), .. } if body.len() == 2
        ));
        assert_eq!(
            fonts("{\\bf x}x"),
            [Some(FontName::MainBold), Some(FontName::MathItalic)]
        );
    }

    #[test]
    fn overrides_map_back_to_a_command() {
        let bold = MATH_FONTS.get("\\mathbf").copied().unwrap();
        assert_eq!(math_font_command(bold), Some("\\mathbf"));
        assert_eq!(math_font_command((None, None, None)), None);
    }
}
