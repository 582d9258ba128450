//! Large operators and named functions.
//!
//! Symbol operators such as `\sum` come from the symbol table; this module
//! registers the named functions (`\sin`, `\lim`, ...) and `\mathop`, and
//! lays out all three. Operators are handled in the TeXbook pg. 443-444,
//! rule 13(a).

use crate::atom::{Atom, AtomId, AtomKind, Limits};
use crate::box_tree::LayoutBox;
use crate::build_common::{make_glyph_in, make_hlist, make_shifted};
use crate::build_layout::LayoutBuilder;
use crate::context::MathContext;
use crate::define_function::{
    Argument, FunctionContext, FunctionDefSpec, FunctionPropSpec, take_atoms,
};
use crate::font_metrics_data::FontName;
use crate::functions::operatorname;
use crate::functions::utils::assemble_sup_sub;
use crate::layout_context::LayoutContext;
use crate::symbols::Mode;
use crate::types::{ArgSpec, ArgType, ErrorCode, ParseError};

/// Named functions whose scripts go above and below in display style.
const LIMIT_FUNCTIONS: &[&str] = &[
    "\\det", "\\gcd", "\\inf", "\\lim", "\\liminf", "\\limsup", "\\max", "\\min", "\\Pr", "\\sup",
];

/// Named functions whose scripts always go to the right.
const NO_LIMIT_FUNCTIONS: &[&str] = &[
    "\\arcsin", "\\arccos", "\\arctan", "\\arg", "\\cos", "\\cosh", "\\cot", "\\coth", "\\csc",
    "\\deg", "\\dim", "\\exp", "\\hom", "\\ker", "\\lg", "\\ln", "\\log", "\\sec", "\\sin",
    "\\sinh", "\\tan", "\\tanh",
];

/// Script placement an operator glyph gets unless `\limits` or
/// `\nolimits` says otherwise. Integrals keep their scripts to the right.
#[must_use]
pub fn default_limits(value: &str) -> Limits {
    match value {
        "\u{222b}" | "\u{222c}" | "\u{222d}" | "\u{222e}" => Limits::None,
        _ => Limits::Auto,
    }
}

/// Registers the named functions and `\mathop`.
pub fn define_op(ctx: &mut MathContext) {
    ctx.define_function(FunctionDefSpec {
        names: LIMIT_FUNCTIONS,
        props: FunctionPropSpec::default(),
        handler: |context: FunctionContext<'_>, _: Vec<Option<Argument>>| {
            Ok::<_, ErrorCode>(named_function(&context).with_limits(Limits::Auto))
        },
    });

    ctx.define_function(FunctionDefSpec {
        names: NO_LIMIT_FUNCTIONS,
        props: FunctionPropSpec::default(),
        handler: |context: FunctionContext<'_>, _: Vec<Option<Argument>>| {
            Ok::<_, ErrorCode>(named_function(&context))
        },
    });

    ctx.define_function(FunctionDefSpec {
        names: &["\\mathop"],
        props: FunctionPropSpec {
            args: vec![ArgSpec::required(ArgType::Auto)],
            primitive: true,
            ..Default::default()
        },
        handler: |context: FunctionContext<'_>, mut args: Vec<Option<Argument>>| {
            let kind = AtomKind::Op {
                body: take_atoms(&mut args, 0),
                symbol: false,
            };
            Ok::<_, ErrorCode>(Atom::new(kind, context.mode).with_limits(Limits::Auto))
        },
    });
}

fn named_function(context: &FunctionContext<'_>) -> Atom {
    // \liminf and \limsup are set as two words
    let value = match context.bare_name() {
        "liminf" => "lim inf",
        "limsup" => "lim sup",
        name => name,
    };
    let kind = AtomKind::Op {
        body: Vec::new(),
        symbol: false,
    };
    Atom::new(kind, context.mode).with_value(value)
}

/// Whether the scripts of `atom` are set as limits in `context`.
#[must_use]
pub fn uses_limits(atom: &Atom, context: &LayoutContext) -> bool {
    match atom.limits {
        Limits::Limits => true,
        Limits::Auto => context.style.is_display(),
        Limits::None | Limits::NoLimits | Limits::Accent => false,
    }
}

/// The operator itself, how far it has been lowered to sit on the axis,
/// and its slant.
fn nucleus(
    builder: &mut LayoutBuilder<'_>,
    atom: &Atom,
    body: &[AtomId],
    symbol: bool,
    context: &LayoutContext,
) -> Result<(LayoutBox, f64, f64), ParseError> {
    if symbol {
        let Some(ch) = atom.single_char() else {
            return Ok((LayoutBox::default(), 0.0, 0.0));
        };
        // Most symbol operators get larger in displaystyle (rule 13)
        let large = context.style.is_display() && atom.command.as_deref() != Some("\\smallint");
        let font = if large {
            FontName::Size2Regular
        } else {
            FontName::Size1Regular
        };
        let glyph = make_glyph_in(ch, font, Mode::Math, context);
        let base_shift = (glyph.height - glyph.depth) / 2.0 - context.metrics().axis_height;
        let slant = glyph.italic;
        return Ok((glyph, base_shift, slant));
    }

    if operatorname::is_operatorname(atom) {
        return Ok((operatorname::layout_name(builder, body, context)?, 0.0, 0.0));
    }
    if !body.is_empty() {
        return Ok((builder.build_group(body, context)?, 0.0, 0.0));
    }

    // Named function, set upright
    let name = atom.value.as_deref().unwrap_or_default();
    let glyphs = name
        .chars()
        .map(|ch| make_glyph_in(ch, FontName::MainRegular, Mode::Math, context))
        .collect();
    Ok((make_hlist(glyphs), 0.0, 0.0))
}

/// Lays out an operator whose scripts, if any, go to the right.
pub fn layout(
    builder: &mut LayoutBuilder<'_>,
    atom: &Atom,
    body: &[AtomId],
    symbol: bool,
    context: &LayoutContext,
) -> Result<LayoutBox, ParseError> {
    let (base, base_shift, _) = nucleus(builder, atom, body, symbol, context)?;
    if base_shift == 0.0 {
        Ok(base)
    } else {
        Ok(make_shifted(base, -base_shift))
    }
}

/// Lays out an operator with its scripts stacked above and below.
pub fn layout_with_limits(
    builder: &mut LayoutBuilder<'_>,
    atom: &Atom,
    body: &[AtomId],
    symbol: bool,
    context: &LayoutContext,
) -> Result<LayoutBox, ParseError> {
    let (base, base_shift, slant) = nucleus(builder, atom, body, symbol, context)?;
    let sup = atom
        .superscript
        .as_deref()
        .map(|ids| builder.build_group(ids, &context.having_style(context.style.sup())))
        .transpose()?;
    let sub = atom
        .subscript
        .as_deref()
        .map(|ids| builder.build_group(ids, &context.having_style(context.style.sub())))
        .transpose()?;
    Ok(assemble_sup_sub(base, sup, sub, context, slant, base_shift))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{parse, render_to_box};
    use crate::types::Settings;

    fn build(source: &str) -> LayoutBox {
        render_to_box(&MathContext::default(), source, &Settings::default()).unwrap()
    }

    fn build_display(source: &str) -> LayoutBox {
        let settings = Settings::builder().display_mode(true).build();
        render_to_box(&MathContext::default(), source, &settings).unwrap()
    }

    fn op_font(root: &LayoutBox) -> Option<FontName> {
        root.iter()
            .find(|b| b.glyph_text() == Some("\u{2211}"))
            .and_then(|b| b.style.font)
    }

    #[test]
    fn operators_grow_in_display_style() {
        assert_eq!(op_font(&build("\\sum")), Some(FontName::Size1Regular));
        assert_eq!(op_font(&build_display("\\sum")), Some(FontName::Size2Regular));
        assert!(build_display("\\sum").total_height() > build("\\sum").total_height());
    }

    #[test]
    fn limits_stack_in_display_style() {
        let inline = build("\\sum_{i=0}^{n}");
        let display = build_display("\\sum_{i=0}^{n}");
        let bare = build_display("\\sum");
        // Stacked limits add height and depth but no width beyond the widest
        assert!(display.height > bare.height + 0.3);
        assert!(display.depth > bare.depth + 0.3);
        assert!(display.width < bare.width + inline.width);
    }

    #[test]
    fn nolimits_keeps_scripts_to_the_right() {
        let limits = build_display("\\sum_{i}^{n}");
        let nolimits = build_display("\\sum\\nolimits_{i}^{n}");
        assert!(nolimits.width > limits.width);
        assert!(nolimits.height < limits.height);
    }

    #[test]
    fn integrals_default_to_scripts_on_the_right() {
        let ctx = MathContext::default();
        let parsed = parse(&ctx, "\\int", &Settings::default()).unwrap();
        assert_eq!(parsed.tree.get(parsed.root[0]).unwrap().limits, Limits::None);
        let parsed = parse(&ctx, "\\sum", &Settings::default()).unwrap();
        assert_eq!(parsed.tree.get(parsed.root[0]).unwrap().limits, Limits::Auto);
    }

    #[test]
    fn named_functions_are_upright() {
        let root = build("\\sin x");
        let fonts: Vec<_> = root
            .iter()
            .filter(|b| b.is_glyph())
            .map(|b| (b.glyph_text().unwrap_or_default().to_owned(), b.style.font))
            .collect();
        assert_eq!(fonts[0], ("s".to_owned(), Some(FontName::MainRegular)));
        assert_eq!(fonts[3], ("x".to_owned(), Some(FontName::MathItalic)));
    }

    #[test]
    fn lim_takes_limits_in_display_only() {
        let ctx = MathContext::default();
        let parsed = parse(&ctx, "\\lim_{x\\to 0}", &Settings::default()).unwrap();
        let atom = parsed.tree.get(parsed.root[0]).unwrap();
        assert!(uses_limits(atom, &LayoutContext::default()));
        let inline = LayoutContext::default().having_style(crate::style::TEXT);
        assert!(!uses_limits(atom, &inline));
    }
}
