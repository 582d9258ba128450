//! `\operatorname` and `\operatornamewithlimits`.
//!
//! The name is set upright and its symbols lose their spacing class, so
//! `\operatorname{arg-max}` reads as one word.

use crate::atom::{Atom, AtomId, AtomKind, Limits};
use crate::box_tree::{BoxContent, LayoutBox};
use crate::build_layout::{LayoutBuilder, is_symbol_kind};
use crate::context::MathContext;
use crate::define_function::{
    Argument, FunctionContext, FunctionDefSpec, FunctionPropSpec, take_atoms,
};
use crate::layout_context::{FontFamily, LayoutContext};
use crate::types::{ArgSpec, ArgType, ErrorCode, ParseError};

/// Registers `\operatorname` and `\operatornamewithlimits`.
pub fn define_operatorname(ctx: &mut MathContext) {
    ctx.define_function(FunctionDefSpec {
        names: &["\\operatorname", "\\operatornamewithlimits"],
        props: FunctionPropSpec {
            args: vec![ArgSpec::required(ArgType::Math)],
            ..Default::default()
        },
        handler: |context: FunctionContext<'_>, mut args: Vec<Option<Argument>>| {
            let body = take_atoms(&mut args, 0);
            for id in &body {
                if let Some(atom) = context.tree.get_mut(*id) {
                    if is_symbol_kind(&atom.kind) && !atom.has_scripts() {
                        atom.kind = AtomKind::Ord;
                    }
                }
            }
            let limits = if context.func_name == "\\operatornamewithlimits" {
                Limits::Auto
            } else {
                Limits::None
            };
            let kind = AtomKind::Op {
                body,
                symbol: false,
            };
            Ok::<_, ErrorCode>(Atom::new(kind, context.mode).with_limits(limits))
        },
    });
}

/// Whether `atom` came from one of the commands above.
#[must_use]
pub fn is_operatorname(atom: &Atom) -> bool {
    atom.command
        .as_deref()
        .is_some_and(|command| command.starts_with("\\operatorname"))
}

fn normalize_glyphs(node: &mut LayoutBox) {
    if let BoxContent::Glyph { text } = &mut node.content {
        let replaced = text.replace('\u{2212}', "-").replace('\u{2217}', "*");
        *text = replaced;
    }
    for child in &mut node.children {
        normalize_glyphs(child);
    }
}

/// Lays out the name of an `\operatorname` in roman, with math minus and
/// asterisk turned back into their text forms.
pub fn layout_name(
    builder: &mut LayoutBuilder<'_>,
    body: &[AtomId],
    context: &LayoutContext,
) -> Result<LayoutBox, ParseError> {
    let mut name = builder.build_group(body, &context.with_font_family(FontFamily::Roman))?;
    normalize_glyphs(&mut name);
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{parse, render_to_box};
    use crate::font_metrics_data::FontName;
    use crate::types::Settings;
    use pretty_assertions::assert_eq;

    #[test]
    fn name_is_roman_and_unspaced() {
        let root = render_to_box(
            &MathContext::default(),
            "\\operatorname{arg-max}",
            &Settings::default(),
        )
        .unwrap();
        let glyphs: Vec<_> = root
            .iter()
            .filter(|b| b.is_glyph())
            .map(|b| (b.glyph_text().unwrap_or_default().to_owned(), b.style.font))
            .collect();
        assert_eq!(glyphs.len(), 7);
        assert_eq!(glyphs[3], ("-".to_owned(), Some(FontName::MainRegular)));
        assert!(glyphs.iter().all(|(_, font)| *font == Some(FontName::MainRegular)));
        assert!(!root.iter().any(|b| b.is_glue() && b.width > 0.0));
    }

    #[test]
    fn with_limits_variant_stacks_in_display() {
        let ctx = MathContext::default();
        let parsed = parse(&ctx, "\\operatornamewithlimits{argmax}_x", &Settings::default()).unwrap();
        let atom = parsed.tree.get(parsed.root[0]).unwrap();
        assert_eq!(atom.limits, Limits::Auto);
        assert!(is_operatorname(atom));

        let parsed = parse(&ctx, "\\operatorname{f}", &Settings::default()).unwrap();
        assert_eq!(parsed.tree.get(parsed.root[0]).unwrap().limits, Limits::None);
    }
}
