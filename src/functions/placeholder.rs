//! `\placeholder`: an empty slot for the user to fill in.

use crate::atom::Atom;
use crate::box_tree::LayoutBox;
use crate::build_common::make_glyph_in;
use crate::context::MathContext;
use crate::define_function::{Argument, FunctionContext, FunctionDefSpec, FunctionPropSpec};
use crate::font_metrics_data::FontName;
use crate::layout_context::LayoutContext;
use crate::symbols::Mode;
use crate::types::{ArgSpec, ArgType, ErrorCode};

/// Marker drawn for an empty slot.
pub const PLACEHOLDER_GLYPH: char = '\u{25a1}';

/// Registers `\placeholder`. The optional `[...]` names the slot and is
/// ignored.
pub fn define_placeholder(ctx: &mut MathContext) {
    ctx.define_function(FunctionDefSpec {
        names: &["\\placeholder"],
        props: FunctionPropSpec {
            args: vec![ArgSpec::optional(ArgType::String)],
            allowed_in_text: true,
            ..Default::default()
        },
        handler: |context: FunctionContext<'_>, _: Vec<Option<Argument>>| {
            Ok::<_, ErrorCode>(Atom::placeholder(context.mode))
        },
    });
}

/// Lays out the marker.
#[must_use]
pub fn layout(context: &LayoutContext) -> LayoutBox {
    make_glyph_in(PLACEHOLDER_GLYPH, FontName::AmsRegular, Mode::Math, context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::AtomKind;
    use crate::core::{parse, render_to_box};
    use crate::types::Settings;

    #[test]
    fn placeholder_command_and_marker() {
        let ctx = MathContext::default();
        let parsed = parse(&ctx, "x+\\placeholder[slot]", &Settings::default()).unwrap();
        let last = parsed.tree.get(parsed.root[2]).unwrap();
        assert_eq!(last.kind, AtomKind::Placeholder);
        assert!(parsed.tree.errors(&parsed.root).is_empty());

        let root = render_to_box(&ctx, "\\placeholder", &Settings::default()).unwrap();
        let marker = root.iter().find(|b| b.is_glyph()).unwrap();
        assert_eq!(marker.glyph_text(), Some("\u{25a1}"));
        assert!(marker.width > 0.0);
    }
}
