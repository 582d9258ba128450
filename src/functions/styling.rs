//! `\displaystyle`, `\textstyle`, `\scriptstyle` and `\scriptscriptstyle`.

use core::str::FromStr;

use crate::atom::{Atom, AtomId, AtomKind};
use crate::box_tree::LayoutBox;
use crate::build_layout::LayoutBuilder;
use crate::context::MathContext;
use crate::define_function::{Argument, FunctionContext, FunctionDefSpec, FunctionPropSpec, take_atoms};
use crate::layout_context::LayoutContext;
use crate::style::{MathStyle, Style};
use crate::types::{ErrorCode, ParseError};

/// Registers the style commands. Each applies to the rest of its group.
pub fn define_styling(ctx: &mut MathContext) {
    ctx.define_function(FunctionDefSpec {
        names: &[
            "\\displaystyle",
            "\\textstyle",
            "\\scriptstyle",
            "\\scriptscriptstyle",
        ],
        props: FunctionPropSpec {
            rest_of_group: true,
            ..Default::default()
        },
        handler: |context: FunctionContext<'_>, mut args: Vec<Option<Argument>>| {
            let style =
                MathStyle::from_str(context.bare_name()).map_err(|_| ErrorCode::UnknownCommand)?;
            let body = take_atoms(&mut args, 0);
            Ok(Atom::new(AtomKind::MathStyle { body, style }, context.mode))
        },
    });
}

/// Lays out `body` in `style`, uncramped.
pub fn layout(
    builder: &mut LayoutBuilder<'_>,
    body: &[AtomId],
    style: MathStyle,
    context: &LayoutContext,
) -> Result<LayoutBox, ParseError> {
    builder.build_group(body, &context.having_style(Style::new(style, false)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{parse, render_to_box};
    use crate::font_metrics_data::FontName;
    use crate::types::Settings;

    #[test]
    fn style_commands_parse_to_their_style() {
        let ctx = MathContext::default();
        let parsed = parse(&ctx, "\\scriptstyle x+y", &Settings::default()).unwrap();
        assert_eq!(parsed.root.len(), 1);
        let atom = parsed.tree.get(parsed.root[0]).unwrap();
        assert!(matches!(
            &atom.kind,
            AtomKind::MathStyle { body, style: MathStyle::Script } if body.len() == 3
        ));
    }

    #[test]
    fn displaystyle_enlarges_operators() {
        let root = render_to_box(
            &MathContext::default(),
            "\\displaystyle\\sum",
            &Settings::default(),
        )
        .unwrap();
        let font = root
            .iter()
            .find(|b| b.glyph_text() == Some("\u{2211}"))
            .and_then(|b| b.style.font);
        assert_eq!(font, Some(FontName::Size2Regular));
    }

    #[test]
    fn scriptstyle_shrinks() {
        let ctx = MathContext::default();
        let normal = render_to_box(&ctx, "x", &Settings::default()).unwrap();
        let small = render_to_box(&ctx, "\\scriptstyle x", &Settings::default()).unwrap();
        assert!((small.width - 0.7 * normal.width).abs() < 1e-9);
    }
}
