//! Zero-width boxes: `\llap`, `\rlap`, `\clap` and their math-mode
//! counterparts `\mathllap`, `\mathrlap`, `\mathclap`.

use crate::atom::{Atom, AtomId, AtomKind, OverlapAlign};
use crate::box_tree::LayoutBox;
use crate::build_common::{make_hlist, make_kern};
use crate::build_layout::LayoutBuilder;
use crate::context::MathContext;
use crate::define_function::{
    Argument, FunctionContext, FunctionDefSpec, FunctionPropSpec, take_atoms,
};
use crate::layout_context::LayoutContext;
use crate::types::{ArgSpec, ArgType, ErrorCode, ParseError};

fn alignment(name: &str) -> OverlapAlign {
    match name.trim_start_matches("\\math") {
        "\\llap" | "llap" => OverlapAlign::Left,
        "\\rlap" | "rlap" => OverlapAlign::Right,
        _ => OverlapAlign::Center,
    }
}

fn overlap(context: &FunctionContext<'_>, args: &mut [Option<Argument>]) -> Atom {
    let kind = AtomKind::Overlap {
        body: take_atoms(args, 0),
        align: alignment(context.func_name),
    };
    Atom::new(kind, context.mode)
}

/// Registers the overlap commands.
pub fn define_lap(ctx: &mut MathContext) {
    ctx.define_function(FunctionDefSpec {
        names: &["\\llap", "\\rlap", "\\clap"],
        props: FunctionPropSpec {
            args: vec![ArgSpec::required(ArgType::Text)],
            allowed_in_text: true,
            ..Default::default()
        },
        handler: |context: FunctionContext<'_>, mut args: Vec<Option<Argument>>| {
            Ok::<_, ErrorCode>(overlap(&context, &mut args))
        },
    });

    ctx.define_function(FunctionDefSpec {
        names: &["\\mathllap", "\\mathrlap", "\\mathclap"],
        props: FunctionPropSpec {
            args: vec![ArgSpec::required(ArgType::Auto)],
            allowed_in_text: true,
            ..Default::default()
        },
        handler: |context: FunctionContext<'_>, mut args: Vec<Option<Argument>>| {
            Ok::<_, ErrorCode>(overlap(&context, &mut args))
        },
    });
}

/// Lays out `body` in a box of zero width, sticking out on the side given
/// by `align`.
pub fn layout(
    builder: &mut LayoutBuilder<'_>,
    body: &[AtomId],
    align: OverlapAlign,
    context: &LayoutContext,
) -> Result<LayoutBox, ParseError> {
    let inner = builder.build_group(body, context)?;
    let width = inner.width;
    let children = match align {
        OverlapAlign::Left => vec![make_kern(-width), inner],
        OverlapAlign::Right => vec![inner, make_kern(-width)],
        OverlapAlign::Center => vec![make_kern(-width / 2.0), inner, make_kern(-width / 2.0)],
    };
    let mut lapped = make_hlist(children);
    lapped.italic = 0.0;
    Ok(lapped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{parse, render_to_box};
    use crate::symbols::Mode;
    use crate::types::Settings;

    fn build(source: &str) -> LayoutBox {
        render_to_box(&MathContext::default(), source, &Settings::default()).unwrap()
    }

    #[test]
    fn laps_take_no_width() {
        let x = build("x");
        for source in ["x\\mathllap{ab}", "x\\mathrlap{ab}", "x\\mathclap{ab}", "x\\rlap{ab}"] {
            let root = build(source);
            assert!((root.width - x.width).abs() < 1e-9, "{source}");
        }
    }

    #[test]
    fn alignment_follows_the_name() {
        assert_eq!(alignment("\\llap"), OverlapAlign::Left);
        assert_eq!(alignment("\\mathrlap"), OverlapAlign::Right);
        assert_eq!(alignment("\\mathclap"), OverlapAlign::Center);
    }

    #[test]
    fn text_laps_read_text() {
        let ctx = MathContext::default();
        let parsed = parse(&ctx, "\\llap{ab}\\mathllap{ab}", &Settings::default()).unwrap();
        let modes: Vec<_> = parsed
            .root
            .iter()
            .map(|id| parsed.tree.mode_of(parsed.tree.children(*id)[0]))
            .collect();
        assert_eq!(modes, [Mode::Text, Mode::Math]);
    }
}
