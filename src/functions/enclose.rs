//! Boxes: `\fbox`, `\boxed`, `\colorbox` and `\fcolorbox`.

use crate::atom::{Atom, AtomId, AtomKind};
use crate::box_tree::{Frame, LayoutBox};
use crate::build_common::{make_hlist, make_kern};
use crate::build_layout::LayoutBuilder;
use crate::context::MathContext;
use crate::define_function::{
    Argument, FunctionContext, FunctionDefSpec, FunctionPropSpec, take_atoms, take_text,
};
use crate::layout_context::LayoutContext;
use crate::types::{ArgSpec, ArgType, ErrorCode, ParseError};

/// How a box is decorated.
#[derive(Debug, Clone, Copy, Default)]
pub struct Decoration<'a> {
    /// Draw a frame
    pub frame: bool,
    /// Fill color
    pub background: Option<&'a str>,
    /// Frame color, the foreground color when `None`
    pub border_color: Option<&'a str>,
}

/// Registers the box commands.
pub fn define_enclose(ctx: &mut MathContext) {
    ctx.define_function(FunctionDefSpec {
        names: &["\\colorbox"],
        props: FunctionPropSpec {
            args: vec![
                ArgSpec::required(ArgType::Color),
                ArgSpec::required(ArgType::Text),
            ],
            allowed_in_text: true,
            ..Default::default()
        },
        handler: |context: FunctionContext<'_>, mut args: Vec<Option<Argument>>| {
            let kind = AtomKind::Box {
                background: take_text(&mut args, 0),
                body: take_atoms(&mut args, 1),
                frame: false,
                border_color: None,
            };
            Ok::<_, ErrorCode>(Atom::new(kind, context.mode))
        },
    });

    ctx.define_function(FunctionDefSpec {
        names: &["\\fcolorbox"],
        props: FunctionPropSpec {
            args: vec![
                ArgSpec::required(ArgType::Color),
                ArgSpec::required(ArgType::Color),
                ArgSpec::required(ArgType::Text),
            ],
            allowed_in_text: true,
            ..Default::default()
        },
        handler: |context: FunctionContext<'_>, mut args: Vec<Option<Argument>>| {
            let kind = AtomKind::Box {
                border_color: take_text(&mut args, 0),
                background: take_text(&mut args, 1),
                body: take_atoms(&mut args, 2),
                frame: true,
            };
            Ok::<_, ErrorCode>(Atom::new(kind, context.mode))
        },
    });

    ctx.define_function(FunctionDefSpec {
        names: &["\\fbox"],
        props: FunctionPropSpec {
            args: vec![ArgSpec::required(ArgType::Text)],
            allowed_in_text: true,
            ..Default::default()
        },
        handler: |context: FunctionContext<'_>, mut args: Vec<Option<Argument>>| {
            let kind = AtomKind::Box {
                body: take_atoms(&mut args, 0),
                frame: true,
                background: None,
                border_color: None,
            };
            Ok::<_, ErrorCode>(Atom::new(kind, context.mode))
        },
    });

    // amsmath: the content stays in math mode
    ctx.define_function(FunctionDefSpec {
        names: &["\\boxed"],
        props: FunctionPropSpec {
            args: vec![ArgSpec::required(ArgType::Math)],
            ..Default::default()
        },
        handler: |context: FunctionContext<'_>, mut args: Vec<Option<Argument>>| {
            let kind = AtomKind::Box {
                body: take_atoms(&mut args, 0),
                frame: true,
                background: None,
                border_color: None,
            };
            Ok::<_, ErrorCode>(Atom::new(kind, context.mode))
        },
    });
}

/// Lays out a decorated box around `body`, padded by `\fboxsep` on every
/// side.
pub fn layout(
    builder: &mut LayoutBuilder<'_>,
    body: &[AtomId],
    decoration: Decoration<'_>,
    context: &LayoutContext,
) -> Result<LayoutBox, ParseError> {
    let inner = builder.build_group(body, context)?;
    let metrics = context.metrics();
    let pad = metrics.fbox_sep;

    let mut framed = make_hlist(vec![make_kern(pad), inner, make_kern(pad)]);
    framed.height += pad;
    framed.depth += pad;
    framed.style.background = decoration.background.map(str::to_owned);
    if decoration.frame {
        framed.style.frame = Some(Frame {
            thickness: metrics.fbox_rule.max(context.min_rule_thickness),
            color: decoration.border_color.map(str::to_owned),
        });
    }
    Ok(framed)
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
    fn fbox_pads_on_every_side() {
        let plain = build("\\text{ab}");
        let framed = build("\\fbox{ab}");
        let pad = 0.3;
        assert!((framed.width - (plain.width + 2.0 * pad)).abs() < 1e-9);
        assert!((framed.height - (plain.height + pad)).abs() < 1e-9);
        let frame = framed.children[0].style.frame.clone().unwrap();
        assert!((frame.thickness - 0.04).abs() < 1e-9);
        assert_eq!(frame.color, None);
    }

    #[test]
    fn fcolorbox_has_both_colors() {
        let root = build("\\fcolorbox{red}{yellow}{ab}");
        let style = &root.children[0].style;
        assert_eq!(style.background.as_deref(), Some("yellow"));
        assert_eq!(style.frame.as_ref().and_then(|f| f.color.as_deref()), Some("red"));
    }

    #[test]
    fn boxed_content_is_math() {
        let ctx = MathContext::default();
        let parsed = parse(&ctx, "\\boxed{x}\\colorbox{red}{x}", &Settings::default()).unwrap();
        let modes: Vec<_> = parsed
            .root
            .iter()
            .map(|id| parsed.tree.get(parsed.tree.children(*id)[0]).unwrap().mode)
            .collect();
        assert_eq!(modes, [Mode::Math, Mode::Text]);
    }
}
