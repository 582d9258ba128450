//! `\overline` and `\underline`.
//!
//! TeXbook rules 9 and 10: a rule of default thickness, separated from the
//! body by three times that thickness, with one more thickness of space
//! outside the rule.

use crate::atom::{Atom, AtomId, AtomKind, LinePosition};
use crate::box_tree::LayoutBox;
use crate::build_common::{VListChild, VListKern, VListParam, make_line, make_v_list};
use crate::build_layout::LayoutBuilder;
use crate::context::MathContext;
use crate::define_function::{
    Argument, FunctionContext, FunctionDefSpec, FunctionPropSpec, take_atoms,
};
use crate::layout_context::LayoutContext;
use crate::types::{ArgSpec, ArgType, ErrorCode, ParseError};

/// Registers `\overline` and `\underline`.
pub fn define_overline(ctx: &mut MathContext) {
    ctx.define_function(FunctionDefSpec {
        names: &["\\overline", "\\underline"],
        props: FunctionPropSpec {
            args: vec![ArgSpec::required(ArgType::Auto)],
            allowed_in_text: true,
            ..Default::default()
        },
        handler: |context: FunctionContext<'_>, mut args: Vec<Option<Argument>>| {
            let position = if context.func_name == "\\overline" {
                LinePosition::Over
            } else {
                LinePosition::Under
            };
            let body = take_atoms(&mut args, 0);
            Ok::<_, ErrorCode>(Atom::new(AtomKind::Line { body, position }, context.mode))
        },
    });
}

/// Lays out a line over or under `body`.
pub fn layout(
    builder: &mut LayoutBuilder<'_>,
    body: &[AtomId],
    position: LinePosition,
    context: &LayoutContext,
) -> Result<LayoutBox, ParseError> {
    let theta = context.rule_thickness();
    match position {
        LinePosition::Over => {
            // The body is cramped under the line
            let inner = builder.build_group(body, &context.having_cramped_style())?;
            let line = make_line(inner.width, context, None);
            Ok(make_v_list(VListParam::FirstBaseline {
                children: vec![
                    inner.into(),
                    VListChild::Kern(VListKern::from(3.0 * theta)),
                    line.into(),
                    VListChild::Kern(VListKern::from(theta)),
                ],
            }))
        }
        LinePosition::Under => {
            let inner = builder.build_group(body, context)?;
            let line = make_line(inner.width, context, None);
            let top = inner.height;
            Ok(make_v_list(VListParam::Top {
                position_data: top,
                children: vec![
                    VListChild::Kern(VListKern::from(theta)),
                    line.into(),
                    VListChild::Kern(VListKern::from(3.0 * theta)),
                    inner.into(),
                ],
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::box_tree::{BoxContent, LayoutBox};
    use crate::context::MathContext;
    use crate::core::render_to_box;
    use crate::types::Settings;

    fn build(source: &str) -> LayoutBox {
        render_to_box(&MathContext::default(), source, &Settings::default()).unwrap()
    }

    #[test]
    fn overline_adds_clearance_rule_and_padding() {
        let x = build("x");
        let over = build("\\overline{x}");
        let theta = 0.04;
        assert!((over.height - (x.height + 5.0 * theta)).abs() < 1e-9);
        assert!((over.depth - x.depth).abs() < 1e-9);
        assert_eq!(over.iter().filter(|b| b.content == BoxContent::Rule).count(), 1);
    }

    #[test]
    fn underline_hangs_below() {
        let x = build("x");
        let under = build("\\underline{x}");
        let theta = 0.04;
        assert!((under.depth - (x.depth + 5.0 * theta)).abs() < 1e-9);
        assert!((under.height - x.height).abs() < 1e-9);
    }
}
