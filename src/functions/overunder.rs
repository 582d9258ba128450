//! Content stacked over or under a base: `\overset`, `\underset`,
//! `\stackrel`, and the stretchy `\overbrace`, `\underbrace`.

use crate::atom::{Atom, AtomId, AtomKind, BracePosition};
use crate::box_tree::{BoxContent, LayoutBox};
use crate::build_common::{VListChild, VListKern, VListParam, make_v_list};
use crate::build_layout::LayoutBuilder;
use crate::context::MathContext;
use crate::define_function::{
    Argument, FunctionContext, FunctionDefSpec, FunctionPropSpec, take_atoms,
};
use crate::functions::{supsub, utils::assemble_sup_sub};
use crate::layout_context::LayoutContext;
use crate::spacing_data::AtomClass;
use crate::types::{ArgSpec, ArgType, ErrorCode, ParseError};

/// Slots of an `overunder` atom.
#[derive(Debug, Clone, Copy)]
pub struct Parts<'a> {
    /// Base
    pub body: &'a [AtomId],
    /// Content set above
    pub above: Option<&'a [AtomId]>,
    /// Content set below
    pub below: Option<&'a [AtomId]>,
    /// Brace drawn between the base and its limits
    pub brace: Option<BracePosition>,
}

/// Registers the over/under commands.
pub fn define_overunder(ctx: &mut MathContext) {
    ctx.define_function(FunctionDefSpec {
        names: &["\\overbrace", "\\underbrace"],
        props: FunctionPropSpec {
            args: vec![ArgSpec::required(ArgType::Auto)],
            ..Default::default()
        },
        handler: |context: FunctionContext<'_>, mut args: Vec<Option<Argument>>| {
            let brace = if context.func_name == "\\overbrace" {
                BracePosition::Over
            } else {
                BracePosition::Under
            };
            let kind = AtomKind::OverUnder {
                body: take_atoms(&mut args, 0),
                above: None,
                below: None,
                brace: Some(brace),
            };
            Ok::<_, ErrorCode>(Atom::new(kind, context.mode))
        },
    });

    ctx.define_function(FunctionDefSpec {
        names: &["\\overset", "\\underset", "\\stackrel"],
        props: FunctionPropSpec {
            args: vec![
                ArgSpec::required(ArgType::Auto),
                ArgSpec::required(ArgType::Auto),
            ],
            ..Default::default()
        },
        handler: |context: FunctionContext<'_>, mut args: Vec<Option<Argument>>| {
            let script = take_atoms(&mut args, 0);
            let body = take_atoms(&mut args, 1);
            let kind = if context.func_name == "\\underset" {
                AtomKind::OverUnder {
                    body,
                    above: None,
                    below: Some(script),
                    brace: None,
                }
            } else {
                AtomKind::OverUnder {
                    body,
                    above: Some(script),
                    below: None,
                    brace: None,
                }
            };
            Ok::<_, ErrorCode>(Atom::new(kind, context.mode))
        },
    });
}

/// `mbin` or `mrel` when the base is a single such atom, `mord` otherwise.
fn binrel_class(builder: &LayoutBuilder<'_>, body: &[AtomId]) -> AtomClass {
    let class = match body {
        [id] => builder.tree.get(*id).map(|atom| atom.kind.class()),
        _ => None,
    };
    match class {
        Some(class @ (AtomClass::Mbin | AtomClass::Mrel)) => class,
        _ => AtomClass::Mord,
    }
}

/// Draws a horizontal brace over or under `base`.
fn brace(base: LayoutBox, position: BracePosition, context: &LayoutContext) -> LayoutBox {
    let name = match position {
        BracePosition::Over => "overbrace",
        BracePosition::Under => "underbrace",
    };
    let shape = LayoutBox {
        content: BoxContent::Stretchy {
            name: name.to_owned(),
        },
        width: base.width,
        height: 0.548 * context.size_multiplier,
        ..LayoutBox::default()
    };
    let kern = VListChild::Kern(VListKern::from(0.1 * context.size_multiplier));
    match position {
        BracePosition::Over => make_v_list(VListParam::FirstBaseline {
            children: vec![base.into(), kern, shape.into()],
        }),
        BracePosition::Under => make_v_list(VListParam::Top {
            position_data: base.height,
            children: vec![shape.into(), kern, base.into()],
        }),
    }
}

/// Lays out an `overunder` atom, including its scripts.
///
/// The scripts of a brace are placed as limits; on the other forms they
/// attach to the right of the stack.
pub fn layout(
    builder: &mut LayoutBuilder<'_>,
    atom: &Atom,
    parts: Parts<'_>,
    context: &LayoutContext,
) -> Result<LayoutBox, ParseError> {
    let class = if parts.brace.is_some() {
        AtomClass::Mord
    } else {
        binrel_class(builder, parts.body)
    };

    let mut base = builder.build_group(parts.body, context)?;
    if let Some(position) = parts.brace {
        base = brace(base, position, context);
    }

    let (above, below) = if parts.brace.is_some() {
        (atom.superscript.as_deref(), atom.subscript.as_deref())
    } else {
        (parts.above, parts.below)
    };
    let sup = above
        .map(|ids| builder.build_group(ids, &context.having_style(context.style.sup())))
        .transpose()?;
    let sub = below
        .map(|ids| builder.build_group(ids, &context.having_style(context.style.sub())))
        .transpose()?;

    let stacked = assemble_sup_sub(base.with_class(class), sup, sub, context, 0.0, 0.0);
    if parts.brace.is_none() && atom.has_scripts() {
        supsub::layout(builder, atom, stacked, context)
    } else {
        Ok(stacked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render_to_box;
    use crate::types::Settings;

    fn build(source: &str) -> LayoutBox {
        render_to_box(&MathContext::default(), source, &Settings::default()).unwrap()
    }

    #[test]
    fn overset_raises_the_script() {
        let base = build("=");
        let root = build("\\overset{!}{=}");
        assert!(root.height > base.height + 0.2);
        assert_eq!(root.children[0].class, Some(AtomClass::Mrel));
    }

    #[test]
    fn stackrel_is_a_relation() {
        let root = build("a\\stackrel{def}{=}b");
        let classes: Vec<_> = root.children.iter().filter_map(|b| b.class).collect();
        assert_eq!(classes, [AtomClass::Mord, AtomClass::Mrel, AtomClass::Mord]);
    }

    #[test]
    fn underset_hangs_below() {
        let base = build("x");
        let root = build("\\underset{n}{x}");
        assert!(root.depth > base.depth + 0.2);
    }

    #[test]
    fn brace_scripts_are_limits() {
        let plain = build("\\overbrace{a+b}");
        let labelled = build("\\overbrace{a+b}^{n}");
        assert!(labelled.height > plain.height);
        // Centered above rather than to the right
        assert!((labelled.width - plain.width).abs() < 1e-9);
        let shapes = plain
            .iter()
            .filter(|b| matches!(&b.content, BoxContent::Stretchy { name } if name == "overbrace"))
            .count();
        assert_eq!(shapes, 1);
    }

    #[test]
    fn underbrace_goes_below() {
        let plain = build("a+b");
        let root = build("\\underbrace{a+b}");
        assert!(root.depth > plain.depth + 0.5);
        assert!((root.height - plain.height).abs() < 1e-9);
    }
}
