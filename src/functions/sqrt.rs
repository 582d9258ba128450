//! Square roots and nth roots.

use crate::atom::{Atom, AtomId, AtomKind};
use crate::box_tree::LayoutBox;
use crate::build_common::{
    VListChild, VListElem, VListKern, VListParam, make_hlist, make_kern, make_shifted, make_v_list,
};
use crate::build_layout::LayoutBuilder;
use crate::context::MathContext;
use crate::define_function::{
    Argument, FunctionContext, FunctionDefSpec, FunctionPropSpec, take_atoms, take_optional_atoms,
};
use crate::delimiter::make_sqrt_image;
use crate::layout_context::LayoutContext;
use crate::style::SCRIPTSCRIPT;
use crate::types::{ArgSpec, ArgType, ErrorCode, ParseError};

/// Registers `\sqrt`.
pub fn define_sqrt(ctx: &mut MathContext) {
    ctx.define_function(FunctionDefSpec {
        names: &["\\sqrt"],
        props: FunctionPropSpec {
            args: vec![
                ArgSpec::optional(ArgType::Auto),
                ArgSpec::required(ArgType::Auto),
            ],
            ..Default::default()
        },
        handler: |context: FunctionContext<'_>, mut args: Vec<Option<Argument>>| {
            let index = take_optional_atoms(&mut args, 0);
            let body = take_atoms(&mut args, 1);
            Ok::<_, ErrorCode>(Atom::new(AtomKind::Surd { body, index }, context.mode))
        },
    });
}

/// Lays out a radical.
///
/// Square roots are handled in the TeXbook pg. 443, Rule 11.
pub fn layout(
    builder: &mut LayoutBuilder<'_>,
    body: &[AtomId],
    index: Option<&[AtomId]>,
    context: &LayoutContext,
) -> Result<LayoutBox, ParseError> {
    let mut inner = builder.build_group(body, &context.having_cramped_style())?;
    let metrics = context.metrics();
    if inner.height == 0.0 {
        inner.height = metrics.x_height;
    }

    // Minimum size of the \surd delimiter
    let theta = context.rule_thickness();
    let phi = if context.style.is_display() {
        metrics.x_height
    } else {
        theta
    };
    let line_clearance = theta + phi / 4.0;
    let min_delimiter_height = inner.total_height() + line_clearance + theta;

    let image = make_sqrt_image(min_delimiter_height, context);
    let rule_width = image.rule_width;

    // Spread any extra room in the sign evenly above and below the body
    let delim_depth = image.image.height - rule_width;
    let line_clearance = if delim_depth > inner.total_height() + line_clearance {
        (line_clearance + delim_depth - inner.total_height()) / 2.0
    } else {
        line_clearance
    };

    let img_shift = image.image.height - inner.height - line_clearance - rule_width;
    let inner_height = inner.height;

    let surd = make_v_list(VListParam::FirstBaseline {
        children: vec![
            VListElem {
                elem: inner,
                margin_left: Some(image.advance_width),
            }
            .into(),
            VListChild::Kern(VListKern::from(-(inner_height + img_shift))),
            image.image.into(),
            VListChild::Kern(VListKern::from(rule_width)),
        ],
    });

    let Some(index) = index else {
        return Ok(surd);
    };

    // The index is always in scriptscript style, raised as in \r@@t
    let root = builder.build_group(index, &context.having_style(SCRIPTSCRIPT))?;
    let to_shift = 0.6 * (surd.height - surd.depth);
    // Kerns of 5/18em before the index and -10/18em after it, as in \root
    let em = context.size_multiplier;
    Ok(make_hlist(vec![
        make_kern(5.0 / 18.0 * em),
        make_shifted(root, to_shift),
        make_kern(-10.0 / 18.0 * em),
        surd,
    ]))
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

    fn sign(root: &LayoutBox) -> Option<&str> {
        root.iter().find_map(|b| match &b.content {
            BoxContent::Stretchy { name } => Some(name.as_str()),
            _ => None,
        })
    }

    #[test]
    fn radical_clears_the_body() {
        let root = build("\\sqrt{x}");
        assert_eq!(sign(&root), Some("sqrtMain"));
        let x = build("x");
        assert!(root.height > x.height + 0.1);
        assert!(root.width > x.width);
    }

    #[test]
    fn tall_bodies_get_larger_signs() {
        let root = build("\\sqrt{\\frac{\\frac{a}{b}}{\\frac{c}{d}}}");
        assert_ne!(sign(&root), Some("sqrtMain"));
    }

    #[test]
    fn index_is_set_in_scriptscript() {
        let root = build("\\sqrt[3]{x}");
        let scales: Vec<f64> = root.iter().filter_map(|b| b.style.scale).collect();
        assert!(scales.contains(&0.5));
    }
}
