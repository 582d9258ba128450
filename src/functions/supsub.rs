//! Superscripts and subscripts set to the right of the nucleus.
//!
//! Follows the TeXbook, pages 445-446, rules 18(a-f). Kinds that stack their
//! scripts as limits (operators, braces, accents with `limits: accent`) do
//! not come through here.

use crate::atom::Atom;
use crate::box_tree::LayoutBox;
use crate::build_common::{
    VListChild, VListElem, VListElemAndShift, VListParam, make_hlist, make_kern, make_v_list,
};
use crate::build_layout::LayoutBuilder;
use crate::layout_context::LayoutContext;
use crate::style::DISPLAY;
use crate::types::ParseError;

/// Attaches the scripts of `atom` to its laid out `nucleus`.
pub fn layout(
    builder: &mut LayoutBuilder<'_>,
    atom: &Atom,
    nucleus: LayoutBox,
    context: &LayoutContext,
) -> Result<LayoutBox, ParseError> {
    let metrics = context.metrics();
    let is_character_box = builder.is_character_box(atom);

    // Rule 18a
    let mut sup_shift = 0.0;
    let mut sub_shift = 0.0;

    let sup = match &atom.superscript {
        Some(ids) => {
            let sup_context = context.having_style(context.style.sup());
            let sup = builder.build_group(ids, &sup_context)?;
            if !is_character_box {
                sup_shift = nucleus.height - sup_context.metrics().sup_drop;
            }
            Some(sup)
        }
        None => None,
    };
    let sub = match &atom.subscript {
        Some(ids) => {
            let sub_context = context.having_style(context.style.sub());
            let sub = builder.build_group(ids, &sub_context)?;
            if !is_character_box {
                sub_shift = nucleus.depth + sub_context.metrics().sub_drop;
            }
            Some(sub)
        }
        None => None,
    };

    // Rule 18c
    let min_sup_shift = if context.style == DISPLAY {
        metrics.sup1
    } else if context.cramped() {
        metrics.sup3
    } else {
        metrics.sup2
    };

    // \scriptspace is 0.5pt whatever the size
    let script_space = 0.5 / metrics.pt_per_em;

    // The subscript is not moved right by the nucleus' italic correction
    let sub_indent = nucleus.is_glyph().then_some(-nucleus.italic);

    let scripts = match (sup, sub) {
        (Some(sup), Some(sub)) => {
            sup_shift = sup_shift
                .max(min_sup_shift)
                .max(0.25f64.mul_add(metrics.x_height, sup.depth));
            sub_shift = sub_shift.max(metrics.sub2);

            // Rule 18e
            let min_gap = 4.0 * context.rule_thickness();
            if (sup_shift - sup.depth) - (sub.height - sub_shift) < min_gap {
                sub_shift = min_gap - (sup_shift - sup.depth) + sub.height;
                let psi = 0.8f64.mul_add(metrics.x_height, -(sup_shift - sup.depth));
                if psi > 0.0 {
                    sup_shift += psi;
                    sub_shift -= psi;
                }
            }

            make_v_list(VListParam::IndividualShift {
                children: vec![
                    VListElemAndShift {
                        elem: sub,
                        shift: sub_shift,
                        margin_left: sub_indent,
                    },
                    VListElemAndShift {
                        elem: sup,
                        shift: -sup_shift,
                        margin_left: None,
                    },
                ],
            })
        }
        (None, Some(sub)) => {
            // Rule 18b
            sub_shift = sub_shift
                .max(metrics.sub1)
                .max(0.8f64.mul_add(-metrics.x_height, sub.height));
            make_v_list(VListParam::Shift {
                position_data: sub_shift,
                children: vec![VListChild::from(VListElem {
                    elem: sub,
                    margin_left: sub_indent,
                })],
            })
        }
        (Some(sup), None) => {
            // Rule 18c, d
            sup_shift = sup_shift
                .max(min_sup_shift)
                .max(0.25f64.mul_add(metrics.x_height, sup.depth));
            make_v_list(VListParam::Shift {
                position_data: -sup_shift,
                children: vec![sup.into()],
            })
        }
        (None, None) => return Ok(nucleus),
    };

    let class = nucleus.class;
    let mut list = make_hlist(vec![nucleus, scripts, make_kern(script_space)]);
    list.class = class;
    Ok(list)
}

#[cfg(test)]
mod tests {
    use crate::box_tree::{BoxContent, LayoutBox};
    use crate::core::render_to_box;
    use crate::context::MathContext;
    use crate::types::Settings;

    fn build(source: &str) -> LayoutBox {
        render_to_box(&MathContext::default(), source, &Settings::default()).unwrap()
    }

    fn script_offsets(root: &LayoutBox) -> Vec<f64> {
        root.iter()
            .find_map(|b| match &b.content {
                BoxContent::VList { offsets } => Some(offsets.iter().map(|o| o.shift).collect()),
                _ => None,
            })
            .unwrap_or_default()
    }

    #[test]
    fn superscript_is_raised() {
        let root = build("x^2");
        let offsets = script_offsets(&root);
        assert_eq!(offsets.len(), 1);
        assert!(offsets[0] > 0.3);
    }

    #[test]
    fn subscript_is_lowered() {
        let root = build("x_2");
        let offsets = script_offsets(&root);
        assert!(offsets[0] < 0.0);
    }

    #[test]
    fn scripts_keep_their_gap() {
        let root = build("x^2_3");
        let offsets = script_offsets(&root);
        assert_eq!(offsets.len(), 2);
        assert!(offsets[1] > offsets[0]);
        assert!(root.height > 0.5);
        assert!(root.depth > 0.1);
    }

    #[test]
    fn scripts_are_smaller_than_the_nucleus() {
        let root = build("x^x");
        let scales: Vec<f64> = root.iter().filter_map(|b| b.style.scale).collect();
        assert_eq!(scales, [1.0, 0.7]);
    }
}
