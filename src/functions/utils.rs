//! Helpers shared by the layout functions.

use crate::box_tree::LayoutBox;
use crate::build_common::{VListChild, VListElem, VListParam, make_v_list};
use crate::layout_context::LayoutContext;

/// Stacks `sup` above and `sub` below `base`, centered, as TeX does for
/// operators with limits (TeXbook rule 13a).
///
/// `slant` is the italic correction of an operator glyph: the limits are
/// moved apart by it so they follow the slant of an integral sign.
/// `base_shift` is how far the base has been lowered to center it on the
/// axis.
#[must_use]
pub fn assemble_sup_sub(
    base: LayoutBox,
    sup: Option<LayoutBox>,
    sub: Option<LayoutBox>,
    context: &LayoutContext,
    slant: f64,
    base_shift: f64,
) -> LayoutBox {
    let metrics = context.metrics();
    let class = base.class;

    let sup = sup.map(|elem| {
        let kern = metrics
            .big_op_spacing1
            .max(metrics.big_op_spacing3 - elem.depth);
        (elem, kern)
    });
    let sub = sub.map(|elem| {
        let kern = metrics
            .big_op_spacing2
            .max(metrics.big_op_spacing4 - elem.height);
        (elem, kern)
    });

    let width = [
        Some(base.width),
        sup.as_ref().map(|(elem, _)| elem.width),
        sub.as_ref().map(|(elem, _)| elem.width),
    ]
    .into_iter()
    .flatten()
    .fold(0.0, f64::max);

    // Limits are centered on the base, pushed apart by the slant
    let mut indents = [
        (width - base.width) / 2.0,
        sup.as_ref()
            .map_or(0.0, |(elem, _)| (width - elem.width + slant) / 2.0),
        sub.as_ref()
            .map_or(0.0, |(elem, _)| (width - elem.width - slant) / 2.0),
    ];
    let min_indent = indents.iter().copied().fold(0.0, f64::min);
    for indent in &mut indents {
        *indent -= min_indent;
    }
    let [base_indent, sup_indent, sub_indent] = indents;

    let elem = |elem: LayoutBox, indent: f64| -> VListChild {
        VListElem {
            elem,
            margin_left: Some(indent),
        }
        .into()
    };
    let big5 = metrics.big_op_spacing5;
    let base_depth = base.depth;
    let base_height = base.height;

    let mut list = match (sup, sub) {
        (Some((sup, sup_kern)), Some((sub, sub_kern))) => {
            let bottom = big5 + sub.total_height() + sub_kern + base_depth + base_shift;
            make_v_list(VListParam::Bottom {
                position_data: bottom,
                children: vec![
                    VListChild::Kern(big5.into()),
                    elem(sub, sub_indent),
                    VListChild::Kern(sub_kern.into()),
                    elem(base, base_indent),
                    VListChild::Kern(sup_kern.into()),
                    elem(sup, sup_indent),
                    VListChild::Kern(big5.into()),
                ],
            })
        }
        (None, Some((sub, sub_kern))) => {
            let top = base_height - base_shift;
            make_v_list(VListParam::Top {
                position_data: top,
                children: vec![
                    VListChild::Kern(big5.into()),
                    elem(sub, sub_indent),
                    VListChild::Kern(sub_kern.into()),
                    elem(base, base_indent),
                ],
            })
        }
        (Some((sup, sup_kern)), None) => {
            let bottom = base_depth + base_shift;
            make_v_list(VListParam::Bottom {
                position_data: bottom,
                children: vec![
                    elem(base, base_indent),
                    VListChild::Kern(sup_kern.into()),
                    elem(sup, sup_indent),
                    VListChild::Kern(big5.into()),
                ],
            })
        }
        (None, None) => return base,
    };
    list.class = class;
    list
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::box_tree::BoxContent;
    use crate::spacing_data::AtomClass;

    #[test]
    fn limits_are_centered_over_a_wide_base() {
        let context = LayoutContext::default();
        let base = LayoutBox::strut(2.0, 1.0, 0.5).with_class(AtomClass::Mop);
        let sup = LayoutBox::strut(1.0, 0.5, 0.0);
        let sub = LayoutBox::strut(0.5, 0.5, 0.0);
        let list = assemble_sup_sub(base, Some(sup), Some(sub), &context, 0.0, 0.0);

        assert_eq!(list.class, Some(AtomClass::Mop));
        assert!((list.width - 2.0).abs() < 1e-9);
        let BoxContent::VList { offsets } = &list.content else {
            panic!("expected a vertical list");
        };
        // sub, base, sup
        assert!((offsets[0].indent - 0.75).abs() < 1e-9);
        assert!(offsets[1].indent.abs() < 1e-9);
        assert!((offsets[2].indent - 0.5).abs() < 1e-9);
        assert!(offsets[1].shift.abs() < 1e-9);
        assert!(offsets[2].shift > 1.0);
        assert!(offsets[0].shift < -0.5);
    }

    #[test]
    fn slant_pushes_limits_apart() {
        let context = LayoutContext::default();
        let base = LayoutBox::strut(1.0, 1.0, 0.5);
        let sup = LayoutBox::strut(0.4, 0.5, 0.0);
        let sub = LayoutBox::strut(0.4, 0.5, 0.0);
        let list = assemble_sup_sub(base, Some(sup), Some(sub), &context, 0.2, 0.0);
        let BoxContent::VList { offsets } = &list.content else {
            panic!("expected a vertical list");
        };
        assert!(offsets[2].indent > offsets[0].indent);
    }

    #[test]
    fn missing_limits_return_the_base() {
        let context = LayoutContext::default();
        let base = LayoutBox::strut(1.0, 1.0, 0.5);
        assert_eq!(
            assemble_sup_sub(base.clone(), None, None, &context, 0.0, 0.0),
            base
        );
    }
}
