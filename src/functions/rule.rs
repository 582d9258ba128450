//! `\rule[raise]{width}{height}`.

use crate::atom::{Atom, AtomKind};
use crate::box_tree::LayoutBox;
use crate::build_common::make_rule;
use crate::context::MathContext;
use crate::define_function::{Argument, FunctionContext, FunctionDefSpec, FunctionPropSpec};
use crate::layout_context::LayoutContext;
use crate::spacing_data::{Measurement, MeasurementOwned};
use crate::types::{ArgSpec, ArgType, ErrorCode};
use crate::units::calculate_size;

fn dimension(args: &mut [Option<Argument>], index: usize) -> Option<MeasurementOwned> {
    args.get_mut(index)
        .and_then(Option::take)
        .and_then(Argument::into_dimension)
}

/// Registers `\rule`.
pub fn define_rule(ctx: &mut MathContext) {
    ctx.define_function(FunctionDefSpec {
        names: &["\\rule"],
        props: FunctionPropSpec {
            args: vec![
                ArgSpec::optional(ArgType::Dimension),
                ArgSpec::required(ArgType::Dimension),
                ArgSpec::required(ArgType::Dimension),
            ],
            allowed_in_text: true,
            ..Default::default()
        },
        handler: |context: FunctionContext<'_>, mut args: Vec<Option<Argument>>| {
            // A bad length has been reported already
            let zero = || Measurement {
                number: 0.0,
                unit: "em".to_owned(),
            };
            let kind = AtomKind::Rule {
                shift: dimension(&mut args, 0),
                width: dimension(&mut args, 1).unwrap_or_else(zero),
                height: dimension(&mut args, 2).unwrap_or_else(zero),
            };
            Ok::<_, ErrorCode>(Atom::new(kind, context.mode))
        },
    });
}

/// Lays out a rule sitting on the baseline, raised by `shift`.
#[must_use]
pub fn layout(
    width: &MeasurementOwned,
    height: &MeasurementOwned,
    shift: Option<&MeasurementOwned>,
    context: &LayoutContext,
) -> LayoutBox {
    let width = calculate_size(width, context);
    let height = calculate_size(height, context);
    let shift = shift.map_or(0.0, |shift| calculate_size(shift, context));
    make_rule(width, height + shift, -shift)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::box_tree::BoxContent;
    use crate::core::render_to_box;
    use crate::types::Settings;

    fn rule(source: &str) -> LayoutBox {
        let root = render_to_box(&MathContext::default(), source, &Settings::default()).unwrap();
        root.iter()
            .find(|b| b.content == BoxContent::Rule)
            .cloned()
            .unwrap()
    }

    #[test]
    fn rule_dimensions() {
        let r = rule("\\rule{1em}{0.5em}");
        assert!((r.width - 1.0).abs() < 1e-9);
        assert!((r.height - 0.5).abs() < 1e-9);
        assert!(r.depth.abs() < 1e-9);
    }

    #[test]
    fn raised_and_lowered_rules() {
        let raised = rule("\\rule[0.25em]{1em}{0.5em}");
        assert!((raised.height - 0.75).abs() < 1e-9);
        assert!((raised.depth + 0.25).abs() < 1e-9);

        let lowered = rule("\\rule[-0.25em]{1em}{0.5em}");
        assert!((lowered.height - 0.25).abs() < 1e-9);
        assert!((lowered.depth - 0.25).abs() < 1e-9);
    }
}
