//! Generalized fractions: `\frac` and its variants, binomials, and the
//! plain TeX infix forms `\over`, `\atop`, `\choose`, `\brace`, `\brack`.
//!
//! Layout follows the TeXbook, pages 444-445, rule 15.

use crate::atom::{Atom, AtomId, AtomKind};
use crate::box_tree::LayoutBox;
use crate::build_common::{
    VListElemAndShift, VListParam, make_hlist, make_kern, make_line, make_v_list,
};
use crate::build_layout::LayoutBuilder;
use crate::context::MathContext;
use crate::define_function::{
    Argument, FunctionContext, FunctionDefSpec, FunctionPropSpec, take_atoms,
};
use crate::delimiter::{NULL_DELIMITER_SPACE, custom_sized_delim};
use crate::layout_context::LayoutContext;
use crate::style::{DISPLAY, MathStyle, SCRIPT, Style, TEXT};
use crate::types::{ArgSpec, ArgType, ErrorCode, ParseError};

/// A fraction's slots, borrowed from its atom.
#[derive(Debug, Clone, Copy)]
pub struct Fraction<'a> {
    /// Numerator
    pub numer: &'a [AtomId],
    /// Denominator
    pub denom: &'a [AtomId],
    /// Whether the bar is drawn
    pub has_bar_line: bool,
    /// Left delimiter
    pub left_delim: Option<&'a str>,
    /// Right delimiter
    pub right_delim: Option<&'a str>,
    /// Forced style
    pub math_style: Option<MathStyle>,
    /// `\cfrac`
    pub continued: bool,
}

struct Variant {
    has_bar_line: bool,
    delims: Option<(&'static str, &'static str)>,
    math_style: Option<MathStyle>,
    continued: bool,
}

fn variant(name: &str) -> Variant {
    let mut v = Variant {
        has_bar_line: true,
        delims: None,
        math_style: None,
        continued: false,
    };
    match name {
        "dfrac" => v.math_style = Some(MathStyle::Display),
        "tfrac" => v.math_style = Some(MathStyle::Text),
        "cfrac" => {
            v.math_style = Some(MathStyle::Display);
            v.continued = true;
        }
        "binom" | "choose" => {
            v.has_bar_line = false;
            v.delims = Some(("(", ")"));
        }
        "dbinom" => {
            v.has_bar_line = false;
            v.delims = Some(("(", ")"));
            v.math_style = Some(MathStyle::Display);
        }
        "tbinom" => {
            v.has_bar_line = false;
            v.delims = Some(("(", ")"));
            v.math_style = Some(MathStyle::Text);
        }
        "atop" => v.has_bar_line = false,
        "brace" => {
            v.has_bar_line = false;
            v.delims = Some(("\\{", "\\}"));
        }
        "brack" => {
            v.has_bar_line = false;
            v.delims = Some(("[", "]"));
        }
        _ => {}
    }
    v
}

/// The prefix fraction commands.
const PREFIX_FRACTIONS: [&str; 7] = [
    "\\frac", "\\dfrac", "\\tfrac", "\\cfrac", "\\binom", "\\dbinom", "\\tbinom",
];

/// The infix fraction commands.
pub const INFIX_FRACTIONS: [&str; 5] = ["\\over", "\\atop", "\\choose", "\\brace", "\\brack"];

/// The prefix command producing a fraction of this shape, `\frac` when
/// none does.
#[must_use]
pub fn fraction_command(fraction: &Fraction<'_>) -> &'static str {
    PREFIX_FRACTIONS
        .into_iter()
        .find(|name| {
            let v = variant(&name[1..]);
            v.has_bar_line == fraction.has_bar_line
                && v.delims.map(|(left, _)| left) == fraction.left_delim
                && v.delims.map(|(_, right)| right) == fraction.right_delim
                && v.math_style == fraction.math_style
                && v.continued == fraction.continued
        })
        .unwrap_or("\\frac")
}

fn handler(context: FunctionContext<'_>, mut args: Vec<Option<Argument>>) -> Result<Atom, ErrorCode> {
    let numer = take_atoms(&mut args, 0);
    let denom = take_atoms(&mut args, 1);
    let v = variant(context.bare_name());
    Ok(Atom::new(
        AtomKind::Genfrac {
            numer,
            denom,
            has_bar_line: v.has_bar_line,
            left_delim: v.delims.map(|(left, _)| left.to_owned()),
            right_delim: v.delims.map(|(_, right)| right.to_owned()),
            math_style: v.math_style,
            continued: v.continued,
        },
        context.mode,
    ))
}

/// Registers the fraction commands.
pub fn define_genfrac(ctx: &mut MathContext) {
    let args = vec![ArgSpec::required(ArgType::Auto), ArgSpec::required(ArgType::Auto)];

    ctx.define_function(FunctionDefSpec {
        names: &PREFIX_FRACTIONS,
        props: FunctionPropSpec {
            args: args.clone(),
            ..Default::default()
        },
        handler,
    });

    // Infix primitives take everything before them in the group as the
    // numerator
    ctx.define_function(FunctionDefSpec {
        names: &INFIX_FRACTIONS,
        props: FunctionPropSpec {
            args,
            infix: true,
            primitive: true,
            ..Default::default()
        },
        handler,
    });
}

/// Style a fraction is set in.
const fn fraction_style(math_style: Option<MathStyle>, style: Style) -> Style {
    match math_style {
        Some(MathStyle::Display) => DISPLAY,
        Some(MathStyle::Text) if style.is_display() => TEXT,
        _ => style,
    }
}

/// Lays out a fraction.
pub fn layout(
    builder: &mut LayoutBuilder<'_>,
    fraction: &Fraction<'_>,
    context: &LayoutContext,
) -> Result<LayoutBox, ParseError> {
    let style = fraction_style(fraction.math_style, context.style);
    let frac_context = context.having_style(style);
    let metrics = frac_context.metrics();

    let mut numer = builder.build_group(fraction.numer, &context.having_style(style.frac_num()))?;
    if fraction.continued {
        // \cfrac puts a strut in the numerator
        let h_strut = 8.5 / metrics.pt_per_em;
        let d_strut = 3.5 / metrics.pt_per_em;
        numer.height = numer.height.max(h_strut);
        numer.depth = numer.depth.max(d_strut);
    }
    let denom = builder.build_group(fraction.denom, &context.having_style(style.frac_den()))?;
    let width = numer.width.max(denom.width);

    let rule = fraction
        .has_bar_line
        .then(|| make_line(width, &frac_context, None));
    let (rule_width, rule_spacing) = rule
        .as_ref()
        .map_or((0.0, frac_context.rule_thickness()), |rule| (rule.height, rule.height));

    let (mut num_shift, clearance, mut denom_shift) = if style.is_display() {
        let clearance = if rule.is_some() { 3.0 } else { 7.0 } * rule_spacing;
        (metrics.num1, clearance, metrics.denom1)
    } else if rule.is_some() {
        (metrics.num2, rule_spacing, metrics.denom2)
    } else {
        (metrics.num3, 3.0 * rule_spacing, metrics.denom2)
    };

    let numer_indent = (width - numer.width) / 2.0;
    let denom_indent = (width - denom.width) / 2.0;
    let numer_depth = numer.depth;
    let denom_height = denom.height;

    let children = if let Some(rule) = rule {
        let axis_height = metrics.axis_height;
        let above = (num_shift - numer_depth) - 0.5f64.mul_add(rule_width, axis_height);
        if above < clearance {
            num_shift += clearance - above;
        }
        let below = 0.5f64.mul_add(-rule_width, axis_height) - (denom_height - denom_shift);
        if below < clearance {
            denom_shift += clearance - below;
        }
        let mid_shift = -0.5f64.mul_add(-rule_width, axis_height);
        vec![
            VListElemAndShift {
                elem: denom,
                shift: denom_shift,
                margin_left: Some(denom_indent),
            },
            VListElemAndShift {
                elem: rule,
                shift: mid_shift,
                margin_left: None,
            },
            VListElemAndShift {
                elem: numer,
                shift: -num_shift,
                margin_left: Some(numer_indent),
            },
        ]
    } else {
        let candidate = (num_shift - numer_depth) - (denom_height - denom_shift);
        if candidate < clearance {
            num_shift += 0.5 * (clearance - candidate);
            denom_shift += 0.5 * (clearance - candidate);
        }
        vec![
            VListElemAndShift {
                elem: denom,
                shift: denom_shift,
                margin_left: Some(denom_indent),
            },
            VListElemAndShift {
                elem: numer,
                shift: -num_shift,
                margin_left: Some(numer_indent),
            },
        ]
    };
    let frac = make_v_list(VListParam::IndividualShift { children });

    let delim_size = if style.is_display() {
        metrics.delim1
    } else if style.math_style == MathStyle::ScriptScript {
        context.having_style(SCRIPT).metrics().delim2
    } else {
        metrics.delim2
    };
    let delimiter = |delim: Option<&str>| match delim {
        Some(delim) => custom_sized_delim(builder.ctx, delim, delim_size, true, &frac_context),
        None => make_kern(NULL_DELIMITER_SPACE * frac_context.size_multiplier),
    };
    let left = delimiter(fraction.left_delim);
    let right = delimiter(fraction.right_delim);

    Ok(make_hlist(vec![left, frac, right]))
}

#[cfg(test)]
mod tests {
    use crate::box_tree::{BoxContent, LayoutBox};
    use crate::context::MathContext;
    use crate::core::render_to_box;
    use crate::types::Settings;

    fn build(source: &str) -> LayoutBox {
        let settings = Settings::builder().display_mode(true).build();
        render_to_box(&MathContext::default(), source, &settings).unwrap()
    }

    fn rules(root: &LayoutBox) -> usize {
        root.iter()
            .filter(|b| matches!(b.content, BoxContent::Rule))
            .count()
    }

    #[test]
    fn fraction_straddles_the_axis() {
        let root = build("\\frac{1}{2}");
        assert_eq!(rules(&root), 1);
        let rule_thickness = 0.04;
        // The denominator clears the bar by 3 rule widths in display style
        assert!(root.depth >= 3.0 * rule_thickness + 0.25 - 1e-9);
        assert!(root.height > 0.9);
    }

    #[test]
    fn binomials_have_no_bar_and_parentheses() {
        let root = build("\\binom{n}{k}");
        assert_eq!(rules(&root), 0);
        let glyphs: Vec<&str> = root.iter().filter_map(LayoutBox::glyph_text).collect();
        assert_eq!(glyphs.first(), Some(&"("));
        assert_eq!(glyphs.last(), Some(&")"));
    }

    #[test]
    fn tfrac_is_smaller_than_dfrac() {
        let d = build("\\dfrac{a}{b}");
        let t = build("\\tfrac{a}{b}");
        assert!(t.total_height() < d.total_height());
    }

    #[test]
    fn infix_fraction_matches_frac() {
        let infix = build("a \\over b");
        let frac = build("\\frac{a}{b}");
        assert!((infix.width - frac.width).abs() < 1e-9);
        assert!((infix.height - frac.height).abs() < 1e-9);
        assert!((infix.depth - frac.depth).abs() < 1e-9);
    }
}
