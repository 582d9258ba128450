//! `\color` and `\textcolor`.

use crate::atom::{Atom, AtomId, AtomKind};
use crate::box_tree::LayoutBox;
use crate::build_layout::LayoutBuilder;
use crate::context::MathContext;
use crate::define_function::{
    Argument, FunctionContext, FunctionDefSpec, FunctionPropSpec, take_atoms, take_text,
};
use crate::layout_context::LayoutContext;
use crate::types::{ArgSpec, ArgType, ErrorCode, ParseError};

/// Validates a color argument: a name made of letters, `#rgb`, `#rrggbb`,
/// or six hex digits without the `#`. Returns the lowercased color with a
/// leading `#` for hex colors.
#[must_use]
pub fn parse_color(text: &str) -> Option<String> {
    let text = text.trim();
    let hex = |digits: &str| digits.chars().all(|c| c.is_ascii_hexdigit());
    let valid = match text.strip_prefix('#') {
        Some(digits) => matches!(digits.len(), 3 | 6) && hex(digits),
        None => {
            !text.is_empty()
                && (text.chars().all(|c| c.is_ascii_alphabetic())
                    || (text.len() == 6 && hex(text)))
        }
    };
    if !valid {
        return None;
    }
    let color = text.to_ascii_lowercase();
    if !color.starts_with('#') && color.len() == 6 && hex(&color) {
        return Some(format!("#{color}"));
    }
    Some(color)
}

/// A color atom, or a plain group when the color was invalid (the parser
/// has already reported it).
fn colored(context: &FunctionContext<'_>, color: Option<String>, body: Vec<AtomId>) -> Atom {
    let kind = match color {
        Some(color) => AtomKind::Color { body, color },
        None => AtomKind::Group { body },
    };
    Atom::new(kind, context.mode)
}

/// Registers `\color` and `\textcolor`.
pub fn define_color(ctx: &mut MathContext) {
    ctx.define_function(FunctionDefSpec {
        names: &["\\textcolor"],
        props: FunctionPropSpec {
            args: vec![
                ArgSpec::required(ArgType::Color),
                ArgSpec::required(ArgType::Auto),
            ],
            allowed_in_text: true,
            ..Default::default()
        },
        handler: |context: FunctionContext<'_>, mut args: Vec<Option<Argument>>| {
            let color = take_text(&mut args, 0);
            let body = take_atoms(&mut args, 1);
            Ok::<_, ErrorCode>(colored(&context, color, body))
        },
    });

    // \color applies to the rest of the group, like color.sty
    ctx.define_function(FunctionDefSpec {
        names: &["\\color"],
        props: FunctionPropSpec {
            args: vec![ArgSpec::required(ArgType::Color)],
            allowed_in_text: true,
            rest_of_group: true,
            ..Default::default()
        },
        handler: |context: FunctionContext<'_>, mut args: Vec<Option<Argument>>| {
            let color = take_text(&mut args, 0);
            let body = take_atoms(&mut args, 1);
            Ok::<_, ErrorCode>(colored(&context, color, body))
        },
    });
}

/// Lays out `body` in `color`.
pub fn layout(
    builder: &mut LayoutBuilder<'_>,
    body: &[AtomId],
    color: &str,
    context: &LayoutContext,
) -> Result<LayoutBox, ParseError> {
    builder.build_group(body, &context.with_color(color))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{parse, render_to_box};
    use crate::types::Settings;
    use pretty_assertions::assert_eq;

    #[test]
    fn colors_are_validated_and_normalized() {
        assert_eq!(parse_color("Red").as_deref(), Some("red"));
        assert_eq!(parse_color("#ABC").as_deref(), Some("#abc"));
        assert_eq!(parse_color("00ff00").as_deref(), Some("#00ff00"));
        assert_eq!(parse_color("#12"), None);
        assert_eq!(parse_color("red!50"), None);
        assert_eq!(parse_color(""), None);
    }

    #[test]
    fn color_takes_the_rest_of_the_group() {
        let ctx = MathContext::default();
        let parsed = parse(&ctx, "a{\\color{red}b+c}d", &Settings::default()).unwrap();
        assert_eq!(parsed.root.len(), 3);
        let group = parsed.tree.children(parsed.root[1]);
        let AtomKind::Color { body, color } = &parsed.tree.get(group[0]).unwrap().kind else {
            panic!("expected a color atom");
        };
        assert_eq!(color, "red");
        assert_eq!(body.len(), 3);
    }

    #[test]
    fn glyphs_carry_the_color() {
        let root = render_to_box(
            &MathContext::default(),
            "x\\textcolor{#00f}{y}",
            &Settings::default(),
        )
        .unwrap();
        let colors: Vec<_> = root
            .iter()
            .filter(|b| b.is_glyph())
            .map(|b| b.style.color.clone())
            .collect();
        assert_eq!(colors, [None, Some("#00f".to_owned())]);
    }
}
