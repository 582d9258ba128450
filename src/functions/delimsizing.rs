//! Delimiters: `\big` and friends, and the layout of `\left ... \right`
//! pairs and `\middle`. The parser reads `\left`, `\middle` and `\right`
//! itself, since they bracket content rather than take arguments.

use phf::{Map, Set, phf_map, phf_set};

use crate::atom::{Atom, AtomId, AtomKind};
use crate::box_tree::LayoutBox;
use crate::build_common::{make_hlist, make_kern};
use crate::build_layout::{LayoutBuilder, MiddleSizing};
use crate::context::MathContext;
use crate::define_function::{Argument, FunctionContext, FunctionDefSpec, FunctionPropSpec, take_text};
use crate::delimiter::{
    NULL_DELIMITER_SPACE, custom_sized_delim, left_right_delim, sized_delim,
};
use crate::layout_context::LayoutContext;
use crate::spacing_data::AtomClass;
use crate::types::{ArgSpec, ArgType, ErrorCode, ParseError};

/// Size and spacing class of each sizing command.
const DELIMITER_SIZES: Map<&'static str, (usize, AtomClass)> = phf_map! {
    "\\bigl" => (1, AtomClass::Mopen),
    "\\Bigl" => (2, AtomClass::Mopen),
    "\\biggl" => (3, AtomClass::Mopen),
    "\\Biggl" => (4, AtomClass::Mopen),
    "\\bigr" => (1, AtomClass::Mclose),
    "\\Bigr" => (2, AtomClass::Mclose),
    "\\biggr" => (3, AtomClass::Mclose),
    "\\Biggr" => (4, AtomClass::Mclose),
    "\\bigm" => (1, AtomClass::Mrel),
    "\\Bigm" => (2, AtomClass::Mrel),
    "\\biggm" => (3, AtomClass::Mrel),
    "\\Biggm" => (4, AtomClass::Mrel),
    "\\big" => (1, AtomClass::Mord),
    "\\Big" => (2, AtomClass::Mord),
    "\\bigg" => (3, AtomClass::Mord),
    "\\Bigg" => (4, AtomClass::Mord),
};

/// Everything accepted after `\left`, `\right`, `\middle` and `\big`.
const DELIMITERS: Set<&'static str> = phf_set! {
    "(", ")", "[", "]", "\\{", "\\}",
    "\\lfloor", "\\rfloor", "\\lceil", "\\rceil",
    "\\langle", "\\rangle",
    "/", "\\backslash",
    "|", "\\|", "\\lvert", "\\rvert", "\\lVert", "\\rVert",
    "\\uparrow", "\\Uparrow", "\\downarrow", "\\Downarrow",
    "\\updownarrow", "\\Updownarrow",
    ".",
};

/// Whether `delim` (already normalized) can be used as a delimiter.
#[must_use]
pub fn is_delimiter(delim: &str) -> bool {
    DELIMITERS.contains(delim)
}

/// Canonical spelling of a delimiter, so that `\lbrace`, `\{` and `{`-like
/// aliases compare and serialize the same way.
#[must_use]
pub fn normalize_delimiter(delim: &str) -> String {
    let delim = delim.trim();
    match delim {
        "\\lparen" => "(",
        "\\rparen" => ")",
        "\\lbrack" => "[",
        "\\rbrack" => "]",
        "\\lbrace" => "\\{",
        "\\rbrace" => "\\}",
        "\\vert" | "\u{2223}" => "|",
        "\\Vert" | "\u{2225}" => "\\|",
        "<" | "\\lt" | "\u{27e8}" => "\\langle",
        ">" | "\\gt" | "\u{27e9}" => "\\rangle",
        "\u{230a}" => "\\lfloor",
        "\u{230b}" => "\\rfloor",
        "\u{2308}" => "\\lceil",
        "\u{2309}" => "\\rceil",
        "\u{2191}" => "\\uparrow",
        "\u{2193}" => "\\downarrow",
        "\u{21d1}" => "\\Uparrow",
        "\u{21d3}" => "\\Downarrow",
        other => other,
    }
    .to_owned()
}

/// Registers `\big`, `\Big`, `\bigg`, `\Bigg` and their `l`, `r`, `m`
/// variants.
pub fn define_delimsizing(ctx: &mut MathContext) {
    let names: Vec<&'static str> = DELIMITER_SIZES.keys().copied().collect();
    ctx.define_function(FunctionDefSpec {
        names: &names,
        props: FunctionPropSpec {
            args: vec![ArgSpec::required(ArgType::Delimiter)],
            ..Default::default()
        },
        handler: |context: FunctionContext<'_>, mut args: Vec<Option<Argument>>| {
            let (size, class) = DELIMITER_SIZES
                .get(context.func_name)
                .copied()
                .ok_or(ErrorCode::UnknownCommand)?;
            let delim = take_text(&mut args, 0).unwrap_or_else(|| ".".to_owned());
            Ok(Atom::new(
                AtomKind::SizedDelim { delim, size, class },
                context.mode,
            ))
        },
    });
}

/// Command writing a sized delimiter of `size` and `class`.
#[must_use]
pub fn sizing_command(size: usize, class: AtomClass) -> Option<&'static str> {
    DELIMITER_SIZES
        .entries()
        .find(|(_, entry)| **entry == (size, class))
        .map(|(name, _)| *name)
}

/// Lays out `\left ... \right`.
///
/// The body is measured first; when it holds `\middle` delimiters it is
/// laid out again with them sized to the measured extent.
pub fn layout_left_right(
    builder: &mut LayoutBuilder<'_>,
    body: &[AtomId],
    left_delim: &str,
    right_delim: Option<&str>,
    context: &LayoutContext,
) -> Result<LayoutBox, ParseError> {
    let outer = builder.middle;
    let has_middle = body.iter().any(|id| {
        builder
            .tree
            .get(*id)
            .is_some_and(|atom| matches!(atom.kind, AtomKind::Delim { .. }))
    });

    builder.middle = MiddleSizing::Measuring;
    let measured = builder.build_expression(body, context);
    let mut inner = match measured {
        Ok(inner) => inner,
        Err(err) => {
            builder.middle = outer;
            return Err(err);
        }
    };
    let (height, depth) = inner
        .iter()
        .fold((0.0f64, 0.0f64), |(h, d), b| (h.max(b.height), d.max(b.depth)));

    if has_middle {
        builder.middle = MiddleSizing::Extent(height, depth);
        let rebuilt = builder.build_expression(body, context);
        builder.middle = outer;
        inner = rebuilt?;
    } else {
        builder.middle = outer;
    }

    let left = left_right_delim(builder.ctx, left_delim, height, depth, context)
        .with_class(AtomClass::Mopen);
    let right = match right_delim {
        Some(delim) => left_right_delim(builder.ctx, delim, height, depth, context),
        None => make_kern(NULL_DELIMITER_SPACE * context.size_multiplier),
    }
    .with_class(AtomClass::Mclose);

    let mut children = Vec::with_capacity(inner.len() + 2);
    children.push(left);
    children.extend(inner);
    children.push(right);
    Ok(make_hlist(children))
}

/// Lays out a `\middle` delimiter.
pub fn layout_middle(builder: &LayoutBuilder<'_>, delim: &str, context: &LayoutContext) -> LayoutBox {
    match builder.middle {
        MiddleSizing::Extent(height, depth) => {
            left_right_delim(builder.ctx, delim, height, depth, context)
        }
        MiddleSizing::Measuring => LayoutBox::default(),
        MiddleSizing::Natural => custom_sized_delim(builder.ctx, delim, 0.0, true, context),
    }
}

/// Lays out `\big` and friends.
#[must_use]
pub fn layout_sized(
    builder: &LayoutBuilder<'_>,
    delim: &str,
    size: usize,
    context: &LayoutContext,
) -> LayoutBox {
    sized_delim(builder.ctx, delim, size, context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::box_tree::BoxContent;
    use crate::core::render_to_box;
    use crate::font_metrics_data::FontName;
    use crate::types::Settings;

    fn build(source: &str) -> LayoutBox {
        render_to_box(&MathContext::default(), source, &Settings::default()).unwrap()
    }

    fn delimiters(root: &LayoutBox) -> Vec<&LayoutBox> {
        root.iter()
            .filter(|b| {
                matches!(b.glyph_text(), Some("(" | ")" | "\u{2223}"))
                    || matches!(b.content, BoxContent::Stretchy { .. })
            })
            .collect()
    }

    #[test]
    fn aliases_normalize() {
        assert_eq!(normalize_delimiter("\\lbrace"), "\\{");
        assert_eq!(normalize_delimiter("<"), "\\langle");
        assert_eq!(normalize_delimiter(" ( "), "(");
        assert!(is_delimiter(&normalize_delimiter("\\vert")));
        assert!(!is_delimiter("x"));
    }

    #[test]
    fn delimiters_grow_with_the_body() {
        let small = build("\\left(x\\right)");
        let tall = build("\\left(\\frac{\\frac{a}{b}}{\\frac{c}{d}}\\right)");
        let small_paren = delimiters(&small)[0].total_height();
        let tall_paren = delimiters(&tall)[0].total_height();
        assert!(tall_paren > small_paren);
    }

    #[test]
    fn middle_matches_the_pair() {
        let root = build("\\left(\\frac{a}{b}\\middle|\\frac{c}{d}\\right)");
        let found = delimiters(&root);
        assert_eq!(found.len(), 3);
        assert!((found[0].total_height() - found[2].total_height()).abs() < 1e-9);

        // Taller than the bar at its natural size
        let bar = build("\\left.\\middle|\\right.");
        let natural = delimiters(&bar)[0].total_height();
        assert!(found[1].total_height() > natural);
    }

    #[test]
    fn missing_right_delimiter_is_null() {
        let root = build("\\left(x");
        assert!(root.has_error());
        assert_eq!(delimiters(&root).len(), 1);
    }

    #[test]
    fn big_commands_pick_sizes_and_classes() {
        let root = build("\\bigl(x\\bigr)");
        let fonts: Vec<_> = root
            .iter()
            .filter(|b| matches!(b.glyph_text(), Some("(" | ")")))
            .map(|b| b.style.font)
            .collect();
        assert_eq!(fonts, [Some(FontName::Size1Regular); 2]);
        let classes: Vec<_> = root.children.iter().filter_map(|b| b.class).collect();
        assert_eq!(
            classes,
            [AtomClass::Mopen, AtomClass::Mord, AtomClass::Mclose]
        );
        assert_eq!(sizing_command(3, AtomClass::Mrel), Some("\\biggm"));
    }
}
