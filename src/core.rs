//! Main entry points: source to atom tree, and source to one laid-out box.

use crate::atom::{AtomId, AtomTree};
use crate::box_tree::LayoutBox;
use crate::build_common::make_hlist;
use crate::build_layout::decompose;
use crate::context::MathContext;
use crate::layout_context::LayoutContext;
use crate::macro_expander::tokenize;
use crate::parser::parse_tokens;
use crate::symbols::Mode;
use crate::types::{ParseError, Settings};

/// A parsed expression: the arena and the top-level atom list.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParsedMath {
    /// Every atom of the parse
    pub tree: AtomTree,
    /// Top-level atoms in reading order
    pub root: Vec<AtomId>,
}

impl ParsedMath {
    /// Writes the expression back as LaTeX.
    #[must_use]
    pub fn to_latex(&self) -> String {
        self.tree.to_latex(&self.root)
    }
}

/// Parses `source` in math mode.
///
/// Malformed input does not fail: it yields error atoms inside the tree.
/// Only macro recursion and excessive nesting are returned as `Err`.
pub fn parse(ctx: &MathContext, source: &str, settings: &Settings) -> Result<ParsedMath, ParseError> {
    let tokens = tokenize(ctx, source, settings)?;
    let mut tree = AtomTree::new();
    let root = parse_tokens(ctx, &mut tree, &tokens, Mode::Math, None, settings)?;
    Ok(ParsedMath { tree, root })
}

/// Parses and lays out `source`, returning a single box holding the whole
/// expression.
pub fn render_to_box(
    ctx: &MathContext,
    source: &str,
    settings: &Settings,
) -> Result<LayoutBox, ParseError> {
    let parsed = parse(ctx, source, settings)?;
    let context = LayoutContext::from_settings(settings);
    let boxes = decompose(ctx, &parsed.tree, &context, &parsed.root)?;
    Ok(make_hlist(boxes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::atom::AtomKind;
    use crate::types::ErrorCode;
    use pretty_assertions::assert_eq;

    #[test]
    fn malformed_input_still_parses() {
        let ctx = MathContext::default();
        let parsed = parse(&ctx, "{x+", &Settings::default()).unwrap();
        let codes: Vec<_> = parsed
            .tree
            .errors(&parsed.root)
            .into_iter()
            .map(|(_, code)| code.clone())
            .collect();
        assert_eq!(codes, [ErrorCode::UnbalancedBraces]);
        assert!(matches!(
            parsed.tree.get(parsed.root[0]).unwrap().kind,
            AtomKind::Group { .. }
        ));
    }

    #[test]
    fn display_mode_changes_the_layout() {
        let ctx = MathContext::default();
        let inline = render_to_box(&ctx, "\\sum_0^n", &Settings::default()).unwrap();
        let display = render_to_box(
            &ctx,
            "\\sum_0^n",
            &Settings::builder().display_mode(true).build(),
        )
        .unwrap();
        assert!(display.height > inline.height);
    }

    #[test]
    fn empty_source_gives_an_empty_box() {
        let root = render_to_box(&MathContext::default(), "", &Settings::default()).unwrap();
        assert_eq!(root.width, 0.0);
        assert!(root.children.is_empty());
    }
}
