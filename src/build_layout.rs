//! The layout pass: atom tree to box tree.
//!
//! [`decompose`] validates the tree and lays out a list of atoms under a
//! [`LayoutContext`]. Each atom kind has a layout function next to its
//! command definitions under `functions/`; [`LayoutBuilder::build_atom`]
//! dispatches to them with an exhaustive match and attaches scripts
//! afterwards unless the kind places them itself.

use alloc::borrow::Cow;

use crate::atom::{Atom, AtomId, AtomKind, AtomTree, Limits, MAX_TREE_DEPTH};
use crate::box_tree::{BoxContent, LayoutBox};
use crate::build_common::{make_glue, make_glyph_in, make_hlist};
use crate::context::MathContext;
use crate::font_metrics_data::FontName;
use crate::functions::{
    accent, color, delimsizing, enclose, font, genfrac, lap, mclass, op, overline, overunder,
    placeholder, rule, sizing, spacing, sqrt, styling, supsub, symbols_ord,
};
use crate::layout_context::LayoutContext;
use crate::spacing_data::{AtomClass, spacing_between};
use crate::stack::ensure_sufficient_stack;
use crate::symbols::Mode;
use crate::types::{ParseError, ParseErrorKind};
use crate::units::calculate_size;

/// Lays out `atoms` as one horizontal list, with inter-atom glue.
///
/// Fails only if the tree is not well-formed or nests deeper than
/// [`MAX_TREE_DEPTH`]. Error and placeholder atoms lay out as markers.
pub fn decompose(
    ctx: &MathContext,
    tree: &AtomTree,
    context: &LayoutContext,
    atoms: &[AtomId],
) -> Result<Vec<LayoutBox>, ParseError> {
    tree.validate(atoms)?;
    LayoutBuilder::new(ctx, tree).build_expression(atoms, context)
}

/// How `\middle` delimiters are sized.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MiddleSizing {
    /// Outside any `\left ... \right`: natural size
    Natural,
    /// The enclosing body is being measured; middle delimiters take no room
    Measuring,
    /// Cover the given height and depth
    Extent(f64, f64),
}

/// State of one layout pass.
pub struct LayoutBuilder<'a> {
    /// Registry, symbols
    pub ctx: &'a MathContext,
    /// Tree being laid out
    pub tree: &'a AtomTree,
    depth: usize,
    /// Sizing of `\middle` delimiters in the current `\left ... \right`
    pub(crate) middle: MiddleSizing,
}

impl<'a> LayoutBuilder<'a> {
    /// Creates a builder for `tree`.
    #[must_use]
    pub const fn new(ctx: &'a MathContext, tree: &'a AtomTree) -> Self {
        Self {
            ctx,
            tree,
            depth: 0,
            middle: MiddleSizing::Natural,
        }
    }

    fn enter(&mut self) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > MAX_TREE_DEPTH {
            return Err(ParseError::new(ParseErrorKind::TooDeeplyNested {
                limit: MAX_TREE_DEPTH,
            }));
        }
        Ok(())
    }

    const fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Lays out a list of atoms, reclassifying binary operators and
    /// inserting the glue between neighbors.
    pub fn build_expression(
        &mut self,
        ids: &[AtomId],
        context: &LayoutContext,
    ) -> Result<Vec<LayoutBox>, ParseError> {
        let mut boxes = Vec::with_capacity(ids.len());
        let mut math = Vec::with_capacity(ids.len());
        for &id in ids {
            boxes.push(self.build_atom(id, context)?);
            math.push(self.tree.mode_of(id) == Mode::Math);
        }

        reclassify_bins(&mut boxes, &math);
        Ok(insert_spacing(boxes, &math, context))
    }

    /// Lays out a list of atoms into a single box.
    pub fn build_group(
        &mut self,
        ids: &[AtomId],
        context: &LayoutContext,
    ) -> Result<LayoutBox, ParseError> {
        let boxes = self.build_expression(ids, context)?;
        Ok(make_hlist(boxes))
    }

    /// Whether `atom` lays out as a single glyph, for which script drops
    /// are zero. A group holding one such atom counts too.
    ///
    /// An accent that takes its scripts on the accented character counts as
    /// that character.
    #[must_use]
    pub fn is_character_box(&self, atom: &Atom) -> bool {
        match &atom.kind {
            AtomKind::Group { body } => self.is_character_list(body),
            AtomKind::Accent { body, .. } if atom.limits == Limits::Accent => {
                self.is_character_list(body)
            }
            kind => is_symbol_kind(kind) && atom.single_char().is_some(),
        }
    }

    /// Whether `ids` is a single script-less character box.
    #[must_use]
    pub fn is_character_list(&self, ids: &[AtomId]) -> bool {
        match ids {
            [id] => self
                .tree
                .get(*id)
                .is_some_and(|inner| !inner.has_scripts() && self.is_character_box(inner)),
            _ => false,
        }
    }

    /// Lays out one atom, including its scripts.
    pub fn build_atom(
        &mut self,
        id: AtomId,
        context: &LayoutContext,
    ) -> Result<LayoutBox, ParseError> {
        let tree = self.tree;
        let atom = tree.atom(id)?;
        self.enter()?;
        let context = atom_context(atom, context);
        let result = ensure_sufficient_stack(|| self.build_kind(atom, &context));
        self.leave();
        let mut built = result?;
        built.is_tight = context.is_tight();
        Ok(built)
    }

    fn build_kind(&mut self, atom: &Atom, context: &LayoutContext) -> Result<LayoutBox, ParseError> {
        let class = atom.kind.class();
        let nucleus = match &atom.kind {
            AtomKind::Ord
            | AtomKind::Bin
            | AtomKind::Rel
            | AtomKind::Open
            | AtomKind::Close
            | AtomKind::Punct
            | AtomKind::Inner => symbols_ord::layout(self, atom, context),
            AtomKind::Op { body, symbol } => {
                if atom.has_scripts() && op::uses_limits(atom, context) {
                    let built = op::layout_with_limits(self, atom, body, *symbol, context)?;
                    return Ok(built.with_class(class));
                }
                op::layout(self, atom, body, *symbol, context)?
            }
            AtomKind::Group { body } => self.build_group(body, context)?,
            AtomKind::Genfrac {
                numer,
                denom,
                has_bar_line,
                left_delim,
                right_delim,
                math_style,
                continued,
            } => {
                let fraction = genfrac::Fraction {
                    numer,
                    denom,
                    has_bar_line: *has_bar_line,
                    left_delim: left_delim.as_deref(),
                    right_delim: right_delim.as_deref(),
                    math_style: *math_style,
                    continued: *continued,
                };
                genfrac::layout(self, &fraction, context)?
            }
            AtomKind::Surd { body, index } => sqrt::layout(self, body, index.as_deref(), context)?,
            AtomKind::Accent { body, accent, wide } => {
                if atom.limits == Limits::Accent {
                    let built =
                        accent::layout_with_scripts(self, atom, body, *accent, *wide, context)?;
                    return Ok(built.with_class(class));
                }
                accent::layout(self, body, *accent, *wide, context)?
            }
            AtomKind::OverUnder {
                body,
                above,
                below,
                brace,
            } => {
                return overunder::layout(
                    self,
                    atom,
                    overunder::Parts {
                        body,
                        above: above.as_deref(),
                        below: below.as_deref(),
                        brace: *brace,
                    },
                    context,
                );
            }
            AtomKind::LeftRight {
                body,
                left_delim,
                right_delim,
            } => delimsizing::layout_left_right(
                self,
                body,
                left_delim,
                right_delim.as_deref(),
                context,
            )?,
            AtomKind::Delim { delim } => delimsizing::layout_middle(self, delim, context),
            AtomKind::SizedDelim { delim, size, .. } => {
                delimsizing::layout_sized(self, delim, *size, context)
            }
            AtomKind::Box {
                body,
                frame,
                background,
                border_color,
            } => enclose::layout(
                self,
                body,
                enclose::Decoration {
                    frame: *frame,
                    background: background.as_deref(),
                    border_color: border_color.as_deref(),
                },
                context,
            )?,
            AtomKind::Rule {
                width,
                height,
                shift,
            } => rule::layout(width, height, shift.as_ref(), context),
            AtomKind::Line { body, position } => overline::layout(self, body, *position, context)?,
            AtomKind::Overlap { body, align } => lap::layout(self, body, *align, context)?,
            AtomKind::Spacing { glue } => {
                return Ok(spacing::layout(glue.as_ref(), context));
            }
            AtomKind::Color { body, color } => color::layout(self, body, color, context)?,
            AtomKind::Sizing { body, size } => sizing::layout(self, body, *size, context)?,
            AtomKind::MathStyle { body, style } => styling::layout(self, body, *style, context)?,
            AtomKind::Font {
                body,
                family,
                series,
                shape,
            } => font::layout(self, body, (*family, *series, *shape), context)?,
            AtomKind::MathClass { body, .. } => mclass::layout(self, body, context)?,
            AtomKind::Error { .. } => layout_error(atom, context),
            AtomKind::Placeholder => placeholder::layout(context),
        };

        let nucleus = nucleus.with_class(class);
        if atom.has_scripts() {
            supsub::layout(self, atom, nucleus, context)
        } else {
            Ok(nucleus)
        }
    }
}

/// Whether atoms of this kind are single symbols drawn from `value`.
#[must_use]
pub const fn is_symbol_kind(kind: &AtomKind) -> bool {
    matches!(
        kind,
        AtomKind::Ord
            | AtomKind::Bin
            | AtomKind::Rel
            | AtomKind::Open
            | AtomKind::Close
            | AtomKind::Punct
            | AtomKind::Inner
    )
}

/// Context for an atom after its own style overrides.
fn atom_context<'c>(atom: &Atom, context: &'c LayoutContext) -> Cow<'c, LayoutContext> {
    let style = &atom.style;
    if style.is_empty() {
        return Cow::Borrowed(context);
    }
    let mut derived = context.clone();
    if let Some(size) = style.font_size {
        derived = derived.having_size(size);
    }
    if let Some(color) = &style.color {
        derived = derived.with_color(color.clone());
    }
    if let Some(family) = style.font_family {
        derived = derived.with_font_family(family);
    }
    if let Some(series) = style.font_series {
        derived = derived.with_font_series(series);
    }
    if let Some(shape) = style.font_shape {
        derived = derived.with_font_shape(shape);
    }
    Cow::Owned(derived)
}

/// Error marker: the offending source in the error color.
fn layout_error(atom: &Atom, context: &LayoutContext) -> LayoutBox {
    let error_context = context.with_color(context.error_color.clone());
    let glyphs: Vec<LayoutBox> = atom
        .value
        .as_deref()
        .unwrap_or_default()
        .chars()
        .map(|ch| make_glyph_in(ch, FontName::MainRegular, Mode::Text, &error_context))
        .collect();

    let mut marker = make_hlist(glyphs);
    if marker.children.is_empty() {
        let metrics = context.metrics();
        marker.width = metrics.quad / 2.0;
        marker.height = metrics.x_height;
    }
    marker.content = BoxContent::Error;
    marker.style.color = Some(context.error_color.clone());
    marker
}

fn is_bin_left_cancel(class: Option<AtomClass>) -> bool {
    matches!(
        class,
        None | Some(
            AtomClass::Mbin
                | AtomClass::Mopen
                | AtomClass::Mrel
                | AtomClass::Mop
                | AtomClass::Mpunct
        )
    )
}

fn is_bin_right_cancel(class: Option<AtomClass>) -> bool {
    matches!(
        class,
        None | Some(AtomClass::Mrel | AtomClass::Mclose | AtomClass::Mpunct)
    )
}

/// Turns binary operators without two operands into ordinary symbols.
///
/// Boxes without a class (glue) and text-mode boxes are transparent.
fn reclassify_bins(boxes: &mut [LayoutBox], math: &[bool]) {
    let classed: Vec<usize> = (0..boxes.len())
        .filter(|&i| math[i] && boxes[i].class.is_some())
        .collect();
    for (k, &i) in classed.iter().enumerate() {
        if boxes[i].class != Some(AtomClass::Mbin) {
            continue;
        }
        let left = k.checked_sub(1).and_then(|p| boxes[classed[p]].class);
        let right = classed.get(k + 1).and_then(|&n| boxes[n].class);
        if is_bin_left_cancel(left) || is_bin_right_cancel(right) {
            boxes[i].class = Some(AtomClass::Mord);
        }
    }
}

/// Inserts the glue of the spacing table between math-mode neighbors.
fn insert_spacing(boxes: Vec<LayoutBox>, math: &[bool], context: &LayoutContext) -> Vec<LayoutBox> {
    let mut out = Vec::with_capacity(boxes.len() * 2);
    let mut previous: Option<AtomClass> = None;
    for (built, &is_math) in boxes.into_iter().zip(math) {
        if is_math && let Some(class) = built.class {
            if let Some(left) = previous
                && let Some(space) = spacing_between(left, class, context.is_tight())
            {
                let width = calculate_size(space, context);
                if width != 0.0 {
                    out.push(make_glue(width, 0.0, 0.0));
                }
            }
            previous = Some(class);
        } else if !is_math {
            previous = None;
        }
        out.push(built);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse;
    use crate::types::Settings;

    fn layout(source: &str) -> Vec<LayoutBox> {
        let ctx = MathContext::default();
        let parsed = parse(&ctx, source, &Settings::default()).unwrap();
        decompose(&ctx, &parsed.tree, &LayoutContext::default(), &parsed.root).unwrap()
    }

    fn glue_widths(boxes: &[LayoutBox]) -> Vec<f64> {
        boxes.iter().filter(|b| b.is_glue()).map(|b| b.width).collect()
    }

    #[test]
    fn relations_get_thick_spaces() {
        let boxes = layout("a=b");
        let thick = 5.0 / 18.0;
        let widths = glue_widths(&boxes);
        assert_eq!(widths.len(), 2);
        assert!(widths.iter().all(|w| (w - thick).abs() < 1e-9));
    }

    #[test]
    fn binary_operators_get_medium_spaces() {
        let boxes = layout("a+b");
        let medium = 4.0 / 18.0;
        let widths = glue_widths(&boxes);
        assert_eq!(widths.len(), 2);
        assert!(widths.iter().all(|w| (w - medium).abs() < 1e-9));
    }

    #[test]
    fn trailing_bin_becomes_ord() {
        let boxes = layout("a+");
        assert!(glue_widths(&boxes).is_empty());
        assert_eq!(boxes[1].class, Some(AtomClass::Mord));
    }

    #[test]
    fn bin_before_relation_becomes_ord() {
        let boxes = layout("a+=b");
        assert_eq!(boxes.iter().filter(|b| b.class == Some(AtomClass::Mbin)).count(), 0);
    }

    #[test]
    fn scripts_have_no_spacing_table_entries_for_ord_pairs() {
        let boxes = layout("ab");
        assert!(glue_widths(&boxes).is_empty());
        assert!(boxes[0].width > 0.0);
    }

    #[test]
    fn error_atoms_become_markers() {
        let boxes = layout("\\foo");
        assert!(boxes[0].has_error());
        assert_eq!(boxes[0].style.color.as_deref(), Some("#cc0000"));
    }

    #[test]
    fn cyclic_trees_are_rejected() {
        let ctx = MathContext::default();
        let mut tree = AtomTree::new();
        let leaf = tree.push(Atom::new(AtomKind::Ord, Mode::Math).with_value("x"));
        let group = tree.push(Atom::new(AtomKind::Group { body: vec![leaf] }, Mode::Math));
        tree.get_mut(leaf).unwrap().kind = AtomKind::Group { body: vec![group] };
        let err = decompose(&ctx, &tree, &LayoutContext::default(), &[group]).unwrap_err();
        assert_eq!(err.code(), "cyclic-tree");
    }

    #[test]
    fn layout_is_deterministic() {
        let source = "\\frac{a+b}{\\sqrt{c}}\\sum_{i=0}^n x_i";
        assert_eq!(layout(source), layout(source));
    }
}
