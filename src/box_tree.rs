//! The box tree produced by layout.
//!
//! Every dimension is in em of the normal size (`\normalsize`, size 6), so a
//! renderer can position boxes without knowing which size each came from.
//! Glyph boxes record the scale their font is drawn at in [`BoxStyle`].
//!
//! Horizontal lists place their children side by side on a shared baseline.
//! Vertical lists place each child at an explicit offset: how far its
//! baseline is raised above the list's baseline and how far it is moved to
//! the right.

use alloc::string::String;
use alloc::vec::Vec;
use core::iter;

use crate::font_metrics_data::FontName;
use crate::spacing_data::AtomClass;

/// Position of one child of a vertical list.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VListOffset {
    /// Distance from the list's baseline up to the child's baseline
    pub shift: f64,
    /// Horizontal offset from the list's left edge
    pub indent: f64,
}

/// Frame drawn around a box.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Frame {
    /// Line thickness
    pub thickness: f64,
    /// Line color, `None` for the foreground color
    pub color: Option<String>,
}

/// Rendering overrides carried by a box.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BoxStyle {
    /// Foreground color
    pub color: Option<String>,
    /// Font of a glyph box
    pub font: Option<FontName>,
    /// Size of the font relative to the normal size
    pub scale: Option<f64>,
    /// Background fill
    pub background: Option<String>,
    /// Frame around the box
    pub frame: Option<Frame>,
}

/// What a box draws.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum BoxContent {
    /// Nothing; used for struts and placeholders' bounding boxes
    #[default]
    Empty,
    /// Text drawn in the box's font
    Glyph {
        /// The characters
        text: String,
    },
    /// A filled rectangle covering the box
    Rule,
    /// Horizontal space
    Glue {
        /// How much the space may grow
        stretch: f64,
        /// How much the space may shrink
        shrink: f64,
    },
    /// Children side by side
    HList,
    /// Children stacked at explicit offsets, one per child
    VList {
        /// Offsets, in child order
        offsets: Vec<VListOffset>,
    },
    /// A shape stretched to the box width, e.g. `\widehat` or a brace
    Stretchy {
        /// Name of the shape
        name: String,
    },
    /// Marker for a recoverable parse error
    Error,
}

/// A dimensioned box.
///
/// Boxes are built bottom-up and are not changed once their parent has been
/// measured.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LayoutBox {
    /// Spacing class, `None` for boxes that take no inter-atom spacing
    pub class: Option<AtomClass>,
    /// What the box draws
    pub content: BoxContent,
    /// Advance width
    pub width: f64,
    /// Extent above the baseline
    pub height: f64,
    /// Extent below the baseline
    pub depth: f64,
    /// Italic correction
    pub italic: f64,
    /// Horizontal offset for accents
    pub skew: f64,
    /// Children, in paint order
    pub children: Vec<LayoutBox>,
    /// Rendering overrides
    pub style: BoxStyle,
    /// Whether the box was set in a script style
    pub is_tight: bool,
}

impl LayoutBox {
    /// An empty box with the given dimensions.
    #[must_use]
    pub fn strut(width: f64, height: f64, depth: f64) -> Self {
        Self {
            width,
            height,
            depth,
            ..Self::default()
        }
    }

    /// A box with the given content and no extent.
    #[must_use]
    pub fn with_content(content: BoxContent) -> Self {
        Self {
            content,
            ..Self::default()
        }
    }

    /// Same box with a spacing class.
    #[must_use]
    pub fn with_class(mut self, class: AtomClass) -> Self {
        self.class = Some(class);
        self
    }

    /// Same box drawn in `color`, unless it already has a color.
    #[must_use]
    pub fn with_color(mut self, color: Option<&str>) -> Self {
        if self.style.color.is_none() {
            self.style.color = color.map(String::from);
        }
        self
    }

    /// Height plus depth.
    #[must_use]
    pub fn total_height(&self) -> f64 {
        self.height + self.depth
    }

    /// Text of a glyph box.
    #[must_use]
    pub fn glyph_text(&self) -> Option<&str> {
        match &self.content {
            BoxContent::Glyph { text } => Some(text),
            _ => None,
        }
    }

    /// Whether the box is a single glyph.
    #[must_use]
    pub const fn is_glyph(&self) -> bool {
        matches!(self.content, BoxContent::Glyph { .. })
    }

    /// Whether the box is horizontal space.
    #[must_use]
    pub const fn is_glue(&self) -> bool {
        matches!(self.content, BoxContent::Glue { .. })
    }

    /// Whether any box in this subtree is an error marker.
    #[must_use]
    pub fn has_error(&self) -> bool {
        matches!(self.content, BoxContent::Error) || self.children.iter().any(Self::has_error)
    }

    /// Pre-order iterator over this box and everything below it.
    pub fn iter(&self) -> impl Iterator<Item = &Self> {
        let mut stack = vec![self];
        iter::from_fn(move || {
            let next = stack.pop()?;
            stack.extend(next.children.iter().rev());
            Some(next)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iter_visits_in_paint_order() {
        let mut root = LayoutBox::with_content(BoxContent::HList);
        let mut first = LayoutBox::with_content(BoxContent::HList);
        first.children.push(LayoutBox::with_content(BoxContent::Glyph {
            text: "a".to_owned(),
        }));
        root.children.push(first);
        root.children.push(LayoutBox::with_content(BoxContent::Glyph {
            text: "b".to_owned(),
        }));

        let glyphs: Vec<&str> = root.iter().filter_map(LayoutBox::glyph_text).collect();
        assert_eq!(glyphs, ["a", "b"]);
    }

    #[test]
    fn color_does_not_override_inner_color() {
        let inner = LayoutBox::strut(1.0, 0.5, 0.0).with_color(Some("red"));
        let inner = inner.with_color(Some("blue"));
        assert_eq!(inner.style.color.as_deref(), Some("red"));
        assert!((inner.total_height() - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn errors_are_found_anywhere_in_the_tree() {
        let mut root = LayoutBox::with_content(BoxContent::HList);
        assert!(!root.has_error());
        root.children.push(LayoutBox::with_content(BoxContent::Error));
        assert!(root.has_error());
    }
}
