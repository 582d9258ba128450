//! Layout of single symbols: ord, bin, rel, open, close, punct and inner
//! atoms. The parser registers no commands for these; they come straight
//! from the symbol table.

use crate::atom::Atom;
use crate::box_tree::LayoutBox;
use crate::build_common::make_text;
use crate::build_layout::LayoutBuilder;
use crate::layout_context::LayoutContext;

/// Glyph box for the symbol in `atom.value`.
#[must_use]
pub fn layout(builder: &LayoutBuilder<'_>, atom: &Atom, context: &LayoutContext) -> LayoutBox {
    let text = atom.value.as_deref().unwrap_or_default();
    make_text(builder.ctx, text, atom.mode, context)
}

#[cfg(test)]
mod tests {
    use crate::box_tree::LayoutBox;
    use crate::core::render_to_box;
    use crate::context::MathContext;
    use crate::font_metrics_data::FontName;
    use crate::types::Settings;

    fn fonts(source: &str) -> Vec<FontName> {
        let root: LayoutBox =
            render_to_box(&MathContext::default(), source, &Settings::default()).unwrap();
        root.iter().filter_map(|b| b.style.font).collect()
    }

    #[test]
    fn letters_are_math_italic() {
        assert_eq!(fonts("x"), [FontName::MathItalic]);
        assert_eq!(fonts("\\alpha"), [FontName::MathItalic]);
    }

    #[test]
    fn digits_and_operators_are_upright() {
        assert_eq!(fonts("1+2"), [FontName::MainRegular; 3]);
    }

    #[test]
    fn text_mode_is_upright() {
        assert_eq!(fonts("\\text{ab}"), [FontName::MainRegular; 2]);
    }

    #[test]
    fn italic_letters_carry_italic_correction() {
        let root = render_to_box(&MathContext::default(), "f", &Settings::default()).unwrap();
        let glyph = root.iter().find(|b| b.is_glyph()).unwrap();
        assert!(glyph.italic > 0.0);
    }
}
