//! Text inside math: `\text` and the `\textxx` font commands.

use phf::{Map, phf_map};

use crate::atom::{Atom, AtomKind};
use crate::context::MathContext;
use crate::define_function::{
    Argument, FunctionContext, FunctionDefSpec, FunctionPropSpec, take_atoms,
};
use crate::functions::font::FontOverrides;
use crate::layout_context::{FontFamily, FontSeries, FontShape};
use crate::types::{ArgSpec, ArgType, ErrorCode};

/// Text commands and the font properties each one changes.
pub const TEXT_FONTS: Map<&'static str, FontOverrides> = phf_map! {
    "\\text" => (None, None, None),
    "\\textrm" => (Some(FontFamily::Roman), None, None),
    "\\textsf" => (Some(FontFamily::SansSerif), None, None),
    "\\texttt" => (Some(FontFamily::Typewriter), None, None),
    "\\textbf" => (None, Some(FontSeries::Bold), None),
    "\\textit" => (None, None, Some(FontShape::Italic)),
    "\\textnormal" => (Some(FontFamily::Roman), Some(FontSeries::Medium), Some(FontShape::Upright)),
};

/// Registers the text commands. The argument is parsed in text mode, and
/// the commands nest inside each other.
pub fn define_text(ctx: &mut MathContext) {
    let names: Vec<&'static str> = TEXT_FONTS.keys().copied().collect();
    ctx.define_function(FunctionDefSpec {
        names: &names,
        props: FunctionPropSpec {
            args: vec![ArgSpec::required(ArgType::Text)],
            allowed_in_text: true,
            ..Default::default()
        },
        handler: |context: FunctionContext<'_>, mut args: Vec<Option<Argument>>| {
            let (family, series, shape) = TEXT_FONTS
                .get(context.func_name)
                .copied()
                .ok_or(ErrorCode::UnknownCommand)?;
            let kind = AtomKind::Font {
                body: take_atoms(&mut args, 0),
                family,
                series,
                shape,
            };
            Ok(Atom::new(kind, context.mode))
        },
    });
}

/// The text command equivalent to `overrides`, if any.
#[must_use]
pub fn text_font_command(overrides: FontOverrides) -> Option<&'static str> {
    TEXT_FONTS
        .entries()
        .find(|(_, entry)| **entry == overrides)
        .map(|(name, _)| *name)
}
