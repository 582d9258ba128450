//! Named spaces: `\,`, `\quad`, ... and the layout of every spacing atom.

use phf::{Map, phf_map};

use crate::atom::{Atom, AtomKind};
use crate::box_tree::LayoutBox;
use crate::build_common::make_glue;
use crate::context::MathContext;
use crate::define_function::{Argument, FunctionContext, FunctionDefSpec, FunctionPropSpec};
use crate::font_metrics::get_character_metrics;
use crate::font_metrics_data::FontName;
use crate::layout_context::LayoutContext;
use crate::spacing_data::Measurement;
use crate::symbols::Mode;
use crate::types::ErrorCode;
use crate::units::{Glue, calculate_size};

/// Width of each named space, with its unit.
const SPACES: Map<&'static str, (f64, &'static str)> = phf_map! {
    "\\," => (3.0, "mu"),
    "\\thinspace" => (3.0, "mu"),
    "\\:" => (4.0, "mu"),
    "\\>" => (4.0, "mu"),
    "\\medspace" => (4.0, "mu"),
    "\\;" => (5.0, "mu"),
    "\\thickspace" => (5.0, "mu"),
    "\\!" => (-3.0, "mu"),
    "\\negthinspace" => (-3.0, "mu"),
    "\\negmedspace" => (-4.0, "mu"),
    "\\negthickspace" => (-5.0, "mu"),
    "\\enspace" => (0.5, "em"),
    "\\quad" => (1.0, "em"),
    "\\qquad" => (2.0, "em"),
};

/// Whether `name` is one of the named spaces, which take no argument.
#[must_use]
pub fn is_named_space(name: &str) -> bool {
    SPACES.contains_key(name)
}

/// Rigid glue of `number` `unit`.
#[must_use]
pub fn rigid(number: f64, unit: &str) -> Glue {
    Glue {
        glue: Measurement {
            number,
            unit: unit.to_owned(),
        },
        grow: None,
        shrink: None,
    }
}

/// Registers the named spaces.
pub fn define_spacing(ctx: &mut MathContext) {
    let names: Vec<&'static str> = SPACES.keys().copied().collect();
    ctx.define_function(FunctionDefSpec {
        names: &names,
        props: FunctionPropSpec {
            allowed_in_text: true,
            ..Default::default()
        },
        handler: |context: FunctionContext<'_>, _: Vec<Option<Argument>>| {
            let (number, unit) = SPACES
                .get(context.func_name)
                .copied()
                .ok_or(ErrorCode::UnknownCommand)?;
            let kind = AtomKind::Spacing {
                glue: Some(rigid(number, unit)),
            };
            Ok(Atom::new(kind, context.mode))
        },
    });
}

/// Lays out a space. `None` is an interword space, as wide as the space
/// character of the text font.
#[must_use]
pub fn layout(glue: Option<&Glue>, context: &LayoutContext) -> LayoutBox {
    let Some(glue) = glue else {
        let space = get_character_metrics(' ', FontName::MainRegular, Mode::Text)
            .map_or(0.25, |metrics| metrics.width);
        return make_glue(space * context.size_multiplier, 0.0, 0.0);
    };
    let size = |m: Option<&Measurement<String>>| m.map_or(0.0, |m| calculate_size(m, context));
    make_glue(
        calculate_size(&glue.glue, context),
        size(glue.grow.as_ref()),
        size(glue.shrink.as_ref()),
    )
}
