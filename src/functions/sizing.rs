//! Size commands, `\tiny` through `\Huge`.

use crate::atom::{Atom, AtomId, AtomKind};
use crate::box_tree::LayoutBox;
use crate::build_layout::LayoutBuilder;
use crate::context::MathContext;
use crate::define_function::{Argument, FunctionContext, FunctionDefSpec, FunctionPropSpec, take_atoms};
use crate::layout_context::LayoutContext;
use crate::types::{ErrorCode, ParseError};

/// Size commands, smallest first. Size `n` is entry `n - 1`.
pub const SIZE_FUNCS: [&str; 11] = [
    "\\tiny",
    "\\sixptsize",
    "\\scriptsize",
    "\\footnotesize",
    "\\small",
    "\\normalsize",
    "\\large",
    "\\Large",
    "\\LARGE",
    "\\huge",
    "\\Huge",
];

/// The command selecting `size`.
#[must_use]
pub fn size_command(size: usize) -> Option<&'static str> {
    size.checked_sub(1).and_then(|i| SIZE_FUNCS.get(i)).copied()
}

/// Registers the size commands. Each applies to the rest of its group.
pub fn define_sizing(ctx: &mut MathContext) {
    ctx.define_function(FunctionDefSpec {
        names: &SIZE_FUNCS,
        props: FunctionPropSpec {
            allowed_in_text: true,
            rest_of_group: true,
            ..Default::default()
        },
        handler: |context: FunctionContext<'_>, mut args: Vec<Option<Argument>>| {
            let size = SIZE_FUNCS
                .iter()
                .position(|name| *name == context.func_name)
                .ok_or(ErrorCode::UnknownCommand)?
                + 1;
            let body = take_atoms(&mut args, 0);
            Ok(Atom::new(AtomKind::Sizing { body, size }, context.mode))
        },
    });
}

/// Lays out `body` at `size`.
pub fn layout(
    builder: &mut LayoutBuilder<'_>,
    body: &[AtomId],
    size: usize,
    context: &LayoutContext,
) -> Result<LayoutBox, ParseError> {
    builder.build_group(body, &context.having_size(size))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render_to_box;
    use crate::types::Settings;

    fn width(source: &str) -> f64 {
        render_to_box(&MathContext::default(), source, &Settings::default())
            .unwrap()
            .width
    }

    #[test]
    fn sizes_scale_the_glyphs() {
        let normal = width("x");
        assert!((width("\\Large x") - 1.44 * normal).abs() < 1e-9);
        assert!((width("\\tiny x") - 0.5 * normal).abs() < 1e-9);
        assert!((width("\\normalsize x") - normal).abs() < 1e-9);
    }

    #[test]
    fn size_ends_with_the_group() {
        let mixed = width("{\\large x}x");
        let normal = width("x");
        assert!((mixed - 2.2 * normal).abs() < 1e-9);
    }

    #[test]
    fn commands_round_trip() {
        assert_eq!(size_command(6), Some("\\normalsize"));
        assert_eq!(size_command(11), Some("\\Huge"));
        assert_eq!(size_command(0), None);
        assert_eq!(size_command(12), None);
    }
}
