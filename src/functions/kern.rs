//! Explicit space: `\kern`, `\mkern`, `\hskip`, `\mskip` and `\hspace`.

use crate::atom::{Atom, AtomKind};
use crate::context::MathContext;
use crate::define_function::{Argument, FunctionContext, FunctionDefSpec, FunctionPropSpec};
use crate::functions::spacing::rigid;
use crate::types::{ArgSpec, ArgType, ErrorCode};
use crate::units::Glue;

fn take_glue(args: &mut [Option<Argument>]) -> Glue {
    // An invalid length has been reported; the space collapses
    args.get_mut(0)
        .and_then(Option::take)
        .and_then(Argument::into_glue)
        .unwrap_or_else(|| rigid(0.0, "em"))
}

/// Registers the explicit space commands.
pub fn define_kern(ctx: &mut MathContext) {
    ctx.define_function(FunctionDefSpec {
        names: &["\\kern", "\\mkern"],
        props: FunctionPropSpec {
            args: vec![ArgSpec::required(ArgType::Dimension)],
            allowed_in_text: true,
            primitive: true,
            ..Default::default()
        },
        handler: |context: FunctionContext<'_>, mut args: Vec<Option<Argument>>| {
            let kind = AtomKind::Spacing {
                glue: Some(take_glue(&mut args)),
            };
            Ok::<_, ErrorCode>(Atom::new(kind, context.mode))
        },
    });

    ctx.define_function(FunctionDefSpec {
        names: &["\\hskip", "\\mskip"],
        props: FunctionPropSpec {
            args: vec![ArgSpec::required(ArgType::Glue)],
            allowed_in_text: true,
            primitive: true,
            ..Default::default()
        },
        handler: |context: FunctionContext<'_>, mut args: Vec<Option<Argument>>| {
            let kind = AtomKind::Spacing {
                glue: Some(take_glue(&mut args)),
            };
            Ok::<_, ErrorCode>(Atom::new(kind, context.mode))
        },
    });

    ctx.define_function(FunctionDefSpec {
        names: &["\\hspace"],
        props: FunctionPropSpec {
            args: vec![ArgSpec::required(ArgType::Glue)],
            allowed_in_text: true,
            ..Default::default()
        },
        handler: |context: FunctionContext<'_>, mut args: Vec<Option<Argument>>| {
            let kind = AtomKind::Spacing {
                glue: Some(take_glue(&mut args)),
            };
            Ok::<_, ErrorCode>(Atom::new(kind, context.mode))
        },
    });
}
