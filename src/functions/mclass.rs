//! `\mathbin`, `\mathrel` and the other commands that set the spacing class
//! of their argument.

use phf::{Map, phf_map};

use crate::atom::{Atom, AtomId, AtomKind};
use crate::box_tree::LayoutBox;
use crate::build_layout::LayoutBuilder;
use crate::context::MathContext;
use crate::define_function::{
    Argument, FunctionContext, FunctionDefSpec, FunctionPropSpec, take_atoms,
};
use crate::layout_context::LayoutContext;
use crate::spacing_data::AtomClass;
use crate::types::{ArgSpec, ArgType, ErrorCode, ParseError};

const CLASSES: Map<&'static str, AtomClass> = phf_map! {
    "\\mathord" => AtomClass::Mord,
    "\\mathbin" => AtomClass::Mbin,
    "\\mathrel" => AtomClass::Mrel,
    "\\mathopen" => AtomClass::Mopen,
    "\\mathclose" => AtomClass::Mclose,
    "\\mathpunct" => AtomClass::Mpunct,
    "\\mathinner" => AtomClass::Minner,
};

/// Registers the class commands.
pub fn define_mclass(ctx: &mut MathContext) {
    let names: Vec<&'static str> = CLASSES.keys().copied().collect();
    ctx.define_function(FunctionDefSpec {
        names: &names,
        props: FunctionPropSpec {
            args: vec![ArgSpec::required(ArgType::Auto)],
            primitive: true,
            ..Default::default()
        },
        handler: |context: FunctionContext<'_>, mut args: Vec<Option<Argument>>| {
            let class = CLASSES
                .get(context.func_name)
                .copied()
                .ok_or(ErrorCode::UnknownCommand)?;
            let body = take_atoms(&mut args, 0);
            Ok(Atom::new(AtomKind::MathClass { body, class }, context.mode))
        },
    });
}

/// The command giving its argument `class`.
#[must_use]
pub fn class_command(class: AtomClass) -> Option<&'static str> {
    CLASSES
        .entries()
        .find(|(_, entry)| **entry == class)
        .map(|(name, _)| *name)
}

/// Lays out the body; the class is applied by the caller.
pub fn layout(
    builder: &mut LayoutBuilder<'_>,
    body: &[AtomId],
    context: &LayoutContext,
) -> Result<LayoutBox, ParseError> {
    builder.build_group(body, context)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::render_to_box;
    use crate::types::Settings;

    fn build(source: &str) -> LayoutBox {
        render_to_box(&MathContext::default(), source, &Settings::default()).unwrap()
    }

    #[test]
    fn mathrel_spaces_like_a_relation() {
        let rel = build("a\\mathrel{x}b");
        let plain = build("axb");
        // Thick space on both sides
        assert!(rel.width > plain.width + 0.5);
        let classes: Vec<_> = rel.children.iter().filter_map(|b| b.class).collect();
        assert_eq!(classes, [AtomClass::Mord, AtomClass::Mrel, AtomClass::Mord]);
    }

    #[test]
    fn leading_mathbin_becomes_ordinary() {
        let root = build("\\mathbin{x}a");
        assert_eq!(root.children[0].class, Some(AtomClass::Mord));
        assert_eq!(class_command(AtomClass::Mpunct), Some("\\mathpunct"));
        assert_eq!(class_command(AtomClass::Mop), None);
    }
}
