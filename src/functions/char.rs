//! `\char`: a character given by its code point.

use crate::atom::{Atom, AtomKind};
use crate::context::MathContext;
use crate::define_function::{Argument, FunctionContext, FunctionDefSpec, FunctionPropSpec};
use crate::types::{ArgSpec, ArgType, ErrorCode};

/// Registers `\char`.
pub fn define_char(ctx: &mut MathContext) {
    ctx.define_function(FunctionDefSpec {
        names: &["\\char"],
        props: FunctionPropSpec {
            args: vec![ArgSpec::required(ArgType::Number)],
            allowed_in_text: true,
            primitive: true,
            ..Default::default()
        },
        handler: |context: FunctionContext<'_>, args: Vec<Option<Argument>>| {
            let Some(code) = args.first().and_then(|arg| arg.as_ref()?.as_number()) else {
                // Already reported as a syntax error
                return Ok(Atom::new(AtomKind::Group { body: Vec::new() }, context.mode));
            };
            let ch = (code.fract() == 0.0 && (0.0..=f64::from(u32::MAX)).contains(&code))
                .then(|| char::from_u32(code as u32))
                .flatten()
                .ok_or(ErrorCode::SyntaxError)?;
            Ok(Atom::new(AtomKind::Ord, context.mode).with_value(ch.to_string()))
        },
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parse;
    use crate::types::Settings;
    use pretty_assertions::assert_eq;

    fn value(source: &str) -> Option<String> {
        let ctx = MathContext::default();
        let parsed = parse(&ctx, source, &Settings::default()).unwrap();
        parsed.tree.get(parsed.root[0]).unwrap().value.clone()
    }

    #[test]
    fn decimal_hex_and_octal() {
        assert_eq!(value("\\char{65}").as_deref(), Some("A"));
        assert_eq!(value("\\char\"41").as_deref(), Some("A"));
        assert_eq!(value("\\char'101").as_deref(), Some("A"));
    }

    #[test]
    fn invalid_code_points_are_errors() {
        let ctx = MathContext::default();
        let parsed = parse(&ctx, "\\char{55296}", &Settings::default()).unwrap();
        let codes: Vec<_> = parsed
            .tree
            .errors(&parsed.root)
            .into_iter()
            .map(|(_, code)| code.clone())
            .collect();
        assert_eq!(codes, [ErrorCode::SyntaxError]);
    }
}
