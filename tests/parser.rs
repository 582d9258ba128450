mod setup;

use mathbox::types::ErrorCode;
use mathbox::{AtomKind, Limits, Settings};
use pretty_assertions::assert_eq;
use setup::*;

#[test]
fn a_parser() {
    it("should parse registered commands without errors", || {
        for source in [
            "x^2_3",
            "\\frac{a}{b}+\\sqrt[3]{x}",
            "\\left(\\frac{a}{b}\\right)",
            "\\sum_{i=0}^n i^2",
            "\\text{if } x>0",
            "\\mathbf{v}\\cdot\\vec{w}",
            "{\\color{red}x}+\\textcolor{blue}{y}",
            "\\colorbox{yellow}{x}\\fbox{y}\\boxed{z}",
            "\\operatorname{sn}(x)",
            "a\\,b\\;c\\quad d\\qquad e",
            "\\rule{1em}{2pt}\\kern3mu\\hspace{1em}",
            "\\overbrace{a+b}^{n}\\underset{k}{=}",
            "\\big( x \\Big]",
            "\\displaystyle\\int_0^1 f",
            "f'(x)",
            "\\mathllap{x}\\rlap{y}",
            "\\char{65}\\char\"42",
            "\\placeholder{}",
            "\\mathrel{\\#}\\mathbin{\\star}",
            "\\large A \\tiny b",
        ] {
            expect!(source).to_parse(&Settings::default())?;
        }
        Ok(())
    });

    it("should recover from mismatched braces", || {
        expect!("{x+").to_have_error(&ErrorCode::UnbalancedBraces, &Settings::default())?;
        expect!("x+}").to_have_error(&ErrorCode::UnbalancedBraces, &Settings::default())?;
        Ok(())
    });

    it("should report unknown commands and keep going", || {
        let parsed = get_parsed("\\notacommand + x", &Settings::default())?;
        assert_eq!(error_codes(&parsed), [ErrorCode::UnknownCommand]);
        assert_eq!(parsed.root.len(), 3);
        assert_eq!(atom_at(&parsed, 0).value.as_deref(), Some("\\notacommand"));
        Ok(())
    });

    it("should report a missing \\right", || {
        expect!("\\left( x")
            .to_have_error(&ErrorCode::UnbalancedMatchfixOperator, &Settings::default())?;
        let parsed = get_parsed("\\left( x \\right)", &Settings::default())?;
        assert_let!(
            AtomKind::LeftRight {
                left_delim,
                right_delim,
                ..
            } = &atom_at(&parsed, 0).kind
        );
        assert_eq!(left_delim, "(");
        assert_eq!(right_delim.as_deref(), Some(")"));
        Ok(())
    });

    it("should not accept chained infix fractions", || {
        let parsed = get_parsed("a \\over b \\over c", &Settings::default())?;
        assert_eq!(error_codes(&parsed), [ErrorCode::NonAssociativeOperator]);
        let fractions = parsed
            .tree
            .iter()
            .filter(|(_, atom)| matches!(atom.kind, AtomKind::Genfrac { .. }))
            .count();
        assert_eq!(fractions, 1);
        Ok(())
    });

    it("should accept a comment at the end of the input in any strict mode", || {
        expect!("x % note").to_parse(&strict_settings())?;
        expect!("x % note").to_parse_like("x", &Settings::default())?;
        expect!("\\frac{a}{b}%").to_parse(&strict_settings())
    });

    it("should not warn about infix fractions outside strict mode", || {
        expect!("n \\choose k").to_parse(&Settings::default())?;
        expect!("n \\choose k")
            .to_have_error(&ErrorCode::UnexpectedSequence, &strict_settings())
    });

    it("should read a command's missing argument as a placeholder", || {
        expect!("\\frac{1}").to_have_error(
            &ErrorCode::missing_argument("\\frac", 2, 1),
            &Settings::default(),
        )
    });
}

#[test]
fn equivalent_sources() {
    it("should treat braced and bare single-token arguments alike", || {
        expect!("\\frac12").to_parse_like("\\frac{1}{2}", &Settings::default())
    });

    it("should ignore spaces in math mode", || {
        expect!("a + b").to_parse_like("a+b", &Settings::default())
    });

    it("should accept scripts in either order", || {
        expect!("x_3^2").to_parse_like("x^2_3", &Settings::default())
    });

    it("should unwrap a group holding only an infix fraction", || {
        expect!("{a \\over b}").to_parse_like("a \\over b", &Settings::default())
    });

    it("should attach \\limits to the operator", || {
        let parsed = get_parsed("\\sum\\limits_0^n", &Settings::default())?;
        assert_eq!(atom_at(&parsed, 0).limits, Limits::Limits);
        Ok(())
    });
}

#[test]
fn user_macros() {
    it("should expand macros from the settings", || {
        let mut macros = mathbox::namespace::Mapping::default();
        macros.insert(
            "\\R".to_owned(),
            mathbox::macros::MacroDefinition::new("\\mathbb{R}", 0),
        );
        let settings = Settings::builder().macros(macros).build();
        expect!("x \\in \\R").to_parse_like("x \\in \\mathbb{R}", &settings)
    });
}
