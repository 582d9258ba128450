#![allow(dead_code)]

use std::{
    panic::{UnwindSafe, catch_unwind},
    sync::OnceLock,
};

use mathbox::{
    Atom, AtomId, AtomTree, Branch, LayoutBox, MathContext, ParseError, ParsedMath, Settings,
    StrictMode, parse, render_to_box, types::ErrorCode,
};

static DEFAULT_CONTEXT: OnceLock<MathContext> = OnceLock::new();
pub fn default_ctx() -> &'static MathContext {
    DEFAULT_CONTEXT.get_or_init(MathContext::default)
}

pub struct TestExpr<'a> {
    pub expr: String,
    pub ctx: &'a MathContext,
    pub file: &'static str,
    pub line: u32,
    pub code: &'static str,
}

/// An atom with its slots replaced by the shapes of their content, so that
/// trees from different parses compare independently of arena order and
/// source positions.
#[derive(Debug, PartialEq)]
pub struct Shape {
    pub atom: Atom,
    pub branches: Vec<(Branch, Vec<Shape>)>,
}

pub fn shapes(tree: &AtomTree, ids: &[AtomId]) -> Vec<Shape> {
    ids.iter()
        .filter_map(|id| tree.get(*id))
        .map(|atom| {
            let branches: Vec<(Branch, Vec<Shape>)> = atom
                .branches()
                .into_iter()
                .map(|(branch, children)| (branch, shapes(tree, children)))
                .collect();
            let mut atom = atom.clone();
            atom.loc = None;
            atom.parent = None;
            for (branch, _) in &branches {
                if let Some(list) = atom.branch_mut(*branch) {
                    list.clear();
                }
            }
            Shape { atom, branches }
        })
        .collect()
}

pub fn error_codes(parsed: &ParsedMath) -> Vec<ErrorCode> {
    parsed
        .tree
        .errors(&parsed.root)
        .into_iter()
        .map(|(_, code)| code.clone())
        .collect()
}

impl TestExpr<'_> {
    fn location(&self) -> String {
        format!("{}:{} ({})", self.file, self.line, self.code)
    }

    pub fn to_parse(self, settings: &Settings) -> Result<(), ParseError> {
        let parsed = parse(self.ctx, &self.expr, settings)?;
        let codes = error_codes(&parsed);
        if codes.is_empty() {
            Ok(())
        } else {
            Err(ParseError::new(format!(
                "expected '{}' to parse cleanly, got {codes:?} at {}",
                self.expr,
                self.location()
            )))
        }
    }

    pub fn not_to_parse(self, settings: &Settings) -> Result<(), ParseError> {
        match parse(self.ctx, &self.expr, settings) {
            Ok(parsed) if error_codes(&parsed).is_empty() => Err(ParseError::new(format!(
                "expected '{}' to produce errors at {}",
                self.expr,
                self.location()
            ))),
            _ => Ok(()),
        }
    }

    pub fn to_parse_like(self, other: &str, settings: &Settings) -> Result<(), ParseError> {
        let left = parse(self.ctx, &self.expr, settings)?;
        let right = parse(self.ctx, other, settings)?;
        pretty_assertions::assert_eq!(
            shapes(&left.tree, &left.root),
            shapes(&right.tree, &right.root),
            "Parse trees do not match between '{}' and '{}'",
            self.expr,
            other
        );
        Ok(())
    }

    pub fn to_have_error(self, code: &ErrorCode, settings: &Settings) -> Result<(), ParseError> {
        let parsed = parse(self.ctx, &self.expr, settings)?;
        let codes = error_codes(&parsed);
        if codes.contains(code) {
            Ok(())
        } else {
            Err(ParseError::new(format!(
                "expected '{}' to report {code}, got {codes:?} at {}",
                self.expr,
                self.location()
            )))
        }
    }

    pub fn to_build(self, settings: &Settings) -> Result<(), ParseError> {
        render_to_box(self.ctx, &self.expr, settings).map(|_| ())
    }

    pub fn to_build_like(self, other: &str, settings: &Settings) -> Result<(), ParseError> {
        let left = render_to_box(self.ctx, &self.expr, settings)?;
        let right = render_to_box(self.ctx, other, settings)?;
        pretty_assertions::assert_eq!(
            left,
            right,
            "Layouts do not match between '{}' and '{}'",
            self.expr,
            other
        );
        Ok(())
    }
}

pub fn expect_impl(
    expr: &str,
    file: &'static str,
    line: u32,
    code: &'static str,
) -> TestExpr<'static> {
    TestExpr {
        expr: expr.to_owned(),
        ctx: default_ctx(),
        file,
        line,
        code,
    }
}

#[macro_export]
macro_rules! expect {
    ($e:expr) => {
        $crate::expect_impl($e, file!(), line!(), stringify!($e))
    };
}

pub fn it<F>(desc: &str, test_fn: F)
where
    F: FnOnce() -> Result<(), ParseError> + UnwindSafe,
{
    match catch_unwind(test_fn) {
        Ok(Ok(())) => {}
        Ok(Err(e)) => panic!("Test '{desc}' failed with Result::Err: {e}"),
        Err(panic_payload) => {
            let msg = if let Some(s) = panic_payload.downcast_ref::<&str>() {
                (*s).to_owned()
            } else if let Some(s) = panic_payload.downcast_ref::<String>() {
                s.clone()
            } else {
                "<non-string panic payload>".to_owned()
            };
            panic!("Test '{desc}' panicked: {msg}");
        }
    }
}

/// Settings helpers
pub fn strict_settings() -> Settings {
    Settings::builder().strict(StrictMode::Error).build()
}

pub fn nonstrict_settings() -> Settings {
    Settings::builder().strict(StrictMode::Ignore).build()
}

pub fn display_settings() -> Settings {
    Settings::builder().display_mode(true).build()
}

pub fn non_display_settings() -> Settings {
    Settings::builder().display_mode(false).build()
}

pub fn get_parsed(expr: &str, settings: &Settings) -> Result<ParsedMath, ParseError> {
    parse(default_ctx(), expr, settings)
}

pub fn get_built(expr: &str, settings: &Settings) -> Result<LayoutBox, ParseError> {
    render_to_box(default_ctx(), expr, settings)
}

/// The top-level atom at `index`.
pub fn atom_at<'a>(parsed: &'a ParsedMath, index: usize) -> &'a Atom {
    parsed
        .tree
        .get(parsed.root[index])
        .unwrap_or_else(|| panic!("no atom at root index {index}"))
}

#[macro_export]
macro_rules! assert_let {
    ($pat:pat = $expr:expr, $($arg:tt)+) => {
        let $pat = $expr else {
            panic!($($arg)+);
        };
    };
    ($pat:pat = $expr:expr) => {
        let $pat = $expr else {
            panic!(
                "assert_let failed: pattern `{}` did not match {} at {}:{} \n{:#?}",
                stringify!($pat), stringify!($expr),
                file!(), line!(),
                $expr
            );
        };
    };
}
