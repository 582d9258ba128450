//! Serialization of an atom tree back to LaTeX.
//!
//! An atom that remembers the command it was parsed from is written with
//! that command; atoms built by hand get a canonical spelling. Parsing the
//! output gives back an equivalent tree, so serializing twice is stable:
//!
//! ```rust
//! use mathbox::{MathContext, Settings, parse};
//!
//! let ctx = MathContext::default();
//! let parsed = parse(&ctx, r"x^2_3 + \frac 1 2", &Settings::default()).unwrap();
//! assert_eq!(parsed.tree.to_latex(&parsed.root), r"x^{2}_{3}+\frac{1}{2}");
//! ```

use crate::atom::{
    Atom, AtomId, AtomKind, AtomTree, BracePosition, Limits, LinePosition, MAX_TREE_DEPTH,
    OverlapAlign,
};
use crate::functions::genfrac::{Fraction, INFIX_FRACTIONS, fraction_command};
use crate::functions::{accent, delimsizing, font, mclass, sizing, spacing, text};
use crate::stack::ensure_sufficient_stack;
use crate::symbols::Mode;
use crate::units::{format_glue, format_measurement};

impl AtomTree {
    /// Writes the atoms in `ids` as LaTeX. Atoms nested deeper than
    /// [`MAX_TREE_DEPTH`] are left out.
    #[must_use]
    pub fn to_latex(&self, ids: &[AtomId]) -> String {
        let mut writer = LatexWriter {
            tree: self,
            out: String::new(),
            depth: 0,
        };
        writer.list(ids);
        writer.out
    }
}

struct LatexWriter<'a> {
    tree: &'a AtomTree,
    out: String,
    depth: usize,
}

/// Whether `s` ends with a control word such as `\alpha`, which a following
/// letter would run into.
fn ends_with_control_word(s: &str) -> bool {
    let head = s.trim_end_matches(|c: char| c.is_ascii_alphabetic());
    if head.len() == s.len() {
        return false;
    }
    let slashes = head.len() - head.trim_end_matches('\\').len();
    slashes % 2 == 1
}

impl LatexWriter<'_> {
    fn push(&mut self, text: &str) {
        if text.starts_with(|c: char| c.is_ascii_alphabetic()) && ends_with_control_word(&self.out) {
            self.out.push(' ');
        }
        self.out.push_str(text);
    }

    fn list(&mut self, ids: &[AtomId]) {
        if self.depth >= MAX_TREE_DEPTH {
            return;
        }
        self.depth += 1;
        for id in ids {
            if let Some(atom) = self.tree.get(*id) {
                ensure_sufficient_stack(|| self.atom(atom));
            }
        }
        self.depth -= 1;
    }

    fn braced(&mut self, ids: &[AtomId]) {
        self.out.push('{');
        self.list(ids);
        self.out.push('}');
    }

    fn braced_text(&mut self, text: &str) {
        self.out.push('{');
        self.out.push_str(text);
        self.out.push('}');
    }

    /// A command followed by one braced argument.
    fn command_with(&mut self, command: &str, body: &[AtomId]) {
        self.push(command);
        self.braced(body);
    }

    fn atom(&mut self, atom: &Atom) {
        let command = atom.command.as_deref();
        match &atom.kind {
            AtomKind::Ord
            | AtomKind::Bin
            | AtomKind::Rel
            | AtomKind::Open
            | AtomKind::Close
            | AtomKind::Punct
            | AtomKind::Inner => self.symbol(atom),
            AtomKind::Op { body, symbol } => {
                if *symbol {
                    self.symbol(atom);
                } else if !body.is_empty() {
                    self.command_with(command.unwrap_or("\\mathop"), body);
                } else if let Some(command) = command {
                    self.push(command);
                } else {
                    self.push("\\operatorname");
                    self.braced_text(atom.value.as_deref().unwrap_or_default());
                }
            }
            AtomKind::Group { body } => self.braced(body),
            AtomKind::Genfrac {
                numer,
                denom,
                has_bar_line,
                left_delim,
                right_delim,
                math_style,
                continued,
            } => match command.filter(|c| INFIX_FRACTIONS.contains(c)) {
                Some(infix) => {
                    // The parser unwraps a group holding only an infix
                    // fraction, so the braces are written back here
                    self.out.push('{');
                    self.list(numer);
                    self.push(infix);
                    self.list(denom);
                    self.out.push('}');
                }
                None => {
                    let fraction = Fraction {
                        numer,
                        denom,
                        has_bar_line: *has_bar_line,
                        left_delim: left_delim.as_deref(),
                        right_delim: right_delim.as_deref(),
                        math_style: *math_style,
                        continued: *continued,
                    };
                    self.command_with(command.unwrap_or_else(|| fraction_command(&fraction)), numer);
                    self.braced(denom);
                }
            },
            AtomKind::Surd { body, index } => {
                self.push(command.unwrap_or("\\sqrt"));
                if let Some(index) = index {
                    self.out.push('[');
                    self.list(index);
                    self.out.push(']');
                }
                self.braced(body);
            }
            AtomKind::Accent { body, accent, wide } => {
                let name = command
                    .or_else(|| accent::accent_command(*accent, *wide))
                    .unwrap_or("\\hat");
                self.command_with(name, body);
            }
            AtomKind::OverUnder {
                body,
                above,
                below,
                brace,
            } => self.over_under(command, body, above.as_deref(), below.as_deref(), *brace),
            AtomKind::LeftRight {
                body,
                left_delim,
                right_delim,
            } => {
                self.push("\\left");
                self.push(left_delim);
                self.list(body);
                // A missing \right stays missing
                if let Some(right) = right_delim {
                    self.push("\\right");
                    self.push(right);
                }
            }
            AtomKind::Delim { delim } => {
                self.push("\\middle");
                self.push(delim);
            }
            AtomKind::SizedDelim { delim, size, class } => {
                let name = command
                    .or_else(|| delimsizing::sizing_command(*size, *class))
                    .unwrap_or("\\big");
                self.push(name);
                self.push(delim);
            }
            AtomKind::Box {
                body,
                frame,
                background,
                border_color,
            } => {
                let name = command.unwrap_or(match (frame, background) {
                    (true, Some(_)) => "\\fcolorbox",
                    (false, Some(_)) => "\\colorbox",
                    _ if atom.mode == Mode::Math && self.body_mode(body) == Some(Mode::Math) => {
                        "\\boxed"
                    }
                    _ => "\\fbox",
                });
                self.push(name);
                if name == "\\fcolorbox" {
                    self.braced_text(border_color.as_deref().unwrap_or("black"));
                }
                if let Some(background) = background.as_deref().filter(|_| name != "\\fbox") {
                    self.braced_text(background);
                }
                self.braced(body);
            }
            AtomKind::Rule {
                width,
                height,
                shift,
            } => {
                self.push(command.unwrap_or("\\rule"));
                if let Some(shift) = shift {
                    self.out.push('[');
                    self.out.push_str(&format_measurement(shift));
                    self.out.push(']');
                }
                self.braced_text(&format_measurement(width));
                self.braced_text(&format_measurement(height));
            }
            AtomKind::Line { body, position } => {
                let name = command.unwrap_or(match position {
                    LinePosition::Over => "\\overline",
                    LinePosition::Under => "\\underline",
                });
                self.command_with(name, body);
            }
            AtomKind::Overlap { body, align } => {
                let name = command.unwrap_or(match align {
                    OverlapAlign::Left => "\\mathllap",
                    OverlapAlign::Right => "\\mathrlap",
                    OverlapAlign::Center => "\\mathclap",
                });
                self.command_with(name, body);
            }
            AtomKind::Spacing { glue } => match (glue, command) {
                (None, Some(command)) => self.push(command),
                (None, None) => {
                    // A space after a control word would be swallowed
                    if ends_with_control_word(&self.out) {
                        self.out.push_str("\\ ");
                    } else {
                        self.out.push_str(atom.value.as_deref().unwrap_or(" "));
                    }
                }
                (Some(_), Some(command)) if spacing::is_named_space(command) => self.push(command),
                (Some(glue), command) => {
                    self.push(command.unwrap_or("\\hspace"));
                    self.braced_text(&format_glue(glue));
                }
            },
            AtomKind::Color { body, color } => {
                if command == Some("\\textcolor") {
                    self.push("\\textcolor");
                    self.braced_text(color);
                    self.braced(body);
                } else {
                    self.push("\\color");
                    self.braced_text(color);
                    self.list(body);
                }
            }
            AtomKind::Sizing { body, size } => {
                let name = command
                    .or_else(|| sizing::size_command(*size))
                    .unwrap_or("\\normalsize");
                self.push(name);
                self.list(body);
            }
            AtomKind::MathStyle { body, style } => {
                self.push(command.unwrap_or_else(|| style.command()));
                self.list(body);
            }
            AtomKind::Font {
                body,
                family,
                series,
                shape,
            } => {
                let overrides = (*family, *series, *shape);
                match command {
                    Some(name) if font::is_old_font_command(name) => {
                        self.push(name);
                        self.list(body);
                    }
                    Some(name) => self.command_with(name, body),
                    None => {
                        let name = if self.body_mode(body) == Some(Mode::Text) {
                            text::text_font_command(overrides).or(Some("\\text"))
                        } else {
                            font::math_font_command(overrides)
                        };
                        match name {
                            Some(name) => self.command_with(name, body),
                            None => self.braced(body),
                        }
                    }
                }
            }
            AtomKind::MathClass { body, class } => {
                let name = command
                    .or_else(|| mclass::class_command(*class))
                    .unwrap_or("\\mathord");
                self.command_with(name, body);
            }
            AtomKind::Error { .. } => {
                if let Some(source) = atom.value.as_deref() {
                    self.push(source);
                }
            }
            AtomKind::Placeholder => {
                if let Some(command) = command {
                    self.push(command);
                }
            }
        }
        self.scripts(atom);
    }

    fn symbol(&mut self, atom: &Atom) {
        match (atom.command.as_deref(), atom.single_char()) {
            (Some("\\char"), Some(ch)) => {
                self.push("\\char");
                self.braced_text(&u32::from(ch).to_string());
            }
            (Some(command), _) => self.push(command),
            (None, _) => self.push(atom.value.as_deref().unwrap_or_default()),
        }
    }

    fn over_under(
        &mut self,
        command: Option<&str>,
        body: &[AtomId],
        above: Option<&[AtomId]>,
        below: Option<&[AtomId]>,
        brace: Option<BracePosition>,
    ) {
        match (brace, above, below) {
            (Some(position), ..) => {
                let name = command.unwrap_or(match position {
                    BracePosition::Over => "\\overbrace",
                    BracePosition::Under => "\\underbrace",
                });
                self.command_with(name, body);
            }
            (None, Some(script), _) => {
                self.command_with(command.unwrap_or("\\overset"), script);
                self.braced(body);
            }
            (None, None, Some(script)) => {
                self.command_with(command.unwrap_or("\\underset"), script);
                self.braced(body);
            }
            (None, None, None) => self.braced(body),
        }
    }

    fn scripts(&mut self, atom: &Atom) {
        if matches!(atom.kind, AtomKind::Op { .. }) {
            match atom.limits {
                Limits::Limits => self.push("\\limits"),
                Limits::NoLimits => self.push("\\nolimits"),
                _ => {}
            }
        }
        if let Some(sup) = &atom.superscript {
            self.out.push('^');
            self.braced(sup);
        }
        if let Some(sub) = &atom.subscript {
            self.out.push('_');
            self.braced(sub);
        }
    }

    fn body_mode(&self, body: &[AtomId]) -> Option<Mode> {
        body.first().map(|id| self.tree.mode_of(*id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::MathContext;
    use crate::core::parse;
    use crate::types::Settings;
    use pretty_assertions::assert_eq;

    fn latex(source: &str) -> String {
        let ctx = MathContext::default();
        let parsed = parse(&ctx, source, &Settings::default()).unwrap();
        parsed.tree.to_latex(&parsed.root)
    }

    #[test]
    fn scripts_are_braced() {
        assert_eq!(latex("x^2_3"), "x^{2}_{3}");
        assert_eq!(latex("x_3^2"), "x^{2}_{3}");
        assert_eq!(latex("\\sum\\limits_0^n"), "\\sum\\limits^{n}_{0}");
    }

    #[test]
    fn commands_keep_their_spelling() {
        assert_eq!(latex("\\frac12"), "\\frac{1}{2}");
        assert_eq!(latex("\\dfrac{a}{b}"), "\\dfrac{a}{b}");
        assert_eq!(latex("\\sqrt[3]{x}"), "\\sqrt[3]{x}");
        assert_eq!(latex("\\alpha+\\beta"), "\\alpha+\\beta");
        assert_eq!(latex("\\left(x\\middle|y\\right)"), "\\left(x\\middle|y\\right)");
    }

    #[test]
    fn control_words_are_separated_from_letters() {
        assert_eq!(latex("\\alpha x"), "\\alpha x");
        assert_eq!(latex("\\alpha 2"), "\\alpha2");
        assert_eq!(latex("\\displaystyle x"), "\\displaystyle x");
        assert!(ends_with_control_word("a\\sin"));
        assert!(!ends_with_control_word("a\\\\sin"));
        assert!(!ends_with_control_word("\\,"));
    }

    #[test]
    fn infix_fractions_are_written_in_braces() {
        assert_eq!(latex("a \\over b"), "{a\\over b}");
        assert_eq!(latex("{n \\choose k}x"), "{n\\choose k}x");
    }

    #[test]
    fn rest_of_group_commands_are_not_braced() {
        assert_eq!(latex("a{\\color{red}b c}"), "a{\\color{red}bc}");
        assert_eq!(latex("\\large x"), "\\large x");
        assert_eq!(latex("\\textcolor{blue}{y}"), "\\textcolor{blue}{y}");
    }

    #[test]
    fn text_keeps_its_spaces() {
        assert_eq!(latex("\\text{a b}"), "\\text{a b}");
        assert_eq!(latex("\\textbf{x--y}"), "\\textbf{x--y}");
    }

    #[test]
    fn lengths_are_normalized() {
        assert_eq!(latex("a\\kern1em b"), "a\\kern{1em}b");
        assert_eq!(latex("\\mskip{3mu plus 2mu}"), "\\mskip{3mu plus 2mu}");
        assert_eq!(latex("\\rule[-1pt]{2em}{0.50em}"), "\\rule[-1pt]{2em}{0.5em}");
        assert_eq!(latex("a\\,b\\quad c"), "a\\,b\\quad c");
    }

    #[test]
    fn errors_write_back_their_source() {
        assert_eq!(latex("\\foo+1"), "\\foo+1");
        assert_eq!(latex("\\frac{1}"), "\\frac{1}{}");
    }

    #[test]
    fn hand_built_atoms_get_canonical_commands() {
        let mut tree = AtomTree::new();
        let one = tree.push(Atom::new(AtomKind::Ord, Mode::Math).with_value("1"));
        let two = tree.push(Atom::new(AtomKind::Ord, Mode::Math).with_value("2"));
        let frac = tree.push(Atom::new(
            AtomKind::Genfrac {
                numer: vec![one],
                denom: vec![two],
                has_bar_line: false,
                left_delim: Some("(".to_owned()),
                right_delim: Some(")".to_owned()),
                math_style: None,
                continued: false,
            },
            Mode::Math,
        ));
        assert_eq!(tree.to_latex(&[frac]), "\\binom{1}{2}");
    }

    #[test]
    fn serialization_is_stable() {
        let ctx = MathContext::default();
        let settings = Settings::default();
        for source in [
            "x'' + y^{\\prime}",
            "\\left\\langle a \\right.",
            "\\overbrace{a+b}^{n}",
            "\\operatorname{sn}x \\mathbin{\\#}",
            "\\fcolorbox{red}{yellow}{x} \\boxed{y}",
            "\\big( \\Bigr] \\char\"41",
            "\\text{\\alpha b} \\rm xy",
            "{a \\over b \\over c}",
            "x^",
            "#? + \\placeholder",
        ] {
            let once = latex(source);
            let parsed = parse(&ctx, &once, &settings).unwrap();
            assert_eq!(parsed.tree.to_latex(&parsed.root), once, "{source}");
        }
    }
}
