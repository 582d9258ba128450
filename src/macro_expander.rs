//! Tokenization with macro expansion.
//!
//! [`tokenize`] lexes the source and then replaces every macro command by
//! its template, with `#1`..`#9` substituted by the arguments read after the
//! command. Each replacement is rescanned, one level deeper. Running past
//! [`Settings::max_expand`] levels, or past [`Settings::max_expansions`]
//! expansions in total, is a hard error.

use crate::context::MathContext;
use crate::lexer::Lexer;
use crate::macros::{MacroDefinition, builtin_macro};
use crate::types::{ParseError, ParseErrorKind, Settings, Token, TokenKind};

/// Converts `source` into a flat, macro-expanded token list.
pub fn tokenize(
    ctx: &MathContext,
    source: &str,
    settings: &Settings,
) -> Result<Vec<Token>, ParseError> {
    let tokens = Lexer::new(source).lex_all();
    let mut expander = MacroExpander {
        ctx,
        settings,
        expansion_count: 0,
    };
    let mut out = Vec::with_capacity(tokens.len());
    expander.expand_tokens(&tokens, 0, &mut out)?;
    Ok(out)
}

struct MacroExpander<'a> {
    ctx: &'a MathContext,
    settings: &'a Settings,
    expansion_count: usize,
}

impl<'a> MacroExpander<'a> {
    /// User macros shadow add-on macros, which shadow the builtins.
    fn get_macro(&self, name: &str) -> Option<&'a MacroDefinition> {
        self.settings
            .macros
            .get(name)
            .or_else(|| self.ctx.macros.get(name))
            .or_else(|| builtin_macro(name))
    }

    fn expand_tokens(
        &mut self,
        tokens: &[Token],
        depth: usize,
        out: &mut Vec<Token>,
    ) -> Result<(), ParseError> {
        let mut index = 0;
        while index < tokens.len() {
            let token = &tokens[index];
            index += 1;
            let definition = match token.kind {
                TokenKind::Command => self.get_macro(&token.text),
                _ => None,
            };
            let Some(definition) = definition else {
                out.push(token.clone());
                continue;
            };

            if depth >= self.settings.max_expand {
                return Err(recursion_error(token, self.settings.max_expand));
            }
            self.count_expansion(token)?;

            let mut args = Vec::with_capacity(definition.num_args);
            for _ in 0..definition.num_args {
                let (arg, consumed) = read_argument(&tokens[index..]);
                args.push(arg);
                index += consumed;
            }

            let body = instantiate(definition, &args, token);
            self.expand_tokens(&body, depth + 1, out)?;
        }
        Ok(())
    }

    /// Counts one expansion against [`Settings::max_expansions`].
    fn count_expansion(&mut self, token: &Token) -> Result<(), ParseError> {
        self.expansion_count += 1;
        if self.expansion_count > self.settings.max_expansions {
            return Err(recursion_error(token, self.settings.max_expansions));
        }
        Ok(())
    }
}

fn recursion_error(token: &Token, limit: usize) -> ParseError {
    ParseError::with_token(
        ParseErrorKind::MacroRecursion {
            name: token.text.trim_start_matches('\\').to_owned(),
            limit,
        },
        token,
    )
}

/// Lexes the template and substitutes the arguments. Every resulting token
/// points at the macro invocation in the source.
fn instantiate(definition: &MacroDefinition, args: &[&[Token]], invocation: &Token) -> Vec<Token> {
    let template = Lexer::new(&definition.template).lex_all();
    let mut body = Vec::with_capacity(template.len());
    for token in template {
        match token.argument_index() {
            Some(n) if n <= args.len() => {
                body.extend(args[n - 1].iter().cloned());
            }
            _ => body.push(Token {
                loc: invocation.loc,
                ..token
            }),
        }
    }
    body
}

/// Reads one macro argument: a balanced group (without its braces) or a
/// single token. Leading spaces are skipped. Returns the argument and the
/// number of tokens consumed.
fn read_argument(tokens: &[Token]) -> (&[Token], usize) {
    let start = tokens
        .iter()
        .position(|t| t.kind != TokenKind::Space)
        .unwrap_or(tokens.len());
    let Some(first) = tokens.get(start) else {
        return (&[], tokens.len());
    };
    if first.kind != TokenKind::GroupOpen {
        return (&tokens[start..=start], start + 1);
    }
    let mut level = 0usize;
    for (offset, token) in tokens[start..].iter().enumerate() {
        match token.kind {
            TokenKind::GroupOpen => level += 1,
            TokenKind::GroupClose => {
                level -= 1;
                if level == 0 {
                    let end = start + offset;
                    return (&tokens[start + 1..end], end + 1);
                }
            }
            _ => {}
        }
    }
    (&tokens[start + 1..], tokens.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::namespace::Mapping;

    fn texts(tokens: &[Token]) -> Vec<&str> {
        tokens.iter().map(|t| t.text.as_str()).collect()
    }

    #[test]
    fn builtin_macros_expand() {
        let ctx = MathContext::default();
        let tokens = tokenize(&ctx, r"a\lt b", &Settings::default()).unwrap();
        assert_eq!(texts(&tokens), ["a", "<", "b"]);
    }

    #[test]
    fn arguments_are_substituted() {
        let ctx = MathContext::default();
        let mut macros = Mapping::default();
        macros.insert(r"\pair".to_owned(), MacroDefinition::from(r"(#1,#2)"));
        let settings = Settings::builder().macros(macros).build();
        let tokens = tokenize(&ctx, r"\pair{x}y", &settings).unwrap();
        assert_eq!(texts(&tokens), ["(", "x", ",", "y", ")"]);
    }

    #[test]
    fn user_macros_take_precedence() {
        let ctx = MathContext::default();
        let mut macros = Mapping::default();
        macros.insert(r"\lt".to_owned(), MacroDefinition::from("L"));
        let settings = Settings::builder().macros(macros).build();
        let tokens = tokenize(&ctx, r"\lt", &settings).unwrap();
        assert_eq!(texts(&tokens), ["L"]);
    }

    #[test]
    fn expansions_are_rescanned() {
        let ctx = MathContext::default();
        let mut macros = Mapping::default();
        macros.insert(r"\twice".to_owned(), MacroDefinition::from(r"\lt\lt"));
        let settings = Settings::builder().macros(macros).build();
        let tokens = tokenize(&ctx, r"\twice", &settings).unwrap();
        assert_eq!(texts(&tokens), ["<", "<"]);
    }

    #[test]
    fn recursion_is_a_hard_error() {
        let ctx = MathContext::default();
        let mut macros = Mapping::default();
        macros.insert(r"\loop".to_owned(), MacroDefinition::from(r"x\loop"));
        let settings = Settings::builder().macros(macros).max_expand(8).build();
        let err = tokenize(&ctx, r"\loop", &settings).unwrap_err();
        assert_eq!(err.code(), "macro-recursion");
        assert_eq!(err.position, Some(0));
    }

    #[test]
    fn expansions_are_counted_in_total() {
        let ctx = MathContext::default();
        let mut macros = Mapping::default();
        let names: Vec<String> = (b'a'..=b'w')
            .map(|c| format!("\\m{}", char::from(c)))
            .collect();
        for pair in names.windows(2) {
            macros.insert(pair[0].clone(), MacroDefinition::new(format!("{0}{0}", pair[1]), 0));
        }
        let settings = Settings::builder().macros(macros).build();
        let err = tokenize(&ctx, &names[0], &settings).unwrap_err();
        assert_eq!(err.code(), "macro-recursion");
        assert!(err.to_string().contains("limit of 1000"));

        let short = Settings::builder().max_expansions(3).build();
        assert!(tokenize(&ctx, r"\lt\lt\lt", &short).is_ok());
        assert!(tokenize(&ctx, r"\lt\lt\lt\lt", &short).is_err());
    }

    #[test]
    fn unmatched_markers_survive() {
        let ctx = MathContext::default();
        let tokens = tokenize(&ctx, "#1+#2", &Settings::default()).unwrap();
        assert_eq!(tokens[0].kind, TokenKind::ArgumentMarker);
        assert_eq!(tokens[2].argument_index(), Some(2));
    }
}
