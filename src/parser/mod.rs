//! Error-tolerant recursive-descent parser.
//!
//! [`parse_tokens`] turns a macro-expanded token list into atoms pushed into
//! an [`AtomTree`]. Grammar problems never abort the parse: each one becomes
//! an error atom at the place it was found and parsing resumes with the next
//! token, so a half-typed formula always yields a renderable tree. Only the
//! nesting bound is a hard error.

use crate::atom::{Atom, AtomId, AtomKind, AtomTree, Limits};
use crate::context::MathContext;
use crate::define_function::{Argument, FunctionContext, FunctionSpec};
use crate::functions::{default_limits, is_delimiter, normalize_delimiter, parse_color};
use crate::stack::ensure_sufficient_stack;
use crate::symbols::{Atom as SymbolAtom, CharInfo, Group, Mode, NonAtom, get_ligature_replacement};
use crate::types::{
    ArgType, ErrorCode, ParseError, ParseErrorKind, Settings, SourceLocation, StrictMode, Token,
    TokenKind,
};
use crate::units::{parse_dimension, parse_glue, parse_number};

/// Parses `tokens` in `mode` and returns the top-level atom list.
///
/// `initial_args` substitute for the `#1`..`#9` markers of a template; a
/// marker used twice gets a deep copy the second time.
pub fn parse_tokens(
    ctx: &MathContext,
    tree: &mut AtomTree,
    tokens: &[Token],
    mode: Mode,
    initial_args: Option<&[Vec<AtomId>]>,
    settings: &Settings,
) -> Result<Vec<AtomId>, ParseError> {
    let mut parser = Parser::new(ctx, tree, tokens, mode, settings);
    if let Some(args) = initial_args {
        parser.set_initial_args(args);
    }
    parser.parse()
}

/// Token that ends an expression besides end of input, `}` and `\right`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BreakToken {
    /// Only the implicit terminators
    None,
    /// `]`, closing an optional argument
    RightBracket,
}

/// Outcome of reading one argument.
enum ArgResult {
    Value(Argument),
    Missing,
    Invalid(ErrorCode),
}

/// Atoms produced by one base: the atoms to insert, in order, and the one
/// that scripts following it attach to.
#[derive(Default)]
struct Parsed {
    atoms: Vec<AtomId>,
    target: Option<AtomId>,
}

impl Parsed {
    fn single(id: AtomId) -> Self {
        Self {
            atoms: vec![id],
            target: Some(id),
        }
    }

    fn error(id: AtomId) -> Self {
        Self {
            atoms: vec![id],
            target: None,
        }
    }
}

/// Recursive-descent parser over a token slice.
///
/// The parser keeps three counters besides its position: the total nesting
/// depth (bounded by [`Settings::max_depth`]), the brace depth, which decides
/// whether a `}` closes a group or is stray, and the `\left` depth, which
/// decides the same for `\right` and `\middle`. Entering a brace group
/// resets the `\left` depth, so a `\right` cannot close a `\left` outside
/// the braces.
pub struct Parser<'a> {
    /// Current parsing mode
    pub mode: Mode,
    ctx: &'a MathContext,
    settings: &'a Settings,
    tree: &'a mut AtomTree,
    tokens: &'a [Token],
    pos: usize,
    initial_args: Vec<Vec<AtomId>>,
    initial_args_used: Vec<bool>,
    depth: usize,
    group_depth: usize,
    leftright_depth: usize,
    break_token: BreakToken,
}

impl<'a> Parser<'a> {
    /// Creates a parser starting in `mode`.
    pub fn new(
        ctx: &'a MathContext,
        tree: &'a mut AtomTree,
        tokens: &'a [Token],
        mode: Mode,
        settings: &'a Settings,
    ) -> Self {
        Self {
            mode,
            ctx,
            settings,
            tree,
            tokens,
            pos: 0,
            initial_args: Vec::new(),
            initial_args_used: Vec::new(),
            depth: 0,
            group_depth: 0,
            leftright_depth: 0,
            break_token: BreakToken::None,
        }
    }

    /// Sets the atoms substituted for `#1`..`#9`.
    pub fn set_initial_args(&mut self, args: &[Vec<AtomId>]) {
        self.initial_args = args.to_vec();
        self.initial_args_used = vec![false; args.len()];
    }

    /// Parses the whole token list.
    pub fn parse(&mut self) -> Result<Vec<AtomId>, ParseError> {
        self.parse_expression(BreakToken::None)
    }

    fn fetch(&self) -> Option<&'a Token> {
        let tokens: &'a [Token] = self.tokens;
        tokens.get(self.pos)
    }

    fn consume(&mut self) {
        self.pos += 1;
    }

    /// Location of the last consumed token.
    fn last_loc(&self) -> Option<SourceLocation> {
        self.pos
            .checked_sub(1)
            .and_then(|index| self.tokens.get(index))
            .and_then(|token| token.loc)
    }

    fn skip_spaces(&mut self) {
        while self.fetch().is_some_and(|t| t.kind == TokenKind::Space) {
            self.consume();
        }
    }

    fn enter(&mut self, token: &Token) -> Result<(), ParseError> {
        self.depth += 1;
        if self.depth > self.settings.max_depth {
            return Err(ParseError::with_token(
                ParseErrorKind::TooDeeplyNested {
                    limit: self.settings.max_depth,
                },
                token,
            ));
        }
        Ok(())
    }

    const fn leave(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    fn push(&mut self, atom: Atom) -> AtomId {
        self.tree.push(atom)
    }

    /// Pushes an error atom. `source` is the text the error stands in for;
    /// it is kept as the atom value so the serializer writes it back.
    fn error_atom(
        &mut self,
        code: ErrorCode,
        token: Option<&Token>,
        source: Option<&str>,
    ) -> AtomId {
        let mut atom = Atom::error(code, self.mode).with_loc(token.and_then(|t| t.loc));
        atom.value = source.map(ToOwned::to_owned);
        self.push(atom)
    }

    /// Placeholder standing in for a missing operand. It has no command, so
    /// it serializes to nothing.
    fn synthesized_placeholder(&mut self) -> AtomId {
        self.push(Atom::placeholder(self.mode))
    }

    /// Whether `token` cannot start an argument.
    fn ends_argument(&self, token: &Token) -> bool {
        match token.kind {
            TokenKind::GroupClose => true,
            TokenKind::Command => {
                token.text == "\\right"
                    || self.ctx.get_function(&token.text).is_some_and(|f| f.infix)
            }
            TokenKind::Character => {
                (self.mode == Mode::Math && (token.is_char('^') || token.is_char('_')))
                    || (self.break_token == BreakToken::RightBracket && token.is_char(']'))
            }
            _ => false,
        }
    }

    /// Parses atoms up to end of input, an unmatched `}`/`\right` that an
    /// enclosing construct is waiting for, or `break_token`.
    ///
    /// A `}` or `\right` that nothing is waiting for is reported and skipped.
    /// An infix command splits the collected atoms into two operands once the
    /// expression ends; a second one is reported once and ignored.
    fn parse_expression(&mut self, break_token: BreakToken) -> Result<Vec<AtomId>, ParseError> {
        let saved_break = core::mem::replace(&mut self.break_token, break_token);
        let mut body: Vec<AtomId> = Vec::new();
        let mut infix: Option<(usize, &'a Token)> = None;
        let mut reported_non_associative = false;

        loop {
            if self.mode == Mode::Math {
                self.skip_spaces();
            }
            let Some(token) = self.fetch() else { break };

            if break_token == BreakToken::RightBracket && token.is_char(']') {
                break;
            }
            match token.kind {
                TokenKind::GroupClose => {
                    if self.group_depth > 0 {
                        break;
                    }
                    self.consume();
                    let err = self.error_atom(ErrorCode::UnbalancedBraces, Some(token), None);
                    body.push(err);
                    continue;
                }
                TokenKind::Command if token.text == "\\right" => {
                    if self.leftright_depth > 0 {
                        break;
                    }
                    self.consume();
                    // The delimiter belongs to the stray \right; drop it too.
                    self.parse_delimiter()?;
                    let err =
                        self.error_atom(ErrorCode::UnbalancedMatchfixOperator, Some(token), None);
                    body.push(err);
                    continue;
                }
                TokenKind::Command
                    if self
                        .ctx
                        .get_function(&token.text)
                        .is_some_and(|f| f.infix && f.allowed_in(self.mode)) =>
                {
                    self.consume();
                    if infix.is_some() {
                        if !reported_non_associative {
                            reported_non_associative = true;
                            let err = self.error_atom(
                                ErrorCode::NonAssociativeOperator,
                                Some(token),
                                None,
                            );
                            body.push(err);
                        }
                        continue;
                    }
                    // Plain TeX infix commands are rejected only in strict mode
                    if self.settings.strict == StrictMode::Error {
                        let err = self.error_atom(
                            ErrorCode::UnexpectedSequence,
                            Some(token),
                            Some(&token.text),
                        );
                        body.push(err);
                        continue;
                    }
                    infix = Some((body.len(), token));
                    continue;
                }
                _ => {}
            }

            let start = infix.map_or(0, |(split, _)| split);
            self.parse_atom(&mut body, start)?;
        }

        if self.mode == Mode::Text {
            self.form_ligatures(&mut body);
        }
        self.break_token = saved_break;

        if let Some((split, token)) = infix {
            let genfrac = self.handle_infix(body, split, token)?;
            return Ok(vec![genfrac]);
        }
        Ok(body)
    }

    /// Rewrites `numer \over denom` into the fraction built by the infix
    /// command's handler.
    fn handle_infix(
        &mut self,
        mut body: Vec<AtomId>,
        split: usize,
        token: &Token,
    ) -> Result<AtomId, ParseError> {
        let mut denom = body.split_off(split.min(body.len()));
        let mut numer = body;
        if numer.is_empty() {
            numer.push(self.synthesized_placeholder());
        }
        if denom.is_empty() {
            denom.push(self.synthesized_placeholder());
        }
        let Some(spec) = self.ctx.get_function(&token.text) else {
            return Ok(self.error_atom(ErrorCode::UnknownCommand, Some(token), Some(&token.text)));
        };
        let args = vec![Some(Argument::Atoms(numer)), Some(Argument::Atoms(denom))];
        Ok(self.call_handler(spec, token, token.loc, args))
    }

    /// Runs a command handler and pushes its atom, or an error atom when the
    /// handler rejects the arguments.
    fn call_handler(
        &mut self,
        spec: &FunctionSpec,
        token: &Token,
        loc: Option<SourceLocation>,
        args: Vec<Option<Argument>>,
    ) -> AtomId {
        let context = FunctionContext {
            func_name: &token.text,
            mode: self.mode,
            loc,
            tree: &mut *self.tree,
        };
        match (spec.handler)(context, args) {
            Ok(mut atom) => {
                atom.mode = self.mode;
                if atom.command.is_none() {
                    atom.command = Some(token.text.clone());
                }
                atom.loc = loc;
                self.push(atom)
            }
            Err(code) => self.error_atom(code, Some(token), None),
        }
    }

    /// Parses one base with its scripts and appends the result to `body`.
    /// `start` is where the current operand begins, for unary detection.
    fn parse_atom(&mut self, body: &mut Vec<AtomId>, start: usize) -> Result<(), ParseError> {
        let Some(token) = self.fetch() else {
            return Ok(());
        };

        if self.mode == Mode::Math && (token.is_char('^') || token.is_char('_') || token.is_char('\''))
        {
            let base = self.synthesized_placeholder();
            body.push(base);
            return self.parse_scripts(body, base);
        }

        let previous = &body[start.min(body.len())..];
        let parsed = ensure_sufficient_stack(|| self.parse_base(previous))?;
        body.extend(parsed.atoms.iter().copied());
        match parsed.target {
            Some(target) if self.mode == Mode::Math => self.parse_scripts(body, target),
            _ => Ok(()),
        }
    }

    /// Attaches `^`, `_`, primes and `\limits` following a base.
    fn parse_scripts(&mut self, body: &mut Vec<AtomId>, base: AtomId) -> Result<(), ParseError> {
        let mut target = base;
        // The superscript so far holds only primes, which `^` may extend.
        let mut primes_only = false;

        loop {
            self.skip_spaces();
            let Some(token) = self.fetch() else { break };

            if token.is_char('^') || token.is_char('_') {
                let is_sup = token.is_char('^');
                self.consume();
                let script = match self.parse_atom_argument(None)? {
                    Some(atoms) => atoms,
                    None => {
                        let err = self.error_atom(ErrorCode::ExpectedArgument, Some(token), None);
                        body.push(err);
                        vec![self.synthesized_placeholder()]
                    }
                };

                let occupied = self.tree.get(target).is_some_and(|atom| {
                    if is_sup {
                        atom.superscript.is_some() && !primes_only
                    } else {
                        atom.subscript.is_some()
                    }
                });
                if occupied {
                    let code = if is_sup {
                        ErrorCode::UnexpectedSuperscript
                    } else {
                        ErrorCode::UnexpectedSubscript
                    };
                    let err = self.error_atom(code, Some(token), None);
                    body.push(err);
                    target = self.synthesized_placeholder();
                    body.push(target);
                }

                if let Some(atom) = self.tree.get_mut(target) {
                    let slot = if is_sup {
                        &mut atom.superscript
                    } else {
                        &mut atom.subscript
                    };
                    slot.get_or_insert_with(Vec::new).extend(script.iter().copied());
                }
                if is_sup {
                    primes_only = false;
                }
                self.tree.adopt(target, &script);
            } else if token.is_char('\'') {
                let mut primes = Vec::new();
                while self.fetch().is_some_and(|t| t.is_char('\'')) {
                    let prime_token = self.fetch();
                    self.consume();
                    let prime = Atom::new(AtomKind::Ord, Mode::Math)
                        .with_value("\u{2032}")
                        .with_command("\\prime")
                        .with_loc(prime_token.and_then(|t| t.loc));
                    primes.push(self.push(prime));
                }
                if let Some(atom) = self.tree.get_mut(target) {
                    primes_only = atom.superscript.is_none() || primes_only;
                    atom.superscript
                        .get_or_insert_with(Vec::new)
                        .extend(primes.iter().copied());
                }
                self.tree.adopt(target, &primes);
            } else if token.is_command("\\limits") || token.is_command("\\nolimits") {
                self.consume();
                let limits = if token.text == "\\limits" {
                    Limits::Limits
                } else {
                    Limits::NoLimits
                };
                match self.tree.get_mut(target) {
                    Some(atom) if matches!(atom.kind, AtomKind::Op { .. }) => atom.limits = limits,
                    _ => {
                        let err = self.error_atom(ErrorCode::ExpectedOperand, Some(token), None);
                        body.push(err);
                    }
                }
            } else {
                break;
            }
        }
        Ok(())
    }

    /// Parses one base without scripts: a group, a command with its
    /// arguments, a symbol or an argument marker. `previous` holds the atoms
    /// of the current operand parsed so far.
    fn parse_base(&mut self, previous: &[AtomId]) -> Result<Parsed, ParseError> {
        let Some(token) = self.fetch() else {
            return Ok(Parsed::default());
        };

        match token.kind {
            TokenKind::GroupOpen => self.parse_group(token),
            TokenKind::GroupClose => {
                self.consume();
                let err = self.error_atom(ErrorCode::UnbalancedBraces, Some(token), None);
                Ok(Parsed::error(err))
            }
            TokenKind::Space => {
                self.consume();
                if self.mode == Mode::Math {
                    return Ok(Parsed::default());
                }
                let atom = Atom::new(AtomKind::Spacing { glue: None }, Mode::Text)
                    .with_value(" ")
                    .with_loc(token.loc);
                Ok(Parsed::single(self.push(atom)))
            }
            TokenKind::ArgumentMarker => {
                self.consume();
                Ok(self.initial_argument(token))
            }
            TokenKind::Placeholder => {
                self.consume();
                if token.text == "#@" && !self.initial_args.is_empty() {
                    return Ok(self.use_initial_arg(0));
                }
                let atom = Atom::placeholder(self.mode)
                    .with_command("#?")
                    .with_loc(token.loc);
                Ok(Parsed::single(self.push(atom)))
            }
            TokenKind::Character => {
                self.consume();
                Ok(self.parse_symbol(token, previous))
            }
            TokenKind::Command => self.parse_command(token, previous),
        }
    }

    fn parse_command(&mut self, token: &'a Token, previous: &[AtomId]) -> Result<Parsed, ParseError> {
        match token.text.as_str() {
            "\\left" if self.mode == Mode::Math => return self.parse_left_right(token),
            "\\middle" if self.mode == Mode::Math => return self.parse_middle(token),
            "\\right" => {
                self.consume();
                self.parse_delimiter()?;
                let err =
                    self.error_atom(ErrorCode::UnbalancedMatchfixOperator, Some(token), None);
                return Ok(Parsed::error(err));
            }
            "\\limits" | "\\nolimits" => {
                self.consume();
                let err = self.error_atom(ErrorCode::ExpectedOperand, Some(token), None);
                return Ok(Parsed::error(err));
            }
            _ => {}
        }

        if let Some(spec) = self.ctx.get_function(&token.text) {
            return self.parse_function(token, spec);
        }

        self.consume();
        if self.ctx.symbols.contains(self.mode, &token.text) {
            return Ok(self.parse_symbol(token, previous));
        }
        let other_mode = match self.mode {
            Mode::Math => Mode::Text,
            Mode::Text => Mode::Math,
        };
        let code = if self.ctx.symbols.contains(other_mode, &token.text)
            || matches!(token.text.as_str(), "\\left" | "\\middle")
        {
            ErrorCode::UnexpectedSequence
        } else {
            ErrorCode::UnknownCommand
        };
        let err = self.error_atom(code, Some(token), Some(&token.text));
        Ok(Parsed::error(err))
    }

    /// Builds the atom for a character or symbol command. The token has
    /// already been consumed.
    fn parse_symbol(&mut self, token: &Token, previous: &[AtomId]) -> Parsed {
        let text = token.text.as_str();
        if let Some(info) = self.ctx.symbols.get(self.mode, text).copied() {
            let atom = self.symbol_atom(text, info, previous).with_loc(token.loc);
            return Parsed::single(self.push(atom));
        }

        // Characters outside the table: the first char decides, combining
        // marks ride along in the value.
        let Some(ch) = text.chars().next() else {
            return Parsed::default();
        };
        let accepted = match self.mode {
            Mode::Text => !ch.is_control(),
            Mode::Math => {
                token.kind == TokenKind::Character
                    && ch.is_alphabetic()
                    && u32::from(ch) <= 0xFFFF
                    && self
                        .settings
                        .report_nonstrict(
                            "unicodeTextInMathMode",
                            &format!("Unicode text character \"{ch}\" used in math mode"),
                            Some(token),
                        )
                        .is_ok()
            }
        };
        if !accepted {
            let code = if token.kind == TokenKind::Command {
                ErrorCode::UnknownCommand
            } else {
                ErrorCode::UnknownSymbol
            };
            return Parsed::error(self.error_atom(code, Some(token), Some(text)));
        }
        let atom = Atom::new(AtomKind::Ord, self.mode)
            .with_value(text)
            .with_loc(token.loc);
        Parsed::single(self.push(atom))
    }

    fn symbol_atom(&self, text: &str, info: CharInfo, previous: &[AtomId]) -> Atom {
        let value = info
            .replace
            .map_or_else(|| text.to_owned(), |ch| ch.to_string());
        let kind = match info.group {
            Group::Atom(SymbolAtom::Bin) => {
                if self.mode == Mode::Math && self.is_unary_position(previous) {
                    AtomKind::Ord
                } else {
                    AtomKind::Bin
                }
            }
            Group::Atom(SymbolAtom::Rel) => AtomKind::Rel,
            Group::Atom(SymbolAtom::Open) => AtomKind::Open,
            Group::Atom(SymbolAtom::Close) => AtomKind::Close,
            Group::Atom(SymbolAtom::Punct) => AtomKind::Punct,
            Group::Atom(SymbolAtom::Inner) => AtomKind::Inner,
            Group::NonAtom(NonAtom::MathOrd | NonAtom::TextOrd) => AtomKind::Ord,
            Group::NonAtom(NonAtom::OpToken) => AtomKind::Op {
                body: Vec::new(),
                symbol: true,
            },
            Group::NonAtom(NonAtom::Spacing) => AtomKind::Spacing { glue: None },
        };
        let is_op = matches!(kind, AtomKind::Op { .. });
        let mut atom = Atom::new(kind, self.mode).with_value(value.as_str());
        if text != value {
            atom.command = Some(text.to_owned());
        }
        if is_op {
            atom.limits = default_limits(&value);
        }
        atom
    }

    /// A binary operator is unary at the start of an operand or after a bin,
    /// rel, open, punct or op.
    fn is_unary_position(&self, previous: &[AtomId]) -> bool {
        previous
            .last()
            .and_then(|id| self.tree.get(*id))
            .is_none_or(|atom| {
                matches!(
                    atom.kind,
                    AtomKind::Bin
                        | AtomKind::Rel
                        | AtomKind::Open
                        | AtomKind::Punct
                        | AtomKind::Op { .. }
                )
            })
    }

    fn initial_argument(&mut self, token: &Token) -> Parsed {
        match token.argument_index() {
            Some(n) if n >= 1 && n <= self.initial_args.len() => self.use_initial_arg(n - 1),
            _ => {
                let err =
                    self.error_atom(ErrorCode::UnexpectedArgument, Some(token), Some(&token.text));
                Parsed::error(err)
            }
        }
    }

    fn use_initial_arg(&mut self, index: usize) -> Parsed {
        let atoms = if self.initial_args_used[index] {
            self.tree.deep_clone(&self.initial_args[index])
        } else {
            self.initial_args_used[index] = true;
            self.initial_args[index].clone()
        };
        Parsed {
            target: atoms.last().copied(),
            atoms,
        }
    }

    /// Parses `{...}` into a group atom. A group holding nothing but an
    /// infix fraction is the fraction itself, so `{a \over b}` and
    /// `\frac{a}{b}` both give one atom.
    fn parse_group(&mut self, open: &'a Token) -> Result<Parsed, ParseError> {
        let (body, closed) = self.parse_braced(open)?;
        let loc = SourceLocation::range(open.loc, self.last_loc());

        let infix_fraction = match body.as_slice() {
            [only] => self.tree.get(*only).is_some_and(|atom| {
                matches!(atom.kind, AtomKind::Genfrac { .. })
                    && atom
                        .command
                        .as_deref()
                        .and_then(|name| self.ctx.get_function(name))
                        .is_some_and(|f| f.infix)
            }),
            _ => false,
        };
        let id = if infix_fraction {
            body[0]
        } else {
            let group = Atom::new(AtomKind::Group { body }, self.mode).with_loc(loc);
            self.push(group)
        };

        let mut parsed = Parsed::single(id);
        if !closed {
            let err = self.error_atom(ErrorCode::UnbalancedBraces, Some(open), None);
            parsed.atoms.push(err);
        }
        Ok(parsed)
    }

    /// Parses the inside of a brace group starting at `open`. Returns the
    /// content and whether the closing brace was found.
    fn parse_braced(&mut self, open: &Token) -> Result<(Vec<AtomId>, bool), ParseError> {
        self.consume();
        self.enter(open)?;
        let saved_leftright = core::mem::replace(&mut self.leftright_depth, 0);
        self.group_depth += 1;
        let body = self.parse_expression(BreakToken::None)?;
        self.group_depth -= 1;
        self.leftright_depth = saved_leftright;
        self.leave();

        let closed = self
            .fetch()
            .is_some_and(|t| t.kind == TokenKind::GroupClose);
        if closed {
            self.consume();
        }
        Ok((body, closed))
    }

    /// `\left X ... \right Y`.
    fn parse_left_right(&mut self, token: &'a Token) -> Result<Parsed, ParseError> {
        self.consume();
        self.enter(token)?;
        let mut errors = Vec::new();
        let left = self.delimiter_or_null(token, &mut errors)?;

        self.leftright_depth += 1;
        let body = self.parse_expression(self.break_token)?;
        self.leftright_depth -= 1;

        let right = match self.fetch() {
            Some(right) if right.is_command("\\right") => {
                self.consume();
                Some(self.delimiter_or_null(right, &mut errors)?)
            }
            _ => {
                errors.push(self.error_atom(
                    ErrorCode::UnbalancedMatchfixOperator,
                    Some(token),
                    None,
                ));
                None
            }
        };
        self.leave();

        let atom = Atom::new(
            AtomKind::LeftRight {
                body,
                left_delim: left,
                right_delim: right,
            },
            self.mode,
        )
        .with_command("\\left")
        .with_loc(SourceLocation::range(token.loc, self.last_loc()));
        let id = self.push(atom);
        let mut parsed = Parsed::single(id);
        parsed.atoms.extend(errors);
        Ok(parsed)
    }

    fn parse_middle(&mut self, token: &Token) -> Result<Parsed, ParseError> {
        self.consume();
        if self.leftright_depth == 0 {
            self.parse_delimiter()?;
            let err = self.error_atom(ErrorCode::UnexpectedSequence, Some(token), None);
            return Ok(Parsed::error(err));
        }
        let mut errors = Vec::new();
        let delim = self.delimiter_or_null(token, &mut errors)?;
        let atom = Atom::new(AtomKind::Delim { delim }, self.mode)
            .with_command("\\middle")
            .with_loc(SourceLocation::range(token.loc, self.last_loc()));
        let id = self.push(atom);
        let mut parsed = Parsed::single(id);
        parsed.atoms.extend(errors);
        Ok(parsed)
    }

    /// Reads a delimiter for `command`, falling back to the null delimiter
    /// and recording an error atom.
    fn delimiter_or_null(
        &mut self,
        command: &Token,
        errors: &mut Vec<AtomId>,
    ) -> Result<String, ParseError> {
        let code = match self.parse_delimiter()? {
            ArgResult::Value(arg) => return Ok(arg.into_text().unwrap_or_else(|| ".".to_owned())),
            ArgResult::Missing => ErrorCode::missing_argument(&command.text, 1, 0),
            ArgResult::Invalid(code) => code,
        };
        errors.push(self.error_atom(code, Some(command), None));
        Ok(".".to_owned())
    }

    fn parse_delimiter(&mut self) -> Result<ArgResult, ParseError> {
        self.skip_spaces();
        let Some(token) = self.fetch() else {
            return Ok(ArgResult::Missing);
        };
        let text = match token.kind {
            TokenKind::GroupOpen => {
                self.consume();
                let mut inner = String::new();
                while let Some(t) = self.fetch() {
                    self.consume();
                    match t.kind {
                        TokenKind::GroupClose => break,
                        TokenKind::Space => {}
                        _ => inner.push_str(&t.text),
                    }
                }
                inner
            }
            TokenKind::Character | TokenKind::Command
                if !token.is_command("\\right") && !self.ends_argument(token) =>
            {
                self.consume();
                token.text.clone()
            }
            _ => return Ok(ArgResult::Missing),
        };
        let text = normalize_delimiter(&text);
        if is_delimiter(&text) {
            Ok(ArgResult::Value(Argument::Delimiter(text)))
        } else {
            Ok(ArgResult::Invalid(ErrorCode::InvalidName))
        }
    }

    /// Parses a registered command and its arguments.
    fn parse_function(
        &mut self,
        token: &'a Token,
        spec: &'a FunctionSpec,
    ) -> Result<Parsed, ParseError> {
        self.consume();
        if !spec.allowed_in(self.mode) || spec.infix {
            let err = self.error_atom(ErrorCode::UnexpectedSequence, Some(token), Some(&token.text));
            return Ok(Parsed::error(err));
        }

        self.enter(token)?;
        let required = spec.required_args();
        let mut args: Vec<Option<Argument>> = Vec::with_capacity(spec.args.len() + 1);
        let mut errors = Vec::new();
        let mut required_index = 0;

        for arg_spec in &spec.args {
            if arg_spec.optional {
                let arg = self.parse_optional_argument(arg_spec.kind, &mut errors)?;
                args.push(arg);
                continue;
            }
            match self.parse_argument(arg_spec.kind)? {
                ArgResult::Value(arg) => args.push(Some(arg)),
                ArgResult::Missing => {
                    let code = ErrorCode::missing_argument(&token.text, required, required_index);
                    errors.push(self.error_atom(code, Some(token), None));
                    args.push(is_atom_kind(arg_spec.kind).then(|| {
                        Argument::Atoms(vec![self.synthesized_placeholder()])
                    }));
                }
                ArgResult::Invalid(code) => {
                    errors.push(self.error_atom(code, Some(token), None));
                    args.push(None);
                }
            }
            required_index += 1;
        }

        if spec.rest_of_group {
            let rest = self.parse_expression(self.break_token)?;
            args.push(Some(Argument::Atoms(rest)));
        }
        self.leave();

        let loc = SourceLocation::range(token.loc, self.last_loc());
        let id = self.call_handler(spec, token, loc, args);
        let is_error = self.tree.get(id).is_some_and(Atom::is_error);
        let mut parsed = if is_error {
            Parsed::error(id)
        } else {
            Parsed::single(id)
        };
        parsed.atoms.extend(errors);
        Ok(parsed)
    }

    fn parse_argument(&mut self, kind: ArgType) -> Result<ArgResult, ParseError> {
        let mode = match kind {
            ArgType::Auto => None,
            ArgType::Math => Some(Mode::Math),
            ArgType::Text => Some(Mode::Text),
            ArgType::Delimiter => return self.parse_delimiter(),
            ArgType::Color
            | ArgType::Dimension
            | ArgType::Glue
            | ArgType::String
            | ArgType::Number => {
                return Ok(match self.read_raw(kind) {
                    Some(raw) => validate_raw(kind, &raw),
                    None => ArgResult::Missing,
                });
            }
        };
        Ok(match self.parse_atom_argument(mode)? {
            Some(atoms) => ArgResult::Value(Argument::Atoms(atoms)),
            None => ArgResult::Missing,
        })
    }

    /// Reads an atom argument: the contents of a `{...}` group, or a single
    /// base. `None` when the argument is missing.
    fn parse_atom_argument(&mut self, mode: Option<Mode>) -> Result<Option<Vec<AtomId>>, ParseError> {
        self.skip_spaces();
        let Some(token) = self.fetch() else {
            return Ok(None);
        };
        if self.ends_argument(token) {
            return Ok(None);
        }

        let outer_mode = self.mode;
        if let Some(mode) = mode {
            self.mode = mode;
        }
        let result = if token.kind == TokenKind::GroupOpen {
            self.parse_braced(token).map(|(mut body, closed)| {
                if !closed {
                    body.push(self.error_atom(ErrorCode::UnbalancedBraces, Some(token), None));
                }
                body
            })
        } else {
            ensure_sufficient_stack(|| self.parse_base(&[])).map(|parsed| parsed.atoms)
        };
        self.mode = outer_mode;
        result.map(Some)
    }

    /// Reads `[...]` if present. Atom arguments are parsed up to the
    /// matching `]`; the other kinds are read as raw text and validated.
    fn parse_optional_argument(
        &mut self,
        kind: ArgType,
        errors: &mut Vec<AtomId>,
    ) -> Result<Option<Argument>, ParseError> {
        self.skip_spaces();
        let Some(open) = self.fetch().filter(|t| t.is_char('[')) else {
            return Ok(None);
        };
        self.consume();

        if is_atom_kind(kind) {
            self.enter(open)?;
            let outer_mode = self.mode;
            match kind {
                ArgType::Math => self.mode = Mode::Math,
                ArgType::Text => self.mode = Mode::Text,
                _ => {}
            }
            let body = self.parse_expression(BreakToken::RightBracket)?;
            self.mode = outer_mode;
            self.leave();
            if self.fetch().is_some_and(|t| t.is_char(']')) {
                self.consume();
            } else {
                errors.push(self.error_atom(ErrorCode::SyntaxError, Some(open), None));
            }
            return Ok(Some(Argument::Atoms(body)));
        }

        let mut raw = String::new();
        let mut nesting = 0_usize;
        while let Some(t) = self.fetch() {
            if nesting == 0 && t.is_char(']') {
                break;
            }
            match t.kind {
                TokenKind::GroupOpen => nesting += 1,
                TokenKind::GroupClose if nesting == 0 => break,
                TokenKind::GroupClose => nesting -= 1,
                _ => {}
            }
            raw.push_str(&t.text);
            self.consume();
        }
        if self.fetch().is_some_and(|t| t.is_char(']')) {
            self.consume();
        }
        match validate_raw(kind, raw.trim()) {
            ArgResult::Value(arg) => Ok(Some(arg)),
            ArgResult::Missing | ArgResult::Invalid(_) => {
                let code = match kind {
                    ArgType::Color | ArgType::Delimiter => ErrorCode::InvalidName,
                    _ => ErrorCode::SyntaxError,
                };
                errors.push(self.error_atom(code, Some(open), None));
                Ok(None)
            }
        }
    }

    /// Reads the raw text of a non-atom argument: the contents of a brace
    /// group, or a run of characters that can form the value.
    fn read_raw(&mut self, kind: ArgType) -> Option<String> {
        self.skip_spaces();
        let token = self.fetch()?;
        if self.ends_argument(token) {
            return None;
        }

        if token.kind == TokenKind::GroupOpen {
            self.consume();
            let mut raw = String::new();
            let mut nesting = 0_usize;
            while let Some(t) = self.fetch() {
                self.consume();
                match t.kind {
                    TokenKind::GroupClose if nesting == 0 => break,
                    TokenKind::GroupClose => nesting -= 1,
                    TokenKind::GroupOpen => nesting += 1,
                    _ => {}
                }
                raw.push_str(&t.text);
            }
            return Some(raw.trim().to_owned());
        }

        match kind {
            ArgType::Dimension | ArgType::Glue => {
                let mut raw = self.read_chars(|ch, _| matches!(ch, '0'..='9' | '.' | ',' | '-' | '+'));
                raw.push_str(&self.read_chars(|ch, len| ch.is_ascii_alphabetic() && len < 2));
                Some(raw)
            }
            ArgType::Number => {
                let mut raw = self.read_chars(|ch, len| len == 0 && matches!(ch, '"' | '\'' | '-'));
                raw.push_str(&self.read_chars(|ch, _| ch.is_ascii_hexdigit()));
                Some(raw)
            }
            _ => {
                self.consume();
                Some(token.text.clone())
            }
        }
    }

    /// Consumes character tokens while `accept(ch, count_so_far)` holds.
    fn read_chars<F: Fn(char, usize) -> bool>(&mut self, accept: F) -> String {
        let mut raw = String::new();
        let mut count = 0;
        while let Some(ch) = self.fetch().and_then(Token::as_char) {
            if !accept(ch, count) {
                break;
            }
            raw.push(ch);
            count += 1;
            self.consume();
        }
        raw
    }

    /// Replaces `--`, `---`, ` `` ` and `''` in text mode by their typographic
    /// forms.
    fn form_ligatures(&mut self, body: &mut Vec<AtomId>) {
        let source = |tree: &AtomTree, id: AtomId| -> Option<String> {
            let atom = tree.get(id)?;
            if !matches!(atom.kind, AtomKind::Ord) || atom.has_scripts() || atom.mode != Mode::Text {
                return None;
            }
            atom.command.clone().or_else(|| atom.value.clone())
        };

        let mut index = 0;
        while index < body.len() {
            for len in [3, 2] {
                let Some(window) = body.get(index..index + len) else {
                    continue;
                };
                let text: Option<String> = window.iter().map(|id| source(&*self.tree, *id)).collect();
                let Some(text) = text else { continue };
                let Some(replacement) = get_ligature_replacement(&text) else {
                    continue;
                };
                let loc = SourceLocation::range(
                    self.tree.get(window[0]).and_then(|a| a.loc),
                    self.tree.get(window[len - 1]).and_then(|a| a.loc),
                );
                if let Some(atom) = self.tree.get_mut(body[index]) {
                    atom.value = Some(replacement.to_owned());
                    atom.command = Some(text);
                    atom.loc = loc;
                }
                body.drain(index + 1..index + len);
                break;
            }
            index += 1;
        }
    }
}

const fn is_atom_kind(kind: ArgType) -> bool {
    matches!(kind, ArgType::Auto | ArgType::Math | ArgType::Text)
}

fn validate_raw(kind: ArgType, raw: &str) -> ArgResult {
    let invalid = match kind {
        ArgType::Color | ArgType::Delimiter => ErrorCode::InvalidName,
        _ => ErrorCode::SyntaxError,
    };
    let value = match kind {
        ArgType::Color => parse_color(raw).map(Argument::Color),
        ArgType::Dimension => parse_dimension(raw).map(Argument::Dimension),
        ArgType::Glue => parse_glue(raw).map(Argument::Glue),
        ArgType::Number => parse_number(raw).map(Argument::Number),
        ArgType::String => Some(Argument::String(raw.to_owned())),
        ArgType::Delimiter => {
            let delim = normalize_delimiter(raw);
            is_delimiter(&delim).then_some(Argument::Delimiter(delim))
        }
        ArgType::Auto | ArgType::Math | ArgType::Text => None,
    };
    value.map_or(ArgResult::Invalid(invalid), ArgResult::Value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::macro_expander::tokenize;
    use pretty_assertions::assert_eq;

    fn parse(source: &str) -> (AtomTree, Vec<AtomId>) {
        parse_with(source, &Settings::default())
    }

    fn parse_with(source: &str, settings: &Settings) -> (AtomTree, Vec<AtomId>) {
        let ctx = MathContext::default();
        let tokens = tokenize(&ctx, source, settings).unwrap();
        let mut tree = AtomTree::new();
        let root = parse_tokens(&ctx, &mut tree, &tokens, Mode::Math, None, settings).unwrap();
        (tree, root)
    }

    fn codes(tree: &AtomTree, root: &[AtomId]) -> Vec<String> {
        tree.errors(root)
            .into_iter()
            .map(|(_, code)| code.to_string())
            .collect()
    }

    fn kinds(tree: &AtomTree, ids: &[AtomId]) -> Vec<String> {
        ids.iter()
            .map(|id| tree.get(*id).unwrap().atom_type().to_string())
            .collect()
    }

    #[test]
    fn classifies_characters() {
        let (tree, root) = parse("x+1=(y)");
        assert_eq!(
            kinds(&tree, &root),
            ["ord", "bin", "ord", "rel", "open", "ord", "close"]
        );
    }

    #[test]
    fn leading_minus_is_unary() {
        let (tree, root) = parse("-x");
        assert_eq!(kinds(&tree, &root), ["ord", "ord"]);
        let (tree, root) = parse("a=-b");
        assert_eq!(kinds(&tree, &root), ["ord", "rel", "ord", "ord"]);
    }

    #[test]
    fn scripts_attach_to_the_preceding_atom() {
        let (tree, root) = parse("x^2_3");
        assert_eq!(root.len(), 1);
        let x = tree.get(root[0]).unwrap();
        let sup = x.superscript.as_ref().unwrap();
        let sub = x.subscript.as_ref().unwrap();
        assert_eq!(tree.get(sup[0]).unwrap().value.as_deref(), Some("2"));
        assert_eq!(tree.get(sub[0]).unwrap().value.as_deref(), Some("3"));
        assert_eq!(tree.parent(sup[0]), Some(root[0]));
    }

    #[test]
    fn double_superscript_uses_a_fresh_placeholder() {
        let (tree, root) = parse("x^1^2");
        assert_eq!(codes(&tree, &root), ["unexpected-superscript"]);
        assert_eq!(kinds(&tree, &root), ["ord", "error", "placeholder"]);
        assert!(tree.get(root[2]).unwrap().superscript.is_some());
    }

    #[test]
    fn script_without_base_gets_a_placeholder() {
        let (tree, root) = parse("^2");
        assert_eq!(kinds(&tree, &root), ["placeholder"]);
        assert!(codes(&tree, &root).is_empty());
    }

    #[test]
    fn primes_become_superscripts() {
        let (tree, root) = parse("f''^2");
        let f = tree.get(root[0]).unwrap();
        let sup = f.superscript.as_ref().unwrap();
        assert_eq!(sup.len(), 3);
        assert_eq!(tree.get(sup[0]).unwrap().command.as_deref(), Some("\\prime"));
        assert!(codes(&tree, &root).is_empty());
    }

    #[test]
    fn limits_require_an_operator() {
        let (tree, root) = parse("\\sum\\limits_0^n");
        assert_eq!(tree.get(root[0]).unwrap().limits, Limits::Limits);
        let (tree, root) = parse("x\\limits");
        assert_eq!(codes(&tree, &root), ["expected-operand"]);
    }

    #[test]
    fn groups_and_unbalanced_braces() {
        let (tree, root) = parse("{a}");
        assert_eq!(kinds(&tree, &root), ["group"]);
        let (tree, root) = parse("a}b");
        assert_eq!(codes(&tree, &root), ["unbalanced-braces"]);
        let (tree, root) = parse("{a");
        assert_eq!(codes(&tree, &root), ["unbalanced-braces"]);
    }

    #[test]
    fn left_right_pairs() {
        let (tree, root) = parse("\\left( x \\right)");
        let AtomKind::LeftRight {
            left_delim,
            right_delim,
            body,
        } = &tree.get(root[0]).unwrap().kind
        else {
            panic!("expected leftright");
        };
        assert_eq!(left_delim, "(");
        assert_eq!(right_delim.as_deref(), Some(")"));
        assert_eq!(body.len(), 1);

        let (tree, root) = parse("\\left( x");
        assert_eq!(codes(&tree, &root), ["unbalanced-matchfix-operator"]);
        let (tree, root) = parse("x \\right)");
        assert_eq!(codes(&tree, &root), ["unbalanced-matchfix-operator"]);
    }

    #[test]
    fn middle_outside_left_right() {
        let (tree, root) = parse("\\left( a \\middle| b \\right)");
        assert!(codes(&tree, &root).is_empty());
        let (tree, root) = parse("a \\middle| b");
        assert_eq!(codes(&tree, &root), ["unexpected-sequence"]);
    }

    #[test]
    fn infix_splits_the_group() {
        let (tree, root) = parse("a+b \\over c");
        assert_eq!(kinds(&tree, &root), ["genfrac"]);
        let AtomKind::Genfrac { numer, denom, .. } = &tree.get(root[0]).unwrap().kind else {
            panic!("expected genfrac");
        };
        assert_eq!(numer.len(), 3);
        assert_eq!(denom.len(), 1);
    }

    #[test]
    fn second_infix_is_non_associative() {
        let (tree, root) = parse("a \\over b \\over c");
        assert_eq!(codes(&tree, &root), ["non-associative-operator"]);
        let fractions = tree
            .descendants(root[0])
            .into_iter()
            .chain(root.iter().copied())
            .filter(|id| matches!(tree.get(*id).unwrap().kind, AtomKind::Genfrac { .. }))
            .count();
        assert_eq!(fractions, 1);
    }

    #[test]
    fn empty_infix_operands_become_placeholders() {
        let (tree, root) = parse("\\over");
        let AtomKind::Genfrac { numer, denom, .. } = &tree.get(root[0]).unwrap().kind else {
            panic!("expected genfrac");
        };
        assert_eq!(kinds(&tree, numer), ["placeholder"]);
        assert_eq!(kinds(&tree, denom), ["placeholder"]);
    }

    #[test]
    fn missing_arguments() {
        let (tree, root) = parse("\\sqrt");
        assert_eq!(codes(&tree, &root), ["sqrt-requires-one-operand"]);
        let (tree, root) = parse("\\frac");
        assert_eq!(
            codes(&tree, &root),
            ["expected-argument", "frac-has-too-few-arguments"]
        );
        let (tree, root) = parse("\\frac{1}");
        assert_eq!(codes(&tree, &root), ["frac-has-too-few-arguments"]);
    }

    #[test]
    fn invalid_arguments() {
        let (tree, root) = parse("\\color{#12}x");
        assert_eq!(codes(&tree, &root), ["invalid-name"]);
        let (tree, root) = parse("\\kern{fish}");
        assert_eq!(codes(&tree, &root), ["syntax-error"]);
        let (tree, root) = parse("\\left x \\right)");
        assert_eq!(codes(&tree, &root), ["invalid-name"]);
    }

    #[test]
    fn unknown_commands_and_symbols() {
        let (tree, root) = parse("\\foo");
        assert_eq!(codes(&tree, &root), ["unknown-command"]);
        assert_eq!(tree.get(root[0]).unwrap().value.as_deref(), Some("\\foo"));
        let (tree, root) = parse("a&b");
        assert_eq!(codes(&tree, &root), ["unknown-symbol"]);
        let (tree, root) = parse("\\text{\\alpha}");
        assert_eq!(codes(&tree, &root), ["unexpected-sequence"]);
    }

    #[test]
    fn argument_markers() {
        let ctx = MathContext::default();
        let settings = Settings::default();
        let mut tree = AtomTree::new();
        let arg = tree.push(Atom::new(AtomKind::Ord, Mode::Math).with_value("y"));
        let tokens = tokenize(&ctx, "#1+#1+#2", &settings).unwrap();
        let root = parse_tokens(
            &ctx,
            &mut tree,
            &tokens,
            Mode::Math,
            Some(&[vec![arg]]),
            &settings,
        )
        .unwrap();
        assert_eq!(root[0], arg);
        assert_ne!(root[2], arg);
        assert_eq!(tree.get(root[2]).unwrap().value.as_deref(), Some("y"));
        assert_eq!(codes(&tree, &root), ["unexpected-argument"]);
        tree.validate(&root).unwrap();
    }

    #[test]
    fn placeholders() {
        let (tree, root) = parse("#?+#@");
        assert_eq!(kinds(&tree, &root), ["placeholder", "bin", "placeholder"]);
    }

    #[test]
    fn text_mode_keeps_spaces_and_forms_ligatures() {
        let (tree, root) = parse("\\text{a -- b}");
        let body = tree.children(root[0]);
        assert_eq!(kinds(&tree, &body), ["ord", "spacing", "ord", "spacing", "ord"]);
        assert_eq!(tree.get(body[2]).unwrap().value.as_deref(), Some("\u{2013}"));
    }

    #[test]
    fn nesting_is_bounded() {
        let settings = Settings::builder().max_depth(8).build();
        let ctx = MathContext::default();
        let source = "{".repeat(20);
        let tokens = tokenize(&ctx, &source, &settings).unwrap();
        let mut tree = AtomTree::new();
        let err = parse_tokens(&ctx, &mut tree, &tokens, Mode::Math, None, &settings).unwrap_err();
        assert_eq!(err.code(), "too-deeply-nested");
    }

    #[test]
    fn well_formed_input_has_no_errors() {
        let (tree, root) = parse(
            "\\frac{1}{2}+\\sqrt[3]{x}-\\left(\\sum_{i=0}^n i\\right)\\cdot\\hat{a}\\,\\mathbf{v}",
        );
        assert!(codes(&tree, &root).is_empty());
        tree.validate(&root).unwrap();
    }

    #[test]
    fn infix_commands_are_rejected_only_in_strict_mode() {
        let (tree, root) = parse_with("a \\choose b", &Settings::default());
        assert!(codes(&tree, &root).is_empty());
        let strict = Settings::builder().strict(StrictMode::Error).build();
        let (tree, root) = parse_with("a \\choose b", &strict);
        assert_eq!(codes(&tree, &root), ["unexpected-sequence"]);
    }

    #[test]
    fn strict_error_mode_rejects_unicode_letters() {
        let settings = Settings::builder()
            .strict(StrictMode::Error)
            .build();
        let (tree, root) = parse_with("\u{e9}", &settings);
        assert_eq!(codes(&tree, &root), ["unknown-symbol"]);
    }
}
