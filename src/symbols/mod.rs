//! Symbol tables.
//!
//! Maps command names such as `\alpha` and single characters such as `+` to
//! the character drawn, its font and its TeX class, separately for math and
//! text mode. The builtin symbols live in static tables; [`Symbols`] layers
//! runtime additions on top of them.
//!
//! ```rust
//! use mathbox::symbols::{Atom, Group, Mode, create_symbols};
//!
//! let symbols = create_symbols();
//! let le = symbols.get(Mode::Math, "\\le").unwrap();
//! assert_eq!(le.group, Group::Atom(Atom::Rel));
//! ```

mod types;

use phf::{Map, phf_map};

use crate::namespace::KeyMap;
pub use types::{Atom, CharInfo, Font, Group, Mode, NonAtom};

const MATHORD: Group = Group::NonAtom(NonAtom::MathOrd);
const TEXTORD: Group = Group::NonAtom(NonAtom::TextOrd);
const OP: Group = Group::NonAtom(NonAtom::OpToken);
const SPACING: Group = Group::NonAtom(NonAtom::Spacing);
const REL: Group = Group::Atom(Atom::Rel);
const BIN: Group = Group::Atom(Atom::Bin);
const OPEN: Group = Group::Atom(Atom::Open);
const CLOSE: Group = Group::Atom(Atom::Close);
const PUNCT: Group = Group::Atom(Atom::Punct);
const INNER: Group = Group::Atom(Atom::Inner);

/// Symbol table for both modes.
///
/// Lookups consult the runtime entries first and fall back to the builtin
/// tables, so add-ons can override a builtin symbol.
#[derive(Debug, Clone, Default)]
pub struct Symbols {
    math: KeyMap<String, CharInfo>,
    text: KeyMap<String, CharInfo>,
}

impl Symbols {
    /// Creates a table holding only the builtin symbols.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Defines a symbol in `mode`.
    ///
    /// With `accept_unicode_char` the replacement character itself also
    /// becomes a key, so typing `α` behaves like `\alpha`.
    pub fn define_symbol(
        &mut self,
        mode: Mode,
        font: Font,
        group: Group,
        replace: Option<char>,
        name: &str,
        accept_unicode_char: bool,
    ) {
        let char_info = CharInfo::new(font, group, replace);
        let table = match mode {
            Mode::Math => &mut self.math,
            Mode::Text => &mut self.text,
        };
        table.insert(name.to_owned(), char_info);
        if accept_unicode_char && let Some(ch) = replace {
            table.insert(ch.to_string(), char_info);
        }
    }

    /// Looks up a math-mode symbol.
    #[must_use]
    pub fn get_math(&self, name: &str) -> Option<&CharInfo> {
        self.math.get(name).or_else(|| MATH_SYMBOLS.get(name))
    }

    /// Looks up a text-mode symbol.
    #[must_use]
    pub fn get_text(&self, name: &str) -> Option<&CharInfo> {
        self.text.get(name).or_else(|| TEXT_SYMBOLS.get(name))
    }

    /// Looks up a symbol in `mode`.
    #[must_use]
    pub fn get(&self, mode: Mode, name: &str) -> Option<&CharInfo> {
        match mode {
            Mode::Math => self.get_math(name),
            Mode::Text => self.get_text(name),
        }
    }

    /// Whether `name` is a symbol in `mode`.
    #[must_use]
    pub fn contains(&self, mode: Mode, name: &str) -> bool {
        self.get(mode, name).is_some()
    }

    /// The command name to write for `ch` in `mode`, if `ch` is only
    /// reachable through a command (e.g. `\u{3b1}` gives `\alpha`).
    #[must_use]
    pub fn command_for_char(&self, mode: Mode, ch: char) -> Option<&'static str> {
        let table = match mode {
            Mode::Math => &MATH_SYMBOLS,
            Mode::Text => &TEXT_SYMBOLS,
        };
        let mut found: Option<&'static str> = None;
        for (name, info) in table.entries() {
            if info.replace == Some(ch) && name.starts_with('\\') {
                // Prefer the shortest spelling, then the alphabetically first,
                // so the choice does not depend on hash order.
                found = match found {
                    Some(prev) if (prev.len(), prev) <= (name.len(), *name) => Some(prev),
                    _ => Some(*name),
                };
            }
        }
        found
    }
}

/// Creates the builtin symbol table.
///
/// ASCII letters are added at runtime, together with the typed form of every
/// named symbol, so `\u{3b1}` parses like `\alpha` and `\u{2264}` like `\le`.
/// When several commands draw the same character, the shortest name wins.
#[must_use]
pub fn create_symbols() -> Symbols {
    let mut symbols = Symbols::new();

    for ch in ('A'..='Z').chain('a'..='z') {
        let name = ch.to_string();
        symbols.define_symbol(Mode::Math, Font::Main, MATHORD, Some(ch), &name, false);
        symbols.define_symbol(Mode::Text, Font::Main, TEXTORD, Some(ch), &name, false);
    }

    for (mode, table) in [(Mode::Math, &MATH_SYMBOLS), (Mode::Text, &TEXT_SYMBOLS)] {
        let mut entries: Vec<(&&'static str, &CharInfo)> = table.entries().collect();
        entries.sort_by_key(|(name, _)| (name.len(), **name));
        for (_, info) in entries {
            let Some(ch) = info.replace else { continue };
            if info.group == SPACING || ch.is_ascii() {
                continue;
            }
            let key = ch.to_string();
            if !symbols.contains(mode, &key) {
                symbols.define_symbol(mode, info.font, info.group, Some(ch), &key, false);
            }
        }
    }

    symbols
}

/// Text-mode ligatures and their replacements.
pub const LIGATURES: Map<&'static str, &'static str> = phf_map!(
    "--" => "\u{2013}",
    "---" => "\u{2014}",
    "``" => "\u{201c}",
    "''" => "\u{201d}",
);

/// Replacement for a text-mode ligature.
#[must_use]
pub fn get_ligature_replacement(s: &str) -> Option<&'static str> {
    LIGATURES.get(s).copied()
}

/// Named and single-character symbols available in math mode.
static MATH_SYMBOLS: Map<&'static str, CharInfo> = phf_map! {
    "\\alpha" => CharInfo::new(Font::Main, MATHORD, Some('\u{3b1}')),
    "\\beta" => CharInfo::new(Font::Main, MATHORD, Some('\u{3b2}')),
    "\\gamma" => CharInfo::new(Font::Main, MATHORD, Some('\u{3b3}')),
    "\\delta" => CharInfo::new(Font::Main, MATHORD, Some('\u{3b4}')),
    "\\epsilon" => CharInfo::new(Font::Main, MATHORD, Some('\u{3f5}')),
    "\\varepsilon" => CharInfo::new(Font::Main, MATHORD, Some('\u{3b5}')),
    "\\zeta" => CharInfo::new(Font::Main, MATHORD, Some('\u{3b6}')),
    "\\eta" => CharInfo::new(Font::Main, MATHORD, Some('\u{3b7}')),
    "\\theta" => CharInfo::new(Font::Main, MATHORD, Some('\u{3b8}')),
    "\\vartheta" => CharInfo::new(Font::Main, MATHORD, Some('\u{3d1}')),
    "\\iota" => CharInfo::new(Font::Main, MATHORD, Some('\u{3b9}')),
    "\\kappa" => CharInfo::new(Font::Main, MATHORD, Some('\u{3ba}')),
    "\\lambda" => CharInfo::new(Font::Main, MATHORD, Some('\u{3bb}')),
    "\\mu" => CharInfo::new(Font::Main, MATHORD, Some('\u{3bc}')),
    "\\nu" => CharInfo::new(Font::Main, MATHORD, Some('\u{3bd}')),
    "\\xi" => CharInfo::new(Font::Main, MATHORD, Some('\u{3be}')),
    "\\omicron" => CharInfo::new(Font::Main, MATHORD, Some('\u{3bf}')),
    "\\pi" => CharInfo::new(Font::Main, MATHORD, Some('\u{3c0}')),
    "\\varpi" => CharInfo::new(Font::Main, MATHORD, Some('\u{3d6}')),
    "\\rho" => CharInfo::new(Font::Main, MATHORD, Some('\u{3c1}')),
    "\\varrho" => CharInfo::new(Font::Main, MATHORD, Some('\u{3f1}')),
    "\\sigma" => CharInfo::new(Font::Main, MATHORD, Some('\u{3c3}')),
    "\\varsigma" => CharInfo::new(Font::Main, MATHORD, Some('\u{3c2}')),
    "\\tau" => CharInfo::new(Font::Main, MATHORD, Some('\u{3c4}')),
    "\\upsilon" => CharInfo::new(Font::Main, MATHORD, Some('\u{3c5}')),
    "\\phi" => CharInfo::new(Font::Main, MATHORD, Some('\u{3d5}')),
    "\\varphi" => CharInfo::new(Font::Main, MATHORD, Some('\u{3c6}')),
    "\\chi" => CharInfo::new(Font::Main, MATHORD, Some('\u{3c7}')),
    "\\psi" => CharInfo::new(Font::Main, MATHORD, Some('\u{3c8}')),
    "\\omega" => CharInfo::new(Font::Main, MATHORD, Some('\u{3c9}')),
    "\\Gamma" => CharInfo::new(Font::Main, MATHORD, Some('\u{393}')),
    "\\Delta" => CharInfo::new(Font::Main, MATHORD, Some('\u{394}')),
    "\\Theta" => CharInfo::new(Font::Main, MATHORD, Some('\u{398}')),
    "\\Lambda" => CharInfo::new(Font::Main, MATHORD, Some('\u{39b}')),
    "\\Xi" => CharInfo::new(Font::Main, MATHORD, Some('\u{39e}')),
    "\\Pi" => CharInfo::new(Font::Main, MATHORD, Some('\u{3a0}')),
    "\\Sigma" => CharInfo::new(Font::Main, MATHORD, Some('\u{3a3}')),
    "\\Upsilon" => CharInfo::new(Font::Main, MATHORD, Some('\u{3a5}')),
    "\\Phi" => CharInfo::new(Font::Main, MATHORD, Some('\u{3a6}')),
    "\\Psi" => CharInfo::new(Font::Main, MATHORD, Some('\u{3a8}')),
    "\\Omega" => CharInfo::new(Font::Main, MATHORD, Some('\u{3a9}')),
    "\\imath" => CharInfo::new(Font::Main, MATHORD, Some('\u{131}')),
    "\\jmath" => CharInfo::new(Font::Main, MATHORD, Some('\u{237}')),
    "=" => CharInfo::new(Font::Main, REL, Some('=')),
    "<" => CharInfo::new(Font::Main, REL, Some('<')),
    ">" => CharInfo::new(Font::Main, REL, Some('>')),
    ":" => CharInfo::new(Font::Main, REL, Some(':')),
    "\\le" => CharInfo::new(Font::Main, REL, Some('\u{2264}')),
    "\\leq" => CharInfo::new(Font::Main, REL, Some('\u{2264}')),
    "\\ge" => CharInfo::new(Font::Main, REL, Some('\u{2265}')),
    "\\geq" => CharInfo::new(Font::Main, REL, Some('\u{2265}')),
    "\\ne" => CharInfo::new(Font::Main, REL, Some('\u{2260}')),
    "\\neq" => CharInfo::new(Font::Main, REL, Some('\u{2260}')),
    "\\equiv" => CharInfo::new(Font::Main, REL, Some('\u{2261}')),
    "\\sim" => CharInfo::new(Font::Main, REL, Some('\u{223c}')),
    "\\simeq" => CharInfo::new(Font::Main, REL, Some('\u{2243}')),
    "\\approx" => CharInfo::new(Font::Main, REL, Some('\u{2248}')),
    "\\cong" => CharInfo::new(Font::Main, REL, Some('\u{2245}')),
    "\\propto" => CharInfo::new(Font::Main, REL, Some('\u{221d}')),
    "\\in" => CharInfo::new(Font::Main, REL, Some('\u{2208}')),
    "\\notin" => CharInfo::new(Font::Main, REL, Some('\u{2209}')),
    "\\ni" => CharInfo::new(Font::Main, REL, Some('\u{220b}')),
    "\\owns" => CharInfo::new(Font::Main, REL, Some('\u{220b}')),
    "\\subset" => CharInfo::new(Font::Main, REL, Some('\u{2282}')),
    "\\supset" => CharInfo::new(Font::Main, REL, Some('\u{2283}')),
    "\\subseteq" => CharInfo::new(Font::Main, REL, Some('\u{2286}')),
    "\\supseteq" => CharInfo::new(Font::Main, REL, Some('\u{2287}')),
    "\\ll" => CharInfo::new(Font::Main, REL, Some('\u{226a}')),
    "\\gg" => CharInfo::new(Font::Main, REL, Some('\u{226b}')),
    "\\prec" => CharInfo::new(Font::Main, REL, Some('\u{227a}')),
    "\\succ" => CharInfo::new(Font::Main, REL, Some('\u{227b}')),
    "\\preceq" => CharInfo::new(Font::Main, REL, Some('\u{2aaf}')),
    "\\succeq" => CharInfo::new(Font::Main, REL, Some('\u{2ab0}')),
    "\\perp" => CharInfo::new(Font::Main, REL, Some('\u{22a5}')),
    "\\mid" => CharInfo::new(Font::Main, REL, Some('\u{2223}')),
    "\\parallel" => CharInfo::new(Font::Main, REL, Some('\u{2225}')),
    "\\vdash" => CharInfo::new(Font::Main, REL, Some('\u{22a2}')),
    "\\dashv" => CharInfo::new(Font::Main, REL, Some('\u{22a3}')),
    "\\models" => CharInfo::new(Font::Main, REL, Some('\u{22a8}')),
    "\\to" => CharInfo::new(Font::Main, REL, Some('\u{2192}')),
    "\\rightarrow" => CharInfo::new(Font::Main, REL, Some('\u{2192}')),
    "\\gets" => CharInfo::new(Font::Main, REL, Some('\u{2190}')),
    "\\leftarrow" => CharInfo::new(Font::Main, REL, Some('\u{2190}')),
    "\\leftrightarrow" => CharInfo::new(Font::Main, REL, Some('\u{2194}')),
    "\\Rightarrow" => CharInfo::new(Font::Main, REL, Some('\u{21d2}')),
    "\\Leftarrow" => CharInfo::new(Font::Main, REL, Some('\u{21d0}')),
    "\\Leftrightarrow" => CharInfo::new(Font::Main, REL, Some('\u{21d4}')),
    "\\mapsto" => CharInfo::new(Font::Main, REL, Some('\u{21a6}')),
    "\\longrightarrow" => CharInfo::new(Font::Main, REL, Some('\u{27f6}')),
    "\\longleftarrow" => CharInfo::new(Font::Main, REL, Some('\u{27f5}')),
    "\\longleftrightarrow" => CharInfo::new(Font::Main, REL, Some('\u{27f7}')),
    "\\Longrightarrow" => CharInfo::new(Font::Main, REL, Some('\u{27f9}')),
    "\\Longleftarrow" => CharInfo::new(Font::Main, REL, Some('\u{27f8}')),
    "\\Longleftrightarrow" => CharInfo::new(Font::Main, REL, Some('\u{27fa}')),
    "\\longmapsto" => CharInfo::new(Font::Main, REL, Some('\u{27fc}')),
    "\\uparrow" => CharInfo::new(Font::Main, REL, Some('\u{2191}')),
    "\\downarrow" => CharInfo::new(Font::Main, REL, Some('\u{2193}')),
    "\\Uparrow" => CharInfo::new(Font::Main, REL, Some('\u{21d1}')),
    "\\Downarrow" => CharInfo::new(Font::Main, REL, Some('\u{21d3}')),
    "\\updownarrow" => CharInfo::new(Font::Main, REL, Some('\u{2195}')),
    "\\nearrow" => CharInfo::new(Font::Main, REL, Some('\u{2197}')),
    "\\searrow" => CharInfo::new(Font::Main, REL, Some('\u{2198}')),
    "\\asymp" => CharInfo::new(Font::Main, REL, Some('\u{224d}')),
    "\\doteq" => CharInfo::new(Font::Main, REL, Some('\u{2250}')),
    "\\bowtie" => CharInfo::new(Font::Main, REL, Some('\u{22c8}')),
    "\\smile" => CharInfo::new(Font::Main, REL, Some('\u{2323}')),
    "\\frown" => CharInfo::new(Font::Main, REL, Some('\u{2322}')),
    "\\leqslant" => CharInfo::new(Font::Ams, REL, Some('\u{2a7d}')),
    "\\geqslant" => CharInfo::new(Font::Ams, REL, Some('\u{2a7e}')),
    "\\nleq" => CharInfo::new(Font::Ams, REL, Some('\u{2270}')),
    "\\ngeq" => CharInfo::new(Font::Ams, REL, Some('\u{2271}')),
    "\\lesssim" => CharInfo::new(Font::Ams, REL, Some('\u{2272}')),
    "\\gtrsim" => CharInfo::new(Font::Ams, REL, Some('\u{2273}')),
    "\\therefore" => CharInfo::new(Font::Ams, REL, Some('\u{2234}')),
    "\\because" => CharInfo::new(Font::Ams, REL, Some('\u{2235}')),
    "\\subsetneq" => CharInfo::new(Font::Ams, REL, Some('\u{228a}')),
    "\\supsetneq" => CharInfo::new(Font::Ams, REL, Some('\u{228b}')),
    "\\nsubseteq" => CharInfo::new(Font::Ams, REL, Some('\u{2288}')),
    "\\nmid" => CharInfo::new(Font::Ams, REL, Some('\u{2224}')),
    "\\vDash" => CharInfo::new(Font::Ams, REL, Some('\u{22a8}')),
    "\\Vdash" => CharInfo::new(Font::Ams, REL, Some('\u{22a9}')),
    "+" => CharInfo::new(Font::Main, BIN, Some('+')),
    "-" => CharInfo::new(Font::Main, BIN, Some('\u{2212}')),
    "*" => CharInfo::new(Font::Main, BIN, Some('\u{2217}')),
    "\\pm" => CharInfo::new(Font::Main, BIN, Some('\u{b1}')),
    "\\mp" => CharInfo::new(Font::Main, BIN, Some('\u{2213}')),
    "\\times" => CharInfo::new(Font::Main, BIN, Some('\u{d7}')),
    "\\div" => CharInfo::new(Font::Main, BIN, Some('\u{f7}')),
    "\\cdot" => CharInfo::new(Font::Main, BIN, Some('\u{22c5}')),
    "\\ast" => CharInfo::new(Font::Main, BIN, Some('\u{2217}')),
    "\\star" => CharInfo::new(Font::Main, BIN, Some('\u{22c6}')),
    "\\circ" => CharInfo::new(Font::Main, BIN, Some('\u{2218}')),
    "\\bullet" => CharInfo::new(Font::Main, BIN, Some('\u{2219}')),
    "\\oplus" => CharInfo::new(Font::Main, BIN, Some('\u{2295}')),
    "\\ominus" => CharInfo::new(Font::Main, BIN, Some('\u{2296}')),
    "\\otimes" => CharInfo::new(Font::Main, BIN, Some('\u{2297}')),
    "\\oslash" => CharInfo::new(Font::Main, BIN, Some('\u{2298}')),
    "\\odot" => CharInfo::new(Font::Main, BIN, Some('\u{2299}')),
    "\\cup" => CharInfo::new(Font::Main, BIN, Some('\u{222a}')),
    "\\cap" => CharInfo::new(Font::Main, BIN, Some('\u{2229}')),
    "\\wedge" => CharInfo::new(Font::Main, BIN, Some('\u{2227}')),
    "\\land" => CharInfo::new(Font::Main, BIN, Some('\u{2227}')),
    "\\vee" => CharInfo::new(Font::Main, BIN, Some('\u{2228}')),
    "\\lor" => CharInfo::new(Font::Main, BIN, Some('\u{2228}')),
    "\\setminus" => CharInfo::new(Font::Main, BIN, Some('\u{2216}')),
    "\\dagger" => CharInfo::new(Font::Main, BIN, Some('\u{2020}')),
    "\\ddagger" => CharInfo::new(Font::Main, BIN, Some('\u{2021}')),
    "\\amalg" => CharInfo::new(Font::Main, BIN, Some('\u{2a3f}')),
    "\\sqcup" => CharInfo::new(Font::Main, BIN, Some('\u{2294}')),
    "\\sqcap" => CharInfo::new(Font::Main, BIN, Some('\u{2293}')),
    "\\uplus" => CharInfo::new(Font::Main, BIN, Some('\u{228e}')),
    "\\triangleleft" => CharInfo::new(Font::Main, BIN, Some('\u{25c3}')),
    "\\triangleright" => CharInfo::new(Font::Main, BIN, Some('\u{25b9}')),
    "\\diamond" => CharInfo::new(Font::Main, BIN, Some('\u{22c4}')),
    "\\wr" => CharInfo::new(Font::Main, BIN, Some('\u{2240}')),
    "\\bigcirc" => CharInfo::new(Font::Main, BIN, Some('\u{25ef}')),
    "\\ltimes" => CharInfo::new(Font::Ams, BIN, Some('\u{22c9}')),
    "\\rtimes" => CharInfo::new(Font::Ams, BIN, Some('\u{22ca}')),
    "\\boxplus" => CharInfo::new(Font::Ams, BIN, Some('\u{229e}')),
    "\\boxtimes" => CharInfo::new(Font::Ams, BIN, Some('\u{22a0}')),
    "\\smallsetminus" => CharInfo::new(Font::Ams, BIN, Some('\u{2216}')),
    "(" => CharInfo::new(Font::Main, OPEN, Some('(')),
    "[" => CharInfo::new(Font::Main, OPEN, Some('[')),
    "\\{" => CharInfo::new(Font::Main, OPEN, Some('{')),
    "\\lbrace" => CharInfo::new(Font::Main, OPEN, Some('{')),
    "\\lbrack" => CharInfo::new(Font::Main, OPEN, Some('[')),
    "\\langle" => CharInfo::new(Font::Main, OPEN, Some('\u{27e8}')),
    "\\lfloor" => CharInfo::new(Font::Main, OPEN, Some('\u{230a}')),
    "\\lceil" => CharInfo::new(Font::Main, OPEN, Some('\u{2308}')),
    "\\lvert" => CharInfo::new(Font::Main, OPEN, Some('\u{2223}')),
    "\\lVert" => CharInfo::new(Font::Main, OPEN, Some('\u{2225}')),
    ")" => CharInfo::new(Font::Main, CLOSE, Some(')')),
    "]" => CharInfo::new(Font::Main, CLOSE, Some(']')),
    "!" => CharInfo::new(Font::Main, CLOSE, Some('!')),
    "?" => CharInfo::new(Font::Main, CLOSE, Some('?')),
    "\\}" => CharInfo::new(Font::Main, CLOSE, Some('}')),
    "\\rbrace" => CharInfo::new(Font::Main, CLOSE, Some('}')),
    "\\rbrack" => CharInfo::new(Font::Main, CLOSE, Some(']')),
    "\\rangle" => CharInfo::new(Font::Main, CLOSE, Some('\u{27e9}')),
    "\\rfloor" => CharInfo::new(Font::Main, CLOSE, Some('\u{230b}')),
    "\\rceil" => CharInfo::new(Font::Main, CLOSE, Some('\u{2309}')),
    "\\rvert" => CharInfo::new(Font::Main, CLOSE, Some('\u{2223}')),
    "\\rVert" => CharInfo::new(Font::Main, CLOSE, Some('\u{2225}')),
    "," => CharInfo::new(Font::Main, PUNCT, Some(',')),
    ";" => CharInfo::new(Font::Main, PUNCT, Some(';')),
    "\\colon" => CharInfo::new(Font::Main, PUNCT, Some(':')),
    "\\ldots" => CharInfo::new(Font::Main, INNER, Some('\u{2026}')),
    "\\cdots" => CharInfo::new(Font::Main, INNER, Some('\u{22ef}')),
    "\\ddots" => CharInfo::new(Font::Main, INNER, Some('\u{22f1}')),
    "\\dots" => CharInfo::new(Font::Main, INNER, Some('\u{2026}')),
    "|" => CharInfo::new(Font::Main, TEXTORD, Some('\u{2223}')),
    "." => CharInfo::new(Font::Main, TEXTORD, Some('.')),
    "/" => CharInfo::new(Font::Main, TEXTORD, Some('/')),
    "@" => CharInfo::new(Font::Main, TEXTORD, Some('@')),
    "\"" => CharInfo::new(Font::Main, TEXTORD, Some('"')),
    "'" => CharInfo::new(Font::Main, TEXTORD, Some('\u{2032}')),
    "0" => CharInfo::new(Font::Main, TEXTORD, Some('0')),
    "1" => CharInfo::new(Font::Main, TEXTORD, Some('1')),
    "2" => CharInfo::new(Font::Main, TEXTORD, Some('2')),
    "3" => CharInfo::new(Font::Main, TEXTORD, Some('3')),
    "4" => CharInfo::new(Font::Main, TEXTORD, Some('4')),
    "5" => CharInfo::new(Font::Main, TEXTORD, Some('5')),
    "6" => CharInfo::new(Font::Main, TEXTORD, Some('6')),
    "7" => CharInfo::new(Font::Main, TEXTORD, Some('7')),
    "8" => CharInfo::new(Font::Main, TEXTORD, Some('8')),
    "9" => CharInfo::new(Font::Main, TEXTORD, Some('9')),
    "\\vert" => CharInfo::new(Font::Main, TEXTORD, Some('\u{2223}')),
    "\\|" => CharInfo::new(Font::Main, TEXTORD, Some('\u{2225}')),
    "\\Vert" => CharInfo::new(Font::Main, TEXTORD, Some('\u{2225}')),
    "\\infty" => CharInfo::new(Font::Main, TEXTORD, Some('\u{221e}')),
    "\\partial" => CharInfo::new(Font::Main, TEXTORD, Some('\u{2202}')),
    "\\nabla" => CharInfo::new(Font::Main, TEXTORD, Some('\u{2207}')),
    "\\forall" => CharInfo::new(Font::Main, TEXTORD, Some('\u{2200}')),
    "\\exists" => CharInfo::new(Font::Main, TEXTORD, Some('\u{2203}')),
    "\\emptyset" => CharInfo::new(Font::Main, TEXTORD, Some('\u{2205}')),
    "\\hbar" => CharInfo::new(Font::Main, TEXTORD, Some('\u{210f}')),
    "\\ell" => CharInfo::new(Font::Main, TEXTORD, Some('\u{2113}')),
    "\\neg" => CharInfo::new(Font::Main, TEXTORD, Some('\u{ac}')),
    "\\lnot" => CharInfo::new(Font::Main, TEXTORD, Some('\u{ac}')),
    "\\top" => CharInfo::new(Font::Main, TEXTORD, Some('\u{22a4}')),
    "\\bot" => CharInfo::new(Font::Main, TEXTORD, Some('\u{22a5}')),
    "\\prime" => CharInfo::new(Font::Main, TEXTORD, Some('\u{2032}')),
    "\\triangle" => CharInfo::new(Font::Main, TEXTORD, Some('\u{25b3}')),
    "\\angle" => CharInfo::new(Font::Main, TEXTORD, Some('\u{2220}')),
    "\\aleph" => CharInfo::new(Font::Main, TEXTORD, Some('\u{2135}')),
    "\\Re" => CharInfo::new(Font::Main, TEXTORD, Some('\u{211c}')),
    "\\Im" => CharInfo::new(Font::Main, TEXTORD, Some('\u{2111}')),
    "\\wp" => CharInfo::new(Font::Main, TEXTORD, Some('\u{2118}')),
    "\\surd" => CharInfo::new(Font::Main, TEXTORD, Some('\u{221a}')),
    "\\flat" => CharInfo::new(Font::Main, TEXTORD, Some('\u{266d}')),
    "\\natural" => CharInfo::new(Font::Main, TEXTORD, Some('\u{266e}')),
    "\\sharp" => CharInfo::new(Font::Main, TEXTORD, Some('\u{266f}')),
    "\\clubsuit" => CharInfo::new(Font::Main, TEXTORD, Some('\u{2663}')),
    "\\diamondsuit" => CharInfo::new(Font::Main, TEXTORD, Some('\u{2662}')),
    "\\heartsuit" => CharInfo::new(Font::Main, TEXTORD, Some('\u{2661}')),
    "\\spadesuit" => CharInfo::new(Font::Main, TEXTORD, Some('\u{2660}')),
    "\\#" => CharInfo::new(Font::Main, TEXTORD, Some('#')),
    "\\$" => CharInfo::new(Font::Main, TEXTORD, Some('$')),
    "\\%" => CharInfo::new(Font::Main, TEXTORD, Some('%')),
    "\\&" => CharInfo::new(Font::Main, TEXTORD, Some('&')),
    "\\_" => CharInfo::new(Font::Main, TEXTORD, Some('_')),
    "\\vdots" => CharInfo::new(Font::Main, TEXTORD, Some('\u{22ee}')),
    "\\backslash" => CharInfo::new(Font::Main, TEXTORD, Some('\\')),
    "\\degree" => CharInfo::new(Font::Main, TEXTORD, Some('\u{b0}')),
    "\\varnothing" => CharInfo::new(Font::Ams, TEXTORD, Some('\u{2205}')),
    "\\nexists" => CharInfo::new(Font::Ams, TEXTORD, Some('\u{2204}')),
    "\\square" => CharInfo::new(Font::Ams, TEXTORD, Some('\u{25a1}')),
    "\\blacksquare" => CharInfo::new(Font::Ams, TEXTORD, Some('\u{25a0}')),
    "\\checkmark" => CharInfo::new(Font::Ams, TEXTORD, Some('\u{2713}')),
    "\\complement" => CharInfo::new(Font::Ams, TEXTORD, Some('\u{2201}')),
    "\\lozenge" => CharInfo::new(Font::Ams, TEXTORD, Some('\u{25ca}')),
    "\\mho" => CharInfo::new(Font::Ams, TEXTORD, Some('\u{2127}')),
    "\\Bbbk" => CharInfo::new(Font::Ams, TEXTORD, Some('\u{1d55c}')),
    "\\sum" => CharInfo::new(Font::Main, OP, Some('\u{2211}')),
    "\\prod" => CharInfo::new(Font::Main, OP, Some('\u{220f}')),
    "\\coprod" => CharInfo::new(Font::Main, OP, Some('\u{2210}')),
    "\\int" => CharInfo::new(Font::Main, OP, Some('\u{222b}')),
    "\\iint" => CharInfo::new(Font::Main, OP, Some('\u{222c}')),
    "\\iiint" => CharInfo::new(Font::Main, OP, Some('\u{222d}')),
    "\\oint" => CharInfo::new(Font::Main, OP, Some('\u{222e}')),
    "\\bigcup" => CharInfo::new(Font::Main, OP, Some('\u{22c3}')),
    "\\bigcap" => CharInfo::new(Font::Main, OP, Some('\u{22c2}')),
    "\\bigvee" => CharInfo::new(Font::Main, OP, Some('\u{22c1}')),
    "\\bigwedge" => CharInfo::new(Font::Main, OP, Some('\u{22c0}')),
    "\\bigoplus" => CharInfo::new(Font::Main, OP, Some('\u{2a01}')),
    "\\bigotimes" => CharInfo::new(Font::Main, OP, Some('\u{2a02}')),
    "\\bigodot" => CharInfo::new(Font::Main, OP, Some('\u{2a00}')),
    "\\biguplus" => CharInfo::new(Font::Main, OP, Some('\u{2a04}')),
    "\\bigsqcup" => CharInfo::new(Font::Main, OP, Some('\u{2a06}')),
    "\\intop" => CharInfo::new(Font::Main, OP, Some('\u{222b}')),
    "\\smallint" => CharInfo::new(Font::Main, OP, Some('\u{222b}')),
    "~" => CharInfo::new(Font::Main, SPACING, Some('\u{a0}')),
    "\\ " => CharInfo::new(Font::Main, SPACING, Some('\u{a0}')),
    "\\nobreakspace" => CharInfo::new(Font::Main, SPACING, Some('\u{a0}')),
    "\\space" => CharInfo::new(Font::Main, SPACING, Some('\u{a0}')),
};

/// Named and single-character symbols available in text mode.
static TEXT_SYMBOLS: Map<&'static str, CharInfo> = phf_map! {
    "!" => CharInfo::new(Font::Main, TEXTORD, Some('!')),
    "@" => CharInfo::new(Font::Main, TEXTORD, Some('@')),
    "*" => CharInfo::new(Font::Main, TEXTORD, Some('*')),
    "(" => CharInfo::new(Font::Main, TEXTORD, Some('(')),
    ")" => CharInfo::new(Font::Main, TEXTORD, Some(')')),
    "-" => CharInfo::new(Font::Main, TEXTORD, Some('-')),
    "=" => CharInfo::new(Font::Main, TEXTORD, Some('=')),
    "+" => CharInfo::new(Font::Main, TEXTORD, Some('+')),
    "\"" => CharInfo::new(Font::Main, TEXTORD, Some('"')),
    ";" => CharInfo::new(Font::Main, TEXTORD, Some(';')),
    ":" => CharInfo::new(Font::Main, TEXTORD, Some(':')),
    "?" => CharInfo::new(Font::Main, TEXTORD, Some('?')),
    "/" => CharInfo::new(Font::Main, TEXTORD, Some('/')),
    "." => CharInfo::new(Font::Main, TEXTORD, Some('.')),
    "," => CharInfo::new(Font::Main, TEXTORD, Some(',')),
    "[" => CharInfo::new(Font::Main, TEXTORD, Some('[')),
    "]" => CharInfo::new(Font::Main, TEXTORD, Some(']')),
    "<" => CharInfo::new(Font::Main, TEXTORD, Some('<')),
    ">" => CharInfo::new(Font::Main, TEXTORD, Some('>')),
    "|" => CharInfo::new(Font::Main, TEXTORD, Some('|')),
    "`" => CharInfo::new(Font::Main, TEXTORD, Some('`')),
    "'" => CharInfo::new(Font::Main, TEXTORD, Some('\'')),
    "0" => CharInfo::new(Font::Main, TEXTORD, Some('0')),
    "1" => CharInfo::new(Font::Main, TEXTORD, Some('1')),
    "2" => CharInfo::new(Font::Main, TEXTORD, Some('2')),
    "3" => CharInfo::new(Font::Main, TEXTORD, Some('3')),
    "4" => CharInfo::new(Font::Main, TEXTORD, Some('4')),
    "5" => CharInfo::new(Font::Main, TEXTORD, Some('5')),
    "6" => CharInfo::new(Font::Main, TEXTORD, Some('6')),
    "7" => CharInfo::new(Font::Main, TEXTORD, Some('7')),
    "8" => CharInfo::new(Font::Main, TEXTORD, Some('8')),
    "9" => CharInfo::new(Font::Main, TEXTORD, Some('9')),
    "\\#" => CharInfo::new(Font::Main, TEXTORD, Some('#')),
    "\\$" => CharInfo::new(Font::Main, TEXTORD, Some('$')),
    "\\%" => CharInfo::new(Font::Main, TEXTORD, Some('%')),
    "\\&" => CharInfo::new(Font::Main, TEXTORD, Some('&')),
    "\\_" => CharInfo::new(Font::Main, TEXTORD, Some('_')),
    "\\{" => CharInfo::new(Font::Main, TEXTORD, Some('{')),
    "\\}" => CharInfo::new(Font::Main, TEXTORD, Some('}')),
    "\\textbackslash" => CharInfo::new(Font::Main, TEXTORD, Some('\\')),
    "\\textasciitilde" => CharInfo::new(Font::Main, TEXTORD, Some('~')),
    "\\textasciicircum" => CharInfo::new(Font::Main, TEXTORD, Some('^')),
    "\\textbar" => CharInfo::new(Font::Main, TEXTORD, Some('|')),
    "\\textless" => CharInfo::new(Font::Main, TEXTORD, Some('<')),
    "\\textgreater" => CharInfo::new(Font::Main, TEXTORD, Some('>')),
    "\\textunderscore" => CharInfo::new(Font::Main, TEXTORD, Some('_')),
    "\\textbraceleft" => CharInfo::new(Font::Main, TEXTORD, Some('{')),
    "\\textbraceright" => CharInfo::new(Font::Main, TEXTORD, Some('}')),
    "\\ldots" => CharInfo::new(Font::Main, TEXTORD, Some('\u{2026}')),
    "\\dots" => CharInfo::new(Font::Main, TEXTORD, Some('\u{2026}')),
    "\\textellipsis" => CharInfo::new(Font::Main, TEXTORD, Some('\u{2026}')),
    "\\S" => CharInfo::new(Font::Main, TEXTORD, Some('\u{a7}')),
    "\\P" => CharInfo::new(Font::Main, TEXTORD, Some('\u{b6}')),
    "\\dag" => CharInfo::new(Font::Main, TEXTORD, Some('\u{2020}')),
    "\\ddag" => CharInfo::new(Font::Main, TEXTORD, Some('\u{2021}')),
    "\\textdagger" => CharInfo::new(Font::Main, TEXTORD, Some('\u{2020}')),
    "\\textdaggerdbl" => CharInfo::new(Font::Main, TEXTORD, Some('\u{2021}')),
    "\\copyright" => CharInfo::new(Font::Main, TEXTORD, Some('\u{a9}')),
    "\\textcopyright" => CharInfo::new(Font::Main, TEXTORD, Some('\u{a9}')),
    "\\pounds" => CharInfo::new(Font::Main, TEXTORD, Some('\u{a3}')),
    "\\textsterling" => CharInfo::new(Font::Main, TEXTORD, Some('\u{a3}')),
    "\\textemdash" => CharInfo::new(Font::Main, TEXTORD, Some('\u{2014}')),
    "\\textendash" => CharInfo::new(Font::Main, TEXTORD, Some('\u{2013}')),
    "\\textquoteleft" => CharInfo::new(Font::Main, TEXTORD, Some('\u{2018}')),
    "\\textquoteright" => CharInfo::new(Font::Main, TEXTORD, Some('\u{2019}')),
    "\\textquotedblleft" => CharInfo::new(Font::Main, TEXTORD, Some('\u{201c}')),
    "\\textquotedblright" => CharInfo::new(Font::Main, TEXTORD, Some('\u{201d}')),
    "\\textdegree" => CharInfo::new(Font::Main, TEXTORD, Some('\u{b0}')),
    "~" => CharInfo::new(Font::Main, SPACING, Some('\u{a0}')),
    "\\ " => CharInfo::new(Font::Main, SPACING, Some('\u{a0}')),
    "\\nobreakspace" => CharInfo::new(Font::Main, SPACING, Some('\u{a0}')),
    "\\space" => CharInfo::new(Font::Main, SPACING, Some('\u{a0}')),
};
