//! Builtin commands
//!
//! Each submodule registers a family of commands with
//! [`MathContext::define_function`](crate::context::MathContext::define_function)
//! and holds the layout function for the atom kind those commands produce.
//! [`LayoutBuilder`](crate::build_layout::LayoutBuilder) dispatches to the
//! layout functions; the parser calls a few helpers directly to validate
//! delimiters, colors and operator limits.
//!
//! ## Key Components
//!
//! - **Fractions** (`genfrac`): `\frac` and its variants, `\binom`, and the
//!   infix forms `\over`, `\atop`, `\choose`, `\brace`, `\brack`.
//!
//! - **Operators** (`op`, `operatorname`): symbol operators such as `\sum`,
//!   named functions such as `\sin`, and their limit placement.
//!
//! - **Delimiters** (`delimsizing`): `\left ... \right` pairs, `\middle`,
//!   and the fixed `\big` sizes.
//!
//! - **Style and font switches** (`sizing`, `styling`, `font`, `text`,
//!   `color`): commands that change the [`LayoutContext`] of their body.
//!
//! [`LayoutContext`]: crate::layout_context::LayoutContext

pub mod accent;
pub mod char;
pub mod color;
pub mod delimsizing;
pub mod enclose;
pub mod font;
pub mod genfrac;
pub mod kern;
pub mod lap;
pub mod mclass;
pub mod op;
pub mod operatorname;
pub mod overline;
pub mod overunder;
pub mod placeholder;
pub mod rule;
pub mod sizing;
pub mod spacing;
pub mod sqrt;
pub mod styling;
pub mod supsub;
pub mod symbols_ord;
pub mod text;
pub mod utils;

/// Registers `\frac`, `\dfrac`, `\tfrac`, `\cfrac`, the binomials, and the
/// infix fraction commands.
///
/// The infix commands (`\over`, `\atop`, `\choose`, `\brace`, `\brack`)
/// are marked `infix`: the parser splits the enclosing group at them and
/// passes the two halves as the numerator and denominator.
///
/// # LaTeX Syntax
///
/// ```latex
/// \frac{a}{b}    \binom{n}{k}    {a \over b}
/// ```
pub use genfrac::define_genfrac;

/// Registers `\sqrt` with its optional index.
pub use sqrt::define_sqrt;

/// Registers the accents, e.g. `\hat`, `\vec` and the wide `\widehat`.
///
/// # See Also
///
/// - [`define_overline`] for lines over and under a body.
pub use accent::define_accent;

/// Registers `\overset`, `\underset`, `\stackrel`, `\overbrace` and
/// `\underbrace`.
pub use overunder::define_overunder;

/// Registers `\overline` and `\underline`.
pub use overline::define_overline;

/// Registers `\big`, `\Big`, `\bigg`, `\Bigg` and their `l`, `r` and `m`
/// forms.
///
/// `\left`, `\middle` and `\right` are read by the parser itself; their
/// layout lives in the same module.
pub use delimsizing::define_delimsizing;

/// Registers `\color` and `\textcolor`.
///
/// # LaTeX Syntax
///
/// ```latex
/// {\color{red} a + b}    \textcolor{#00f}{x}
/// ```
///
/// # Error Handling
///
/// An invalid color is reported as `invalid-name`; the body is kept as a
/// plain group.
pub use color::define_color;

/// Registers `\fbox`, `\boxed`, `\colorbox` and `\fcolorbox`.
pub use enclose::define_enclose;

/// Registers the size switches `\tiny` to `\Huge`.
pub use sizing::define_sizing;

/// Registers `\displaystyle` and the other math style switches.
pub use styling::define_styling;

/// Registers the math font commands (`\mathrm`, `\mathbf`, `\mathbb`, ...)
/// and the old-style switches (`\rm`, `\bf`, ...).
pub use font::define_font;

/// Registers `\text` and the `\textxx` commands, whose argument is read in
/// text mode.
pub use text::define_text;

/// Registers the named functions (`\sin`, `\lim`, ...) and `\mathop`.
///
/// Symbol operators such as `\sum` come from the symbol table instead.
pub use op::define_op;

/// Registers `\operatorname` and `\operatornamewithlimits`.
pub use operatorname::define_operatorname;

/// Registers `\mathbin`, `\mathrel` and the other class commands.
pub use mclass::define_mclass;

/// Registers `\kern`, `\mkern`, `\hskip`, `\mskip` and `\hspace`.
///
/// # Error Handling
///
/// A length that does not parse is reported as `syntax-error` and the
/// space collapses to nothing.
pub use kern::define_kern;

/// Registers the named spaces `\,`, `\:`, `\;`, `\!`, `\quad`, ...
pub use spacing::define_spacing;

/// Registers `\rule`.
pub use rule::define_rule;

/// Registers `\llap`, `\rlap`, `\clap` and the math-mode forms.
pub use lap::define_lap;

/// Registers `\char`.
pub use char::define_char;

/// Registers `\placeholder`.
pub use placeholder::define_placeholder;

pub use color::parse_color;
pub use delimsizing::{is_delimiter, normalize_delimiter};
pub use op::default_limits;
pub use utils::assemble_sup_sub;
