//! mathbox: LaTeX math tokenizer, error-tolerant parser and TeX box layout.
//!
//! The pipeline runs in three stages:
//!
//! 1. [`tokenize`] turns a LaTeX source string into tokens, expanding
//!    macros on the way.
//! 2. [`parse_tokens`] builds an [`AtomTree`]: an arena of atoms linked by
//!    [`AtomId`]. Malformed input never aborts the parse; it yields error
//!    atoms in place of the bad input.
//! 3. [`decompose`] lays the atoms out as a tree of [`LayoutBox`]es with
//!    concrete metrics in em, following the rules of the TeXbook,
//!    appendix G.
//!
//! Drawing the boxes is left to the caller.
#![warn(missing_docs)]
#![warn(clippy::nursery)]
#![warn(clippy::pedantic)]
#![warn(clippy::str_to_string)]
#![warn(clippy::non_ascii_literal)]
#![warn(clippy::pointer_format)]
#![warn(clippy::std_instead_of_core)]
#![warn(clippy::std_instead_of_alloc)]
#![warn(clippy::print_stdout)]
#![warn(clippy::print_stderr)]
#![warn(clippy::absolute_paths)]
#![warn(clippy::panic)]
#![warn(clippy::expect_used)]
#![warn(clippy::unwrap_in_result)]
#![warn(clippy::if_then_some_else_none)]
#![warn(clippy::unused_trait_names)]
#![warn(clippy::get_unwrap)]
#![warn(clippy::impl_trait_in_params)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::unimplemented)]
#![warn(clippy::return_and_then)]
#![warn(clippy::needless_raw_strings)]
#![warn(clippy::clone_on_ref_ptr)]
#![warn(clippy::rc_buffer)]
#![warn(clippy::undocumented_unsafe_blocks)]
#![warn(clippy::map_with_unused_argument_over_ranges)]
#![warn(clippy::missing_asserts_for_indexing)]
#![warn(clippy::separated_literal_suffix)]
#![warn(clippy::ref_patterns)]
// Not sure
#![allow(clippy::indexing_slicing)]
#![allow(clippy::string_slice)]
#![allow(clippy::pub_use)]
// clippy exceptions
#![allow(clippy::float_cmp)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::struct_excessive_bools)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::too_many_lines)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::default_numeric_fallback)]
#![allow(clippy::single_call_fn)]

extern crate alloc;

pub mod atom;
pub mod box_tree;
pub mod build_common;
pub mod build_layout;
pub mod context;
pub mod core;
pub mod define_function;
pub mod delimiter;
pub mod font_metrics;
pub mod font_metrics_data;
pub mod functions;
pub mod layout_context;
pub mod lexer;
pub mod macro_expander;
pub mod macros;
pub mod namespace;
/// Recursive-descent parser producing the atom tree.
pub mod parser;
pub mod spacing_data;
mod stack;
pub mod style;
pub mod symbols;
mod to_latex;
pub mod types;
pub mod units;

/// Registry of commands, symbols and macros shared by every stage.
///
/// [`MathContext::default`] registers the builtin command set. Further
/// commands can be added with
/// [`MathContext::define_function`](context::MathContext::define_function)
/// before the context is shared; it is immutable afterwards.
///
/// # Examples
///
/// ```rust
/// use mathbox::{MathContext, Settings, parse};
///
/// let ctx = MathContext::default();
/// let parsed = parse(&ctx, r"\frac{a}{b}", &Settings::default()).unwrap();
/// assert_eq!(parsed.root.len(), 1);
/// ```
pub use crate::context::MathContext;

/// Parses a LaTeX math expression into an atom tree.
///
/// Grammar errors are recovered from: the returned tree holds error atoms
/// where the input was wrong, and [`AtomTree::errors`] lists them.
///
/// # Examples
///
/// ```rust
/// use mathbox::types::ErrorCode;
/// use mathbox::{MathContext, Settings, parse};
///
/// let ctx = MathContext::default();
/// let parsed = parse(&ctx, r"\left( x", &Settings::default()).unwrap();
/// let errors = parsed.tree.errors(&parsed.root);
/// assert_eq!(errors[0].1, &ErrorCode::UnbalancedMatchfixOperator);
/// ```
pub use crate::core::parse;

/// Parses and lays out an expression into one root box.
///
/// # Examples
///
/// ```rust
/// use mathbox::{MathContext, Settings, render_to_box};
///
/// let ctx = MathContext::default();
/// let root = render_to_box(&ctx, "x^2", &Settings::default()).unwrap();
/// assert!(root.width > 0.0);
/// assert!(root.height > 0.0);
/// ```
pub use crate::core::render_to_box;

/// Result of [`parse`]: the arena and the top-level atoms.
pub use crate::core::ParsedMath;

/// Splits a source string into tokens, expanding user and builtin macros.
pub use crate::macro_expander::tokenize;

/// Parses a token list into atoms pushed onto a caller-provided tree.
pub use crate::parser::parse_tokens;

/// Lays out a list of atoms under a [`LayoutContext`].
pub use crate::build_layout::decompose;

pub use crate::atom::{Atom, AtomId, AtomKind, AtomTree, Branch, Limits, MAX_TREE_DEPTH};
pub use crate::box_tree::{BoxContent, BoxStyle, LayoutBox};
pub use crate::layout_context::LayoutContext;

/// Metrics of one glyph, in em.
pub use crate::font_metrics_data::CharacterMetrics;

/// Looks up the metrics of a character in one of the bundled TeX fonts.
///
/// # Examples
///
/// ```rust
/// use mathbox::font_metrics_data::FontName;
/// use mathbox::get_character_metrics;
/// use mathbox::symbols::Mode;
///
/// let x = get_character_metrics('x', FontName::MathItalic, Mode::Math).unwrap();
/// assert!(x.width > 0.0);
/// ```
pub use crate::font_metrics::get_character_metrics;

/// Unrecoverable failure of the pipeline.
pub use crate::types::ParseError;

/// Configuration of one pipeline run, built with `Settings::builder()`.
///
/// ```rust
/// use mathbox::Settings;
///
/// let settings = Settings::builder().display_mode(true).build();
/// assert!(settings.display_mode);
/// assert_eq!(settings.max_expand, 64);
/// ```
pub use crate::types::{Settings, StrictMode};

/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
