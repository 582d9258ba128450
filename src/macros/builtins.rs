use phf::{Map, phf_map};

use super::MacroDefinition;

const fn m(template: &'static str, num_args: usize) -> MacroDefinition {
    MacroDefinition::from_static(template, num_args)
}

/// Macros available in every parse. User macros with the same name win.
pub static BUILTIN_MACROS: Map<&'static str, MacroDefinition> = phf_map! {
    // relations spelled with words
    "\\iff" => m("\\;\\Longleftrightarrow\\;", 0),
    "\\implies" => m("\\;\\Longrightarrow\\;", 0),
    "\\impliedby" => m("\\;\\Longleftarrow\\;", 0),
    "\\lt" => m("<", 0),
    "\\gt" => m(">", 0),
    // number sets
    "\\N" => m("\\mathbb{N}", 0),
    "\\Z" => m("\\mathbb{Z}", 0),
    "\\Q" => m("\\mathbb{Q}", 0),
    "\\R" => m("\\mathbb{R}", 0),
    "\\C" => m("\\mathbb{C}", 0),
    "\\Bbb" => m("\\mathbb", 0),
    "\\bold" => m("\\mathbf", 0),
    "\\emph" => m("\\textit{#1}", 1),
    // shorthands
    "\\half" => m("\\frac{1}{2}", 0),
    "\\third" => m("\\frac{1}{3}", 0),
    "\\quarter" => m("\\frac{1}{4}", 0),
    "\\differentialD" => m("\\mathrm{d}", 0),
    "\\exponentialE" => m("\\mathrm{e}", 0),
    "\\imaginaryI" => m("\\mathrm{i}", 0),
    "\\bmod" => m("\\mathbin{\\mathrm{mod}}", 0),
    "\\pmod" => m("\\quad(\\operatorname{mod}\\ #1)", 1),
    "\\mod" => m("\\quad\\operatorname{mod}\\,#1", 1),
    // paired delimiters
    "\\abs" => m("\\left\\vert #1\\right\\vert", 1),
    "\\norm" => m("\\left\\Vert #1\\right\\Vert", 1),
    "\\set" => m("\\left\\lbrace #1\\right\\rbrace", 1),
    "\\bra" => m("\\left\\langle #1\\right\\vert", 1),
    "\\ket" => m("\\left\\vert #1\\right\\rangle", 1),
    "\\braket" => m("\\left\\langle #1\\right\\rangle", 1),
    "\\floor" => m("\\left\\lfloor #1\\right\\rfloor", 1),
    "\\ceil" => m("\\left\\lceil #1\\right\\rceil", 1),
};
