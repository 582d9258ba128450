//! Global context for parsing and layout

use crate::define_function::{FunctionDefSpec, FunctionSpec};
use crate::functions;
use crate::macros::MacroDefinition;
use crate::namespace::{KeyMap, Mapping};
use crate::symbols::{Symbols, create_symbols};

/// Command registry, symbol table and add-on macros.
///
/// `MathContext::default()` registers the builtin command set. Add-ons may
/// call [`MathContext::define_function`] and [`MathContext::define_macro`]
/// before the first parse; after that the context is only read, so one
/// instance can be shared by any number of threads. Font metrics are static
/// tables and need no per-context state.
#[derive(Debug, Clone)]
pub struct MathContext {
    /// All registered commands, keyed by name including the backslash
    pub functions: KeyMap<String, FunctionSpec>,
    /// Symbol table for both modes
    pub symbols: Symbols,
    /// Macros registered by add-ons. `Settings::macros` shadows these.
    pub macros: Mapping<MacroDefinition>,
}

impl MathContext {
    /// Creates a context with no commands, only the builtin symbols.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            functions: KeyMap::default(),
            symbols: create_symbols(),
            macros: Mapping::default(),
        }
    }

    /// Registers a command under each of its names, replacing any previous
    /// definition.
    pub fn define_function(&mut self, spec: FunctionDefSpec) {
        let data = FunctionSpec {
            args: spec.props.args,
            allowed_in_math: spec.props.allowed_in_math,
            allowed_in_text: spec.props.allowed_in_text,
            infix: spec.props.infix,
            primitive: spec.props.primitive,
            rest_of_group: spec.props.rest_of_group,
            handler: spec.handler,
        };

        for name in spec.names {
            self.functions.insert((*name).to_owned(), data.clone());
        }
    }

    /// Registers a macro available to every parse using this context.
    pub fn define_macro(&mut self, name: &str, definition: MacroDefinition) {
        self.macros.insert(name.to_owned(), definition);
    }

    /// Looks up a command.
    #[must_use]
    pub fn get_function(&self, name: &str) -> Option<&FunctionSpec> {
        self.functions.get(name)
    }
}

impl Default for MathContext {
    fn default() -> Self {
        let mut ctx = Self::empty();
        functions::define_genfrac(&mut ctx);
        functions::define_sqrt(&mut ctx);
        functions::define_accent(&mut ctx);
        functions::define_overunder(&mut ctx);
        functions::define_overline(&mut ctx);
        functions::define_delimsizing(&mut ctx);
        functions::define_color(&mut ctx);
        functions::define_enclose(&mut ctx);
        functions::define_sizing(&mut ctx);
        functions::define_styling(&mut ctx);
        functions::define_font(&mut ctx);
        functions::define_text(&mut ctx);
        functions::define_op(&mut ctx);
        functions::define_operatorname(&mut ctx);
        functions::define_mclass(&mut ctx);
        functions::define_kern(&mut ctx);
        functions::define_spacing(&mut ctx);
        functions::define_rule(&mut ctx);
        functions::define_lap(&mut ctx);
        functions::define_char(&mut ctx);
        functions::define_placeholder(&mut ctx);
        ctx
    }
}
