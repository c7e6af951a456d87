use std::collections::HashMap;

use crate::interpreter::{
    symbols::builtin::{EXTENDED_CONSTANTS, EXTENDED_FUNCTIONS, STANDARD_CONSTANTS,
                       STANDARD_FUNCTIONS},
    value::InterpretResult,
};

/// Signature of every function a symbol table can hold.
pub type UnaryFn = fn(f64) -> f64;

/// A callable symbol.
#[derive(Debug, Clone, Copy)]
pub struct Function {
    arity: usize,
    func:  UnaryFn,
}

impl Function {
    /// Wraps a single-argument function.
    #[must_use]
    pub const fn unary(func: UnaryFn) -> Self {
        Self { arity: 1, func }
    }

    /// Number of arguments the function takes. Always `1`.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Applies the function.
    #[must_use]
    pub fn call(&self, argument: f64) -> f64 {
        (self.func)(argument)
    }
}

/// What a name in the symbol table stands for.
#[derive(Debug, Clone, Copy)]
pub enum SymbolEntry {
    /// A named number with a declared kind, such as `pi`.
    Constant(InterpretResult),
    /// A named function, such as `sin`.
    Function(Function),
}

/// Maps identifier names to constants and functions.
///
/// A table is assembled with a [`SymbolTableBuilder`] and cannot be changed
/// afterwards, so a single table can be shared by reference between any
/// number of concurrent evaluations.
///
/// [`SymbolTable::default`] holds the standard symbols `pi`, `e`, `sin`,
/// `cos` and `tan`.
///
/// # Example
/// ```
/// use plotexpr::interpreter::{symbols::SymbolTable, value::InterpretResult};
///
/// let table = SymbolTable::builder().constant("answer", InterpretResult::integer(42.0))
///                                   .function("double", |x| 2.0 * x)
///                                   .build();
///
/// assert!(table.contains("double"));
/// assert!(!table.contains("pi"));
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct SymbolTable {
    entries: HashMap<String, SymbolEntry>,
}

impl SymbolTable {
    /// Starts an empty builder.
    #[must_use]
    pub fn builder() -> SymbolTableBuilder {
        SymbolTableBuilder::default()
    }

    /// A table without any symbols.
    #[must_use]
    pub fn empty() -> Self {
        Self::builder().build()
    }

    /// The standard symbols plus `tau` and common unary functions
    /// (`ln`, `exp`, `sqrt`, hyperbolic and inverse trigonometric functions,
    /// rounding, `sign`, `radians`, `degrees`).
    #[must_use]
    pub fn extended() -> Self {
        SymbolTableBuilder::standard().constants(EXTENDED_CONSTANTS)
                                      .functions(EXTENDED_FUNCTIONS)
                                      .build()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&SymbolEntry> {
        self.entries.get(name)
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All names in the table, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.entries.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        SymbolTableBuilder::standard().build()
    }
}

/// Collects symbols for a [`SymbolTable`].
///
/// Adding a name that is already present replaces the earlier entry.
#[derive(Debug, Clone, Default)]
pub struct SymbolTableBuilder {
    entries: HashMap<String, SymbolEntry>,
}

impl SymbolTableBuilder {
    /// A builder preloaded with the standard symbols.
    #[must_use]
    pub fn standard() -> Self {
        Self::default().constants(STANDARD_CONSTANTS)
                       .functions(STANDARD_FUNCTIONS)
    }

    #[must_use]
    pub fn constant(mut self, name: impl Into<String>, value: InterpretResult) -> Self {
        self.entries.insert(name.into(), SymbolEntry::Constant(value));
        self
    }

    #[must_use]
    pub fn function(mut self, name: impl Into<String>, func: UnaryFn) -> Self {
        self.entries
            .insert(name.into(), SymbolEntry::Function(Function::unary(func)));
        self
    }

    fn constants(self, constants: &[(&str, InterpretResult)]) -> Self {
        constants.iter()
                 .fold(self, |builder, (name, value)| builder.constant(*name, *value))
    }

    fn functions(self, functions: &[(&str, UnaryFn)]) -> Self {
        functions.iter()
                 .fold(self, |builder, (name, func)| builder.function(*name, *func))
    }

    /// Freezes the collected symbols into a table.
    #[must_use]
    pub fn build(self) -> SymbolTable {
        SymbolTable { entries: self.entries }
    }
}
