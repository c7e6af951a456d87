/// The symbol table and its entries.
///
/// Defines [`core::SymbolTable`], built once through
/// [`core::SymbolTableBuilder`] and read-only afterwards, and the
/// [`core::SymbolEntry`] variants it maps names to.
pub mod core;

/// Function and constant sets the tables are populated from.
///
/// The standard set (`pi`, `e`, `sin`, `cos`, `tan`) and the extended
/// scientific set.
pub mod builtin;

pub use self::core::{Function, SymbolEntry, SymbolTable, SymbolTableBuilder, UnaryFn};
