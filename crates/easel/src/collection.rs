//! Top-level collection of symbols submitted as one structure.

use std::collections::BTreeMap;

use log::debug;
use serde_json::Value;

use easel_core::{geometry::Bounds, symbol::Symbol};

use crate::structure::{DataStructure, Representation, SubmissionToken};

/// A collection of symbols forming one visualizable structure.
///
/// Symbols are keyed by identifier with last-write-wins semantics, the
/// same discipline [`SymbolGroup`](easel_core::symbol::SymbolGroup)
/// applies to its children, and serialize in identifier order. Symbol
/// collections have node data only; their link data is always an empty
/// array.
#[derive(Debug, Default)]
pub struct SymbolCollection {
    symbols: BTreeMap<i32, Box<dyn Symbol>>,
}

impl SymbolCollection {
    /// Creates an empty collection.
    pub fn new() -> Self {
        Self {
            symbols: BTreeMap::new(),
        }
    }

    /// Adds a symbol to the collection, taking ownership of it.
    /// Re-using an identifier replaces the existing entry.
    pub fn add_symbol(&mut self, symbol: Box<dyn Symbol>) {
        debug!("adding symbol {} to collection", symbol.identifier());
        self.symbols.insert(symbol.identifier(), symbol);
    }

    /// Returns the number of top-level symbols in the collection.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns true if the collection holds no symbols.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// The union bounding extent over all symbols, or the empty
    /// sentinel for an empty collection.
    pub fn dimensions(&self) -> Bounds {
        self.symbols
            .values()
            .fold(Bounds::EMPTY, |bounds, symbol| {
                bounds.merge(&symbol.dimensions())
            })
    }
}

impl DataStructure for SymbolCollection {
    fn dtype(&self) -> &'static str {
        "symbol_collection"
    }

    fn element_count(&self) -> usize {
        self.symbols
            .values()
            .map(|symbol| symbol.element_count())
            .sum()
    }

    fn representation(&self, _token: &SubmissionToken) -> Representation {
        let nodes: Vec<Value> = self
            .symbols
            .values()
            .map(|symbol| Value::Object(symbol.representation()))
            .collect();
        Representation::new(Value::Array(nodes).to_string(), "[]")
    }
}
