//! Import accumulator.
//!
//! Rendering registers `(module, symbol)` pairs as it goes; the registry is
//! flushed once, at module assembly, as one `from module import a, b` line
//! per module. Both modules and symbols keep their first-insertion order.

use std::fmt;

use indexmap::{IndexMap, IndexSet};
use tracing::trace;

/// One `from module import symbol` entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Import {
    pub module: &'static str,
    pub symbol: &'static str,
}

impl Import {
    pub const ANY: Self = Self::new("typing", "Any");
    pub const LIST: Self = Self::new("typing", "List");
    pub const DICT: Self = Self::new("typing", "Dict");
    pub const OPTIONAL: Self = Self::new("typing", "Optional");
    pub const UNION: Self = Self::new("typing", "Union");
    pub const CALLABLE: Self = Self::new("typing", "Callable");
    pub const TYPE_VAR: Self = Self::new("typing", "TypeVar");
    pub const TYPE: Self = Self::new("typing", "Type");
    pub const CAST: Self = Self::new("typing", "cast");
    pub const DATETIME: Self = Self::new("datetime", "datetime");
    pub const ENUM: Self = Self::new("enum", "Enum");
    pub const DATACLASS: Self = Self::new("dataclasses", "dataclass");

    pub const fn new(module: &'static str, symbol: &'static str) -> Self {
        Self { module, symbol }
    }
}

impl fmt::Display for Import {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.module, self.symbol)
    }
}

/// Append-only set of imports, grouped by module.
#[derive(Clone, Debug, Default)]
pub struct ImportRegistry {
    modules: IndexMap<&'static str, IndexSet<&'static str>>,
}

impl ImportRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an import. Returns `false` if it was already present.
    pub fn add(&mut self, import: Import) -> bool {
        let inserted = self
            .modules
            .entry(import.module)
            .or_default()
            .insert(import.symbol);
        if inserted {
            trace!(module = import.module, symbol = import.symbol, "import registered");
        }
        inserted
    }

    pub fn contains(&self, import: Import) -> bool {
        self.modules
            .get(import.module)
            .is_some_and(|symbols| symbols.contains(import.symbol))
    }

    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// Number of symbols across all modules.
    pub fn len(&self) -> usize {
        self.modules.values().map(IndexSet::len).sum()
    }

    /// All imports in registration order.
    pub fn iter(&self) -> impl Iterator<Item = Import> + '_ {
        self.modules.iter().flat_map(|(&module, symbols)| {
            symbols
                .iter()
                .map(move |&symbol| Import::new(module, symbol))
        })
    }

    /// The import statements, one line per module.
    pub fn render(&self) -> String {
        self.modules
            .iter()
            .map(|(module, symbols)| {
                let symbols: Vec<&str> = symbols.iter().copied().collect();
                format!("from {module} import {}", symbols.join(", "))
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
