//! Import collection utilities.

use indexmap::{IndexMap, IndexSet};

/// Tracks imports and deduplicates them.
///
/// Modules and the symbols within each module keep insertion order, so the
/// rendered import block follows first-occurrence order.
///
/// # Example
///
/// ```
/// use stencil_codegen::generation::ImportCollector;
///
/// let mut imports = ImportCollector::new();
/// assert!(imports.add("./Header", "Header"));
/// assert!(imports.add("./Footer", "Footer"));
/// assert!(!imports.add("./Header", "Header"));
///
/// let modules: Vec<&str> = imports.iter().map(|(module, _)| module).collect();
/// assert_eq!(modules, vec!["./Header", "./Footer"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ImportCollector {
    /// Module path -> symbols in insertion order
    imports: IndexMap<String, IndexSet<String>>,
}

impl ImportCollector {
    /// Create a new empty import collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a symbol import from a module.
    ///
    /// Returns false if the symbol was already imported from that module.
    pub fn add(&mut self, module: &str, symbol: &str) -> bool {
        self.imports
            .entry(module.to_string())
            .or_default()
            .insert(symbol.to_string())
    }

    /// Iterate over all imports in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &IndexSet<String>)> {
        self.imports.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// All imported symbols in insertion order.
    pub fn symbols(&self) -> Vec<String> {
        self.imports.values().flatten().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_import_collector_basic() {
        let mut imports = ImportCollector::new();
        imports.add("react", "useState");
        imports.add("react", "useEffect");
        imports.add("./Card", "Card");

        let modules: Vec<(&str, usize)> = imports
            .iter()
            .map(|(module, symbols)| (module, symbols.len()))
            .collect();
        assert_eq!(modules, vec![("react", 2), ("./Card", 1)]);
    }

    #[test]
    fn test_symbols_keep_first_occurrence_order() {
        let mut imports = ImportCollector::new();
        imports.add("./B", "B");
        imports.add("./A", "A");
        imports.add("./B", "B");

        assert_eq!(imports.symbols(), vec!["B", "A"]);
    }

    #[test]
    fn test_empty() {
        let imports = ImportCollector::new();
        assert_eq!(imports.iter().count(), 0);
        assert!(imports.symbols().is_empty());
    }
}
