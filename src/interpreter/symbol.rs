use std::{
    collections::HashMap,
    hash::{Hash, Hasher},
    rc::Rc,
};

use log::debug;

/// An interned identifier.
///
/// A `Symbol` is a shared handle to its name. Two symbols are equal only if
/// they were produced by the same [`SymbolTable`] for the same name, so
/// equality and hashing are a pointer comparison rather than a string
/// comparison.
#[derive(Clone)]
pub struct Symbol(Rc<str>);

impl Symbol {
    /// The identifier this symbol was interned from.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        Rc::as_ptr(&self.0).cast::<u8>().hash(state);
    }
}

impl std::fmt::Debug for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Symbol[name={}]", self.0)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Deduplicates identifier strings into canonical [`Symbol`] handles.
///
/// The table only grows: symbols live as long as the table that created them.
///
/// # Example
/// ```
/// use glyphic::interpreter::symbol::SymbolTable;
///
/// let mut table = SymbolTable::default();
/// let a = table.intern("foo");
/// let b = table.intern("foo");
/// let c = table.intern("bar");
///
/// assert_eq!(a, b);
/// assert_ne!(a, c);
/// assert_eq!(table.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: HashMap<Rc<str>, Symbol>,
}

impl SymbolTable {
    /// Returns the symbol for `name`, creating it on first use.
    pub fn intern(&mut self, name: &str) -> Symbol {
        if let Some(symbol) = self.symbols.get(name) {
            return symbol.clone();
        }

        let key: Rc<str> = Rc::from(name);
        let symbol = Symbol(Rc::clone(&key));
        self.symbols.insert(key, symbol.clone());
        debug!("interned new symbol '{name}'");
        symbol
    }

    /// Returns the symbol for `name` if it has already been interned.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.symbols.get(name)
    }

    /// Number of distinct symbols interned so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Returns `true` if nothing has been interned yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}
