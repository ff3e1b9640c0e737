use std::collections::HashMap;

use crate::interpreter::value::core::Value;

/// A handle into the scope arena.
///
/// Handles are plain indices: cheap to copy, stored inside function and
/// instance values instead of owning pointers. A handle stays valid for the
/// lifetime of the [`Environment`] that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeId(usize);

/// One scope record: its bindings and an optional enclosing scope.
#[derive(Debug, Default)]
struct Scope {
    bindings: HashMap<String, Value>,
    outer:    Option<ScopeId>,
}

/// The arena every scope of a session lives in.
///
/// Scope records are appended and never removed, so closures and instances
/// can keep referring to the environments they captured long after the
/// activation that created them finished. The global scope is allocated on
/// construction.
#[derive(Debug)]
pub struct Environment {
    scopes: Vec<Scope>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an arena holding only the global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes: vec![Scope::default()] }
    }

    /// The global scope's handle.
    #[must_use]
    pub const fn global() -> ScopeId {
        ScopeId(0)
    }

    /// Allocates a fresh scope enclosed by `outer`.
    pub fn enclosed(&mut self, outer: ScopeId) -> ScopeId {
        let id = ScopeId(self.scopes.len());
        self.scopes.push(Scope { bindings: HashMap::new(),
                                 outer:    Some(outer), });
        id
    }

    /// Looks a name up, walking outward through the scope chain.
    #[must_use]
    pub fn get(&self, scope: ScopeId, name: &str) -> Option<Value> {
        let mut current = Some(scope);
        while let Some(ScopeId(index)) = current {
            let record = &self.scopes[index];
            if let Some(value) = record.bindings.get(name) {
                return Some(value.clone());
            }
            current = record.outer;
        }
        None
    }

    /// Binds a name in `scope` itself, never in an enclosing scope.
    ///
    /// Declaration and assignment share this write path, so assigning to a
    /// name bound further out shadows it locally instead of updating it.
    pub fn set(&mut self, scope: ScopeId, name: &str, value: Value) {
        self.scopes[scope.0].bindings.insert(name.to_string(), value);
    }
}
