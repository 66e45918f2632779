//! Environment for variable scoping in the interpreter.
//!
//! Scopes form an explicit parent chain. A new frame is created on
//! entering a function call or a scoped block and dropped when it exits —
//! unless a closure declared inside it keeps the handle alive, in which
//! case ownership of the frame is shared for as long as the closure
//! survives.

use crate::shared::Shared;
use crate::value::Value;
use rustc_hash::FxHashMap;

/// Whether a variable binding can be reassigned.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mutability {
    /// Binding can be reassigned (`let x = ...`).
    Mutable,
    /// Binding cannot be reassigned (`const x = ...`).
    Immutable,
}

impl Mutability {
    /// Returns `true` if this is `Mutable`.
    #[inline]
    pub fn is_mutable(self) -> bool {
        matches!(self, Mutability::Mutable)
    }
}

/// Error returned by `assign` when assignment fails.
///
/// Typed so callers can produce the correct diagnostic for each failure
/// mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AssignError {
    /// Variable exists but is immutable.
    Immutable,
    /// Variable not found in any scope.
    Undefined,
}

/// Error returned by `declare` when the name already exists in the
/// declaring scope. Shadowing a *parent* binding is fine and never hits
/// this.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeclareError {
    AlreadyDeclared,
}

/// Handle to a scope frame. Cheap to clone; closures hold one.
pub type ScopeRef = Shared<Scope>;

/// A single scope containing variable bindings.
#[derive(Default)]
pub struct Scope {
    /// Variable bindings in this scope (`FxHashMap` for faster hashing).
    bindings: FxHashMap<String, Binding>,
    /// Parent scope (for lexical scoping).
    parent: Option<ScopeRef>,
}

/// A variable binding.
struct Binding {
    value: Value,
    mutability: Mutability,
}

impl Scope {
    /// Create a new empty scope with no parent.
    pub fn new() -> Self {
        Scope::default()
    }

    /// Create a new scope with a parent.
    pub fn with_parent(parent: ScopeRef) -> Self {
        Scope {
            bindings: FxHashMap::default(),
            parent: Some(parent),
        }
    }

    /// Define a variable in this scope, overwriting any existing binding.
    ///
    /// Used for seeding builtins and binding call parameters; user
    /// declarations go through [`Scope::declare`].
    #[inline]
    pub fn define(&mut self, name: String, value: Value, mutability: Mutability) {
        self.bindings.insert(name, Binding { value, mutability });
    }

    /// Declare a variable in this scope.
    ///
    /// Fails if the name is already bound *in this scope*; ancestor
    /// bindings are shadowed, not conflicted with.
    pub fn declare(
        &mut self,
        name: String,
        value: Value,
        mutability: Mutability,
    ) -> Result<(), DeclareError> {
        if self.bindings.contains_key(&name) {
            return Err(DeclareError::AlreadyDeclared);
        }
        self.bindings.insert(name, Binding { value, mutability });
        Ok(())
    }

    /// Look up a variable, walking from this scope up the parent chain.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        if let Some(binding) = self.bindings.get(name) {
            return Some(binding.value.clone());
        }
        if let Some(parent) = &self.parent {
            return parent.borrow().lookup(name);
        }
        None
    }

    /// Assign to a variable, resolving it the same way lookup does.
    #[inline]
    pub fn assign(&mut self, name: &str, value: Value) -> Result<(), AssignError> {
        if let Some(binding) = self.bindings.get_mut(name) {
            if !binding.mutability.is_mutable() {
                return Err(AssignError::Immutable);
            }
            binding.value = value;
            return Ok(());
        }
        if let Some(parent) = &self.parent {
            return parent.borrow_mut().assign(name, value);
        }
        Err(AssignError::Undefined)
    }
}

impl Shared<Scope> {
    /// Create a root scope with no parent.
    pub fn root() -> ScopeRef {
        Shared::new(Scope::new())
    }

    /// Create a child scope whose parent is this one. Used for function
    /// call frames and scoped blocks.
    #[must_use]
    pub fn child(&self) -> ScopeRef {
        Shared::new(Scope::with_parent(self.clone()))
    }

    /// See [`Scope::define`].
    #[inline]
    pub fn define(&self, name: impl Into<String>, value: Value, mutability: Mutability) {
        self.borrow_mut().define(name.into(), value, mutability);
    }

    /// See [`Scope::declare`].
    #[inline]
    pub fn declare(
        &self,
        name: impl Into<String>,
        value: Value,
        mutability: Mutability,
    ) -> Result<(), DeclareError> {
        self.borrow_mut().declare(name.into(), value, mutability)
    }

    /// See [`Scope::lookup`].
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        self.borrow().lookup(name)
    }

    /// See [`Scope::assign`].
    #[inline]
    pub fn assign(&self, name: &str, value: Value) -> Result<(), AssignError> {
        self.borrow_mut().assign(name, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn define_then_lookup() {
        let scope = ScopeRef::root();
        scope.define("x", Value::int(42), Mutability::Immutable);
        assert_eq!(scope.lookup("x"), Some(Value::int(42)));
        assert_eq!(scope.lookup("y"), None);
    }

    #[test]
    fn child_shadowing() {
        let parent = ScopeRef::root();
        parent.define("x", Value::int(1), Mutability::Immutable);

        let child = parent.child();
        child
            .declare("x", Value::int(2), Mutability::Immutable)
            .unwrap();

        assert_eq!(child.lookup("x"), Some(Value::int(2)));
        assert_eq!(parent.lookup("x"), Some(Value::int(1)));
    }

    #[test]
    fn redeclaration_in_same_scope_fails() {
        let scope = ScopeRef::root();
        scope
            .declare("x", Value::int(1), Mutability::Mutable)
            .unwrap();
        assert_eq!(
            scope.declare("x", Value::int(2), Mutability::Mutable),
            Err(DeclareError::AlreadyDeclared)
        );
    }

    #[test]
    fn assign_walks_the_parent_chain() {
        let root = ScopeRef::root();
        root.define("x", Value::int(1), Mutability::Mutable);

        let inner = root.child().child();
        inner.assign("x", Value::int(2)).unwrap();
        assert_eq!(root.lookup("x"), Some(Value::int(2)));
    }

    #[test]
    fn assign_to_immutable_fails() {
        let scope = ScopeRef::root();
        scope.define("x", Value::int(1), Mutability::Immutable);
        assert_eq!(
            scope.assign("x", Value::int(2)),
            Err(AssignError::Immutable)
        );
    }

    #[test]
    fn assign_to_missing_fails_everywhere() {
        let scope = ScopeRef::root().child();
        assert_eq!(
            scope.assign("ghost", Value::Null),
            Err(AssignError::Undefined)
        );
    }

    #[test]
    fn assignment_resolves_to_the_nearest_binding() {
        let root = ScopeRef::root();
        root.define("x", Value::int(1), Mutability::Mutable);

        let child = root.child();
        child
            .declare("x", Value::int(10), Mutability::Immutable)
            .unwrap();
        // The shadow is found first, so assignment hits the immutable one.
        assert_eq!(child.assign("x", Value::int(2)), Err(AssignError::Immutable));
    }
}
