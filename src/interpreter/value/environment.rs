use std::{cell::RefCell, collections::HashMap, rc::Rc};

use crate::interpreter::value::core::Value;

/// A lexical scope frame: named bindings plus an optional enclosing frame.
///
/// Lookup walks outward through the enclosing frames; writes always go to
/// the frame they are issued on. Frames are only ever mutated by `let`
/// bindings and parameter binding at call time.
#[derive(Debug, Default)]
pub struct Environment {
    store: HashMap<String, Value>,
    outer: Option<Env>,
}

/// A shared handle to an [`Environment`].
///
/// Environments form a tree (child frame to parent frame) and are shared:
/// every function value closing over a frame keeps that frame alive, and
/// bindings added later through any handle are visible to all holders. This
/// is what gives closures their late-binding behavior. A function stored in
/// the frame it captures forms a reference cycle, which is accepted and
/// never collected.
///
/// # Example
/// ```
/// use minima::interpreter::value::{core::Value, environment::Env};
///
/// let global = Env::new();
/// global.set("x", Value::Integer(1));
///
/// let inner = Env::enclosed(&global);
/// inner.set("x", Value::Integer(2));
///
/// // The inner binding shadows, the outer one is untouched.
/// assert_eq!(inner.get("x"), Some(Value::Integer(2)));
/// assert_eq!(global.get("x"), Some(Value::Integer(1)));
///
/// // Lookups fall through to enclosing frames.
/// global.set("y", Value::Integer(3));
/// assert_eq!(inner.get("y"), Some(Value::Integer(3)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Env(Rc<RefCell<Environment>>);

impl Env {
    /// Creates a fresh top-level environment with no enclosing frame.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new innermost frame whose lookups fall back to `outer`.
    ///
    /// Used for function calls: the new frame holds the parameter bindings
    /// while the captured environment stays reachable underneath.
    #[must_use]
    pub fn enclosed(outer: &Self) -> Self {
        Self(Rc::new(RefCell::new(Environment { store: HashMap::new(),
                                                outer: Some(outer.clone()), })))
    }

    /// Resolves a name, searching from this frame outward.
    ///
    /// Returns a clone of the bound value, or `None` if no frame binds the
    /// name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Value> {
        let environment = self.0.borrow();
        if let Some(value) = environment.store.get(name) {
            return Some(value.clone());
        }
        environment.outer.as_ref().and_then(|outer| outer.get(name))
    }

    /// Binds a name in this frame, shadowing any equally named binding in
    /// enclosing frames.
    pub fn set(&self, name: impl Into<String>, value: Value) {
        self.0.borrow_mut().store.insert(name.into(), value);
    }
}
