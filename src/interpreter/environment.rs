// File: src/interpreter/environment.rs
//
// Lexical scoping environment for variable bindings in the Monkey
// interpreter. Environments form a parent-linked chain: each function
// call gets a fresh frame whose outer link is the environment the
// function captured at its definition site.

use ahash::AHashMap;
use std::cell::RefCell;
use std::rc::Rc;

use super::value::Object;

/// One frame of variable bindings plus a link to the enclosing frame.
///
/// Lookup walks the chain outward; `set` always writes the local frame,
/// so inner scopes shadow rather than mutate outer bindings. The outer
/// link is shared, never owned: a closure and the calls made against it
/// see the same live frame.
#[derive(Debug, Default)]
pub struct Environment {
    store: AHashMap<String, Object>,
    outer: Option<Rc<RefCell<Environment>>>,
}

impl Environment {
    /// Creates an empty global environment.
    pub fn new() -> Self {
        Environment::default()
    }

    /// Creates the frame for a function call, enclosed by the
    /// function's captured environment.
    pub fn new_enclosed(outer: Rc<RefCell<Environment>>) -> Self {
        Environment { store: AHashMap::new(), outer: Some(outer) }
    }

    /// Looks a name up through the environment chain, innermost first.
    pub fn get(&self, name: &str) -> Option<Object> {
        if let Some(value) = self.store.get(name) {
            return Some(value.clone());
        }
        self.outer.as_ref().and_then(|outer| outer.borrow().get(name))
    }

    /// Binds a name in this frame, shadowing any outer binding.
    pub fn set(&mut self, name: String, value: Object) {
        self.store.insert(name, value);
    }

    /// The names bound directly in this frame, sorted. The REPL uses
    /// this for its :vars command.
    pub fn local_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.store.keys().cloned().collect();
        names.sort();
        names
    }
}
