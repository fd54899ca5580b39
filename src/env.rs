//! Lexical environments (`Scope` in the original C++ runtime).
//!
//! A frame holds a variable table and a procedure table keyed by the same
//! names but looked up by context, plus a reference to an optional parent.
//! Closures retain a strong reference to the frame in effect at their
//! creation; frames retain strong references to their parents. No cycle
//! collection is performed, and none is needed: frames never point at their
//! own descendants.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
use std::rc::Rc;

use crate::builtins;
use crate::error::{EvalResult, LispError};
use crate::value::Value;

pub type EnvironmentRef = Rc<Environment>;

pub struct Environment {
    variables: RefCell<HashMap<String, Value>>,
    procedures: RefCell<HashMap<String, Value>>,
    parent: Option<EnvironmentRef>,
    /// Every frame in a session shares the root's registry of names that
    /// have ever been bound as a procedure. This is how "is `name` a
    /// procedure?" can be answered without walking the whole parent chain
    /// just to classify an identifier — the same role `Scope::all_functions_`
    /// plays in the original C++ runtime, consulted straight off the global
    /// scope rather than by climbing parents.
    procedure_names: Rc<RefCell<HashSet<String>>>,
}

impl Environment {
    /// Creates the root frame, pre-populated with every built-in binding.
    pub fn global() -> EnvironmentRef {
        let env = Rc::new(Environment {
            variables: RefCell::new(HashMap::new()),
            procedures: RefCell::new(HashMap::new()),
            parent: None,
            procedure_names: Rc::new(RefCell::new(HashSet::new())),
        });
        builtins::install(&env);
        env
    }

    /// Creates a fresh frame whose parent is `parent`. Used both for `let`-like
    /// call frames and, implicitly, nowhere else: every non-global frame in
    /// this language is a procedure call frame.
    pub fn child(parent: &EnvironmentRef) -> EnvironmentRef {
        Rc::new(Environment {
            variables: RefCell::new(HashMap::new()),
            procedures: RefCell::new(HashMap::new()),
            parent: Some(Rc::clone(parent)),
            procedure_names: Rc::clone(&parent.procedure_names),
        })
    }

    pub fn define_variable(&self, name: &str, value: Value) {
        self.variables.borrow_mut().insert(name.to_string(), value);
    }

    pub fn define_procedure(&self, name: &str, value: Value) {
        self.procedures.borrow_mut().insert(name.to_string(), value);
        self.procedure_names.borrow_mut().insert(name.to_string());
    }

    /// Whether `name` denotes a procedure anywhere reachable in this session,
    /// used by the evaluator to decide how to resolve a bare symbol.
    pub fn is_procedure_name(&self, name: &str) -> bool {
        self.procedure_names.borrow().contains(name)
    }

    pub fn lookup_variable(&self, name: &str) -> EvalResult<Value> {
        if let Some(value) = self.variables.borrow().get(name) {
            return Ok(value.clone());
        }
        match &self.parent {
            Some(parent) => parent.lookup_variable(name),
            None => Err(LispError::name(format!("unbound variable: {name}"))),
        }
    }

    pub fn lookup_procedure(&self, name: &str) -> EvalResult<Value> {
        if let Some(value) = self.procedures.borrow().get(name) {
            return Ok(value.clone());
        }
        match &self.parent {
            Some(parent) => parent.lookup_procedure(name),
            None => Err(LispError::name(format!("unbound procedure: {name}"))),
        }
    }

    /// Rewrites the nearest frame (starting here) that already binds `name`
    /// as a variable. Fails with a name error if no frame in the chain has it.
    pub fn set_variable(&self, name: &str, value: Value) -> EvalResult<()> {
        if self.variables.borrow().contains_key(name) {
            self.variables.borrow_mut().insert(name.to_string(), value);
            return Ok(());
        }
        match &self.parent {
            Some(parent) => parent.set_variable(name, value),
            None => Err(LispError::name(format!("unbound variable: {name}"))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_frame_has_builtins_preregistered() {
        let global = Environment::global();
        assert!(global.is_procedure_name("+"));
        assert!(global.is_procedure_name("lambda"));
        assert!(!global.is_procedure_name("not-a-thing"));
    }

    #[test]
    fn child_frame_sees_parent_bindings() {
        let global = Environment::global();
        global.define_variable("x", Value::Integer(42));
        let child = Environment::child(&global);
        assert_eq!(child.lookup_variable("x").unwrap(), Value::Integer(42));
    }

    #[test]
    fn define_in_child_does_not_leak_to_parent() {
        let global = Environment::global();
        let child = Environment::child(&global);
        child.define_variable("y", Value::Integer(1));
        assert!(global.lookup_variable("y").is_err());
    }

    #[test]
    fn set_rewrites_nearest_binding_frame() {
        let global = Environment::global();
        global.define_variable("x", Value::Integer(1));
        let child = Environment::child(&global);
        child.set_variable("x", Value::Integer(2)).unwrap();
        assert_eq!(global.lookup_variable("x").unwrap(), Value::Integer(2));
    }

    #[test]
    fn set_on_unbound_name_is_a_name_error() {
        let global = Environment::global();
        assert!(global.set_variable("nope", Value::Integer(1)).is_err());
    }

    #[test]
    fn procedure_defined_in_child_is_visible_as_procedure_name_globally() {
        let global = Environment::global();
        let child = Environment::child(&global);
        child.define_procedure("helper", Value::Integer(0));
        assert!(global.is_procedure_name("helper"));
    }
}
