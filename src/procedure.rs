//! Procedure values: built-ins and user-defined closures.
//!
//! Rather than a source-level inheritance tree of callable classes, a
//! procedure is a tagged variant. Built-ins carry a `'static` name (used only
//! for printing) and a handler keyed by that name at registration time;
//! closures carry the parameter list, body, and the lexical environment
//! captured when `lambda` was evaluated.

use std::rc::Rc;

use crate::env::EnvironmentRef;
use crate::error::EvalResult;
use crate::value::Value;

/// A built-in's argument list arrives unevaluated; the handler decides
/// whether and how to evaluate it. This is what lets `quote` and `if` share
/// the same call path as `+` and `cons`.
pub type BuiltinFn = fn(args: &Value, env: &EnvironmentRef) -> EvalResult<Value>;

#[derive(Clone, Copy)]
pub struct BuiltinProcedure {
    pub name: &'static str,
    pub func: BuiltinFn,
}

impl std::fmt::Debug for BuiltinProcedure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#<builtin procedure {}>", self.name)
    }
}

pub struct Closure {
    pub params: Vec<Rc<str>>,
    pub body: Vec<Value>,
    pub env: EnvironmentRef,
    id: u64,
}

impl std::fmt::Debug for Closure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#<procedure #{}>", self.id)
    }
}

impl Closure {
    pub fn new(params: Vec<Rc<str>>, body: Vec<Value>, env: EnvironmentRef) -> Rc<Closure> {
        debug_assert!(!body.is_empty(), "lambda body must be non-empty");
        Rc::new(Closure {
            params,
            body,
            env,
            id: next_closure_id(),
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }
}

fn next_closure_id() -> u64 {
    use std::cell::Cell;
    thread_local! {
        static NEXT: Cell<u64> = Cell::new(0);
    }
    NEXT.with(|next| {
        let id = next.get();
        next.set(id + 1);
        id
    })
}

#[derive(Debug, Clone)]
pub enum Procedure {
    Builtin(BuiltinProcedure),
    Closure(Rc<Closure>),
}

impl Procedure {
    pub fn name(&self) -> String {
        match self {
            Procedure::Builtin(b) => b.name.to_string(),
            Procedure::Closure(c) => format!("lambda-{}", c.id()),
        }
    }
}
