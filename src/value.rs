//! The value model: the tagged union every reader, evaluator, and printer
//! operation works over.

use std::collections::HashSet;
use std::rc::Rc;

use crate::pair::PairRef;
use crate::procedure::Procedure;

#[derive(Debug, Clone)]
pub enum Value {
    Integer(i64),
    Symbol(Rc<str>),
    Pair(PairRef),
    Procedure(Procedure),
    Nil,
}

impl Value {
    pub fn symbol<S: AsRef<str>>(name: S) -> Value {
        Value::Symbol(Rc::from(name.as_ref()))
    }

    /// Exactly one value is false: the symbol `#f`. Everything else,
    /// including `Nil`, is true.
    pub fn is_truthy(&self) -> bool {
        !matches!(self, Value::Symbol(s) if &**s == "#f")
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, Value::Nil)
    }

    pub fn as_pair(&self) -> Option<&PairRef> {
        match self {
            Value::Pair(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self {
            Value::Symbol(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a == b,
            (Value::Symbol(a), Value::Symbol(b)) => a == b,
            (Value::Nil, Value::Nil) => true,
            (Value::Pair(a), Value::Pair(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::symbol(if value { "#t" } else { "#f" })
    }
}

/// Serializes a value back to surface syntax, per the printer's grammar.
/// Cyclic pair graphs are guarded by a per-call set of visited pair
/// identities: once a pair reappears, `(...)` is emitted in its place and
/// the printer does not descend into it again.
pub fn print_value(value: &Value) -> String {
    let mut out = String::new();
    let mut visited = HashSet::new();
    write_value(value, &mut visited, &mut out);
    out
}

fn write_value(value: &Value, visited: &mut HashSet<usize>, out: &mut String) {
    match value {
        Value::Nil => out.push_str("()"),
        Value::Integer(n) => out.push_str(&n.to_string()),
        Value::Symbol(s) => out.push_str(s),
        Value::Procedure(p) => out.push_str(&format!("#<procedure {}>", p.name())),
        Value::Pair(pair) => {
            let addr = pair.addr();
            if !visited.insert(addr) {
                out.push_str("(...)");
                return;
            }
            out.push('(');
            write_value(&pair.car(), visited, out);
            let mut tail = pair.cdr();
            loop {
                match tail {
                    Value::Pair(next) => {
                        let next_addr = next.addr();
                        if !visited.insert(next_addr) {
                            out.push_str(" . (...)");
                            break;
                        }
                        out.push(' ');
                        write_value(&next.car(), visited, out);
                        tail = next.cdr();
                    }
                    Value::Nil => break,
                    other => {
                        out.push_str(" . ");
                        write_value(&other, visited, out);
                        break;
                    }
                }
            }
            out.push(')');
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pair::{vec_to_dotted_list, vec_to_list};

    #[test]
    fn truthiness_excludes_only_hash_f() {
        assert!(Value::Nil.is_truthy());
        assert!(Value::Integer(0).is_truthy());
        assert!(Value::symbol("#t").is_truthy());
        assert!(!Value::symbol("#f").is_truthy());
    }

    #[test]
    fn prints_atoms() {
        assert_eq!(print_value(&Value::Nil), "()");
        assert_eq!(print_value(&Value::Integer(-5)), "-5");
        assert_eq!(print_value(&Value::symbol("foo")), "foo");
    }

    #[test]
    fn prints_proper_and_dotted_lists() {
        let list = vec_to_list(vec![Value::Integer(1), Value::Integer(2), Value::Integer(3)]);
        assert_eq!(print_value(&list), "(1 2 3)");

        let dotted = vec_to_dotted_list(vec![Value::Integer(1)], Value::Integer(2));
        assert_eq!(print_value(&dotted), "(1 . 2)");
    }

    #[test]
    fn prints_cycle_placeholder_without_looping() {
        let pair = crate::pair::Pair::new(Value::Integer(1), Value::Integer(2));
        pair.set_cdr(Value::Pair(pair.clone()));
        assert_eq!(print_value(&Value::Pair(pair)), "(1 . (...))");
    }
}
