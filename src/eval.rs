//! The evaluator: dispatches on the shape of a value against a lexical
//! environment.

use std::rc::Rc;

use crate::env::{Environment, EnvironmentRef};
use crate::error::{EvalResult, LispError};
use crate::pair::list_to_vec;
use crate::procedure::{Closure, Procedure};
use crate::value::Value;

pub fn eval(value: &Value, env: &EnvironmentRef) -> EvalResult<Value> {
    match value {
        Value::Integer(_) | Value::Procedure(_) => Ok(value.clone()),
        Value::Symbol(name) => eval_symbol(name, env),
        Value::Nil => Err(LispError::runtime("bad list")),
        Value::Pair(pair) => eval_call(&pair.car(), &pair.cdr(), env),
    }
}

fn eval_symbol(name: &str, env: &EnvironmentRef) -> EvalResult<Value> {
    if name == "#t" || name == "#f" {
        return Ok(Value::symbol(name));
    }
    if env.is_procedure_name(name) {
        Ok(Value::Procedure(resolve_procedure(name, env)?))
    } else {
        env.lookup_variable(name)
    }
}

/// Resolves an identifier to the [`Procedure`] it denotes, climbing the
/// lexical chain until a frame actually binds it.
fn resolve_procedure(name: &str, env: &EnvironmentRef) -> EvalResult<Procedure> {
    match env.lookup_procedure(name)? {
        Value::Procedure(p) => Ok(p),
        other => Err(LispError::runtime(format!(
            "expected procedure bound to '{name}', found {}",
            crate::value::print_value(&other)
        ))),
    }
}

/// A call `(operator . operands)`. The operator position is recursively
/// evaluated until a `Symbol` or `Procedure` appears, and the operand list
/// is passed unevaluated: the selected procedure decides whether and how to
/// evaluate it.
fn eval_call(operator: &Value, operands: &Value, env: &EnvironmentRef) -> EvalResult<Value> {
    // Keep reducing as long as the operator position is still a compound
    // expression; an `Integer` (or anything else) that falls out of the
    // loop without becoming a `Symbol`/`Procedure` is simply not callable.
    let mut resolved = operator.clone();
    while !matches!(
        resolved,
        Value::Integer(_) | Value::Symbol(_) | Value::Procedure(_)
    ) {
        resolved = eval(&resolved, env)?;
    }

    let procedure = match resolved {
        Value::Symbol(name) => resolve_procedure(&name, env)?,
        Value::Procedure(p) => p,
        other => {
            return Err(LispError::runtime(format!(
                "invalid operator: {}",
                crate::value::print_value(&other)
            )))
        }
    };

    apply(&procedure, operands, env)
}

pub fn apply(procedure: &Procedure, operands: &Value, env: &EnvironmentRef) -> EvalResult<Value> {
    match procedure {
        Procedure::Builtin(builtin) => (builtin.func)(operands, env),
        Procedure::Closure(closure) => apply_closure(closure, operands, env),
    }
}

/// Allocates a fresh frame whose parent is the closure's captured
/// environment, not the caller's frame — this is what makes scoping
/// lexical rather than dynamic. Each actual argument is evaluated in the
/// *caller's* frame before being bound positionally in the new one.
fn apply_closure(closure: &Rc<Closure>, operands: &Value, env: &EnvironmentRef) -> EvalResult<Value> {
    let args = eval_args(operands, env)?;
    if args.len() != closure.params.len() {
        return Err(LispError::runtime(format!(
            "wrong number of arguments: expected {}, got {}",
            closure.params.len(),
            args.len()
        )));
    }

    let call_frame = Environment::child(&closure.env);
    for (param, arg) in closure.params.iter().zip(args) {
        call_frame.define_variable(param, arg);
    }

    let mut result = Value::Nil;
    for form in &closure.body {
        result = eval(form, &call_frame)?;
    }
    Ok(result)
}

/// Evaluates each element of a proper argument list left to right.
pub fn eval_args(operands: &Value, env: &EnvironmentRef) -> EvalResult<Vec<Value>> {
    list_to_vec(operands)?
        .iter()
        .map(|arg| eval(arg, env))
        .collect()
}
