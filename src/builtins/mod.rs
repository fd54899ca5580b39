//! Built-in procedures and special forms.
//!
//! Every name in this module — whether a special form like `if` or an
//! ordinary procedure like `+` — is installed into the root frame's
//! procedure table as a [`BuiltinProcedure`](crate::procedure::BuiltinProcedure)
//! behind the same `BuiltinFn` signature. A special form simply chooses not
//! to evaluate (all of) its argument list before using it; the evaluator
//! does not need to know the difference.

mod list;
mod logic;
mod math;
mod ord;
mod special_forms;

use crate::env::EnvironmentRef;
use crate::error::{EvalResult, LispError};
use crate::eval::eval_args;
use crate::pair::list_to_vec;
use crate::procedure::{BuiltinFn, BuiltinProcedure, Procedure};
use crate::value::Value;

pub fn install(env: &EnvironmentRef) {
    math::install(env);
    ord::install(env);
    logic::install(env);
    list::install(env);
    special_forms::install(env);
}

fn register(env: &EnvironmentRef, name: &'static str, func: BuiltinFn) {
    env.define_procedure(name, Value::Procedure(Procedure::Builtin(BuiltinProcedure { name, func })));
}

/// Evaluates an operand list and checks it has exactly `n` elements.
fn eval_exact_args(operands: &Value, env: &EnvironmentRef, n: usize, who: &str) -> EvalResult<Vec<Value>> {
    let args = eval_args(operands, env)?;
    if args.len() != n {
        return Err(LispError::runtime(format!(
            "{who}: expected {n} argument(s), got {}",
            args.len()
        )));
    }
    Ok(args)
}

/// Evaluates an operand list and checks it has at least `n` elements.
fn eval_at_least_args(operands: &Value, env: &EnvironmentRef, n: usize, who: &str) -> EvalResult<Vec<Value>> {
    let args = eval_args(operands, env)?;
    if args.len() < n {
        return Err(LispError::runtime(format!(
            "{who}: expected at least {n} argument(s), got {}",
            args.len()
        )));
    }
    Ok(args)
}

fn expect_integer(value: &Value, who: &str) -> EvalResult<i64> {
    value
        .as_integer()
        .ok_or_else(|| LispError::runtime(format!("{who}: expected a number, got {}", crate::value::print_value(value))))
}

/// Raw (unevaluated) operands as a proper list, for special forms that
/// inspect their own shape before deciding what to evaluate.
fn raw_operands(operands: &Value, who: &str) -> EvalResult<Vec<Value>> {
    list_to_vec(operands).map_err(|_| LispError::syntax(format!("{who}: malformed argument list")))
}
