//! `and` / `or` (short-circuiting special forms) and `not` (an ordinary
//! one-argument procedure).

use super::{eval_exact_args, raw_operands, register};
use crate::env::EnvironmentRef;
use crate::error::EvalResult;
use crate::eval::eval;
use crate::value::Value;

pub fn install(env: &EnvironmentRef) {
    register(env, "and", and);
    register(env, "or", or);
    register(env, "not", not);
}

/// Evaluates operands left to right, stopping and returning the first
/// falsy value; returns the last value if every one is truthy, and `#t`
/// for an empty operand list.
fn and(operands: &Value, env: &EnvironmentRef) -> EvalResult<Value> {
    let forms = raw_operands(operands, "and")?;
    let mut result = Value::from(true);
    for form in forms {
        result = eval(&form, env)?;
        if !result.is_truthy() {
            return Ok(result);
        }
    }
    Ok(result)
}

/// Evaluates operands left to right, stopping and returning the first
/// truthy value; returns `#f` if every one is falsy, including the empty
/// operand list.
fn or(operands: &Value, env: &EnvironmentRef) -> EvalResult<Value> {
    let forms = raw_operands(operands, "or")?;
    for form in forms {
        let result = eval(&form, env)?;
        if result.is_truthy() {
            return Ok(result);
        }
    }
    Ok(Value::from(false))
}

fn not(operands: &Value, env: &EnvironmentRef) -> EvalResult<Value> {
    let args = eval_exact_args(operands, env, 1, "not")?;
    Ok(Value::from(!args[0].is_truthy()))
}
