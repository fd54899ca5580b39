//! `+ - * / max min abs`: a left fold over evaluated integer arguments.

use super::{eval_at_least_args, expect_integer, register};
use crate::env::EnvironmentRef;
use crate::error::{EvalResult, LispError};
use crate::eval::eval_args;
use crate::value::Value;

pub fn install(env: &EnvironmentRef) {
    register(env, "+", add);
    register(env, "-", subtract);
    register(env, "*", multiply);
    register(env, "/", divide);
    register(env, "max", max);
    register(env, "min", min);
    register(env, "abs", abs);
}

fn fold_with_identity(
    operands: &Value,
    env: &EnvironmentRef,
    identity: i64,
    op: impl Fn(i64, i64) -> i64,
) -> EvalResult<Value> {
    let args = eval_args(operands, env)?;
    let mut acc = identity;
    for (i, arg) in args.iter().enumerate() {
        let n = expect_integer(arg, "arithmetic")?;
        acc = if i == 0 { n } else { op(acc, n) };
    }
    Ok(Value::Integer(acc))
}

fn fold_no_identity(
    operands: &Value,
    env: &EnvironmentRef,
    who: &'static str,
    op: impl Fn(i64, i64) -> EvalResult<i64>,
) -> EvalResult<Value> {
    let args = eval_at_least_args(operands, env, 1, who)?;
    let mut acc = expect_integer(&args[0], who)?;
    for arg in &args[1..] {
        let n = expect_integer(arg, who)?;
        acc = op(acc, n)?;
    }
    Ok(Value::Integer(acc))
}

fn add(operands: &Value, env: &EnvironmentRef) -> EvalResult<Value> {
    fold_with_identity(operands, env, 0, |a, b| a + b)
}

fn multiply(operands: &Value, env: &EnvironmentRef) -> EvalResult<Value> {
    fold_with_identity(operands, env, 1, |a, b| a * b)
}

fn subtract(operands: &Value, env: &EnvironmentRef) -> EvalResult<Value> {
    fold_no_identity(operands, env, "-", |a, b| Ok(a - b))
}

fn divide(operands: &Value, env: &EnvironmentRef) -> EvalResult<Value> {
    fold_no_identity(operands, env, "/", |a, b| {
        if b == 0 {
            Err(LispError::runtime("division by zero"))
        } else {
            // Rust's integer division already truncates toward zero.
            Ok(a / b)
        }
    })
}

fn max(operands: &Value, env: &EnvironmentRef) -> EvalResult<Value> {
    fold_no_identity(operands, env, "max", |a, b| Ok(a.max(b)))
}

fn min(operands: &Value, env: &EnvironmentRef) -> EvalResult<Value> {
    fold_no_identity(operands, env, "min", |a, b| Ok(a.min(b)))
}

fn abs(operands: &Value, env: &EnvironmentRef) -> EvalResult<Value> {
    let args = super::eval_exact_args(operands, env, 1, "abs")?;
    let n = expect_integer(&args[0], "abs")?;
    Ok(Value::Integer(n.abs()))
}
