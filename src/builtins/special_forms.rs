//! Special forms: procedures whose argument list is not evaluated
//! uniformly up front.

use std::rc::Rc;

use super::{raw_operands, register};
use crate::env::EnvironmentRef;
use crate::error::{EvalResult, LispError};
use crate::eval::eval;
use crate::procedure::{Closure, Procedure};
use crate::reader::symbol_name;
use crate::value::Value;

pub fn install(env: &EnvironmentRef) {
    register(env, "quote", quote);
    register(env, "if", if_form);
    register(env, "define", define);
    register(env, "set!", set_bang);
    register(env, "set-car!", set_car_bang);
    register(env, "set-cdr!", set_cdr_bang);
    register(env, "lambda", lambda);
}

fn quote(operands: &Value, _env: &EnvironmentRef) -> EvalResult<Value> {
    let forms = raw_operands(operands, "quote")?;
    match forms.as_slice() {
        [form] => Ok(form.clone()),
        _ => Err(LispError::syntax("quote: expected exactly one argument")),
    }
}

fn if_form(operands: &Value, env: &EnvironmentRef) -> EvalResult<Value> {
    let forms = raw_operands(operands, "if")?;
    let (test, consequent, alternate) = match forms.as_slice() {
        [test, consequent] => (test, consequent, None),
        [test, consequent, alternate] => (test, consequent, Some(alternate)),
        _ => return Err(LispError::syntax("if: expected 2 or 3 arguments")),
    };
    if eval(test, env)?.is_truthy() {
        eval(consequent, env)
    } else {
        match alternate {
            Some(alternate) => eval(alternate, env),
            None => Ok(Value::Nil),
        }
    }
}

/// Either `(define name expr)` or `(define (name . formals) body...)`. The
/// first form routes its evaluated result into the variable table unless it
/// happens to be a procedure, in which case it is registered as one; the
/// second form always builds and registers a closure.
fn define(operands: &Value, env: &EnvironmentRef) -> EvalResult<Value> {
    let forms = raw_operands(operands, "define")?;
    if forms.is_empty() {
        return Err(LispError::syntax("define: missing target"));
    }
    match &forms[0] {
        Value::Symbol(name) => {
            let [_, expr] = forms.as_slice() else {
                return Err(LispError::syntax("define: expected exactly one value"));
            };
            let value = eval(expr, env)?;
            match &value {
                Value::Procedure(_) => env.define_procedure(name, value.clone()),
                _ => env.define_variable(name, value.clone()),
            }
            Ok(Value::symbol(name.as_ref()))
        }
        Value::Pair(header) => {
            if forms.len() < 2 {
                return Err(LispError::syntax("define: missing procedure body"));
            }
            let name = symbol_name(&header.car())?;
            let params = parse_params(&header.cdr())?;
            let body = forms[1..].to_vec();
            let closure = Closure::new(params, body, Rc::clone(env));
            env.define_procedure(&name, Value::Procedure(Procedure::Closure(closure)));
            Ok(Value::symbol(name.as_ref()))
        }
        other => Err(LispError::syntax(format!(
            "define: expected a name or procedure header, got {}",
            crate::value::print_value(other)
        ))),
    }
}

fn set_bang(operands: &Value, env: &EnvironmentRef) -> EvalResult<Value> {
    let forms = raw_operands(operands, "set!")?;
    let [name, expr] = forms.as_slice() else {
        return Err(LispError::syntax("set!: expected exactly 2 arguments"));
    };
    let name = symbol_name(name)?;
    let value = eval(expr, env)?;
    env.set_variable(&name, value)?;
    Ok(Value::symbol(name.as_ref()))
}

fn set_car_bang(operands: &Value, env: &EnvironmentRef) -> EvalResult<Value> {
    let args = super::eval_exact_args(operands, env, 2, "set-car!")?;
    let pair = args[0]
        .as_pair()
        .ok_or_else(|| LispError::runtime("set-car!: expected a pair"))?;
    pair.set_car(args[1].clone());
    Ok(args[0].clone())
}

fn set_cdr_bang(operands: &Value, env: &EnvironmentRef) -> EvalResult<Value> {
    let args = super::eval_exact_args(operands, env, 2, "set-cdr!")?;
    let pair = args[0]
        .as_pair()
        .ok_or_else(|| LispError::runtime("set-cdr!: expected a pair"))?;
    pair.set_cdr(args[1].clone());
    Ok(args[0].clone())
}

fn lambda(operands: &Value, env: &EnvironmentRef) -> EvalResult<Value> {
    let forms = raw_operands(operands, "lambda")?;
    if forms.len() < 2 {
        return Err(LispError::syntax("lambda: expected a parameter list and at least one body form"));
    }
    let params = parse_params(&forms[0])?;
    let body = forms[1..].to_vec();
    let closure = Closure::new(params, body, Rc::clone(env));
    Ok(Value::Procedure(Procedure::Closure(closure)))
}

fn parse_params(value: &Value) -> EvalResult<Vec<Rc<str>>> {
    crate::pair::list_to_vec(value)
        .map_err(|_| LispError::syntax("malformed parameter list"))?
        .iter()
        .map(symbol_name)
        .collect()
}
