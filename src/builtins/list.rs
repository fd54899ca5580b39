//! Pair and list procedures: `cons car cdr list list-ref list-tail`, plus
//! the type predicates.

use super::{eval_exact_args, register};
use crate::env::EnvironmentRef;
use crate::error::{EvalResult, LispError};
use crate::eval::eval_args;
use crate::pair::{is_proper_list, vec_to_list, Pair};
use crate::value::Value;

pub fn install(env: &EnvironmentRef) {
    register(env, "cons", cons);
    register(env, "car", car);
    register(env, "cdr", cdr);
    register(env, "list", list);
    register(env, "list-ref", list_ref);
    register(env, "list-tail", list_tail);
    register(env, "number?", number_p);
    register(env, "boolean?", boolean_p);
    register(env, "null?", null_p);
    register(env, "pair?", pair_p);
    register(env, "list?", list_p);
    register(env, "symbol?", symbol_p);
}

fn cons(operands: &Value, env: &EnvironmentRef) -> EvalResult<Value> {
    let args = eval_exact_args(operands, env, 2, "cons")?;
    let mut args = args.into_iter();
    let car = args.next().unwrap();
    let cdr = args.next().unwrap();
    Ok(Value::Pair(Pair::new(car, cdr)))
}

fn car(operands: &Value, env: &EnvironmentRef) -> EvalResult<Value> {
    let args = eval_exact_args(operands, env, 1, "car")?;
    expect_pair(&args[0], "car").map(|p| p.car())
}

fn cdr(operands: &Value, env: &EnvironmentRef) -> EvalResult<Value> {
    let args = eval_exact_args(operands, env, 1, "cdr")?;
    expect_pair(&args[0], "cdr").map(|p| p.cdr())
}

fn expect_pair<'a>(value: &'a Value, who: &str) -> EvalResult<&'a crate::pair::PairRef> {
    value
        .as_pair()
        .ok_or_else(|| LispError::runtime(format!("{who}: expected a pair, got {}", crate::value::print_value(value))))
}

/// Unlike `quote`'s argument, `list`'s elements are ordinary operands: each
/// one is evaluated before being assembled into the result.
fn list(operands: &Value, env: &EnvironmentRef) -> EvalResult<Value> {
    Ok(vec_to_list(eval_args(operands, env)?))
}

fn list_ref(operands: &Value, env: &EnvironmentRef) -> EvalResult<Value> {
    let args = eval_exact_args(operands, env, 2, "list-ref")?;
    let index = super::expect_integer(&args[1], "list-ref")?;
    if index < 0 {
        return Err(LispError::runtime("list-ref: negative index"));
    }
    let mut current = args[0].clone();
    for _ in 0..index {
        current = expect_pair(&current, "list-ref")?.cdr();
    }
    expect_pair(&current, "list-ref").map(|p| p.car())
}

fn list_tail(operands: &Value, env: &EnvironmentRef) -> EvalResult<Value> {
    let args = eval_exact_args(operands, env, 2, "list-tail")?;
    let index = super::expect_integer(&args[1], "list-tail")?;
    if index < 0 {
        return Err(LispError::runtime("list-tail: negative index"));
    }
    let mut current = args[0].clone();
    for _ in 0..index {
        current = expect_pair(&current, "list-tail")?.cdr();
    }
    Ok(current)
}

fn number_p(operands: &Value, env: &EnvironmentRef) -> EvalResult<Value> {
    let args = eval_exact_args(operands, env, 1, "number?")?;
    Ok(Value::from(matches!(args[0], Value::Integer(_))))
}

fn boolean_p(operands: &Value, env: &EnvironmentRef) -> EvalResult<Value> {
    let args = eval_exact_args(operands, env, 1, "boolean?")?;
    Ok(Value::from(is_boolean(&args[0])))
}

fn is_boolean(value: &Value) -> bool {
    matches!(value.as_symbol(), Some("#t") | Some("#f"))
}

fn null_p(operands: &Value, env: &EnvironmentRef) -> EvalResult<Value> {
    let args = eval_exact_args(operands, env, 1, "null?")?;
    Ok(Value::from(args[0].is_nil()))
}

fn pair_p(operands: &Value, env: &EnvironmentRef) -> EvalResult<Value> {
    let args = eval_exact_args(operands, env, 1, "pair?")?;
    Ok(Value::from(args[0].as_pair().is_some()))
}

fn list_p(operands: &Value, env: &EnvironmentRef) -> EvalResult<Value> {
    let args = eval_exact_args(operands, env, 1, "list?")?;
    Ok(Value::from(is_proper_list(&args[0])))
}

/// `#t` and `#f` are symbols lexically but are excluded here: they denote
/// booleans, not identifiers.
fn symbol_p(operands: &Value, env: &EnvironmentRef) -> EvalResult<Value> {
    let args = eval_exact_args(operands, env, 1, "symbol?")?;
    let is_symbol = matches!(&args[0], Value::Symbol(_)) && !is_boolean(&args[0]);
    Ok(Value::from(is_symbol))
}

#[cfg(test)]
mod tests {
    use crate::env::Environment;
    use crate::eval::eval;
    use crate::reader::read_one;
    use crate::value::print_value;

    fn run(input: &str) -> String {
        let env = Environment::global();
        print_value(&eval(&read_one(input).unwrap(), &env).unwrap())
    }

    #[test]
    fn cons_car_cdr() {
        assert_eq!(run("(cons 1 2)"), "(1 . 2)");
        assert_eq!(run("(car (cons 1 2))"), "1");
        assert_eq!(run("(cdr (cons 1 2))"), "2");
    }

    #[test]
    fn car_of_non_pair_is_a_runtime_error() {
        let env = Environment::global();
        assert!(eval(&read_one("(car 5)").unwrap(), &env).is_err());
    }

    #[test]
    fn list_evaluates_its_elements() {
        assert_eq!(run("(list (+ 1 1) (+ 2 2))"), "(2 4)");
        assert_eq!(run("(list)"), "()");
    }

    #[test]
    fn list_ref_and_list_tail() {
        assert_eq!(run("(list-ref (list 10 20 30) 1)"), "20");
        assert_eq!(run("(list-tail (list 10 20 30) 1)"), "(20 30)");
    }

    #[test]
    fn type_predicates() {
        assert_eq!(run("(number? 5)"), "#t");
        assert_eq!(run("(number? #t)"), "#f");
        assert_eq!(run("(boolean? #t)"), "#t");
        assert_eq!(run("(boolean? 5)"), "#f");
        assert_eq!(run("(null? (list))"), "#t");
        assert_eq!(run("(pair? (cons 1 2))"), "#t");
        assert_eq!(run("(pair? 5)"), "#f");
        assert_eq!(run("(list? (list 1 2))"), "#t");
        assert_eq!(run("(list? (cons 1 2))"), "#f");
        assert_eq!(run("(symbol? 'foo)"), "#t");
        assert_eq!(run("(symbol? '#t)"), "#f");
    }
}
