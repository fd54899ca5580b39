//! `= < > <= >=`: pairwise chained comparison of evaluated integers.

use super::{expect_integer, register};
use crate::env::EnvironmentRef;
use crate::error::EvalResult;
use crate::eval::eval_args;
use crate::value::Value;

pub fn install(env: &EnvironmentRef) {
    register(env, "=", |o, e| compare(o, e, "=", |a, b| a == b));
    register(env, "<", |o, e| compare(o, e, "<", |a, b| a < b));
    register(env, ">", |o, e| compare(o, e, ">", |a, b| a > b));
    register(env, "<=", |o, e| compare(o, e, "<=", |a, b| a <= b));
    register(env, ">=", |o, e| compare(o, e, ">=", |a, b| a >= b));
}

fn compare(
    operands: &Value,
    env: &EnvironmentRef,
    who: &'static str,
    holds: impl Fn(i64, i64) -> bool,
) -> EvalResult<Value> {
    let args = eval_args(operands, env)?;
    let mut numbers = Vec::with_capacity(args.len());
    for arg in &args {
        numbers.push(expect_integer(arg, who)?);
    }
    let ok = numbers.windows(2).all(|pair| holds(pair[0], pair[1]));
    Ok(Value::from(ok))
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
    fn zero_or_one_argument_is_always_true() {
        assert_eq!(run("(<)"), "#t");
        assert_eq!(run("(=)"), "#t");
        assert_eq!(run("(< 1)"), "#t");
        assert_eq!(run("(= 1)"), "#t");
    }

    #[test]
    fn chained_comparison_requires_every_adjacent_pair_to_hold() {
        assert_eq!(run("(< 1 2 3)"), "#t");
        assert_eq!(run("(< 1 3 2)"), "#f");
        assert_eq!(run("(<= 1 1 2)"), "#t");
        assert_eq!(run("(>= 3 3 2)"), "#t");
        assert_eq!(run("(> 3 2 2)"), "#f");
    }

    #[test]
    fn equality_chain() {
        assert_eq!(run("(= 1 1 1)"), "#t");
        assert_eq!(run("(= 1 1 2)"), "#f");
    }
}
