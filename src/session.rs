//! A session wraps one root environment and evaluates one top-level form
//! per [`run`](Session::run) call, matching the REPL's line-at-a-time
//! contract: a form that fails to read or evaluate leaves all prior
//! definitions in the environment untouched.

use log::debug;

use crate::env::{Environment, EnvironmentRef};
use crate::error::EvalResult;
use crate::{eval, reader, value};

pub struct Session {
    env: EnvironmentRef,
}

impl Session {
    pub fn new() -> Session {
        Session {
            env: Environment::global(),
        }
    }

    /// Reads one form from `input`, evaluates it against this session's
    /// environment, and returns its printed representation.
    pub fn run(&mut self, input: &str) -> EvalResult<String> {
        debug!("evaluating: {input}");
        let form = reader::read_one(input)?;
        let result = eval::eval(&form, &self.env)?;
        Ok(value::print_value(&result))
    }
}

impl Default for Session {
    fn default() -> Self {
        Session::new()
    }
}
