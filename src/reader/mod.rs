//! Lexing and reading: turning a line of source text into one s-expression.

mod scanner;

pub use scanner::{Scanner, Token};

use std::rc::Rc;

use crate::error::{EvalResult, LispError};
use crate::pair::{vec_to_dotted_list, vec_to_list};
use crate::value::Value;

/// Builds one s-expression from `input`, per the grammar:
///
/// ```text
/// form  := atom | list | "'" form
/// list  := "(" form* [ "." form ] ")"
/// atom  := Constant | Symbol
/// ```
///
/// Any tokens left over after the first complete form are ignored: the
/// session only evaluates one top-level form per line.
pub fn read_one(input: &str) -> EvalResult<Value> {
    let mut scanner = Scanner::new(input)?;
    read_form(&mut scanner)
}

fn read_form(scanner: &mut Scanner) -> EvalResult<Value> {
    let token = scanner
        .current()
        .cloned()
        .ok_or_else(|| LispError::syntax("unexpected end of input"))?;
    match token {
        Token::Open => {
            scanner.advance()?;
            read_list(scanner)
        }
        Token::Close => Err(LispError::syntax("unexpected ')'")),
        Token::Dot => Err(LispError::syntax("unexpected '.'")),
        Token::Quote => {
            scanner.advance()?;
            let quoted = read_form(scanner)?;
            Ok(vec_to_list(vec![Value::symbol("quote"), quoted]))
        }
        Token::Constant(n) => {
            scanner.advance()?;
            Ok(Value::Integer(n))
        }
        Token::Symbol(name) => {
            scanner.advance()?;
            Ok(Value::Symbol(name))
        }
    }
}

fn read_list(scanner: &mut Scanner) -> EvalResult<Value> {
    let mut items = Vec::new();
    loop {
        match scanner.current() {
            None => return Err(LispError::syntax("unterminated list")),
            Some(Token::Close) => {
                scanner.advance()?;
                return Ok(vec_to_list(items));
            }
            Some(Token::Dot) => {
                if items.is_empty() {
                    return Err(LispError::syntax("'.' must follow at least one element"));
                }
                scanner.advance()?;
                let tail = read_form(scanner)?;
                match scanner.current() {
                    Some(Token::Close) => {
                        scanner.advance()?;
                        return Ok(vec_to_dotted_list(items, tail));
                    }
                    _ => return Err(LispError::syntax("expected ')' after dotted tail")),
                }
            }
            Some(_) => {
                items.push(read_form(scanner)?);
            }
        }
    }
}

/// Used by `lambda`/`define` to parse a parameter list of bare symbols.
pub fn symbol_name(value: &Value) -> EvalResult<Rc<str>> {
    match value {
        Value::Symbol(name) => Ok(Rc::clone(name)),
        other => Err(LispError::syntax(format!(
            "expected identifier, got {}",
            crate::value::print_value(other)
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::print_value;

    fn roundtrip(input: &str) -> String {
        print_value(&read_one(input).unwrap())
    }

    #[test]
    fn reads_integers_and_symbols() {
        assert_eq!(roundtrip("42"), "42");
        assert_eq!(roundtrip("-7"), "-7");
        assert_eq!(roundtrip("foo?"), "foo?");
    }

    #[test]
    fn reads_proper_lists() {
        assert_eq!(roundtrip("(+ 1 2 3)"), "(+ 1 2 3)");
        assert_eq!(roundtrip("()"), "()");
    }

    #[test]
    fn reads_dotted_lists() {
        assert_eq!(roundtrip("(1 . 2)"), "(1 . 2)");
        assert_eq!(roundtrip("(1 2 . 3)"), "(1 2 . 3)");
    }

    #[test]
    fn reads_quote_shorthand() {
        assert_eq!(roundtrip("'(1 2 3)"), "(quote (1 2 3))");
        assert_eq!(roundtrip("'x"), "(quote x)");
    }

    #[test]
    fn extra_trailing_tokens_are_ignored() {
        assert_eq!(roundtrip("1 2 3"), "1");
    }

    #[test]
    fn rejects_unterminated_list() {
        assert!(read_one("(+ 1 2").is_err());
    }

    #[test]
    fn rejects_stray_dot() {
        assert!(read_one(".").is_err());
        assert!(read_one("(. 1)").is_err());
    }

    #[test]
    fn rejects_multiple_dotted_tails() {
        assert!(read_one("(1 . 2 . 3)").is_err());
    }

    #[test]
    fn rejects_unexpected_close_paren() {
        assert!(read_one(")").is_err());
    }
}
