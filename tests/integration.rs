use schemeling::Session;

fn run_lines(lines: &[&str]) -> String {
    let mut session = Session::new();
    let mut last = String::new();
    for line in lines {
        last = session.run(line).unwrap();
    }
    last
}

#[test]
fn arithmetic_and_comparison() {
    assert_eq!(run_lines(&["(+ 1 2 3)"]), "6");
    assert_eq!(run_lines(&["(< 1 2 3)"]), "#t");
    assert_eq!(run_lines(&["(< 1 3 2)"]), "#f");
}

#[test]
fn conditional_with_missing_alternate() {
    assert_eq!(run_lines(&["(if #t 42)"]), "42");
    assert_eq!(run_lines(&["(if #f 42)"]), "()");
}

#[test]
fn definition_and_lexical_closure_across_two_inputs() {
    assert_eq!(
        run_lines(&[
            "(define (adder n) (lambda (x) (+ x n)))",
            "((adder 10) 5)",
        ]),
        "15"
    );
}

#[test]
fn pair_mutation_and_cycle_printing() {
    assert_eq!(
        run_lines(&[
            "(define p (cons 1 2))",
            "(set-cdr! p p)",
            "p",
        ]),
        "(1 . (...))"
    );
}

#[test]
fn quote_shorthand() {
    assert_eq!(run_lines(&["'(1 2 3)"]), "(1 2 3)");
    assert_eq!(run_lines(&["'(1 . 2)"]), "(1 . 2)");
}

#[test]
fn higher_order_and_recursion() {
    assert_eq!(
        run_lines(&[
            "(define (fact n) (if (<= n 1) 1 (* n (fact (- n 1)))))",
            "(fact 5)",
        ]),
        "120"
    );
}

#[test]
fn a_form_that_fails_does_not_roll_back_the_global_environment() {
    let mut session = Session::new();
    session.run("(define x 1)").unwrap();
    assert!(session.run("(+ x undefined-thing)").is_err());
    assert_eq!(session.run("x").unwrap(), "1");
}

#[test]
fn extra_tokens_on_a_line_are_read_but_not_evaluated() {
    let mut session = Session::new();
    assert_eq!(session.run("1 2 3").unwrap(), "1");
}

#[test]
fn syntax_name_and_runtime_errors_are_distinguished() {
    use schemeling::LispError;

    let mut session = Session::new();
    assert!(matches!(session.run("("), Err(LispError::Syntax(_))));
    assert!(matches!(session.run("nonexistent"), Err(LispError::Name(_))));
    assert!(matches!(session.run("(car 5)"), Err(LispError::Runtime(_))));
}
