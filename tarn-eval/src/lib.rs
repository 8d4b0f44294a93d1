//! The tree-walking evaluator for Tarn.
//!
//! The parser's syntax tree is evaluated directly by [`Eval`](eval::Eval) implementations on
//! each node, threading a [`Ctxt`](ctxt::Ctxt) through every recursive call. The context carries
//! the variable and function bindings, the destination for `show` output, and the control-flow
//! flags used by `break` and `return`.

pub mod builtins;
pub mod ctxt;
pub mod error;
pub mod eval;
pub mod value;

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tarn_parser::parser::{ast::stmt::Stmt, Parser};
    use super::{
        ctxt::{Ctxt, OutputMode},
        error::Error,
        eval::eval_stmts,
        value::Value,
    };

    /// Parses and evaluates a program in the given context.
    fn eval_program(source: &str, ctxt: &mut Ctxt) -> Result<Value, Error> {
        let ast = Parser::new(source).try_parse_full_many::<Stmt>().unwrap();
        eval_stmts(&ast, ctxt)
    }

    /// Creates a context that captures `show` output instead of printing it.
    fn captured_ctxt() -> Ctxt {
        let mut ctxt = Ctxt::default();
        ctxt.output_mode = OutputMode::Captured;
        ctxt
    }

    #[test]
    fn countdown() {
        let mut ctxt = captured_ctxt();
        let source = include_str!("../../demos/countdown.tarn");
        assert_eq!(eval_program(source, &mut ctxt).unwrap(), 0.0.into());
        assert_eq!(ctxt.take_output(), "3\n2\n1\n");
    }

    #[test]
    fn fizzbuzz() {
        let mut ctxt = captured_ctxt();
        let source = include_str!("../../demos/fizzbuzz.tarn");
        assert_eq!(eval_program(source, &mut ctxt).unwrap(), 16.0.into());
        assert_eq!(
            ctxt.take_output(),
            "1\n2\nFizz\n4\nBuzz\nFizz\n7\n8\nFizz\nBuzz\n11\nFizz\n13\n14\nFizzBuzz\n",
        );
    }

    #[test]
    fn gcd() {
        let source = include_str!("../../demos/gcd.tarn");
        assert_eq!(eval_program(source, &mut Ctxt::default()).unwrap(), 21.0.into());
    }

    #[test]
    fn collatz() {
        let source = include_str!("../../demos/collatz.tarn");
        assert_eq!(eval_program(source, &mut Ctxt::default()).unwrap(), 111.0.into());
    }

    #[test]
    fn shout() {
        let mut ctxt = captured_ctxt();
        let source = include_str!("../../demos/shout.tarn");
        assert_eq!(eval_program(source, &mut ctxt).unwrap(), 33.0.into());
        assert_eq!(ctxt.take_output(), "hello, ferris! (what a long name)\n");
    }

    #[test]
    fn while_loop_runs_to_completion() {
        let mut ctxt = Ctxt::default();
        let result = eval_program("i = 0; while i < 3 { i = i + 1 }", &mut ctxt);

        // the loop's value is the last body evaluation, and the environment keeps the mutations
        assert_eq!(result.unwrap(), 3.0.into());
        assert_eq!(ctxt.get_var("i"), Some(3.0.into()));
    }

    #[test]
    fn while_with_initially_false_condition_returns_unit() {
        let mut ctxt = Ctxt::default();
        let result = eval_program("i = 10; while i < 3 { i = i + 1 }", &mut ctxt);

        assert_eq!(result.unwrap(), Value::Unit);
        assert_eq!(ctxt.get_var("i"), Some(10.0.into()));
    }

    #[test]
    fn unit_sentinel_is_not_null() {
        let result = eval_program("(while false { 1 }) == null", &mut Ctxt::default());
        assert_eq!(result.unwrap(), false.into());
    }

    #[test]
    fn if_else_takes_exactly_one_branch() {
        let mut ctxt = captured_ctxt();
        let result = eval_program(
            r#"if false { show("then") } else { show("else") }"#,
            &mut ctxt,
        );

        assert_eq!(result.unwrap(), Value::Null);
        assert_eq!(ctxt.take_output(), "else\n");
    }

    #[test]
    fn if_without_else_yields_null() {
        assert_eq!(
            eval_program("if false { 1 }", &mut Ctxt::default()).unwrap(),
            Value::Null,
        );
        assert_eq!(
            eval_program("if true { 1 }", &mut Ctxt::default()).unwrap(),
            1.0.into(),
        );
    }

    #[test]
    fn condition_error_evaluates_no_branch() {
        let mut ctxt = captured_ctxt();
        assert!(eval_program(r#"if oops { show("then") } else { show("else") }"#, &mut ctxt).is_err());
        assert_eq!(ctxt.take_output(), "");

        let mut ctxt = captured_ctxt();
        assert!(eval_program(r#"while oops { show("body") }"#, &mut ctxt).is_err());
        assert_eq!(ctxt.take_output(), "");
    }

    #[test]
    fn body_error_aborts_loop() {
        let mut ctxt = Ctxt::default();
        let result = eval_program("i = 0; while true { i = i + 1; oops }", &mut ctxt);

        // the first iteration's error ends the loop; without the abort this would never return
        assert!(result.is_err());
        assert_eq!(ctxt.get_var("i"), Some(1.0.into()));
    }

    #[test]
    fn side_output_follows_evaluation_order() {
        let mut ctxt = captured_ctxt();
        eval_program("i = 0; while i < 2 { show(i); i = i + 1 }", &mut ctxt).unwrap();
        assert_eq!(ctxt.take_output(), "0\n1\n");

        // `show` returns `null`, so the condition's own output is followed by the else branch
        let mut ctxt = captured_ctxt();
        eval_program(
            r#"if show("cond") { show("then") } else { show("else") }"#,
            &mut ctxt,
        )
        .unwrap();
        assert_eq!(ctxt.take_output(), "cond\nelse\n");
    }

    #[test]
    fn only_null_and_false_are_falsy_in_branches() {
        for (source, expected) in [
            (r#"if 0 { "t" } else { "f" }"#, "t"),
            (r#"if "" { "t" } else { "f" }"#, "t"),
            (r#"if true { "t" } else { "f" }"#, "t"),
            (r#"if null { "t" } else { "f" }"#, "f"),
            (r#"if false { "t" } else { "f" }"#, "f"),
        ] {
            assert_eq!(eval_program(source, &mut Ctxt::default()).unwrap(), expected.into());
        }
    }

    #[test]
    fn assignment_is_an_expression() {
        assert_eq!(
            eval_program("x = y = 2; x + y", &mut Ctxt::default()).unwrap(),
            4.0.into(),
        );
    }

    #[test]
    fn logical_operators_short_circuit() {
        let mut ctxt = Ctxt::default();
        eval_program("x = 0; false and (x = 1); true or (x = 2)", &mut ctxt).unwrap();
        assert_eq!(ctxt.get_var("x"), Some(0.0.into()));
    }

    #[test]
    fn logical_operators_yield_booleans() {
        assert_eq!(eval_program("1 and 2", &mut Ctxt::default()).unwrap(), true.into());
        assert_eq!(eval_program("null or false", &mut Ctxt::default()).unwrap(), false.into());
        assert_eq!(eval_program(r#""" or null"#, &mut Ctxt::default()).unwrap(), true.into());
    }

    #[test]
    fn string_operations() {
        assert_eq!(
            eval_program(r#""foo" + "bar""#, &mut Ctxt::default()).unwrap(),
            "foobar".into(),
        );
        assert_eq!(
            eval_program(r#""a" == "a""#, &mut Ctxt::default()).unwrap(),
            true.into(),
        );

        // values of different types are never equal
        assert_eq!(
            eval_program(r#""1" == 1"#, &mut Ctxt::default()).unwrap(),
            false.into(),
        );

        assert!(eval_program(r#""a" + 1"#, &mut Ctxt::default()).is_err());
    }

    #[test]
    fn function_scope_is_isolated() {
        let mut ctxt = Ctxt::default();
        let result = eval_program("x = 1; fn f() { x = 99; x } f(); x", &mut ctxt);

        assert_eq!(result.unwrap(), 1.0.into());
        assert_eq!(ctxt.get_var("x"), Some(1.0.into()));
    }

    #[test]
    fn argument_effects_happen_in_the_callers_scope() {
        let mut ctxt = Ctxt::default();
        let result = eval_program("x = 1; fn f(a) { a + x } f(x = 5)", &mut ctxt);

        // `x = 5` runs at the call site, and the body's context is cloned afterwards
        assert_eq!(result.unwrap(), 10.0.into());
        assert_eq!(ctxt.get_var("x"), Some(5.0.into()));
    }

    #[test]
    fn unwinding_in_an_argument_abandons_the_call() {
        let mut ctxt = captured_ctxt();
        let result = eval_program("fn f(a) { show(a) } while true { f(break 9) }", &mut ctxt);

        assert_eq!(result.unwrap(), 9.0.into());
        assert_eq!(ctxt.take_output(), "");
    }

    #[test]
    fn return_unwinds_to_the_call_site() {
        let source = r#"
            fn pick(n) {
                if n {
                    return "early"
                };
                "late"
            }
            pick(true)
        "#;
        assert_eq!(eval_program(source, &mut Ctxt::default()).unwrap(), "early".into());

        let source = r#"
            fn pick(n) {
                if n {
                    return "early"
                };
                "late"
            }
            pick(false)
        "#;
        assert_eq!(eval_program(source, &mut Ctxt::default()).unwrap(), "late".into());
    }

    #[test]
    fn bare_return_yields_null() {
        assert_eq!(
            eval_program("fn f() { return } f()", &mut Ctxt::default()).unwrap(),
            Value::Null,
        );
    }

    #[test]
    fn break_with_value() {
        assert_eq!(
            eval_program("while true { break 7 }", &mut Ctxt::default()).unwrap(),
            7.0.into(),
        );
        assert_eq!(
            eval_program("i = 0; while true { if i > 0 { break }; i = i + 1 }", &mut Ctxt::default()).unwrap(),
            Value::Unit,
        );
    }

    #[test]
    fn break_exits_the_innermost_loop() {
        let source = "
            total = 0;
            i = 0;
            while i < 3 {
                j = 0;
                while true {
                    if j == 2 { break };
                    total = total + 1;
                    j = j + 1
                };
                i = i + 1
            };
            total
        ";
        assert_eq!(eval_program(source, &mut Ctxt::default()).unwrap(), 6.0.into());
    }

    #[test]
    fn loop_control_outside_its_construct_is_an_error() {
        assert!(eval_program("break", &mut Ctxt::default()).is_err());
        assert!(eval_program("return 1", &mut Ctxt::default()).is_err());

        // a loop around the call site does not license a `break` inside the function
        assert!(
            eval_program("fn f() { break } while true { f() }", &mut Ctxt::default()).is_err()
        );
    }

    #[test]
    fn call_arity_is_checked() {
        let mut ctxt = Ctxt::default();
        eval_program("fn add(a, b) { a + b }", &mut ctxt).unwrap();

        assert!(eval_program("add(1)", &mut ctxt).is_err());
        assert!(eval_program("add(1, 2, 3)", &mut ctxt).is_err());
        assert_eq!(eval_program("add(1, 2)", &mut ctxt).unwrap(), 3.0.into());
    }

    #[test]
    fn undefined_names_are_errors() {
        assert!(eval_program("missing_var + 1", &mut Ctxt::default()).is_err());
        assert!(eval_program("missing_fn(1)", &mut Ctxt::default()).is_err());
    }

    #[test]
    fn recursion() {
        let source = "
            fn fact(n) {
                if n <= 1 {
                    1
                } else {
                    n * fact(n - 1)
                }
            }
            fact(10)
        ";
        assert_eq!(eval_program(source, &mut Ctxt::default()).unwrap(), 3628800.0.into());
    }

    #[test]
    fn show_accepts_any_number_of_arguments() {
        let mut ctxt = captured_ctxt();
        let result = eval_program(r#"show(1, "a", true)"#, &mut ctxt);

        assert_eq!(result.unwrap(), Value::Null);
        assert_eq!(ctxt.take_output(), "1 a true\n");
    }
}
