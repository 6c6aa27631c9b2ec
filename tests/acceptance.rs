//! End-to-end tests for the AMPL-2023 front-end.
//!
//! Whole programs go through `check`; rejections are asserted against
//! the exact rendered diagnostic line, since downstream tooling matches
//! on those bytes.

use amplc::prelude::*;

/// Run the front-end and return the accepted program summary.
fn accept(source: &str) -> ProgramInfo {
    check(source).expect("program should be accepted")
}

/// Run the front-end and render the diagnostic as the CLI would.
fn diagnostic(source: &str) -> String {
    check(source)
        .expect_err("program should be rejected")
        .render("test.ampl")
}

#[test]
fn accepts_minimal_program() {
    let info = accept("program p: main: chillax");
    assert_eq!(info.name, "p");
    assert!(info.subroutines.is_empty());
    assert_eq!(info.main_frame_width, 1);
}

#[test]
fn accepts_single_statement_body_without_semicolon() {
    accept("program p: main: int a; let a = 2");
}

#[test]
fn accepts_array_allocation() {
    let info = accept("program p: main: int array a; let a = array 5");
    assert_eq!(info.main_frame_width, 2);
}

#[test]
fn accepts_indexed_and_whole_array_assignment() {
    accept(
        "program p: main: int array a, b; \
         let a = array 8; let a[0] = 1; let b = a",
    );
}

#[test]
fn accepts_zero_parameter_function() {
    let info = accept("program p: f() -> int: return 1 main: int a; let a = f()");
    assert_eq!(info.subroutines.len(), 1);
    assert_eq!(info.subroutines[0].name, "f");
    assert_eq!(info.subroutines[0].frame_width, 1);
}

#[test]
fn accepts_call_with_empty_argument_list() {
    // The arity checks are tied to parsed arguments; an empty list
    // performs none.
    accept("program p: g(int x): chillax main: g()");
}

#[test]
fn accepts_nested_control_flow() {
    let source = r#"
        program control:

        classify(int n) -> int:
            if n > 0:
                if n rem 2 = 0:
                    return 2
                else:
                    return 1
                end
            elif n < 0:
                return -1
            else:
                return 0
            end;
            return 0

        main:
            int n, k;
            input(n);
            while n > 0:
                let k = classify(n);
                output("class = " .. k);
                let n = n - 1
            end
    "#;
    let info = accept(source);
    assert_eq!(info.subroutines[0].frame_width, 2);
    assert_eq!(info.main_frame_width, 3);
}

#[test]
fn accepts_recursion_and_sibling_calls() {
    let source = r#"
        program calls:

        fib(int n) -> int:
            if n <= 1:
                return n
            end;
            return fib(n - 1) + fib(n - 2)

        show(int n):
            output(fib(n))

        main:
            show(10)
    "#;
    accept(source);
}

#[test]
fn accepts_comments_anywhere() {
    accept(
        "program p: { header { nested } comment }\nmain: { body } chillax",
    );
}

#[test]
fn reports_frame_widths_per_subroutine() {
    let source =
        "program p: f(int a, int b) -> int: int c; return a main: int x; chillax";
    let info = accept(source);
    assert_eq!(info.subroutines[0].frame_width, 4);
    assert_eq!(info.main_frame_width, 2);
}

// Rejections: the exact diagnostic line is pinned.

#[test]
fn rejects_empty_file_at_origin() {
    assert_eq!(
        diagnostic(""),
        "test.ampl:1:0: expected 'program', but found end-of-file",
    );
}

#[test]
fn rejects_trailing_token_after_main_body() {
    assert_eq!(
        diagnostic("program p: main: int x; let x = 1 end"),
        "test.ampl:1:35: unreachable: 'end'",
    );
}

#[test]
fn rejects_wrong_return_expression_type() {
    assert_eq!(
        diagnostic("program p: f() -> int: return true end main: chillax"),
        "test.ampl:1:31: incompatible types (expected int, found bool) for 'return' statement",
    );
}

#[test]
fn rejects_integer_plus_boolean_at_operator_column() {
    assert_eq!(
        diagnostic("program p: main: int a; let a = 1 + true"),
        "test.ampl:1:35: incompatible types (expected int, found bool) for operator +",
    );
}

#[test]
fn rejects_too_many_arguments() {
    assert_eq!(
        diagnostic("program p: g(int x): chillax main: g(1,2)"),
        "test.ampl:1:39: too many arguments for call to 'g'",
    );
}

#[test]
fn rejects_too_few_arguments() {
    assert_eq!(
        diagnostic("program p: g(int x, int y): chillax main: g(1)"),
        "test.ampl:1:46: too few arguments for call to 'g'",
    );
}

#[test]
fn rejects_missing_colon_in_subroutine_header() {
    assert_eq!(
        diagnostic("program p: g(int x) main: chillax"),
        "test.ampl:1:21: expected ':', but found 'main'",
    );
}

#[test]
fn rejects_multiple_definition() {
    assert_eq!(
        diagnostic("program p: main: int x; bool x; chillax"),
        "test.ampl:1:30: multiple definition of 'x'",
    );
}

#[test]
fn rejects_unknown_identifier() {
    assert_eq!(
        diagnostic("program p: main: let y = 1"),
        "test.ampl:1:22: unknown identifier 'y'",
    );
}

#[test]
fn rejects_assignment_to_subroutine() {
    assert_eq!(
        diagnostic("program p: g(int x): chillax main: let g = 1"),
        "test.ampl:1:40: 'g' is not a variable",
    );
}

#[test]
fn rejects_indexing_a_scalar() {
    assert_eq!(
        diagnostic("program p: main: int a; let a[0] = 1"),
        "test.ampl:1:29: 'a' is not an array",
    );
}

#[test]
fn rejects_calling_a_procedure_in_expression() {
    assert_eq!(
        diagnostic("program p: g(int x): chillax main: int a; let a = g(1)"),
        "test.ampl:1:51: 'g' is not a function",
    );
}

#[test]
fn rejects_function_in_statement_position() {
    assert_eq!(
        diagnostic("program p: f() -> int: return 1 main: f()"),
        "test.ampl:1:39: 'f' is not a procedure",
    );
}

#[test]
fn rejects_array_operand_of_output() {
    assert_eq!(
        diagnostic("program p: main: int array a; output(a)"),
        "test.ampl:1:31: 'output' is an illegal array operation",
    );
}

#[test]
fn rejects_unindexed_array_input() {
    assert_eq!(
        diagnostic("program p: main: int array a; input(a)"),
        "test.ampl:1:37: expected scalar variable instead of 'a'",
    );
}

#[test]
fn rejects_return_expression_in_procedure() {
    assert_eq!(
        diagnostic("program p: g(int x): return x main: chillax"),
        "test.ampl:1:29: a return expression is not allowed for a procedure",
    );
}

#[test]
fn rejects_bare_return_in_function() {
    assert_eq!(
        diagnostic("program p: f() -> int: return main: chillax"),
        "test.ampl:1:24: missing return expression for a function",
    );
}

#[test]
fn rejects_non_boolean_guard_at_expression_start() {
    assert_eq!(
        diagnostic("program p: main: int a; if a + 1: chillax end"),
        "test.ampl:1:28: incompatible types (expected bool, found int) for 'if' guard",
    );
    assert_eq!(
        diagnostic("program p: main: while 1: chillax end"),
        "test.ampl:1:24: incompatible types (expected bool, found int) for 'while' guard",
    );
}

#[test]
fn rejects_argument_type_mismatch() {
    assert_eq!(
        diagnostic("program p: g(int x): chillax main: g(true)"),
        "test.ampl:1:38: incompatible types (expected int, found bool) for argument 1 of call to 'g'",
    );
}

#[test]
fn rejects_bad_array_size_type() {
    assert_eq!(
        diagnostic("program p: main: int array a; let a = array true"),
        "test.ampl:1:45: incompatible types (expected int, found bool) for array size of 'a'",
    );
}

#[test]
fn rejects_bad_index_type() {
    assert_eq!(
        diagnostic("program p: main: int array a; let a[true] = 1"),
        "test.ampl:1:37: incompatible types (expected int, found bool) for array index of 'a'",
    );
}

#[test]
fn rejects_statement_keyword_mismatch() {
    assert_eq!(
        diagnostic("program p: main: end"),
        "test.ampl:1:18: expected statement, but found 'end'",
    );
}

#[test]
fn rejects_scanner_errors_through_the_same_path() {
    assert_eq!(
        diagnostic("program p: main: output(\"abc"),
        "test.ampl:1:25: string not closed",
    );
    assert_eq!(
        diagnostic("program p: main: int a; let a = 2147483648"),
        "test.ampl:1:33: number too large",
    );
    assert_eq!(
        diagnostic("program p: main: chillax #"),
        "test.ampl:1:26: illegal character '#' (ASCII #35)",
    );
}

#[test]
fn positions_track_lines() {
    let source = "program p:\nmain:\n    int a;\n    let a = true";
    assert_eq!(
        diagnostic(source),
        "test.ampl:4:13: incompatible types (expected int, found bool) for assignment to 'a'",
    );
}

#[test]
fn diagnostics_are_deterministic() {
    let source = "program p: main: int a; let a = 1 + true";
    let first = diagnostic(source);
    let second = diagnostic(source);
    assert_eq!(first, second);
}
