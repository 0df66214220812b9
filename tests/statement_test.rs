mod common;
use basic::lang::ErrorCode;
use basic::mach::{Program, Runtime, Val};
use common::*;

#[test]
fn test_runs_in_line_number_order() {
    let out = run(&["30 PRINT 3", "10 PRINT 1", "20 PRINT 2"]).unwrap();
    assert_eq!(out, vec![Val::Integer(1), Val::Integer(2), Val::Integer(3)]);
}

#[test]
fn test_blank_line_and_rem() {
    assert_eq!(exec(&["10 REM START", "20", "30 PRINT \"OK\""]), "OK\n");
}

#[test]
fn test_empty_program() {
    assert_eq!(exec(&[]), "");
}

#[test]
fn test_let() {
    assert_eq!(exec(&["10 LET X = 5", "20 LET Y = X * 2", "30 PRINT Y"]), "10\n");
}

#[test]
fn test_let_overwrites() {
    assert_eq!(
        exec(&["10 LET X = 5", "20 LET X = \"FIVE\"", "30 PRINT X"]),
        "FIVE\n"
    );
}

#[test]
fn test_let_syntax() {
    for line in &[
        "10 LET",
        "10 LET X",
        "10 LET X 5",
        "10 LET 5 = 5",
        "10 LET X =",
        "10 LET X = 1 THEN 10",
    ] {
        let e = run(&[*line]).unwrap_err();
        assert_eq!(e.code(), ErrorCode::RuntimeError, "{}", line);
        assert_eq!(e.text(), "invalid LET syntax", "{}", line);
    }
}

#[test]
fn test_let_expression_error_is_not_rewrapped() {
    let e = run(&["10 LET X = Y"]).unwrap_err();
    assert_eq!(e.code(), ErrorCode::ExpressionError);
}

#[test]
fn test_print_values() {
    assert_eq!(
        exec(&["10 PRINT 42", "20 PRINT \"HI\"", "30 PRINT 1 < 2", "40 PRINT -1"]),
        "42\nHI\nTRUE\n-1\n"
    );
}

#[test]
fn test_print_syntax() {
    let e = run(&["10 PRINT"]).unwrap_err();
    assert_eq!(e.code(), ErrorCode::RuntimeError);
    assert_eq!(e.text(), "invalid PRINT expression");
    let e = run(&["10 PRINT 1 THEN"]).unwrap_err();
    assert_eq!(e.text(), "invalid PRINT expression");
}

#[test]
fn test_goto() {
    assert_eq!(
        exec(&["10 GOTO 30", "20 PRINT \"SKIPPED\"", "30 PRINT \"LANDED\""]),
        "LANDED\n"
    );
}

#[test]
fn test_goto_backwards() {
    assert_eq!(
        exec(&[
            "10 LET X = 0",
            "20 GOTO 50",
            "30 PRINT X",
            "40 GOTO 70",
            "50 LET X = X + 1",
            "60 GOTO 30",
            "70 REM"
        ]),
        "1\n"
    );
}

#[test]
fn test_goto_missing_target() {
    let e = run(&["10 GOTO 99", "20 PRINT 1"]).unwrap_err();
    assert_eq!(e.code(), ErrorCode::RuntimeError);
    assert_eq!(e.text(), "invalid GOTO target");
    assert_eq!(e.line_number(), Some(10));
    assert_eq!(e.column(), 8..10);
}

#[test]
fn test_goto_syntax() {
    for line in &["10 GOTO", "10 GOTO X", "10 GOTO 10 20", "10 GOTO -10"] {
        let e = run(&[*line]).unwrap_err();
        assert_eq!(e.text(), "invalid GOTO target", "{}", line);
    }
}

#[test]
fn test_unrecognized_statement() {
    for line in &["10 X = 1", "10 THEN 20", "10 42", "10 \"HELLO\""] {
        let e = run(&[*line]).unwrap_err();
        assert_eq!(e.code(), ErrorCode::RuntimeError, "{}", line);
        assert_eq!(e.text(), "unrecognized statement", "{}", line);
    }
}

#[test]
fn test_output_before_error_is_kept() {
    assert_eq!(
        exec(&["10 PRINT 1", "20 PRINT 1 / 0", "30 PRINT 3"]),
        "1\nEXPRESSION ERROR IN 20 (11..12); division by zero\n"
    );
}

#[test]
fn test_lex_error_stops_before_running() {
    assert_eq!(
        exec(&["10 PRINT 1", "20 PRINT 1+1"]),
        "LEX ERROR IN 20 (9..12); unrecognized token\n"
    );
}

#[test]
fn test_duplicate_line_number() {
    let e = run(&["10 PRINT 1", "10 PRINT 2"]).unwrap_err();
    assert_eq!(e.code(), ErrorCode::RuntimeError);
    assert_eq!(e.text(), "duplicate line number");
}

#[test]
fn test_runtime_can_be_rerun_after_reset() {
    let program = Program::from_source(&["10 LET X = 1", "20 PRINT X"]).unwrap();
    let mut runtime = Runtime::new(program);
    let mut script = Script::default();
    runtime.run(&mut script).unwrap();
    runtime.reset();
    runtime.run(&mut script).unwrap();
    assert_eq!(script.output, vec![Val::Integer(1), Val::Integer(1)]);
}
