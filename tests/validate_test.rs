mod common;
use boose::lang::{ErrorCode, Program};
use boose::mach::Engine;
use common::*;

const PROGRAMS: &[&str] = &[
    "MOVE 10 10\nCIRCLE 5",
    "i = 0\nWHILE i < 3\ni = i + 1\nENDWHILE",
    "METHOD Sq(s)\nRECTANGLE s s\nENDMETHOD\nSq(4)",
    "METHOD Count(n)\nIF n > 0\nm = n - 1\nCount(m)\nENDIF\nENDMETHOD\nCount(3)",
    "x = 3\nIF x == 3\nCOLOR red\nFILL on\nTRIANGLE x x\nENDIF",
    "WRITE \"hello\"\nWRITE 20 \"big\"\nCLEAR\nRESET",
];

#[test]
fn test_valid_programs_run_cleanly() {
    for source in PROGRAMS {
        assert_eq!(check(source), Ok(()), "{}", source);
        let mut e = Engine::new();
        if let Err(error) = try_exec(&mut e, source) {
            assert!(!error.is(ErrorCode::SyntaxError), "{}", error);
            assert!(!error.is(ErrorCode::UnsupportedCommand), "{}", error);
        }
    }
}

#[test]
fn test_validate_draws_nothing() {
    let e = Engine::new();
    e.validate(&Program::new("MOVE 1 1\nCIRCLE 4")).unwrap();
    assert!(e.surface().primitives().is_empty());
}

#[test]
fn test_validate_leaves_state_alone() {
    let mut e = Engine::new();
    exec(&mut e, "x = 7");
    e.validate(&Program::new("x = 1\ny = 2\nMETHOD M()\nENDMETHOD"))
        .unwrap();
    assert_eq!(e.variable("x"), Some(7));
    assert_eq!(e.variable("y"), None);
    assert!(e.method("M").is_none());
}

#[test]
fn test_sizes_reported() {
    let error = check("MOVE 1 1\nCIRCLE 0").unwrap_err();
    assert!(error.is(ErrorCode::IllegalFunctionCall));
    assert_eq!(error.line_number(), Some(2));
    assert_eq!(error.line(), "CIRCLE 0");
    let error = check("RECTANGLE 0 5").unwrap_err();
    assert!(error.is(ErrorCode::IllegalFunctionCall));
}

#[test]
fn test_first_error_wins() {
    let error = check("MOVE 1 1\nCOLOR pink\nCIRCLE 0").unwrap_err();
    assert_eq!(
        error.to_string(),
        "SYNTAX ERROR IN 2: COLOR pink; EXPECTED BLACK, BLUE, RED OR GREEN"
    );
}

#[test]
fn test_parameters_scoped_to_body() {
    assert!(check("METHOD Sq(s)\nCIRCLE s\nENDMETHOD").is_ok());
    let error = check("METHOD Sq(s)\nENDMETHOD\nCIRCLE s").unwrap_err();
    assert!(error.is(ErrorCode::UndefinedVariable));
    assert_eq!(error.line_number(), Some(3));
}

#[test]
fn test_calls_checked() {
    let error = check("Sq(1)\nMETHOD Sq(s)\nENDMETHOD").unwrap_err();
    assert!(error.is(ErrorCode::UndefinedMethod));
    let error = check("METHOD Sq(s)\nENDMETHOD\nSq()").unwrap_err();
    assert!(error.is(ErrorCode::IllegalFunctionCall));
    let error = check("METHOD Sq(s)\nENDMETHOD\nSq(k)").unwrap_err();
    assert!(error.is(ErrorCode::UndefinedVariable));
}

#[test]
fn test_duplicate_methods() {
    let error = check("METHOD A()\nENDMETHOD\nMETHOD A()\nENDMETHOD").unwrap_err();
    assert!(error.is(ErrorCode::DuplicateDefinition));
}

#[test]
fn test_skipped_lines_still_checked() {
    let mut e = Engine::new();
    assert_eq!(exec(&mut e, "IF 1 > 2\nprint hello\nENDIF"), "");
    let error = check("IF 1 > 2\nprint hello\nENDIF").unwrap_err();
    assert!(error.is(ErrorCode::UnsupportedCommand));
    assert_eq!(
        error.to_string(),
        "UNSUPPORTED COMMAND IN 2: print hello; print IS NOT A COMMAND"
    );
}

#[test]
fn test_validate_line() {
    let mut e = Engine::new();
    exec(&mut e, "r = 3");
    let ok = boose::lang::Line::new("CIRCLE r");
    assert!(e.validate_line(&ok).is_ok());
    let bad = boose::lang::Line::new("CIRCLE q");
    assert!(e.validate_line(&bad).is_err());
    assert!(e.surface().primitives().is_empty());
}

#[test]
fn test_assigned_sizes_reported() {
    let error = check("r = 0\nCIRCLE r").unwrap_err();
    assert!(error.is(ErrorCode::IllegalFunctionCall));
    assert_eq!(error.line_number(), Some(2));
    assert!(check("r = 0\nr = 15\nCIRCLE r").is_ok());
    let grown = "w = 0\ni = 0\nWHILE i < 2\nw = w + 5\ni = i + 1\nENDWHILE\nRECTANGLE w w";
    assert_eq!(check(grown), Ok(()));
}
