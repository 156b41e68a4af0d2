use crate::lang::{Line, Program};
use crate::mach::{Engine, Mode};


fn step(engine: &mut Engine, text: &str, at: usize) -> usize {
    let mut cursor = at;
    engine.execute_line(&Line::new(text), &mut cursor).unwrap();
    cursor
}

#[test]
fn test_loop_rewinds_to_line_before_header() {
    let mut e = Engine::new();
    assert_eq!(step(&mut e, "i = 0", 2), 2);
    assert_eq!(step(&mut e, "WHILE i < 3", 3), 3);
    assert_eq!(step(&mut e, "i = i + 1", 4), 4);
    assert_eq!(step(&mut e, "ENDWHILE", 5), 2);
}

#[test]
fn test_loop_at_first_line_wraps() {
    let mut e = Engine::new();
    assert_eq!(step(&mut e, "WHILE 1 < 2", 0), 0);
    assert_eq!(step(&mut e, "ENDWHILE", 1), usize::MAX);
    assert_eq!(usize::MAX.wrapping_add(1), 0);
}

#[test]
fn test_false_loop_falls_through() {
    let mut e = Engine::new();
    assert_eq!(step(&mut e, "WHILE 2 < 1", 6), 6);
    assert!(e.is_suspended());
    assert_eq!(step(&mut e, "ENDWHILE", 9), 9);
    assert!(!e.is_suspended());
}

#[test]
fn test_call_jumps_to_header_and_returns() {
    let mut e = Engine::new();
    step(&mut e, "METHOD Sq(n)", 1);
    step(&mut e, "CIRCLE n", 2);
    step(&mut e, "ENDMETHOD", 3);
    assert_eq!(step(&mut e, "Sq(5)", 8), 1);
    assert_eq!(e.variable("n"), Some(5));
    assert_eq!(step(&mut e, "ENDMETHOD", 3), 8);
    assert_eq!(e.variable("n"), None);
}

#[test]
fn test_run_restarts_state() {
    let mut e = Engine::new();
    let p: Program = "x = 1\nMETHOD A()\nENDMETHOD".parse().unwrap();
    e.run(&p).unwrap();
    assert_eq!(e.variable("x"), Some(1));
    let q: Program = "y = 2".parse().unwrap();
    e.run(&q).unwrap();
    assert_eq!(e.variable("x"), None);
    assert!(e.method("A").is_none());
    assert_eq!(e.state().flow.depth(), 0);
}

#[test]
fn test_skipped_frames_do_not_evaluate() {
    let mut e = Engine::new();
    step(&mut e, "IF 1 > 2", 0);
    step(&mut e, "IF undefined == 1", 1);
    let top = e.state().flow.top().unwrap();
    assert_eq!(top.mode, Mode::Nested);
    step(&mut e, "ENDIF", 2);
    step(&mut e, "ENDIF", 3);
    assert_eq!(e.state().flow.depth(), 0);
}
