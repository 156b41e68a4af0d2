mod common;
use boose::mach::Engine;
use common::*;

#[test]
fn test_three_iterations() {
    let mut e = Engine::new();
    assert_eq!(
        exec(
            &mut e,
            "i = 0\nWHILE i < 3\ni = i + 1\nMOVE i 0\nENDWHILE"
        ),
        "MOVE 1,0\nMOVE 2,0\nMOVE 3,0\n"
    );
    assert_eq!(e.variable("i"), Some(3));
}

#[test]
fn test_nested_loops() {
    let mut e = Engine::new();
    let source = "
i = 0
WHILE i < 2
j = 0
WHILE j < 2
j = j + 1
MOVE i j
ENDWHILE
i = i + 1
ENDWHILE
";
    assert_eq!(
        exec(&mut e, source),
        "MOVE 0,1\nMOVE 0,2\nMOVE 1,1\nMOVE 1,2\n"
    );
}

#[test]
fn test_false_loop_skips_body() {
    let mut e = Engine::new();
    assert_eq!(
        exec(&mut e, "WHILE 1 > 2\nMOVE 5 5\nENDWHILE\nMOVE 1 1"),
        "MOVE 1,1\n"
    );
}

#[test]
fn test_if_inside_loop() {
    let mut e = Engine::new();
    let source = "
n = 0
WHILE n < 4
IF n == 2
CIRCLE 9
ENDIF
n = n + 1
ENDWHILE
";
    assert_eq!(exec(&mut e, source), "ELLIPSE -9,-9 18x18 Black\n");
}

#[test]
fn test_skipped_body_may_use_unknown_names() {
    let mut e = Engine::new();
    assert_eq!(
        exec(&mut e, "WHILE 1 > 2\nCIRCLE ghost\nENDWHILE\nMOVE 2 2"),
        "MOVE 2,2\n"
    );
    assert!(check("WHILE 1 > 2\nCIRCLE ghost\nENDWHILE").is_err());
}
