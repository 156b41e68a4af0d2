#![allow(dead_code)]

use boose::lang::{Error, Program};
use boose::mach::Engine;

/// Runs a program and returns what it drew, one primitive per line.
pub fn exec(engine: &mut Engine, source: &str) -> String {
    match try_exec(engine, source) {
        Ok(s) => s,
        Err(error) => format!("{}\n", error),
    }
}

pub fn try_exec(engine: &mut Engine, source: &str) -> Result<String, Error> {
    let program = Program::new(source);
    let result = engine.run(&program);
    let mut s = String::new();
    for primitive in engine.surface_mut().take() {
        s.push_str(&format!("{}\n", primitive));
    }
    result.map(|_| s)
}

/// Runs a program that is expected to fail and returns the error.
pub fn exec_err(engine: &mut Engine, source: &str) -> Error {
    let program = Program::new(source);
    match engine.run(&program) {
        Ok(()) => panic!("program ran without error"),
        Err(error) => error,
    }
}

pub fn check(source: &str) -> Result<(), Error> {
    Engine::new().validate(&Program::new(source))
}
