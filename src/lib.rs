//! # BOOSE
//!
//! A small drawing language. Each line moves a pen, draws a shape or
//! controls the flow of the program with variables, conditionals,
//! loops and methods.
//!
//! Begin by opening a terminal and running the executable. If you get
//! the following, you have achieved success.
//! ```text
//! BOOSE
//! READY.
//! █
//! ```
//!
//! The engine can also be driven from Rust. Anything that implements
//! [`mach::Surface`] can be drawn on; [`mach::Recorder`] keeps a list
//! of what was drawn.
//! ```
//! use boose::lang::Program;
//! use boose::mach::Engine;
//!
//! let program = Program::new("x = 20\nMOVE 100 100\nCIRCLE x");
//! let mut engine = Engine::new();
//! engine.validate(&program).unwrap();
//! engine.run(&program).unwrap();
//! assert_eq!(engine.surface().primitives().len(), 2);
//! ```

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/chapter_2.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_2;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
