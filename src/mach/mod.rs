/*!
## Rust Machine Module

This Rust module is the execution engine for BOOSE programs:
variables, methods, control flow and the drawing pen.

*/

pub type Address = usize;

mod assign;
mod branch;
mod engine;
mod flow;
mod looping;
mod method;
mod pen;
mod simple;
mod stack;
mod state;
mod surface;
mod var;

pub use assign::{Assignment, Operator};
pub use branch::{Comparison, Condition};
pub use engine::Engine;
pub use flow::{CallFrame, Flow, Frame, LoopFrame, Mark, Mode};
pub use method::{Method, Methods, Signature};
pub use pen::{Color, Pen, Status};
pub use simple::Simple;
pub use stack::Stack;
pub use state::{Checkpoint, State};
pub use surface::{Point, Primitive, Recorder, Rect, Surface};
pub use var::{Scope, Var, CALL_LIMIT};

#[cfg(test)]
mod tests;
