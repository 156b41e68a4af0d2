/*!
# Rust Language Module

This Rust module provides tokenizing and command classification
for the BOOSE drawing language.

*/

pub type LineNumber = Option<usize>;

#[macro_use]
mod error;
mod command;
mod line;
mod name;

pub use command::{classify, Command, Construct, Word};
pub use error::Error;
pub use error::ErrorCode;
pub use line::{Line, Program};
pub use name::{is_integer, is_reserved, is_valid_name, parse_int, RESERVED};
