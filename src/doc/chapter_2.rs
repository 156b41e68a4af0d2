/*!
# Variables and Control Flow

Variables hold 32-bit signed integers. A name may not begin with a digit
and may not contain any of `= < > ! + - * / ( ) { } ; : , . "` or spaces.
Command words can't be used as names.

Control flow is structured. Every `IF`, `WHILE` and `METHOD` needs its
matching end line. An end line with nothing to close is ignored.
*/

#[path = "commands/var.rs"]
#[allow(non_snake_case)]
pub mod VAR;

#[path = "commands/if.rs"]
#[allow(non_snake_case)]
pub mod IF;

#[path = "commands/while.rs"]
#[allow(non_snake_case)]
pub mod WHILE;

#[path = "commands/method.rs"]
#[allow(non_snake_case)]
pub mod METHOD;
