use super::State;
use crate::error;
use crate::lang::{is_valid_name, parse_int, Error, Word};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    fn from_token(s: &str) -> Option<Operator> {
        match s {
            "+" => Some(Operator::Add),
            "-" => Some(Operator::Subtract),
            "*" => Some(Operator::Multiply),
            "/" => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn apply(self, lhs: i32, rhs: i32) -> Result<i32> {
        let result = match self {
            Operator::Add => lhs.checked_add(rhs),
            Operator::Subtract => lhs.checked_sub(rhs),
            Operator::Multiply => lhs.checked_mul(rhs),
            Operator::Divide => {
                if rhs == 0 {
                    return Err(error!(DivisionByZero));
                }
                lhs.checked_div(rhs)
            }
        };
        match result {
            Some(i) => Ok(i),
            None => Err(error!(Overflow)),
        }
    }
}

/// ## `NAME = VALUE [OP VALUE]`

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    pub name: String,
    pub value: i32,
    pub operation: Option<(Operator, i32)>,
}

impl Assignment {
    pub fn evaluate(&self) -> Result<i32> {
        match self.operation {
            None => Ok(self.value),
            Some((op, rhs)) => op.apply(self.value, rhs),
        }
    }
}

/// Names that can be bound by assignments and parameters.
pub fn check_name(name: &str) -> Result<()> {
    if !is_valid_name(name) {
        return Err(error!(SyntaxError; &format!("{} IS NOT A VALID NAME", name)));
    }
    if Word::from_keyword(name).is_some() {
        return Err(error!(SyntaxError; &format!("{} IS A RESERVED WORD", name)));
    }
    Ok(())
}

/// Checks an assignment after substitution.
pub fn validate(tokens: &[String]) -> Result<Assignment> {
    if tokens.len() < 3 {
        return Err(error!(SyntaxError; "EXPECTED NAME = VALUE"));
    }
    check_name(&tokens[0])?;
    if tokens[1] != "=" {
        return Err(error!(SyntaxError; "EXPECTED ="));
    }
    let value = integer(&tokens[2])?;
    let op = match tokens.get(3) {
        None => return Ok(assignment(tokens, value, None)),
        Some(op) => match Operator::from_token(op) {
            Some(op) => op,
            None => return Err(error!(SyntaxError; &format!("UNKNOWN OPERATOR {}", op))),
        },
    };
    let rhs = match tokens.get(4) {
        None => return Err(error!(MissingOperand)),
        Some(rhs) => integer(rhs)?,
    };
    if tokens.len() > 5 {
        return Err(error!(SyntaxError; "UNEXPECTED TOKENS AFTER EXPRESSION"));
    }
    Ok(assignment(tokens, value, Some((op, rhs))))
}

fn assignment(tokens: &[String], value: i32, operation: Option<(Operator, i32)>) -> Assignment {
    Assignment {
        name: tokens[0].clone(),
        value,
        operation,
    }
}

fn integer(s: &str) -> Result<i32> {
    match parse_int(s) {
        Some(i) => Ok(i),
        None => Err(error!(TypeMismatch; &format!("{} IS NOT AN INTEGER", s))),
    }
}

pub fn apply(state: &mut State, tokens: &[String]) -> Result<()> {
    let assignment = validate(tokens)?;
    let value = assignment.evaluate()?;
    state.var.store(&assignment.name, value)
}

/// Validation pass bookkeeping: the name exists from here on. A plain
/// literal is recorded as is; arithmetic may run in a loop, so it only
/// has to leave the name positive.
pub fn declare(state: &mut State, tokens: &[String]) -> Result<()> {
    let assignment = validate(tokens)?;
    let value = match assignment.operation {
        None => assignment.value,
        Some(_) => match state.var.fetch(&assignment.name) {
            Some(value) if value > 0 => value,
            _ => 1,
        },
    };
    state.var.store(&assignment.name, value)
}
