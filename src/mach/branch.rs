use super::{Mode, State};
use crate::error;
use crate::lang::{parse_int, Construct, Error, Word};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Greater,
    Less,
    Equal,
    NotEqual,
    GreaterEqual,
    LessEqual,
}

impl Comparison {
    fn from_token(s: &str) -> Option<Comparison> {
        use Comparison::*;
        match s {
            ">" => Some(Greater),
            "<" => Some(Less),
            "==" => Some(Equal),
            "!=" => Some(NotEqual),
            ">=" => Some(GreaterEqual),
            "<=" => Some(LessEqual),
            _ => None,
        }
    }
}

/// ## Condition of an IF or WHILE header

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Condition {
    pub lhs: i32,
    pub comparison: Comparison,
    pub rhs: i32,
}

impl Condition {
    pub fn parse(word: Word, tokens: &[String]) -> Result<Condition> {
        if tokens.len() != 4 {
            return Err(error!(SyntaxError; &format!("EXPECTED {} VALUE OPERATOR VALUE", word)));
        }
        let lhs = operand(&tokens[1])?;
        let comparison = match Comparison::from_token(&tokens[2]) {
            Some(c) => c,
            None => {
                return Err(error!(SyntaxError; &format!("UNKNOWN OPERATOR {}", tokens[2])))
            }
        };
        let rhs = operand(&tokens[3])?;
        Ok(Condition {
            lhs,
            comparison,
            rhs,
        })
    }

    pub fn eval(&self) -> bool {
        use Comparison::*;
        match self.comparison {
            Greater => self.lhs > self.rhs,
            Less => self.lhs < self.rhs,
            Equal => self.lhs == self.rhs,
            NotEqual => self.lhs != self.rhs,
            GreaterEqual => self.lhs >= self.rhs,
            LessEqual => self.lhs <= self.rhs,
        }
    }
}

fn operand(s: &str) -> Result<i32> {
    match parse_int(s) {
        Some(i) => Ok(i),
        None => Err(error!(TypeMismatch; &format!("{} IS NOT AN INTEGER", s))),
    }
}

/// Block closers stand alone on their line.
pub fn check_closer(word: Word, tokens: &[String]) -> Result<()> {
    if tokens.len() > 1 {
        return Err(error!(SyntaxError; &format!("{} TAKES NO ARGUMENTS", word)));
    }
    Ok(())
}

pub fn validate(tokens: &[String]) -> Result<Condition> {
    Condition::parse(Word::If, tokens)
}

pub fn apply(state: &mut State, tokens: &[String]) -> Result<()> {
    let mode = if validate(tokens)?.eval() {
        Mode::Executing
    } else {
        Mode::Skipping
    };
    state.flow.push(Construct::If, mode)
}

/// ENDIF with nothing suspended. Unmatched closers are ignored.
pub fn end(state: &mut State, tokens: &[String]) -> Result<()> {
    check_closer(Word::EndIf, tokens)?;
    state.flow.pop_if(Construct::If).map(|_| ())
}

/// A line met while the top IF frame is not executing.
pub fn skip(state: &mut State, word: Word) -> Result<()> {
    if word == Word::EndIf {
        state.flow.pop_if(Construct::If)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{ErrorCode, Line};

    fn cond(s: &str) -> Result<Condition> {
        validate(Line::new(s).tokens())
    }

    #[test]
    fn test_comparisons() {
        assert!(cond("IF 1 < 2").unwrap().eval());
        assert!(!cond("IF 1 > 2").unwrap().eval());
        assert!(cond("IF 2 == 2").unwrap().eval());
        assert!(cond("IF 2 != 3").unwrap().eval());
        assert!(cond("IF 3 >= 3").unwrap().eval());
        assert!(!cond("IF 4 <= 3").unwrap().eval());
    }

    #[test]
    fn test_errors() {
        assert!(cond("IF 1 <").unwrap_err().is(ErrorCode::SyntaxError));
        assert!(cond("IF 1 = 1").unwrap_err().is(ErrorCode::SyntaxError));
        assert!(cond("IF 1 < 2 3").unwrap_err().is(ErrorCode::SyntaxError));
        assert!(cond("IF 1 < x").unwrap_err().is(ErrorCode::TypeMismatch));
    }

    #[test]
    fn test_unmatched_endif_ignored() {
        let mut state = State::default();
        assert!(end(&mut state, Line::new("ENDIF").tokens()).is_ok());
        state.flow.push(Construct::While, Mode::Executing).unwrap();
        assert!(end(&mut state, Line::new("ENDIF").tokens()).is_ok());
        assert_eq!(state.flow.depth(), 1);
    }
}
