use super::flow::Mark;
use super::{Flow, Methods, Var};
use crate::error;
use crate::lang::{is_integer, is_reserved, parse_int, Command, Error};

type Result<T> = std::result::Result<T, Error>;

/// ## Program state
///
/// Everything a run accumulates apart from the pen and the surface.

#[derive(Debug, Default)]
pub struct State {
    pub var: Var,
    pub methods: Methods,
    pub flow: Flow,
}

/// Flow and scope heights to return to when a direct call fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint {
    flow: Mark,
    scopes: usize,
}

impl State {
    pub fn clear(&mut self) {
        self.var.clear();
        self.methods.clear();
        self.flow.clear();
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            flow: self.flow.mark(),
            scopes: self.var.scope_depth(),
        }
    }

    /// Abandons calls and blocks opened since `checkpoint`. Variables
    /// already stored keep their values.
    pub fn unwind(&mut self, checkpoint: Checkpoint) {
        self.flow.unwind(checkpoint.flow);
        self.var.unwind(checkpoint.scopes);
    }

    /// An integer literal or the value of a bound variable.
    pub fn resolve(&self, token: &str) -> Result<i32> {
        if let Some(i) = parse_int(token) {
            return Ok(i);
        }
        match self.var.fetch(token) {
            Some(i) => Ok(i),
            None => Err(error!(UndefinedVariable; &format!("{} IS NOT DEFINED", token))),
        }
    }

    /// Replace variable names in the argument tokens with their values.
    pub fn substitute(&self, tokens: &[String], command: Command) -> Result<Vec<String>> {
        let words_only = command.word().map_or(false, |word| !word.substitutes());
        tokens
            .iter()
            .enumerate()
            .map(|(index, token)| {
                if index == 0 || words_only || is_integer(token) || is_reserved(token) {
                    Ok(token.clone())
                } else {
                    self.resolve(token).map(|i| i.to_string())
                }
            })
            .collect()
    }
}
