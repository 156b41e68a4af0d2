use super::Stack;
use crate::error;
use crate::lang::Error;
use std::collections::HashMap;

type Result<T> = std::result::Result<T, Error>;

pub type Scope = HashMap<String, i32>;

/// ## Variable memory
///
/// Globals plus one scope of parameter bindings per method call in flight.
/// A name bound in the innermost scope shadows the global of the same name.

#[derive(Debug)]
pub struct Var {
    globals: HashMap<String, i32>,
    scopes: Stack<Scope>,
}

impl Default for Var {
    fn default() -> Var {
        Var {
            globals: HashMap::default(),
            scopes: Stack::with_limit("CALL STACK OVERFLOW", CALL_LIMIT),
        }
    }
}

/// Deepest method recursion allowed.
pub const CALL_LIMIT: usize = 4096;

impl Var {
    pub fn new() -> Var {
        Var::default()
    }

    pub fn clear(&mut self) {
        self.globals.clear();
        self.scopes.clear();
    }

    pub fn fetch(&self, var_name: &str) -> Option<i32> {
        if let Some(val) = self.scopes.last().and_then(|scope| scope.get(var_name)) {
            return Some(*val);
        }
        self.globals.get(var_name).copied()
    }

    pub fn contains(&self, var_name: &str) -> bool {
        self.fetch(var_name).is_some()
    }

    pub fn store(&mut self, var_name: &str, value: i32) -> Result<()> {
        if let Some(scope) = self.scopes.last_mut() {
            if let Some(val) = scope.get_mut(var_name) {
                *val = value;
                return Ok(());
            }
        }
        if let Some(val) = self.globals.get_mut(var_name) {
            *val = value;
            return Ok(());
        }
        if self.globals.len() >= u16::max_value() as usize {
            return Err(error!(OutOfMemory; "TOO MANY VARIABLES"));
        }
        self.globals.insert(var_name.to_string(), value);
        Ok(())
    }

    pub fn push_scope(&mut self, scope: Scope) -> Result<()> {
        self.scopes.push(scope)
    }

    pub fn pop_scope(&mut self) -> Result<Scope> {
        self.scopes.pop()
    }

    pub fn scope_depth(&self) -> usize {
        self.scopes.len()
    }

    /// Drops scopes above `depth`.
    pub fn unwind(&mut self, depth: usize) {
        self.scopes.truncate(depth)
    }

    /// Global bindings sorted by name.
    pub fn globals(&self) -> Vec<(&str, i32)> {
        let mut v: Vec<(&str, i32)> = self
            .globals
            .iter()
            .map(|(k, v)| (k.as_str(), *v))
            .collect();
        v.sort();
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope(pairs: &[(&str, i32)]) -> Scope {
        pairs.iter().map(|(k, v)| (k.to_string(), *v)).collect()
    }

    #[test]
    fn test_shadow_and_restore() {
        let mut var = Var::new();
        var.store("a", 10).unwrap();
        var.push_scope(scope(&[("a", 1)])).unwrap();
        assert_eq!(var.fetch("a"), Some(1));
        var.store("a", 2).unwrap();
        assert_eq!(var.fetch("a"), Some(2));
        var.pop_scope().unwrap();
        assert_eq!(var.fetch("a"), Some(10));
    }

    #[test]
    fn test_innermost_scope_only() {
        let mut var = Var::new();
        var.push_scope(scope(&[("n", 3)])).unwrap();
        var.push_scope(scope(&[("m", 2)])).unwrap();
        assert_eq!(var.fetch("n"), None);
        assert_eq!(var.fetch("m"), Some(2));
        var.store("n", 7).unwrap();
        var.pop_scope().unwrap();
        var.pop_scope().unwrap();
        assert_eq!(var.fetch("n"), Some(7));
    }

    #[test]
    fn test_globals_sorted() {
        let mut var = Var::new();
        var.store("b", 2).unwrap();
        var.store("a", 1).unwrap();
        assert_eq!(var.globals(), vec![("a", 1), ("b", 2)]);
        var.clear();
        assert!(var.globals().is_empty());
    }
}
