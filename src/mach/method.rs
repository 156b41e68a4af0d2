use super::assign::check_name;
use super::branch::check_closer;
use super::{Address, Mode, Scope, State};
use crate::error;
use crate::lang::{Construct, Error, Word};
use std::collections::HashMap;
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

/// ## User-defined method

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    pub params: Vec<String>,
    /// Line of the METHOD header.
    pub start: Address,
    /// Line of the matching ENDMETHOD once it has been seen.
    pub end: Option<Address>,
}

#[derive(Debug, Default)]
pub struct Methods {
    table: HashMap<String, Method>,
}

impl Methods {
    pub fn clear(&mut self) {
        self.table.clear()
    }

    pub fn get(&self, name: &str) -> Option<&Method> {
        self.table.get(name)
    }

    pub fn len(&self) -> usize {
        self.table.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    fn insert(&mut self, name: &str, method: Method) -> Result<()> {
        if self.table.len() >= u16::max_value() as usize {
            return Err(error!(OutOfMemory; "TOO MANY METHODS"));
        }
        self.table.insert(name.to_string(), method);
        Ok(())
    }

    fn close(&mut self, name: &str, end: Address) {
        if let Some(method) = self.table.get_mut(name) {
            method.end = Some(end);
        }
    }

    /// Method names sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut v: Vec<&str> = self.table.keys().map(String::as_str).collect();
        v.sort_unstable();
        v
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub name: String,
    pub params: Vec<String>,
}

/// Splits `name(a,b)` into its name and comma separated parts.
fn split_parens(s: &str) -> Option<(&str, Vec<&str>)> {
    let open = s.find('(')?;
    if !s.ends_with(')') || open + 1 > s.len() - 1 {
        return None;
    }
    let inner = &s[open + 1..s.len() - 1];
    if inner.contains(|c| c == '(' || c == ')') {
        return None;
    }
    let parts = if inner.trim().is_empty() {
        vec![]
    } else {
        inner.split(',').map(str::trim).collect()
    };
    Some((&s[..open], parts))
}

/// Checks a `METHOD name(params)` header.
pub fn validate_definition(state: &State, tokens: &[String], cursor: Address) -> Result<Signature> {
    if tokens.len() != 2 {
        return Err(error!(SyntaxError; "EXPECTED METHOD NAME(PARAMETERS)"));
    }
    let (name, params) = match split_parens(&tokens[1]) {
        Some(split) => split,
        None => return Err(error!(SyntaxError; "EXPECTED METHOD NAME(PARAMETERS)")),
    };
    check_name(name)?;
    let mut seen: Vec<&str> = vec![];
    for &param in &params {
        check_name(param)?;
        if seen.contains(&param) {
            return Err(error!(SyntaxError; &format!("DUPLICATE PARAMETER {}", param)));
        }
        seen.push(param);
    }
    if let Some(method) = state.methods.get(name) {
        if method.start != cursor {
            return Err(error!(DuplicateDefinition; &format!("{} IS ALREADY DEFINED", name)));
        }
    }
    Ok(Signature {
        name: name.to_string(),
        params: params.iter().map(|p| p.to_string()).collect(),
    })
}

/// Registers the method and skips its body.
pub fn define(state: &mut State, tokens: &[String], cursor: Address) -> Result<()> {
    let sig = validate_definition(state, tokens, cursor)?;
    if state.methods.get(&sig.name).is_none() {
        debug!(method = %sig.name, line = cursor + 1, "define");
        state.methods.insert(
            &sig.name,
            Method {
                params: sig.params,
                start: cursor,
                end: None,
            },
        )?;
    }
    state.flow.push(Construct::Method, Mode::Skipping)?;
    state.flow.begin_definition(&sig.name)
}

/// Checks a `name(args)` call and resolves its arguments.
pub fn validate_call(state: &State, tokens: &[String]) -> Result<(String, Vec<i32>)> {
    let (name, args) = match tokens.first().and_then(|t| split_parens(t)) {
        Some(split) => split,
        None => return Err(error!(SyntaxError; "EXPECTED NAME(ARGUMENTS)")),
    };
    let method = match state.methods.get(name) {
        Some(method) => method,
        None => return Err(error!(UndefinedMethod; &format!("{} IS NOT DEFINED", name))),
    };
    if args.len() != method.params.len() {
        return Err(error!(IllegalFunctionCall; "WRONG NUMBER OF ARGUMENTS"));
    }
    let mut values = Vec::with_capacity(args.len());
    for arg in args {
        values.push(state.resolve(arg)?);
    }
    Ok((name.to_string(), values))
}

/// Enters the method body. The engine steps past the header next.
pub fn call(state: &mut State, tokens: &[String], cursor: &mut Address) -> Result<()> {
    let (name, values) = validate_call(state, tokens)?;
    let (scope, start) = match state.methods.get(&name) {
        Some(method) => {
            let scope: Scope = method.params.iter().cloned().zip(values).collect();
            (scope, method.start)
        }
        None => return Err(error!(InternalError; "METHOD VANISHED")),
    };
    state.var.push_scope(scope)?;
    state.flow.push_call(&name, *cursor)?;
    state.flow.push(Construct::Method, Mode::Executing)?;
    debug!(method = %name, from = *cursor + 1, depth = state.flow.call_depth(), "call");
    *cursor = start;
    Ok(())
}

/// ENDMETHOD with nothing suspended: return from the current call.
pub fn end(state: &mut State, tokens: &[String], cursor: &mut Address) -> Result<()> {
    check_closer(Word::EndMethod, tokens)?;
    leave(state, cursor)
}

/// Pops a running METHOD frame, if one is on top, and jumps back to its
/// call line.
fn leave(state: &mut State, cursor: &mut Address) -> Result<()> {
    match state.flow.top() {
        Some(frame) if frame.construct == Construct::Method && frame.mode == Mode::Executing => {}
        _ => return Ok(()),
    }
    state.flow.pop()?;
    let frame = state.flow.pop_call()?;
    state.var.pop_scope()?;
    debug!(method = %frame.method, to = frame.return_to + 1, "return");
    *cursor = frame.return_to;
    Ok(())
}

/// A line met while the top METHOD frame is not executing. Closing a
/// definition inside a running method also returns from that method.
pub fn skip(state: &mut State, word: Word, cursor: &mut Address) -> Result<()> {
    if word != Word::EndMethod {
        return Ok(());
    }
    if let Some(frame) = state.flow.pop_if(Construct::Method)? {
        if frame.mode == Mode::Skipping {
            if let Some(name) = state.flow.end_definition() {
                state.methods.close(&name, *cursor);
            }
            return leave(state, cursor);
        }
    }
    Ok(())
}

/// Validation pass bookkeeping: the method exists from its header on,
/// and its parameters are bound until its ENDMETHOD.
pub fn declare(state: &mut State, tokens: &[String], cursor: Address) -> Result<()> {
    let sig = validate_definition(state, tokens, cursor)?;
    let scope: Scope = sig.params.iter().map(|p| (p.clone(), 1)).collect();
    state.methods.insert(
        &sig.name,
        Method {
            params: sig.params,
            start: cursor,
            end: None,
        },
    )?;
    state.var.push_scope(scope)?;
    state.flow.begin_definition(&sig.name)
}

/// Validation pass counterpart of ENDMETHOD.
pub fn undeclare(state: &mut State, tokens: &[String], cursor: Address) -> Result<()> {
    check_closer(Word::EndMethod, tokens)?;
    if let Some(name) = state.flow.end_definition() {
        state.methods.close(&name, cursor);
        state.var.pop_scope()?;
    }
    Ok(())
}
