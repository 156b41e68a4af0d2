use super::*;
use crate::error;
use crate::lang::{classify, Command, Construct, Error, Line, Program, Word};
use tracing::{debug, trace};

type Result<T> = std::result::Result<T, Error>;

/// ## Command execution engine
///
/// Owns the program state, the pen and the drawing surface. Lines are
/// executed one at a time against a cursor; handlers that transfer
/// control move the cursor and the driver steps one line past it.

#[derive(Debug)]
pub struct Engine<S: Surface = Recorder> {
    state: State,
    pen: Pen,
    surface: S,
}

impl Default for Engine<Recorder> {
    fn default() -> Engine<Recorder> {
        Engine::with_surface(Recorder::new())
    }
}

impl Engine<Recorder> {
    pub fn new() -> Engine<Recorder> {
        Engine::default()
    }
}

impl<S: Surface> Engine<S> {
    pub fn with_surface(surface: S) -> Engine<S> {
        Engine {
            state: State::default(),
            pen: Pen::default(),
            surface,
        }
    }

    /// Dry run of every line against throwaway state. Nothing is drawn.
    pub fn validate(&self, program: &Program) -> Result<()> {
        let mut scratch = State::default();
        for (index, line) in program.lines().enumerate() {
            declare(&mut scratch, line, index).map_err(|e| annotate(e, index, line))?;
        }
        Ok(())
    }

    /// Runs a program from the top. The first error stops the run.
    pub fn run(&mut self, program: &Program) -> Result<()> {
        self.start();
        debug!(lines = program.len(), "run");
        let mut cursor: Address = 0;
        while let Some(line) = program.get(cursor) {
            let index = cursor;
            self.execute_line(line, &mut cursor)
                .map_err(|e| annotate(e, index, line))?;
            cursor = cursor.wrapping_add(1);
        }
        Ok(())
    }

    /// Forget variables, methods and open blocks.
    pub fn start(&mut self) {
        self.state.clear();
    }

    /// Checks one line against the live state without changing anything.
    pub fn validate_line(&self, line: &Line) -> Result<()> {
        if line.is_empty() || self.state.flow.is_suspended() {
            return Ok(());
        }
        let tokens = line.tokens();
        let command = classify(tokens, |name| self.state.var.contains(name))?;
        let tokens = self.state.substitute(tokens, command)?;
        check(&self.state, command, &tokens)
    }

    pub fn execute_line(&mut self, line: &Line, cursor: &mut Address) -> Result<()> {
        if line.is_empty() {
            return Ok(());
        }
        let tokens = line.tokens();
        if self.state.flow.is_suspended() {
            trace!(line = cursor.wrapping_add(1), "skip");
            return self.skip_line(tokens, cursor);
        }
        trace!(line = cursor.wrapping_add(1), text = %line, "execute");
        let state = &mut self.state;
        let command = classify(tokens, |name| state.var.contains(name))?;
        let tokens = state.substitute(tokens, command)?;
        let word = match command {
            Command::Assign => return assign::apply(state, &tokens),
            Command::Call => return method::call(state, &tokens, cursor),
            Command::Keyword(word) => word,
        };
        match word {
            Word::If => branch::apply(state, &tokens),
            Word::EndIf => branch::end(state, &tokens),
            Word::While => looping::apply(state, &tokens, *cursor),
            Word::EndWhile => looping::end(state, &tokens, cursor),
            Word::Method => method::define(state, &tokens, *cursor),
            Word::EndMethod => method::end(state, &tokens, cursor),
            _ => {
                let simple = Simple::parse(word, &tokens)?;
                simple.apply(&mut self.pen, &mut self.surface);
                Ok(())
            }
        }
    }

    /// Runs a line typed outside the program. A call it makes steps
    /// through the method body in `program` until that call returns.
    /// Returns the line index where `interrupted` broke in, if it did.
    /// A failed or interrupted call is unwound.
    pub fn execute_direct<F>(
        &mut self,
        line: &Line,
        program: &Program,
        interrupted: F,
    ) -> Result<Option<Address>>
    where
        F: Fn() -> bool,
    {
        let checkpoint = self.state.checkpoint();
        let depth = self.state.flow.call_depth();
        let mut cursor: Address = program.len();
        if let Err(error) = self.execute_line(line, &mut cursor) {
            self.state.unwind(checkpoint);
            return Err(error);
        }
        while self.state.flow.call_depth() > depth {
            cursor = cursor.wrapping_add(1);
            if interrupted() {
                self.state.unwind(checkpoint);
                return Ok(Some(cursor));
            }
            let index = cursor;
            let result = match program.get(index) {
                Some(body) => self
                    .execute_line(body, &mut cursor)
                    .map_err(|e| annotate(e, index, body)),
                None => Err(error!(InternalError; "METHOD BODY NOT IN PROGRAM")),
            };
            if let Err(error) = result {
                debug!(line = index.wrapping_add(1), "unwind");
                self.state.unwind(checkpoint);
                return Err(error);
            }
        }
        Ok(None)
    }

    fn skip_line(&mut self, tokens: &[String], cursor: &mut Address) -> Result<()> {
        let state = &mut self.state;
        let word = match classify(tokens, |name| state.var.contains(name)) {
            Ok(Command::Keyword(word)) => word,
            _ => return Ok(()),
        };
        if let Some(construct) = word.opens() {
            return state.flow.nest(construct);
        }
        match state.flow.top().map(|frame| frame.construct) {
            Some(Construct::If) => branch::skip(state, word),
            Some(Construct::While) => looping::skip(state, word),
            Some(Construct::Method) => method::skip(state, word, cursor),
            None => Ok(()),
        }
    }

    pub fn position(&self) -> Point {
        self.pen.position
    }

    pub fn fill(&self) -> bool {
        self.pen.fill
    }

    pub fn color_name(&self) -> &'static str {
        self.pen.color.name()
    }

    pub fn status(&self) -> Status {
        self.pen.status()
    }

    pub fn variable(&self, name: &str) -> Option<i32> {
        self.state.var.fetch(name)
    }

    pub fn variables(&self) -> Vec<(&str, i32)> {
        self.state.var.globals()
    }

    pub fn method(&self, name: &str) -> Option<&Method> {
        self.state.methods.get(name)
    }

    pub fn methods(&self) -> Vec<&str> {
        self.state.methods.names()
    }

    pub fn is_suspended(&self) -> bool {
        self.state.flow.is_suspended()
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Clears the surface and returns pen and state to their defaults.
    pub fn reset(&mut self) {
        self.surface.clear();
        self.pen.reset();
        self.state.clear();
    }

    #[cfg(test)]
    pub(crate) fn state(&self) -> &State {
        &self.state
    }
}

fn annotate(error: Error, index: Address, line: &Line) -> Error {
    if error.line_number().is_some() {
        return error;
    }
    error
        .in_line_number(Some(index.saturating_add(1)))
        .in_line(line.text())
}

fn check(state: &State, command: Command, tokens: &[String]) -> Result<()> {
    match command {
        Command::Assign => assign::validate(tokens).map(|_| ()),
        Command::Call => method::validate_call(state, tokens).map(|_| ()),
        Command::Keyword(word) => match word {
            Word::If => branch::validate(tokens).map(|_| ()),
            Word::While => looping::validate(tokens).map(|_| ()),
            Word::EndIf | Word::EndWhile | Word::EndMethod => branch::check_closer(word, tokens),
            Word::Method => method::validate_definition(state, tokens, Address::MAX).map(|_| ()),
            _ => Simple::parse(word, tokens).map(|_| ()),
        },
    }
}

/// One line of the validation pass, recording what later lines may use.
fn declare(state: &mut State, line: &Line, index: Address) -> Result<()> {
    if line.is_empty() {
        return Ok(());
    }
    let tokens = line.tokens();
    let command = classify(tokens, |name| state.var.contains(name))?;
    let tokens = state.substitute(tokens, command)?;
    match command {
        Command::Assign => assign::declare(state, &tokens),
        Command::Keyword(Word::Method) => method::declare(state, &tokens, index),
        Command::Keyword(Word::EndMethod) => method::undeclare(state, &tokens, index),
        _ => check(state, command, &tokens),
    }
}
