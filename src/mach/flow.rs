use super::{Address, Stack, CALL_LIMIT};
use crate::lang::{Construct, Error};

type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Executing,
    /// The frame's own header chose to skip its body.
    Skipping,
    /// Pushed inside a skipped block only to match its closer.
    Nested,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    pub construct: Construct,
    pub mode: Mode,
}

impl Frame {
    pub fn new(construct: Construct, mode: Mode) -> Frame {
        Frame { construct, mode }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoopFrame {
    /// Header line to return to, `None` when the condition was false.
    pub rewind: Option<Address>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallFrame {
    pub method: String,
    pub return_to: Address,
}

/// Stack heights at some earlier point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    frames: usize,
    loops: usize,
    calls: usize,
    definitions: usize,
}

/// ## Control flow state
///
/// Block frames for every unclosed IF, WHILE and METHOD, plus the loop,
/// call and definition stacks their handlers maintain.

#[derive(Debug)]
pub struct Flow {
    frames: Stack<Frame>,
    loops: Stack<LoopFrame>,
    calls: Stack<CallFrame>,
    definitions: Stack<String>,
}

impl Default for Flow {
    fn default() -> Flow {
        Flow {
            frames: Stack::new("BLOCKS TOO DEEPLY NESTED"),
            loops: Stack::new("LOOPS TOO DEEPLY NESTED"),
            calls: Stack::with_limit("CALL STACK OVERFLOW", CALL_LIMIT),
            definitions: Stack::new("METHODS TOO DEEPLY NESTED"),
        }
    }
}

impl Flow {
    pub fn clear(&mut self) {
        self.frames.clear();
        self.loops.clear();
        self.calls.clear();
        self.definitions.clear();
    }

    pub fn is_suspended(&self) -> bool {
        self.frames
            .last()
            .map_or(false, |frame| frame.mode != Mode::Executing)
    }

    pub fn top(&self) -> Option<Frame> {
        self.frames.last().copied()
    }

    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    pub fn push(&mut self, construct: Construct, mode: Mode) -> Result<()> {
        self.frames.push(Frame::new(construct, mode))
    }

    pub fn pop(&mut self) -> Result<Frame> {
        self.frames.pop()
    }

    /// Pops the top frame if it belongs to `construct`.
    pub fn pop_if(&mut self, construct: Construct) -> Result<Option<Frame>> {
        match self.top() {
            Some(frame) if frame.construct == construct => self.frames.pop().map(Some),
            _ => Ok(None),
        }
    }

    /// Depth tracking for an opener met inside a skipped block.
    pub fn nest(&mut self, construct: Construct) -> Result<()> {
        self.push(construct, Mode::Nested)
    }

    pub fn push_loop(&mut self, rewind: Option<Address>) -> Result<()> {
        self.loops.push(LoopFrame { rewind })
    }

    pub fn pop_loop(&mut self) -> Result<LoopFrame> {
        self.loops.pop()
    }

    pub fn loop_depth(&self) -> usize {
        self.loops.len()
    }

    pub fn push_call(&mut self, method: &str, return_to: Address) -> Result<()> {
        self.calls.push(CallFrame {
            method: method.to_string(),
            return_to,
        })
    }

    pub fn pop_call(&mut self) -> Result<CallFrame> {
        self.calls.pop()
    }

    pub fn call_depth(&self) -> usize {
        self.calls.len()
    }

    pub fn begin_definition(&mut self, name: &str) -> Result<()> {
        self.definitions.push(name.to_string())
    }

    pub fn end_definition(&mut self) -> Option<String> {
        self.definitions.pop().ok()
    }

    pub fn mark(&self) -> Mark {
        Mark {
            frames: self.frames.len(),
            loops: self.loops.len(),
            calls: self.calls.len(),
            definitions: self.definitions.len(),
        }
    }

    /// Drops every frame pushed since `mark` was taken.
    pub fn unwind(&mut self, mark: Mark) {
        self.frames.truncate(mark.frames);
        self.loops.truncate(mark.loops);
        self.calls.truncate(mark.calls);
        self.definitions.truncate(mark.definitions);
    }
}
