use super::branch::{check_closer, Condition};
use super::{Address, Mode, State};
use crate::lang::{Construct, Error, Word};
use tracing::debug;

type Result<T> = std::result::Result<T, Error>;

pub fn validate(tokens: &[String]) -> Result<Condition> {
    Condition::parse(Word::While, tokens)
}

pub fn apply(state: &mut State, tokens: &[String], cursor: Address) -> Result<()> {
    if validate(tokens)?.eval() {
        state.flow.push(Construct::While, Mode::Executing)?;
        state.flow.push_loop(Some(cursor))
    } else {
        state.flow.push(Construct::While, Mode::Skipping)?;
        state.flow.push_loop(None)
    }
}

/// ENDWHILE with nothing suspended. Moves the cursor to just before
/// the header so the next step evaluates the condition again.
pub fn end(state: &mut State, tokens: &[String], cursor: &mut Address) -> Result<()> {
    check_closer(Word::EndWhile, tokens)?;
    if state.flow.pop_if(Construct::While)?.is_none() {
        return Ok(());
    }
    if let Some(header) = state.flow.pop_loop()?.rewind {
        debug!(header = header + 1, "loop");
        *cursor = header.wrapping_sub(1);
    }
    Ok(())
}

/// A line met while the top WHILE frame is not executing.
pub fn skip(state: &mut State, word: Word) -> Result<()> {
    if word != Word::EndWhile {
        return Ok(());
    }
    if let Some(frame) = state.flow.pop_if(Construct::While)? {
        if frame.mode == Mode::Skipping {
            state.flow.pop_loop()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::Line;

    #[test]
    fn test_false_loop_leaves_no_frames() {
        let mut state = State::default();
        apply(&mut state, Line::new("WHILE 1 > 2").tokens(), 4).unwrap();
        assert!(state.flow.is_suspended());
        skip(&mut state, Word::EndWhile).unwrap();
        assert_eq!(state.flow.depth(), 0);
        assert_eq!(state.flow.loop_depth(), 0);
    }

    #[test]
    fn test_nested_frame_owns_no_loop() {
        let mut state = State::default();
        apply(&mut state, Line::new("WHILE 1 > 2").tokens(), 0).unwrap();
        state.flow.nest(Construct::While).unwrap();
        skip(&mut state, Word::EndWhile).unwrap();
        assert_eq!(state.flow.loop_depth(), 1);
        skip(&mut state, Word::EndWhile).unwrap();
        assert_eq!(state.flow.loop_depth(), 0);
    }
}
