use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

/// ## Stack enforced and size limited vector

pub struct Stack<T> {
    overflow_message: &'static str,
    limit: usize,
    vec: Vec<T>,
}

impl<T: std::fmt::Debug> std::fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self.vec)
    }
}

impl<T> Stack<T> {
    pub fn new(overflow_message: &'static str) -> Stack<T> {
        Stack::with_limit(overflow_message, u16::max_value() as usize)
    }
    pub fn with_limit(overflow_message: &'static str, limit: usize) -> Stack<T> {
        Stack {
            overflow_message,
            limit,
            vec: vec![],
        }
    }
    fn overflow_check(&self) -> Result<()> {
        if self.vec.len() > self.limit {
            Err(error!(OutOfMemory; self.overflow_message))
        } else {
            Ok(())
        }
    }
    fn underflow_error(&self) -> Error {
        error!(InternalError; "UNDERFLOW")
    }
    pub fn clear(&mut self) {
        self.vec.clear()
    }
    pub fn len(&self) -> usize {
        self.vec.len()
    }
    pub fn is_empty(&self) -> bool {
        self.vec.is_empty()
    }
    pub fn last(&self) -> Option<&T> {
        self.vec.last()
    }
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.vec.last_mut()
    }
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.vec.iter()
    }
    pub fn push(&mut self, val: T) -> Result<()> {
        self.vec.push(val);
        if let Err(e) = self.overflow_check() {
            self.vec.pop();
            return Err(e);
        }
        Ok(())
    }
    /// Drops entries above `len`.
    pub fn truncate(&mut self, len: usize) {
        self.vec.truncate(len)
    }
    pub fn pop(&mut self) -> Result<T> {
        match self.vec.pop() {
            Some(v) => Ok(v),
            None => Err(self.underflow_error()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::ErrorCode;

    #[test]
    fn test_overflow() {
        let mut s: Stack<u8> = Stack::with_limit("TOO DEEP", 2);
        assert!(s.push(1).is_ok());
        assert!(s.push(2).is_ok());
        let e = s.push(3).unwrap_err();
        assert!(e.is(ErrorCode::OutOfMemory));
        assert_eq!(e.to_string(), "OUT OF MEMORY; TOO DEEP");
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_truncate() {
        let mut s: Stack<u8> = Stack::new("");
        for i in 0..5 {
            s.push(i).unwrap();
        }
        s.truncate(2);
        assert_eq!(s.len(), 2);
        assert_eq!(s.last(), Some(&1));
        s.truncate(4);
        assert_eq!(s.len(), 2);
    }

    #[test]
    fn test_underflow() {
        let mut s: Stack<u8> = Stack::new("");
        assert!(s.pop().unwrap_err().is(ErrorCode::InternalError));
    }
}
