use super::LineNumber;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: u16,
    line_number: LineNumber,
    line: String,
    message: String,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
    };
    ($err:ident, $line:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).in_line_number($line)
    };
    ($err:ident; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err).message($msg)
    };
    ($err:ident, $line:expr; $msg:expr) => {
        $crate::lang::Error::new($crate::lang::ErrorCode::$err)
            .in_line_number($line)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code: code as u16,
            line_number: None,
            line: String::new(),
            message: String::new(),
        }
    }

    pub fn code(&self) -> u16 {
        self.code
    }

    pub fn is(&self, code: ErrorCode) -> bool {
        self.code == code as u16
    }

    pub fn line_number(&self) -> LineNumber {
        self.line_number
    }

    /// Text of the offending source line, empty when unknown.
    pub fn line(&self) -> &str {
        &self.line
    }

    pub fn in_line_number(mut self, line: LineNumber) -> Error {
        debug_assert!(self.line_number.is_none());
        self.line_number = line;
        self
    }

    pub fn in_line(mut self, text: &str) -> Error {
        self.line = text.trim().to_string();
        self
    }

    pub fn message(mut self, message: &str) -> Error {
        debug_assert!(self.message.is_empty());
        self.message = message.to_string();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    SyntaxError = 2,
    IllegalFunctionCall = 5,
    Overflow = 6,
    OutOfMemory = 7,
    DuplicateDefinition = 10,
    DivisionByZero = 11,
    TypeMismatch = 13,
    UndefinedMethod = 18,
    MissingOperand = 22,
    UnsupportedCommand = 24,
    UndefinedVariable = 25,
    InternalError = 51,
    FileNotFound = 53,
}

impl std::error::Error for Error {}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            2 => "SYNTAX ERROR",
            5 => "ILLEGAL FUNCTION CALL",
            6 => "OVERFLOW",
            7 => "OUT OF MEMORY",
            10 => "DUPLICATE DEFINITION",
            11 => "DIVISION BY ZERO",
            13 => "TYPE MISMATCH",
            18 => "UNDEFINED METHOD",
            22 => "MISSING OPERAND",
            24 => "UNSUPPORTED COMMAND",
            25 => "UNDEFINED VARIABLE",
            51 => "INTERNAL ERROR",
            53 => "FILE NOT FOUND",
            _ => "",
        };
        let mut place = String::new();
        if let Some(line_number) = self.line_number {
            place.push_str(&format!(" IN {}", line_number));
        }
        if !self.line.is_empty() {
            place.push_str(&format!(": {}", self.line));
        }
        if code_str.is_empty() {
            write!(f, "PROGRAM ERROR {}{}", self.code, place)?;
        } else {
            write!(f, "{}{}", code_str, place)?;
        }
        if !self.message.is_empty() {
            write!(f, "; {}", self.message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error;

    #[test]
    fn test_plain_code() {
        assert_eq!(error!(DivisionByZero).to_string(), "DIVISION BY ZERO");
    }

    #[test]
    fn test_line_and_message() {
        let e = error!(SyntaxError, Some(3); "RADIUS MUST BE POSITIVE").in_line("CIRCLE 0 ");
        assert_eq!(
            e.to_string(),
            "SYNTAX ERROR IN 3: CIRCLE 0; RADIUS MUST BE POSITIVE"
        );
        assert!(e.is(ErrorCode::SyntaxError));
        assert_eq!(e.line_number(), Some(3));
    }

    #[test]
    fn test_message_without_line() {
        let e = error!(UndefinedVariable; "COUNT IS NOT DEFINED");
        assert_eq!(e.to_string(), "UNDEFINED VARIABLE; COUNT IS NOT DEFINED");
    }
}
