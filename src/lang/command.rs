use super::{is_valid_name, Error};

type Result<T> = std::result::Result<T, Error>;

/// ## Command keywords

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Word {
    Move,
    Draw,
    Circle,
    Rectangle,
    Triangle,
    Color,
    Fill,
    Clear,
    Reset,
    Write,
    If,
    EndIf,
    While,
    EndWhile,
    Method,
    EndMethod,
}

const WORDS: &[Word] = &[
    Word::Move,
    Word::Draw,
    Word::Circle,
    Word::Rectangle,
    Word::Triangle,
    Word::Color,
    Word::Fill,
    Word::Clear,
    Word::Reset,
    Word::Write,
    Word::If,
    Word::EndIf,
    Word::While,
    Word::EndWhile,
    Word::Method,
    Word::EndMethod,
];

impl Word {
    /// Keywords are case-sensitive.
    pub fn from_keyword(s: &str) -> Option<Word> {
        WORDS.iter().copied().find(|w| w.keyword() == s)
    }

    pub fn keyword(self) -> &'static str {
        use Word::*;
        match self {
            Move => "MOVE",
            Draw => "DRAW",
            Circle => "CIRCLE",
            Rectangle => "RECTANGLE",
            Triangle => "TRIANGLE",
            Color => "COLOR",
            Fill => "FILL",
            Clear => "CLEAR",
            Reset => "RESET",
            Write => "WRITE",
            If => "IF",
            EndIf => "ENDIF",
            While => "WHILE",
            EndWhile => "ENDWHILE",
            Method => "METHOD",
            EndMethod => "ENDMETHOD",
        }
    }

    pub fn is_special(self) -> bool {
        self.opens().is_some() || self.closes().is_some()
    }

    pub fn opens(self) -> Option<Construct> {
        match self {
            Word::If => Some(Construct::If),
            Word::While => Some(Construct::While),
            Word::Method => Some(Construct::Method),
            _ => None,
        }
    }

    pub fn closes(self) -> Option<Construct> {
        match self {
            Word::EndIf => Some(Construct::If),
            Word::EndWhile => Some(Construct::While),
            Word::EndMethod => Some(Construct::Method),
            _ => None,
        }
    }

    /// COLOR and FILL take words, not values.
    pub fn substitutes(self) -> bool {
        !matches!(self, Word::Color | Word::Fill)
    }
}

impl std::fmt::Display for Word {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.keyword())
    }
}

/// ## Block constructs tracked by the control-flow stack

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Construct {
    If,
    While,
    Method,
}

impl std::fmt::Display for Construct {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Construct::If => write!(f, "IF"),
            Construct::While => write!(f, "WHILE"),
            Construct::Method => write!(f, "METHOD"),
        }
    }
}

/// ## Classified line

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// `name = value [op value]`
    Assign,
    /// `name(args)`
    Call,
    Keyword(Word),
}

impl Command {
    pub fn is_special(self) -> bool {
        match self {
            Command::Assign | Command::Call => true,
            Command::Keyword(word) => word.is_special(),
        }
    }

    pub fn word(self) -> Option<Word> {
        match self {
            Command::Keyword(word) => Some(word),
            _ => None,
        }
    }
}

pub fn is_assignment_shape(tokens: &[String]) -> bool {
    (3..=5).contains(&tokens.len()) && is_valid_name(&tokens[0]) && tokens[1] == "="
}

pub fn is_call_shape(tokens: &[String]) -> bool {
    if tokens.len() != 1 {
        return false;
    }
    match (tokens[0].find('('), tokens[0].find(')')) {
        (Some(open), Some(close)) => open < close,
        _ => false,
    }
}

/// Decide what kind of command a tokenized line holds.
/// `is_variable` reports whether a name is currently bound.
pub fn classify<F>(tokens: &[String], is_variable: F) -> Result<Command>
where
    F: Fn(&str) -> bool,
{
    let first = match tokens.first() {
        Some(first) => first,
        None => return Err(error!(InternalError; "EMPTY LINE")),
    };
    if is_variable(first.as_str()) || is_assignment_shape(tokens) {
        return Ok(Command::Assign);
    }
    if is_call_shape(tokens) {
        return Ok(Command::Call);
    }
    if let Some(word) = Word::from_keyword(first) {
        return Ok(Command::Keyword(word));
    }
    if Word::from_keyword(&first.to_ascii_uppercase()).is_some() {
        return Err(error!(SyntaxError; "COMMANDS MUST BE UPPERCASE"));
    }
    Err(error!(UnsupportedCommand; &format!("{} IS NOT A COMMAND", first)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lang::{ErrorCode, Line};

    fn classify_str(s: &str) -> Result<Command> {
        let line = Line::new(s);
        classify(line.tokens(), |name| name == "count")
    }

    #[test]
    fn test_keywords() {
        assert_eq!(
            classify_str("CIRCLE 10"),
            Ok(Command::Keyword(Word::Circle))
        );
        assert_eq!(
            classify_str("ENDMETHOD"),
            Ok(Command::Keyword(Word::EndMethod))
        );
    }

    #[test]
    fn test_assignment() {
        assert_eq!(classify_str("x = 5"), Ok(Command::Assign));
        assert_eq!(classify_str("x = 5 + y"), Ok(Command::Assign));
        assert_eq!(classify_str("count 5"), Ok(Command::Assign));
    }

    #[test]
    fn test_call() {
        assert_eq!(classify_str("Square(10,20)"), Ok(Command::Call));
        assert_eq!(classify_str("Square()"), Ok(Command::Call));
        assert!(classify_str("Square)(").is_err());
    }

    #[test]
    fn test_lowercase_keyword() {
        let e = classify_str("circle 10").unwrap_err();
        assert!(e.is(ErrorCode::SyntaxError));
    }

    #[test]
    fn test_unsupported() {
        let e = classify_str("PRINT 10").unwrap_err();
        assert!(e.is(ErrorCode::UnsupportedCommand));
    }

    #[test]
    fn test_special_words() {
        assert!(Command::Keyword(Word::EndWhile).is_special());
        assert!(!Command::Keyword(Word::Draw).is_special());
        assert_eq!(Word::EndIf.closes(), Some(Construct::If));
        assert!(!Word::Fill.substitutes());
    }
}
