/// ## A single source line
///
/// Tokens are separated by whitespace. A double-quoted run stays one token,
/// quotes included, so `WRITE "hello world"` has two tokens.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    text: String,
    tokens: Vec<String>,
}

impl Line {
    pub fn new(s: &str) -> Line {
        let text = s.trim_end_matches(|c| c == '\n' || c == '\r').to_string();
        let tokens = tokenize(&text);
        Line { text, tokens }
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

fn tokenize(s: &str) -> Vec<String> {
    let mut tokens = vec![];
    let mut chars = s.chars().peekable();
    while let Some(&ch) = chars.peek() {
        if ch.is_whitespace() {
            chars.next();
            continue;
        }
        let mut token = String::new();
        let mut quoted = false;
        while let Some(&ch) = chars.peek() {
            if ch.is_whitespace() && !quoted {
                break;
            }
            if ch == '"' {
                quoted = !quoted;
            }
            token.push(ch);
            chars.next();
        }
        tokens.push(token);
    }
    tokens
}

impl std::fmt::Display for Line {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.text.trim())
    }
}

/// ## An ordered list of source lines
///
/// Blank lines are kept so that line numbers in diagnostics
/// match the numbers an editor shows.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Program {
    lines: Vec<Line>,
}

impl Program {
    pub fn new(source: &str) -> Program {
        Program {
            lines: source.lines().map(Line::new).collect(),
        }
    }

    pub fn push(&mut self, line: Line) {
        self.lines.push(line)
    }

    pub fn clear(&mut self) {
        self.lines.clear()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Line> {
        self.lines.get(index)
    }

    pub fn lines(&self) -> std::slice::Iter<'_, Line> {
        self.lines.iter()
    }
}

impl std::str::FromStr for Program {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Program::new(s))
    }
}

impl std::fmt::Display for Program {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for line in &self.lines {
            writeln!(f, "{}", line.text)?;
        }
        Ok(())
    }
}
