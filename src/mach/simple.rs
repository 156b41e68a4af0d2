use super::{Color, Pen, Point, Rect, Surface};
use crate::error;
use crate::lang::{parse_int, Error, Word};

type Result<T> = std::result::Result<T, Error>;

const DEFAULT_TEXT_SIZE: i32 = 12;

/// ## Drawing commands
///
/// Parsing checks everything up front so that a command which
/// parses can always be applied.

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Simple {
    Move(Point),
    Draw(i32, Option<i32>),
    Circle(i32),
    Rectangle(i32, i32),
    Triangle(i32, i32),
    Color(Color),
    Fill(bool),
    Clear,
    Reset,
    Write(i32, String),
}

impl Simple {
    pub fn parse(word: Word, tokens: &[String]) -> Result<Simple> {
        let args = tokens.get(1..).unwrap_or(&[]);
        match word {
            Word::Move => {
                arity(word, args, 2, 2)?;
                Ok(Simple::Move(Point::new(int(&args[0])?, int(&args[1])?)))
            }
            Word::Draw => {
                arity(word, args, 1, 2)?;
                let y = match args.get(1) {
                    Some(y) => Some(int(y)?),
                    None => None,
                };
                Ok(Simple::Draw(int(&args[0])?, y))
            }
            Word::Circle => {
                arity(word, args, 1, 1)?;
                Ok(Simple::Circle(size(&args[0], "RADIUS")?))
            }
            Word::Rectangle => {
                arity(word, args, 2, 2)?;
                Ok(Simple::Rectangle(
                    size(&args[0], "WIDTH")?,
                    size(&args[1], "HEIGHT")?,
                ))
            }
            Word::Triangle => {
                arity(word, args, 2, 2)?;
                Ok(Simple::Triangle(
                    size(&args[0], "BASE")?,
                    size(&args[1], "HEIGHT")?,
                ))
            }
            Word::Color => {
                arity(word, args, 1, 1)?;
                match Color::from_word(&args[0]) {
                    Some(color) => Ok(Simple::Color(color)),
                    None => Err(error!(SyntaxError; "EXPECTED BLACK, BLUE, RED OR GREEN")),
                }
            }
            Word::Fill => {
                arity(word, args, 1, 1)?;
                match args[0].to_ascii_uppercase().as_str() {
                    "ON" => Ok(Simple::Fill(true)),
                    "OFF" => Ok(Simple::Fill(false)),
                    _ => Err(error!(SyntaxError; "EXPECTED ON OR OFF")),
                }
            }
            Word::Clear => {
                arity(word, args, 0, 0)?;
                Ok(Simple::Clear)
            }
            Word::Reset => {
                arity(word, args, 0, 0)?;
                Ok(Simple::Reset)
            }
            Word::Write => {
                arity(word, args, 1, 2)?;
                if args.len() == 2 {
                    Ok(Simple::Write(size(&args[0], "SIZE")?, quoted(&args[1])?))
                } else if let Some(n) = parse_int(&args[0]) {
                    Ok(Simple::Write(DEFAULT_TEXT_SIZE, n.to_string()))
                } else {
                    Ok(Simple::Write(DEFAULT_TEXT_SIZE, quoted(&args[0])?))
                }
            }
            _ => Err(error!(InternalError; &format!("{} IS NOT A DRAWING COMMAND", word))),
        }
    }

    pub fn apply<S: Surface>(&self, pen: &mut Pen, surface: &mut S) {
        let at = pen.position;
        match self {
            Simple::Move(to) => {
                pen.position = *to;
                surface.move_to(*to);
            }
            Simple::Draw(x, y) => {
                let to = Point::new(*x, y.unwrap_or(at.y));
                surface.line_to(at, to, pen.color);
                pen.position = to;
            }
            Simple::Circle(r) => {
                let bounds = Rect::new(
                    at.x.saturating_sub(*r),
                    at.y.saturating_sub(*r),
                    r.saturating_mul(2),
                    r.saturating_mul(2),
                );
                surface.ellipse(bounds, pen.color, pen.fill);
            }
            Simple::Rectangle(w, h) => {
                surface.rectangle(Rect::new(at.x, at.y, *w, *h), pen.color, pen.fill);
            }
            Simple::Triangle(b, h) => {
                let points = [
                    at,
                    Point::new(at.x.saturating_add(*b), at.y),
                    Point::new(at.x.saturating_add(b / 2), at.y.saturating_sub(*h)),
                ];
                surface.polygon(&points, pen.color, pen.fill);
            }
            Simple::Color(color) => pen.color = *color,
            Simple::Fill(fill) => pen.fill = *fill,
            Simple::Clear => surface.clear(),
            Simple::Reset => pen.reset(),
            Simple::Write(size, text) => surface.text(at, *size, text, pen.color),
        }
    }
}

fn arity(word: Word, args: &[String], min: usize, max: usize) -> Result<()> {
    if args.len() < min || args.len() > max {
        let msg = match (min, max) {
            (0, 0) => format!("{} TAKES NO ARGUMENTS", word),
            (a, b) if a == b => format!("{} EXPECTS {} ARGUMENTS", word, a),
            (a, b) => format!("{} EXPECTS {} TO {} ARGUMENTS", word, a, b),
        };
        return Err(error!(SyntaxError; &msg));
    }
    Ok(())
}

fn int(s: &str) -> Result<i32> {
    match parse_int(s) {
        Some(i) => Ok(i),
        None => Err(error!(TypeMismatch; &format!("{} IS NOT AN INTEGER", s))),
    }
}

fn size(s: &str, what: &str) -> Result<i32> {
    let i = int(s)?;
    if i <= 0 {
        return Err(error!(IllegalFunctionCall; &format!("{} MUST BE POSITIVE", what)));
    }
    Ok(i)
}

fn quoted(s: &str) -> Result<String> {
    if s.len() >= 2 && s.starts_with('"') && s.ends_with('"') {
        Ok(s[1..s.len() - 1].to_string())
    } else {
        Err(error!(SyntaxError; "TEXT MUST BE QUOTED"))
    }
}
