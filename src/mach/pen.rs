use super::Point;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
    Black,
    Blue,
    Red,
    Green,
}

impl Default for Color {
    fn default() -> Color {
        Color::Black
    }
}

impl Color {
    /// Color words are accepted in any case.
    pub fn from_word(word: &str) -> Option<Color> {
        match word.to_ascii_uppercase().as_str() {
            "BLACK" => Some(Color::Black),
            "BLUE" => Some(Color::Blue),
            "RED" => Some(Color::Red),
            "GREEN" => Some(Color::Green),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "Black",
            Color::Blue => "Blue",
            Color::Red => "Red",
            Color::Green => "Green",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// ## Drawing cursor

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Pen {
    pub position: Point,
    pub color: Color,
    pub fill: bool,
}

impl Pen {
    pub fn reset(&mut self) {
        *self = Pen::default();
    }

    pub fn status(&self) -> Status {
        Status {
            position: self.position,
            fill: self.fill,
            color: self.color,
        }
    }
}

/// Snapshot of the pen for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    pub position: Point,
    pub fill: bool,
    pub color: Color,
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(
            f,
            "Position: {{X={}, Y={}}}",
            self.position.x, self.position.y
        )?;
        writeln!(f, "Fill: {}", if self.fill { "ON" } else { "OFF" })?;
        write!(f, "Color: {}", self.color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status() {
        let mut pen = Pen::default();
        assert_eq!(
            pen.status().to_string(),
            "Position: {X=0, Y=0}\nFill: OFF\nColor: Black"
        );
        pen.position = Point::new(3, -4);
        pen.fill = true;
        pen.color = Color::Green;
        assert_eq!(
            pen.status().to_string(),
            "Position: {X=3, Y=-4}\nFill: ON\nColor: Green"
        );
        pen.reset();
        assert_eq!(pen, Pen::default());
    }

    #[test]
    fn test_color_words() {
        assert_eq!(Color::from_word("red"), Some(Color::Red));
        assert_eq!(Color::from_word("BLUE"), Some(Color::Blue));
        assert_eq!(Color::from_word("purple"), None);
    }
}
