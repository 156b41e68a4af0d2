use super::Color;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Point {
        Point { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{},{}", self.x, self.y)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Rect {
        Rect {
            x,
            y,
            width,
            height,
        }
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{},{} {}x{}", self.x, self.y, self.width, self.height)
    }
}

/// ## Drawing surface
///
/// Whatever renders the picture. The engine never reads back from it.

pub trait Surface {
    fn move_to(&mut self, to: Point);
    fn line_to(&mut self, from: Point, to: Point, color: Color);
    fn ellipse(&mut self, bounds: Rect, color: Color, fill: bool);
    fn rectangle(&mut self, bounds: Rect, color: Color, fill: bool);
    fn polygon(&mut self, points: &[Point], color: Color, fill: bool);
    fn text(&mut self, at: Point, size: i32, text: &str, color: Color);
    fn clear(&mut self);
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Primitive {
    Move(Point),
    Line(Point, Point, Color),
    Ellipse(Rect, Color, bool),
    Rectangle(Rect, Color, bool),
    Polygon(Vec<Point>, Color, bool),
    Text(Point, i32, String, Color),
    Clear,
}

fn fill_str(fill: bool) -> &'static str {
    if fill {
        " FILL"
    } else {
        ""
    }
}

impl std::fmt::Display for Primitive {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use Primitive::*;
        match self {
            Move(p) => write!(f, "MOVE {}", p),
            Line(from, to, c) => write!(f, "LINE {} {} {}", from, to, c),
            Ellipse(r, c, fill) => write!(f, "ELLIPSE {} {}{}", r, c, fill_str(*fill)),
            Rectangle(r, c, fill) => write!(f, "RECTANGLE {} {}{}", r, c, fill_str(*fill)),
            Polygon(points, c, fill) => {
                write!(f, "POLYGON")?;
                for p in points {
                    write!(f, " {}", p)?;
                }
                write!(f, " {}{}", c, fill_str(*fill))
            }
            Text(p, size, text, c) => write!(f, "TEXT {} {} {} {:?}", p, size, c, text),
            Clear => write!(f, "CLEAR"),
        }
    }
}

/// A surface that remembers what was drawn.
#[derive(Debug, Default, Clone)]
pub struct Recorder {
    primitives: Vec<Primitive>,
}

impl Recorder {
    pub fn new() -> Recorder {
        Recorder::default()
    }

    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Hands over everything recorded so far.
    pub fn take(&mut self) -> Vec<Primitive> {
        std::mem::take(&mut self.primitives)
    }
}

impl Surface for Recorder {
    fn move_to(&mut self, to: Point) {
        self.primitives.push(Primitive::Move(to));
    }
    fn line_to(&mut self, from: Point, to: Point, color: Color) {
        self.primitives.push(Primitive::Line(from, to, color));
    }
    fn ellipse(&mut self, bounds: Rect, color: Color, fill: bool) {
        self.primitives.push(Primitive::Ellipse(bounds, color, fill));
    }
    fn rectangle(&mut self, bounds: Rect, color: Color, fill: bool) {
        self.primitives
            .push(Primitive::Rectangle(bounds, color, fill));
    }
    fn polygon(&mut self, points: &[Point], color: Color, fill: bool) {
        self.primitives
            .push(Primitive::Polygon(points.to_vec(), color, fill));
    }
    fn text(&mut self, at: Point, size: i32, text: &str, color: Color) {
        self.primitives
            .push(Primitive::Text(at, size, text.to_string(), color));
    }
    fn clear(&mut self) {
        self.primitives.push(Primitive::Clear);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let mut r = Recorder::new();
        r.ellipse(Rect::new(-5, -5, 10, 10), Color::Red, true);
        r.polygon(
            &[Point::new(0, 0), Point::new(10, 0), Point::new(5, -8)],
            Color::Black,
            false,
        );
        r.text(Point::new(1, 2), 12, "hi there", Color::Blue);
        let lines: Vec<String> = r.primitives().iter().map(|p| p.to_string()).collect();
        assert_eq!(
            lines,
            vec![
                "ELLIPSE -5,-5 10x10 Red FILL",
                "POLYGON 0,0 10,0 5,-8 Black",
                "TEXT 1,2 12 Blue \"hi there\"",
            ]
        );
        assert_eq!(r.take().len(), 3);
        assert!(r.primitives().is_empty());
    }
}
