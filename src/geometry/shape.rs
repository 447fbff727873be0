// Gemeinsame Schnittstelle aller Formen

use std::fmt;

use super::types::Position;
use crate::canvas::Canvas;

/// Jede Form hat einen Ankerpunkt (linke obere Ecke), eine Fläche und kann
/// sich selbst zeichnen.
///
/// `area`, `draw` und `name` muss jede Form selbst liefern. Verschieben und
/// die Koordinaten-Zugriffe kommen über den eingebetteten [`Position`].
///
/// ```
/// use cad_shapes::canvas::Canvas;
/// use cad_shapes::geometry::{Position, Shape};
///
/// struct Dot {
///     position: Position,
/// }
///
/// impl Shape for Dot {
///     fn name(&self) -> &'static str { "Dot" }
///     fn position(&self) -> &Position { &self.position }
///     fn position_mut(&mut self) -> &mut Position { &mut self.position }
///     fn area(&self) -> f64 { 0.0 }
///     fn draw(&self, canvas: &mut dyn Canvas) {
///         canvas.label(self.x() as f64, self.y() as f64, ".");
///     }
/// }
///
/// let mut dot = Dot { position: Position::new(1, 2) };
/// dot.move_to(8, 9);
/// assert_eq!(dot.describe(), "Dot(x=8,y=9)");
/// ```
///
/// Die Schnittstelle selbst lässt sich nicht instanziieren:
///
/// ```compile_fail
/// use cad_shapes::geometry::Shape;
///
/// let shape = Shape { x: 1, y: 2 };
/// ```
///
/// Ohne `draw` wird eine Form nicht übersetzt:
///
/// ```compile_fail
/// use cad_shapes::geometry::{Position, Shape};
///
/// struct Dot {
///     position: Position,
/// }
///
/// impl Shape for Dot {
///     fn name(&self) -> &'static str { "Dot" }
///     fn position(&self) -> &Position { &self.position }
///     fn position_mut(&mut self) -> &mut Position { &mut self.position }
///     fn area(&self) -> f64 { 0.0 }
/// }
/// ```
///
/// Ebenso ohne `area`:
///
/// ```compile_fail
/// use cad_shapes::canvas::Canvas;
/// use cad_shapes::geometry::{Position, Shape};
///
/// struct Dot {
///     position: Position,
/// }
///
/// impl Shape for Dot {
///     fn name(&self) -> &'static str { "Dot" }
///     fn position(&self) -> &Position { &self.position }
///     fn position_mut(&mut self) -> &mut Position { &mut self.position }
///     fn draw(&self, _canvas: &mut dyn Canvas) {}
/// }
/// ```
pub trait Shape {
    /// Name der konkreten Form, z.B. "Rectangle"
    fn name(&self) -> &'static str;

    fn position(&self) -> &Position;

    fn position_mut(&mut self) -> &mut Position;

    /// Fläche in Canvas-Einheiten²
    fn area(&self) -> f64;

    fn draw(&self, canvas: &mut dyn Canvas);

    fn move_to(&mut self, x: i32, y: i32) {
        self.position_mut().move_to(x, y);
    }

    fn x(&self) -> i32 {
        self.position().x()
    }

    fn set_x(&mut self, x: i32) {
        self.position_mut().set_x(x);
    }

    fn y(&self) -> i32 {
        self.position().y()
    }

    fn set_y(&mut self, y: i32) {
        self.position_mut().set_y(y);
    }

    /// Format: `Name(x=..,y=..)`
    fn describe(&self) -> String {
        format!("{}(x={},y={})", self.name(), self.x(), self.y())
    }
}

impl fmt::Display for dyn Shape + '_ {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
