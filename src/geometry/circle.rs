use std::f64::consts::PI;

use serde::{Deserialize, Serialize};

use super::shape::Shape;
use super::types::Position;
use super::utils::LABEL_OFFSET;
use crate::canvas::Canvas;

/// Kreis, verankert an der linken oberen Ecke seines umschließenden Quadrats
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    #[serde(flatten)]
    pub position: Position,
    pub radius: u32,
}

impl Circle {
    pub fn new(x: i32, y: i32, radius: u32) -> Self {
        Self {
            position: Position::new(x, y),
            radius,
        }
    }

    /// Mittelpunkt als Float (x + r kann i32 überschreiten)
    pub fn center(&self) -> (f64, f64) {
        let r = f64::from(self.radius);
        (f64::from(self.x()) + r, f64::from(self.y()) + r)
    }
}

impl Shape for Circle {
    fn name(&self) -> &'static str {
        "Circle"
    }

    fn position(&self) -> &Position {
        &self.position
    }

    fn position_mut(&mut self) -> &mut Position {
        &mut self.position
    }

    fn area(&self) -> f64 {
        let r = f64::from(self.radius);
        PI * r * r
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        let (center_x, center_y) = self.center();
        canvas.outline_circle(center_x, center_y, f64::from(self.radius));
        canvas.label(
            f64::from(self.x()),
            f64::from(self.y()) - LABEL_OFFSET,
            &self.describe(),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, RecordingCanvas};

    #[test]
    fn test_area() {
        assert!((Circle::new(0, 0, 1).area() - PI).abs() < 1e-12);
        assert!((Circle::new(0, 0, 10).area() - 100.0 * PI).abs() < 1e-9);
        assert_eq!(Circle::new(0, 0, 0).area(), 0.0);
    }

    #[test]
    fn test_center_does_not_overflow() {
        let circle = Circle::new(i32::MAX, i32::MAX, u32::MAX);
        let (cx, cy) = circle.center();
        assert_eq!(cx, f64::from(i32::MAX) + f64::from(u32::MAX));
        assert_eq!(cx, cy);
    }

    #[test]
    fn test_draw_centered_in_bounding_square() {
        let circle = Circle::new(10, 20, 5);
        let mut canvas = RecordingCanvas::new();
        circle.draw(&mut canvas);

        let commands = canvas.into_commands();
        assert_eq!(
            commands[0],
            DrawCommand::Circle { center_x: 15.0, center_y: 25.0, radius: 5.0 }
        );
        assert!(matches!(
            &commands[1],
            DrawCommand::Label { text, .. } if text == "Circle(x=10,y=20)"
        ));
    }
}
