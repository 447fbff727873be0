use serde::{Deserialize, Serialize};

use super::shape::Shape;
use super::types::Position;
use super::utils::LABEL_OFFSET;
use crate::canvas::Canvas;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    #[serde(flatten)]
    pub position: Position,
    pub width: u32,
    pub height: u32,
}

impl Rectangle {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            position: Position::new(x, y),
            width,
            height,
        }
    }
}

impl Shape for Rectangle {
    fn name(&self) -> &'static str {
        "Rectangle"
    }

    fn position(&self) -> &Position {
        &self.position
    }

    fn position_mut(&mut self) -> &mut Position {
        &mut self.position
    }

    fn area(&self) -> f64 {
        f64::from(self.width) * f64::from(self.height)
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        let left = f64::from(self.x());
        let top = f64::from(self.y());
        canvas.outline_rect(left, top, f64::from(self.width), f64::from(self.height));
        canvas.label(left, top - LABEL_OFFSET, &self.describe());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::{DrawCommand, RecordingCanvas};

    #[test]
    fn test_area() {
        assert_eq!(Rectangle::new(0, 0, 3, 4).area(), 12.0);
        assert_eq!(Rectangle::new(0, 0, 0, 10).area(), 0.0);
        // u32::MAX² passt nicht in u32, aber in f64
        let big = Rectangle::new(0, 0, u32::MAX, u32::MAX).area();
        assert_eq!(big, f64::from(u32::MAX) * f64::from(u32::MAX));
    }

    #[test]
    fn test_describe() {
        assert_eq!(Rectangle::new(3, 4, 10, 20).describe(), "Rectangle(x=3,y=4)");
    }

    #[test]
    fn test_draw_anchored_top_left() {
        let rect = Rectangle::new(10, -5, 30, 20);
        let mut canvas = RecordingCanvas::new();
        rect.draw(&mut canvas);

        assert_eq!(
            canvas.commands(),
            &[
                DrawCommand::Rect { left: 10.0, top: -5.0, width: 30.0, height: 20.0 },
                DrawCommand::Label {
                    x: 10.0,
                    y: -5.0 - LABEL_OFFSET,
                    text: "Rectangle(x=10,y=-5)".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_move_keeps_size() {
        let mut rect = Rectangle::new(1, 1, 7, 8);
        rect.move_to(-100, 200);
        assert_eq!(rect, Rectangle::new(-100, 200, 7, 8));
    }
}
