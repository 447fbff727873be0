// Getaggte Sammelform für Speicherung und Serialisierung

use std::fmt;

use serde::{Deserialize, Serialize};

use super::circle::Circle;
use super::rectangle::Rectangle;
use super::shape::Shape;
use super::types::Position;
use crate::canvas::Canvas;

/// Eine beliebige konkrete Form; im JSON über das Feld `kind` unterschieden
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum AnyShape {
    Rectangle(Rectangle),
    Circle(Circle),
}

impl AnyShape {
    fn as_shape(&self) -> &dyn Shape {
        match self {
            AnyShape::Rectangle(r) => r,
            AnyShape::Circle(c) => c,
        }
    }

    fn as_shape_mut(&mut self) -> &mut dyn Shape {
        match self {
            AnyShape::Rectangle(r) => r,
            AnyShape::Circle(c) => c,
        }
    }
}

impl Shape for AnyShape {
    fn name(&self) -> &'static str {
        self.as_shape().name()
    }

    fn position(&self) -> &Position {
        self.as_shape().position()
    }

    fn position_mut(&mut self) -> &mut Position {
        self.as_shape_mut().position_mut()
    }

    fn area(&self) -> f64 {
        self.as_shape().area()
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        self.as_shape().draw(canvas)
    }
}

impl From<Rectangle> for AnyShape {
    fn from(rect: Rectangle) -> Self {
        AnyShape::Rectangle(rect)
    }
}

impl From<Circle> for AnyShape {
    fn from(circle: Circle) -> Self {
        AnyShape::Circle(circle)
    }
}

impl fmt::Display for AnyShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}
