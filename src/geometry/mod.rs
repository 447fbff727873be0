// Haupt-Geometrie-Modul
// Exportiert die Form-Schnittstelle und alle konkreten Formen

pub mod any;
pub mod circle;
pub mod rectangle;
pub mod shape;
pub mod types;
pub mod utils;

// Re-exports für einfachen Zugriff
pub use any::AnyShape;
pub use circle::Circle;
pub use rectangle::Rectangle;
pub use shape::Shape;
pub use types::Position;
pub use utils::{format_area, format_with_comma, parse_coordinate, parse_dimension};
