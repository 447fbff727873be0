//! Formen mit gemeinsamer Verschiebe-Logik und polymorpher Fläche/Zeichnung.
//!
//! [`geometry::Shape`] ist die Schnittstelle, [`geometry::Rectangle`] und
//! [`geometry::Circle`] die konkreten Formen. [`drawing::Drawing`] sammelt
//! Formen, speichert sie als JSON und zeichnet sie auf einen [`canvas::Canvas`].

pub mod canvas;
pub mod config;
pub mod drawing;
pub mod error;
pub mod geometry;

pub use error::{DrawingError, Result};
