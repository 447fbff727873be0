// Zeichnung: geordnete Sammlung von Formen
// Speichern/Laden als JSON, Zeichnen über die Canvas-Schnittstelle

use std::fmt;
use std::fs;
use std::path::Path;

use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};

use crate::canvas::Canvas;
use crate::error::{DrawingError, Result};
use crate::geometry::{AnyShape, Shape};

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Drawing {
    shapes: Vec<AnyShape>,
}

impl Drawing {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hängt eine Form an und gibt ihren Index zurück
    pub fn add(&mut self, shape: impl Into<AnyShape>) -> usize {
        let shape = shape.into();
        tracing::debug!(shape = %shape, area = shape.area(), "Form hinzugefügt");
        self.shapes.push(shape);
        self.shapes.len() - 1
    }

    pub fn remove(&mut self, index: usize) -> Result<AnyShape> {
        self.check_index(index)?;
        let shape = self.shapes.remove(index);
        tracing::debug!(index, shape = %shape, "Form entfernt");
        Ok(shape)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&AnyShape> {
        self.shapes.get(index)
    }

    pub fn shapes(&self) -> &[AnyShape] {
        &self.shapes
    }

    /// Verschiebt die Form mit dem Index auf (x, y)
    pub fn move_shape(&mut self, index: usize, x: i32, y: i32) -> Result<()> {
        self.check_index(index)?;
        let shape = &mut self.shapes[index];
        let from = shape.describe();
        shape.move_to(x, y);
        tracing::debug!(index, from = %from, to = %shape, "Form verschoben");
        Ok(())
    }

    pub fn total_area(&self) -> f64 {
        self.shapes.iter().map(Shape::area).sum()
    }

    /// Eine Zeile `Name(x=..,y=..)` pro Form
    pub fn describe_all(&self) -> Vec<String> {
        self.shapes.iter().map(Shape::describe).collect()
    }

    pub fn draw_all(&self, canvas: &mut dyn Canvas) {
        for shape in &self.shapes {
            shape.draw(canvas);
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Schreibt die Zeichnung; fehlende Verzeichnisse werden angelegt
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|source| DrawingError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let json = self.to_json()?;
        fs::write(path, json).map_err(|source| DrawingError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        tracing::info!(path = %path.display(), shapes = self.len(), "Zeichnung gespeichert");
        Ok(())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let json = fs::read_to_string(path).map_err(|source| DrawingError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let drawing = Self::from_json(&json)?;

        tracing::info!(path = %path.display(), shapes = drawing.len(), "Zeichnung geladen");
        Ok(drawing)
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.shapes.len() {
            Ok(())
        } else {
            Err(DrawingError::ShapeNotFound {
                index,
                len: self.shapes.len(),
            })
        }
    }
}

impl FromIterator<AnyShape> for Drawing {
    fn from_iter<I: IntoIterator<Item = AnyShape>>(iter: I) -> Self {
        Self {
            shapes: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Drawing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.describe_all() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}

/// Dateiname mit aktuellem Zeitstempel, z.B. `drawing_20261018_090503.json`
pub fn default_file_name() -> String {
    file_name_for(&chrono::Local::now())
}

pub fn file_name_for<Tz: TimeZone>(time: &DateTime<Tz>) -> String
where
    Tz::Offset: fmt::Display,
{
    format!("drawing_{}.json", time.format("%Y%m%d_%H%M%S"))
}
