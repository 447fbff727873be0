// Grundlegende Datenstrukturen für die Geometrie
// Koordinaten sind ganzzahlige Canvas-Einheiten (i32), Abmessungen u32

use serde::{Deserialize, Serialize};

/// Ankerpunkt einer Form (linke obere Ecke)
/// Wird von allen Formen eingebettet und enthält die gemeinsame Verschiebe-Logik
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    x: i32,
    y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Überschreibt beide Koordinaten, ohne Prüfung
    pub fn move_to(&mut self, x: i32, y: i32) {
        self.x = x;
        self.y = y;
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn set_x(&mut self, x: i32) {
        self.x = x;
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn set_y(&mut self, y: i32) {
        self.y = y;
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}
