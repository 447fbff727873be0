// Fehlertypen für Zeichnungsdateien und Konfiguration
// Die Formen selbst kennen keine Fehler

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DrawingError {
    #[error("Datei {} konnte nicht gelesen/geschrieben werden: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Ungültiges Zeichnungsformat: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Keine Form mit Index {index} (Zeichnung enthält {len} Formen)")]
    ShapeNotFound { index: usize, len: usize },

    #[error("Ungültige Konfiguration: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, DrawingError>;
