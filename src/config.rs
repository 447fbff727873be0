// App-Konfiguration
// Standardwerte, überschreibbar per Umgebungsvariable

use std::path::PathBuf;

use crate::error::{DrawingError, Result};

/// Verzeichnis für gespeicherte Zeichnungen
pub const ENV_DRAWING_DIR: &str = "CAD_SHAPES_DIR";
/// Vollbild an/aus
pub const ENV_FULLSCREEN: &str = "CAD_SHAPES_FULLSCREEN";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub drawing_dir: PathBuf,
    pub fullscreen: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            drawing_dir: default_drawing_dir(),
            fullscreen: true,
        }
    }
}

impl AppConfig {
    /// Standardwerte plus Umgebungsvariablen
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Wie `from_env`, aber mit beliebiger Quelle für die Variablen
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(dir) = lookup(ENV_DRAWING_DIR) {
            let dir = dir.trim();
            if dir.is_empty() {
                return Err(DrawingError::Config(format!("{} ist leer", ENV_DRAWING_DIR)));
            }
            config.drawing_dir = PathBuf::from(dir);
        }

        if let Some(value) = lookup(ENV_FULLSCREEN) {
            config.fullscreen = parse_bool(&value).ok_or_else(|| {
                DrawingError::Config(format!(
                    "{}={:?} ist kein Wahrheitswert (1/0, true/false, yes/no, on/off)",
                    ENV_FULLSCREEN, value
                ))
            })?;
        }

        Ok(config)
    }

    pub fn with_drawing_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.drawing_dir = dir.into();
        self
    }

    pub fn with_fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }
}

fn default_drawing_dir() -> PathBuf {
    dirs::document_dir()
        .map(|docs| docs.join("cad-shapes"))
        .unwrap_or_else(|| PathBuf::from("."))
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_without_env() {
        let config = AppConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.fullscreen);
    }

    #[test]
    fn test_env_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            (ENV_DRAWING_DIR, "/tmp/zeichnungen"),
            (ENV_FULLSCREEN, "Off"),
        ]))
        .unwrap();
        assert_eq!(config.drawing_dir, PathBuf::from("/tmp/zeichnungen"));
        assert!(!config.fullscreen);
    }

    #[test]
    fn test_invalid_values() {
        let err = AppConfig::from_lookup(lookup_from(&[(ENV_FULLSCREEN, "vielleicht")]));
        assert!(matches!(err, Err(DrawingError::Config(_))));

        let err = AppConfig::from_lookup(lookup_from(&[(ENV_DRAWING_DIR, "  ")]));
        assert!(matches!(err, Err(DrawingError::Config(_))));
    }

    #[test]
    fn test_builder() {
        let config = AppConfig::default()
            .with_drawing_dir("out")
            .with_fullscreen(false);
        assert_eq!(config.drawing_dir, PathBuf::from("out"));
        assert!(!config.fullscreen);
    }
}
