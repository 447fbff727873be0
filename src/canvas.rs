// Zeichenfläche, auf die Formen ihre Primitive ausgeben
// Die egui-Implementierung liegt im Binary (ui.rs), hier nur die Aufzeichnung

/// Ziel für `Shape::draw`
/// Alle Werte in Canvas-Einheiten, Ursprung links oben
pub trait Canvas {
    fn outline_rect(&mut self, left: f64, top: f64, width: f64, height: f64);
    fn outline_circle(&mut self, center_x: f64, center_y: f64, radius: f64);
    fn label(&mut self, x: f64, y: f64, text: &str);
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Rect {
        left: f64,
        top: f64,
        width: f64,
        height: f64,
    },
    Circle {
        center_x: f64,
        center_y: f64,
        radius: f64,
    },
    Label {
        x: f64,
        y: f64,
        text: String,
    },
}

/// Merkt sich alle Zeichenbefehle in Reihenfolge
#[derive(Clone, Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn into_commands(self) -> Vec<DrawCommand> {
        self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl Canvas for RecordingCanvas {
    fn outline_rect(&mut self, left: f64, top: f64, width: f64, height: f64) {
        self.commands.push(DrawCommand::Rect { left, top, width, height });
    }

    fn outline_circle(&mut self, center_x: f64, center_y: f64, radius: f64) {
        self.commands.push(DrawCommand::Circle { center_x, center_y, radius });
    }

    fn label(&mut self, x: f64, y: f64, text: &str) {
        self.commands.push(DrawCommand::Label {
            x,
            y,
            text: text.to_string(),
        });
    }
}
