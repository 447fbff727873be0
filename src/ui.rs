use cad_shapes::canvas::Canvas;
use cad_shapes::config::AppConfig;
use cad_shapes::drawing::{self, Drawing};
use cad_shapes::geometry::*;
use eframe::egui;
use egui::{Color32, Pos2, Stroke, Vec2};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum NewShapeKind {
    Rectangle,
    Circle,
}

pub struct CadApp {
    config: AppConfig,
    drawing: Drawing,
    selected: Option<usize>,
    error_message: Option<String>,
    status: String,

    // Eingabefelder
    new_kind: NewShapeKind,
    input_x: String,
    input_y: String,
    input_width: String,
    input_height: String,
    input_radius: String,
    input_move_x: String,
    input_move_y: String,
    input_load_path: String,

    // UI State
    show_help: bool,
}

impl CadApp {
    pub fn new(config: AppConfig) -> Self {
        let input_load_path = config.drawing_dir.display().to_string();
        Self {
            config,
            drawing: Drawing::new(),
            selected: None,
            error_message: None,
            status: String::new(),
            new_kind: NewShapeKind::Rectangle,
            input_x: "50".to_string(),
            input_y: "50".to_string(),
            input_width: "120".to_string(),
            input_height: "80".to_string(),
            input_radius: "40".to_string(),
            input_move_x: String::new(),
            input_move_y: String::new(),
            input_load_path,
            show_help: false,
        }
    }
}

// ========== ZEICHENFLÄCHE AUF EGUI ==========
/// Canvas-Einheit = 1 Pixel, Ursprung links oben im Zeichenbereich
struct EguiCanvas<'a> {
    painter: &'a egui::Painter,
    origin: Pos2,
    stroke: Stroke,
}

impl EguiCanvas<'_> {
    fn to_screen(&self, x: f64, y: f64) -> Pos2 {
        self.origin + Vec2::new(x as f32, y as f32)
    }
}

impl Canvas for EguiCanvas<'_> {
    fn outline_rect(&mut self, left: f64, top: f64, width: f64, height: f64) {
        let min = self.to_screen(left, top);
        let rect = egui::Rect::from_min_size(min, Vec2::new(width as f32, height as f32));
        self.painter.rect_stroke(rect, 0.0, self.stroke);
    }

    fn outline_circle(&mut self, center_x: f64, center_y: f64, radius: f64) {
        let center = self.to_screen(center_x, center_y);
        self.painter.circle_stroke(center, radius as f32, self.stroke);
    }

    fn label(&mut self, x: f64, y: f64, text: &str) {
        self.painter.text(
            self.to_screen(x, y),
            egui::Align2::LEFT_BOTTOM,
            text,
            egui::FontId::proportional(16.0),
            Color32::from_rgb(80, 80, 80),
        );
    }
}

impl eframe::App for CadApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Linkes Panel für Eingaben mit Scrollbar
        egui::SidePanel::left("input_panel")
            .min_width(380.0)
            .max_width(420.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        ui.heading("🔷 Formen");
                        ui.separator();

                        // === NEUE FORM ===
                        ui.add_space(5.0);

                        egui::CollapsingHeader::new("➕ Neue Form")
                            .default_open(true)
                            .show(ui, |ui| {
                                ui.horizontal(|ui| {
                                    ui.radio_value(&mut self.new_kind, NewShapeKind::Rectangle, "Rechteck");
                                    ui.radio_value(&mut self.new_kind, NewShapeKind::Circle, "Kreis");
                                });
                                ui.add_space(3.0);
                                ui.horizontal(|ui| {
                                    ui.label("x:");
                                    ui.add(egui::TextEdit::singleline(&mut self.input_x).desired_width(80.0));
                                    ui.label("y:");
                                    ui.add(egui::TextEdit::singleline(&mut self.input_y).desired_width(80.0));
                                });
                                match self.new_kind {
                                    NewShapeKind::Rectangle => {
                                        ui.horizontal(|ui| {
                                            ui.label("Breite:");
                                            ui.add(egui::TextEdit::singleline(&mut self.input_width).desired_width(80.0));
                                        });
                                        ui.horizontal(|ui| {
                                            ui.label("Höhe:");
                                            ui.add(egui::TextEdit::singleline(&mut self.input_height).desired_width(80.0));
                                        });
                                    }
                                    NewShapeKind::Circle => {
                                        ui.horizontal(|ui| {
                                            ui.label("Radius:");
                                            ui.add(egui::TextEdit::singleline(&mut self.input_radius).desired_width(80.0));
                                        });
                                    }
                                }

                                ui.add_space(8.0);
                                let add_button = egui::Button::new(
                                    egui::RichText::new("➕ Hinzufügen")
                                        .size(22.0)
                                )
                                .min_size(egui::vec2(220.0, 40.0))
                                .fill(Color32::from_rgb(50, 120, 200));

                                if ui.add(add_button).clicked() {
                                    self.add_shape();
                                }
                            });

                        // === LISTE ===
                        ui.add_space(15.0);
                        ui.separator();

                        egui::CollapsingHeader::new("📋 Zeichnung")
                            .default_open(true)
                            .show(ui, |ui| {
                                if self.drawing.is_empty() {
                                    ui.label("Noch keine Formen.");
                                }

                                let mut clicked = None;
                                for (i, shape) in self.drawing.shapes().iter().enumerate() {
                                    let text = format!("{}  –  {}", shape.describe(), format_area(shape.area()));
                                    if ui.selectable_label(self.selected == Some(i), text).clicked() {
                                        clicked = Some(i);
                                    }
                                }
                                if let Some(i) = clicked {
                                    self.select(i);
                                }

                                ui.add_space(5.0);
                                ui.label(
                                    egui::RichText::new(format!(
                                        "Gesamtfläche: {}",
                                        format_area(self.drawing.total_area())
                                    ))
                                    .strong(),
                                );
                            });

                        // === VERSCHIEBEN ===
                        if self.selected.is_some() {
                            ui.add_space(15.0);
                            ui.separator();

                            egui::CollapsingHeader::new("✋ Verschieben")
                                .default_open(true)
                                .show(ui, |ui| {
                                    ui.horizontal(|ui| {
                                        ui.label("x:");
                                        ui.add(egui::TextEdit::singleline(&mut self.input_move_x).desired_width(80.0));
                                        ui.label("y:");
                                        ui.add(egui::TextEdit::singleline(&mut self.input_move_y).desired_width(80.0));
                                    });
                                    ui.horizontal(|ui| {
                                        if ui.button("➡ Verschieben").clicked() {
                                            self.move_selected_from_input();
                                        }
                                        if ui.button("🗑 Entfernen").clicked() {
                                            self.remove_selected();
                                        }
                                    });
                                    ui.label("Tipp: Klick in die Zeichenfläche verschiebt die Form dorthin.");
                                });
                        }

                        // === DATEI ===
                        ui.add_space(20.0);
                        ui.separator();

                        if ui.button("💾 Zeichnung speichern").clicked() {
                            self.save_drawing();
                        }
                        ui.add_space(5.0);
                        ui.horizontal(|ui| {
                            ui.add(egui::TextEdit::singleline(&mut self.input_load_path).desired_width(260.0));
                            if ui.button("📂 Laden").clicked() {
                                self.load_drawing();
                            }
                        });

                        if !self.status.is_empty() {
                            ui.add_space(5.0);
                            ui.colored_label(Color32::from_rgb(0, 150, 0), &self.status);
                        }

                        ui.add_space(10.0);
                        if ui.button("❓ Hilfe").clicked() {
                            self.show_help = !self.show_help;
                        }

                        ui.add_space(20.0);
                        ui.separator();

                        ui.add_space(10.0);
                        let close_button = egui::Button::new(
                            egui::RichText::new("❌ App schließen")
                                .size(24.0)
                                .color(Color32::WHITE)
                        )
                        .fill(Color32::from_rgb(180, 40, 40))
                        .min_size(egui::vec2(200.0, 50.0));

                        if ui.add(close_button).clicked() {
                            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                        }
                    });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            if self.drawing.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(250.0);
                    ui.heading("👈 Bitte links eine Form hinzufügen");
                });
            } else {
                self.draw_shapes(ui);
            }
        });

        // Fehler-Dialog
        if let Some(error_text) = self.error_message.clone() {
            egui::Window::new("⚠️ Fehler")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.set_min_width(400.0);
                    ui.colored_label(Color32::from_rgb(200, 50, 50), &error_text);

                    ui.add_space(15.0);
                    ui.separator();
                    ui.add_space(10.0);

                    if ui.button("OK - Eingaben überprüfen").clicked() {
                        self.error_message = None;
                    }
                });
        }

        // Hilfe-Dialog
        if self.show_help {
            egui::Window::new("❓ Hilfe")
                .collapsible(false)
                .show(ctx, |ui| {
                    ui.label("➕ Form hinzufügen:");
                    ui.label("  Art wählen, Position und Maße eingeben");
                    ui.add_space(5.0);

                    ui.label("✋ Form verschieben:");
                    ui.label("  Form in der Liste auswählen,");
                    ui.label("  dann in die Zeichenfläche klicken");
                    ui.add_space(5.0);

                    ui.label("📐 Position = linke obere Ecke");

                    ui.add_space(10.0);
                    if ui.button("Schließen").clicked() {
                        self.show_help = false;
                    }
                });
        }
    }
}

impl CadApp {
    fn add_shape(&mut self) {
        self.error_message = None;

        let (Some(x), Some(y)) = (parse_coordinate(&self.input_x), parse_coordinate(&self.input_y)) else {
            self.error_message = Some("❌ Position muss aus ganzen Zahlen bestehen!".to_string());
            return;
        };

        let shape: AnyShape = match self.new_kind {
            NewShapeKind::Rectangle => {
                match (parse_dimension(&self.input_width), parse_dimension(&self.input_height)) {
                    (Some(width), Some(height)) => Rectangle::new(x, y, width, height).into(),
                    _ => {
                        self.error_message = Some("❌ Breite und Höhe müssen Zahlen ≥ 0 sein!".to_string());
                        return;
                    }
                }
            }
            NewShapeKind::Circle => match parse_dimension(&self.input_radius) {
                Some(radius) => Circle::new(x, y, radius).into(),
                None => {
                    self.error_message = Some("❌ Radius muss eine Zahl ≥ 0 sein!".to_string());
                    return;
                }
            },
        };

        tracing::info!(shape = %shape, "Neue Form");
        let index = self.drawing.add(shape);
        self.select(index);
    }

    fn select(&mut self, index: usize) {
        if let Some(shape) = self.drawing.get(index) {
            self.input_move_x = shape.x().to_string();
            self.input_move_y = shape.y().to_string();
            self.selected = Some(index);
        }
    }

    fn move_selected(&mut self, x: i32, y: i32) {
        let Some(index) = self.selected else {
            return;
        };

        match self.drawing.move_shape(index, x, y) {
            Ok(()) => {
                self.input_move_x = x.to_string();
                self.input_move_y = y.to_string();
            }
            Err(e) => {
                tracing::warn!(error = %e, "Verschieben fehlgeschlagen");
                self.error_message = Some(e.to_string());
                self.selected = None;
            }
        }
    }

    fn move_selected_from_input(&mut self) {
        match (parse_coordinate(&self.input_move_x), parse_coordinate(&self.input_move_y)) {
            (Some(x), Some(y)) => self.move_selected(x, y),
            _ => {
                self.error_message = Some("❌ Zielposition muss aus ganzen Zahlen bestehen!".to_string());
            }
        }
    }

    fn remove_selected(&mut self) {
        let Some(index) = self.selected.take() else {
            return;
        };

        if let Err(e) = self.drawing.remove(index) {
            self.error_message = Some(e.to_string());
        }
    }

    fn save_drawing(&mut self) {
        let path = self.config.drawing_dir.join(drawing::default_file_name());
        match self.drawing.save(&path) {
            Ok(()) => {
                self.status = format!("Gespeichert: {}", path.display());
                self.input_load_path = path.display().to_string();
            }
            Err(e) => {
                tracing::error!(error = %e, "Speichern fehlgeschlagen");
                self.error_message = Some(e.to_string());
            }
        }
    }

    fn load_drawing(&mut self) {
        let path = PathBuf::from(self.input_load_path.trim());
        match Drawing::load(&path) {
            Ok(loaded) => {
                self.status = format!("Geladen: {} ({} Formen)", path.display(), loaded.len());
                self.drawing = loaded;
                self.selected = None;
            }
            Err(e) => {
                tracing::error!(error = %e, "Laden fehlgeschlagen");
                self.error_message = Some(e.to_string());
            }
        }
    }

    fn draw_shapes(&mut self, ui: &mut egui::Ui) {
        let available_size = ui.available_size();
        let (response, painter) = ui.allocate_painter(available_size, egui::Sense::click());
        let origin = response.rect.min;

        let mut canvas = EguiCanvas {
            painter: &painter,
            origin,
            stroke: Stroke::new(3.0, Color32::from_rgb(50, 50, 200)),
        };
        self.drawing.draw_all(&mut canvas);

        // Ausgewählte Form hervorheben
        if let Some(shape) = self.selected.and_then(|i| self.drawing.get(i)) {
            let mut highlight = EguiCanvas {
                painter: &painter,
                origin,
                stroke: Stroke::new(4.0, Color32::from_rgb(255, 160, 0)),
            };
            shape.draw(&mut highlight);
            painter.circle_filled(
                highlight.to_screen(f64::from(shape.x()), f64::from(shape.y())),
                6.0,
                Color32::from_rgb(200, 50, 50),
            );
        }

        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                let local = pos - origin;
                self.move_selected(local.x.round() as i32, local.y.round() as i32);
            }
        }
    }
}
