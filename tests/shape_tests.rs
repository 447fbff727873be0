use cad_shapes::canvas::{DrawCommand, RecordingCanvas};
use cad_shapes::drawing::Drawing;
use cad_shapes::geometry::{AnyShape, Circle, Rectangle, Shape};
use cad_shapes::DrawingError;

const SAMPLES: [i32; 9] = [i32::MIN, -1_000_000, -7, -1, 0, 1, 42, 999_999, i32::MAX];

fn both_variants(x: i32, y: i32) -> Vec<Box<dyn Shape>> {
    vec![
        Box::new(Rectangle::new(x, y, 4, 5)),
        Box::new(Circle::new(x, y, 3)),
    ]
}

#[test]
fn test_construction_keeps_position() {
    for &x in &SAMPLES {
        for &y in &SAMPLES {
            for shape in both_variants(x, y) {
                assert_eq!((shape.x(), shape.y()), (x, y), "{}", shape);
            }
        }
    }
}

#[test]
fn test_move_to_overwrites_and_is_idempotent() {
    for &x0 in &SAMPLES {
        for &x1 in &SAMPLES {
            let y0 = x1.wrapping_neg();
            let y1 = x0;
            for mut shape in both_variants(x0, y0) {
                shape.move_to(x1, y1);
                assert_eq!((shape.x(), shape.y()), (x1, y1));

                let once = shape.describe();
                shape.move_to(x1, y1);
                assert_eq!(shape.describe(), once);
            }
        }
    }
}

#[test]
fn test_setters() {
    let mut shape: Box<dyn Shape> = Box::new(Circle::new(0, 0, 1));
    shape.set_x(-3);
    assert_eq!((shape.x(), shape.y()), (-3, 0));
    shape.set_y(8);
    assert_eq!((shape.x(), shape.y()), (-3, 8));
}

#[test]
fn test_describe_rectangle() {
    let rect = Rectangle::new(3, 4, 1, 1);
    assert_eq!(rect.describe(), "Rectangle(x=3,y=4)");

    let as_dyn: &dyn Shape = &rect;
    assert_eq!(as_dyn.to_string(), "Rectangle(x=3,y=4)");
}

#[test]
fn test_describe_differs_only_by_variant_name() {
    let shapes = both_variants(-2, 17);
    let labels: Vec<String> = shapes.iter().map(|s| s.describe()).collect();

    assert_eq!(labels, vec!["Rectangle(x=-2,y=17)", "Circle(x=-2,y=17)"]);
    assert_eq!(
        labels[0].trim_start_matches("Rectangle"),
        labels[1].trim_start_matches("Circle")
    );
}

#[test]
fn test_area_dispatch() {
    let shapes = both_variants(0, 0);
    assert_eq!(shapes[0].area(), 20.0);
    assert!((shapes[1].area() - 9.0 * std::f64::consts::PI).abs() < 1e-9);
}

#[test]
fn test_draw_dispatch() {
    let mut canvas = RecordingCanvas::new();
    for shape in both_variants(1, 1) {
        shape.draw(&mut canvas);
    }

    let commands = canvas.commands();
    assert!(matches!(commands[0], DrawCommand::Rect { .. }));
    assert!(matches!(commands[2], DrawCommand::Circle { .. }));
}

#[test]
fn test_save_and_load() {
    let dir = std::env::temp_dir().join(format!("cad-shapes-test-{}", std::process::id()));
    let path = dir.join("nested").join("drawing.json");

    let mut drawing = Drawing::new();
    drawing.add(Rectangle::new(3, 4, 10, 20));
    drawing.add(AnyShape::from(Circle::new(-5, 6, 7)));
    drawing.save(&path).unwrap();

    let loaded = Drawing::load(&path).unwrap();
    assert_eq!(loaded, drawing);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_load_missing_file() {
    let path = std::env::temp_dir().join("cad-shapes-gibt-es-nicht.json");
    let err = Drawing::load(&path).unwrap_err();
    assert!(matches!(err, DrawingError::Io { .. }));
    assert!(err.to_string().contains("cad-shapes-gibt-es-nicht.json"));
}
