// Hilfsfunktionen für Anzeige und Zeichnen

/// Abstand der Beschriftung über dem Ankerpunkt (in Canvas-Einheiten)
pub const LABEL_OFFSET: f64 = 14.0;

/// Formatiert eine Zahl mit drei Nachkommastellen und Dezimalkomma
pub fn format_with_comma(value: f64) -> String {
    format!("{:.3}", value).replace('.', ",")
}

/// Fläche als Text, z.B. "12,000 E²"
pub fn format_area(area: f64) -> String {
    format!("{} E²", format_with_comma(area))
}

/// Liest eine Ganzzahl, erlaubt Leerzeichen rundherum
pub fn parse_coordinate(input: &str) -> Option<i32> {
    input.trim().parse::<i32>().ok()
}

/// Liest eine Abmessung; Dezimalkomma wird akzeptiert und gerundet
pub fn parse_dimension(input: &str) -> Option<u32> {
    let value = input.trim().replace(',', ".").parse::<f64>().ok()?;
    if !value.is_finite() || value < 0.0 || value > f64::from(u32::MAX) {
        return None;
    }
    Some(value.round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_with_comma() {
        assert_eq!(format_with_comma(12.0), "12,000");
        assert_eq!(format_with_comma(1.23456), "1,235");
        assert_eq!(format_area(0.5), "0,500 E²");
    }

    #[test]
    fn test_parse_coordinate() {
        assert_eq!(parse_coordinate(" -42 "), Some(-42));
        assert_eq!(parse_coordinate("1,5"), None);
        assert_eq!(parse_coordinate(""), None);
    }

    #[test]
    fn test_parse_dimension() {
        assert_eq!(parse_dimension("10"), Some(10));
        assert_eq!(parse_dimension("2,6"), Some(3));
        assert_eq!(parse_dimension("-1"), None);
        assert_eq!(parse_dimension("abc"), None);
        assert_eq!(parse_dimension("1e20"), None);
    }
}
