//! Spreadsheet export of the filtered collection (CSV that Excel opens).

use chrono::NaiveDate;
use thiserror::Error;

/// Rendered in place of missing optional values.
pub const PLACEHOLDER: &str = "N/A";

const DELIMITER: &str = ";";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExportError {
    #[error("Nothing to export: the current list is empty")]
    Empty,
}

/// Types that can be exported as a flat row.
pub trait Exportable {
    /// Entity name used in the download file name, e.g. `"Customers"`.
    const ENTITY: &'static str;

    /// Column labels.
    fn headers() -> Vec<&'static str>;

    /// Row values in the same order as `headers()`. Nested objects must be
    /// flattened to scalar text.
    fn to_row(&self) -> Vec<String>;
}

/// Missing or blank → `"N/A"`.
pub fn placeholder(value: Option<&str>) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

pub fn amount_or_placeholder(value: Option<f64>) -> String {
    value
        .map(|v| format!("{:.2}", v))
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Build the CSV document. An empty collection is refused.
pub fn build_csv<T: Exportable>(data: &[T]) -> Result<String, ExportError> {
    if data.is_empty() {
        return Err(ExportError::Empty);
    }

    let mut csv = String::new();
    // UTF-8 BOM so Excel picks the right encoding
    csv.push('\u{FEFF}');

    csv.push_str(&T::headers().join(DELIMITER));
    csv.push('\n');

    for item in data {
        let row: Vec<String> = item.to_row().iter().map(|c| escape_csv_cell(c)).collect();
        csv.push_str(&row.join(DELIMITER));
        csv.push('\n');
    }

    Ok(csv)
}

/// Quote the cell if it contains the delimiter, quotes or line breaks.
pub fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// `{Entity}_{YYYY-MM-DD}.csv`
pub fn export_file_name(entity: &str, date: NaiveDate) -> String {
    format!("{}_{}.csv", entity, date.format("%Y-%m-%d"))
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Line {
        name: String,
        note: Option<String>,
    }

    impl Exportable for Line {
        const ENTITY: &'static str = "Lines";

        fn headers() -> Vec<&'static str> {
            vec!["Name", "Note"]
        }

        fn to_row(&self) -> Vec<String> {
            vec![self.name.clone(), placeholder(self.note.as_deref())]
        }
    }

    #[test]
    fn test_empty_collection_is_refused() {
        let data: Vec<Line> = Vec::new();
        assert_eq!(build_csv(&data), Err(ExportError::Empty));
    }

    #[test]
    fn test_csv_layout() {
        let data = vec![
            Line {
                name: "Ravi".into(),
                note: None,
            },
            Line {
                name: "A; B".into(),
                note: Some("said \"hi\"".into()),
            },
        ];
        let csv = build_csv(&data).unwrap();
        let mut lines = csv.trim_start_matches('\u{FEFF}').lines();
        assert_eq!(lines.next(), Some("Name;Note"));
        assert_eq!(lines.next(), Some("Ravi;N/A"));
        assert_eq!(lines.next(), Some("\"A; B\";\"said \"\"hi\"\"\""));
        assert_eq!(lines.next(), None);
        assert!(csv.starts_with('\u{FEFF}'));
    }

    #[test]
    fn test_placeholder() {
        assert_eq!(placeholder(None), "N/A");
        assert_eq!(placeholder(Some("")), "N/A");
        assert_eq!(placeholder(Some(" x ")), "x");
        assert_eq!(amount_or_placeholder(Some(12.5)), "12.50");
        assert_eq!(amount_or_placeholder(None), "N/A");
    }

    #[test]
    fn test_file_name() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(export_file_name("Customers", date), "Customers_2024-03-05.csv");
    }
}
