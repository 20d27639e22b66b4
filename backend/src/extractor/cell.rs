use calamine::Data;

/// Spreadsheet cell reduced to the shapes the row heuristics care about.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The value of a text cell; `None` for every other kind.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Cell::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Text form of any non-empty cell. Integral numbers drop the decimal part.
    pub fn to_text(&self) -> Option<String> {
        match self {
            Cell::Empty => None,
            Cell::Text(text) => Some(text.clone()),
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => Some(format!("{}", *n as i64)),
            Cell::Number(n) => Some(n.to_string()),
            Cell::Bool(b) => Some(b.to_string()),
        }
    }
}

impl From<&Data> for Cell {
    fn from(data: &Data) -> Self {
        match data {
            Data::String(s) if s.is_empty() => Cell::Empty,
            Data::String(s) => Cell::Text(s.clone()),
            Data::Int(i) => Cell::Number(*i as f64),
            Data::Float(f) => Cell::Number(*f),
            Data::Bool(b) => Cell::Bool(*b),
            Data::DateTime(dt) => match dt.as_datetime() {
                Some(value) => Cell::Text(value.format("%Y-%m-%d %H:%M:%S").to_string()),
                None => Cell::Number(dt.as_f64()),
            },
            Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
            Data::Error(_) | Data::Empty => Cell::Empty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_numbers_like_the_sheet() {
        assert_eq!(Cell::Number(250.0).to_text().as_deref(), Some("250"));
        assert_eq!(Cell::Number(2.5).to_text().as_deref(), Some("2.5"));
        assert_eq!(Cell::Empty.to_text(), None);
    }

    #[test]
    fn only_text_cells_expose_str() {
        assert_eq!(Cell::Text("A.01".into()).as_str(), Some("A.01"));
        assert_eq!(Cell::Number(1.01).as_str(), None);
    }

    #[test]
    fn blank_strings_are_empty() {
        assert!(Cell::from(&Data::String(String::new())).is_empty());
        assert_eq!(Cell::from(&Data::Int(7)), Cell::Number(7.0));
    }
}
