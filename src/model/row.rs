// src/model/row.rs

use std::fmt;

/// A single decoded spreadsheet cell
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Bool(bool),
    Empty,
}

impl Cell {
    /// Numeric view of the cell. Text is parsed; anything else reads as NaN.
    pub fn as_f64(&self) -> f64 {
        match self {
            Cell::Number(v) => *v,
            Cell::Text(s) => s.trim().parse::<f64>().unwrap_or(f64::NAN),
            Cell::Bool(_) | Cell::Empty => f64::NAN,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Integers coming from a float cell print without ".0" (e.g. System = 12)
            Cell::Number(v) if v.fract() == 0.0 && v.abs() < 1e15 => write!(f, "{}", *v as i64),
            Cell::Number(v) => write!(f, "{}", v),
            Cell::Text(s) => write!(f, "{}", s.trim()),
            Cell::Bool(b) => write!(f, "{}", b),
            Cell::Empty => Ok(()),
        }
    }
}

impl From<f64> for Cell {
    fn from(v: f64) -> Self {
        Cell::Number(v)
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

/// One decoded row: field name -> cell, in header order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Row {
    fields: Vec<(String, Cell)>,
}

impl Row {
    pub fn new() -> Self {
        Self { fields: Vec::new() }
    }

    /// Inserts or replaces a field, keeping the position of the first insert
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Cell>) {
        let key = key.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.fields.push((key, value)),
        }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Cell>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&Cell> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// A field is missing when absent or blank. Numeric zero is present.
    pub fn has(&self, key: &str) -> bool {
        self.get(key).map_or(false, |c| !c.is_empty())
    }

    pub fn number(&self, key: &str) -> f64 {
        self.get(key).map_or(f64::NAN, Cell::as_f64)
    }

    pub fn text(&self, key: &str) -> String {
        self.get(key).map(|c| c.to_string()).unwrap_or_default()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(k, _)| k.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_is_present() {
        let row = Row::new().with("R1", 0.0).with("R2", "");
        assert!(row.has("R1"));
        assert!(!row.has("R2"));
        assert!(!row.has("R3"));
        assert_eq!(row.number("R1"), 0.0);
    }

    #[test]
    fn test_numeric_text_and_garbage() {
        let row = Row::new().with("A", " 2.5 ").with("B", "n/a").with("C", Cell::Bool(true));
        assert_eq!(row.number("A"), 2.5);
        assert!(row.number("B").is_nan());
        assert!(row.number("C").is_nan());
        assert!(row.number("missing").is_nan());
    }

    #[test]
    fn test_insert_keeps_order() {
        let mut row = Row::new().with("System", "TS_01").with("X", 1.0);
        row.insert("System", "TS_02");
        let keys: Vec<&str> = row.keys().collect();
        assert_eq!(keys, vec!["System", "X"]);
        assert_eq!(row.text("System"), "TS_02");
    }

    #[test]
    fn test_integer_display() {
        assert_eq!(Cell::Number(12.0).to_string(), "12");
        assert_eq!(Cell::Number(1.25).to_string(), "1.25");
    }
}
