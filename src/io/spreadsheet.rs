// src/io/spreadsheet.rs

use super::error::DecodeError;
use crate::model::{Cell, Row};
use calamine::{open_workbook_auto, Data, Reader};
use std::collections::HashSet;
use std::path::Path;

/// Extensions `open_workbook_auto` understands
pub const SUPPORTED_EXTENSIONS: &[&str] = &["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// Reads the first worksheet of a workbook into header-keyed rows.
/// The first sheet row is the header; blank rows are skipped.
pub fn read_rows(path: &Path) -> Result<Vec<Row>, DecodeError> {
    let mut workbook = open_workbook_auto(path)?;
    let range = workbook
        .worksheet_range_at(0)
        .ok_or(DecodeError::NoSheets)??;

    let mut rows = range.rows();
    let header: Vec<String> = match rows.next() {
        Some(cells) => unique_headers(cells.iter().map(|c| c.to_string().trim().to_string())),
        None => return Err(DecodeError::Empty),
    };

    let table: Vec<Row> = rows
        .filter_map(|cells| {
            let row = to_row(&header, cells);
            if row.keys().any(|k| row.has(k)) { Some(row) } else { None }
        })
        .collect();

    if table.is_empty() {
        return Err(DecodeError::Empty);
    }

    log::debug!("Decoded {} rows x {} columns from {:?}", table.len(), header.len(), path);
    Ok(table)
}

/// Repeated column names get a numeric suffix: `X`, `X.1`, `X.2`
fn unique_headers(names: impl Iterator<Item = String>) -> Vec<String> {
    let names: Vec<String> = names.collect();
    let mut taken: HashSet<String> = names.iter().cloned().collect();
    let mut seen: HashSet<String> = HashSet::new();

    names
        .into_iter()
        .map(|name| {
            if name.is_empty() || seen.insert(name.clone()) {
                return name;
            }
            let mut n = 1;
            let renamed = loop {
                let candidate = format!("{}.{}", name, n);
                if !taken.contains(&candidate) {
                    break candidate;
                }
                n += 1;
            };
            log::warn!("Duplicate column '{}' renamed to '{}'", name, renamed);
            taken.insert(renamed.clone());
            seen.insert(renamed.clone());
            renamed
        })
        .collect()
}

fn to_row(header: &[String], cells: &[Data]) -> Row {
    let mut row = Row::new();
    for (name, cell) in header.iter().zip(cells.iter()) {
        // Unnamed columns carry no field
        if name.is_empty() {
            continue;
        }
        row.insert(name.as_str(), to_cell(cell));
    }
    row
}

fn to_cell(data: &Data) -> Cell {
    match data {
        Data::Int(i) => Cell::Number(*i as f64),
        Data::Float(f) => Cell::Number(*f),
        Data::Bool(b) => Cell::Bool(*b),
        Data::String(s) => Cell::Text(s.clone()),
        Data::Empty => Cell::Empty,
        other => Cell::Text(other.to_string()),
    }
}

/// True when the path looks like a workbook we can decode
pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| SUPPORTED_EXTENSIONS.contains(&e.to_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook;
    use tempfile::tempdir;

    #[test]
    fn test_read_energy_workbook() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("energies.xlsx");

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "System").unwrap();
        sheet.write_string(0, 1, "Ref").unwrap();
        sheet.write_string(0, 2, "B3LYP").unwrap();
        sheet.write_string(1, 0, "TS_01").unwrap();
        sheet.write_number(1, 1, 12.5).unwrap();
        sheet.write_number(1, 2, 14.0).unwrap();
        // Row 2 left blank on purpose
        sheet.write_string(3, 0, "TS_02").unwrap();
        sheet.write_number(3, 1, 20.0).unwrap();
        workbook.save(&path).unwrap();

        let rows = read_rows(&path).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].text("System"), "TS_01");
        assert_eq!(rows[0].number("B3LYP"), 14.0);
        assert_eq!(rows[1].number("Ref"), 20.0);
        assert!(!rows[1].has("B3LYP"));
    }

    #[test]
    fn test_repeated_headers_keep_every_column() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dupes.xlsx");

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        for (c, h) in ["System", "X", "X", "Y"].iter().enumerate() {
            sheet.write_string(0, c as u16, *h).unwrap();
        }
        sheet.write_string(1, 0, "TS_01").unwrap();
        sheet.write_number(1, 1, 1.0).unwrap();
        sheet.write_number(1, 2, 2.0).unwrap();
        sheet.write_number(1, 3, 3.0).unwrap();
        workbook.save(&path).unwrap();

        let rows = read_rows(&path).unwrap();
        assert_eq!(rows[0].keys().collect::<Vec<_>>(), vec!["System", "X", "X.1", "Y"]);
        assert_eq!(rows[0].number("X"), 1.0);
        assert_eq!(rows[0].number("X.1"), 2.0);

        let data = crate::io::validate::energy(&rows).unwrap();
        assert_eq!(data.methods, vec!["X", "X.1", "Y"]);
        assert_eq!(data.records[0].values, vec![1.0, 2.0, 3.0]);
    }

    #[test]
    fn test_unique_headers_skips_taken_suffix() {
        let names = ["A", "A.1", "A", "", ""].iter().map(|s| s.to_string());
        assert_eq!(unique_headers(names), vec!["A", "A.1", "A.2", "", ""]);
    }

    #[test]
    fn test_header_only_is_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("header.xlsx");

        let mut workbook = Workbook::new();
        let sheet = workbook.add_worksheet();
        sheet.write_string(0, 0, "System").unwrap();
        workbook.save(&path).unwrap();

        assert!(matches!(read_rows(&path), Err(DecodeError::Empty)));
    }

    #[test]
    fn test_not_a_workbook() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.xlsx");
        std::fs::write(&path, b"this is not a zip archive").unwrap();
        assert!(read_rows(&path).is_err());
    }

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported(Path::new("data/energies.XLSX")));
        assert!(is_supported(Path::new("bonds.ods")));
        assert!(!is_supported(Path::new("bonds.txt")));
    }
}
