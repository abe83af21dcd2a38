//! Raw table types as handed over by the page scraper

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// All tables scraped from one character page, in page order
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TableDump {
    /// Character name as it appears on the page (e.g. "Dr. Mario")
    pub character: String,
    /// Tables in page order
    pub tables: Vec<RawTable>,
}

impl TableDump {
    /// Load a dump from JSON
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| Error::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        serde_json::from_str(&content).map_err(|e| Error::DumpParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Save the dump to JSON
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

/// A single scraped table
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawTable {
    /// Rows in table order
    pub rows: Vec<RawRow>,
}

impl RawTable {
    /// Create a table from rows
    pub fn new(rows: Vec<RawRow>) -> Self {
        Self { rows }
    }
}

/// A table row split into header cells (`th`) and data cells (`td`)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawRow {
    #[serde(default)]
    pub headers: Vec<String>,
    #[serde(default)]
    pub cells: Vec<String>,
}

impl RawRow {
    /// Create a row with one header cell
    pub fn new(header: impl Into<String>, cells: Vec<String>) -> Self {
        Self {
            headers: vec![header.into()],
            cells,
        }
    }

    /// Rows with several header cells are column captions, not data
    pub fn is_subheader(&self) -> bool {
        self.headers.len() > 1
    }

    /// The row label, whitespace-normalized
    pub fn label(&self) -> String {
        self.headers
            .first()
            .map(|h| normalize_text(h))
            .unwrap_or_default()
    }

    /// Extract the data cells, normalizing placeholder markers to ""
    pub fn data_cells(&self) -> Vec<String> {
        self.cells.iter().map(|c| normalize_cell(c)).collect()
    }
}

/// Normalize a data cell: blank and "-" placeholders become empty
pub fn normalize_cell(raw: &str) -> String {
    let text = normalize_text(raw);
    if text == "-" {
        String::new()
    } else {
        text
    }
}

/// Decode the common entities and collapse runs of whitespace
pub fn normalize_text(raw: &str) -> String {
    let decoded = raw.replace("&nbsp;", " ").replace("&amp;", "&");
    decoded.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_cell_placeholders() {
        assert_eq!(normalize_cell("-"), "");
        assert_eq!(normalize_cell("  "), "");
        assert_eq!(normalize_cell(" - "), "");
        assert_eq!(normalize_cell("5-7"), "5-7");
    }

    #[test]
    fn test_normalize_text_whitespace() {
        assert_eq!(normalize_text("Max  Charge:\n Frame 98"), "Max Charge: Frame 98");
        assert_eq!(normalize_text("Jab&nbsp;1"), "Jab 1");
    }

    #[test]
    fn test_row_subheader() {
        let row = RawRow {
            headers: vec!["Move".into(), "Hitbox Active".into()],
            cells: Vec::new(),
        };
        assert!(row.is_subheader());
        assert!(!RawRow::new("Jab 1", Vec::new()).is_subheader());
    }

    #[test]
    fn test_row_data_cells() {
        let row = RawRow::new(
            " Ftilt ",
            vec!["5-7".into(), "-".into(), "".into(), "361".into()],
        );
        assert_eq!(row.label(), "Ftilt");
        assert_eq!(row.data_cells(), vec!["5-7", "", "", "361"]);
    }

    #[test]
    fn test_dump_deserialize_defaults() {
        let json = r#"{"character":"Mario","tables":[{"rows":[{"headers":["Jab 1"]}]}]}"#;
        let dump: TableDump = serde_json::from_str(json).unwrap();
        assert_eq!(dump.tables.len(), 1);
        assert!(dump.tables[0].rows[0].cells.is_empty());
    }
}
