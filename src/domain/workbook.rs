// Workbook descriptor - ordered named sheets for the spreadsheet exporter
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Sheet {
    pub name: String,
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Cell>>,
}

/// Ordered sheets plus the suggested download name. The binary spreadsheet
/// writer is an external collaborator; this descriptor is all it needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Workbook {
    pub file_name: String,
    pub sheets: Vec<Sheet>,
}
