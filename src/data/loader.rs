use std::path::Path;

use tracing::{debug, info, warn};

use crate::data::parser;
use crate::data::record::{FieldColumns, GameRecord};
use crate::error::LoadError;

/// Rows scanned when looking for the header row.
const HEADER_SCAN_ROWS: usize = 50;

/// Result of loading a data file: column names and row-major raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedData {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl LoadedData {
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Turn every data row into a [`GameRecord`], in source order.
    pub fn into_records(self) -> Vec<GameRecord> {
        let columns = FieldColumns::locate(&self.columns);
        let missing: Vec<&str> = columns.missing().map(|f| f.header()).collect();
        if !missing.is_empty() {
            warn!(
                found = columns.found_count(),
                ?missing,
                "header is missing game fields; they will read as empty"
            );
        }
        self.rows
            .iter()
            .map(|row| GameRecord::from_row(&columns, row))
            .collect()
    }
}

/// Load a CSV or Excel file into game records.
pub fn load_records(path: &Path) -> Result<Vec<GameRecord>, LoadError> {
    let data = load_file(path)?;
    info!(path = %path.display(), rows = data.row_count(), "loaded data file");
    Ok(data.into_records())
}

/// Load a CSV or Excel file and return the column names and raw string data.
pub fn load_file(path: &Path) -> Result<LoadedData, LoadError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();

    match ext.as_str() {
        "csv" | "txt" => load_csv(path),
        "xls" | "xlsx" | "xlsm" | "ods" => load_excel(path),
        _ => Err(LoadError::UnsupportedFormat(ext)),
    }
}

fn load_csv(path: &Path) -> Result<LoadedData, LoadError> {
    let content = std::fs::read(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_csv(&parser::decode_text(content))
}

/// Parse delimited text. Malformed lines are skipped rather than failing the
/// whole file.
pub fn parse_csv(text: &str) -> Result<LoadedData, LoadError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b',')
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut all_rows: Vec<Vec<String>> = Vec::new();
    for (line, result) in reader.records().enumerate() {
        match result {
            Ok(record) => {
                all_rows.push(record.iter().map(|s| s.to_string()).collect());
            }
            Err(e) => {
                debug!(line, "skipping unreadable csv record: {e}");
                continue;
            }
        }
    }

    split_header(all_rows)
}

fn load_excel(path: &Path) -> Result<LoadedData, LoadError> {
    use calamine::{open_workbook_auto, Reader};

    let mut workbook = open_workbook_auto(path)?;

    let sheet_name = workbook
        .sheet_names()
        .first()
        .ok_or(LoadError::NoSheets)?
        .clone();

    let range = workbook.worksheet_range(&sheet_name)?;

    let all_rows: Vec<Vec<String>> = range
        .rows()
        .map(|row| row.iter().map(cell_text).collect())
        .collect();

    split_header(all_rows)
}

fn cell_text(cell: &calamine::Data) -> String {
    use calamine::Data;

    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::DateTime(dt) => dt.to_string(),
        Data::DateTimeIso(s) => s.clone(),
        Data::DurationIso(s) => s.clone(),
        Data::Error(e) => format!("{e:?}"),
    }
}

fn split_header(mut all_rows: Vec<Vec<String>>) -> Result<LoadedData, LoadError> {
    let header_row = parser::detect_header(&all_rows, HEADER_SCAN_ROWS).ok_or(LoadError::Empty)?;
    debug!(header_row, "detected header row");

    // Data starts after header row
    let rows = all_rows.split_off(header_row + 1);
    let columns: Vec<String> = all_rows
        .swap_remove(header_row)
        .iter()
        .map(|s| s.trim().trim_start_matches('\u{feff}').to_string())
        .collect();

    Ok(LoadedData { columns, rows })
}
