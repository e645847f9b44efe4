//! Minimal header-addressed CSV reader for participant input files.

use crate::errors::{AppError, AppResult};
use crate::models::{FieldValue, Record};
use csv::{ReaderBuilder, StringRecord};
use std::path::{Path, PathBuf};

/// Prefix given to empty header cells, as spreadsheet exports leave the
/// index column unnamed.
pub const UNNAMED_PREFIX: &str = "Unnamed";

#[derive(Debug, Clone)]
pub struct CsvTable {
    path: PathBuf,
    headers: Vec<String>,
    rows: Vec<StringRecord>,
}

impl CsvTable {
    pub fn read(path: &Path) -> AppResult<Self> {
        if !path.is_file() {
            return Err(AppError::MissingFile(path.to_path_buf()));
        }

        let mut rdr = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(path)?;

        let headers = rdr
            .headers()?
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let h = h.trim();
                if h.is_empty() {
                    format!("{UNNAMED_PREFIX}: {i}")
                } else {
                    h.to_string()
                }
            })
            .collect();

        let mut rows = Vec::new();
        for row in rdr.records() {
            rows.push(row?);
        }

        Ok(Self {
            path: path.to_path_buf(),
            headers,
            rows,
        })
    }

    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    pub fn column_index(&self, column: &str) -> AppResult<usize> {
        self.headers
            .iter()
            .position(|h| h == column)
            .ok_or_else(|| AppError::MissingColumn {
                file: self.path.clone(),
                column: column.to_string(),
            })
    }

    /// Cell of `row` under `column`; short rows read as empty.
    pub fn cell<'a>(&self, row: &'a StringRecord, column: usize) -> &'a str {
        row.get(column).unwrap_or("")
    }

    pub fn first_row(&self) -> AppResult<&StringRecord> {
        self.rows
            .first()
            .ok_or_else(|| AppError::EmptyTable(self.path.clone()))
    }

    /// Value of `column` in the first data row.
    pub fn first_value(&self, column: &str) -> AppResult<String> {
        let idx = self.column_index(column)?;
        let row = self.first_row()?;
        Ok(self.cell(row, idx).to_string())
    }

    /// Whole first data row as a record, columns in file order.
    pub fn first_record(&self) -> AppResult<Record> {
        let row = self.first_row()?;
        let mut record = Record::new();
        for (i, header) in self.headers.iter().enumerate() {
            record.set(header, FieldValue::text(self.cell(row, i)));
        }
        Ok(record)
    }
}
