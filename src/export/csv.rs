use crate::errors::AppResult;
use crate::models::RecordTable;
use csv::Writer;
use std::path::Path;

/// Writes the table as CSV: header from the column union, one line per row.
pub fn write_csv(path: &Path, table: &RecordTable) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    if !table.columns().is_empty() {
        wtr.write_record(table.columns())?;
    }

    for row in table.string_rows() {
        wtr.write_record(&row)?;
    }

    wtr.flush()?;
    Ok(())
}
