use crate::errors::AppResult;
use crate::models::RecordTable;
use serde_json::{Map, Value};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Array of objects, keys in column order. Metrics stay numeric.
pub fn to_json_value(table: &RecordTable) -> Value {
    let rows = table
        .rows()
        .iter()
        .map(|row| {
            let object: Map<String, Value> = row
                .iter()
                .map(|(column, value)| (column.to_string(), value.to_json()))
                .collect();
            Value::Object(object)
        })
        .collect();

    Value::Array(rows)
}

/// Writes the table as pretty-printed JSON.
pub fn write_json(path: &Path, table: &RecordTable) -> AppResult<()> {
    let json = serde_json::to_string_pretty(&to_json_value(table))?;
    let mut file = File::create(path)?;
    file.write_all(json.as_bytes())?;
    file.write_all(b"\n")?;
    Ok(())
}
