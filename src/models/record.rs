use std::fmt;

/// A single cell of an output row.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Passed through verbatim from an input file.
    Text(String),
    /// Whole minutes, written with one decimal place ("60.0").
    Minutes(i64),
    /// Event count.
    Count(usize),
}

impl FieldValue {
    pub fn text(s: &str) -> Self {
        FieldValue::Text(s.to_string())
    }

    pub fn to_json(&self) -> serde_json::Value {
        match self {
            FieldValue::Text(s) => serde_json::Value::String(s.clone()),
            FieldValue::Minutes(m) => serde_json::Value::from(*m as f64),
            FieldValue::Count(n) => serde_json::Value::from(*n as u64),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Minutes(m) => write!(f, "{:.1}", *m as f64),
            FieldValue::Count(n) => write!(f, "{n}"),
        }
    }
}

/// One output row: `(column, value)` pairs in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column. An existing column keeps its position and gets the new value.
    pub fn set(&mut self, column: &str, value: FieldValue) {
        match self.fields.iter().position(|(c, _)| c == column) {
            Some(pos) => self.fields[pos].1 = value,
            None => self.fields.push((column.to_string(), value)),
        }
    }

    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.fields.iter().find(|(c, _)| c == column).map(|(_, v)| v)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(c, _)| c.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(c, v)| (c.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Move `leading` columns (those present) to the front, in the given order.
    pub fn reorder_front(&mut self, leading: &[&str]) {
        let mut front = Vec::with_capacity(leading.len());
        for name in leading {
            if let Some(pos) = self.fields.iter().position(|(c, _)| c == name) {
                front.push(self.fields.remove(pos));
            }
        }
        front.append(&mut self.fields);
        self.fields = front;
    }

    pub fn retain_columns<F: Fn(&str) -> bool>(&mut self, keep: F) {
        self.fields.retain(|(c, _)| keep(c));
    }
}

/// Rows plus the union of their columns, in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordTable {
    columns: Vec<String>,
    rows: Vec<Record>,
}

impl RecordTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Table with a fixed leading header, used when no row may be present.
    pub fn with_columns(columns: &[String]) -> Self {
        Self {
            columns: columns.to_vec(),
            rows: Vec::new(),
        }
    }

    pub fn push(&mut self, record: Record) {
        for column in record.columns() {
            if !self.columns.iter().any(|c| c == column) {
                self.columns.push(column.to_string());
            }
        }
        self.rows.push(record);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row cells aligned to `columns()`; missing values are empty.
    pub fn string_rows(&self) -> Vec<Vec<String>> {
        self.rows
            .iter()
            .map(|row| {
                self.columns
                    .iter()
                    .map(|c| row.get(c).map(|v| v.to_string()).unwrap_or_default())
                    .collect()
            })
            .collect()
    }
}
