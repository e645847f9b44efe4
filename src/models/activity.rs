use crate::utils::time::{DurationPolicy, interval_minutes};

pub type ActivityCode = u32;

/// One row of a participant's `Activity.csv`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityInterval {
    /// `None` when the cell is not an integer code.
    pub activity_code: Option<ActivityCode>,
    pub start: String, // "HH:MM", "24:00" allowed
    pub end: String,   // "HH:MM", may be earlier than start (overnight)
}

impl ActivityInterval {
    pub fn new(code: ActivityCode, start: &str, end: &str) -> Self {
        Self {
            activity_code: Some(code),
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    /// Build an interval from raw CSV cells. The code is parsed leniently.
    pub fn from_cells(code: &str, start: &str, end: &str) -> Self {
        Self {
            activity_code: parse_activity_code(code),
            start: start.to_string(),
            end: end.to_string(),
        }
    }

    pub fn minutes(&self, policy: DurationPolicy) -> i64 {
        interval_minutes(&self.start, &self.end, policy)
    }
}

/// Parse an activity code cell. Integer-valued floats ("8.0") are accepted,
/// anything else yields `None`.
pub fn parse_activity_code(cell: &str) -> Option<ActivityCode> {
    let trimmed = cell.trim();

    if let Ok(code) = trimmed.parse::<ActivityCode>() {
        return Some(code);
    }

    match trimmed.parse::<f64>() {
        Ok(f) if f.fract() == 0.0 && f >= 0.0 && f <= ActivityCode::MAX as f64 => {
            Some(f as ActivityCode)
        }
        _ => None,
    }
}
