//! Combine job: merged participant rows plus total active minutes, in one table.

use crate::core::activity::load_activity_log;
use crate::core::aggregate::{TOTAL_COLUMN, total_active_minutes};
use crate::core::batch::BatchReport;
use crate::core::merge::merged_file_name;
use crate::errors::AppResult;
use crate::export::{ExportFormat, write_table};
use crate::ingest::{ACTIVITY_FILE, CsvTable, participant_file};
use crate::models::{FieldValue, ParticipantId, Record, RecordTable};
use crate::ui::messages::{batch_summary, header};
use std::path::Path;

/// Merged row of `id` (first data row of its merged file) with `activityMinutes` appended.
pub fn combine_participant(
    data_dir: &Path,
    merged_dir: &Path,
    id: &ParticipantId,
) -> AppResult<Record> {
    let merged = CsvTable::read(&merged_dir.join(merged_file_name(id)))?;
    let mut row = merged.first_record()?;

    let intervals = load_activity_log(&participant_file(data_dir, id, ACTIVITY_FILE))?;
    row.set(TOTAL_COLUMN, FieldValue::Minutes(total_active_minutes(&intervals)));

    Ok(row)
}

pub fn build_combined(
    data_dir: &Path,
    merged_dir: &Path,
    numbers: &[u64],
) -> (RecordTable, BatchReport<Record>) {
    let participants = numbers.iter().map(|n| ParticipantId::from_number(*n));
    let report = BatchReport::run(participants, |id| {
        combine_participant(data_dir, merged_dir, id)
    });

    let mut table = RecordTable::new();
    for (_, row) in report.successes() {
        table.push(row.clone());
    }

    (table, report)
}

pub struct CombineLogic;

impl CombineLogic {
    pub fn run(
        data_dir: &Path,
        merged_dir: &Path,
        numbers: &[u64],
        out_file: &Path,
        format: ExportFormat,
    ) -> AppResult<RecordTable> {
        header("Combining participants");

        let (table, report) = build_combined(data_dir, merged_dir, numbers);
        write_table(&table, out_file, format, "Combined table")?;

        batch_summary("Combine", report.processed(), report.skipped());
        Ok(table)
    }
}
