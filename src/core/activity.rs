//! Activity summary job: per-category minutes / events for every participant.

use crate::core::aggregate::{ActivityMetrics, USER_ID_COLUMN, aggregate};
use crate::core::batch::BatchReport;
use crate::errors::AppResult;
use crate::export::{ExportFormat, write_table};
use crate::ingest::{ACTIVITY_FILE, CsvTable, discover, participant_file};
use crate::models::{ActivityInterval, CategoryTable, ParticipantId, RecordTable};
use crate::ui::messages::{batch_summary, header};
use std::path::Path;

const ACTIVITY_COLUMN: &str = "Activity";
const START_COLUMN: &str = "Start";
const END_COLUMN: &str = "End";

/// Read a participant's `Activity.csv`. Bad times are kept as-is; they count
/// as zero minutes later on.
pub fn load_activity_log(path: &Path) -> AppResult<Vec<ActivityInterval>> {
    let table = CsvTable::read(path)?;

    let code_idx = table.column_index(ACTIVITY_COLUMN)?;
    let start_idx = table.column_index(START_COLUMN)?;
    let end_idx = table.column_index(END_COLUMN)?;

    Ok(table
        .rows()
        .iter()
        .map(|row| {
            ActivityInterval::from_cells(
                table.cell(row, code_idx),
                table.cell(row, start_idx),
                table.cell(row, end_idx),
            )
        })
        .collect())
}

pub fn summarize_participant(
    data_dir: &Path,
    id: &ParticipantId,
    categories: &CategoryTable,
) -> AppResult<ActivityMetrics> {
    let intervals = load_activity_log(&participant_file(data_dir, id, ACTIVITY_FILE))?;
    Ok(aggregate(&intervals, categories))
}

/// Summary table for all participants under `data_dir`, sorted by the
/// numeric part of the participant id.
pub fn build_summary(
    data_dir: &Path,
    categories: &CategoryTable,
) -> AppResult<(RecordTable, BatchReport<ActivityMetrics>)> {
    let participants = discover(data_dir)?;
    let report = BatchReport::run(participants, |id| {
        summarize_participant(data_dir, id, categories)
    });

    let mut header_row = vec![USER_ID_COLUMN.to_string()];
    header_row.extend(categories.columns());

    let mut table = RecordTable::with_columns(&header_row);
    for (id, metrics) in report.successes() {
        table.push(metrics.to_summary_record(id));
    }

    Ok((table, report))
}

pub struct ActivityLogic;

impl ActivityLogic {
    pub fn run(
        data_dir: &Path,
        categories: &CategoryTable,
        out_file: &Path,
        format: ExportFormat,
    ) -> AppResult<RecordTable> {
        header("Activity summary");

        let (table, report) = build_summary(data_dir, categories)?;
        write_table(&table, out_file, format, "Activity summary")?;

        batch_summary("Activity summary", report.processed(), report.skipped());
        Ok(table)
    }
}
