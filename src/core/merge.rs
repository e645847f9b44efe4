//! Merge job: one `merged_user_<N>.csv` per participant built from
//! `user_info.csv`, `sleep.csv` and `questionnaire.csv`.

use crate::core::batch::BatchReport;
use crate::errors::AppResult;
use crate::export::{ExportFormat, write_table};
use crate::ingest::{
    CsvTable, QUESTIONNAIRE_FILE, SLEEP_FILE, UNNAMED_PREFIX, USER_INFO_FILE, discover,
    participant_file,
};
use crate::models::{FieldValue, ParticipantId, Record, RecordTable};
use crate::ui::messages::{batch_summary, header};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

pub const PARTICIPANT_COLUMN: &str = "participant";

/// Columns that always come first in a merged row.
pub const LEADING_COLUMNS: [&str; 5] = [PARTICIPANT_COLUMN, "Gender", "Height", "Weight", "Age"];

const USER_INFO_COLUMNS: [&str; 4] = ["Gender", "Height", "Weight", "Age"];
const QUESTIONNAIRE_COLUMNS: [&str; 3] = ["MEQ", "Daily_stress", "Pittsburgh"];

static UNNAMED_COLUMN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("^{UNNAMED_PREFIX}")).expect("unnamed column pattern")
});

pub fn merged_file_name(id: &ParticipantId) -> String {
    format!("merged_user_{}.csv", id.suffix())
}

/// Build the merged row of one participant.
pub fn merge_participant(data_dir: &Path, id: &ParticipantId) -> AppResult<Record> {
    let mut row = Record::new();
    row.set(PARTICIPANT_COLUMN, FieldValue::text(id.name()));

    let info = CsvTable::read(&participant_file(data_dir, id, USER_INFO_FILE))?;
    for column in USER_INFO_COLUMNS {
        row.set(column, FieldValue::Text(info.first_value(column)?));
    }

    // sleep.csv is passed through as-is
    let sleep = CsvTable::read(&participant_file(data_dir, id, SLEEP_FILE))?;
    for (column, value) in sleep.first_record()?.iter() {
        row.set(column, value.clone());
    }

    let questionnaire = CsvTable::read(&participant_file(data_dir, id, QUESTIONNAIRE_FILE))?;
    for column in QUESTIONNAIRE_COLUMNS {
        row.set(column, FieldValue::Text(questionnaire.first_value(column)?));
    }

    row.reorder_front(&LEADING_COLUMNS);
    row.retain_columns(|c| !UNNAMED_COLUMN.is_match(c));
    Ok(row)
}

pub struct MergeLogic;

impl MergeLogic {
    /// Merge every participant under `data_dir` and write one file each into
    /// `out_dir`. Returns the written paths.
    pub fn run(data_dir: &Path, out_dir: &Path) -> AppResult<Vec<PathBuf>> {
        header("Merging participant data");

        let participants = discover(data_dir)?;
        // a failed write only skips that participant
        let report = BatchReport::run(participants, |id| {
            let mut table = RecordTable::new();
            table.push(merge_participant(data_dir, id)?);

            let path = out_dir.join(merged_file_name(id));
            write_table(&table, &path, ExportFormat::Csv, id.name())?;
            Ok(path)
        });

        batch_summary("Merge", report.processed(), report.skipped());
        Ok(report
            .into_successes()
            .into_iter()
            .map(|(_, path)| path)
            .collect())
    }
}
