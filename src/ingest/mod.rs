// src/ingest/mod.rs

pub mod participants;
pub mod table;

pub use participants::discover;
pub use table::{CsvTable, UNNAMED_PREFIX};

use crate::models::ParticipantId;
use std::path::{Path, PathBuf};

pub const USER_INFO_FILE: &str = "user_info.csv";
pub const SLEEP_FILE: &str = "sleep.csv";
pub const QUESTIONNAIRE_FILE: &str = "questionnaire.csv";
pub const ACTIVITY_FILE: &str = "Activity.csv";

/// Path of one input file inside a participant's directory.
pub fn participant_file(data_dir: &Path, id: &ParticipantId, file: &str) -> PathBuf {
    data_dir.join(id.name()).join(file)
}
