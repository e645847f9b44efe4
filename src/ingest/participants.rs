//! Participant directory discovery.

use crate::errors::{AppError, AppResult};
use crate::models::ParticipantId;
use std::fs;
use std::path::Path;

/// All `user_*` directories directly under `data_dir`, in numeric order.
pub fn discover(data_dir: &Path) -> AppResult<Vec<ParticipantId>> {
    if !data_dir.is_dir() {
        return Err(AppError::MissingFile(data_dir.to_path_buf()));
    }

    let mut ids = Vec::new();
    for entry in fs::read_dir(data_dir)? {
        let entry = entry?;
        if !entry.file_type()?.is_dir() {
            continue;
        }
        if let Some(id) = ParticipantId::from_dir_name(&entry.file_name().to_string_lossy()) {
            ids.push(id);
        }
    }

    ids.sort();
    Ok(ids)
}
