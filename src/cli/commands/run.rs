use crate::config::Config;
use crate::core::activity::ActivityLogic;
use crate::core::combine::CombineLogic;
use crate::core::merge::MergeLogic;
use crate::errors::AppResult;
use crate::export::ExportFormat;

/// Handle the `run` command (also the default when no command is given).
///
/// Combine reads the merged files, so merge always goes first.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let data_dir = cfg.data_path();
    let merged_dir = cfg.merged_path();

    MergeLogic::run(&data_dir, &merged_dir)?;
    ActivityLogic::run(
        &data_dir,
        &cfg.categories,
        &cfg.activity_summary_path(),
        ExportFormat::Csv,
    )?;
    CombineLogic::run(
        &data_dir,
        &merged_dir,
        &cfg.combine_ids(),
        &cfg.all_users_path(),
        ExportFormat::Csv,
    )?;

    Ok(())
}
