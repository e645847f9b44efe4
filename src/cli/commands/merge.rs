use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::merge::MergeLogic;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Merge { out_dir } = cmd {
        let out = out_dir
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(|| cfg.merged_path());
        MergeLogic::run(&cfg.data_path(), &out)?;
    }
    Ok(())
}
