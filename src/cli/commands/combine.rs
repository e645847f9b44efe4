use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::combine::CombineLogic;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Combine { file, format } = cmd {
        let out = file
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(|| cfg.all_users_path());
        CombineLogic::run(
            &cfg.data_path(),
            &cfg.merged_path(),
            &cfg.combine_ids(),
            &out,
            *format,
        )?;
    }
    Ok(())
}
