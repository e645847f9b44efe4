use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::activity::ActivityLogic;
use crate::errors::AppResult;
use crate::utils::path::expand_tilde;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Activity { file, format } = cmd {
        let out = file
            .as_deref()
            .map(expand_tilde)
            .unwrap_or_else(|| cfg.activity_summary_path());
        ActivityLogic::run(&cfg.data_path(), &cfg.categories, &out, *format)?;
    }
    Ok(())
}
