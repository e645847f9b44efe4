use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use std::path::Path;

/// Handle the `config` command. Runs before the configuration is loaded so
/// that `--init --force` can replace a broken file.
pub fn handle(cmd: &Commands, path: &Path, data_dir: Option<&str>) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        init,
        force,
        check,
    } = cmd
    {
        if *init {
            ConfigLogic::init(path, *force)?;
        }

        if *check {
            ConfigLogic::check(path)?;
        }

        if *print_config || (!*init && !*check) {
            let mut cfg = Config::load_from(path)?;
            if let Some(dir) = data_dir {
                cfg.data_dir = dir.to_string();
            }
            ConfigLogic::print(&cfg)?;
        }
    }
    Ok(())
}
