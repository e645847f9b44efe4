use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use std::path::Path;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        print!("{}", cfg.to_yaml()?);
        Ok(())
    }

    /// Write the default configuration to `path`.
    pub fn init(path: &Path, force: bool) -> AppResult<()> {
        if path.exists() && !force {
            return Err(AppError::Config(format!(
                "{} already exists (use --force to overwrite)",
                path.display()
            )));
        }

        Config::default().save_to(path)?;
        success(format!("Config file: {}", path.display()));
        Ok(())
    }

    pub fn check(path: &Path) -> AppResult<()> {
        if !path.exists() {
            info(format!(
                "No config file at {}, built-in defaults are used",
                path.display()
            ));
            return Ok(());
        }

        let cfg = Config::load_from(path)?;
        success(format!(
            "{} is valid ({} categories, {} participants in combine range)",
            path.display(),
            cfg.categories.categories().len(),
            cfg.combine_ids().len()
        ));
        Ok(())
    }
}
