use crate::errors::{AppError, AppResult};
use crate::models::CategoryTable;
use crate::utils::path::{ensure_parent_dir, expand_tilde};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding one `user_<N>` folder per participant
    #[serde(default = "default_data_dir")]
    pub data_dir: String,
    /// Output folder of the merge job, input of the combine job
    #[serde(default = "default_merged_dir")]
    pub merged_dir: String,
    #[serde(default = "default_activity_summary_file")]
    pub activity_summary_file: String,
    #[serde(default = "default_all_users_file")]
    pub all_users_file: String,
    #[serde(default = "default_combine_first")]
    pub combine_first: u64,
    #[serde(default = "default_combine_last")]
    pub combine_last: u64,
    /// Participants known to have no usable data
    #[serde(default = "default_combine_skip")]
    pub combine_skip: Vec<u64>,
    #[serde(default)]
    pub categories: CategoryTable,
}

fn default_data_dir() -> String {
    "data/DataPaper".to_string()
}
fn default_merged_dir() -> String {
    "data/MergedUserData".to_string()
}
fn default_activity_summary_file() -> String {
    "data/activity_summary.csv".to_string()
}
fn default_all_users_file() -> String {
    "data/all_users.csv".to_string()
}
fn default_combine_first() -> u64 {
    1
}
fn default_combine_last() -> u64 {
    22
}
fn default_combine_skip() -> Vec<u64> {
    vec![11]
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            merged_dir: default_merged_dir(),
            activity_summary_file: default_activity_summary_file(),
            all_users_file: default_all_users_file(),
            combine_first: default_combine_first(),
            combine_last: default_combine_last(),
            combine_skip: default_combine_skip(),
            categories: CategoryTable::default(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rcohort")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rcohort")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rcohort.conf")
    }

    /// Load configuration from `path`, or return defaults if it does not exist.
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_yaml::from_str(&content)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        ensure_parent_dir(path)?;
        fs::write(path, self.to_yaml()?)?;
        Ok(())
    }

    pub fn to_yaml(&self) -> AppResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> AppResult<()> {
        self.categories.validate()?;

        if self.combine_first > self.combine_last {
            return Err(AppError::Config(format!(
                "combine_first ({}) is greater than combine_last ({})",
                self.combine_first, self.combine_last
            )));
        }

        Ok(())
    }

    pub fn data_path(&self) -> PathBuf {
        expand_tilde(&self.data_dir)
    }

    pub fn merged_path(&self) -> PathBuf {
        expand_tilde(&self.merged_dir)
    }

    pub fn activity_summary_path(&self) -> PathBuf {
        expand_tilde(&self.activity_summary_file)
    }

    pub fn all_users_path(&self) -> PathBuf {
        expand_tilde(&self.all_users_file)
    }

    /// Participant numbers covered by the combine job, skips removed.
    pub fn combine_ids(&self) -> Vec<u64> {
        (self.combine_first..=self.combine_last)
            .filter(|n| !self.combine_skip.contains(n))
            .collect()
    }
}
