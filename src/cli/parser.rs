use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for rCohort
/// Batch aggregation of per-participant study data
#[derive(Parser)]
#[command(
    name = "rcohort",
    version = env!("CARGO_PKG_VERSION"),
    about = "Aggregate per-participant study data (user info, sleep, questionnaires, activity logs) into summary tables",
    long_about = None
)]
pub struct Cli {
    /// Use a different configuration file
    #[arg(global = true, long = "config", value_name = "FILE")]
    pub config: Option<String>,

    /// Override the participant data directory (folder of user_<N> dirs)
    #[arg(global = true, long = "data-dir", value_name = "DIR")]
    pub data_dir: Option<String>,

    /// Defaults to `run` when omitted
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Run merge, activity and combine in sequence
    Run,

    /// Write one merged_user_<N>.csv per participant (user info + sleep + questionnaire)
    Merge {
        /// Output folder (default: merged_dir from config)
        #[arg(long = "out-dir", value_name = "DIR")]
        out_dir: Option<String>,
    },

    /// Write the per-participant activity summary table
    Activity {
        /// Output file (default: activity_summary_file from config)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Output format: csv, json
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,
    },

    /// Write the combined all-participants table with activityMinutes
    Combine {
        /// Output file (default: all_users_file from config)
        #[arg(long, value_name = "FILE")]
        file: Option<String>,

        /// Output format: csv, json
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,
    },

    /// Print the activity summary to the terminal without writing files
    Show,

    /// Manage the configuration file
    Config {
        /// Print the effective configuration
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,

        /// Write the default configuration file
        #[arg(long = "init", help = "Write the default configuration file")]
        init: bool,

        /// Overwrite an existing file (with --init)
        #[arg(long, short = 'f', requires = "init")]
        force: bool,

        /// Validate the configuration file
        #[arg(long = "check", help = "Validate the configuration file")]
        check: bool,
    },
}
