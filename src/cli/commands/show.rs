use crate::config::Config;
use crate::core::activity::build_summary;
use crate::errors::AppResult;
use crate::ui::messages::{batch_summary, info};
use crate::utils::mins2readable;
use crate::utils::table::Table;

/// Handle the `show` command: render the activity summary, write nothing.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let (summary, report) = build_summary(&cfg.data_path(), &cfg.categories)?;

    if summary.is_empty() {
        info("No participant with a readable activity log.");
    } else {
        let table = Table::from_rows(summary.columns(), summary.string_rows());
        println!("{}", table.render());

        let total: i64 = report.successes().map(|(_, m)| m.total_minutes).sum();
        info(format!("Total active time: {}", mins2readable(total)));
    }

    batch_summary("Show", report.processed(), report.skipped());
    Ok(())
}
