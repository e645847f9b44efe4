//! rCohort main entrypoint.

use rcohort::run;
use rcohort::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
