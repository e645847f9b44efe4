#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub fn rco() -> Command {
    cargo_bin_cmd!("rcohort")
}

/// Fresh working folder inside the system temp dir (removed if already there)
pub fn setup_workspace(name: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("rcohort_{}", name));
    fs::remove_dir_all(&path).ok();
    fs::create_dir_all(&path).expect("create workspace");
    path
}

pub fn data_dir(ws: &Path) -> PathBuf {
    ws.join("data").join("DataPaper")
}

pub fn merged_dir(ws: &Path) -> PathBuf {
    ws.join("data").join("MergedUserData")
}

pub fn write_file(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("create parent dir");
    }
    fs::write(path, content).expect("write fixture");
}

/// One day of activity covering every edge case:
/// screen_small 45 (+ an overnight row clamped to 0), screen_large 120 (ends at 24:00),
/// movement_light 30, movement_medium malformed, one caffeine with start == end,
/// one alcohol. Overnight-corrected total: 2175 minutes.
pub const SAMPLE_ACTIVITY: &str = "\
,Activity,Start,End,Day
0,2,00:00,07:00,1
1,8,09:00,09:45,1
2,4,10:00,10:30,1
3,10,11:00,11:00,1
4,8,23:30,00:30,1
5,9,22:00,24:00,1
6,12,20:00,21:00,1
7,5,xx:yy,12:00,1
";

pub const SAMPLE_SUMMARY_ROW: &str = "45.0,120.0,30.0,0.0,0.0,1,1";

pub const SUMMARY_HEADER: &str = "user_id,screen_small_minutes,screen_large_minutes,movement_light_minutes,movement_medium_minutes,movement_heavy_minutes,caffeine_events,alcohol_events";

pub const MERGED_HEADER: &str = "participant,Gender,Height,Weight,Age,In Bed Time,Out Bed Time,Total Sleep Time (TST),Efficiency,MEQ,Daily_stress,Pittsburgh";

/// Write user_info, sleep and questionnaire for participant `n`, plus
/// `Activity.csv` when `activity` is given. Age is 20 + n.
pub fn write_participant(data_dir: &Path, n: u64, activity: Option<&str>) {
    let dir = data_dir.join(format!("user_{n}"));

    write_file(
        &dir.join("user_info.csv"),
        &format!(",Gender,Weight,Height,Age\n0,M,65,169,{}\n", 20 + n),
    );
    write_file(
        &dir.join("sleep.csv"),
        ",In Bed Time,Out Bed Time,Total Sleep Time (TST),Efficiency\n0,23:30,07:00,420,91.5\n",
    );
    write_file(
        &dir.join("questionnaire.csv"),
        ",MEQ,STAI1,Pittsburgh,Daily_stress\n0,54,38,5,12\n",
    );

    if let Some(content) = activity {
        write_file(&dir.join("Activity.csv"), content);
    }
}

/// Merged row expected for `write_participant(.., n, ..)`
pub fn merged_row(n: u64) -> String {
    format!("user_{n},M,169,65,{},23:30,07:00,420,91.5,54,12,5", 20 + n)
}

/// Config file pointing every path inside the workspace
pub fn write_config(ws: &Path, extra: &str) -> PathBuf {
    let path = ws.join("rcohort.conf");
    let yaml = format!(
        "data_dir: '{}'\nmerged_dir: '{}'\nactivity_summary_file: '{}'\nall_users_file: '{}'\ncombine_first: 1\ncombine_last: 4\ncombine_skip: [3]\n{}",
        data_dir(ws).display(),
        merged_dir(ws).display(),
        ws.join("out").join("activity_summary.csv").display(),
        ws.join("out").join("all_users.csv").display(),
        extra
    );
    write_file(&path, &yaml);
    path
}

pub fn read(path: &Path) -> String {
    fs::read_to_string(path).unwrap_or_else(|e| panic!("read {}: {e}", path.display()))
}
