mod common;
use common::{setup_workspace, write_file};
use rcohort::ingest::discover;
use rcohort::models::ParticipantId;
use std::fs;

#[test]
fn test_ids_sort_numerically() {
    let mut ids: Vec<ParticipantId> = ["user_2", "user_10", "user_1"]
        .iter()
        .filter_map(|n| ParticipantId::from_dir_name(n))
        .collect();
    ids.sort();

    let names: Vec<&str> = ids.iter().map(|i| i.name()).collect();
    assert_eq!(names, vec!["user_1", "user_2", "user_10"]);
}

#[test]
fn test_ids_without_number_sort_last() {
    let mut ids: Vec<ParticipantId> = ["user_x", "user_3"]
        .iter()
        .filter_map(|n| ParticipantId::from_dir_name(n))
        .collect();
    ids.sort();

    assert_eq!(ids[0].number(), Some(3));
    assert_eq!(ids[1].name(), "user_x");
}

#[test]
fn test_id_parts() {
    let id = ParticipantId::from_dir_name("user_17").expect("valid id");
    assert_eq!(id.number(), Some(17));
    assert_eq!(id.suffix(), "17");
    assert_eq!(id.to_string(), "user_17");

    assert_eq!(ParticipantId::from_number(4).name(), "user_4");
    assert!(ParticipantId::from_dir_name("participant_1").is_none());
}

#[test]
fn test_discover_only_returns_user_directories() {
    let ws = setup_workspace("discover");
    for d in ["user_10", "user_2", "notes", "user_1"] {
        fs::create_dir_all(ws.join(d)).expect("create dir");
    }
    write_file(&ws.join("user_99.csv"), "not a directory\n");

    let names: Vec<String> = discover(&ws)
        .expect("discover")
        .iter()
        .map(|i| i.name().to_string())
        .collect();

    assert_eq!(names, vec!["user_1", "user_2", "user_10"]);
}

#[test]
fn test_discover_fails_on_missing_data_dir() {
    let ws = setup_workspace("discover_missing");
    assert!(discover(&ws.join("nope")).is_err());
}
