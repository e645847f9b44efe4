use rcohort::core::aggregate::{aggregate, category_rollup, total_active_minutes};
use rcohort::models::activity::parse_activity_code;
use rcohort::models::{ActivityInterval, BehaviorCategory, CategoryTable, FieldValue, MetricKind};
use rcohort::utils::time::{DurationPolicy, interval_minutes, raw_minutes};

fn minutes(metric: Option<&FieldValue>) -> i64 {
    match metric {
        Some(FieldValue::Minutes(m)) => *m,
        other => panic!("expected minutes, got {:?}", other),
    }
}

fn events(metric: Option<&FieldValue>) -> usize {
    match metric {
        Some(FieldValue::Count(n)) => *n,
        other => panic!("expected count, got {:?}", other),
    }
}

#[test]
fn test_same_day_interval_is_exact_under_both_policies() {
    for (start, end, expected) in [("09:00", "09:45", 45), ("00:00", "23:59", 1439), ("13:07", "13:08", 1)] {
        assert_eq!(interval_minutes(start, end, DurationPolicy::ClampToZero), expected);
        assert_eq!(interval_minutes(start, end, DurationPolicy::OvernightWrap), expected);
    }
}

#[test]
fn test_midnight_sentinel_end_counts_to_end_of_day() {
    assert_eq!(interval_minutes("23:00", "24:00", DurationPolicy::ClampToZero), 60);
    assert_eq!(interval_minutes("23:00", "24:00", DurationPolicy::OvernightWrap), 60);
    assert_eq!(interval_minutes("00:00", "24:00", DurationPolicy::OvernightWrap), 1440);
}

#[test]
fn test_whole_day_ending_at_sentinel_is_not_clamped() {
    assert_eq!(interval_minutes("00:00", "24:00", DurationPolicy::ClampToZero), 1440);
    assert_eq!(interval_minutes("24:00", "24:00", DurationPolicy::ClampToZero), 1440);
    assert_eq!(interval_minutes("24:00", "24:00", DurationPolicy::OvernightWrap), 1440);
    // same interval written with "00:00" is zero-length
    assert_eq!(interval_minutes("00:00", "00:00", DurationPolicy::ClampToZero), 0);
}

#[test]
fn test_midnight_sentinel_start_is_midnight() {
    assert_eq!(raw_minutes("24:00", "01:30"), Some(90));
}

#[test]
fn test_overnight_interval_policies_differ() {
    assert_eq!(raw_minutes("23:30", "00:30"), Some(-1380));
    assert_eq!(interval_minutes("23:30", "00:30", DurationPolicy::OvernightWrap), 60);
    assert_eq!(interval_minutes("23:30", "00:30", DurationPolicy::ClampToZero), 0);
}

#[test]
fn test_zero_length_interval_policies_differ() {
    assert_eq!(interval_minutes("11:00", "11:00", DurationPolicy::ClampToZero), 0);
    assert_eq!(interval_minutes("11:00", "11:00", DurationPolicy::OvernightWrap), 1440);
}

#[test]
fn test_malformed_times_count_as_zero() {
    for (start, end) in [("xx:yy", "12:00"), ("10:00", ""), ("25:00", "26:00"), ("9h", "10h")] {
        assert_eq!(raw_minutes(start, end), None);
        assert_eq!(interval_minutes(start, end, DurationPolicy::ClampToZero), 0);
        assert_eq!(interval_minutes(start, end, DurationPolicy::OvernightWrap), 0);
    }
}

#[test]
fn test_overnight_screen_use_is_clamped_in_category_but_wrapped_in_total() {
    let log = vec![ActivityInterval::new(8, "23:30", "00:30")];
    let metrics = aggregate(&log, &CategoryTable::default());

    assert_eq!(minutes(metrics.get("screen_small_minutes")), 0);
    assert_eq!(metrics.total_minutes, 60);
}

#[test]
fn test_event_categories_ignore_duration() {
    let log = vec![
        ActivityInterval::new(10, "08:00", "08:00"),
        ActivityInterval::new(10, "bad", "worse"),
        ActivityInterval::new(12, "21:00", "22:30"),
    ];
    let metrics = aggregate(&log, &CategoryTable::default());

    assert_eq!(events(metrics.get("caffeine_events")), 2);
    assert_eq!(events(metrics.get("alcohol_events")), 1);
}

#[test]
fn test_malformed_row_does_not_stop_the_rest() {
    let log = vec![
        ActivityInterval::new(4, "10:00", "10:30"),
        ActivityInterval::new(4, "ten", "10:45"),
        ActivityInterval::new(4, "11:00", "11:20"),
    ];
    let metrics = aggregate(&log, &CategoryTable::default());

    assert_eq!(minutes(metrics.get("movement_light_minutes")), 50);
    assert_eq!(metrics.total_minutes, 50);
}

#[test]
fn test_uncategorized_codes_only_count_in_total() {
    let log = vec![
        ActivityInterval::new(2, "00:00", "07:00"),
        ActivityInterval::from_cells("not-a-code", "08:00", "08:10"),
        ActivityInterval::new(9, "20:00", "21:00"),
    ];
    let table = CategoryTable::default();
    let rollup = category_rollup(&log, &table);

    let total_in_categories: i64 = rollup
        .iter()
        .filter_map(|m| match m.value {
            FieldValue::Minutes(v) => Some(v),
            _ => None,
        })
        .sum();

    assert_eq!(total_in_categories, 60);
    assert_eq!(total_active_minutes(&log), 420 + 10 + 60);
}

#[test]
fn test_rollup_follows_table_order_and_covers_every_category() {
    let metrics = aggregate(&[], &CategoryTable::default());
    let columns: Vec<&str> = metrics.categories.iter().map(|m| m.column.as_str()).collect();

    assert_eq!(
        columns,
        vec![
            "screen_small_minutes",
            "screen_large_minutes",
            "movement_light_minutes",
            "movement_medium_minutes",
            "movement_heavy_minutes",
            "caffeine_events",
            "alcohol_events",
        ]
    );
    assert_eq!(metrics.total_minutes, 0);
}

#[test]
fn test_custom_category_groups_several_codes() {
    let table = CategoryTable::new(vec![
        BehaviorCategory::new("screen", MetricKind::Duration, &[8, 9]),
        BehaviorCategory::new("substances", MetricKind::Events, &[10, 12]),
    ])
    .expect("valid table");

    let log = vec![
        ActivityInterval::new(8, "09:00", "09:30"),
        ActivityInterval::new(9, "20:00", "21:15"),
        ActivityInterval::new(10, "07:00", "07:05"),
        ActivityInterval::new(12, "22:00", "22:00"),
    ];
    let metrics = aggregate(&log, &table);

    assert_eq!(minutes(metrics.get("screen_minutes")), 105);
    assert_eq!(events(metrics.get("substances_events")), 2);
}

#[test]
fn test_code_in_two_categories_is_rejected() {
    let result = CategoryTable::new(vec![
        BehaviorCategory::new("screen", MetricKind::Duration, &[8]),
        BehaviorCategory::new("phone", MetricKind::Duration, &[8]),
    ]);
    assert!(result.is_err());
}

#[test]
fn test_duplicate_category_name_is_rejected() {
    let result = CategoryTable::new(vec![
        BehaviorCategory::new("screen", MetricKind::Duration, &[8]),
        BehaviorCategory::new("screen", MetricKind::Events, &[9]),
    ]);
    assert!(result.is_err());
}

#[test]
fn test_activity_code_parsing() {
    assert_eq!(parse_activity_code("8"), Some(8));
    assert_eq!(parse_activity_code(" 12 "), Some(12));
    assert_eq!(parse_activity_code("8.0"), Some(8));
    assert_eq!(parse_activity_code("8.5"), None);
    assert_eq!(parse_activity_code("-1"), None);
    assert_eq!(parse_activity_code(""), None);
    assert_eq!(parse_activity_code("sleep"), None);
}

#[test]
fn test_minutes_are_written_with_one_decimal() {
    assert_eq!(FieldValue::Minutes(60).to_string(), "60.0");
    assert_eq!(FieldValue::Minutes(0).to_string(), "0.0");
    assert_eq!(FieldValue::Count(3).to_string(), "3");
}
