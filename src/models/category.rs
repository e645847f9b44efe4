use crate::errors::{AppError, AppResult};
use crate::models::activity::ActivityCode;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// What a behavior category reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MetricKind {
    /// Summed minutes of matching intervals.
    Duration,
    /// Number of matching intervals, durations ignored.
    Events,
}

impl MetricKind {
    pub fn column_suffix(&self) -> &'static str {
        match self {
            MetricKind::Duration => "minutes",
            MetricKind::Events => "events",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BehaviorCategory {
    pub name: String,
    pub kind: MetricKind,
    pub codes: Vec<ActivityCode>,
}

impl BehaviorCategory {
    pub fn new(name: &str, kind: MetricKind, codes: &[ActivityCode]) -> Self {
        Self {
            name: name.to_string(),
            kind,
            codes: codes.to_vec(),
        }
    }

    /// Output column name: `<name>_minutes` or `<name>_events`.
    pub fn column(&self) -> String {
        format!("{}_{}", self.name, self.kind.column_suffix())
    }

    pub fn matches(&self, code: ActivityCode) -> bool {
        self.codes.contains(&code)
    }
}

/// Static category → activity-code configuration.
///
/// Order is preserved and drives the column order of the activity summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryTable {
    categories: Vec<BehaviorCategory>,
}

impl Default for CategoryTable {
    fn default() -> Self {
        use MetricKind::{Duration, Events};

        Self {
            categories: vec![
                BehaviorCategory::new("screen_small", Duration, &[8]),
                BehaviorCategory::new("screen_large", Duration, &[9]),
                BehaviorCategory::new("movement_light", Duration, &[4]),
                BehaviorCategory::new("movement_medium", Duration, &[5]),
                BehaviorCategory::new("movement_heavy", Duration, &[6]),
                BehaviorCategory::new("caffeine", Events, &[10]),
                BehaviorCategory::new("alcohol", Events, &[12]),
            ],
        }
    }
}

impl CategoryTable {
    pub fn new(categories: Vec<BehaviorCategory>) -> AppResult<Self> {
        let table = Self { categories };
        table.validate()?;
        Ok(table)
    }

    /// Names must be non-empty and unique, and a code may belong to at most
    /// one category.
    pub fn validate(&self) -> AppResult<()> {
        let mut names = HashSet::new();
        let mut owners: HashMap<ActivityCode, &str> = HashMap::new();

        for cat in &self.categories {
            if cat.name.trim().is_empty() {
                return Err(AppError::Config("category with empty name".into()));
            }
            if !names.insert(cat.name.as_str()) {
                return Err(AppError::Config(format!(
                    "duplicate category name '{}'",
                    cat.name
                )));
            }
            for code in &cat.codes {
                if let Some(owner) = owners.insert(*code, &cat.name)
                    && owner != cat.name
                {
                    return Err(AppError::Config(format!(
                        "activity code {} assigned to both '{}' and '{}'",
                        code, owner, cat.name
                    )));
                }
            }
        }

        Ok(())
    }

    pub fn categories(&self) -> &[BehaviorCategory] {
        &self.categories
    }

    pub fn columns(&self) -> Vec<String> {
        self.categories.iter().map(BehaviorCategory::column).collect()
    }
}
