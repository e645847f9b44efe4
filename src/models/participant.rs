use regex::Regex;
use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

static NUMERIC_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(\d+)").expect("numeric suffix pattern"));

/// One study subject, identified by its data directory name (`user_<N>`).
///
/// Ordering follows the first run of digits in the name, so `user_2` sorts
/// before `user_10`. Names without digits sort last, by name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParticipantId {
    name: String,
    number: Option<u64>,
}

impl ParticipantId {
    pub const DIR_PREFIX: &'static str = "user_";

    /// Accepts any directory name starting with `user_`.
    pub fn from_dir_name(name: &str) -> Option<Self> {
        if !name.starts_with(Self::DIR_PREFIX) {
            return None;
        }

        let number = NUMERIC_SUFFIX
            .captures(name)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse::<u64>().ok());

        Some(Self {
            name: name.to_string(),
            number,
        })
    }

    pub fn from_number(n: u64) -> Self {
        Self {
            name: format!("{}{}", Self::DIR_PREFIX, n),
            number: Some(n),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn number(&self) -> Option<u64> {
        self.number
    }

    /// Text after the first `_` (`user_7` → `7`), used in output file names.
    pub fn suffix(&self) -> &str {
        self.name
            .split_once('_')
            .map(|(_, rest)| rest)
            .unwrap_or(&self.name)
    }
}

impl Ord for ParticipantId {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.number, other.number) {
            (Some(a), Some(b)) => a.cmp(&b).then_with(|| self.name.cmp(&other.name)),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => self.name.cmp(&other.name),
        }
    }
}

impl PartialOrd for ParticipantId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
