use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// All schedule weeks keyed by their label, in week order.
pub type Schedule = BTreeMap<WeekLabel, WeekSchedule>;

/// Key of a schedule week. Orders by week number and displays as `week_<N>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekLabel(pub u32);

impl fmt::Display for WeekLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "week_{}", self.0)
    }
}

impl Serialize for WeekLabel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The matches of one schedule week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekSchedule {
    pub week: u32,
    pub matches: Vec<ScheduleMatch>,
}

/// A single scheduled or played match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScheduleMatch {
    pub match_id: Option<u64>,
    /// Date label as shown on the page, e.g. `"Jumat, 15 Agustus 2025"`.
    pub match_date: String,
    /// `match_date` parsed, when it carries a day, month and year.
    pub calendar_date: Option<NaiveDate>,
    pub match_time: Option<String>,
    pub team1: TeamScore,
    pub team2: TeamScore,
    pub replay_link: Option<String>,
    pub status: MatchStatus,
}

/// One side of a scheduled match.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamScore {
    pub name: String,
    pub logo: String,
    pub score: Option<u32>,
}

/// Whether a match has been played.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    strum_macros::Display,
    strum_macros::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum MatchStatus {
    Scheduled,
    Completed,
}

impl MatchStatus {
    /// A match counts as played once both scores are known or a replay is linked.
    pub fn derive(scores_present: bool, replay_present: bool) -> Self {
        if scores_present || replay_present {
            MatchStatus::Completed
        } else {
            MatchStatus::Scheduled
        }
    }
}
