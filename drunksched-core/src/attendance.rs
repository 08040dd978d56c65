//! Attendance marks and participant responses.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::{SchedError, SchedResult};

/// One participant's availability for a single candidate date.
///
/// On the wire marks are the symbols `○`, `△` and `×`. The words `yes`,
/// `maybe` and `no` are accepted as input as well. Anything else becomes
/// `Unrecognized` and counts for nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Mark {
    Yes,
    Maybe,
    No,
    Unrecognized,
}

impl Mark {
    pub fn symbol(&self) -> &'static str {
        match self {
            Mark::Yes => "○",
            Mark::Maybe => "△",
            Mark::No => "×",
            Mark::Unrecognized => "-",
        }
    }

    /// Points this mark adds to its date's score.
    pub fn weight(&self) -> u32 {
        match self {
            Mark::Yes => 2,
            Mark::Maybe => 1,
            Mark::No | Mark::Unrecognized => 0,
        }
    }
}

impl FromStr for Mark {
    type Err = SchedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "○" | "yes" | "y" => Ok(Mark::Yes),
            "△" | "maybe" | "m" => Ok(Mark::Maybe),
            "×" | "no" | "n" => Ok(Mark::No),
            other => Err(SchedError::validation(format!(
                "'{other}' is not an attendance mark (expected ○, △ or ×)"
            ))),
        }
    }
}

impl From<String> for Mark {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(Mark::Unrecognized)
    }
}

impl From<Mark> for String {
    fn from(mark: Mark) -> Self {
        mark.symbol().to_string()
    }
}

impl fmt::Display for Mark {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Partial map from candidate date to mark. Dates without a mark count as 0.
pub type Attendance = BTreeMap<NaiveDate, Mark>;

/// A participant's submission. The name is unique within one event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Response {
    pub name: String,
    #[serde(default)]
    pub attendance: Attendance,
}

impl Response {
    pub fn new(name: &str, attendance: Attendance) -> SchedResult<Self> {
        let name = name.trim();
        if name.is_empty() {
            return Err(SchedError::validation("participant name is required"));
        }

        Ok(Response {
            name: name.to_string(),
            attendance,
        })
    }

    pub fn mark_for(&self, date: &NaiveDate) -> Option<Mark> {
        self.attendance.get(date).copied()
    }
}
