//! Holiday model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A calendar holiday.
///
/// Holidays are kept as a flat, unordered list. Classification matches a
/// day by exact date equality; when duplicate dates exist the first match
/// wins and no deduplication is performed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The display name of the holiday.
    pub name: String,
    /// Whether the holiday is an official public holiday.
    #[serde(default)]
    pub is_official: bool,
}

impl Holiday {
    /// Returns true when this holiday falls on the given date.
    pub fn falls_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }
}
