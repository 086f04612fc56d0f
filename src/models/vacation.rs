//! Vacation record model and status lifecycle.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The approval state of a vacation record.
///
/// Records move from [`Selected`](VacationStatus::Selected) through
/// [`PendingApproval`](VacationStatus::PendingApproval) to either
/// [`Approved`](VacationStatus::Approved) or
/// [`Rejected`](VacationStatus::Rejected). State transitions are driven by
/// the surrounding application; the engine only reads and aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VacationStatus {
    /// The user has selected the day but not yet submitted it.
    Selected,
    /// The request has been submitted and awaits an administrator decision.
    PendingApproval,
    /// The request has been approved.
    Approved,
    /// The request has been rejected.
    Rejected,
}

impl VacationStatus {
    /// Returns true when the record counts toward vacation consumption.
    ///
    /// Selected, pending, and approved records all consume hours; only
    /// rejected records are excluded from balance and summary math.
    pub fn is_relevant(&self) -> bool {
        !matches!(self, VacationStatus::Rejected)
    }
}

impl std::fmt::Display for VacationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            VacationStatus::Selected => write!(f, "selected"),
            VacationStatus::PendingApproval => write!(f, "pending_approval"),
            VacationStatus::Approved => write!(f, "approved"),
            VacationStatus::Rejected => write!(f, "rejected"),
        }
    }
}

/// A single vacation day requested by a user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VacationRecord {
    /// Identifier of the user who requested the day.
    pub user_id: String,
    /// The calendar date of the vacation day.
    pub date: NaiveDate,
    /// The approval state of the record.
    pub status: VacationStatus,
}
