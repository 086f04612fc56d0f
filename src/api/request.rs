//! Request types for the Leave Engine API.
//!
//! This module defines the JSON request structures for the
//! `/summary/month` and `/balance/annual` endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DayHours, Holiday, UserSettings, VacationRecord, VacationStatus, WeeklyContract};

/// Request body for the `/summary/month` endpoint.
///
/// The contract and holidays are optional; when omitted, the values from
/// the loaded configuration are used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthSummaryRequest {
    /// The calendar year of the target month.
    pub year: i32,
    /// The target month, 1 through 12.
    pub month: u32,
    /// The user's vacation records for the month.
    #[serde(default)]
    pub vacations: Vec<VacationRecordRequest>,
    /// Optional weekly contract override.
    #[serde(default)]
    pub contract: Option<WeeklyContractRequest>,
    /// Optional holiday list override.
    #[serde(default)]
    pub holidays: Option<Vec<HolidayRequest>>,
}

/// Request body for the `/balance/annual` endpoint.
///
/// The contract, holidays, and settings are optional; when omitted, the
/// values from the loaded configuration are used.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnualBalanceRequest {
    /// The calendar year to scope consumption to.
    pub year: i32,
    /// The user's vacation records (records outside the year are ignored).
    #[serde(default)]
    pub vacations: Vec<VacationRecordRequest>,
    /// Optional entitlement settings override.
    #[serde(default)]
    pub settings: Option<UserSettingsRequest>,
    /// Optional weekly contract override.
    #[serde(default)]
    pub contract: Option<WeeklyContractRequest>,
    /// Optional holiday list override.
    #[serde(default)]
    pub holidays: Option<Vec<HolidayRequest>>,
}

/// Vacation record information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VacationRecordRequest {
    /// Identifier of the user who requested the day.
    #[serde(default)]
    pub user_id: String,
    /// The calendar date of the vacation day.
    pub date: NaiveDate,
    /// The approval state of the record.
    pub status: VacationStatus,
}

/// Holiday information in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HolidayRequest {
    /// The date of the holiday.
    pub date: NaiveDate,
    /// The name of the holiday.
    pub name: String,
    /// Whether the holiday is an official public holiday.
    #[serde(default)]
    pub is_official: bool,
}

/// Per-weekday hours in a contract override.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DayHoursRequest {
    /// Contracted morning hours.
    #[serde(default)]
    pub morning: Decimal,
    /// Contracted afternoon hours.
    #[serde(default)]
    pub afternoon: Decimal,
}

/// Weekly contract override in a calculation request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WeeklyContractRequest {
    /// Contracted hours for Monday.
    #[serde(default)]
    pub monday: DayHoursRequest,
    /// Contracted hours for Tuesday.
    #[serde(default)]
    pub tuesday: DayHoursRequest,
    /// Contracted hours for Wednesday.
    #[serde(default)]
    pub wednesday: DayHoursRequest,
    /// Contracted hours for Thursday.
    #[serde(default)]
    pub thursday: DayHoursRequest,
    /// Contracted hours for Friday.
    #[serde(default)]
    pub friday: DayHoursRequest,
    /// Contracted hours for Saturday.
    #[serde(default)]
    pub saturday: DayHoursRequest,
    /// Contracted hours for Sunday.
    #[serde(default)]
    pub sunday: DayHoursRequest,
}

/// Entitlement settings override in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserSettingsRequest {
    /// Base annual vacation-day entitlement at full time.
    pub annual_vacation_days: Decimal,
    /// Part-time work rate as a percentage.
    pub work_rate_percent: Decimal,
}

impl From<VacationRecordRequest> for VacationRecord {
    fn from(req: VacationRecordRequest) -> Self {
        VacationRecord {
            user_id: req.user_id,
            date: req.date,
            status: req.status,
        }
    }
}

impl From<HolidayRequest> for Holiday {
    fn from(req: HolidayRequest) -> Self {
        Holiday {
            date: req.date,
            name: req.name,
            is_official: req.is_official,
        }
    }
}

impl From<DayHoursRequest> for DayHours {
    fn from(req: DayHoursRequest) -> Self {
        DayHours {
            morning: req.morning,
            afternoon: req.afternoon,
        }
    }
}

impl From<WeeklyContractRequest> for WeeklyContract {
    fn from(req: WeeklyContractRequest) -> Self {
        WeeklyContract {
            monday: req.monday.into(),
            tuesday: req.tuesday.into(),
            wednesday: req.wednesday.into(),
            thursday: req.thursday.into(),
            friday: req.friday.into(),
            saturday: req.saturday.into(),
            sunday: req.sunday.into(),
        }
    }
}

impl From<UserSettingsRequest> for UserSettings {
    fn from(req: UserSettingsRequest) -> Self {
        UserSettings {
            annual_vacation_days: req.annual_vacation_days,
            work_rate_percent: req.work_rate_percent,
        }
    }
}
