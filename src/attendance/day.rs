use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::api::error::DashboardError;

/// Coarse per-day presence classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceStatus {
    Present,
    Absent,
}

impl AttendanceStatus {
    /// Parses a form input value. Rejects anything outside the allowed set
    /// with a message naming the field, before any network call is made.
    pub fn parse(input: &str) -> Result<Self, DashboardError> {
        match input {
            "present" => Ok(AttendanceStatus::Present),
            "absent" => Ok(AttendanceStatus::Absent),
            other => Err(DashboardError::Validation(format!(
                "status must be one of: present, absent (got \"{}\")",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceStatus::Present => "present",
            AttendanceStatus::Absent => "absent",
        }
    }
}

/// Duration-based classification of a day, independent of [`AttendanceStatus`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayStatus {
    CompleteDay,
    HalfDay,
    Absent,
}

impl DayStatus {
    pub fn parse(input: &str) -> Result<Self, DashboardError> {
        match input {
            "complete_day" => Ok(DayStatus::CompleteDay),
            "half_day" => Ok(DayStatus::HalfDay),
            "absent" => Ok(DayStatus::Absent),
            other => Err(DashboardError::Validation(format!(
                "day_status must be one of: complete_day, half_day, absent (got \"{}\")",
                other
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DayStatus::CompleteDay => "complete_day",
            DayStatus::HalfDay => "half_day",
            DayStatus::Absent => "absent",
        }
    }
}

/// One reconciled calendar day for the displayed employee/month.
///
/// Exactly one of these exists per date in the requested range. Days the
/// server has no record for are synthesized as absent and carry no
/// `source_record_id`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttendanceDay {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    /// `None` when the server has not classified a present day yet.
    pub day_status: Option<DayStatus>,
    pub check_in_time: Option<NaiveDateTime>,
    pub check_out_time: Option<NaiveDateTime>,
    /// Server-derived duration, treated as opaque here.
    pub total_hours: Option<f64>,
    pub is_late: bool,
    pub late_minutes: Option<i64>,
    pub notes: Option<String>,
    /// Identifier of the backing attendance row, absent for synthesized days.
    pub source_record_id: Option<String>,
}

impl AttendanceDay {
    /// A day with zero recorded activity.
    pub fn synthesized_absent(date: NaiveDate) -> Self {
        Self {
            date,
            status: AttendanceStatus::Absent,
            day_status: Some(DayStatus::Absent),
            check_in_time: None,
            check_out_time: None,
            total_hours: None,
            is_late: false,
            late_minutes: None,
            notes: None,
            source_record_id: None,
        }
    }
}
