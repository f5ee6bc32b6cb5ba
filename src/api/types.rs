use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::error::DashboardError;
use crate::attendance::day::{AttendanceStatus, DayStatus};

/// Sparse per-day record as returned by the attendance endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub date: NaiveDate,
    pub status: AttendanceStatus,
    #[serde(default)]
    pub day_status: Option<DayStatus>,
    #[serde(default)]
    pub check_in_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub check_out_time: Option<NaiveDateTime>,
    #[serde(default)]
    pub total_hours: Option<f64>,
    #[serde(default)]
    pub is_late: bool,
    #[serde(default)]
    pub late_minutes: Option<i64>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub id: Option<String>,
}

/// Server-computed summary figures, carried as a cross-check against the
/// locally aggregated statistics. Every field is optional; deployments differ
/// in what they send.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerStatistics {
    #[serde(default)]
    pub total_days_in_month: Option<u32>,
    #[serde(default)]
    pub present_days: Option<u32>,
    #[serde(default)]
    pub absent_days: Option<u32>,
    #[serde(default)]
    pub complete_days: Option<u32>,
    #[serde(default)]
    pub half_days: Option<u32>,
    #[serde(default)]
    pub late_coming_days: Option<u32>,
    #[serde(default)]
    pub attendance_rate: Option<u32>,
}

/// Normalized result of a monthly fetch.
#[derive(Debug, Clone)]
pub struct MonthlyAttendance {
    pub records: Vec<AttendanceRecord>,
    pub statistics: Option<ServerStatistics>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateStatusRequest<'a> {
    pub status: AttendanceStatus,
    pub day_status: DayStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<&'a str>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateStatusResponse {
    #[serde(default)]
    pub id: Option<String>,
    pub message: String,
}

/// Maps every accepted response envelope into one [`MonthlyAttendance`].
///
/// The backend has been observed to answer with a bare array, with
/// `{"records": [...], "statistics": {...}}`, and with `{"results": [...]}`.
/// All shape handling lives here; downstream code sees exactly one type.
pub fn normalize_monthly_payload(payload: Value) -> Result<MonthlyAttendance, DashboardError> {
    if payload.is_array() {
        let records = parse_records(payload)?;
        return Ok(MonthlyAttendance {
            records,
            statistics: None,
        });
    }
    match payload {
        Value::Object(mut map) => {
            let raw_records = map
                .remove("records")
                .or_else(|| map.remove("results"))
                .ok_or_else(|| {
                    tracing::error!("monthly attendance payload has no records array");
                    DashboardError::Server(
                        "unexpected payload shape: no records array".to_string(),
                    )
                })?;
            let records = parse_records(raw_records)?;
            let statistics = map
                .remove("statistics")
                .filter(|v| !v.is_null())
                .map(serde_json::from_value::<ServerStatistics>)
                .transpose()
                .map_err(|err| {
                    DashboardError::Server(format!("unexpected statistics shape: {}", err))
                })?;
            Ok(MonthlyAttendance {
                records,
                statistics,
            })
        }
        other => {
            tracing::error!(payload = %other, "monthly attendance payload is not array or object");
            Err(DashboardError::Server(
                "unexpected payload shape: expected array or object".to_string(),
            ))
        }
    }
}

fn parse_records(value: Value) -> Result<Vec<AttendanceRecord>, DashboardError> {
    serde_json::from_value(value)
        .map_err(|err| DashboardError::Server(format!("unexpected record shape: {}", err)))
}
