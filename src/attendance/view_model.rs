use std::collections::HashSet;
use std::sync::Arc;

use chrono::NaiveDate;

use crate::api::client::AttendanceApi;
use crate::api::error::DashboardError;
use crate::api::types::ServerStatistics;
use crate::attendance::calendar::month_days;
use crate::attendance::day::{AttendanceDay, AttendanceStatus, DayStatus};
use crate::attendance::export;
use crate::attendance::reconcile::reconcile;
use crate::attendance::stats::AttendanceStatistics;

/// Roster entry the view is bound to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Employee {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
}

/// Where the edit flow currently stands. Terminal phases persist until the
/// next submission starts, so a UI shell can render the outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPhase {
    Idle,
    Validating,
    Submitting,
    Success,
    Refetching,
    Failed,
    RejectedLocally,
}

/// Per-date in-flight guard. Two submissions racing on the same server record
/// would make the outcome ambiguous, so the second one is rejected outright
/// rather than queued.
#[derive(Debug, Default)]
pub(crate) struct EditGate {
    in_flight: HashSet<NaiveDate>,
}

impl EditGate {
    pub(crate) fn begin(&mut self, date: NaiveDate) -> Result<(), DashboardError> {
        if !self.in_flight.insert(date) {
            return Err(DashboardError::EditInFlight(date));
        }
        Ok(())
    }

    pub(crate) fn finish(&mut self, date: NaiveDate) {
        self.in_flight.remove(&date);
    }

    pub(crate) fn clear(&mut self) {
        self.in_flight.clear();
    }
}

/// Month view for one employee: the dense reconciled day list, the locally
/// aggregated statistics, and the edit flow that keeps both in sync with the
/// server.
///
/// The view owns its data exclusively; callers drive it through `&mut`
/// methods, which serializes all mutation on the UI task.
pub struct MonthlyAttendanceView {
    api: Arc<dyn AttendanceApi>,
    employee: Employee,
    year: i32,
    month: u32,
    days: Vec<AttendanceDay>,
    statistics: AttendanceStatistics,
    server_statistics: Option<ServerStatistics>,
    loading: bool,
    phase: EditPhase,
    gate: EditGate,
    generation: u64,
}

impl MonthlyAttendanceView {
    pub fn new(api: Arc<dyn AttendanceApi>, employee: Employee, year: i32, month: u32) -> Self {
        Self {
            api,
            employee,
            year,
            month,
            days: Vec::new(),
            statistics: AttendanceStatistics::default(),
            server_statistics: None,
            loading: false,
            phase: EditPhase::Idle,
            gate: EditGate::default(),
            generation: 0,
        }
    }

    pub fn employee(&self) -> &Employee {
        &self.employee
    }

    pub fn year_month(&self) -> (i32, u32) {
        (self.year, self.month)
    }

    pub fn days(&self) -> &[AttendanceDay] {
        &self.days
    }

    pub fn day(&self, date: NaiveDate) -> Option<&AttendanceDay> {
        self.days.iter().find(|day| day.date == date)
    }

    /// Today's check-in/check-out entry, when today falls inside the
    /// displayed month.
    pub fn today(&self, today: NaiveDate) -> Option<&AttendanceDay> {
        self.day(today)
    }

    pub fn statistics(&self) -> &AttendanceStatistics {
        &self.statistics
    }

    pub fn server_statistics(&self) -> Option<&ServerStatistics> {
        self.server_statistics.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn phase(&self) -> EditPhase {
        self.phase
    }

    /// Fetches the month, reconciles against the full calendar, and
    /// recomputes statistics. Entries are rebuilt from scratch on every call.
    pub async fn load(&mut self) -> Result<(), DashboardError> {
        self.loading = true;
        let result = self
            .api
            .fetch_monthly_attendance(&self.employee.id, self.year, self.month)
            .await;
        self.loading = false;

        let monthly = result?;
        let calendar = month_days(self.year, self.month);
        self.days = reconcile(&calendar, monthly.records);
        self.statistics = AttendanceStatistics::aggregate(&self.days);
        self.server_statistics = monthly.statistics;
        self.cross_check_server_statistics();
        Ok(())
    }

    /// Switches the view to another month. Pending edit results for the old
    /// view are discarded when they arrive.
    pub async fn show_month(&mut self, year: i32, month: u32) -> Result<(), DashboardError> {
        self.year = year;
        self.month = month;
        self.generation = self.generation.wrapping_add(1);
        self.gate.clear();
        self.load().await
    }

    /// Submits a manual status edit for one day.
    ///
    /// Inputs are validated locally first; nothing reaches the transport on a
    /// rejected value. On success the day is patched in memory for display
    /// latency and the whole month is re-fetched so server-derived fields
    /// (hours, lateness) stay authoritative. On failure the prior day is left
    /// untouched and remains visible. Returns the server's confirmation
    /// message.
    pub async fn submit_edit(
        &mut self,
        date: NaiveDate,
        status_input: &str,
        day_status_input: &str,
        notes: Option<String>,
    ) -> Result<String, DashboardError> {
        self.phase = EditPhase::Validating;
        let (status, day_status) = match self.validate(date, status_input, day_status_input) {
            Ok(parsed) => parsed,
            Err(err) => {
                self.phase = EditPhase::RejectedLocally;
                return Err(err);
            }
        };

        self.gate.begin(date).inspect_err(|_| {
            self.phase = EditPhase::RejectedLocally;
        })?;
        self.phase = EditPhase::Submitting;
        let generation = self.generation;

        let result = self
            .api
            .update_attendance_status(
                &self.employee.id,
                date,
                status,
                day_status,
                notes.clone(),
            )
            .await;
        self.gate.finish(date);

        let response = match result {
            Ok(response) => response,
            Err(err) => {
                self.phase = EditPhase::Failed;
                match &err {
                    DashboardError::BadRequest(detail) => {
                        // Client and server disagree on what is valid.
                        tracing::error!(%date, detail = %detail, "server rejected a locally valid edit");
                    }
                    other => {
                        tracing::warn!(%date, error = %other, "attendance edit failed");
                    }
                }
                return Err(err);
            }
        };

        if generation != self.generation {
            // The result belongs to a view that has since navigated away.
            tracing::debug!(%date, "discarding edit result for a superseded view");
            self.phase = EditPhase::Idle;
            return Ok(response.message);
        }

        self.phase = EditPhase::Success;
        if let Some(day) = self.days.iter_mut().find(|day| day.date == date) {
            day.status = status;
            day.day_status = Some(day_status);
            day.notes = notes;
        }
        self.statistics = AttendanceStatistics::aggregate(&self.days);

        self.phase = EditPhase::Refetching;
        if let Err(err) = self.load().await {
            // The edit itself succeeded; the optimistic patch stays visible
            // until the next refresh.
            tracing::warn!(%date, error = %err, "post-edit refetch failed");
        }
        self.phase = EditPhase::Idle;
        Ok(response.message)
    }

    /// The month as a downloadable CSV: `(filename, contents)`.
    pub fn export_csv(&self) -> (String, String) {
        (
            export::export_filename(&self.employee, self.year, self.month),
            export::month_to_csv(&self.days),
        )
    }

    fn validate(
        &self,
        date: NaiveDate,
        status_input: &str,
        day_status_input: &str,
    ) -> Result<(AttendanceStatus, DayStatus), DashboardError> {
        let status = AttendanceStatus::parse(status_input)?;
        let day_status = DayStatus::parse(day_status_input)?;
        if self.day(date).is_none() {
            return Err(DashboardError::Validation(format!(
                "date {} is outside the displayed month",
                date
            )));
        }
        Ok((status, day_status))
    }

    fn cross_check_server_statistics(&self) {
        let Some(server) = &self.server_statistics else {
            return;
        };
        let local = &self.statistics;
        let mismatch = server
            .present_days
            .is_some_and(|v| v != local.present_days)
            || server.absent_days.is_some_and(|v| v != local.absent_days)
            || server
                .attendance_rate
                .is_some_and(|v| v != local.attendance_rate);
        if mismatch {
            tracing::warn!(
                employee_id = %self.employee.id,
                year = self.year,
                month = self.month,
                "server statistics disagree with local aggregation"
            );
        }
    }
}
