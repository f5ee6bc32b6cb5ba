use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};

use crate::api::error::{DashboardError, ErrorResponse};
use crate::api::types::{MonthlyAttendance, UpdateStatusRequest, UpdateStatusResponse};
use crate::attendance::day::{AttendanceStatus, DayStatus};
use crate::config::Config;
use crate::session::Session;

/// The two remote operations the attendance core depends on.
///
/// Mockable with `MockAttendanceApi` in tests, so controller behavior can be
/// verified without a transport.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AttendanceApi: Send + Sync {
    /// Sparse per-day records plus the server's own summary for one
    /// employee/month.
    async fn fetch_monthly_attendance(
        &self,
        employee_id: &str,
        year: i32,
        month: u32,
    ) -> Result<MonthlyAttendance, DashboardError>;

    /// Persists a manual status edit for a single day.
    async fn update_attendance_status(
        &self,
        employee_id: &str,
        date: NaiveDate,
        status: AttendanceStatus,
        day_status: DayStatus,
        notes: Option<String>,
    ) -> Result<UpdateStatusResponse, DashboardError>;
}

/// HTTP implementation over the remote REST API.
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Session,
}

impl ApiClient {
    pub fn new(config: &Config, session: Session) -> Result<Self, DashboardError> {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(config.request_timeout_secs))
            .build()
            .map_err(|err| DashboardError::Server(format!("http client setup: {}", err)))?;
        Ok(Self {
            http,
            base_url: config.api_base_url.clone(),
            session,
        })
    }

    fn auth_headers(&self) -> Result<HeaderMap, DashboardError> {
        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_str(&self.session.bearer())
            .map_err(|_| DashboardError::Validation("access token is not valid ASCII".into()))?;
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }

    async fn error_from(response: reqwest::Response) -> DashboardError {
        let status = response.status();
        let body = response.json::<ErrorResponse>().await.ok();
        DashboardError::from_response(status, body)
    }
}

#[async_trait]
impl AttendanceApi for ApiClient {
    async fn fetch_monthly_attendance(
        &self,
        employee_id: &str,
        year: i32,
        month: u32,
    ) -> Result<MonthlyAttendance, DashboardError> {
        let url = format!("{}/attendance/records", self.base_url);
        tracing::debug!(employee_id, year, month, "fetching monthly attendance");
        let response = self
            .http
            .get(&url)
            .headers(self.auth_headers()?)
            .query(&[
                ("employee_id", employee_id.to_string()),
                ("year", year.to_string()),
                ("month", month.to_string()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        let payload: serde_json::Value = response.json().await?;
        crate::api::types::normalize_monthly_payload(payload)
    }

    async fn update_attendance_status(
        &self,
        employee_id: &str,
        date: NaiveDate,
        status: AttendanceStatus,
        day_status: DayStatus,
        notes: Option<String>,
    ) -> Result<UpdateStatusResponse, DashboardError> {
        let url = format!(
            "{}/attendance/records/{}/{}",
            self.base_url,
            employee_id,
            date.format("%Y-%m-%d")
        );
        tracing::debug!(
            employee_id,
            %date,
            status = status.as_str(),
            day_status = day_status.as_str(),
            "updating attendance status"
        );
        let response = self
            .http
            .put(&url)
            .headers(self.auth_headers()?)
            .json(&UpdateStatusRequest {
                status,
                day_status,
                notes: notes.as_deref(),
            })
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::error_from(response).await);
        }
        response
            .json::<UpdateStatusResponse>()
            .await
            .map_err(DashboardError::from)
    }
}
