pub mod client;
pub mod error;
pub mod types;

pub use client::{ApiClient, AttendanceApi};
pub use error::{DashboardError, ErrorResponse};
pub use types::{
    AttendanceRecord, MonthlyAttendance, ServerStatistics, UpdateStatusRequest,
    UpdateStatusResponse,
};
