//! Client-side core of the HR attendance manager dashboard.
//!
//! The crate merges sparse server attendance records against a dense month
//! calendar, classifies and aggregates each day, and drives the manual
//! status-edit flow against the remote REST API. A UI shell renders the
//! resulting view state; nothing here touches the DOM or local storage.

pub mod api;
pub mod attendance;
pub mod config;
pub mod session;

pub use api::{ApiClient, AttendanceApi, DashboardError};
pub use attendance::{
    AttendanceDay, AttendanceStatistics, AttendanceStatus, DayStatus, EditPhase, Employee,
    MonthlyAttendanceView,
};
pub use config::Config;
pub use session::{Session, UserProfile};
