pub mod calendar;
pub mod day;
pub mod export;
pub mod reconcile;
pub mod stats;
pub mod view_model;

pub use day::{AttendanceDay, AttendanceStatus, DayStatus};
pub use stats::AttendanceStatistics;
pub use view_model::{EditPhase, Employee, MonthlyAttendanceView};
