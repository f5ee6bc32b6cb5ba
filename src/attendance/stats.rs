use serde::Serialize;

use crate::attendance::day::{AttendanceDay, AttendanceStatus, DayStatus};

/// Derived monthly figures, recomputed from the reconciled day list and never
/// persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct AttendanceStatistics {
    pub total_days_in_month: u32,
    pub present_days: u32,
    pub absent_days: u32,
    pub complete_days: u32,
    pub half_days: u32,
    pub late_coming_days: u32,
    /// Integer percentage, `round(present / total * 100)`, rounded half up.
    /// Zero for an empty month.
    pub attendance_rate: u32,
}

impl AttendanceStatistics {
    /// Single pass over the reconciled sequence. Pure: the same input always
    /// yields the same statistics.
    pub fn aggregate(days: &[AttendanceDay]) -> Self {
        let mut stats = AttendanceStatistics {
            total_days_in_month: days.len() as u32,
            ..AttendanceStatistics::default()
        };

        for day in days {
            match day.status {
                AttendanceStatus::Present => stats.present_days += 1,
                AttendanceStatus::Absent => stats.absent_days += 1,
            }
            match day.day_status {
                Some(DayStatus::CompleteDay) => stats.complete_days += 1,
                Some(DayStatus::HalfDay) => stats.half_days += 1,
                Some(DayStatus::Absent) | None => {}
            }
            if day.is_late {
                stats.late_coming_days += 1;
            }
        }

        if stats.total_days_in_month > 0 {
            let rate = f64::from(stats.present_days) / f64::from(stats.total_days_in_month);
            stats.attendance_rate = (rate * 100.0).round() as u32;
        }
        stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::attendance::calendar::month_days;
    use crate::attendance::day::AttendanceDay;
    use crate::attendance::reconcile::reconcile;
    use chrono::NaiveDate;

    fn present_day(date: NaiveDate, day_status: DayStatus, late: bool) -> AttendanceDay {
        AttendanceDay {
            status: AttendanceStatus::Present,
            day_status: Some(day_status),
            is_late: late,
            late_minutes: late.then_some(10),
            ..AttendanceDay::synthesized_absent(date)
        }
    }

    #[test]
    fn empty_sequence_degenerates_to_all_zero() {
        let stats = AttendanceStatistics::aggregate(&[]);
        assert_eq!(stats, AttendanceStatistics::default());
        assert_eq!(stats.attendance_rate, 0);
    }

    #[test]
    fn present_plus_absent_equals_total() {
        let calendar = month_days(2025, 3);
        let mut days = reconcile(&calendar, Vec::new());
        for day in days.iter_mut().take(12) {
            day.status = AttendanceStatus::Present;
            day.day_status = Some(DayStatus::CompleteDay);
        }
        let stats = AttendanceStatistics::aggregate(&days);
        assert_eq!(
            stats.present_days + stats.absent_days,
            stats.total_days_in_month
        );
        assert_eq!(stats.total_days_in_month, 31);
        assert_eq!(stats.present_days, 12);
    }

    #[test]
    fn counts_each_category() {
        let d = |day: u32| NaiveDate::from_ymd_opt(2025, 3, day).unwrap();
        let days = vec![
            present_day(d(3), DayStatus::CompleteDay, false),
            present_day(d(4), DayStatus::CompleteDay, true),
            present_day(d(5), DayStatus::HalfDay, false),
            AttendanceDay::synthesized_absent(d(6)),
        ];
        let stats = AttendanceStatistics::aggregate(&days);
        assert_eq!(stats.present_days, 3);
        assert_eq!(stats.absent_days, 1);
        assert_eq!(stats.complete_days, 2);
        assert_eq!(stats.half_days, 1);
        assert_eq!(stats.late_coming_days, 1);
        assert_eq!(stats.attendance_rate, 75);
    }

    #[test]
    fn unclassified_present_day_counts_toward_no_day_status_bucket() {
        let date = NaiveDate::from_ymd_opt(2025, 3, 3).unwrap();
        let mut day = AttendanceDay::synthesized_absent(date);
        day.status = AttendanceStatus::Present;
        day.day_status = None;
        let stats = AttendanceStatistics::aggregate(&[day]);
        assert_eq!(stats.present_days, 1);
        assert_eq!(stats.complete_days, 0);
        assert_eq!(stats.half_days, 0);
    }

    #[test]
    fn attendance_rate_rounds_half_up() {
        // 28 present of 29 days: 96.55 rounds to 97.
        let calendar = month_days(2024, 2);
        let mut days = reconcile(&calendar, Vec::new());
        for day in days.iter_mut().take(28) {
            day.status = AttendanceStatus::Present;
        }
        assert_eq!(AttendanceStatistics::aggregate(&days).attendance_rate, 97);

        // 1 present of 8 days: 12.5 rounds up to 13.
        let calendar: Vec<NaiveDate> = month_days(2025, 3).into_iter().take(8).collect();
        let mut days = reconcile(&calendar, Vec::new());
        days[0].status = AttendanceStatus::Present;
        assert_eq!(AttendanceStatistics::aggregate(&days).attendance_rate, 13);
    }

    #[test]
    fn aggregation_is_idempotent() {
        let calendar = month_days(2025, 5);
        let mut days = reconcile(&calendar, Vec::new());
        for day in days.iter_mut().take(20) {
            day.status = AttendanceStatus::Present;
            day.day_status = Some(DayStatus::CompleteDay);
        }
        let first = AttendanceStatistics::aggregate(&days);
        let second = AttendanceStatistics::aggregate(&days);
        assert_eq!(first, second);
    }
}
