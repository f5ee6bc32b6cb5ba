use std::collections::HashMap;

use chrono::NaiveDate;

use crate::api::types::AttendanceRecord;
use crate::attendance::day::AttendanceDay;

/// Merges the sparse server-returned record set against the dense calendar.
///
/// Every calendar date yields exactly one [`AttendanceDay`], in calendar
/// order: a matching record maps field-for-field, a missing date synthesizes
/// an absent entry. The server is expected to return at most one record per
/// date; if it ever returns more, the later one wins.
pub fn reconcile(calendar: &[NaiveDate], records: Vec<AttendanceRecord>) -> Vec<AttendanceDay> {
    let mut by_date: HashMap<NaiveDate, AttendanceRecord> =
        HashMap::with_capacity(records.len());
    for record in records {
        by_date.insert(record.date, record);
    }

    calendar
        .iter()
        .map(|date| match by_date.remove(date) {
            Some(record) => day_from_record(record),
            None => AttendanceDay::synthesized_absent(*date),
        })
        .collect()
}

fn day_from_record(record: AttendanceRecord) -> AttendanceDay {
    AttendanceDay {
        date: record.date,
        status: record.status,
        day_status: record.day_status,
        check_in_time: record.check_in_time,
        check_out_time: record.check_out_time,
        total_hours: record.total_hours,
        is_late: record.is_late,
        late_minutes: record.late_minutes,
        notes: record.notes,
        source_record_id: record.id,
    }
}
