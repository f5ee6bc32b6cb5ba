use chrono::NaiveDate;

use crate::attendance::day::AttendanceDay;
use crate::attendance::view_model::Employee;

const COLUMNS: [&str; 8] = [
    "Date",
    "Status",
    "Day Status",
    "Check In",
    "Check Out",
    "Total Hours",
    "Late",
    "Notes",
];

fn needs_formula_guard(value: &str) -> bool {
    matches!(value.chars().next(), Some('=' | '+' | '-' | '@'))
}

// Every field is individually quoted; leading formula characters get a
// spreadsheet guard.
fn escape_cell(value: &str) -> String {
    let mut sanitized = value.replace('"', "\"\"");
    if needs_formula_guard(&sanitized) {
        sanitized.insert(0, '\'');
    }
    format!("\"{}\"", sanitized)
}

fn append_row(buffer: &mut String, fields: &[String]) {
    for (idx, field) in fields.iter().enumerate() {
        if idx > 0 {
            buffer.push(',');
        }
        buffer.push_str(&escape_cell(field));
    }
    buffer.push('\n');
}

/// One row per reconciled day, header first.
pub fn month_to_csv(days: &[AttendanceDay]) -> String {
    let mut csv = String::new();
    append_row(
        &mut csv,
        &COLUMNS.map(str::to_string),
    );
    for day in days {
        append_row(
            &mut csv,
            &[
                day.date.format("%Y-%m-%d").to_string(),
                day.status.as_str().to_string(),
                day.day_status.map(|s| s.as_str()).unwrap_or("").to_string(),
                day.check_in_time
                    .map(|t| t.format("%H:%M:%S").to_string())
                    .unwrap_or_default(),
                day.check_out_time
                    .map(|t| t.format("%H:%M:%S").to_string())
                    .unwrap_or_default(),
                day.total_hours
                    .map(|h| format!("{:.2}", h))
                    .unwrap_or_default(),
                if day.is_late { "yes" } else { "no" }.to_string(),
                day.notes.clone().unwrap_or_default(),
            ],
        );
    }
    csv
}

/// `{first}_{last}_attendance_{MonthName}_{Year}.csv`
pub fn export_filename(employee: &Employee, year: i32, month: u32) -> String {
    let month_name = NaiveDate::from_ymd_opt(year, month, 1)
        .map(|d| d.format("%B").to_string())
        .unwrap_or_else(|| month.to_string());
    format!(
        "{}_{}_attendance_{}_{}.csv",
        employee.first_name, employee.last_name, month_name, year
    )
}
