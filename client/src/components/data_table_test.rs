use super::*;
use crate::demo;

// =============================================================
// format_header
// =============================================================

#[test]
fn format_header_splits_camel_case() {
    assert_eq!(format_header("employeeName"), "Employee Name");
    assert_eq!(format_header("checkInTime"), "Check In Time");
    assert_eq!(format_header("status"), "Status");
    assert_eq!(format_header(""), "");
}

#[test]
fn status_columns_are_detected_case_insensitively() {
    assert!(is_status_column("status"));
    assert!(is_status_column("attendanceStatus"));
    assert!(is_status_column("STATUS"));
    assert!(!is_status_column("timestamp"));
}

// =============================================================
// TableRow
// =============================================================

#[test]
fn employee_cells_follow_default_columns() {
    let rows = table_cells(&demo::employees(), Employee::COLUMNS);
    assert_eq!(rows[0], ["John Doe", "john.doe@company.com", "Engineering", "Checked In"]);
    assert_eq!(rows[3][3], "On Leave");
}

#[test]
fn attendance_cells_fill_missing_times_with_dash() {
    let records = demo::today_attendance();
    let rows = table_cells(&records, &["employeeName", "checkInTime", "checkOutTime", "status"]);
    assert_eq!(rows[0], ["John Doe", "09:00 AM", "-", "Present"]);
    assert_eq!(rows[3], ["Sarah Williams", "-", "-", "Absent"]);
}

#[test]
fn unknown_column_renders_empty_cell() {
    let rows = table_cells(&demo::employees(), &["salary"]);
    assert!(rows.iter().all(|r| r[0] == EMPTY_CELL));
}

#[test]
fn no_records_yield_no_rows() {
    let rows = table_cells::<AttendanceRecord>(&[], AttendanceRecord::COLUMNS);
    assert!(rows.is_empty());
}
