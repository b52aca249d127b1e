use super::*;
use crate::demo;

// =============================================================
// filter_records
// =============================================================

#[test]
fn late_filter_with_empty_search_returns_mike_only() {
    let rows = filter_records(&demo::attendance_records(), "", "Late");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].employee_name, "Mike Johnson");
}

#[test]
fn all_filter_with_empty_search_keeps_everything() {
    let records = demo::attendance_records();
    assert_eq!(filter_records(&records, "", STATUS_FILTER_ALL), records);
}

#[test]
fn search_is_case_insensitive_substring() {
    let records = demo::attendance_records();
    let rows = filter_records(&records, "JOHN", STATUS_FILTER_ALL);
    let names: Vec<_> = rows.iter().map(|r| r.employee_name.as_str()).collect();
    assert_eq!(names, ["John Doe", "Mike Johnson"]);
}

#[test]
fn search_and_status_combine() {
    let records = demo::attendance_records();
    let rows = filter_records(&records, "john", "Present");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].employee_name, "John Doe");
}

#[test]
fn unknown_status_or_name_yields_empty() {
    let records = demo::attendance_records();
    assert!(filter_records(&records, "", "late").is_empty());
    assert!(filter_records(&records, "nobody", STATUS_FILTER_ALL).is_empty());
    assert!(filter_records(&[], "", STATUS_FILTER_ALL).is_empty());
}

#[test]
fn filter_preserves_input_order() {
    let records = demo::attendance_records();
    let rows = filter_records(&records, "", "Present");
    let ids: Vec<_> = rows.iter().map(|r| r.id).collect();
    assert_eq!(ids, [1, 2, 5]);
}

// =============================================================
// AttendanceStats
// =============================================================

#[test]
fn stats_count_fixed_record_set() {
    let stats = AttendanceStats::from_records(&demo::attendance_records());
    assert_eq!(stats, AttendanceStats { total: 5, present: 3, late: 1, absent: 1 });
}

#[test]
fn stats_of_empty_set_are_zero() {
    assert_eq!(AttendanceStats::from_records(&[]), AttendanceStats::default());
}

// =============================================================
// export_json
// =============================================================

#[test]
fn export_includes_status_and_missing_times() {
    let rows = filter_records(&demo::attendance_records(), "sarah", STATUS_FILTER_ALL);
    let json = export_json(&rows).expect("export");
    let value: serde_json::Value = serde_json::from_str(&json).expect("parse");
    assert_eq!(value[0]["employee_name"], "Sarah Williams");
    assert_eq!(value[0]["status"], "Absent");
    assert!(value[0]["check_in_time"].is_null());
}
