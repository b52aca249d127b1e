use super::*;

#[test]
fn employee_status_labels_match_table_strings() {
    let labels: Vec<_> = EmployeeStatus::ALL.iter().map(|s| s.label()).collect();
    assert_eq!(labels, vec!["Checked In", "Checked Out", "On Leave"]);
}

#[test]
fn attendance_status_labels_match_filter_values() {
    let labels: Vec<_> = AttendanceStatus::ALL.iter().map(|s| s.label()).collect();
    assert_eq!(labels, vec!["Present", "Late", "Absent"]);
}

#[test]
fn kpi_builder_defaults_to_plain_card() {
    let kpi = Kpi::new("Days Present", "23", "👥");
    assert_eq!(kpi.title, "Days Present");
    assert_eq!(kpi.value, "23");
    assert!(kpi.trend.is_none());
    assert_eq!(kpi.variant, KpiVariant::Default);
}

#[test]
fn kpi_builder_sets_trend_and_variant() {
    let kpi = Kpi::new("Attendance Rate", "92%", "📈")
        .trending(3.0, TrendDirection::Up)
        .variant(KpiVariant::Success);
    assert_eq!(kpi.trend, Some(Trend { value: 3.0, direction: TrendDirection::Up }));
    assert_eq!(kpi.variant, KpiVariant::Success);
}

#[test]
fn attendance_record_serializes_optional_times_as_null() {
    let record = AttendanceRecord {
        id: 4,
        employee_id: 4,
        employee_name: "Sarah Williams".to_owned(),
        timestamp: "2024-01-15".to_owned(),
        status: AttendanceStatus::Absent,
        check_in_time: None,
        check_out_time: None,
    };
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["status"], "Absent");
    assert!(value["check_in_time"].is_null());
}
