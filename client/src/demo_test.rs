use super::*;

#[test]
fn attendance_records_has_five_rows_with_one_late() {
    let records = attendance_records();
    assert_eq!(records.len(), 5);
    let late: Vec<_> = records.iter().filter(|r| r.status == AttendanceStatus::Late).collect();
    assert_eq!(late.len(), 1);
    assert_eq!(late[0].employee_name, "Mike Johnson");
}

#[test]
fn absent_rows_have_no_check_times() {
    for record in attendance_records().iter().chain(today_attendance().iter()) {
        if record.status == AttendanceStatus::Absent {
            assert!(record.check_in_time.is_none());
            assert!(record.check_out_time.is_none());
        }
    }
}

#[test]
fn attendance_employee_ids_point_at_known_employees_where_present() {
    let ids: Vec<u32> = employees().iter().map(|e| e.id).collect();
    for record in today_attendance() {
        assert!(ids.contains(&record.employee_id), "dangling id {}", record.employee_id);
    }
}

#[test]
fn notifications_start_unread() {
    assert_eq!(notifications().len(), 3);
    assert!(notifications().iter().all(|n| !n.read));
}

#[test]
fn cameras_are_numbered_sequentially() {
    let ids: Vec<String> = cameras().into_iter().map(|c| c.id).collect();
    assert_eq!(ids, vec!["CAM-001", "CAM-002", "CAM-003", "CAM-004"]);
}

#[test]
fn department_shares_sum_to_one_hundred() {
    assert_eq!(departments().iter().map(|d| d.value).sum::<u32>(), 100);
}

#[test]
fn insights_all_carry_confidence() {
    assert!(insights().iter().all(|i| i.confidence.is_some()));
}
