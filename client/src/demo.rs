//! Fixed demo data sets rendered by the dashboards.
//!
//! Every page builds its own copy on mount. Nothing here is shared mutable
//! state; callers may filter or mutate the returned vectors freely.

#[cfg(test)]
#[path = "demo_test.rs"]
mod demo_test;

use crate::model::{
    AiInsight, AttendanceRecord, AttendanceStatus, Camera, DepartmentShare, Employee, EmployeeStatus, InsightKind,
    Kpi, KpiVariant, MetricStatus, MonthlyAttendance, Notification, NotificationKind, ProductivityPoint,
    SystemMetric, TrendDirection, WeeklyPoint,
};

fn employee(id: u32, name: &str, email: &str, department: &str, status: EmployeeStatus) -> Employee {
    Employee { id, name: name.to_owned(), email: email.to_owned(), department: department.to_owned(), status }
}

fn record(
    id: u32,
    employee_id: u32,
    employee_name: &str,
    timestamp: &str,
    status: AttendanceStatus,
    check_in: Option<&str>,
    check_out: Option<&str>,
) -> AttendanceRecord {
    AttendanceRecord {
        id,
        employee_id,
        employee_name: employee_name.to_owned(),
        timestamp: timestamp.to_owned(),
        status,
        check_in_time: check_in.map(str::to_owned),
        check_out_time: check_out.map(str::to_owned),
    }
}

// =============================================================================
// PEOPLE & ATTENDANCE
// =============================================================================

pub fn employees() -> Vec<Employee> {
    vec![
        employee(1, "John Doe", "john.doe@company.com", "Engineering", EmployeeStatus::CheckedIn),
        employee(2, "Jane Smith", "jane.smith@company.com", "HR", EmployeeStatus::CheckedOut),
        employee(3, "Mike Johnson", "mike.johnson@company.com", "Sales", EmployeeStatus::CheckedIn),
        employee(4, "Sarah Williams", "sarah.williams@company.com", "Marketing", EmployeeStatus::OnLeave),
    ]
}

/// Today's check-ins shown on the admin dashboard.
pub fn today_attendance() -> Vec<AttendanceRecord> {
    use AttendanceStatus::{Absent, Late, Present};
    vec![
        record(1, 1, "John Doe", "09:00 AM", Present, Some("09:00 AM"), None),
        record(2, 2, "Jane Smith", "09:10 AM", Present, Some("09:10 AM"), None),
        record(3, 3, "Mike Johnson", "09:15 AM", Late, Some("09:15 AM"), None),
        record(4, 4, "Sarah Williams", "-", Absent, None, None),
    ]
}

/// The signed-in employee's last three days.
pub fn recent_attendance() -> Vec<AttendanceRecord> {
    use AttendanceStatus::{Late, Present};
    vec![
        record(1, 1, "You", "2024-01-15 09:00 AM", Present, Some("09:00 AM"), Some("05:30 PM")),
        record(2, 1, "You", "2024-01-14 09:05 AM", Present, Some("09:05 AM"), Some("05:25 PM")),
        record(3, 1, "You", "2024-01-13 09:15 AM", Late, Some("09:15 AM"), Some("05:20 PM")),
    ]
}

/// Full record set behind the attendance records page.
pub fn attendance_records() -> Vec<AttendanceRecord> {
    use AttendanceStatus::{Absent, Late, Present};
    vec![
        record(1, 1, "John Doe", "2024-01-15 09:00 AM", Present, Some("09:00 AM"), Some("05:30 PM")),
        record(2, 2, "Jane Smith", "2024-01-15 09:10 AM", Present, Some("09:10 AM"), Some("05:25 PM")),
        record(3, 3, "Mike Johnson", "2024-01-15 09:15 AM", Late, Some("09:15 AM"), Some("05:20 PM")),
        record(4, 4, "Sarah Williams", "2024-01-15", Absent, None, None),
        record(5, 5, "David Brown", "2024-01-15 08:55 AM", Present, Some("08:55 AM"), Some("05:35 PM")),
    ]
}

// =============================================================================
// INSIGHTS & NOTIFICATIONS
// =============================================================================

pub fn insights() -> Vec<AiInsight> {
    vec![
        AiInsight {
            id: 1,
            kind: InsightKind::Success,
            message: "Attendance rate improved by 5% this week compared to last week".to_owned(),
            timestamp: "2 hours ago".to_owned(),
            confidence: Some(95),
        },
        AiInsight {
            id: 2,
            kind: InsightKind::Info,
            message: "Detected unusual pattern: 3 employees consistently arrive 15 mins early".to_owned(),
            timestamp: "5 hours ago".to_owned(),
            confidence: Some(87),
        },
        AiInsight {
            id: 3,
            kind: InsightKind::Warning,
            message: "Camera #2 accuracy dropped to 94%. Consider recalibration".to_owned(),
            timestamp: "1 day ago".to_owned(),
            confidence: Some(92),
        },
    ]
}

pub fn notifications() -> Vec<Notification> {
    let n = |id, kind, message: &str, timestamp: &str| Notification {
        id,
        kind,
        message: message.to_owned(),
        timestamp: timestamp.to_owned(),
        read: false,
    };
    vec![
        n(1, NotificationKind::Warning, "Mike Johnson checked in late (09:15 AM)", "10 min ago"),
        n(2, NotificationKind::Info, "Weekly attendance report is ready", "1 hour ago"),
        n(3, NotificationKind::Success, "All cameras passed the nightly health check", "3 hours ago"),
    ]
}

// =============================================================================
// DASHBOARD KPIs
// =============================================================================

pub fn admin_kpis() -> Vec<Kpi> {
    vec![
        Kpi::new("Total Employees", "120", "👥")
            .trending(5.0, TrendDirection::Up)
            .variant(KpiVariant::Primary),
        Kpi::new("Attendance Rate", "92%", "📈")
            .trending(3.0, TrendDirection::Up)
            .variant(KpiVariant::Success),
        Kpi::new("System Uptime", "98.5%", "⚡"),
        Kpi::new("Active Cameras", "4/4", "📷").variant(KpiVariant::Success),
    ]
}

pub fn user_kpis() -> Vec<Kpi> {
    vec![
        Kpi::new("My Attendance Rate", "96%", "🎯")
            .trending(2.0, TrendDirection::Up)
            .variant(KpiVariant::Primary),
        Kpi::new("Days Present", "23", "👥").variant(KpiVariant::Success),
        Kpi::new("Avg. Check-in Time", "9:05 AM", "⏱"),
        Kpi::new("This Month Score", "A+", "📈").trending(5.0, TrendDirection::Up),
    ]
}

// =============================================================================
// CAMERAS & SYSTEM
// =============================================================================

pub fn cameras() -> Vec<Camera> {
    [
        ("CAM-001", "Main Entrance"),
        ("CAM-002", "Office Floor 1"),
        ("CAM-003", "Office Floor 2"),
        ("CAM-004", "Conference Room"),
    ]
    .into_iter()
    .map(|(id, name)| Camera { id: id.to_owned(), name: name.to_owned() })
    .collect()
}

pub fn system_metrics() -> Vec<SystemMetric> {
    [
        ("AI Engine", MetricStatus::Active, "98.5%"),
        ("Camera Network", MetricStatus::Active, "12/12 online"),
        ("Database", MetricStatus::Active, "Connected"),
        ("Face Recognition", MetricStatus::Warning, "94.2%"),
    ]
    .into_iter()
    .map(|(label, status, value)| SystemMetric { label: label.to_owned(), status, value: value.to_owned() })
    .collect()
}

// =============================================================================
// ANALYTICS
// =============================================================================

pub fn monthly_attendance() -> Vec<MonthlyAttendance> {
    [("Jan", 22, 2, 1), ("Feb", 20, 3, 2), ("Mar", 23, 1, 1), ("Apr", 21, 2, 2), ("May", 24, 1, 0), ("Jun", 22, 2, 1)]
        .into_iter()
        .map(|(month, present, late, absent)| MonthlyAttendance { month, present, late, absent })
        .collect()
}

pub fn productivity() -> Vec<ProductivityPoint> {
    [("Jan", 85, 78), ("Feb", 88, 82), ("Mar", 92, 85), ("Apr", 89, 83), ("May", 94, 87), ("Jun", 91, 86)]
        .into_iter()
        .map(|(month, productivity, efficiency)| ProductivityPoint { month, productivity, efficiency })
        .collect()
}

pub fn departments() -> Vec<DepartmentShare> {
    [
        ("Engineering", 35, "#6366f1"),
        ("Marketing", 25, "#10b981"),
        ("Sales", 20, "#f59e0b"),
        ("HR", 12, "#ef4444"),
        ("Finance", 8, "#8b5cf6"),
    ]
    .into_iter()
    .map(|(name, value, color)| DepartmentShare { name, value, color })
    .collect()
}

pub fn weekly_trend() -> Vec<WeeklyPoint> {
    [("Mon", 8.2, 12), ("Tue", 8.5, 15), ("Wed", 7.8, 11), ("Thu", 8.7, 16), ("Fri", 8.1, 13)]
        .into_iter()
        .map(|(day, hours, tasks)| WeeklyPoint { day, hours, tasks })
        .collect()
}
