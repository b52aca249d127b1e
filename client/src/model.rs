//! Flat record types displayed by the dashboard.
//!
//! DESIGN
//! ======
//! Records carry no lifecycle and no referential integrity. `employee_id` on
//! attendance rows is an informal pointer to `Employee::id`. Status enums own
//! their display labels so classification can match on the exact strings the
//! tables render.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

/// Presence state of an employee on the admin dashboard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum EmployeeStatus {
    CheckedIn,
    CheckedOut,
    OnLeave,
}

impl EmployeeStatus {
    pub const ALL: [Self; 3] = [Self::CheckedIn, Self::CheckedOut, Self::OnLeave];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::CheckedIn => "Checked In",
            Self::CheckedOut => "Checked Out",
            Self::OnLeave => "On Leave",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: u32,
    pub name: String,
    pub email: String,
    pub department: String,
    pub status: EmployeeStatus,
}

/// Outcome of a single attendance day.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AttendanceStatus {
    Present,
    Late,
    Absent,
}

impl AttendanceStatus {
    pub const ALL: [Self; 3] = [Self::Present, Self::Late, Self::Absent];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Present => "Present",
            Self::Late => "Late",
            Self::Absent => "Absent",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    pub id: u32,
    pub employee_id: u32,
    pub employee_name: String,
    pub timestamp: String,
    pub status: AttendanceStatus,
    pub check_in_time: Option<String>,
    pub check_out_time: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum InsightKind {
    Info,
    Warning,
    Success,
}

/// Canned AI observation shown in the insights panel.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiInsight {
    pub id: u32,
    pub kind: InsightKind,
    pub message: String,
    pub timestamp: String,
    pub confidence: Option<u8>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NotificationKind {
    Info,
    Warning,
    Error,
    Success,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: u32,
    pub kind: NotificationKind,
    pub message: String,
    pub timestamp: String,
    pub read: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrendDirection {
    Up,
    Down,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub value: f64,
    pub direction: TrendDirection,
}

/// Accent used by a KPI card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum KpiVariant {
    #[default]
    Default,
    Primary,
    Success,
    Warning,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Kpi {
    pub title: String,
    pub value: String,
    pub trend: Option<Trend>,
    pub icon: &'static str,
    pub variant: KpiVariant,
}

impl Kpi {
    pub fn new(title: &str, value: &str, icon: &'static str) -> Self {
        Self { title: title.to_owned(), value: value.to_owned(), trend: None, icon, variant: KpiVariant::Default }
    }

    #[must_use]
    pub fn trending(mut self, value: f64, direction: TrendDirection) -> Self {
        self.trend = Some(Trend { value, direction });
        self
    }

    #[must_use]
    pub fn variant(mut self, variant: KpiVariant) -> Self {
        self.variant = variant;
        self
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Camera {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MetricStatus {
    Active,
    Warning,
    Error,
}

/// One tile of the system status bar.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemMetric {
    pub label: String,
    pub status: MetricStatus,
    pub value: String,
}

// =============================================================================
// ANALYTICS SERIES
// =============================================================================

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MonthlyAttendance {
    pub month: &'static str,
    pub present: u32,
    pub late: u32,
    pub absent: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ProductivityPoint {
    pub month: &'static str,
    pub productivity: u32,
    pub efficiency: u32,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DepartmentShare {
    pub name: &'static str,
    pub value: u32,
    pub color: &'static str,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct WeeklyPoint {
    pub day: &'static str,
    pub hours: f64,
    pub tasks: u32,
}
