//! Search, status filter, and summary counts for attendance tables.

#[cfg(test)]
#[path = "attendance_filter_test.rs"]
mod attendance_filter_test;

use crate::model::{AttendanceRecord, AttendanceStatus};

/// Status filter value that keeps every record.
pub const STATUS_FILTER_ALL: &str = "all";

/// Records whose employee name contains `search` (case-insensitive) and
/// whose status label equals `status_filter`, unless the filter is
/// [`STATUS_FILTER_ALL`]. An empty search matches every name.
pub fn filter_records(records: &[AttendanceRecord], search: &str, status_filter: &str) -> Vec<AttendanceRecord> {
    let needle = search.trim().to_lowercase();
    records
        .iter()
        .filter(|r| needle.is_empty() || r.employee_name.to_lowercase().contains(&needle))
        .filter(|r| status_filter == STATUS_FILTER_ALL || r.status.label() == status_filter)
        .cloned()
        .collect()
}

/// Summary tiles above the records table.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AttendanceStats {
    pub total: usize,
    pub present: usize,
    pub late: usize,
    pub absent: usize,
}

impl AttendanceStats {
    pub fn from_records(records: &[AttendanceRecord]) -> Self {
        records.iter().fold(Self { total: records.len(), ..Self::default() }, |mut acc, r| {
            match r.status {
                AttendanceStatus::Present => acc.present += 1,
                AttendanceStatus::Late => acc.late += 1,
                AttendanceStatus::Absent => acc.absent += 1,
            }
            acc
        })
    }
}

/// Pretty JSON of the given records, used by the export button.
///
/// # Errors
///
/// Returns the serializer error if the records cannot be encoded.
pub fn export_json(records: &[AttendanceRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(records)
}
