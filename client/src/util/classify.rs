//! Value-to-category mappings used by tables, badges, and wellness cards.
//!
//! All functions here are total. String lookups fall back to an empty class
//! (or a neutral category) instead of failing, because table cells may carry
//! labels that no mapping knows about.

#[cfg(test)]
#[path = "classify_test.rs"]
mod classify_test;

use crate::model::{InsightKind, KpiVariant, MetricStatus, NotificationKind, TrendDirection};
use crate::state::camera::{ConnectionStatus, DetectionStatus};

// =============================================================================
// STATUS BADGES
// =============================================================================

/// Badge class for an employee or attendance status label. Unknown labels
/// get an empty class.
pub fn status_style(label: &str) -> &'static str {
    match label {
        "Checked In" | "Present" => "badge badge--success",
        "Checked Out" => "badge badge--muted",
        "On Leave" | "Late" => "badge badge--warning",
        "Absent" => "badge badge--danger",
        _ => "",
    }
}

pub fn insight_style(kind: InsightKind) -> &'static str {
    match kind {
        InsightKind::Success => "insight insight--success",
        InsightKind::Warning => "insight insight--warning",
        InsightKind::Info => "insight insight--info",
    }
}

pub fn insight_icon(kind: InsightKind) -> &'static str {
    match kind {
        InsightKind::Success => "✔",
        InsightKind::Warning => "⚠",
        InsightKind::Info => "↗",
    }
}

pub fn notification_style(kind: NotificationKind) -> &'static str {
    match kind {
        NotificationKind::Info => "notice notice--info",
        NotificationKind::Warning => "notice notice--warning",
        NotificationKind::Error => "notice notice--danger",
        NotificationKind::Success => "notice notice--success",
    }
}

pub fn metric_status_class(status: MetricStatus) -> &'static str {
    match status {
        MetricStatus::Active => "text-success",
        MetricStatus::Warning => "text-warning",
        MetricStatus::Error => "text-danger",
    }
}

pub fn metric_status_bg(status: MetricStatus) -> &'static str {
    match status {
        MetricStatus::Active => "bg-success",
        MetricStatus::Warning => "bg-warning",
        MetricStatus::Error => "bg-danger",
    }
}

pub fn kpi_variant_class(variant: KpiVariant) -> &'static str {
    match variant {
        KpiVariant::Default => "kpi-card",
        KpiVariant::Primary => "kpi-card kpi-card--primary",
        KpiVariant::Success => "kpi-card kpi-card--success",
        KpiVariant::Warning => "kpi-card kpi-card--warning",
    }
}

pub fn trend_class(direction: TrendDirection) -> &'static str {
    match direction {
        TrendDirection::Up => "kpi-card__trend text-success",
        TrendDirection::Down => "kpi-card__trend text-danger",
    }
}

// =============================================================================
// WELLNESS
// =============================================================================

/// Wellness category shared by the hub card and the wellness center.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WellnessLevel {
    Excellent,
    Good,
    Moderate,
    Fair,
    NeedsAttention,
}

impl WellnessLevel {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Moderate => "Moderate",
            Self::Fair => "Fair",
            Self::NeedsAttention => "Needs Attention",
        }
    }

    #[must_use]
    pub fn class(self) -> &'static str {
        match self {
            Self::Excellent => "level level--excellent",
            Self::Good => "level level--good",
            Self::Moderate | Self::Fair => "level level--fair",
            Self::NeedsAttention => "level level--attention",
        }
    }
}

/// Wellness hub card: plain average of the metrics, thresholds 75/60/40.
pub fn wellness_level(score: f64) -> WellnessLevel {
    if score >= 75.0 {
        WellnessLevel::Excellent
    } else if score >= 60.0 {
        WellnessLevel::Good
    } else if score >= 40.0 {
        WellnessLevel::Moderate
    } else {
        WellnessLevel::NeedsAttention
    }
}

/// Wellness center score: stress counts inverted.
pub fn wellness_center_score(energy: f64, stress: f64, focus: f64, sleep: f64) -> f64 {
    (energy + (100.0 - stress) + focus + sleep) / 4.0
}

/// Wellness center: thresholds 85/70/55 on `wellness_center_score`.
pub fn wellness_center_level(energy: f64, stress: f64, focus: f64, sleep: f64) -> WellnessLevel {
    let avg = wellness_center_score(energy, stress, focus, sleep);
    if avg >= 85.0 {
        WellnessLevel::Excellent
    } else if avg >= 70.0 {
        WellnessLevel::Good
    } else if avg >= 55.0 {
        WellnessLevel::Fair
    } else {
        WellnessLevel::NeedsAttention
    }
}

/// First matching recommendation, checked in energy, stress, focus, sleep
/// order.
pub fn wellness_suggestion(energy: f64, stress: f64, focus: f64, sleep: f64) -> &'static str {
    if energy < 50.0 {
        "You seem a bit low on energy today. Take a short walk or stretch break."
    } else if stress > 60.0 {
        "High stress detected! Try a few minutes of deep breathing or meditation."
    } else if focus < 60.0 {
        "Focus levels are low. Consider taking a short break or getting some fresh air."
    } else if sleep < 70.0 {
        "Your sleep quality could be better. Aim for 7-8 hours of quality sleep tonight."
    } else {
        "You're doing great today! Keep up your healthy routine."
    }
}

// =============================================================================
// CAMERA
// =============================================================================

pub fn detection_text(status: DetectionStatus) -> &'static str {
    match status {
        DetectionStatus::Detected => "Face Detected",
        DetectionStatus::Missing => "Face Missing",
        DetectionStatus::Multiple => "Multiple Faces",
        DetectionStatus::None => "No Detection",
    }
}

pub fn detection_class(status: DetectionStatus) -> &'static str {
    match status {
        DetectionStatus::Detected => "detection detection--ok",
        DetectionStatus::Missing => "detection detection--warn",
        DetectionStatus::Multiple => "detection detection--info",
        DetectionStatus::None => "detection detection--idle",
    }
}

pub fn connection_class(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Connected => "connection connection--up",
        ConnectionStatus::Connecting => "connection connection--pending",
        ConnectionStatus::Disconnected => "connection connection--down",
    }
}

pub fn connection_text(status: ConnectionStatus) -> &'static str {
    match status {
        ConnectionStatus::Connected => "Connected",
        ConnectionStatus::Connecting => "Connecting",
        ConnectionStatus::Disconnected => "Disconnected",
    }
}

/// Singular/plural label for a detection count.
pub fn people_label(count: u32) -> String {
    if count == 1 { "1 person".to_owned() } else { format!("{count} people") }
}
