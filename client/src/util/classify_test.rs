use super::*;
use crate::model::{AttendanceStatus, EmployeeStatus};

// =============================================================
// Status badges
// =============================================================

#[test]
fn every_declared_status_has_a_badge() {
    for status in EmployeeStatus::ALL {
        assert!(!status_style(status.label()).is_empty(), "{status:?}");
    }
    for status in AttendanceStatus::ALL {
        assert!(!status_style(status.label()).is_empty(), "{status:?}");
    }
}

#[test]
fn unknown_status_falls_back_to_empty_class() {
    for label in ["", "present", "PRESENT", "Checked-In", "Vacation", " Late"] {
        assert_eq!(status_style(label), "", "{label:?}");
    }
}

#[test]
fn late_and_on_leave_share_warning_badge() {
    assert_eq!(status_style("Late"), status_style("On Leave"));
    assert_ne!(status_style("Late"), status_style("Absent"));
}

#[test]
fn insight_and_metric_mappings_are_non_empty() {
    for kind in [InsightKind::Info, InsightKind::Warning, InsightKind::Success] {
        assert!(!insight_style(kind).is_empty());
        assert!(!insight_icon(kind).is_empty());
    }
    for status in [MetricStatus::Active, MetricStatus::Warning, MetricStatus::Error] {
        assert!(!metric_status_class(status).is_empty());
        assert!(!metric_status_bg(status).is_empty());
    }
}

// =============================================================
// Wellness hub thresholds
// =============================================================

#[test]
fn wellness_level_thresholds_are_inclusive() {
    assert_eq!(wellness_level(100.0), WellnessLevel::Excellent);
    assert_eq!(wellness_level(75.0), WellnessLevel::Excellent);
    assert_eq!(wellness_level(74.99), WellnessLevel::Good);
    assert_eq!(wellness_level(60.0), WellnessLevel::Good);
    assert_eq!(wellness_level(59.99), WellnessLevel::Moderate);
    assert_eq!(wellness_level(40.0), WellnessLevel::Moderate);
    assert_eq!(wellness_level(39.99), WellnessLevel::NeedsAttention);
    assert_eq!(wellness_level(0.0), WellnessLevel::NeedsAttention);
}

#[test]
fn wellness_level_is_total_over_odd_inputs() {
    for score in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY, -1.0, 1e9] {
        assert!(!wellness_level(score).label().is_empty());
    }
}

// =============================================================
// Wellness center
// =============================================================

#[test]
fn wellness_center_inverts_stress() {
    assert_eq!(wellness_center_score(100.0, 0.0, 100.0, 100.0), 100.0);
    assert_eq!(wellness_center_score(100.0, 100.0, 100.0, 100.0), 75.0);
}

#[test]
fn wellness_center_level_thresholds() {
    // 85 energy, 20 stress, 78 focus, 92 sleep -> 83.75
    assert_eq!(wellness_center_level(85.0, 20.0, 78.0, 92.0), WellnessLevel::Good);
    assert_eq!(wellness_center_level(90.0, 10.0, 90.0, 90.0), WellnessLevel::Excellent);
    assert_eq!(wellness_center_level(60.0, 40.0, 60.0, 60.0), WellnessLevel::Fair);
    assert_eq!(wellness_center_level(40.0, 80.0, 40.0, 50.0), WellnessLevel::NeedsAttention);
}

#[test]
fn wellness_suggestion_checks_energy_first() {
    assert!(wellness_suggestion(40.0, 90.0, 10.0, 10.0).contains("energy"));
    assert!(wellness_suggestion(80.0, 61.0, 10.0, 10.0).contains("stress"));
    assert!(wellness_suggestion(80.0, 20.0, 59.0, 10.0).contains("Focus"));
    assert!(wellness_suggestion(80.0, 20.0, 80.0, 69.0).contains("sleep"));
    assert!(wellness_suggestion(80.0, 20.0, 80.0, 90.0).contains("doing great"));
}

// =============================================================
// Camera labels
// =============================================================

#[test]
fn detection_and_connection_labels_are_distinct() {
    let texts = [
        detection_text(DetectionStatus::Detected),
        detection_text(DetectionStatus::Missing),
        detection_text(DetectionStatus::Multiple),
        detection_text(DetectionStatus::None),
    ];
    for (i, a) in texts.iter().enumerate() {
        for b in &texts[i + 1..] {
            assert_ne!(a, b);
        }
    }
    assert_ne!(connection_class(ConnectionStatus::Connected), connection_class(ConnectionStatus::Disconnected));
}

#[test]
fn people_label_handles_singular() {
    assert_eq!(people_label(0), "0 people");
    assert_eq!(people_label(1), "1 person");
    assert_eq!(people_label(4), "4 people");
}
