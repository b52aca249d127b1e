use super::*;

// =============================================================
// parse_slider
// =============================================================

#[test]
fn parse_slider_accepts_in_range_values() {
    assert_eq!(parse_slider("87", &CONFIDENCE_RANGE, 95), 87);
    assert_eq!(parse_slider(" 3 ", &PROCESSING_RANGE, 5), 3);
}

#[test]
fn parse_slider_clamps_to_bounds() {
    assert_eq!(parse_slider("20", &CONFIDENCE_RANGE, 95), 50);
    assert_eq!(parse_slider("140", &CONFIDENCE_RANGE, 95), 100);
    assert_eq!(parse_slider("0", &PROCESSING_RANGE, 5), 1);
    assert_eq!(parse_slider("30", &PROCESSING_RANGE, 5), 10);
}

#[test]
fn parse_slider_keeps_previous_on_garbage() {
    assert_eq!(parse_slider("", &CONFIDENCE_RANGE, 91), 91);
    assert_eq!(parse_slider("abc", &PROCESSING_RANGE, 7), 7);
    assert_eq!(parse_slider("-4", &PROCESSING_RANGE, 2), 2);
}

// =============================================================
// Defaults
// =============================================================

#[test]
fn defaults_match_initial_form() {
    let system = SystemToggles::default();
    assert!(system.auto_backup && system.ai_monitoring && system.email_notifications);
    assert!(!system.sms_alerts);

    let ai = AiModelSettings::default();
    assert_eq!(ai.confidence_threshold, 95);
    assert_eq!(ai.max_processing_secs, 5);
    assert!(ai.auto_retrain);
    assert!(CONFIDENCE_RANGE.contains(&ai.confidence_threshold));
    assert!(PROCESSING_RANGE.contains(&ai.max_processing_secs));
}
