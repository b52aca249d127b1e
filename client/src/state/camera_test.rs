use super::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn roll(outcome: f64) -> DetectionRoll {
    DetectionRoll { outcome, confidence: 90, missing_minutes: 4, drop_connection: false }
}

fn streaming() -> LiveCameraState {
    LiveCameraState { streaming: true, ..LiveCameraState::default() }
}

// =============================================================
// CameraFeedState
// =============================================================

#[test]
fn feed_starts_offline_with_no_detections() {
    let feed = CameraFeedState::default();
    assert_eq!(feed, CameraFeedState::Offline);
    assert_eq!(feed.detections(), 0);
    assert!(!feed.is_live());
}

#[test]
fn start_then_acquired_goes_live() {
    let mut feed = CameraFeedState::default();
    assert!(feed.start());
    assert_eq!(feed, CameraFeedState::Starting);
    assert!(feed.acquired());
    assert!(feed.is_live());
}

#[test]
fn start_is_rejected_while_pending_or_live() {
    let mut feed = CameraFeedState::Starting;
    assert!(!feed.start());
    feed = CameraFeedState::Live { detections: 2 };
    assert!(!feed.start());
    assert_eq!(feed.detections(), 2);
}

#[test]
fn failure_leaves_feed_failed_until_retried() {
    let mut feed = CameraFeedState::default();
    feed.start();
    feed.failed("permission denied");
    assert_eq!(feed, CameraFeedState::Failed { reason: "permission denied".into() });
    assert!(feed.start());
    assert!(feed.acquired());
}

#[test]
fn late_media_after_stop_is_ignored() {
    let mut feed = CameraFeedState::default();
    feed.start();
    feed.stop();
    assert!(!feed.acquired());
    feed.failed("late");
    assert_eq!(feed, CameraFeedState::Offline);
}

#[test]
fn stop_resets_detections() {
    let mut feed = CameraFeedState::Live { detections: 0 };
    feed.set_detections(3);
    assert_eq!(feed.detections(), 3);
    feed.stop();
    assert_eq!(feed.detections(), 0);
}

#[test]
fn set_detections_is_ignored_when_not_live() {
    let mut feed = CameraFeedState::Starting;
    feed.set_detections(4);
    assert_eq!(feed, CameraFeedState::Starting);
}

#[test]
fn restart_from_live_goes_back_to_starting() {
    let mut feed = CameraFeedState::Live { detections: 4 };
    assert!(feed.restart());
    assert_eq!(feed, CameraFeedState::Starting);
}

// =============================================================
// DetectionRoll
// =============================================================

#[test]
fn roll_outcome_boundaries() {
    assert_eq!(roll(0.0).status(), DetectionStatus::Detected);
    assert_eq!(roll(0.69).status(), DetectionStatus::Detected);
    assert_eq!(roll(0.7).status(), DetectionStatus::Missing);
    assert_eq!(roll(0.849).status(), DetectionStatus::Missing);
    assert_eq!(roll(0.85).status(), DetectionStatus::None);
}

#[test]
fn drawn_rolls_stay_in_range() {
    let mut rng = SmallRng::seed_from_u64(21);
    for _ in 0..500 {
        let r = DetectionRoll::draw(&mut rng);
        assert!((0.0..1.0).contains(&r.outcome));
        assert!((85..=94).contains(&r.confidence));
        assert!((1..=10).contains(&r.missing_minutes));
    }
}

// =============================================================
// LiveCameraState
// =============================================================

#[test]
fn toggle_starts_connecting_and_stop_disconnects() {
    let mut cam = LiveCameraState::default();
    cam.toggle_streaming();
    assert!(cam.streaming);
    assert_eq!(cam.connection, ConnectionStatus::Connecting);
    cam.apply(roll(0.1), "10:00:00");
    cam.toggle_streaming();
    assert!(!cam.streaming);
    assert_eq!(cam.detection, DetectionStatus::None);
    assert_eq!(cam.confidence, 0);
    assert_eq!(cam.connection, ConnectionStatus::Disconnected);
}

#[test]
fn apply_is_noop_while_stopped() {
    let mut cam = LiveCameraState::default();
    assert!(!cam.apply(DetectionRoll { drop_connection: true, ..roll(0.1) }, "now"));
    assert_eq!(cam, LiveCameraState::default());
}

#[test]
fn detected_tick_records_confidence_and_last_seen() {
    let mut cam = streaming();
    cam.apply(roll(0.2), "10:30:00");
    assert!(cam.face_detected());
    assert_eq!(cam.confidence, 90);
    assert_eq!(cam.last_seen.as_deref(), Some("10:30:00"));

    cam.apply(roll(0.9), "10:30:03");
    assert_eq!(cam.confidence, 0);
    assert_eq!(cam.last_seen.as_deref(), Some("10:30:00"));
}

#[test]
fn missing_tick_raises_alert() {
    let mut cam = streaming();
    cam.apply(roll(0.75), "now");
    assert_eq!(cam.alerts, ["Face not detected for 4 minutes"]);
}

#[test]
fn alerts_are_deduplicated() {
    let mut cam = streaming();
    cam.apply(roll(0.75), "a");
    cam.apply(roll(0.75), "b");
    assert_eq!(cam.alerts.len(), 1);
}

#[test]
fn alerts_keep_three_most_recent() {
    let mut cam = streaming();
    for minutes in 1..=5 {
        cam.apply(DetectionRoll { missing_minutes: minutes, ..roll(0.8) }, "t");
    }
    assert_eq!(
        cam.alerts,
        ["Face not detected for 3 minutes", "Face not detected for 4 minutes", "Face not detected for 5 minutes"]
    );
}

#[test]
fn dropped_connection_recovers_in_two_steps() {
    let mut cam = streaming();
    cam.connection = ConnectionStatus::Connected;
    assert!(cam.apply(DetectionRoll { drop_connection: true, ..roll(0.1) }, "t"));
    assert_eq!(cam.connection, ConnectionStatus::Disconnected);
    cam.recover_connection();
    assert_eq!(cam.connection, ConnectionStatus::Connecting);
    cam.recover_connection();
    assert_eq!(cam.connection, ConnectionStatus::Connected);
    cam.recover_connection();
    assert_eq!(cam.connection, ConnectionStatus::Connected);
}

#[test]
fn quality_keys_parse_with_hd_fallback() {
    for q in CameraQuality::ALL {
        assert_eq!(CameraQuality::from_key(q.key()), q);
    }
    assert_eq!(CameraQuality::from_key("4K"), CameraQuality::Hd);
}
