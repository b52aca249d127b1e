//! Camera feed and live camera state.
//!
//! SYSTEM CONTEXT
//! ==============
//! `CameraFeedState` drives each card on the camera monitoring page: the
//! card requests media, then reports success or failure back into this
//! state. `LiveCameraState` is the single-user live view; its detection
//! readings are simulated by applying `DetectionRoll`s drawn on a timer.
//!
//! Both types are plain data so the transitions are testable without a
//! browser or a reactive runtime.

#[cfg(test)]
#[path = "camera_test.rs"]
mod camera_test;

use rand::Rng;

/// Upper bound (exclusive) of the simulated person count on a feed card.
pub const MAX_FEED_DETECTIONS: u32 = 5;

/// Most recent alerts kept by the live view.
pub const MAX_ALERTS: usize = 3;

// =============================================================================
// CAMERA FEED CARD
// =============================================================================

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CameraFeedState {
    #[default]
    Offline,
    Starting,
    Live {
        detections: u32,
    },
    Failed {
        reason: String,
    },
}

impl CameraFeedState {
    /// Begin acquiring media. Returns `false` when a start is already in
    /// flight or the feed is live.
    pub fn start(&mut self) -> bool {
        match self {
            Self::Offline | Self::Failed { .. } => {
                *self = Self::Starting;
                true
            }
            Self::Starting | Self::Live { .. } => false,
        }
    }

    /// Media arrived. Ignored unless a start is pending, so a stream that
    /// resolves after the user pressed stop does not revive the card.
    pub fn acquired(&mut self) -> bool {
        if *self == Self::Starting {
            *self = Self::Live { detections: 0 };
            true
        } else {
            false
        }
    }

    /// Media request failed.
    pub fn failed(&mut self, reason: impl Into<String>) {
        if *self == Self::Starting {
            *self = Self::Failed { reason: reason.into() };
        }
    }

    /// Stop the feed. Detection count resets with the state.
    pub fn stop(&mut self) {
        *self = Self::Offline;
    }

    /// Stop then start again.
    pub fn restart(&mut self) -> bool {
        self.stop();
        self.start()
    }

    /// Replace the simulated detection count while live.
    pub fn set_detections(&mut self, count: u32) {
        if let Self::Live { detections } = self {
            *detections = count;
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, Self::Live { .. })
    }

    pub fn detections(&self) -> u32 {
        match self {
            Self::Live { detections } => *detections,
            _ => 0,
        }
    }
}

// =============================================================================
// LIVE CAMERA
// =============================================================================

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DetectionStatus {
    Detected,
    Missing,
    Multiple,
    #[default]
    None,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Connected,
    Connecting,
    Disconnected,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CameraQuality {
    #[default]
    Hd,
    Sd,
    Low,
}

impl CameraQuality {
    pub const ALL: [Self; 3] = [Self::Hd, Self::Sd, Self::Low];

    pub fn key(self) -> &'static str {
        match self {
            Self::Hd => "HD",
            Self::Sd => "SD",
            Self::Low => "Low",
        }
    }

    pub fn option_label(self) -> &'static str {
        match self {
            Self::Hd => "HD (1080p)",
            Self::Sd => "SD (720p)",
            Self::Low => "Low (480p)",
        }
    }

    pub fn from_key(key: &str) -> Self {
        Self::ALL.into_iter().find(|q| q.key() == key).unwrap_or_default()
    }
}

/// One simulated detection tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DetectionRoll {
    /// Uniform draw in `[0, 1)` choosing the detection outcome.
    pub outcome: f64,
    /// Confidence shown when a face is detected.
    pub confidence: u8,
    /// Minutes quoted in a missing-face alert.
    pub missing_minutes: u32,
    /// Whether the connection drops on this tick.
    pub drop_connection: bool,
}

impl DetectionRoll {
    pub fn draw<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            outcome: rng.random_range(0.0..1.0),
            confidence: rng.random_range(85..=94),
            missing_minutes: rng.random_range(1..=10),
            drop_connection: rng.random_range(0.0..1.0) < 0.02,
        }
    }

    pub fn status(&self) -> DetectionStatus {
        if self.outcome < 0.7 {
            DetectionStatus::Detected
        } else if self.outcome < 0.85 {
            DetectionStatus::Missing
        } else {
            DetectionStatus::None
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LiveCameraState {
    pub streaming: bool,
    pub detection: DetectionStatus,
    pub confidence: u8,
    pub connection: ConnectionStatus,
    pub last_seen: Option<String>,
    pub quality: CameraQuality,
    pub alerts: Vec<String>,
}

impl LiveCameraState {
    /// Start or stop the stream. Starting enters `Connecting`; stopping
    /// clears the detection and disconnects.
    pub fn toggle_streaming(&mut self) {
        if self.streaming {
            self.streaming = false;
            self.detection = DetectionStatus::None;
            self.confidence = 0;
            self.connection = ConnectionStatus::Disconnected;
        } else {
            self.streaming = true;
            self.connection = ConnectionStatus::Connecting;
        }
    }

    pub fn face_detected(&self) -> bool {
        self.detection == DetectionStatus::Detected
    }

    /// Apply a simulated tick. `now` labels the last-seen time. Returns
    /// `true` when the tick dropped the connection. No-op while stopped.
    pub fn apply(&mut self, roll: DetectionRoll, now: &str) -> bool {
        if !self.streaming {
            return false;
        }
        self.detection = roll.status();
        if self.detection == DetectionStatus::Detected {
            self.confidence = roll.confidence;
            self.last_seen = Some(now.to_owned());
        } else {
            self.confidence = 0;
        }
        if self.detection == DetectionStatus::Missing {
            self.push_alert(format!("Face not detected for {} minutes", roll.missing_minutes));
        }
        if roll.drop_connection {
            self.connection = ConnectionStatus::Disconnected;
        }
        roll.drop_connection
    }

    /// Append an alert unless an identical one is already listed, keeping
    /// the newest `MAX_ALERTS`.
    pub fn push_alert(&mut self, message: String) {
        if self.alerts.contains(&message) {
            return;
        }
        self.alerts.push(message);
        if self.alerts.len() > MAX_ALERTS {
            let excess = self.alerts.len() - MAX_ALERTS;
            self.alerts.drain(..excess);
        }
    }

    /// Move the connection one step toward `Connected`.
    pub fn recover_connection(&mut self) {
        self.connection = match self.connection {
            ConnectionStatus::Disconnected => ConnectionStatus::Connecting,
            ConnectionStatus::Connecting | ConnectionStatus::Connected => ConnectionStatus::Connected,
        };
    }
}
