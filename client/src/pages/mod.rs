//! Page modules for the screens the session can resolve to.
//!
//! ARCHITECTURE
//! ============
//! Each page owns its page-scoped signals and tickers and delegates
//! rendering details to `components`. The app root picks one page from the
//! resolved `PageView`; pages never switch views themselves.

pub mod admin_dashboard;
pub mod admin_settings;
pub mod analytics;
pub mod attendance;
pub mod camera_monitoring;
pub mod live_camera;
pub mod login;
pub mod user_dashboard;
pub mod user_settings;
pub mod wellness;
