//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns (storage, media, clock, timers)
//! and pure calculations from page and component logic so both can be tested
//! without a DOM.

pub mod attendance_filter;
pub mod classify;
pub mod clock;
pub mod dark_mode;
pub mod download;
pub mod media;
pub mod random_walk;
pub mod ticker;
