//! Client-side state modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `session` and `nav` own login and page resolution; `ui` holds chrome
//! state shared through context; `camera` and `wellness` are the plain-data
//! state machines that pages wrap in signals.

pub mod camera;
pub mod nav;
pub mod session;
pub mod ui;
pub mod wellness;
