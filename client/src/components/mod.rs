//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome and data panels. Chrome components
//! read session and UI state from Leptos context; data panels take their
//! records as props.

pub mod ai_insights;
pub mod camera_feed;
pub mod data_table;
pub mod kpi_card;
pub mod layout;
pub mod navbar;
pub mod notification_bell;
pub mod sidebar;
pub mod system_status_bar;
pub mod toast_stack;
pub mod wellness_check;
