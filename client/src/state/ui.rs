//! Local UI chrome state: theme, notification bell, and toasts.
//!
//! DESIGN
//! ======
//! Keeps transient presentation concerns out of the session so pages can
//! raise toasts or read the theme without touching navigation state. The app
//! provides one `RwSignal<UiState>` as context.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::model::{Notification, NotificationKind};

/// Most recent toasts kept on screen.
pub const MAX_TOASTS: usize = 4;

/// Transient message shown in the corner stack.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
}

#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub notifications: Vec<Notification>,
    pub bell_open: bool,
    pub toasts: Vec<Toast>,
    next_toast_id: u64,
}

impl UiState {
    pub fn with_notifications(notifications: Vec<Notification>) -> Self {
        Self { notifications, ..Self::default() }
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    pub fn mark_all_read(&mut self) {
        for n in &mut self.notifications {
            n.read = true;
        }
    }

    pub fn toggle_bell(&mut self) {
        self.bell_open = !self.bell_open;
    }

    /// Push a toast, dropping the oldest beyond `MAX_TOASTS`. Returns the
    /// new toast's id.
    pub fn push_toast(&mut self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        self.next_toast_id += 1;
        let id = self.next_toast_id;
        self.toasts.push(Toast { id, kind, message: message.into() });
        if self.toasts.len() > MAX_TOASTS {
            let excess = self.toasts.len() - MAX_TOASTS;
            self.toasts.drain(..excess);
        }
        id
    }

    pub fn dismiss_toast(&mut self, id: u64) {
        self.toasts.retain(|t| t.id != id);
    }
}
