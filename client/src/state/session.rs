//! Signed-in session: role, current page label, and display name.
//!
//! SYSTEM CONTEXT
//! ==============
//! The app root owns exactly one `RwSignal<Session>` and provides it as
//! context. Pages and chrome never assign fields directly; they call
//! `login`, `logout`, or `navigate` through `RwSignal::update`.
//!
//! STATE MACHINE
//! =============
//! `LoggedOut --login(admin)--> LoggedInAdmin`
//! `LoggedOut --login(other)--> LoggedInUser`
//! `LoggedIn* --logout--> LoggedOut`
//! `navigate` only rewrites the page label and never changes the phase.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use serde::{Deserialize, Serialize};

use super::nav::{self, Resolution};

/// Page label every login and logout resets to.
pub const DEFAULT_PAGE: &str = "dashboard";

/// Display name for employees who sign in without a usable identifier.
const FALLBACK_USER_NAME: &str = "Srinivas";

/// Access level that picks the page table and default view.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Derive a role from the login identifier. Only `admin` (any case)
    /// grants the admin portal.
    pub fn from_identifier(identifier: &str) -> Self {
        if identifier.to_lowercase() == "admin" { Self::Admin } else { Self::User }
    }

    #[must_use]
    pub fn portal_label(self) -> &'static str {
        match self {
            Self::User => "Employee Portal",
            Self::Admin => "Admin Portal",
        }
    }
}

/// Coarse phase of the session state machine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    LoggedOut,
    LoggedInUser,
    LoggedInAdmin,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub role: Option<Role>,
    pub current_page: String,
    pub display_name: String,
}

impl Default for Session {
    fn default() -> Self {
        Self { role: None, current_page: DEFAULT_PAGE.to_owned(), display_name: String::new() }
    }
}

impl Session {
    /// Sign in with `identifier`. There is no credential check and no
    /// failure path.
    pub fn login(&mut self, identifier: &str) -> Role {
        let role = Role::from_identifier(identifier);
        self.role = Some(role);
        self.current_page = DEFAULT_PAGE.to_owned();
        self.display_name = display_name_for(role, identifier);
        role
    }

    pub fn logout(&mut self) {
        *self = Self::default();
    }

    /// Record the requested page label as-is. Whether the label is known to
    /// the current role is decided at resolution time.
    pub fn navigate(&mut self, page: &str) {
        self.current_page = page.to_owned();
    }

    pub fn phase(&self) -> SessionPhase {
        match self.role {
            None => SessionPhase::LoggedOut,
            Some(Role::User) => SessionPhase::LoggedInUser,
            Some(Role::Admin) => SessionPhase::LoggedInAdmin,
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.role.is_some()
    }

    pub fn resolve(&self) -> Resolution {
        nav::resolve_view(self.role, &self.current_page)
    }
}

fn display_name_for(role: Role, identifier: &str) -> String {
    match role {
        Role::Admin => "Admin".to_owned(),
        Role::User => {
            let trimmed = identifier.trim();
            let mut chars = trimmed.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => FALLBACK_USER_NAME.to_owned(),
            }
        }
    }
}
