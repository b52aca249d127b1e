//! Role-keyed page tables and view resolution.
//!
//! DESIGN
//! ======
//! Resolution is a pure function of `(role, page label)`. Each role owns an
//! explicit table; labels missing from the table land on the role's
//! dashboard and the result is flagged with `fell_back` so the router can
//! report it. No role means the login view regardless of the label.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use super::session::Role;

/// Top-level screen selected by the router.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageView {
    Login,
    UserDashboard,
    AdminDashboard,
    Attendance(Role),
    Analytics,
    Wellness,
    LiveCamera,
    CameraMonitoring,
    UserSettings,
    AdminSettings,
}

impl PageView {
    /// Canonical page label for this view. Used to highlight the sidebar
    /// entry of the page that actually rendered.
    #[must_use]
    pub fn page_key(self) -> &'static str {
        match self {
            Self::Login => "login",
            Self::UserDashboard | Self::AdminDashboard => "dashboard",
            Self::Attendance(_) => "attendance",
            Self::Analytics => "analytics",
            Self::Wellness => "wellness",
            Self::LiveCamera => "camera",
            Self::CameraMonitoring => "cameras",
            Self::UserSettings | Self::AdminSettings => "settings",
        }
    }
}

/// Outcome of resolving a page label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub view: PageView,
    /// True when the label was not in the role's table.
    pub fell_back: bool,
}

pub fn resolve_view(role: Option<Role>, page: &str) -> Resolution {
    let Some(role) = role else {
        return Resolution { view: PageView::Login, fell_back: false };
    };
    let known = match role {
        Role::User => user_page(page),
        Role::Admin => admin_page(page),
    };
    match known {
        Some(view) => Resolution { view, fell_back: false },
        None => Resolution { view: home_view(role), fell_back: true },
    }
}

#[must_use]
pub fn home_view(role: Role) -> PageView {
    match role {
        Role::User => PageView::UserDashboard,
        Role::Admin => PageView::AdminDashboard,
    }
}

fn user_page(page: &str) -> Option<PageView> {
    match page {
        "dashboard" => Some(PageView::UserDashboard),
        "attendance" => Some(PageView::Attendance(Role::User)),
        "analytics" => Some(PageView::Analytics),
        "wellness" => Some(PageView::Wellness),
        "camera" => Some(PageView::LiveCamera),
        "settings" => Some(PageView::UserSettings),
        _ => None,
    }
}

fn admin_page(page: &str) -> Option<PageView> {
    match page {
        "dashboard" => Some(PageView::AdminDashboard),
        "attendance" => Some(PageView::Attendance(Role::Admin)),
        "analytics" => Some(PageView::Analytics),
        "cameras" => Some(PageView::CameraMonitoring),
        "settings" => Some(PageView::AdminSettings),
        _ => None,
    }
}

// =============================================================================
// SIDEBAR MENU
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub page: &'static str,
    pub icon: &'static str,
}

const USER_LINKS: &[NavLink] = &[
    NavLink { label: "Dashboard", page: "dashboard", icon: "▦" },
    NavLink { label: "Attendance", page: "attendance", icon: "⏱" },
    NavLink { label: "Analytics", page: "analytics", icon: "▤" },
    NavLink { label: "Wellness", page: "wellness", icon: "♥" },
    NavLink { label: "Live Camera", page: "camera", icon: "◉" },
    NavLink { label: "Settings", page: "settings", icon: "⚙" },
];

// "employees" and "monitoring" have no page of their own yet and land on
// the admin dashboard.
const ADMIN_LINKS: &[NavLink] = &[
    NavLink { label: "Dashboard", page: "dashboard", icon: "▦" },
    NavLink { label: "Attendance", page: "attendance", icon: "⏱" },
    NavLink { label: "Analytics", page: "analytics", icon: "▤" },
    NavLink { label: "Employees", page: "employees", icon: "👥" },
    NavLink { label: "Cameras", page: "cameras", icon: "◉" },
    NavLink { label: "AI Monitoring", page: "monitoring", icon: "🛡" },
    NavLink { label: "Settings", page: "settings", icon: "⚙" },
];

pub fn sidebar_links(role: Role) -> &'static [NavLink] {
    match role {
        Role::User => USER_LINKS,
        Role::Admin => ADMIN_LINKS,
    }
}

/// Whether `link` should render as the active entry. Compares against the
/// view that rendered, so a fallback highlights the dashboard entry.
pub fn is_active_link(link: &NavLink, resolution: Resolution) -> bool {
    link.page == resolution.view.page_key()
}
