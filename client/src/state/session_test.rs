use super::*;
use crate::state::nav::PageView;

// =============================================================
// Role derivation
// =============================================================

#[test]
fn role_is_admin_only_for_case_insensitive_admin() {
    for id in ["admin", "ADMIN", "Admin", "aDmIn"] {
        assert_eq!(Role::from_identifier(id), Role::Admin, "{id:?}");
    }
    for id in ["srinivas", "", " admin", "admin ", "administrator", "root", "adm1n"] {
        assert_eq!(Role::from_identifier(id), Role::User, "{id:?}");
    }
}

#[test]
fn login_matches_lowercase_comparison_for_arbitrary_identifiers() {
    let samples = ["ADMIN", "admin", "Jane", "ädmin", "ADMİN", "x", "", "Admin\n"];
    for id in samples {
        let mut session = Session::default();
        let role = session.login(id);
        let expected = if id.to_lowercase() == "admin" { Role::Admin } else { Role::User };
        assert_eq!(role, expected, "{id:?}");
        assert_eq!(session.role, Some(expected));
    }
}

// =============================================================
// Transitions
// =============================================================

#[test]
fn default_session_is_logged_out_on_dashboard() {
    let session = Session::default();
    assert_eq!(session.phase(), SessionPhase::LoggedOut);
    assert_eq!(session.current_page, DEFAULT_PAGE);
    assert!(!session.is_logged_in());
}

#[test]
fn login_resets_page_to_dashboard() {
    let mut session = Session::default();
    session.navigate("settings");
    session.login("admin");
    assert_eq!(session.current_page, "dashboard");
    assert_eq!(session.phase(), SessionPhase::LoggedInAdmin);
}

#[test]
fn logout_resets_role_and_page() {
    let mut session = Session::default();
    session.login("srinivas");
    session.navigate("wellness");
    session.logout();
    assert_eq!(session, Session::default());
    assert_eq!(session.phase(), SessionPhase::LoggedOut);
}

#[test]
fn navigate_keeps_phase_and_stores_raw_label() {
    let mut session = Session::default();
    session.login("srinivas");
    session.navigate("no-such-page");
    assert_eq!(session.phase(), SessionPhase::LoggedInUser);
    assert_eq!(session.current_page, "no-such-page");
}

#[test]
fn display_names_follow_role() {
    let mut session = Session::default();
    session.login("admin");
    assert_eq!(session.display_name, "Admin");
    session.login("srinivas");
    assert_eq!(session.display_name, "Srinivas");
    session.login("   ");
    assert_eq!(session.display_name, "Srinivas");
    session.login(" jane ");
    assert_eq!(session.display_name, "Jane");
}

// =============================================================
// End-to-end scenarios
// =============================================================

#[test]
fn admin_login_renders_admin_dashboard() {
    let mut session = Session::default();
    session.login("admin");
    assert_eq!(session.current_page, "dashboard");
    assert_eq!(session.resolve().view, PageView::AdminDashboard);
}

#[test]
fn user_login_renders_user_dashboard() {
    let mut session = Session::default();
    session.login("srinivas");
    assert_eq!(session.current_page, "dashboard");
    assert_eq!(session.resolve().view, PageView::UserDashboard);
}

#[test]
fn user_navigates_to_wellness_then_logs_out() {
    let mut session = Session::default();
    session.login("srinivas");
    session.navigate("wellness");
    assert_eq!(session.resolve().view, PageView::Wellness);
    session.logout();
    assert_eq!(session.resolve().view, PageView::Login);
}

#[test]
fn navigation_after_logout_still_renders_login() {
    let mut session = Session::default();
    session.login("admin");
    session.logout();
    for page in ["dashboard", "settings", "cameras", "wellness", "garbage"] {
        session.navigate(page);
        assert_eq!(session.resolve().view, PageView::Login, "{page}");
    }
}

#[test]
fn portal_labels_differ_by_role() {
    assert_eq!(Role::User.portal_label(), "Employee Portal");
    assert_eq!(Role::Admin.portal_label(), "Admin Portal");
}
