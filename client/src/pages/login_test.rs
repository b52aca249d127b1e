use super::*;
use crate::state::session::Role;

#[test]
fn validate_username_requires_value() {
    assert_eq!(validate_username("admin"), Ok("admin"));
    assert_eq!(validate_username("   "), Err("Enter your username."));
    assert_eq!(validate_username(""), Err("Enter your username."));
}

#[test]
fn validate_username_keeps_surrounding_whitespace() {
    assert_eq!(validate_username("  srinivas  "), Ok("  srinivas  "));
}

#[test]
fn admin_name_any_case_opens_admin_portal() {
    let mut session = Session::default();
    let name = validate_username("ADMIN").expect("valid");
    assert_eq!(session.login(name), Role::Admin);
}

#[test]
fn padded_admin_name_opens_user_portal() {
    let mut session = Session::default();
    let name = validate_username(" admin ").expect("valid");
    assert_eq!(session.login(name), Role::User);
    assert_eq!(session.display_name, "Admin");
}
