use super::*;

#[test]
fn permission_errors_map_to_permission_denied() {
    assert_eq!(MediaError::from_dom_name("NotAllowedError", "denied"), MediaError::PermissionDenied);
    assert_eq!(MediaError::from_dom_name("SecurityError", ""), MediaError::PermissionDenied);
}

#[test]
fn missing_hardware_maps_to_no_device() {
    for name in ["NotFoundError", "OverconstrainedError", "NotReadableError"] {
        assert_eq!(MediaError::from_dom_name(name, "x"), MediaError::NoDevice, "{name}");
    }
}

#[test]
fn unknown_names_keep_their_text() {
    assert_eq!(MediaError::from_dom_name("AbortError", ""), MediaError::Other("AbortError".into()));
    assert_eq!(MediaError::from_dom_name("AbortError", "stopped"), MediaError::Other("AbortError: stopped".into()));
}

#[test]
fn errors_render_readable_messages() {
    assert_eq!(MediaError::PermissionDenied.to_string(), "camera permission denied");
    assert_eq!(MediaError::Other("boom".into()).to_string(), "camera error: boom");
}
