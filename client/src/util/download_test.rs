use std::cell::RefCell;

use super::*;

#[test]
fn object_url_is_revoked_after_success() {
    let revoked = RefCell::new(Vec::new());
    let result: Result<u32, String> =
        with_object_url(|| Ok("blob:1".to_owned()), |_| Ok(7), |url| revoked.borrow_mut().push(url.to_owned()));
    assert_eq!(result, Ok(7));
    assert_eq!(revoked.into_inner(), vec!["blob:1".to_owned()]);
}

#[test]
fn object_url_is_revoked_when_use_fails() {
    let revoked = RefCell::new(Vec::new());
    let result: Result<(), String> = with_object_url(
        || Ok("blob:2".to_owned()),
        |_| Err("no document".to_owned()),
        |url| revoked.borrow_mut().push(url.to_owned()),
    );
    assert_eq!(result, Err("no document".to_owned()));
    assert_eq!(revoked.into_inner(), vec!["blob:2".to_owned()]);
}

#[test]
fn nothing_to_revoke_when_creation_fails() {
    let revoked = RefCell::new(Vec::new());
    let used = RefCell::new(false);
    let result: Result<(), String> = with_object_url(
        || Err("blob rejected".to_owned()),
        |_| {
            *used.borrow_mut() = true;
            Ok(())
        },
        |url| revoked.borrow_mut().push(url.to_owned()),
    );
    assert_eq!(result, Err("blob rejected".to_owned()));
    assert!(!*used.borrow());
    assert!(revoked.into_inner().is_empty());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn download_needs_a_browser() {
    assert!(download_text("a.json", "application/json", "{}").is_err());
}
