use super::*;

#[test]
fn default_session_is_signed_out_and_not_loaded() {
    let state = SessionState::default();
    assert!(!state.is_signed_in());
    assert!(!state.loaded);
}

#[test]
fn sign_in_sets_token() {
    let mut state = SessionState::default();
    state.sign_in("access-123".to_owned());
    assert!(state.is_signed_in());
    assert!(state.loaded);
    assert_eq!(state.token.as_deref(), Some("access-123"));
}

#[test]
fn sign_out_clears_token() {
    let mut state = SessionState::default();
    state.sign_in("access-123".to_owned());
    state.sign_out();
    assert!(!state.is_signed_in());
    assert!(state.token.is_none());
}

#[test]
fn empty_token_is_not_signed_in() {
    let state = SessionState { token: Some(String::new()), loaded: true };
    assert!(!state.is_signed_in());
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn from_storage_outside_browser_is_signed_out() {
    let state = SessionState::from_storage();
    assert!(state.loaded);
    assert!(!state.is_signed_in());
}
