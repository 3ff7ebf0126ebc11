use super::*;

#[test]
fn alert_state_default_is_closed() {
    let state = AlertState::default();
    assert!(!state.open);
    assert_eq!(state.kind, AlertKind::Success);
    assert!(state.title.is_empty());
}

#[test]
fn show_replaces_contents_and_opens() {
    let mut state = AlertState::new(AlertKind::Error, "old", "old message");
    state.close();
    state.show(AlertKind::Warning, "Title", "Body");
    assert!(state.open);
    assert_eq!(state.kind, AlertKind::Warning);
    assert_eq!(state.title, "Title");
    assert_eq!(state.message, "Body");
}

#[test]
fn close_keeps_contents() {
    let mut state = AlertState::new(AlertKind::Success, "Saved", "All good");
    state.close();
    assert!(!state.open);
    assert_eq!(state.title, "Saved");
    assert_eq!(state.message, "All good");
}

#[test]
fn only_success_alerts_auto_close() {
    let success = AlertState::new(AlertKind::Success, "t", "m");
    let error = AlertState::new(AlertKind::Error, "t", "m");
    let warning = AlertState::new(AlertKind::Warning, "t", "m");
    assert_eq!(success.auto_close_after(PAGE_AUTO_CLOSE_MS), Some(3000));
    assert_eq!(success.auto_close_after(MODAL_AUTO_CLOSE_MS), Some(2000));
    assert_eq!(error.auto_close_after(PAGE_AUTO_CLOSE_MS), None);
    assert_eq!(warning.auto_close_after(PAGE_AUTO_CLOSE_MS), None);
}

#[test]
fn kind_class_suffixes_are_distinct() {
    assert_eq!(AlertKind::Success.class_suffix(), "success");
    assert_eq!(AlertKind::Error.class_suffix(), "error");
    assert_eq!(AlertKind::Warning.class_suffix(), "warning");
}
