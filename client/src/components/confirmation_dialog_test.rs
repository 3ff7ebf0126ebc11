use super::*;

#[test]
fn dialog_kind_defaults_to_danger() {
    assert_eq!(DialogKind::default(), DialogKind::Danger);
}

#[test]
fn dialog_kind_class_suffixes() {
    assert_eq!(DialogKind::Danger.class_suffix(), "danger");
    assert_eq!(DialogKind::Warning.class_suffix(), "warning");
    assert_eq!(DialogKind::Info.class_suffix(), "info");
}

#[test]
fn only_danger_uses_destructive_button() {
    assert_eq!(DialogKind::Danger.confirm_button_class(), "btn btn--danger");
    assert_eq!(DialogKind::Warning.confirm_button_class(), "btn btn--primary");
    assert_eq!(DialogKind::Info.confirm_button_class(), "btn btn--primary");
}

#[test]
fn focus_targets_are_distinct_dom_ids() {
    use crate::components::code_input::cell_id;
    use crate::components::password_change_modal;

    let ids = [DIALOG_ID, password_change_modal::DIALOG_ID];
    assert_ne!(ids[0], ids[1]);
    for id in ids {
        assert!(!id.is_empty());
        assert!(!id.contains(char::is_whitespace));
        assert!((0..6).all(|i| cell_id(i) != id));
    }
}
