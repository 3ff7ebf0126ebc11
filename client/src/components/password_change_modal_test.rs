use super::*;
use leptos::reactive::owner::Owner;

use crate::state::alert::AlertKind;

fn signals_at(step: Step) -> (RwSignal<PasswordFlow>, RwSignal<AlertState>) {
    let flow = PasswordFlow { step, email: "ana@example.com".to_owned(), loading: true, ..PasswordFlow::default() };
    (RwSignal::new(flow), RwSignal::new(AlertState::default()))
}

#[test]
fn settle_email_success_shows_alert_and_waits_to_advance() {
    let owner = Owner::new();
    owner.set();
    let (flow, alert) = signals_at(Step::Email);
    let epoch = flow.with_untracked(|f| f.epoch);

    settle(flow, alert, Step::Email, epoch, Some(ApiMessage::ok("ana@example.com")));

    let f = flow.get_untracked();
    assert!(!f.loading);
    assert_eq!(f.step, Step::Email);
    let a = alert.get_untracked();
    assert!(a.open);
    assert_eq!(a.kind, AlertKind::Success);
    assert_eq!(a.title, "Código Enviado");
}

#[test]
fn settle_password_success_jumps_to_success_immediately() {
    let owner = Owner::new();
    owner.set();
    let (flow, alert) = signals_at(Step::Password);
    let epoch = flow.with_untracked(|f| f.epoch);

    settle(flow, alert, Step::Password, epoch, Some(ApiMessage::ok("")));

    let f = flow.get_untracked();
    assert_eq!(f.step, Step::Success);
    assert!(!f.loading);
    assert!(!alert.get_untracked().open);
}

#[test]
fn settle_failure_keeps_step_and_reports_error() {
    let owner = Owner::new();
    owner.set();
    let (flow, alert) = signals_at(Step::Verification);
    let epoch = flow.with_untracked(|f| f.epoch);

    settle(flow, alert, Step::Verification, epoch, Some(ApiMessage::failed("expirado")));

    assert_eq!(flow.with_untracked(|f| f.step), Step::Verification);
    let a = alert.get_untracked();
    assert_eq!(a.kind, AlertKind::Error);
    assert_eq!(a.title, "Código Inválido");
}

#[test]
fn settle_after_reset_only_clears_loading() {
    let owner = Owner::new();
    owner.set();
    let (flow, alert) = signals_at(Step::Email);
    let epoch = flow.with_untracked(|f| f.epoch);
    flow.update(|f| {
        f.reset();
        f.loading = true;
    });

    settle(flow, alert, Step::Email, epoch, Some(ApiMessage::ok("ana@example.com")));

    let f = flow.get_untracked();
    assert!(!f.loading);
    assert_eq!(f.step, Step::Email);
    assert!(!alert.get_untracked().open);
}

#[test]
fn settle_after_stepping_back_drops_transition() {
    let owner = Owner::new();
    owner.set();
    let (flow, alert) = signals_at(Step::Password);
    let epoch = flow.with_untracked(|f| f.epoch);
    flow.update(PasswordFlow::back);

    settle(flow, alert, Step::Password, epoch, Some(ApiMessage::ok("")));

    assert_eq!(flow.with_untracked(|f| f.step), Step::Verification);
    assert!(!alert.get_untracked().open);
}

#[test]
fn settle_after_modal_unmounted_is_silent() {
    let owner = Owner::new();
    let (flow, alert) = owner.with(|| signals_at(Step::Email));
    owner.cleanup();

    settle(flow, alert, Step::Email, 0, Some(ApiMessage::ok("x")));
    settle(flow, alert, Step::Password, 0, Some(ApiMessage::ok("x")));
    settle(flow, alert, Step::Email, 0, None);

    assert!(flow.try_with_untracked(|f| f.step).is_none());
    assert!(alert.try_get_untracked().is_none());
}
