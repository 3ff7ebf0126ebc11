//! Password-change modal driving [`PasswordFlow`] through its four screens.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each submit is one `PUT /api/password` round trip. The reply is mapped by
//! [`outcome`] to an alert and an optional (possibly delayed) step change.
//! Closing the modal resets the flow and every field.

use leptos::prelude::*;

use crate::components::alert::Alert;
use crate::components::code_input::CodeInput;
use crate::components::field_error::FieldError;
use crate::net::api;
use crate::net::types::{ApiMessage, PasswordResetRequest};
use crate::state::alert::{AlertState, MODAL_AUTO_CLOSE_MS};
use crate::state::password_flow::{PasswordFlow, SUCCESS_CLOSE_MS, Step, outcome};
use crate::util::dom;
use crate::util::validation::{PasswordErrors, validate_email, validate_new_password};

#[cfg(test)]
#[path = "password_change_modal_test.rs"]
mod password_change_modal_test;

/// DOM id of the modal panel; focused on mount so Escape works right away.
pub const DIALOG_ID: &str = "password-change-dialog";

/// Password-change modal. Render it inside a `<Show>` on the open flag.
#[component]
pub fn PasswordChangeModal(jwt: Signal<String>, on_close: Callback<()>) -> impl IntoView {
    let flow = RwSignal::new(PasswordFlow::default());
    let alert = RwSignal::new(AlertState::default());

    let email_input = RwSignal::new(String::new());
    let email_error = RwSignal::new(None::<&'static str>);
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let password_errors = RwSignal::new(PasswordErrors::default());
    let show_password = RwSignal::new(false);
    let show_confirm = RwSignal::new(false);

    let close = Callback::new(move |()| {
        flow.update(PasswordFlow::reset);
        email_input.set(String::new());
        email_error.set(None);
        password.set(String::new());
        confirm.set(String::new());
        password_errors.set(PasswordErrors::default());
        alert.update(AlertState::close);
        on_close.run(());
    });

    // Success screen closes itself unless the user already did.
    Effect::new(move || {
        let (step, epoch) = flow.with(|f| (f.step, f.epoch));
        if step != Step::Success {
            return;
        }
        dom::after(SUCCESS_CLOSE_MS, move || {
            // `None` once "Fechar" already unmounted the modal.
            let still_open = flow
                .try_with_untracked(|f| f.step == Step::Success && f.epoch == epoch)
                .unwrap_or(false);
            if still_open {
                close.run(());
            }
        });
    });

    let submit = move |step: Step, request: PasswordResetRequest| {
        let epoch = flow.with_untracked(|f| f.epoch);
        let jwt = jwt.get_untracked();
        leptos::task::spawn_local(async move {
            let reply = api::reset_password(&jwt, &request).await;
            settle(flow, alert, step, epoch, reply);
        });
    };

    let on_email_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let email = match validate_email(&email_input.get_untracked()) {
            Ok(email) => email,
            Err(message) => {
                email_error.set(Some(message));
                return;
            }
        };
        email_error.set(None);
        let Some(request) = flow.try_update(|f| f.begin_email(&email)).flatten() else {
            return;
        };
        submit(Step::Email, request);
    };

    let on_verify = move |_: leptos::ev::MouseEvent| {
        let Some(request) = flow.try_update(PasswordFlow::begin_verify).flatten() else {
            return;
        };
        submit(Step::Verification, request);
    };

    let on_password_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let new_password = password.get_untracked();
        let errors = validate_new_password(&new_password, &confirm.get_untracked());
        let valid = errors.is_empty();
        password_errors.set(errors);
        if !valid {
            return;
        }
        let Some(request) = flow.try_update(|f| f.begin_password(&new_password)).flatten() else {
            return;
        };
        submit(Step::Password, request);
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            close.run(());
        }
    };

    Effect::new(move || dom::focus_by_id(DIALOG_ID));

    let step = move || flow.with(|f| f.step);
    let loading = move || flow.with(|f| f.loading);

    view! {
        <div class="dialog-backdrop" on:click=move |_| close.run(())>
            <div
                id=DIALOG_ID
                class="dialog dialog--password"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <Show when=move || step() == Step::Email>
                    <h2 class="dialog__title dialog__title--center">"Mude a sua senha"</h2>
                    <p class="dialog__subtitle">"Por favor, coloque seu e-mail para verificarmos"</p>
                    <form class="dialog__form" on:submit=on_email_submit>
                        <label class="dialog__label">
                            "Email"
                            <input
                                class="dialog__input"
                                type="email"
                                placeholder="seu@email.com"
                                prop:value=move || email_input.get()
                                on:input=move |ev| email_input.set(event_target_value(&ev))
                            />
                        </label>
                        <FieldError error=Signal::derive(move || email_error.get())/>
                        <button class="btn btn--primary btn--block" type="submit" disabled=loading>
                            {move || if loading() { "Enviando código..." } else { "Enviar código de verificação" }}
                        </button>
                    </form>
                </Show>

                <Show when=move || step() == Step::Verification>
                    <div class="dialog__header">
                        <button class="btn btn--ghost" on:click=move |_| flow.update(PasswordFlow::back) title="Voltar">
                            "←"
                        </button>
                        <h2 class="dialog__title">"Verificação de Email"</h2>
                    </div>
                    <p class="dialog__subtitle">
                        "Digite o código de 6 dígitos enviado para " {move || flow.with(|f| f.email.clone())}
                    </p>
                    <div class="code-input">
                        <CodeInput flow=flow/>
                    </div>
                    <button class="btn btn--link" on:click=move |_| flow.update(PasswordFlow::resend)>
                        "Não recebeu o código? Reenviar"
                    </button>
                    <button
                        class="btn btn--primary btn--block"
                        on:click=on_verify
                        disabled=move || !flow.with(PasswordFlow::can_verify)
                    >
                        {move || if loading() { "Verificando..." } else { "Verificar código" }}
                    </button>
                </Show>

                <Show when=move || step() == Step::Password>
                    <div class="dialog__header">
                        <button class="btn btn--ghost" on:click=move |_| flow.update(PasswordFlow::back) title="Voltar">
                            "←"
                        </button>
                        <h2 class="dialog__title">"Nova Senha"</h2>
                    </div>
                    <p class="dialog__subtitle">"Crie uma nova senha segura para sua conta"</p>
                    <form class="dialog__form" on:submit=on_password_submit>
                        <PasswordField label="Nova Senha" value=password visible=show_password/>
                        <FieldError error=Signal::derive(move || password_errors.get().password)/>
                        <PasswordField label="Confirmar Nova Senha" value=confirm visible=show_confirm/>
                        <FieldError error=Signal::derive(move || password_errors.get().confirm)/>
                        <button class="btn btn--primary btn--block" type="submit" disabled=loading>
                            {move || if loading() { "Alterando senha..." } else { "Alterar senha" }}
                        </button>
                    </form>
                </Show>

                <Show when=move || step() == Step::Success>
                    <div class="dialog__success">
                        <span class="dialog__success-icon" aria-hidden="true">"✓"</span>
                        <h2 class="dialog__title">"Senha alterada com sucesso!"</h2>
                        <p class="dialog__subtitle">
                            "Sua nova senha foi definida. Esta janela será fechada automaticamente."
                        </p>
                        <button class="btn btn--primary btn--block" on:click=move |_| close.run(())>
                            "Fechar"
                        </button>
                    </div>
                </Show>
            </div>
        </div>
        <Show when=move || alert.get().open>
            <Alert alert=alert auto_close_ms=MODAL_AUTO_CLOSE_MS/>
        </Show>
    }
}

/// Apply a finished round trip to the flow, unless the modal was closed or
/// stepped back while it was in flight.
///
/// Runs after an await or a timer, when the modal may already be unmounted
/// and its signals disposed, so every access goes through the `try_` API.
fn settle(
    flow: RwSignal<PasswordFlow>,
    alert: RwSignal<AlertState>,
    step: Step,
    epoch: u64,
    reply: Option<ApiMessage>,
) {
    let current = flow.try_update(|f| {
        f.finish();
        f.epoch
    });
    if current != Some(epoch) {
        return;
    }

    let result = outcome(step, reply.as_ref());
    if let Some(next_alert) = result.alert {
        let _ = alert.try_update(|a| *a = next_alert);
    }
    let Some(transition) = result.transition else {
        return;
    };
    if transition.delay_ms == 0 {
        let _ = flow.try_update(|f| f.apply(epoch, transition));
        return;
    }
    dom::after(transition.delay_ms, move || {
        let applied = flow.try_update(|f| f.apply(epoch, transition)).unwrap_or(false);
        if applied && transition.close_alert {
            let _ = alert.try_update(AlertState::close);
        }
    });
}

/// Password input with a show/hide toggle.
#[component]
fn PasswordField(label: &'static str, value: RwSignal<String>, visible: RwSignal<bool>) -> impl IntoView {
    view! {
        <label class="dialog__label">
            {label}
            <span class="dialog__password">
                <input
                    class="dialog__input"
                    type=move || if visible.get() { "text" } else { "password" }
                    placeholder="••••••••"
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
                <button
                    class="btn btn--ghost dialog__password-toggle"
                    type="button"
                    on:click=move |_| visible.update(|v| *v = !*v)
                    title=move || if visible.get() { "Ocultar senha" } else { "Mostrar senha" }
                >
                    {move || if visible.get() { "🙈" } else { "👁" }}
                </button>
            </span>
        </label>
    }
}
