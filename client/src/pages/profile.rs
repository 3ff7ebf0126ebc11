//! Profile page: identity card, personal-info form, security, account deletion.
//!
//! SYSTEM CONTEXT
//! ==============
//! Mounted at `/dashboard/profile`. Identity comes from the auth record the
//! login flow left in `localStorage` (loaded by `App`). The page issues one
//! network call of its own, `DELETE /api/user`; the password flow lives in
//! [`PasswordChangeModal`].

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::components::alert::Alert;
use crate::components::confirmation_dialog::{ConfirmationDialog, DialogKind};
use crate::components::field_error::FieldError;
use crate::components::password_change_modal::PasswordChangeModal;
use crate::net::api;
use crate::net::types::ApiMessage;
use crate::state::alert::{AlertKind, AlertState, PAGE_AUTO_CLOSE_MS};
use crate::state::auth::{AuthState, clear_auth_storage, save_auth_record};
use crate::util::dom;
use crate::util::validation::{ProfileErrors, validate_profile};

/// Pause between the "account deleted" alert and signing out.
pub const SIGN_OUT_DELAY_MS: u32 = 2000;

/// How long the save button reads "Salvando..." before the confirmation.
pub const SAVE_SETTLE_MS: u32 = 1500;

/// Where the browser goes once the account is gone.
const SIGNED_OUT_HREF: &str = "/";

#[derive(Clone, Copy)]
struct StatCard {
    label: &'static str,
    value: &'static str,
    tone: &'static str,
}

const STATS: &[StatCard] = &[
    StatCard { label: "Membro desde", value: "Jan 2024", tone: "blue" },
    StatCard { label: "Pedidos Concluídos", value: "47", tone: "green" },
    StatCard { label: "Status da Conta", value: "Ativo", tone: "yellow" },
];

/// Result of the delete-account round trip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeleteOutcome {
    pub alert: AlertState,
    /// Clear local auth and leave the page after [`SIGN_OUT_DELAY_MS`].
    pub sign_out: bool,
}

/// Map the `DELETE /api/user` reply to what the page shows next.
#[must_use]
pub fn delete_outcome(reply: Option<&ApiMessage>) -> DeleteOutcome {
    match reply {
        None => DeleteOutcome {
            alert: AlertState::new(
                AlertKind::Error,
                "Erro no Servidor",
                "Ocorreu um erro ao deletar a conta. Tente novamente.",
            ),
            sign_out: false,
        },
        Some(msg) if msg.is_error() => DeleteOutcome {
            alert: AlertState::new(AlertKind::Error, "Erro ao Deletar", msg.user_message_or("Erro desconhecido")),
            sign_out: false,
        },
        Some(_) => DeleteOutcome {
            alert: AlertState::new(
                AlertKind::Success,
                "Conta Deletada",
                "Sua conta foi deletada com sucesso. Você será redirecionado em breve.",
            ),
            sign_out: true,
        },
    }
}

/// Warning shown for the not-yet-available photo upload.
#[must_use]
pub fn photo_change_alert() -> AlertState {
    AlertState::new(
        AlertKind::Warning,
        "Funcionalidade em Desenvolvimento",
        "A alteração de foto de perfil estará disponível em breve.",
    )
}

/// Confirmation shown after the profile form is saved.
#[must_use]
pub fn profile_saved_alert() -> AlertState {
    AlertState::new(AlertKind::Success, "Perfil Atualizado", "Suas informações foram salvas com sucesso!")
}

/// End the busy state of a save and confirm it. The page may have been left
/// during [`SAVE_SETTLE_MS`], so disposed signals are skipped.
fn finish_save(saving: RwSignal<bool>, alert: RwSignal<AlertState>) {
    let _ = saving.try_update(|s| *s = false);
    let _ = alert.try_update(|a| *a = profile_saved_alert());
}

/// Profile page. Shows a notice instead when no auth record is stored.
#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();

    let alert = RwSignal::new(AlertState::default());
    let show_password_modal = RwSignal::new(false);
    let show_delete_dialog = RwSignal::new(false);
    let saving = RwSignal::new(false);
    let deleting = RwSignal::new(false);

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let profile_errors = RwSignal::new(ProfileErrors::default());

    Effect::new(move || {
        if let Some(record) = auth.get().record {
            name.set(record.name);
            email.set(record.email);
        }
    });

    let display_name = move || auth.with(|a| a.record.as_ref().map(|r| r.name.clone()).unwrap_or_default());
    let display_email = move || auth.with(|a| a.record.as_ref().map(|r| r.email.clone()).unwrap_or_default());
    let initial = move || auth.with(|a| a.record.clone().unwrap_or_default().initial());
    let jwt = Signal::derive(move || auth.with(AuthState::jwt));

    let on_photo_change = move |_: leptos::ev::MouseEvent| alert.set(photo_change_alert());

    let on_save = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if saving.get_untracked() {
            return;
        }
        let (name_value, email_value) = (name.get_untracked(), email.get_untracked());
        let errors = validate_profile(&name_value, &email_value);
        let valid = errors.is_empty();
        profile_errors.set(errors);
        if !valid {
            return;
        }
        saving.set(true);
        auth.update(|a| {
            if let Some(record) = a.record.as_mut() {
                record.name = name_value;
                record.email = email_value;
                save_auth_record(record);
            }
        });
        dom::after(SAVE_SETTLE_MS, move || finish_save(saving, alert));
    };

    let on_delete_cancel = Callback::new(move |()| show_delete_dialog.set(false));
    let on_delete_confirm = Callback::new(move |()| {
        show_delete_dialog.set(false);
        if deleting.get_untracked() {
            return;
        }
        deleting.set(true);
        let jwt = jwt.get_untracked();
        leptos::task::spawn_local(async move {
            let reply = api::delete_account(&jwt).await;
            let result = delete_outcome(reply.as_ref());
            let _ = deleting.try_update(|d| *d = false);
            let _ = alert.try_update(|a| *a = result.alert);
            if result.sign_out {
                dom::after(SIGN_OUT_DELAY_MS, || {
                    clear_auth_storage();
                    dom::redirect(SIGNED_OUT_HREF);
                });
            }
        });
    });
    let on_password_close = Callback::new(move |()| show_password_modal.set(false));

    view! {
        <Show
            when=move || auth.with(|a| !a.loading && a.record.is_some())
            fallback=move || {
                view! {
                    <div class="profile-page">
                        <p class="profile-page__notice">
                            {move || {
                                if auth.with(|a| a.loading) {
                                    "Carregando..."
                                } else {
                                    "Nenhuma sessão ativa. Faça login para acessar seu perfil."
                                }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="profile-page">
                <header class="profile-page__header">
                    <h2>"Meu Perfil"</h2>
                </header>

                <div class="profile-page__grid">
                    <section class="card profile-card">
                        <div class="profile-card__avatar">
                            <span class="profile-card__initial">{initial}</span>
                            <button class="btn btn--round profile-card__camera" on:click=on_photo_change title="Alterar foto">
                                "📷"
                            </button>
                        </div>
                        <h3 class="profile-card__name">{display_name}</h3>
                        <p class="profile-card__email">{display_email}</p>
                        <div class="profile-card__actions">
                            <button class="btn btn--block" on:click=on_photo_change>
                                "Alterar Foto"
                            </button>
                            <button
                                class="btn btn--danger btn--block"
                                on:click=move |_| show_delete_dialog.set(true)
                                disabled=move || deleting.get()
                            >
                                {move || if deleting.get() { "Deletando..." } else { "Deletar Conta" }}
                            </button>
                        </div>
                    </section>

                    <section class="card profile-info">
                        <h3>"Informações Pessoais"</h3>
                        <form class="profile-info__form" on:submit=on_save>
                            <label class="dialog__label">
                                "Nome Completo"
                                <input
                                    class="dialog__input"
                                    type="text"
                                    placeholder="Seu nome completo"
                                    disabled=true
                                    prop:value=move || name.get()
                                    on:input=move |ev| name.set(event_target_value(&ev))
                                />
                            </label>
                            <FieldError error=Signal::derive(move || profile_errors.get().name)/>
                            <label class="dialog__label">
                                "Email"
                                <input
                                    class="dialog__input"
                                    type="email"
                                    placeholder="seu@email.com"
                                    disabled=true
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                            </label>
                            <FieldError error=Signal::derive(move || profile_errors.get().email)/>
                            <button class="btn btn--primary btn--block" type="submit" disabled=move || saving.get()>
                                {move || if saving.get() { "Salvando..." } else { "Salvar Alterações" }}
                            </button>
                        </form>

                        <div class="profile-info__security">
                            <h3>"Segurança"</h3>
                            <div class="profile-info__security-row">
                                <div>
                                    <p class="profile-info__security-label">"Senha"</p>
                                    <p class="profile-info__security-hint">"Última alteração há 30 dias"</p>
                                </div>
                                <button class="btn" on:click=move |_| show_password_modal.set(true)>
                                    "Alterar Senha"
                                </button>
                            </div>
                        </div>
                    </section>
                </div>

                <div class="profile-page__stats">
                    {STATS
                        .iter()
                        .map(|stat| {
                            view! {
                                <div class=format!("card stat-card stat-card--{}", stat.tone)>
                                    <p class="stat-card__label">{stat.label}</p>
                                    <h3 class="stat-card__value">{stat.value}</h3>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <Show when=move || show_password_modal.get()>
                <PasswordChangeModal jwt=jwt on_close=on_password_close/>
            </Show>
            <Show when=move || show_delete_dialog.get()>
                <ConfirmationDialog
                    title="Deletar Conta"
                    message="Tem certeza que deseja deletar sua conta? Esta ação não pode ser desfeita e todos os seus dados serão permanentemente removidos."
                    confirm_text="Sim, deletar"
                    cancel_text="Cancelar"
                    kind=DialogKind::Danger
                    on_close=on_delete_cancel
                    on_confirm=on_delete_confirm
                />
            </Show>
        </Show>
        <Show when=move || alert.get().open>
            <Alert alert=alert auto_close_ms=PAGE_AUTO_CLOSE_MS/>
        </Show>
    }
}
