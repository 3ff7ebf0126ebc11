//! Confirm/cancel dialog for destructive actions.

#[cfg(test)]
#[path = "confirmation_dialog_test.rs"]
mod confirmation_dialog_test;

use leptos::prelude::*;

use crate::util::dom;

/// DOM id of the dialog panel; focused on mount so Escape works right away.
pub const DIALOG_ID: &str = "confirmation-dialog";

/// Tone of the dialog.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DialogKind {
    #[default]
    Danger,
    Warning,
    Info,
}

impl DialogKind {
    /// CSS modifier for the dialog container.
    #[must_use]
    pub fn class_suffix(self) -> &'static str {
        match self {
            Self::Danger => "danger",
            Self::Warning => "warning",
            Self::Info => "info",
        }
    }

    /// Only dangerous confirmations get the destructive button style.
    #[must_use]
    pub fn confirm_button_class(self) -> &'static str {
        match self {
            Self::Danger => "btn btn--danger",
            Self::Warning | Self::Info => "btn btn--primary",
        }
    }
}

/// Modal asking the user to confirm an action. Render it inside a `<Show>`.
#[component]
pub fn ConfirmationDialog(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
    #[prop(optional, into)] confirm_text: Option<String>,
    #[prop(optional, into)] cancel_text: Option<String>,
    #[prop(optional)] kind: DialogKind,
    on_close: Callback<()>,
    on_confirm: Callback<()>,
) -> impl IntoView {
    let confirm_text = confirm_text.unwrap_or_else(|| "Confirmar".to_owned());
    let cancel_text = cancel_text.unwrap_or_else(|| "Cancelar".to_owned());
    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    };
    Effect::new(move || dom::focus_by_id(DIALOG_ID));

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div
                id=DIALOG_ID
                class=format!("dialog dialog--confirm dialog--{}", kind.class_suffix())
                role="alertdialog"
                tabindex="0"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=on_keydown
            >
                <button class="dialog__close" on:click=move |_| on_close.run(()) title="Fechar">
                    "✕"
                </button>
                <div class="dialog__confirm-body">
                    <span class="dialog__confirm-icon" aria-hidden="true">"⚠"</span>
                    <div>
                        <h3 class="dialog__confirm-title">{title}</h3>
                        <p class="dialog__confirm-message">{message}</p>
                    </div>
                </div>
                <div class="dialog__actions">
                    <button class="btn" on:click=move |_| on_close.run(())>
                        {cancel_text}
                    </button>
                    <button class=kind.confirm_button_class() on:click=move |_| on_confirm.run(())>
                        {confirm_text}
                    </button>
                </div>
            </div>
        </div>
    }
}
