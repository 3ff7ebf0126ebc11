//! Toast-style alert bound to an [`AlertState`] signal.

use leptos::prelude::*;

use crate::state::alert::AlertState;
use crate::util::dom;

/// Alert overlay. Render it inside a `<Show>` on `alert.open`.
///
/// Success alerts close themselves after `auto_close_ms`; a newer alert
/// shown in the meantime is left alone.
#[component]
pub fn Alert(alert: RwSignal<AlertState>, auto_close_ms: u32) -> impl IntoView {
    Effect::new(move || {
        let snapshot = alert.get();
        if !snapshot.open {
            return;
        }
        let Some(delay) = snapshot.auto_close_after(auto_close_ms) else {
            return;
        };
        // The owning page or modal may be gone by the time this fires.
        dom::after(delay, move || {
            if alert.try_get_untracked().as_ref() == Some(&snapshot) {
                let _ = alert.try_update(AlertState::close);
            }
        });
    });

    let on_close = move |_: leptos::ev::MouseEvent| alert.update(AlertState::close);
    let kind = move || alert.get().kind;

    view! {
        <div class="alert-backdrop" on:click=on_close>
            <div
                class=move || format!("alert alert--{}", kind().class_suffix())
                role="alert"
                on:click=move |ev| ev.stop_propagation()
            >
                <button class="alert__close" on:click=on_close title="Fechar">
                    "✕"
                </button>
                <span class="alert__icon" aria-hidden="true">{move || kind().icon()}</span>
                <div class="alert__body">
                    <h3 class="alert__title">{move || alert.get().title}</h3>
                    <p class="alert__message">{move || alert.get().message}</p>
                </div>
            </div>
        </div>
    }
}
