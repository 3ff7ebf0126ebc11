//! Inline validation message for a form field.

use leptos::prelude::*;

/// Validation message under a form field.
#[component]
pub fn FieldError(error: Signal<Option<&'static str>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some()>
            <p class="dialog__field-error">{move || error.get().unwrap_or_default()}</p>
        </Show>
    }
}
