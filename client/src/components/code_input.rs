//! Six-cell verification code entry with automatic focus movement.

#[cfg(test)]
#[path = "code_input_test.rs"]
mod code_input_test;

use leptos::prelude::*;

use crate::state::password_flow::{CODE_LEN, PasswordFlow};
use crate::util::dom;

pub(crate) fn cell_id(index: usize) -> String {
    format!("verification-code-{index}")
}

/// Code cells bound to `flow.code`.
#[component]
pub fn CodeInput(flow: RwSignal<PasswordFlow>) -> impl IntoView {
    (0..CODE_LEN)
        .map(|index| {
            let on_input = move |ev: leptos::ev::Event| {
                let value = event_target_value(&ev);
                let mut next = None;
                flow.update(|f| next = f.code.set(index, &value));
                if let Some(next) = next {
                    dom::focus_by_id(&cell_id(next));
                }
            };
            let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
                if ev.key() != "Backspace" {
                    return;
                }
                if let Some(prev) = flow.with_untracked(|f| f.code.backspace(index)) {
                    dom::focus_by_id(&cell_id(prev));
                }
            };
            view! {
                <input
                    id=cell_id(index)
                    class="code-input__cell"
                    type="text"
                    inputmode="numeric"
                    autocomplete="one-time-code"
                    maxlength="1"
                    prop:value=move || flow.with(|f| f.code.cell(index).to_owned())
                    on:input=on_input
                    on:keydown=on_keydown
                />
            }
        })
        .collect_view()
}
