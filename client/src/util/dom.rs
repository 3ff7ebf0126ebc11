//! Small browser helpers: focus, hard navigation, delayed callbacks.
//!
//! All of these are hydrate-only; on the server they do nothing.

/// Move keyboard focus to the element with `id`, if present.
pub fn focus_by_id(id: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(el) = web_sys::window()
            .and_then(|w| w.document())
            .and_then(|d| d.get_element_by_id(id))
        else {
            return;
        };
        if let Ok(el) = el.dyn_into::<web_sys::HtmlElement>() {
            let _ = el.focus();
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Full-page navigation to `href`.
pub fn redirect(href: &str) {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(href);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = href;
    }
}

/// Run `f` once after `delay_ms` milliseconds.
pub fn after<F>(delay_ms: u32, f: F)
where
    F: FnOnce() + 'static,
{
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(delay_ms).await;
        f();
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (delay_ms, f);
    }
}
