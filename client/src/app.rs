//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::profile::ProfilePage;
use crate::state::auth::{AuthState, load_auth_record};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-br">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name="description" content="Painel de controle Hype Fy"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the auth context and sets up client-side routing. The auth
/// record lives in `localStorage`, so it is only read once hydrated; until
/// then pages see `loading`.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState { record: None, loading: true });
    provide_context(auth);

    Effect::new(move || {
        auth.set(AuthState { record: load_auth_record(), loading: false });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/hypefy-dashboard.css"/>
        <Title text="Hype Fy Agência"/>

        <Router>
            <Routes fallback=|| "Página não encontrada.".into_view()>
                <Route path=(StaticSegment("dashboard"), StaticSegment("profile")) view=ProfilePage/>
            </Routes>
        </Router>
    }
}
