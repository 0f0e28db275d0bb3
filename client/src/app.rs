//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{login_modal::LoginModal, navbar::Navbar};
use crate::config::{API_BASE_META, ApiConfig};
use crate::pages::{home::HomePage, profile::ProfilePage};
use crate::state::auth::AuthState;
use crate::util::session_store::{LocalSessionStore, SessionHandle};

/// HTML shell rendered on the server for SSR + hydration.
///
/// `api_base` is published in a `<meta>` tag for [`ApiConfig::from_document`].
pub fn shell(options: LeptosOptions, api_base: String) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <meta name=API_BASE_META content=api_base/>
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
/// Provides the session store, auth state and API config contexts and sets up
/// client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = SessionHandle::new(LocalSessionStore);
    let auth = RwSignal::new(AuthState::default());
    let show_login = RwSignal::new(false);

    provide_context(session.clone());
    provide_context(auth);
    provide_context(ApiConfig::from_document());

    // Storage is browser-only; effects never run during SSR.
    let load_session = session.clone();
    Effect::new(move |_| {
        auth.set(AuthState::load(&*load_session));
    });

    let loading = Signal::derive(move || auth.with(|a| a.loading));
    let logged_in = Signal::derive(move || auth.with(AuthState::is_logged_in));
    let open_login = Callback::new(move |()| show_login.set(true));
    let close_login = Callback::new(move |()| show_login.set(false));
    let login_success = Callback::new(move |()| {
        auth.set(AuthState::load(&*session));
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/strikers-yard.css"/>
        <Title text="Strikers Yard"/>

        <Router>
            <Navbar loading=loading logged_in=logged_in on_login=open_login/>
            <Show when=move || show_login.get()>
                <LoginModal on_close=close_login on_success=login_success/>
            </Show>
            <main class="page">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                </Routes>
            </main>
        </Router>
    }
}
