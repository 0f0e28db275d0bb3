//! Landing page.

use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <section class="home">
            <h1 class="home__title">"Welcome to Strikers Yard"</h1>
            <p class="home__tagline">"Book your turf in seconds!"</p>
        </section>
    }
}
