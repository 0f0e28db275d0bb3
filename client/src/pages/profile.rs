//! Profile page showing the stored user's avatar and contact details.
//!
//! The record is read from the session store after hydration, so the
//! server-rendered markup always starts from the fallback avatar.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;

use crate::net::types::SessionRecord;
use crate::util::session_store::{SessionHandle, SessionStore};

/// Avatar shown when the user has no profile image.
pub const DEFAULT_AVATAR: &str = "/default-avatar.png";

/// Image source for `record`, falling back to [`DEFAULT_AVATAR`].
pub fn avatar_src(record: Option<&SessionRecord>) -> String {
    record
        .and_then(|r| r.profile_image.as_deref())
        .map(str::trim)
        .filter(|src| !src.is_empty())
        .unwrap_or(DEFAULT_AVATAR)
        .to_owned()
}

/// Non-blank display name, if any.
pub fn display_name(record: Option<&SessionRecord>) -> Option<String> {
    record
        .and_then(|r| r.name.as_deref())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<SessionHandle>();
    let record = RwSignal::new(None::<SessionRecord>);

    Effect::new(move |_| {
        record.set(SessionStore::get(&*session));
    });

    let phone = move || record.with(|r| r.as_ref().and_then(|r| r.phone_number.clone()));

    view! {
        <section class="profile">
            <img
                class="profile__avatar"
                alt="Profile"
                src=move || record.with(|r| avatar_src(r.as_ref()))
            />
            <Show when=move || record.with(|r| display_name(r.as_ref()).is_some())>
                <h2 class="profile__name">
                    {move || record.with(|r| display_name(r.as_ref()).unwrap_or_default())}
                </h2>
            </Show>
            <Show when=move || phone().is_some()>
                <p class="profile__phone">{move || phone().unwrap_or_default()}</p>
            </Show>
        </section>
    }
}
