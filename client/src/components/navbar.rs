//! Top navigation bar with a collapsible mobile menu.
//!
//! DESIGN
//! ======
//! The bar is a pure function of the login status and its own menu toggle.
//! Link data lives in [`NAV_LINKS`] and [`account_entry`] so the layout rules
//! are testable without rendering.

#[cfg(test)]
#[path = "navbar_test.rs"]
mod navbar_test;

use leptos::prelude::*;

pub const BRAND_TEXT: &str = "Book My Turf";

/// A route link shown in both the desktop and mobile menus.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub href: &'static str,
    pub label: &'static str,
}

pub const NAV_LINKS: [NavLink; 3] = [
    NavLink { href: "/", label: "Home" },
    NavLink { href: "/booking", label: "Book Turf" },
    NavLink { href: "/my-bookings", label: "My Bookings" },
];

/// The trailing account entry of the menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccountEntry {
    /// Login status not read yet; nothing is shown.
    Pending,
    /// Link to the profile page.
    Profile(NavLink),
    /// Button that opens the login modal.
    Login,
}

pub const PROFILE_LINK: NavLink = NavLink { href: "/profile", label: "Profile" };

pub fn account_entry(loading: bool, logged_in: bool) -> AccountEntry {
    if loading {
        AccountEntry::Pending
    } else if logged_in {
        AccountEntry::Profile(PROFILE_LINK)
    } else {
        AccountEntry::Login
    }
}

/// Menu toggle glyph for the mobile button.
pub fn menu_icon(open: bool) -> &'static str {
    if open { "✕" } else { "☰" }
}

#[component]
pub fn Navbar(
    #[prop(into)] loading: Signal<bool>,
    #[prop(into)] logged_in: Signal<bool>,
    on_login: Callback<()>,
) -> impl IntoView {
    let menu_open = RwSignal::new(false);

    let account = move |mobile: bool| {
        let close = move || {
            if mobile {
                menu_open.set(false);
            }
        };
        match account_entry(loading.get(), logged_in.get()) {
            AccountEntry::Pending => ().into_any(),
            AccountEntry::Profile(link) => view! {
                <a class="navbar__link" href=link.href on:click=move |_| close()>{link.label}</a>
            }
            .into_any(),
            AccountEntry::Login => view! {
                <button
                    class="btn btn--primary navbar__login"
                    type="button"
                    on:click=move |_| {
                        close();
                        on_login.run(());
                    }
                >
                    "Login"
                </button>
            }
            .into_any(),
        }
    };

    let links = move |mobile: bool| {
        NAV_LINKS
            .iter()
            .map(|link| {
                view! {
                    <a
                        class="navbar__link"
                        href=link.href
                        on:click=move |_| {
                            if mobile {
                                menu_open.set(false);
                            }
                        }
                    >
                        {link.label}
                    </a>
                }
            })
            .collect_view()
    };

    view! {
        <nav class="navbar">
            <div class="navbar__inner">
                <a class="navbar__brand" href="/">{BRAND_TEXT}</a>
                <div class="navbar__links">
                    {links(false)}
                    {move || account(false)}
                </div>
                <button
                    class="navbar__toggle"
                    type="button"
                    aria-label="Toggle menu"
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    {move || menu_icon(menu_open.get())}
                </button>
            </div>
            <Show when=move || menu_open.get()>
                <div class="navbar__mobile">
                    {links(true)}
                    {move || account(true)}
                </div>
            </Show>
        </nav>
    }
}
