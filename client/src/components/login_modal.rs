//! Modal dialog hosting the OTP sign-in flow.

use leptos::prelude::*;

use crate::components::otp_flow::OtpFlow;
use crate::net::types::SessionRecord;

/// Login dialog. Calls `on_success` and then `on_close` once the OTP is
/// verified; backdrop clicks and Escape only call `on_close`.
#[component]
pub fn LoginModal(on_close: Callback<()>, on_success: Callback<()>) -> impl IntoView {
    let dialog_ref = NodeRef::<leptos::html::Div>::new();

    // Escape is handled on the dialog, so it takes focus when opened.
    Effect::new(move || {
        #[cfg(feature = "hydrate")]
        {
            if let Some(dialog_el) = dialog_ref.get() {
                let _ = dialog_el.focus();
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = dialog_ref;
    });

    let on_backdrop = move |_| on_close.run(());
    let on_close_click = move |_| on_close.run(());
    let on_keydown = Callback::new(move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Escape" {
            ev.prevent_default();
            on_close.run(());
        }
    });
    let on_verified = Callback::new(move |_user: Option<SessionRecord>| {
        on_success.run(());
        on_close.run(());
    });

    view! {
        <div class="dialog-backdrop" on:click=on_backdrop>
            <div
                node_ref=dialog_ref
                class="dialog dialog--login"
                role="dialog"
                aria-modal="true"
                on:click=move |ev| ev.stop_propagation()
                on:keydown=move |ev| on_keydown.run(ev)
                tabindex="0"
            >
                <button class="dialog__close" type="button" aria-label="Close" on:click=on_close_click>
                    "×"
                </button>
                <h2>"Login / Register"</h2>
                <OtpFlow on_verified=on_verified/>
            </div>
        </div>
    }
}
