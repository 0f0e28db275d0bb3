//! Phone number + OTP sign-in form.
//!
//! SYSTEM CONTEXT
//! ==============
//! Renders the two-step form and drives [`OtpFlowState`]. Each submit runs
//! the synchronous `begin_*` transition, spawns the backend call, then applies
//! the result with `finish_*`. The session store and API config come from
//! context.
//!
//! The form can be unmounted while a verify call is in flight (the login
//! modal closed). Its signal is then disposed, but the verified user is still
//! stored and the app-wide auth state refreshed.

#[cfg(test)]
#[path = "otp_flow_test.rs"]
mod otp_flow_test;

use leptos::prelude::*;

use crate::config::ApiConfig;
use crate::net::api;
use crate::net::api::ApiError;
use crate::net::types::SessionRecord;
use crate::state::auth::AuthState;
use crate::state::otp::{MessageKind, OtpFlowState, VerifyOutcome, persist_verified_user};
use crate::util::digits::OTP_MAX_DIGITS;
use crate::util::session_store::{SessionHandle, SessionStore};

/// Store the verified user, then apply `result` to `flow`.
///
/// Returns `None` when `flow` has been disposed; the user is stored anyway.
pub(crate) fn apply_verify_result(
    flow: RwSignal<OtpFlowState>,
    result: Result<Option<SessionRecord>, ApiError>,
    store: &dyn SessionStore,
) -> Option<VerifyOutcome> {
    persist_verified_user(&result, store);
    let outcome = flow.try_update(|f| f.finish_verify(result));
    if outcome.is_none() {
        log::debug!("otp form closed before verify-otp completed");
    }
    outcome
}

/// Two-step phone/OTP form.
///
/// `on_verified` is called with the returned user once the code is accepted.
#[component]
pub fn OtpFlow(#[prop(optional, into)] on_verified: Option<Callback<Option<SessionRecord>>>) -> impl IntoView {
    let flow = RwSignal::new(OtpFlowState::default());
    let session = StoredValue::new(expect_context::<SessionHandle>());
    let config = StoredValue::new(expect_context::<ApiConfig>());
    let auth = use_context::<RwSignal<AuthState>>();

    let on_send = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some(phone) = flow.try_update(OtpFlowState::begin_send).flatten() else {
            return;
        };
        let config = config.get_value();
        leptos::task::spawn_local(async move {
            let result = api::request_otp(&config, &phone).await;
            flow.update(|f| {
                f.finish_send(result);
            });
        });
    };

    let on_verify = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let Some((phone, otp)) = flow.try_update(OtpFlowState::begin_verify).flatten() else {
            return;
        };
        let config = config.get_value();
        let session = session.get_value();
        leptos::task::spawn_local(async move {
            let result = api::verify_otp(&config, &phone, &otp).await;
            let verified = result.is_ok();
            let outcome = apply_verify_result(flow, result, &*session);
            if verified {
                if let Some(auth) = auth {
                    let _ = auth.try_set(AuthState::load(&*session));
                }
            }
            if let Some(VerifyOutcome::Verified(user)) = outcome {
                if let Some(cb) = on_verified {
                    cb.run(user);
                }
            }
        });
    };

    let on_reset = move |_| flow.update(OtpFlowState::reset);

    let message_class = move || {
        flow.with(|f| match f.message.as_ref().map(|m| m.kind) {
            Some(MessageKind::Success) => "otp-message otp-message--success",
            _ => "otp-message otp-message--error",
        })
    };

    view! {
        <div class="otp-flow">
            <form class="otp-form" on:submit=on_send>
                <label class="otp-label" for="otp-phone">"Phone Number"</label>
                <input
                    id="otp-phone"
                    class="otp-input"
                    type="tel"
                    inputmode="numeric"
                    placeholder="Enter your phone number"
                    prop:value=move || flow.with(|f| f.phone.clone())
                    prop:disabled=move || flow.with(OtpFlowState::phone_locked)
                    on:input=move |ev| flow.update(|f| f.set_phone_input(&event_target_value(&ev)))
                />
                <button
                    class="btn btn--primary"
                    type="submit"
                    disabled=move || flow.with(OtpFlowState::phone_locked)
                >
                    {move || flow.with(OtpFlowState::send_label)}
                </button>
            </form>

            <Show when=move || flow.with(|f| f.stage.shows_otp_entry())>
                <form class="otp-form" on:submit=on_verify>
                    <label class="otp-label" for="otp-code">"Enter OTP"</label>
                    <input
                        id="otp-code"
                        class="otp-input otp-input--code"
                        type="text"
                        inputmode="numeric"
                        maxlength=OTP_MAX_DIGITS.to_string()
                        placeholder="Enter OTP"
                        prop:value=move || flow.with(|f| f.otp.clone())
                        prop:disabled=move || flow.with(OtpFlowState::verify_disabled)
                        on:input=move |ev| flow.update(|f| f.set_otp_input(&event_target_value(&ev)))
                    />
                    <button
                        class="btn btn--primary"
                        type="submit"
                        disabled=move || flow.with(OtpFlowState::verify_disabled)
                    >
                        {move || flow.with(OtpFlowState::verify_label)}
                    </button>
                    <button
                        class="btn btn--link"
                        type="button"
                        on:click=on_reset
                        disabled=move || flow.with(OtpFlowState::reset_disabled)
                    >
                        "Change Number"
                    </button>
                </form>
            </Show>

            <Show when=move || flow.with(|f| f.message.is_some())>
                <p class=message_class>
                    {move || flow.with(|f| f.message.as_ref().map(|m| m.text.clone()).unwrap_or_default())}
                </p>
            </Show>
        </div>
    }
}
