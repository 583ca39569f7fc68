//! Contact form page.
//!
//! The form is a plain `POST /form` so it works before (or without) the WASM
//! bundle; the server then redirects to `/result` or back here with the
//! typed values and error codes in the query string. Once hydrated, submit
//! is intercepted and sent as JSON to `/api/form`, with the same per-field
//! validation run locally first.

#[cfg(test)]
#[path = "contact_form_test.rs"]
mod contact_form_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use leptos_router::params::ParamsMap;

use crate::components::site_header::SiteHeader;
use crate::net::types::{ContactMessage, MAX_MESSAGE_CHARS, decode_error_codes};
use crate::state::contact::ContactState;

/// Path the HTML form posts to.
pub const FORM_ACTION: &str = "/form";

/// Draft and errors carried back by a failed no-JS submission.
pub fn retry_from_query(query: &ParamsMap) -> (ContactMessage, ContactState) {
    let field = |key: &str| query.get(key).unwrap_or_default();
    let draft = ContactMessage {
        name: field("name"),
        email: field("email"),
        age: field("age"),
        message: field("message"),
    };
    let state = ContactState::from_field_errors(&decode_error_codes(&field("errors")));
    (draft, state)
}

#[component]
pub fn ContactFormPage() -> impl IntoView {
    let query = use_query_map();
    let (draft, initial) = query.with_untracked(retry_from_query);

    let name = RwSignal::new(draft.name);
    let email = RwSignal::new(draft.email);
    let age = RwSignal::new(draft.age);
    let message = RwSignal::new(draft.message);
    let state = RwSignal::new(initial);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if state.get().is_busy() {
            return;
        }
        let draft = ContactMessage { name: name.get(), email: email.get(), age: age.get(), message: message.get() };
        let contact = match draft.validated() {
            Ok(contact) => contact,
            Err(errors) => {
                state.set(ContactState::from_field_errors(&errors));
                return;
            }
        };
        state.set(ContactState::Sending);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let result = crate::net::api::submit_contact_form(&contact).await;
            match &result {
                Ok(receipt) => {
                    if let Some(window) = web_sys::window() {
                        if let Err(e) = window.location().set_href(&receipt.result_url) {
                            leptos::logging::warn!("result redirect failed: {e:?}");
                        }
                    }
                }
                Err(e) => leptos::logging::warn!("contact form submit failed: {e}"),
            }
            state.set(ContactState::from_result(result));
        });
        #[cfg(not(feature = "hydrate"))]
        drop(contact);
    };

    let field_error = move |field: &'static str| {
        move || {
            state
                .get()
                .field_error(field)
                .map(|m| view! { <p class="contact-form__error">{m}</p> })
        }
    };

    view! {
        <div class="page contact-page">
            <SiteHeader/>
            <main class="page__body">
                <h1>"Contact"</h1>
                <form class="contact-form" method="post" action=FORM_ACTION on:submit=on_submit>
                    <label class="contact-form__label">
                        "Name"
                        <input
                            class="contact-form__input"
                            type="text"
                            name="name"
                            prop:value=move || name.get()
                            on:input=move |ev| name.set(event_target_value(&ev))
                        />
                    </label>
                    {field_error("name")}
                    <label class="contact-form__label">
                        "Email"
                        <input
                            class="contact-form__input"
                            type="email"
                            name="email"
                            placeholder="you@example.com"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                    </label>
                    {field_error("email")}
                    <label class="contact-form__label">
                        "Age"
                        <input
                            class="contact-form__input contact-form__input--age"
                            type="text"
                            name="age"
                            inputmode="numeric"
                            prop:value=move || age.get()
                            on:input=move |ev| age.set(event_target_value(&ev))
                        />
                    </label>
                    {field_error("age")}
                    <label class="contact-form__label">
                        "Message"
                        <textarea
                            class="contact-form__input contact-form__input--message"
                            name="message"
                            rows="6"
                            maxlength=MAX_MESSAGE_CHARS.to_string()
                            prop:value=move || message.get()
                            on:input=move |ev| message.set(event_target_value(&ev))
                        ></textarea>
                    </label>
                    {field_error("message")}
                    <button
                        class="btn contact-form__submit"
                        type="submit"
                        disabled=move || state.get().is_busy()
                    >
                        {move || if state.get().is_busy() { "Sending..." } else { "Send" }}
                    </button>
                    <Show when=move || state.get().error().is_some()>
                        <p class="contact-form__error">
                            {move || state.get().error().map(str::to_owned).unwrap_or_default()}
                        </p>
                    </Show>
                </form>
            </main>
        </div>
    }
}
