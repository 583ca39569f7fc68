//! Greeting page for `/hello/:name`.

#[cfg(test)]
#[path = "hello_test.rs"]
mod hello_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::components::site_header::SiteHeader;

/// Greeting line for a path-supplied name. Blank names get a generic greeting.
pub fn greeting(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        "Hello, stranger!".to_owned()
    } else {
        format!("Hello, {name}!")
    }
}

#[component]
pub fn HelloPage() -> impl IntoView {
    let params = use_params_map();
    let name = move || params.read().get("name").unwrap_or_default();

    view! {
        <div class="page hello-page">
            <SiteHeader/>
            <main class="page__body">
                <h1 class="hello-page__greeting">{move || greeting(&name())}</h1>
                <p>
                    "Try another name in the address bar, or "
                    <a href="/form">"leave a message"</a>
                    "."
                </p>
            </main>
        </div>
    }
}
