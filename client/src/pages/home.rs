//! Landing page.

use leptos::prelude::*;

use crate::components::site_header::SiteHeader;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page home-page">
            <SiteHeader/>
            <main class="page__body">
                <section class="hero">
                    <img class="hero__image" src="/images/lamp.svg" alt="A desk lamp"/>
                    <div class="hero__text">
                        <h1>"Welcome"</h1>
                        <p>
                            "A small site with a light and a dark side. Use the switch in the "
                            "top bar; your choice is remembered on this device."
                        </p>
                        <ul class="hero__links">
                            <li>
                                <a href="/hello/world">"Say hello"</a>
                            </li>
                            <li>
                                <a href="/form">"Send a message"</a>
                            </li>
                        </ul>
                    </div>
                </section>
            </main>
        </div>
    }
}
