//! Confirmation page for a stored contact submission.
//!
//! Everything shown comes from the query string the form handler redirects
//! with, so the page is a plain SSR render that needs no API call.

#[cfg(test)]
#[path = "result_test.rs"]
mod result_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;
use leptos_router::params::ParamsMap;

use crate::components::site_header::SiteHeader;
use crate::net::types::ContactMessage;

/// Submission details carried by `/result?...`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmissionSummary {
    pub contact: ContactMessage,
    pub filename: String,
}

impl SubmissionSummary {
    pub fn from_query(query: &ParamsMap) -> Self {
        let field = |key: &str| query.get(key).unwrap_or_default();
        Self {
            contact: ContactMessage {
                name: field("name"),
                email: field("email"),
                age: field("age"),
                message: field("message"),
            },
            filename: field("filename"),
        }
    }

    pub fn heading(&self) -> String {
        let name = self.contact.name.trim();
        if name.is_empty() { "Thanks!".to_owned() } else { format!("Thanks, {name}!") }
    }
}

#[component]
pub fn ResultPage() -> impl IntoView {
    let query = use_query_map();
    let summary = move || query.with(SubmissionSummary::from_query);

    view! {
        <div class="page result-page">
            <SiteHeader/>
            <main class="page__body">
                {move || {
                    let summary = summary();
                    view! {
                        <div class="contact-card contact-card--sent">
                            <h1>{summary.heading()}</h1>
                            <dl class="contact-card__fields">
                                <dt>"Email"</dt>
                                <dd>{summary.contact.email.clone()}</dd>
                                <dt>"Age"</dt>
                                <dd>{summary.contact.age.clone()}</dd>
                                <dt>"Message"</dt>
                                <dd class="contact-card__message">{summary.contact.message.clone()}</dd>
                                <dt>"Saved as"</dt>
                                <dd>
                                    <code>{summary.filename.clone()}</code>
                                </dd>
                            </dl>
                            <a class="btn" href="/form">"Send another"</a>
                        </div>
                    }
                }}
            </main>
        </div>
    }
}
