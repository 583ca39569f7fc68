//! Top bar with site navigation and the theme toggle.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use super::theme_toggle::ThemeToggle;

const NAV_LINKS: [(&str, &str); 3] = [("/", "Home"), ("/hello/world", "Hello"), ("/form", "Contact")];

/// Whether `pathname` belongs to the section rooted at `href`.
pub fn is_active(href: &str, pathname: &str) -> bool {
    if href == "/" {
        return pathname == "/";
    }
    let section = href.trim_end_matches('/').split('/').nth(1).unwrap_or_default();
    pathname.trim_start_matches('/').split('/').next() == Some(section)
}

#[component]
pub fn SiteHeader() -> impl IntoView {
    let location = use_location();

    view! {
        <header class="site-header">
            <a href="/" class="site-header__brand">"nightlight"</a>
            <nav class="site-header__nav">
                {NAV_LINKS
                    .into_iter()
                    .map(|(href, label)| {
                        view! {
                            <a
                                href=href
                                class=move || {
                                    if is_active(href, &location.pathname.get()) {
                                        "site-header__link site-header__link--active"
                                    } else {
                                        "site-header__link"
                                    }
                                }
                            >
                                {label}
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>
            <span class="site-header__spacer"></span>
            <ThemeToggle/>
        </header>
    }
}

#[cfg(test)]
#[path = "site_header_test.rs"]
mod site_header_test;
