use leptos::prelude::*;

use super::VERSION;

/// Top navigation bar: brand, version tag, site links.
#[component]
pub fn NavBar() -> impl IntoView {
    view! {
        <nav class="nav">
            <div class="nav-inner">
                <a href="/" class="nav-brand">
                    <span class="nav-title">"Guard"</span>
                    <span class="nav-version">{VERSION}</span>
                </a>
                <div class="nav-links">
                    <a href="#features" class="nav-link">"Features"</a>
                    <a href="/docs" class="nav-link">"Docs"</a>
                    <a href="https://github.com/guard-dev/guard" target="_blank" class="nav-link">"GitHub"</a>
                </div>
            </div>
        </nav>
    }
}
