use leptos::prelude::*;

/// Page footer: brand, outbound links, copyright.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-brand">
                    <span class="footer-title">"Guard"</span>
                </div>
                <div class="footer-links">
                    <a href="https://github.com/guard-dev/guard" target="_blank" class="footer-link">"GitHub"</a>
                    <a href="https://microsoft.github.io/presidio/" target="_blank" class="footer-link">"Presidio"</a>
                    <a href="/docs" class="footer-link">"Docs"</a>
                </div>
                <p class="footer-copyright">
                    "Built by The Guard Team (c)2025"
                </p>
            </div>
        </footer>
    }
}
