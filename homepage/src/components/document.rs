//! Root document component - the complete HTML page.

use leptos::prelude::*;

use super::{Footer, Hero, HomepageFeatures, NavBar};
use crate::styles::SITE_CSS;

/// The complete HTML document for the homepage.
///
/// Head carries the inline stylesheet; body composes the page chrome
/// around the feature showcase.
#[component]
pub fn HomepageDocument() -> impl IntoView {
    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <title>"Guard — PII redaction for your documents"</title>
                <style>{SITE_CSS}</style>
            </head>
            <body>
                <NavBar />
                <main>
                    <Hero />
                    <HomepageFeatures />
                </main>
                <Footer />
            </body>
        </html>
    }
}
