//! # guard-homepage
//!
//! Leptos SSR components for the Guard documentation homepage.
//!
//! This crate renders the homepage (nav, hero, feature showcase, footer)
//! to a static HTML string. Pure SSR: no reactive runtime, no hydration,
//! no client-side JavaScript.
//!
//! ## Quick Start
//!
//! ```rust
//! let html = guard_homepage::render_homepage();
//!
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! std::fs::write("index.html", html).unwrap();
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - the feature record data model
//! - [`components`] - Leptos components for the page
//! - [`styles`] - the inline stylesheet
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering goes through Leptos 0.8's `RenderHtml` trait:
//!
//! ```rust,ignore
//! use leptos::tachys::view::RenderHtml;
//!
//! let view = view! { <HomepageDocument /> };
//! let html: String = view.to_html();
//! ```

#![warn(missing_docs)]

pub mod components;
pub mod styles;
pub mod types;

use components::HomepageDocument;
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

/// Render the complete homepage to an HTML document string.
///
/// The page is a pure function of the static dataset, so repeated calls
/// return identical output.
///
/// # Example
///
/// ```rust
/// let html = guard_homepage::render_homepage();
/// assert!(html.contains("Easy to Use"));
/// ```
pub fn render_homepage() -> String {
    let doc = view! { <HomepageDocument /> };

    // Leptos emits the root element only; the DOCTYPE is ours to add
    format!("<!DOCTYPE html>\n{}", doc.to_html())
}

#[cfg(test)]
mod tests {
    use super::*;
    use components::{FEATURE_LIST, HomepageFeatures};
    use pretty_assertions::assert_eq;

    fn features_html() -> String {
        view! { <HomepageFeatures /> }.to_html()
    }

    /// Inner text of every `<h3>` element, in document order.
    fn h3_texts(html: &str) -> Vec<&str> {
        let mut out = Vec::new();
        let mut rest = html;
        while let Some(start) = rest.find("<h3") {
            let tail = &rest[start..];
            let Some(open_end) = tail.find('>') else { break };
            let body = &tail[open_end + 1..];
            let Some(close) = body.find("</h3>") else { break };
            out.push(&body[..close]);
            rest = &body[close..];
        }
        out
    }

    #[test]
    fn renders_exactly_three_feature_blocks() {
        let html = features_html();
        assert_eq!(html.matches("col col--4").count(), FEATURE_LIST.len());
    }

    #[test]
    fn headings_follow_dataset_order() {
        let html = features_html();
        assert_eq!(
            h3_texts(&html),
            vec!["Easy to Use", "Focus on What Matters", "Powered by Presidio"],
        );
    }

    #[test]
    fn image_alt_text_equals_title() {
        let html = features_html();
        for item in FEATURE_LIST {
            assert!(
                html.contains(&format!("alt=\"{}\"", item.title)),
                "missing alt text for {}",
                item.title
            );
            assert!(
                html.contains(&format!("src=\"{}\"", item.image)),
                "missing image path for {}",
                item.title
            );
        }
    }

    #[test]
    fn descriptions_render_verbatim() {
        // Normalize apostrophe escaping so the comparison is against the
        // dataset text, not the escaper's choice of entity.
        let html = features_html()
            .replace("&#39;", "'")
            .replace("&#x27;", "'");
        for item in FEATURE_LIST {
            assert!(
                html.contains(&format!("<p>{}</p>", item.description)),
                "missing description for {}",
                item.title
            );
        }
    }

    #[test]
    fn section_wraps_grid() {
        let html = features_html();
        assert!(html.starts_with("<section class=\"features\""));
        assert!(html.contains("class=\"container\""));
        assert!(html.contains("class=\"row\""));
    }

    #[test]
    fn render_is_deterministic() {
        assert_eq!(render_homepage(), render_homepage());
    }

    #[test]
    fn renders_complete_document() {
        let html = render_homepage();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<html"));
        assert!(html.contains("<title>"));
        assert!(html.contains("class=\"nav\""));
        assert!(html.contains("class=\"hero\""));
        assert!(html.contains("class=\"features\""));
        assert!(html.contains("class=\"footer\""));
    }
}
