//! Leptos components for the Guard documentation homepage.
//!
//! Every component here is a static SSR component: no signals, no
//! event handlers, rendered once via
//! [`render_homepage`](crate::render_homepage).
//!
//! # Component Hierarchy
//!
//! ```text
//! HomepageDocument
//! ├── NavBar
//! ├── main
//! │   ├── Hero
//! │   │   └── Terminal (canned CLI session)
//! │   └── HomepageFeatures
//! │       └── Feature (one per FEATURE_LIST record)
//! └── Footer
//! ```

/// Version string shown in the nav and hero badge (single source of truth)
pub const VERSION: &str = "v0.1.0";

mod document;
mod features;
mod footer;
mod hero;
mod nav;

pub use document::HomepageDocument;
pub use features::{FEATURE_LIST, HomepageFeatures};
pub use footer::Footer;
pub use hero::Hero;
pub use nav::NavBar;
