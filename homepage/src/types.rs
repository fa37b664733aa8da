//! Data model for the homepage.

/// One showcased capability: title, image resource, description.
///
/// The homepage dataset is a `const` array of these records (see
/// [`FEATURE_LIST`](crate::components::FEATURE_LIST)); consumers treat it
/// as read-only. Image paths are site-relative and resolved by the asset
/// pipeline when the site is built, not validated here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureItem {
    /// Short human-readable label, also used as the image alt text.
    pub title: &'static str,
    /// Site-relative path to the feature illustration.
    pub image: &'static str,
    /// Text describing the feature.
    pub description: &'static str,
}
