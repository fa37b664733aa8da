//! Feature showcase section - the three-column grid below the hero.

use leptos::prelude::*;

use crate::types::FeatureItem;

/// The showcased capabilities, in display order (left to right).
///
/// Fixed length, fixed order; the section renders one block per record.
pub const FEATURE_LIST: [FeatureItem; 3] = [
    FeatureItem {
        title: "Easy to Use",
        image: "img/easy_to_use.png",
        description: "Guard was designed to be intuitive and easy to set up, \
                      whether you use our CLI tool or REST API.",
    },
    FeatureItem {
        title: "Focus on What Matters",
        image: "img/focus_on_what_matters.png",
        description: "Guard lets you focus on redacting sensitive information, \
                      leaving the heavy lifting of natural language processing to us.",
    },
    FeatureItem {
        title: "Powered by Presidio",
        image: "img/powered_by_presidio.png",
        description: "Built on top of Microsoft's Presidio, \
                      Guard provides reliable data processing.",
    },
];

/// One feature block: centered image, heading, description.
#[component]
fn Feature(item: FeatureItem) -> impl IntoView {
    view! {
        <div class="col col--4">
            <div class="text--center">
                <img class="featureImg" src=item.image alt=item.title />
            </div>
            <div class="text--center padding-horiz--md">
                <h3>{item.title}</h3>
                <p>{item.description}</p>
            </div>
        </div>
    }
}

/// The full features section: one feature block per
/// [`FEATURE_LIST`] record, in dataset order.
#[component]
pub fn HomepageFeatures() -> impl IntoView {
    view! {
        <section class="features">
            <div class="container">
                <div class="row">
                    {FEATURE_LIST
                        .into_iter()
                        .map(|item| view! { <Feature item=item /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
