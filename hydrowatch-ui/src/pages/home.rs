//! Home page: product story followed by the demo dashboard.

use leptos::*;

use crate::components::{ChartsSection, InfoSections};

#[component]
pub fn Home() -> impl IntoView {
    view! {
        <InfoSections />
        <ChartsSection />
    }
}
