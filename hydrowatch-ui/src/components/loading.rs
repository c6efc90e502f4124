//! Loading Component
//!
//! Placeholder shown until a section's data arrives. A section whose fetch
//! failed keeps showing it.

use leptos::*;

/// Inline "Loading..." placeholder
#[component]
pub fn Loading() -> impl IntoView {
    view! {
        <div class="flex items-center space-x-3 py-6 text-slate-500 dark:text-slate-400">
            <span class="inline-block loading-spinner w-5 h-5" />
            <span>"Loading..."</span>
        </div>
    }
}
