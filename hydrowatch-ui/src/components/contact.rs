//! Contact Panel
//!
//! Slide-in panel from the right edge. Open/closed is just the `open` class
//! on the panel and its backdrop; the transition lives in `style.css`.

use leptos::*;

use crate::state::GlobalState;

const CONTACT_EMAIL: &str = "hello@hydrowatch.io";

#[component]
pub fn ContactPanel() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let open = state.contact_open;

    view! {
        <div
            class="contact-backdrop fixed inset-0 z-40 bg-slate-900/50"
            class:open=move || open.get()
            on:click=move |_| state.close_contact()
        />

        <aside
            class="contact-panel fixed top-0 right-0 z-50 h-full w-full max-w-md bg-white dark:bg-slate-900 shadow-xl p-8"
            class:open=move || open.get()
            aria-hidden=move || (!open.get()).to_string()
        >
            <div class="flex items-center justify-between mb-6">
                <h2 class="text-2xl font-semibold text-slate-900 dark:text-white">"Get in touch"</h2>
                <button
                    on:click=move |_| state.close_contact()
                    class="text-2xl text-slate-500 hover:text-slate-900 dark:hover:text-white"
                    title="Close"
                >
                    "×"
                </button>
            </div>

            <p class="text-slate-600 dark:text-slate-300 mb-6">
                "Want to see HydroWatch running on your plant? Tell us about your site and we will set up a pilot."
            </p>

            <a
                href=format!("mailto:{}", CONTACT_EMAIL)
                class="inline-block px-6 py-3 bg-sky-600 hover:bg-sky-700 text-white rounded-lg font-medium transition-colors"
            >
                {CONTACT_EMAIL}
            </a>
        </aside>
    }
}
