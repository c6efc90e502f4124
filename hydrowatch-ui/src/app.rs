//! App Root Component
//!
//! Single-page layout: navigation, hero, content sections, dashboard and
//! the contact panel.

use leptos::*;

use crate::components::{ContactPanel, Nav};
use crate::pages::Home;
use crate::state::{provide_global_state, GlobalState};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // Theme is applied here, before the first paint of the page body
    let state = provide_global_state();
    state.load_all();

    view! {
        <div id="top" class="min-h-screen flex flex-col bg-white text-slate-800 dark:bg-slate-900 dark:text-slate-100 transition-colors">
            <Nav />

            <main class="flex-1">
                <Hero />
                <Home />
            </main>

            <Footer />

            <ContactPanel />
        </div>
    }
}

#[component]
fn Hero() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <header class="bg-gradient-to-br from-sky-50 to-teal-50 dark:from-slate-900 dark:to-slate-800 py-20">
            <div class="container mx-auto px-4 text-center">
                <h1 class="text-4xl md:text-5xl font-extrabold mb-4 text-slate-900 dark:text-white">
                    "Water treatment you can see"
                </h1>
                <p class="text-lg text-slate-600 dark:text-slate-300 max-w-2xl mx-auto mb-8">
                    "Sensors, forecasts and one dashboard for every plant you run."
                </p>
                <div class="flex justify-center space-x-4">
                    <a
                        href="#dashboard"
                        class="px-6 py-3 rounded-lg bg-sky-600 hover:bg-sky-700 text-white font-medium transition-colors"
                    >
                        "See the dashboard"
                    </a>
                    <button
                        class="px-6 py-3 rounded-lg border border-slate-300 dark:border-slate-600 hover:bg-slate-100 dark:hover:bg-slate-800 font-medium transition-colors"
                        on:click=move |_| state.open_contact()
                    >
                        "Talk to us"
                    </button>
                </div>
            </div>
        </header>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="border-t border-slate-200 dark:border-slate-800 py-6">
            <div class="container mx-auto px-4 text-sm text-slate-500 dark:text-slate-400 text-center">
                "HydroWatch · Water treatment monitoring"
            </div>
        </footer>
    }
}
