//! Navigation Component
//!
//! Header bar with brand, section links, theme toggle and contact button.

use leptos::*;

use crate::state::GlobalState;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <nav class="sticky top-0 z-30 bg-white/90 dark:bg-slate-900/90 backdrop-blur border-b border-slate-200 dark:border-slate-800">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <a href="#top" class="flex items-center space-x-3">
                        <span class="text-2xl">"💧"</span>
                        <span class="text-xl font-bold text-slate-900 dark:text-white">"HydroWatch"</span>
                    </a>

                    <div class="flex items-center space-x-1">
                        <NavLink href="#problem" label="Problem" />
                        <NavLink href="#solution" label="Solution" />
                        <NavLink href="#dashboard" label="Dashboard" />

                        <button
                            on:click=move |_| state.toggle_theme()
                            class="ml-2 px-3 py-2 rounded-lg text-slate-600 dark:text-slate-300 hover:bg-slate-100 dark:hover:bg-slate-800 transition-colors"
                            title="Toggle theme"
                        >
                            {move || if state.theme.get().is_dark() { "☀️" } else { "🌙" }}
                        </button>

                        <button
                            on:click=move |_| state.open_contact()
                            class="ml-2 px-4 py-2 rounded-lg bg-sky-600 hover:bg-sky-700 text-white font-medium transition-colors"
                        >
                            "Contact"
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// Individual in-page link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <a
            href=href
            class="hidden md:inline-block px-4 py-2 rounded-lg text-slate-600 dark:text-slate-300 hover:text-slate-900 dark:hover:text-white hover:bg-slate-100 dark:hover:bg-slate-800 transition-colors"
        >
            {label}
        </a>
    }
}
