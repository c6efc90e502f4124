//! Info Sections
//!
//! Context, problem, solution and business model copy from `/info`.

use leptos::*;

use hydrowatch::model::DescriptiveInfo;

use crate::components::Loading;
use crate::state::GlobalState;

#[component]
pub fn InfoSections() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    move || match state.info.get() {
        Some(info) => view! { <InfoContent info=info /> }.into_view(),
        None => view! {
            <section class="container mx-auto px-4 py-12">
                <Loading />
            </section>
        }
        .into_view(),
    }
}

#[component]
fn InfoContent(info: DescriptiveInfo) -> impl IntoView {
    view! {
        <section id="context" class="container mx-auto px-4 py-12">
            <p class="text-xl text-slate-700 dark:text-slate-300 max-w-3xl">{info.context}</p>
        </section>

        <section id="problem" class="container mx-auto px-4 py-12">
            <h2 class="text-3xl font-bold mb-8 text-slate-900 dark:text-white">"The problem"</h2>
            <div class="grid md:grid-cols-2 gap-6">
                <Card title="Plant owners" body=info.problem.owners />
                <Card title="Equipment vendors" body=info.problem.vendors />
            </div>
        </section>

        <section id="solution" class="container mx-auto px-4 py-12">
            <h2 class="text-3xl font-bold mb-8 text-slate-900 dark:text-white">"Our solution"</h2>
            <div class="grid md:grid-cols-3 gap-6">
                <Card title="Sensor modules" body=info.solution.modules />
                <Card title="AI forecasting" body=info.solution.ai />
                <Card title="Unified dashboard" body=info.solution.dashboard />
            </div>
        </section>

        <section id="business" class="container mx-auto px-4 py-12">
            <h2 class="text-3xl font-bold mb-4 text-slate-900 dark:text-white">"Business model"</h2>
            <p class="text-slate-700 dark:text-slate-300 max-w-3xl">{info.business_model}</p>
        </section>
    }
}

#[component]
fn Card(
    title: &'static str,
    #[prop(into)]
    body: String,
) -> impl IntoView {
    view! {
        <div class="bg-slate-50 dark:bg-slate-800 rounded-xl p-6 border border-slate-200 dark:border-slate-700">
            <h3 class="text-lg font-semibold mb-2 text-slate-900 dark:text-white">{title}</h3>
            <p class="text-slate-600 dark:text-slate-300">{body}</p>
        </div>
    }
}
