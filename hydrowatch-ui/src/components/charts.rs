//! Dashboard Charts
//!
//! Energy, quality and status charts. Each canvas is handed to the lazy
//! renderer together with a viewport observer; the renderer draws once the
//! canvas has been seen and its data has arrived.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use leptos::html::Canvas;
use leptos::*;

use hydrowatch::{ChartError, ChartSlotId, LazyChartRenderer, VISIBILITY_THRESHOLD};

use crate::components::canvas::CanvasSurface;
use crate::components::viewport::ViewportObserver;
use crate::components::Loading;
use crate::state::GlobalState;

type Renderer = LazyChartRenderer<CanvasSurface, ViewportObserver>;

#[component]
pub fn ChartsSection() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let renderer: Rc<RefCell<Renderer>> = Rc::new(RefCell::new(LazyChartRenderer::new()));

    let energy_ref = create_node_ref::<Canvas>();
    let quality_ref = create_node_ref::<Canvas>();
    let status_ref = create_node_ref::<Canvas>();

    for (id, node_ref) in [
        (ChartSlotId::Energy, energy_ref),
        (ChartSlotId::Quality, quality_ref),
        (ChartSlotId::Status, status_ref),
    ] {
        let weak = Rc::downgrade(&renderer);
        node_ref.on_load(move |canvas| {
            let canvas: web_sys::HtmlCanvasElement = (*canvas).clone();
            attach_canvas(&weak, id, canvas);
        });
    }

    // Set once the renderer holds data it accepted for the slot; rejected
    // data keeps the placeholder up
    let energy_ready = create_rw_signal(false);
    let quality_ready = create_rw_signal(false);
    let status_ready = create_rw_signal(false);

    // Hand data to the renderer as each fetch completes
    {
        let renderer = Rc::clone(&renderer);
        create_effect(move |_| {
            if let Some(series) = state.energy.get() {
                let result = renderer.borrow_mut().set_energy(&series);
                report(ChartSlotId::Energy, result);
                energy_ready.set(has_data(&renderer, ChartSlotId::Energy));
            }
        });
    }
    {
        let renderer = Rc::clone(&renderer);
        create_effect(move |_| {
            if let Some(series) = state.quality.get() {
                let result = renderer.borrow_mut().set_quality(&series);
                report(ChartSlotId::Quality, result);
                quality_ready.set(has_data(&renderer, ChartSlotId::Quality));
            }
        });
    }
    {
        let renderer = Rc::clone(&renderer);
        create_effect(move |_| {
            if let Some(status) = state.status.get() {
                let result = renderer.borrow_mut().set_status(&status);
                report(ChartSlotId::Status, result);
                status_ready.set(has_data(&renderer, ChartSlotId::Status));
            }
        });
    }

    {
        let renderer = Rc::clone(&renderer);
        on_cleanup(move || renderer.borrow_mut().teardown());
    }

    view! {
        <section id="dashboard" class="bg-slate-50 dark:bg-slate-800/50 py-16">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-bold mb-2 text-slate-900 dark:text-white">"Live dashboard"</h2>
                <p class="text-slate-600 dark:text-slate-400 mb-8">
                    "Demo data from a pilot plant, refreshed on every visit."
                </p>

                <div class="grid lg:grid-cols-2 gap-6">
                    <ChartCard title="Energy consumption" canvas_ref=energy_ref loaded=energy_ready />
                    <ChartCard title="Water quality" canvas_ref=quality_ref loaded=quality_ready />
                    <ChartCard title="Plant status" canvas_ref=status_ref loaded=status_ready />
                </div>
            </div>
        </section>
    }
}

/// Card holding one chart canvas, with a loading overlay until usable data
/// arrives
#[component]
fn ChartCard(
    title: &'static str,
    canvas_ref: NodeRef<Canvas>,
    #[prop(into)] loaded: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="bg-white dark:bg-slate-900 rounded-xl shadow p-6">
            <h3 class="text-lg font-semibold mb-4 text-slate-900 dark:text-white">{title}</h3>
            <div class="relative h-64">
                <canvas node_ref=canvas_ref class="w-full h-full" />
                <Show when=move || !loaded.get()>
                    <div class="absolute inset-0 flex items-center justify-center">
                        <Loading />
                    </div>
                </Show>
            </div>
        </div>
    }
}

/// Give a mounted canvas to the renderer, watching its visibility
fn attach_canvas(renderer: &Weak<RefCell<Renderer>>, id: ChartSlotId, canvas: web_sys::HtmlCanvasElement) {
    let Some(strong) = renderer.upgrade() else {
        return;
    };

    let weak = Weak::clone(renderer);
    let observer = ViewportObserver::observe(canvas.as_ref(), VISIBILITY_THRESHOLD, move |ratio| {
        let Some(renderer) = weak.upgrade() else {
            return;
        };
        let result = match renderer.try_borrow_mut() {
            Ok(mut renderer) => renderer.report_visibility(id, ratio),
            Err(_) => Err(ChartError::Backend("renderer busy".to_string())),
        };
        report(id, result);
    });

    match observer {
        Ok(observer) => strong.borrow_mut().attach(id, CanvasSurface::new(canvas), observer),
        Err(e) => web_sys::console::error_1(
            &format!("Cannot observe {} chart: {:?}", id.name(), e).into(),
        ),
    }
}

fn has_data(renderer: &Rc<RefCell<Renderer>>, id: ChartSlotId) -> bool {
    renderer.borrow().config(id).is_some()
}

fn report(id: ChartSlotId, result: Result<bool, ChartError>) {
    if let Err(e) = result {
        web_sys::console::error_1(&format!("Chart {} not rendered: {}", id.name(), e).into());
    }
}
