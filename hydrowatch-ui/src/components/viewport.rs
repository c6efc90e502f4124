//! Viewport visibility via `IntersectionObserver`

use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use hydrowatch::VisibilityObserver;

/// Reports the visible fraction of one element whenever it crosses
/// `threshold`.
///
/// Reports are delivered from a spawned task rather than from inside the
/// browser callback, so the receiver may disconnect and drop this observer
/// while handling one.
pub struct ViewportObserver {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

impl ViewportObserver {
    pub fn observe(
        target: &Element,
        threshold: f64,
        on_change: impl Fn(f64) + 'static,
    ) -> Result<Self, JsValue> {
        let on_change: Rc<dyn Fn(f64)> = Rc::new(on_change);

        let callback = Closure::<dyn FnMut(js_sys::Array)>::new(move |entries: js_sys::Array| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                let ratio = entry.intersection_ratio();
                let on_change = Rc::clone(&on_change);
                wasm_bindgen_futures::spawn_local(async move { on_change(ratio) });
            }
        });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(target);

        Ok(Self {
            observer,
            _callback: callback,
        })
    }
}

impl VisibilityObserver for ViewportObserver {
    fn disconnect(&mut self) {
        self.observer.disconnect();
    }
}
