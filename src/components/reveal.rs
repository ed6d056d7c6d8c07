use crate::config::{REVEAL_ROOT_MARGIN, REVEAL_SELECTOR, REVEAL_THRESHOLD};
use crate::dom;
use js_sys::Array;
use log::{debug, info, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Staggered transition so cards in a row slide in one after another.
pub fn transition_for(index: usize) -> String {
    format!("all 0.6s cubic-bezier(0.4, 0, 0.2, 1) {}s", index as f64 / 10.0)
}

pub fn attach() {
    let targets = dom::select_all(REVEAL_SELECTOR);
    if targets.is_empty() {
        debug!("Nothing to reveal");
        return;
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    dom::add_class(&target, "animate-in");
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(e) => {
                warn!("IntersectionObserver unavailable: {:?}", e);
                return;
            }
        };
    callback.forget();

    for (index, element) in targets.iter().enumerate() {
        dom::set_style(element, "opacity", "0");
        dom::set_style(element, "transform", "translateY(30px)");
        dom::set_style(element, "transition", &transition_for(index));
        observer.observe(element);
    }
    info!("Reveal attached to {} elements", targets.len());
}
