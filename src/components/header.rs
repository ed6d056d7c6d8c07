use crate::config::{HEADER_ID, HEADER_SCROLL_THRESHOLD};
use crate::dom;
use log::{debug, info, warn};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{window, Element};

pub fn is_scrolled(offset: f64) -> bool {
    offset > HEADER_SCROLL_THRESHOLD
}

fn update(header: &Element) {
    let offset = window().and_then(|w| w.page_y_offset().ok()).unwrap_or(0.0);
    if is_scrolled(offset) {
        dom::add_class(header, "scrolled");
    } else {
        dom::remove_class(header, "scrolled");
    }
}

/// Toggles `scrolled` on `#header`, at most once per animation frame.
pub fn attach() {
    let Some(header) = dom::by_id::<Element>(HEADER_ID) else {
        debug!("Header not found");
        return;
    };
    let Some(window) = window() else { return };

    let ticking = Rc::new(Cell::new(false));
    let frame = {
        let header = header.clone();
        let ticking = Rc::clone(&ticking);
        Closure::<dyn FnMut()>::new(move || {
            update(&header);
            ticking.set(false);
        })
    };

    {
        let target = window.clone();
        dom::listen(&target, "scroll", move |_| {
            if ticking.get() {
                return;
            }
            match window.request_animation_frame(frame.as_ref().unchecked_ref()) {
                Ok(_) => ticking.set(true),
                Err(e) => warn!("requestAnimationFrame failed: {:?}", e),
            }
        });
    }

    update(&header);
    info!("Header scroll attached");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_switches_past_threshold() {
        assert!(!is_scrolled(0.0));
        assert!(!is_scrolled(50.0));
        assert!(is_scrolled(50.5));
        assert!(is_scrolled(1200.0));
    }
}
