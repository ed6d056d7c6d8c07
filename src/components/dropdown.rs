use crate::dom;
use log::info;
use wasm_bindgen::JsCast;
use web_sys::{Element, Node};

const DROPDOWN_SELECTOR: &str = ".header__dropdown";
const TOGGLE_SELECTOR: &str = ".header__dropdown-toggle";
const MENU_SELECTOR: &str = ".header__dropdown-menu";

pub fn attach() {
    let Some(document) = dom::document() else { return };
    let mut attached = 0;

    for dropdown in dom::select_all(DROPDOWN_SELECTOR) {
        let Some(toggle) = dom::select_in::<Element>(&dropdown, TOGGLE_SELECTOR) else {
            continue;
        };
        if dom::select_in::<Element>(&dropdown, MENU_SELECTOR).is_none() {
            continue;
        }

        {
            let dropdown = dropdown.clone();
            dom::listen(&toggle, "click", move |event| {
                event.prevent_default();
                dom::toggle_class(&dropdown, "active");
            });
        }

        // Any click outside closes it.
        dom::listen(&document, "click", move |event| {
            let target = event.target().and_then(|t| t.dyn_into::<Node>().ok());
            if !dropdown.contains(target.as_ref()) {
                dom::remove_class(&dropdown, "active");
            }
        });
        attached += 1;
    }

    if attached > 0 {
        info!("Attached {} header dropdowns", attached);
    }
}
