//! Thin helpers over `web_sys` shared by every component.
//!
//! Lookups return `Option` so a missing element turns the caller into a
//! no-op instead of an error.

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement};

pub fn document() -> Option<Document> {
    web_sys::window().and_then(|w| w.document())
}

pub fn by_id<T: JsCast>(id: &str) -> Option<T> {
    document()?.get_element_by_id(id)?.dyn_into::<T>().ok()
}

pub fn select<T: JsCast>(selector: &str) -> Option<T> {
    document()?.query_selector(selector).ok().flatten()?.dyn_into::<T>().ok()
}

pub fn select_in<T: JsCast>(parent: &Element, selector: &str) -> Option<T> {
    parent.query_selector(selector).ok().flatten()?.dyn_into::<T>().ok()
}

pub fn select_all(selector: &str) -> Vec<Element> {
    let Some(document) = document() else {
        return Vec::new();
    };
    match document.query_selector_all(selector) {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
        Err(e) => {
            warn!("Invalid selector {}: {:?}", selector, e);
            Vec::new()
        }
    }
}

pub fn select_all_in(parent: &Element, selector: &str) -> Vec<Element> {
    match parent.query_selector_all(selector) {
        Ok(list) => (0..list.length())
            .filter_map(|i| list.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect(),
        Err(e) => {
            warn!("Invalid selector {}: {:?}", selector, e);
            Vec::new()
        }
    }
}

/// Registers a listener that lives as long as the page.
pub fn listen<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let callback = Closure::<dyn FnMut(Event)>::new(handler);
    if let Err(e) = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref()) {
        warn!("Failed to add {} listener: {:?}", event, e);
        return;
    }
    callback.forget();
}

/// Registers a listener that unsubscribes itself after the first call.
pub fn listen_once<F>(target: &EventTarget, event: &str, handler: F)
where
    F: FnOnce(Event) + 'static,
{
    let callback = Closure::once_into_js(handler);
    let options = AddEventListenerOptions::new();
    options.set_once(true);
    if let Err(e) = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        callback.unchecked_ref(),
        &options,
    ) {
        warn!("Failed to add one-shot {} listener: {:?}", event, e);
    }
}

pub fn set_style(element: &Element, property: &str, value: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        if let Err(e) = element.style().set_property(property, value) {
            warn!("Failed to set {}: {:?}", property, e);
        }
    }
}

pub fn clear_style(element: &Element, property: &str) {
    if let Some(element) = element.dyn_ref::<HtmlElement>() {
        if let Err(e) = element.style().remove_property(property) {
            warn!("Failed to clear {}: {:?}", property, e);
        }
    }
}

pub fn set_attribute(element: &Element, name: &str, value: &str) {
    if let Err(e) = element.set_attribute(name, value) {
        warn!("Failed to set attribute {}: {:?}", name, e);
    }
}

pub fn add_class(element: &Element, class: &str) {
    if let Err(e) = element.class_list().add_1(class) {
        warn!("Failed to add class {}: {:?}", class, e);
    }
}

pub fn remove_class(element: &Element, class: &str) {
    if let Err(e) = element.class_list().remove_1(class) {
        warn!("Failed to remove class {}: {:?}", class, e);
    }
}

pub fn toggle_class(element: &Element, class: &str) {
    if let Err(e) = element.class_list().toggle(class) {
        warn!("Failed to toggle class {}: {:?}", class, e);
    }
}

pub fn has_class(element: &Element, class: &str) -> bool {
    element.class_list().contains(class)
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    fn element() -> Element {
        document().unwrap().create_element("div").unwrap()
    }

    #[wasm_bindgen_test]
    fn rejected_class_tokens_leave_the_element_untouched() {
        let el = element();
        // DOMTokenList throws on empty tokens and tokens with whitespace.
        add_class(&el, "");
        add_class(&el, "two words");
        toggle_class(&el, "");
        remove_class(&el, "");
        assert_eq!(el.class_name(), "");
    }

    #[wasm_bindgen_test]
    fn rejected_attribute_name_is_skipped() {
        let el = element();
        set_attribute(&el, "not valid", "x");
        set_attribute(&el, "aria-hidden", "true");
        assert_eq!(el.get_attribute("aria-hidden").as_deref(), Some("true"));
        assert_eq!(el.get_attribute_names().length(), 1);
    }

    #[wasm_bindgen_test]
    fn valid_class_changes_apply() {
        let el = element();
        add_class(&el, "active");
        assert!(has_class(&el, "active"));
        toggle_class(&el, "active");
        assert!(!has_class(&el, "active"));
    }
}
