use crate::config::{BURGER_BUTTON_ID, MOBILE_MENU_CLOSE_ID, MOBILE_MENU_ID};
use crate::dom;
use log::{debug, info};
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, KeyboardEvent};

struct Drawer {
    burger: Element,
    menu: Element,
    scroll_position: Cell<f64>,
}

impl Drawer {
    fn is_open(&self) -> bool {
        dom::has_class(&self.menu, "active")
    }

    fn open(&self) {
        let Some(window) = window() else { return };
        let position = window.scroll_y().unwrap_or(0.0);
        self.scroll_position.set(position);
        dom::add_class(&self.burger, "active");
        dom::add_class(&self.menu, "active");

        // Pin the page so it does not scroll behind the drawer.
        if let Some(body) = window.document().and_then(|d| d.body()) {
            dom::set_style(&body, "overflow", "hidden");
            dom::set_style(&body, "position", "fixed");
            dom::set_style(&body, "top", &format!("-{}px", position));
            dom::set_style(&body, "width", "100%");
        }
    }

    fn close(&self) {
        let Some(window) = window() else { return };
        dom::remove_class(&self.burger, "active");
        dom::remove_class(&self.menu, "active");

        if let Some(body) = window.document().and_then(|d| d.body()) {
            for property in ["overflow", "position", "top", "width"] {
                dom::clear_style(&body, property);
            }
        }
        window.scroll_to_with_x_and_y(0.0, self.scroll_position.get());
    }

    fn toggle(&self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }
}

pub fn attach() {
    let (Some(burger), Some(menu)) = (
        dom::by_id::<Element>(BURGER_BUTTON_ID),
        dom::by_id::<Element>(MOBILE_MENU_ID),
    ) else {
        debug!("Mobile menu not found");
        return;
    };
    let drawer = Rc::new(Drawer {
        burger,
        menu,
        scroll_position: Cell::new(0.0),
    });

    {
        let burger = drawer.burger.clone();
        let drawer = Rc::clone(&drawer);
        dom::listen(&burger, "click", move |_| drawer.toggle());
    }

    let mut closers: Vec<Element> = dom::by_id::<Element>(MOBILE_MENU_CLOSE_ID).into_iter().collect();
    closers.extend(dom::select_all_in(&drawer.menu, ".mobile-menu__link"));
    closers.extend(dom::select_in::<Element>(&drawer.menu, ".mobile-menu__cta"));
    for closer in closers {
        let drawer = Rc::clone(&drawer);
        dom::listen(&closer, "click", move |_| drawer.close());
    }

    if let Some(document) = dom::document() {
        let drawer = Rc::clone(&drawer);
        dom::listen(&document, "keydown", move |event| {
            let escape = event
                .dyn_ref::<KeyboardEvent>()
                .is_some_and(|key| key.key() == "Escape");
            if escape && drawer.is_open() {
                drawer.close();
            }
        });
    }
    info!("Mobile menu attached");
}
