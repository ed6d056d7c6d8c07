use crate::config::{ANCHOR_SCROLL_GAP, DEFAULT_HEADER_HEIGHT};
use crate::dom;
use log::debug;
use web_sys::{window, Element, HtmlElement, ScrollBehavior, ScrollToOptions};

/// Page offset that puts the target just below the fixed header.
pub fn scroll_target(rect_top: f64, page_offset: f64, header_height: f64) -> f64 {
    rect_top + page_offset - header_height - ANCHOR_SCROLL_GAP
}

pub fn attach() {
    let anchors = dom::select_all("a[href^=\"#\"]");
    debug!("Smooth scrolling {} anchors", anchors.len());

    for anchor in anchors {
        let link = anchor.clone();
        dom::listen(&anchor, "click", move |event| {
            let Some(href) = link.get_attribute("href") else { return };
            if href == "#" {
                return;
            }
            // Hrefs that are not valid selectors fall through to native navigation.
            let Some(target) = dom::select::<Element>(&href) else { return };
            let Some(window) = window() else { return };
            event.prevent_default();

            let header_height = dom::select::<HtmlElement>(".header")
                .map(|header| f64::from(header.offset_height()))
                .unwrap_or(DEFAULT_HEADER_HEIGHT);
            let top = scroll_target(
                target.get_bounding_client_rect().top(),
                window.page_y_offset().unwrap_or(0.0),
                header_height,
            );

            let options = ScrollToOptions::new();
            options.set_top(top);
            options.set_behavior(ScrollBehavior::Smooth);
            window.scroll_to_with_scroll_to_options(&options);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_clears_header_and_gap() {
        assert_eq!(scroll_target(500.0, 1000.0, 80.0), 1400.0);
        assert_eq!(scroll_target(-200.0, 1000.0, 64.0), 716.0);
    }
}
