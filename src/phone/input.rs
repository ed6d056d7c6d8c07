use crate::config::{PHONE_INPUT_ID, PHONE_INPUT_SELECTOR};
use crate::dom;
use crate::phone::mask;
use log::{debug, info};
use wasm_bindgen::JsCast;
use web_sys::{ClipboardEvent, Event, HtmlInputElement};

/// Binds the mask to `#id_phone`, falling back to the first `.js-phone-mask`.
pub fn attach() {
    let Some(input) = dom::by_id::<HtmlInputElement>(PHONE_INPUT_ID)
        .or_else(|| dom::select::<HtmlInputElement>(PHONE_INPUT_SELECTOR))
    else {
        debug!("Phone input not found, mask disabled");
        return;
    };

    let initial = input.value();
    if !initial.is_empty() {
        input.set_value(&mask::mask(&initial));
    }

    {
        let field = input.clone();
        dom::listen(&input, "input", move |_| on_input(&field));
    }
    {
        let field = input.clone();
        dom::listen(&input, "paste", move |event| on_paste(&field, &event));
    }
    info!("Phone mask attached");
}

fn on_input(input: &HtmlInputElement) {
    let value = input.value();
    let cursor = input
        .selection_start()
        .ok()
        .flatten()
        .unwrap_or_else(|| value.encode_utf16().count() as u32);
    let edit = mask::reformat(&value, cursor);
    input.set_value(&edit.value);
    // Not every input type supports selection; the value is already correct.
    if let Err(e) = input.set_selection_range(edit.cursor, edit.cursor) {
        debug!("Could not restore phone caret: {:?}", e);
    }
}

fn on_paste(input: &HtmlInputElement, event: &Event) {
    event.prevent_default();
    let text = event
        .dyn_ref::<ClipboardEvent>()
        .and_then(|e| e.clipboard_data())
        .and_then(|data| data.get_data("text").ok())
        .unwrap_or_default();
    input.set_value(&mask::pasted(&text));
}
