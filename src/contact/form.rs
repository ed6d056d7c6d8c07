use crate::components::notification::{self, Severity};
use crate::config::{
    CONTACT_FORM_ID, FIELDS_SELECTOR, FIELD_ERROR_CLASS, HONEYPOT_SELECTOR, PRIVACY_SELECTOR,
    RECAPTCHA_TOKEN_ID, SCRIPTED_REQUEST_HEADER, SUBMIT_SELECTOR, SUCCESS_ANIMATION,
    SUCCESS_PANEL_ID,
};
use crate::contact::error::SubmitError;
use crate::contact::response::{self, FormSubmissionResult};
use crate::contact::submission::{self, FormSurface, SubmissionState, SubmitControl};
use crate::dom;
use gloo_net::http::Request;
use log::{debug, info, warn};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Element, FormData, HtmlButtonElement, HtmlFormElement, HtmlInputElement};

pub struct ContactForm {
    form: HtmlFormElement,
    submit: HtmlButtonElement,
    state: SubmissionState,
}

impl ContactForm {
    /// Binds to `#contact-form-el`. Without a captcha on the page the native
    /// submit is intercepted; with one, the captcha script calls
    /// `window.submitContactForm()` once it has a token.
    pub fn attach() -> Option<Rc<Self>> {
        let Some(form) = dom::by_id::<HtmlFormElement>(CONTACT_FORM_ID) else {
            debug!("Contact form not found, submission stays native");
            return None;
        };
        let Some(submit) = dom::select_in::<HtmlButtonElement>(&form, SUBMIT_SELECTOR) else {
            debug!("Contact form has no submit button, submission stays native");
            return None;
        };
        let controller = Rc::new(Self {
            form,
            submit,
            state: SubmissionState::default(),
        });

        if dom::by_id::<Element>(RECAPTCHA_TOKEN_ID).is_none() {
            let this = Rc::clone(&controller);
            dom::listen(&controller.form, "submit", move |event| {
                event.prevent_default();
                this.submit();
            });
        }
        controller.expose_to_window();

        info!("Contact form attached");
        Some(controller)
    }

    pub fn submit(self: &Rc<Self>) {
        let this = Rc::clone(self);
        spawn_local(async move {
            let settled =
                submission::run(&this.state, &this.submit, &*this, || send(&this.form)).await;
            debug!("Contact form submission settled: {:?}", settled);
        });
    }

    fn expose_to_window(self: &Rc<Self>) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let this = Rc::clone(self);
        let callback = Closure::<dyn FnMut()>::new(move || this.submit());
        match js_sys::Reflect::set(&window, &"submitContactForm".into(), callback.as_ref()) {
            Ok(_) => callback.forget(),
            Err(e) => warn!("Failed to expose submitContactForm: {:?}", e),
        }
    }

    fn hide(&self, selector: &str) {
        if let Some(element) = dom::select_in::<Element>(&self.form, selector) {
            dom::set_style(&element, "display", "none");
        }
    }
}

async fn send(form: &HtmlFormElement) -> Result<FormSubmissionResult, SubmitError> {
    let data = FormData::new_with_form(form).map_err(|_| SubmitError::Encode)?;
    let (header, value) = SCRIPTED_REQUEST_HEADER;
    let response = Request::post(&form.action())
        .header(header, value)
        .body(data)
        .send()
        .await
        .map_err(SubmitError::Transport)?;
    debug!("Contact endpoint answered {}", response.status());
    let body = response.text().await.map_err(SubmitError::Transport)?;
    Ok(response::parse(&body)?)
}

impl SubmitControl for HtmlButtonElement {
    fn label(&self) -> String {
        self.inner_html()
    }

    fn show_busy(&self, label: &str) {
        self.set_inner_html(&format!("<span class=\"loading\">{}</span>", label));
        self.set_disabled(true);
        dom::set_style(self, "opacity", "0.7");
    }

    fn restore(&self, label: &str) {
        self.set_inner_html(label);
        self.set_disabled(false);
        dom::clear_style(self, "opacity");
    }
}

impl FormSurface for ContactForm {
    fn show_success(&self) {
        self.hide(FIELDS_SELECTOR);
        self.hide(HONEYPOT_SELECTOR);
        self.hide(PRIVACY_SELECTOR);
        dom::set_style(&self.submit, "display", "none");

        if let Some(panel) = dom::by_id::<Element>(SUCCESS_PANEL_ID) {
            dom::set_style(&panel, "display", "block");
            dom::set_style(&panel, "animation", SUCCESS_ANIMATION);
        }
    }

    fn mark_invalid(&self, field: &str) {
        let Some(control) = self.form.elements().named_item(field) else {
            return;
        };
        if control
            .dyn_ref::<HtmlInputElement>()
            .is_some_and(|input| input.type_() == "hidden")
        {
            return;
        }
        dom::add_class(&control, FIELD_ERROR_CLASS);
        let target = control.clone();
        dom::listen_once(&control, "focus", move |_| {
            dom::remove_class(&target, FIELD_ERROR_CLASS);
        });
    }

    fn notify(&self, message: &str, severity: Severity) {
        notification::notify(message, severity);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;
    use web_sys::{Event, HtmlElement};

    const MARKUP: &str = r#"
        <form id="contact-form-el" action="/contact/">
            <div class="contact-form__fields">
                <input type="text" name="name">
                <input type="tel" name="phone">
                <input type="hidden" name="source" value="landing">
            </div>
            <div class="contact-form__honeypot"><input type="text" name="website"></div>
            <div class="contact-form__privacy">privacy</div>
            <button type="submit" class="contact-form__submit">Отправить</button>
        </form>
        <div id="form-success" style="display: none">Спасибо!</div>
    "#;

    fn render() -> ContactForm {
        let body = dom::document().and_then(|d| d.body()).unwrap();
        body.set_inner_html(MARKUP);
        let form = dom::by_id::<HtmlFormElement>(CONTACT_FORM_ID).unwrap();
        let submit = dom::select_in::<HtmlButtonElement>(&form, SUBMIT_SELECTOR).unwrap();
        ContactForm {
            form,
            submit,
            state: SubmissionState::default(),
        }
    }

    fn display_of(element: &Element) -> String {
        element
            .dyn_ref::<HtmlElement>()
            .unwrap()
            .style()
            .get_property_value("display")
            .unwrap()
    }

    fn field(form: &ContactForm, name: &str) -> Element {
        form.form.elements().named_item(name).unwrap()
    }

    #[wasm_bindgen_test]
    fn success_hides_the_form_and_shows_the_panel() {
        let form = render();
        form.show_success();

        for selector in [FIELDS_SELECTOR, HONEYPOT_SELECTOR, PRIVACY_SELECTOR] {
            let part = dom::select_in::<Element>(&form.form, selector).unwrap();
            assert_eq!(display_of(&part), "none", "{} still visible", selector);
        }
        assert_eq!(display_of(&form.submit), "none");
        let panel = dom::by_id::<Element>(SUCCESS_PANEL_ID).unwrap();
        assert_eq!(display_of(&panel), "block");
    }

    #[wasm_bindgen_test]
    fn hidden_inputs_are_not_highlighted() {
        let form = render();
        form.mark_invalid("source");
        assert!(!dom::has_class(&field(&form, "source"), FIELD_ERROR_CLASS));
    }

    #[wasm_bindgen_test]
    fn unknown_fields_are_skipped() {
        let form = render();
        form.mark_invalid("captcha");
        assert!(dom::select_all(&format!(".{}", FIELD_ERROR_CLASS)).is_empty());
    }

    #[wasm_bindgen_test]
    fn focus_clears_the_highlight_once() {
        let form = render();
        form.mark_invalid("phone");
        let phone = field(&form, "phone");
        assert!(dom::has_class(&phone, FIELD_ERROR_CLASS));

        phone.dispatch_event(&Event::new("focus").unwrap()).unwrap();
        assert!(!dom::has_class(&phone, FIELD_ERROR_CLASS));

        // A later error on the same field needs its own focus to clear.
        form.mark_invalid("phone");
        assert!(dom::has_class(&phone, FIELD_ERROR_CLASS));
    }
}
