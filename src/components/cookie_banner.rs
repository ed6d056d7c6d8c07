use crate::config::{CONSENT_STORAGE_KEY, COOKIE_ACCEPT_ID, COOKIE_BANNER_ID};
use crate::dom;
use log::{debug, info};
use std::rc::Rc;
use web_sys::{window, Element};

/// Where the "cookies accepted" flag lives. Failures read as "not accepted".
pub trait ConsentStore {
    fn accepted(&self) -> bool;
    fn accept(&self);
}

pub struct LocalConsentStore;

impl ConsentStore for LocalConsentStore {
    fn accepted(&self) -> bool {
        window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .and_then(|storage| storage.get_item(CONSENT_STORAGE_KEY).ok())
            .flatten()
            .is_some_and(|value| value == "true")
    }

    fn accept(&self) {
        if let Some(window) = window() {
            if let Ok(Some(storage)) = window.local_storage() {
                // Quota and private-mode failures only mean the banner shows again.
                if let Err(e) = storage.set_item(CONSENT_STORAGE_KEY, "true") {
                    debug!("Consent not persisted: {:?}", e);
                }
            }
        }
    }
}

pub fn should_show(store: &impl ConsentStore) -> bool {
    !store.accepted()
}

pub fn attach() {
    attach_with(Rc::new(LocalConsentStore));
}

fn attach_with<S: ConsentStore + 'static>(store: Rc<S>) {
    let Some(banner) = dom::by_id::<Element>(COOKIE_BANNER_ID) else {
        debug!("Cookie banner not found");
        return;
    };
    if !should_show(&*store) {
        debug!("Cookies already accepted");
        return;
    }

    dom::set_attribute(&banner, "aria-hidden", "false");
    dom::add_class(&banner, "is-visible");

    if let Some(accept) = dom::by_id::<Element>(COOKIE_ACCEPT_ID) {
        dom::listen(&accept, "click", move |_| {
            dom::set_attribute(&banner, "aria-hidden", "true");
            dom::remove_class(&banner, "is-visible");
            store.accept();
        });
    }
    info!("Cookie banner shown");
}
