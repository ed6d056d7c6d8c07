use crate::config::{NOTIFICATION_EXIT_MS, NOTIFICATION_HOST_CLASS, NOTIFICATION_TIMEOUT_MS};
use crate::dom;
use gloo_timers::callback::Timeout;
use log::{debug, warn};
use std::cell::RefCell;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use yew::prelude::*;
use yew::AppHandle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Info,
}

impl Severity {
    fn modifier(self) -> &'static str {
        match self {
            Severity::Error => "notification--error",
            Severity::Info => "notification--info",
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Severity::Error => "❌",
            Severity::Info => "✅",
        }
    }

    // (background, border, text)
    fn palette(self) -> (&'static str, &'static str, &'static str) {
        match self {
            Severity::Error => ("#fef2f2", "#fecaca", "#991b1b"),
            Severity::Info => ("#f0fdf4", "#bbf7d0", "#166534"),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct NotificationProps {
    pub message: String,
    pub severity: Severity,
    pub on_dismissed: Callback<()>,
}

#[function_component(Notification)]
pub fn notification(props: &NotificationProps) -> Html {
    let leaving = use_state(|| false);

    {
        let leaving = leaving.clone();
        use_effect_with_deps(
            move |_| {
                let hold = Timeout::new(NOTIFICATION_TIMEOUT_MS, move || leaving.set(true));
                move || drop(hold)
            },
            (),
        );
    }

    {
        let on_dismissed = props.on_dismissed.clone();
        use_effect_with_deps(
            move |leaving| {
                let exit = leaving.then(|| {
                    Timeout::new(NOTIFICATION_EXIT_MS, move || on_dismissed.emit(()))
                });
                move || drop(exit)
            },
            *leaving,
        );
    }

    let (background, border, color) = props.severity.palette();
    let animation = if *leaving {
        "slideOutRight 0.3s ease-out forwards"
    } else {
        "slideInRight 0.3s ease-out"
    };
    let style = format!(
        "position: fixed; bottom: 24px; right: 24px; max-width: 400px; padding: 16px 24px; \
         background: {}; border: 1px solid {}; border-radius: 12px; \
         box-shadow: 0 10px 40px rgba(0,0,0,0.15); display: flex; align-items: flex-start; \
         gap: 12px; z-index: 10000; animation: {}; font-size: 14px; line-height: 1.5; \
         color: {}; white-space: pre-line;",
        background, border, animation, color
    );

    html! {
        <div class={classes!("notification", props.severity.modifier())} role="status" {style}>
            <span class="notification__icon">{props.severity.icon()}</span>
            <span class="notification__text">{props.message.clone()}</span>
        </div>
    }
}

/// Holds the one visible item and hands out ids so a late dismissal of a
/// replaced item cannot tear down its successor.
#[derive(Debug)]
struct Slot<T> {
    next_id: u64,
    current: Option<(u64, T)>,
}

impl<T> Default for Slot<T> {
    fn default() -> Self {
        Self {
            next_id: 0,
            current: None,
        }
    }
}

impl<T> Slot<T> {
    /// Evicts the current item and reserves an id for its replacement.
    fn begin(&mut self) -> (u64, Option<T>) {
        let id = self.next_id;
        self.next_id += 1;
        (id, self.current.take().map(|(_, item)| item))
    }

    fn install(&mut self, id: u64, item: T) {
        self.current = Some((id, item));
    }

    /// Takes the item only if `id` still names it.
    fn finish(&mut self, id: u64) -> Option<T> {
        if self.current.as_ref().is_some_and(|(current, _)| *current == id) {
            self.current.take().map(|(_, item)| item)
        } else {
            None
        }
    }
}

struct ActiveNotification {
    handle: AppHandle<Notification>,
    host: Element,
}

thread_local! {
    static ACTIVE: RefCell<Slot<ActiveNotification>> = RefCell::new(Slot::default());
}

/// Shows a toast in the corner of the page, replacing any toast already shown.
pub fn notify(message: &str, severity: Severity) {
    let (id, previous) = ACTIVE.with(|active| active.borrow_mut().begin());
    if let Some(previous) = previous {
        teardown(previous);
    }

    let Some(document) = dom::document() else {
        return;
    };
    let Some(body) = document.body() else {
        warn!("No <body> to show notification in");
        return;
    };
    let host = match document.create_element("div") {
        Ok(host) => host,
        Err(e) => {
            warn!("Failed to create notification host: {:?}", e);
            return;
        }
    };
    dom::add_class(&host, NOTIFICATION_HOST_CLASS);
    if let Err(e) = body.append_child(&host) {
        warn!("Failed to attach notification host: {:?}", e);
        return;
    }

    let props = NotificationProps {
        message: message.to_string(),
        severity,
        on_dismissed: Callback::from(move |_| dismiss(id)),
    };
    let handle = yew::Renderer::<Notification>::with_root_and_props(host.clone(), props).render();
    ACTIVE.with(|active| active.borrow_mut().install(id, ActiveNotification { handle, host }));
}

fn dismiss(id: u64) {
    let finished = ACTIVE.with(|active| active.borrow_mut().finish(id));
    match finished {
        // The callback runs inside the component being destroyed.
        Some(notification) => spawn_local(async move { teardown(notification) }),
        None => debug!("Notification {} already replaced", id),
    }
}

fn teardown(notification: ActiveNotification) {
    notification.handle.destroy();
    notification.host.remove();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replacement_evicts_the_visible_item() {
        let mut slot = Slot::default();
        let (first, evicted) = slot.begin();
        assert!(evicted.is_none());
        slot.install(first, "first");

        let (second, evicted) = slot.begin();
        assert_ne!(first, second);
        assert_eq!(evicted, Some("first"));
        slot.install(second, "second");
    }

    #[test]
    fn stale_dismissal_keeps_the_successor() {
        let mut slot = Slot::default();
        let (first, _) = slot.begin();
        slot.install(first, "first");
        let (second, _) = slot.begin();
        slot.install(second, "second");

        assert_eq!(slot.finish(first), None);
        assert_eq!(slot.finish(second), Some("second"));
        assert_eq!(slot.finish(second), None);
    }

    #[test]
    fn dismissal_before_install_is_ignored() {
        let mut slot: Slot<&str> = Slot::default();
        let (id, _) = slot.begin();
        assert_eq!(slot.finish(id), None);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use wasm_bindgen_test::wasm_bindgen_test;

    fn hosts() -> u32 {
        dom::select_all(&format!(".{}", NOTIFICATION_HOST_CLASS)).len() as u32
    }

    #[wasm_bindgen_test]
    fn second_notification_replaces_the_first() {
        notify("Первое", Severity::Info);
        notify("Второе", Severity::Error);

        assert_eq!(hosts(), 1);
    }

    #[wasm_bindgen_test]
    fn stale_dismissal_leaves_the_current_notification() {
        notify("Первое", Severity::Info);
        let stale = ACTIVE.with(|active| active.borrow().next_id - 1);
        notify("Второе", Severity::Info);

        dismiss(stale);
        assert_eq!(hosts(), 1);
        assert!(ACTIVE.with(|active| active.borrow().current.is_some()));
    }
}
