use log::Level;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug  // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

// Phone mask
pub const PHONE_INPUT_ID: &str = "id_phone";
pub const PHONE_INPUT_SELECTOR: &str = ".js-phone-mask";

// Contact form
pub const CONTACT_FORM_ID: &str = "contact-form-el";
pub const RECAPTCHA_TOKEN_ID: &str = "recaptcha-token";
pub const SUBMIT_SELECTOR: &str = ".contact-form__submit";
pub const FIELDS_SELECTOR: &str = ".contact-form__fields";
pub const HONEYPOT_SELECTOR: &str = ".contact-form__honeypot";
pub const PRIVACY_SELECTOR: &str = ".contact-form__privacy";
pub const SUCCESS_PANEL_ID: &str = "form-success";
pub const SUCCESS_ANIMATION: &str = "fadeInUp 0.5s ease-out";
pub const FIELD_ERROR_CLASS: &str = "form-field--error";
pub const FORM_WIDE_ERROR_KEY: &str = "__all__";
pub const SCRIPTED_REQUEST_HEADER: (&str, &str) = ("X-Requested-With", "XMLHttpRequest");
pub const SUBMIT_BUSY_LABEL: &str = "Отправка...";
pub const FIX_ERRORS_HEADER: &str = "Пожалуйста, исправьте ошибки:\n";
pub const GENERIC_FAILURE_MESSAGE: &str = "Произошла ошибка. Пожалуйста, позвоните нам.";

// Notifications
pub const NOTIFICATION_TIMEOUT_MS: u32 = 5_000;
pub const NOTIFICATION_EXIT_MS: u32 = 300;
pub const NOTIFICATION_HOST_CLASS: &str = "notification-host";

// Cookie banner
pub const COOKIE_BANNER_ID: &str = "cookie-banner";
pub const COOKIE_ACCEPT_ID: &str = "cookie-banner-accept";
pub const CONSENT_STORAGE_KEY: &str = "cookie_consent_accepted";

// Navigation
pub const BURGER_BUTTON_ID: &str = "burger-btn";
pub const MOBILE_MENU_ID: &str = "mobile-menu";
pub const MOBILE_MENU_CLOSE_ID: &str = "mobile-menu-close";
pub const HEADER_ID: &str = "header";
pub const HEADER_SCROLL_THRESHOLD: f64 = 50.0;
pub const DEFAULT_HEADER_HEIGHT: f64 = 80.0;
pub const ANCHOR_SCROLL_GAP: f64 = 20.0;

// Reveal on scroll
pub const REVEAL_SELECTOR: &str = ".service-card, .advantage-card, .stats__item, .location__item";
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";
