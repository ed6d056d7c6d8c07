use crate::dom;
use log::{debug, warn};

const STYLE_ELEMENT_ID: &str = "site-enhancements-style";

const ENHANCEMENT_CSS: &str = r#"
    .animate-in {
        opacity: 1 !important;
        transform: translateY(0) !important;
    }

    @keyframes slideInRight {
        from {
            transform: translateX(100%);
            opacity: 0;
        }
        to {
            transform: translateX(0);
            opacity: 1;
        }
    }

    @keyframes slideOutRight {
        from {
            transform: translateX(0);
            opacity: 1;
        }
        to {
            transform: translateX(100%);
            opacity: 0;
        }
    }

    .loading {
        display: inline-flex;
        align-items: center;
        gap: 8px;
    }

    .loading::after {
        content: '';
        width: 16px;
        height: 16px;
        border: 2px solid rgba(255,255,255,0.3);
        border-top-color: white;
        border-radius: 50%;
        animation: spin 0.8s linear infinite;
    }

    @keyframes spin {
        to { transform: rotate(360deg); }
    }

    .form-field--error {
        border-color: #ef4444 !important;
    }
"#;

/// Appends the shared stylesheet to `<head>` once. Later calls find the
/// element by id and return without touching the document.
pub fn ensure_registered() {
    let Some(document) = dom::document() else {
        return;
    };
    if document.get_element_by_id(STYLE_ELEMENT_ID).is_some() {
        debug!("Enhancement styles already registered");
        return;
    }
    let Some(head) = document.head() else {
        debug!("No <head>, skipping style registration");
        return;
    };
    match document.create_element("style") {
        Ok(style) => {
            style.set_id(STYLE_ELEMENT_ID);
            style.set_text_content(Some(ENHANCEMENT_CSS));
            if let Err(e) = head.append_child(&style) {
                warn!("Failed to append enhancement styles: {:?}", e);
            }
        }
        Err(e) => warn!("Failed to create style element: {:?}", e),
    }
}
