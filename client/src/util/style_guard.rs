//! Scoped document-level visual overrides for resize gestures.

use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

/// Global visual state for an in-progress resize: a `resizing-item` class
/// on `<body>`, text selection suppressed, and the gesture's cursor forced
/// on the document root.
///
/// Dropping the guard restores all three, so a teardown mid-gesture can
/// never leak the overrides into the rest of the page. Exactly one guard
/// exists at a time — it is owned by whichever hotzone started the current
/// gesture.
pub struct ResizeGuard {
    root: Option<HtmlElement>,
    body: Option<HtmlElement>,
}

impl ResizeGuard {
    /// Apply the overrides for a gesture using `cursor`.
    #[must_use]
    pub fn acquire(cursor: &str) -> Self {
        let document = web_sys::window().and_then(|window| window.document());
        let root = document
            .as_ref()
            .and_then(web_sys::Document::document_element)
            .and_then(|element| element.dyn_into::<HtmlElement>().ok());
        let body = document.and_then(|document| document.body());

        if let Some(root) = &root {
            let style = root.style();
            let _ = style.set_property("user-select", "none");
            let _ = style.set_property("cursor", cursor);
        }
        if let Some(body) = &body {
            let _ = body.class_list().add_1("resizing-item");
        }
        Self { root, body }
    }
}

impl Drop for ResizeGuard {
    fn drop(&mut self) {
        if let Some(root) = &self.root {
            let style = root.style();
            let _ = style.remove_property("user-select");
            let _ = style.remove_property("cursor");
        }
        if let Some(body) = &self.body {
            let _ = body.class_list().remove_1("resizing-item");
        }
    }
}
