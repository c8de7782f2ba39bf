use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

fn root_element() -> Option<HtmlElement> {
    web_sys::window()?
        .document()?
        .document_element()?
        .dyn_into::<HtmlElement>()
        .ok()
}

/// Apply a journey's branding to `<html>`: `data-brand` for brand-specific
/// CSS and an `--accent` custom property for buttons and highlights. Other
/// inline styles on the element are left alone.
pub fn apply_brand(slug: &str, accent: &str) {
    if let Some(html) = root_element() {
        let _ = html.set_attribute("data-brand", slug);
        let _ = html.style().set_property("--accent", accent);
    }
}

/// Back to the default Scale Health look.
pub fn clear_brand() {
    if let Some(html) = root_element() {
        let _ = html.remove_attribute("data-brand");
        let _ = html.style().remove_property("--accent");
    }
}
