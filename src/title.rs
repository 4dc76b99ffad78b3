use crate::constants::TITLE_CHAR_CLASS;
use crate::core::layout_title;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Replace the container's content with one animated span per character.
/// Calling it again rebuilds from scratch.
pub fn build_title_letters(document: &web::Document, container: &web::Element, text: &str) {
    container.set_text_content(None);

    for glyph in layout_title(text) {
        let Ok(el) = document.create_element("span") else {
            continue;
        };
        el.set_text_content(Some(&glyph.ch.to_string()));
        _ = el.class_list().add_1(TITLE_CHAR_CLASS);

        if let Some(span) = el.dyn_ref::<web::HtmlElement>() {
            let style = span.style();
            if let Some(width) = glyph.width_css() {
                _ = style.set_property("width", width);
            }
            _ = style.set_property("animation-delay", &glyph.animation_delay_css());
        }

        _ = container.append_child(&el);
    }
}
