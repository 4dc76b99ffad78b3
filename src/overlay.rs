use crate::constants::{BODY_EXPERIENCE_CLASS, EXPERIENCE_VISIBLE_CLASS, GATE_HIDDEN_CLASS};
use crate::dom;
use web_sys as web;

/// Start the gate's CSS fade-out. The stylesheet owns the fade duration.
#[inline]
pub fn hide_gate(gate: &web::Element) {
    dom::add_class(gate, GATE_HIDDEN_CLASS);
}

/// Show the experience container and flag the body so post-reveal UI appears.
pub fn show_experience(document: &web::Document, experience: &web::Element) {
    dom::add_class(experience, EXPERIENCE_VISIBLE_CLASS);
    _ = experience.set_attribute("aria-hidden", "false");
    if let Some(body) = document.body() {
        dom::add_class(&body, BODY_EXPERIENCE_CLASS);
    }
}
