use crate::constants::{
    PAGE_TRANSITION_CLASS, PAGE_TRANSITION_IN_CLASS, PAGE_TRANSITION_OUT_CLASS,
    TRANSITION_LINK_SELECTOR, TRANSITION_NAVIGATE_DELAY_MS,
};
use crate::core::transition_target;
use crate::dom;
use web_sys as web;

/// Mark the body ready, then fade it in on the next frame so the initial
/// state is committed before the transition is requested.
pub fn fade_in(document: &web::Document) {
    let Some(body) = document.body() else {
        return;
    };
    dom::add_class(&body, PAGE_TRANSITION_CLASS);
    dom::request_frame(move |_| {
        dom::add_class(&body, PAGE_TRANSITION_IN_CLASS);
    });
}

/// Intercept clicks on transition links: fade the page out, then navigate.
/// Links without an `href` keep their default behavior.
pub fn wire_links(document: &web::Document) {
    let Some(root) = document.document_element() else {
        return;
    };
    let links = dom::query_all(&root, TRANSITION_LINK_SELECTOR);
    log::debug!("[transition] wiring {} links", links.len());

    for link in links {
        let link_for_click = link.clone();
        let doc = document.clone();
        dom::add_click_listener(&link, move |ev| {
            let Some(href) = transition_target(link_for_click.get_attribute("href")) else {
                return;
            };
            ev.prevent_default();
            if let Some(body) = doc.body() {
                dom::remove_class(&body, PAGE_TRANSITION_IN_CLASS);
                dom::add_class(&body, PAGE_TRANSITION_OUT_CLASS);
            }
            dom::set_timeout(TRANSITION_NAVIGATE_DELAY_MS, move || {
                if let Some(w) = web::window() {
                    _ = w.location().set_href(&href);
                }
            });
        });
    }
}
