use crate::constants::{HEARTS_ID, HEART_DRAW_CLASS, HEART_PATH_SELECTOR};
use crate::dom;
use web_sys as web;

/// Heart paths in document order; empty when the container is absent.
pub fn collect_heart_paths(document: &web::Document) -> Vec<web::Element> {
    document
        .get_element_by_id(HEARTS_ID)
        .map(|container| dom::query_all(&container, HEART_PATH_SELECTOR))
        .unwrap_or_default()
}

/// Put a single path into its draw-in state.
#[inline]
pub fn draw_path(paths: &[web::Element], index: usize) {
    if let Some(path) = paths.get(index) {
        dom::add_class(path, HEART_DRAW_CLASS);
    }
}
