use crate::render::StarRenderer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

// Keep the star canvas matched to the viewport for the lifetime of the page.
// Runs in every state, including before the reveal while the canvas is hidden.
pub fn wire_window_resize(renderer: Rc<RefCell<StarRenderer>>) {
    let resize_closure = Closure::wrap(Box::new(move || {
        renderer.borrow_mut().resize();
    }) as Box<dyn FnMut()>);
    if let Some(window) = web::window() {
        _ = window
            .add_event_listener_with_callback("resize", resize_closure.as_ref().unchecked_ref());
    }
    resize_closure.forget();
}
