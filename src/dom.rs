use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up an element that must exist for the experience to run.
pub fn required_element(document: &web::Document, element_id: &str) -> anyhow::Result<web::Element> {
    document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{element_id}"))
}

/// All elements under `root` matching `selector`, in document order.
pub fn query_all(root: &web::Element, selector: &str) -> Vec<web::Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::Element>().ok())
        .collect()
}

#[inline]
pub fn add_click_listener(el: &web::Element, mut handler: impl FnMut(web::MouseEvent) + 'static) {
    let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| handler(ev)) as Box<dyn FnMut(_)>);
    _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Fire `f` once after `delay_ms`. There is no cancellation handle.
pub fn set_timeout(delay_ms: i32, f: impl FnOnce() + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(cb.unchecked_ref(), delay_ms);
    }
}

/// Fire `f` once on the next animation frame with the frame timestamp.
pub fn request_frame(f: impl FnOnce(f64) + 'static) {
    if let Some(w) = web::window() {
        let cb = Closure::once_into_js(f);
        _ = w.request_animation_frame(cb.unchecked_ref());
    }
}

#[inline]
pub fn add_class(el: &web::Element, class: &str) {
    _ = el.class_list().add_1(class);
}

#[inline]
pub fn remove_class(el: &web::Element, class: &str) {
    _ = el.class_list().remove_1(class);
}

/// CSS viewport size plus device pixel ratio (1 when unreported).
pub fn viewport(window: &web::Window) -> (f64, f64, f64) {
    let width = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let height = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let dpr = match window.device_pixel_ratio() {
        r if r > 0.0 => r,
        _ => 1.0,
    };
    (width, height, dpr)
}
