use crate::dom;
use crate::render::StarRenderer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type FrameClosure = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn request(tick: &FrameClosure) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Draw the star layer every frame, forever. The loop never stops itself.
pub fn start_render_loop(renderer: Rc<RefCell<StarRenderer>>) {
    let tick: FrameClosure = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move |timestamp: f64| {
        renderer.borrow_mut().draw_frame(timestamp);
        request(&tick_clone);
    }) as Box<dyn FnMut(f64)>));
    request(&tick);
}

/// Reset the fade to zero and ramp it up on animation frames until it
/// reaches 1, then stop rescheduling.
pub fn start_fade_ramp(renderer: Rc<RefCell<StarRenderer>>) {
    renderer.borrow_mut().fade.restart(instant::now());
    fade_tick(renderer);
}

fn fade_tick(renderer: Rc<RefCell<StarRenderer>>) {
    dom::request_frame(move |now| {
        let done = {
            let mut r = renderer.borrow_mut();
            r.fade.update(now);
            r.fade.is_complete()
        };
        if done {
            log::debug!("[stars] fade complete");
        } else {
            fade_tick(renderer);
        }
    });
}
