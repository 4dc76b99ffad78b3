#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::core::{Sequencer, Timings};
use crate::experience::Experience;
use crate::render::StarRenderer;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod core;
mod dom;
mod events;
mod experience;
mod frame;
mod hearts;
mod overlay;
mod render;
mod title;
mod transition;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("starlight-reveal starting");

    // A page without the experience markup is left alone; nothing is thrown.
    if let Err(e) = init() {
        log::warn!("init aborted: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Page transitions run on every page, gated or not
    transition::fade_in(&document);
    transition::wire_links(&document);

    let open_button = dom::required_element(&document, OPEN_BUTTON_ID)?;
    let gate = dom::required_element(&document, GATE_ID)?;
    let container = dom::required_element(&document, EXPERIENCE_ID)?;
    let title = dom::required_element(&document, TITLE_ID)?;
    let canvas: web::HtmlCanvasElement = dom::required_element(&document, STAR_CANVAS_ID)?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let timings = Timings::default();
    let renderer = Rc::new(RefCell::new(StarRenderer::new(canvas, timings.star_fade_ms)?));
    let heart_paths = hearts::collect_heart_paths(&document);
    log::info!("[init] {} heart paths", heart_paths.len());

    let experience = Rc::new(Experience {
        document,
        open_button,
        gate,
        container,
        title,
        sequencer: RefCell::new(Sequencer::new(timings, heart_paths.len())),
        heart_paths,
        renderer: renderer.clone(),
    });

    events::wire_open_button(experience);
    events::wire_window_resize(renderer);
    Ok(())
}
