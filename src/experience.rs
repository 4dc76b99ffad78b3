//! Browser driver for the reveal sequence.
//!
//! [`Sequencer`] decides what happens and when; this module performs each
//! cue against the DOM and turns the returned steps into `setTimeout` calls.

use crate::core::{Cue, ExperienceState, Sequencer, Step};
use crate::render::StarRenderer;
use crate::{dom, frame, hearts, overlay, title};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

pub struct Experience {
    pub document: web::Document,
    pub open_button: web::Element,
    pub gate: web::Element,
    pub container: web::Element,
    pub title: web::Element,
    pub heart_paths: Vec<web::Element>,
    pub renderer: Rc<RefCell<StarRenderer>>,
    pub sequencer: RefCell<Sequencer>,
}

impl Experience {
    /// Open-control handler. Repeated activations are ignored.
    pub fn activate(self: &Rc<Self>) {
        let Some(steps) = self.sequencer.borrow_mut().activate() else {
            log::warn!("[experience] already started; ignoring activation");
            return;
        };
        _ = self.open_button.set_attribute("disabled", "");
        log::info!("[experience] opening");
        self.schedule(steps);
    }

    fn schedule(self: &Rc<Self>, steps: Vec<Step>) {
        for step in steps {
            if step.delay_ms == 0 {
                self.fire(step.cue);
                continue;
            }
            let this = self.clone();
            dom::set_timeout(step.delay_ms as i32, move || this.fire(step.cue));
        }
    }

    fn fire(self: &Rc<Self>, cue: Cue) {
        match cue {
            Cue::HideGate => overlay::hide_gate(&self.gate),
            Cue::RevealExperience => self.reveal(),
            Cue::BuildTitle => {
                let text = self.sequencer.borrow().timings.title_text;
                log::info!("[experience] title");
                title::build_title_letters(&self.document, &self.title, text);
            }
            Cue::DrawHearts => {
                log::info!("[experience] drawing {} hearts", self.heart_paths.len());
            }
            Cue::HeartDrawn(index) => hearts::draw_path(&self.heart_paths, index),
        }

        let next = {
            let mut seq = self.sequencer.borrow_mut();
            let before = seq.state();
            let next = seq.on_cue(cue);
            if before != ExperienceState::Settled && seq.state() == ExperienceState::Settled {
                log::info!("[experience] settled");
            }
            next
        };
        self.schedule(next);
    }

    fn reveal(&self) {
        log::info!("[experience] reveal");
        overlay::show_experience(&self.document, &self.container);
        self.renderer.borrow_mut().resize();
        frame::start_fade_ramp(self.renderer.clone());
        frame::start_render_loop(self.renderer.clone());
    }
}
