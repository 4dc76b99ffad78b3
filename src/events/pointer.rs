use crate::dom;
use crate::experience::Experience;
use std::rc::Rc;

pub fn wire_open_button(experience: Rc<Experience>) {
    let button = experience.open_button.clone();
    dom::add_click_listener(&button, move |_| {
        experience.activate();
    });
}
