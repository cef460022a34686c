use super::Wiring;
use crate::constants::{ACCEPT_SIDE_ID, DECLINE_SIDE_ID};
use crate::dom;
use missed_call_core::{ChoiceOutcome, Section};
use web_sys as web;

pub fn wire_choice_pointer(w: &Wiring) {
    wire_mousemove(w);
    wire_hover_zone(w, DECLINE_SIDE_ID, ChoiceOutcome::Decline);
    wire_hover_zone(w, ACCEPT_SIDE_ID, ChoiceOutcome::Accept);
}

fn wire_mousemove(w: &Wiring) {
    let Some(section) = w.stage.section(Section::Choice).cloned() else {
        return;
    };
    let w = w.clone();
    dom::on(&section, "mousemove", move |ev: web::MouseEvent| {
        // Listener stays attached; the state ignores moves outside the choice.
        if !w.state.borrow().in_choice {
            return;
        }
        let Some(rect) = w.stage.choice_rect() else {
            return;
        };
        let x = ev.client_x() as f64;
        w.update(|state, out| state.on_pointer(x, &rect, out));
    });
}

fn wire_hover_zone(w: &Wiring, id: &str, side: ChoiceOutcome) {
    let Some(zone) = dom::by_id(&w.stage.document, id) else {
        return;
    };
    let w = w.clone();
    dom::on(&zone, "mouseenter", move |_: web::MouseEvent| {
        let Some(rect) = w.stage.choice_rect() else {
            return;
        };
        w.update(|state, out| state.on_hover(side, &rect, out));
    });
}
