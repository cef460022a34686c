use super::Wiring;
use crate::constants::*;
use crate::dom;
use crate::timers;
use missed_call_core::{ChoiceOutcome, Section, Track};
use web_sys as web;

pub fn wire_buttons(w: &Wiring) {
    wire_sound_toggle(w);
    wire_navigation(w);
    wire_scroll_arrows(&w.stage.document);
    wire_choice_button(w, DECLINE_BTN_ID, ChoiceOutcome::Decline);
    wire_choice_button(w, ACCEPT_BTN_ID, ChoiceOutcome::Accept);
    wire_audio_priming(w);
}

fn wire_sound_toggle(w: &Wiring) {
    let document = w.stage.document.clone();
    let w = w.clone();
    dom::add_click_listener(&document, SOUND_TOGGLE_ID, move || {
        w.update(|state, out| state.toggle_sound(out));
        log::info!("[audio] sound_on={}", w.state.borrow().playback.sound_on);
    });
}

fn wire_navigation(w: &Wiring) {
    for (i, nav) in w.stage.nav_numbers().iter().enumerate() {
        let Some(section) = Section::from_index(i) else {
            log::warn!("[nav] extra marker {} has no section", i + 1);
            continue;
        };
        let w = w.clone();
        dom::on(nav, "click", move |_: web::MouseEvent| {
            w.stage.scroll_to(section);
        });
    }
}

fn wire_scroll_arrows(document: &web::Document) {
    for arrow in dom::query_all(document, SCROLL_DOWN_SELECTOR) {
        let target = arrow.clone();
        dom::on(&arrow, "click", move |_: web::MouseEvent| {
            let next = target
                .closest("section")
                .ok()
                .flatten()
                .and_then(|s| s.next_element_sibling());
            if let Some(next) = next {
                dom::scroll_into_view(&next);
            }
        });
    }
}

// Snap to the chosen side, scroll away, then let the side's ambient track die down.
// Pressing either button again restarts the sequence and drops the pending steps.
fn wire_choice_button(w: &Wiring, id: &str, outcome: ChoiceOutcome) {
    let document = w.stage.document.clone();
    let w = w.clone();
    dom::add_click_listener(&document, id, move || {
        w.update(|state, out| state.choose(outcome, out));
        let ticket = w.sequencer.borrow_mut().begin();
        let (scroll_delay, settle_delay) = {
            let t = &w.state.borrow().tuning;
            (t.choice_scroll_delay_ms, t.choice_settle_delay_ms)
        };

        let w = w.clone();
        timers::after(scroll_delay, move || {
            if !w.sequencer.borrow().is_current(ticket) {
                log::debug!("[choice] superseded before scrolling");
                return;
            }
            w.stage.scroll_to(outcome.destination());

            timers::after(settle_delay, move || {
                if !w.sequencer.borrow().is_current(ticket) {
                    log::debug!("[choice] superseded before settling");
                    return;
                }
                w.update(|state, out| state.silence(outcome.lingering_track(), out));
                if outcome.restarts_video() {
                    w.stage.restart_video();
                }
            });
        });
    });
}

// The first click anywhere primes the thunder track for later scripted playback.
fn wire_audio_priming(w: &Wiring) {
    let document = w.stage.document.clone();
    let w = w.clone();
    dom::once(&document, "click", move |_: web::MouseEvent| {
        if w.state.borrow().playback.sound_on {
            w.stage.audio.prime(Track::Thunder);
        }
    });
}
