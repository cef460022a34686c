use crate::constants::*;
use crate::dom;
use crate::events::Wiring;
use crate::timers;
use web_sys as web;

#[inline]
pub fn show_chrome(document: &web::Document) {
    for id in [NAVIGATION_ID, SOUND_CONTROL_ID] {
        if let Some(el) = document.get_element_by_id(id) {
            dom::set_class(&el, CLASS_VISIBLE, true);
        }
    }
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(LANDING_PAGE_ID) {
        dom::set_style(&el, "display", "none");
    }
}

// Clicking the subtitle fades the landing page out and unlocks audio
pub fn wire_landing(w: &Wiring) {
    let document = w.stage.document.clone();
    let Some(subtitle) = dom::query(&document, LANDING_SUBTITLE_SELECTOR) else {
        log::warn!("[landing] no subtitle; showing the story directly");
        show_chrome(&document);
        hide(&document);
        return;
    };
    let w = w.clone();
    dom::on(&subtitle, "click", move |_: web::MouseEvent| {
        if let Some(landing) = document.get_element_by_id(LANDING_PAGE_ID) {
            dom::set_class(&landing, CLASS_FADE_OUT, true);
        }
        let fade_ms = w.state.borrow().tuning.landing_fade_ms;
        let doc = document.clone();
        timers::after(fade_ms, move || {
            show_chrome(&doc);
            hide(&doc);
        });
        w.update(|state, out| state.unlock_audio(out));
    });
}
