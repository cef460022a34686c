use crate::constants::*;
use crate::dom;
use crate::events::Wiring;
use crate::timers;
use missed_call_core::RELEASE_MESSAGE;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_release(w: &Wiring) {
    let document = w.stage.document.clone();
    let Some(input) = dom::by_id(&document, RELEASE_INPUT_ID)
        .and_then(|el| el.dyn_into::<web::HtmlInputElement>().ok())
    else {
        return;
    };
    let doc = document.clone();
    let w = w.clone();
    dom::add_click_listener(&doc, LET_GO_BTN_ID, move || {
        let text = input.value();
        let mut accepted = false;
        w.update(|state, out| accepted = state.let_go(&text, out).is_some());
        if !accepted {
            return;
        }
        log::info!("[release] letting go");
        let container = document.get_element_by_id(RELEASE_CONTAINER_ID);
        if let Some(c) = &container {
            dom::set_class(c, CLASS_FADE_OUT, true);
        }
        let message = document.get_element_by_id(RELEASE_MESSAGE_ID);
        let fade_ms = w.state.borrow().tuning.release_fade_ms;
        timers::after(fade_ms, move || {
            if let Some(c) = &container {
                dom::set_style(c, "display", "none");
            }
            if let Some(m) = &message {
                m.set_text_content(Some(RELEASE_MESSAGE));
                dom::set_class(m, CLASS_SHOW, true);
            }
        });
    });
}
