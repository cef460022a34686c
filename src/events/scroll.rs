use super::Wiring;
use crate::dom;
use web_sys as web;

pub fn wire_scroll(w: &Wiring) {
    let Some(window) = web::window() else {
        return;
    };
    let w = w.clone();
    dom::on(&window, "scroll", move |_: web::Event| {
        let layout = w.stage.layout();
        w.update(|state, out| state.on_scroll(&layout, out));
    });
}
