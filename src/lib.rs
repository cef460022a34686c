#![cfg(target_arch = "wasm32")]
use missed_call_core::{Sequencer, UiState};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod config;
mod constants;
mod dom;
mod events;
mod landing;
mod release;
mod stage;
mod timers;

use events::Wiring;
use stage::Stage;

fn wire_video_logging(stage: &Stage) {
    if let Some(frame) = stage.video() {
        dom::on(frame, "load", |_: web::Event| {
            log::info!("[video] iframe loaded");
        });
        dom::on(frame, "error", |_: web::Event| {
            log::warn!("[video] iframe failed to load");
        });
    }
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(config::log_level()).ok();
    log::info!("missed-call starting");

    let ready = dom::window_document()
        .map(|d| d.ready_state() != "loading")
        .unwrap_or(true);
    if ready {
        run_init();
    } else if let Some(document) = dom::window_document() {
        dom::once(&document, "DOMContentLoaded", |_: web::Event| run_init());
    }
    Ok(())
}

fn run_init() {
    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    let tuning = config::load_tuning();
    let stage = Rc::new(Stage::from_document(document.clone()));
    stage.audio.prepare_ambient();
    wire_video_logging(&stage);

    let w = Wiring {
        state: Rc::new(RefCell::new(UiState::new(tuning))),
        stage,
        sequencer: Rc::new(RefCell::new(Sequencer::default())),
    };

    landing::wire_landing(&w);
    events::buttons::wire_buttons(&w);
    events::pointer::wire_choice_pointer(&w);
    events::scroll::wire_scroll(&w);
    events::keyboard::wire_release_enter(&document);
    release::wire_release(&w);

    w.update(|state, out| state.initial_effects(out));
    log::info!("[init] listeners wired");
    Ok(())
}
