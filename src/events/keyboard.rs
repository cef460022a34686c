use crate::constants::{LET_GO_BTN_ID, RELEASE_INPUT_ID};
use crate::dom;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn is_submit_key(key: &str) -> bool {
    key == "Enter"
}

// Enter in the release input presses the "let go" button
pub fn wire_release_enter(document: &web::Document) {
    let Some(input) = dom::by_id(document, RELEASE_INPUT_ID) else {
        return;
    };
    let Some(button) = dom::by_id(document, LET_GO_BTN_ID)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
    else {
        return;
    };
    dom::on(&input, "keydown", move |ev: web::KeyboardEvent| {
        if is_submit_key(&ev.key()) {
            button.click();
        }
    });
}
