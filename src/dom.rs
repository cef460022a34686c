use missed_call_core::{Rect, ScrollTarget};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn viewport_height() -> f64 {
    web::window()
        .and_then(|w| w.inner_height().ok())
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0)
}

#[inline]
pub fn by_id(document: &web::Document, id: &str) -> Option<web::Element> {
    let el = document.get_element_by_id(id);
    if el.is_none() {
        log::warn!("[dom] missing #{}", id);
    }
    el
}

#[inline]
pub fn query(document: &web::Document, selector: &str) -> Option<web::Element> {
    document.query_selector(selector).ok().flatten()
}

pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

/// Attach a listener for `event`, kept alive for the lifetime of the page.
pub fn on<E>(target: &web::EventTarget, event: &str, mut handler: impl FnMut(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let closure = Closure::wrap(Box::new(move |ev: E| handler(ev)) as Box<dyn FnMut(E)>);
    if let Err(e) = target.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
    {
        log::warn!("[dom] could not listen for {}: {:?}", event, e);
    }
    closure.forget();
}

/// Like [`on`], but the browser drops the listener after its first call.
pub fn once<E>(target: &web::EventTarget, event: &str, handler: impl FnOnce(E) + 'static)
where
    E: FromWasmAbi + 'static,
{
    let mut handler = Some(handler);
    let closure = Closure::wrap(Box::new(move |ev: E| {
        if let Some(h) = handler.take() {
            h(ev);
        }
    }) as Box<dyn FnMut(E)>);
    let opts = web::AddEventListenerOptions::new();
    opts.set_once(true);
    _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = by_id(document, element_id) {
        on(&el, "click", move |_: web::MouseEvent| handler());
    }
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, present: bool) {
    _ = el.class_list().toggle_with_force(class, present);
}

pub fn set_style(el: &web::Element, property: &str, value: &str) {
    if let Some(html) = el.dyn_ref::<web::HtmlElement>() {
        _ = html.style().set_property(property, value);
    }
}

pub fn scroll_into_view(el: &web::Element) {
    let opts = web::ScrollIntoViewOptions::new();
    opts.set_behavior(web::ScrollBehavior::Smooth);
    el.scroll_into_view_with_scroll_into_view_options(&opts);
}

#[inline]
pub fn rect_of(el: &web::Element) -> Rect {
    let r = el.get_bounding_client_rect();
    Rect::new(r.left(), r.top(), r.width(), r.height())
}

/// Section container as seen by the core layout capture.
#[derive(Clone)]
pub struct Target(pub web::Element);

impl ScrollTarget for Target {
    fn bounding_rect(&self) -> Rect {
        rect_of(&self.0)
    }
}
