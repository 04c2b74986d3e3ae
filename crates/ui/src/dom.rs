//! DOM helpers shared by the controllers

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    window, AddEventListenerOptions, Document, Element, Event, EventTarget,
    NodeList, Window,
};

use crate::error::{Result, UiError};

pub fn get_window() -> Result<Window> {
    window().ok_or(UiError::NoWindow)
}

pub fn get_document() -> Result<Document> {
    get_window()?.document().ok_or(UiError::NoDocument)
}

fn elements(list: &NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// All elements in the document matching `selector`
pub fn query_all(doc: &Document, selector: &str) -> Result<Vec<Element>> {
    Ok(elements(&doc.query_selector_all(selector)?))
}

/// All descendants of `root` matching `selector`
pub fn query_all_in(root: &Element, selector: &str) -> Result<Vec<Element>> {
    Ok(elements(&root.query_selector_all(selector)?))
}

pub fn closest(el: &Element, selector: &str) -> Option<Element> {
    el.closest(selector).ok().flatten()
}

/// Nearest ancestor matching the first selector that matches at all
pub fn closest_any(el: &Element, selectors: &[String]) -> Option<Element> {
    selectors.iter().find_map(|selector| closest(el, selector))
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let _ = el.class_list().toggle_with_force(class, on);
}

/// Attach a listener for the lifetime of the page
pub fn listen<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback(event, cb.as_ref().unchecked_ref())?;
    cb.forget();
    Ok(())
}

/// Same as [`listen`], registered with `passive: true`
pub fn listen_passive<F>(target: &EventTarget, event: &str, handler: F) -> Result<()>
where
    F: FnMut(Event) + 'static,
{
    let opts = AddEventListenerOptions::new();
    opts.set_passive(true);
    let cb = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
    target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        cb.as_ref().unchecked_ref(),
        &opts,
    )?;
    cb.forget();
    Ok(())
}

/// Run `f` once the DOM is parsed (immediately if it already is)
pub fn on_ready<F>(doc: &Document, f: F) -> Result<()>
where
    F: FnOnce() + 'static,
{
    if doc.ready_state() != "loading" {
        f();
        return Ok(());
    }

    let callback = Closure::once(Box::new(f) as Box<dyn FnOnce()>);
    doc.add_event_listener_with_callback("DOMContentLoaded", callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}
