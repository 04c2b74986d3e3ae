//! Scroll-triggered `in-view` class

use neo_lux_core::config::RevealConfig;
use neo_lux_core::reveal::{visible_enough, RevealState};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::dom::query_all;
use crate::error::Result;

pub fn init(doc: &Document, config: &RevealConfig) -> Result<()> {
    let targets = query_all(doc, &config.selector)?;
    if targets.is_empty() {
        return Ok(());
    }

    let class = config.class.clone();
    let threshold = config.threshold;
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                let target = entry.target();
                let mut state = if target.class_list().contains(&class) {
                    RevealState::Revealed
                } else {
                    RevealState::Hidden
                };
                let hit = visible_enough(
                    entry.is_intersecting(),
                    entry.intersection_ratio(),
                    threshold,
                );
                if state.observe(hit) {
                    let _ = target.class_list().add_1(&class);
                }
                // One-shot: nothing left to watch for
                if state.is_revealed() {
                    observer.unobserve(&target);
                }
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(threshold));

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            for target in &targets {
                observer.observe(target);
            }
            callback.forget();
            log::debug!("Observing {} reveal target(s)", targets.len());
        }
        Err(e) => {
            log::warn!("IntersectionObserver unavailable ({e:?}), revealing everything");
            reveal_all(&targets, &config.class);
        }
    }
    Ok(())
}

fn reveal_all(targets: &[Element], class: &str) {
    for target in targets {
        let _ = target.class_list().add_1(class);
    }
}
