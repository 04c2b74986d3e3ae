//! Carousel controls; every `[data-slider]` runs on its own state

use std::cell::RefCell;
use std::rc::Rc;

use neo_lux_core::carousel::{Carousel, SlideStep};
use neo_lux_core::config::SliderConfig;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, KeyboardEvent};

use crate::dom::{listen, query_all};
use crate::error::Result;

struct Slider {
    track: HtmlElement,
    carousel: RefCell<Carousel>,
}

impl Slider {
    fn step(&self, step: SlideStep) {
        let transform = {
            let mut carousel = self.carousel.borrow_mut();
            carousel.step(step);
            carousel.transform()
        };
        let _ = self.track.style().set_property("transform", &transform);
    }
}

/// Wire one slider; `Ok(false)` when its markup is incomplete
fn wire(root: &Element, config: &SliderConfig) -> Result<bool> {
    let Some(track) = root
        .query_selector(&config.track_selector)?
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
    else {
        log::warn!("Slider without {} skipped", config.track_selector);
        return Ok(false);
    };
    let Some(carousel) = Carousel::new(track.child_element_count() as usize) else {
        log::warn!("Slider with an empty track skipped");
        return Ok(false);
    };

    let slider = Rc::new(Slider {
        track,
        carousel: RefCell::new(carousel),
    });

    for (selector, step) in [
        (&config.prev_selector, SlideStep::Prev),
        (&config.next_selector, SlideStep::Next),
    ] {
        if let Some(button) = root.query_selector(selector)? {
            let s = slider.clone();
            listen(&button, "click", move |_| s.step(step))?;
        }
    }

    listen(root, "keydown", move |e: Event| {
        if let Some(step) = e
            .dyn_ref::<KeyboardEvent>()
            .and_then(|k| SlideStep::from_key(&k.key()))
        {
            slider.step(step);
        }
    })?;

    Ok(true)
}

pub fn init(doc: &Document, config: &SliderConfig) -> Result<()> {
    let roots = query_all(doc, &config.selector)?;
    let mut wired = 0;
    for root in &roots {
        match wire(root, config) {
            Ok(true) => wired += 1,
            Ok(false) => {}
            Err(e) => log::error!("Slider setup failed: {e}"),
        }
    }
    log::debug!("{wired}/{} slider(s) wired", roots.len());
    Ok(())
}
