//! Full-screen image overlay
//!
//! Opened by any `[data-lightbox-target]` element; closed by the close
//! control, a click on the backdrop, or Escape.

use std::cell::RefCell;
use std::rc::Rc;

use neo_lux_core::config::LightboxConfig;
use neo_lux_core::lightbox::LightboxState;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlImageElement, KeyboardEvent};

use crate::dom::{listen, query_all, set_class};
use crate::error::Result;

struct Lightbox {
    root: Element,
    image: HtmlImageElement,
    body: Option<HtmlElement>,
    active_class: String,
    state: RefCell<LightboxState>,
}

impl Lightbox {
    fn open(&self, src: &str, alt: &str) {
        let mut state = self.state.borrow_mut();
        state.open(src, alt);
        self.image.set_src(state.src());
        self.image.set_alt(state.alt());
        drop(state);
        set_class(&self.root, &self.active_class, true);
        if let Some(body) = &self.body {
            let _ = body.style().set_property("overflow", "hidden");
        }
    }

    fn close(&self) {
        let mut state = self.state.borrow_mut();
        state.close();
        set_class(&self.root, &self.active_class, false);
        self.image.set_src(state.src());
        drop(state);
        if let Some(body) = &self.body {
            let _ = body.style().remove_property("overflow");
        }
    }
}

pub fn init(doc: &Document, config: &LightboxConfig) -> Result<()> {
    let Some(root) = doc.query_selector(&config.selector)? else {
        log::debug!("No {} on page, lightbox disabled", config.selector);
        return Ok(());
    };
    let Some(image) = root
        .query_selector("img")?
        .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())
    else {
        log::warn!("{} has no <img>, lightbox disabled", config.selector);
        return Ok(());
    };

    let lightbox = Rc::new(Lightbox {
        root,
        image,
        body: doc.body(),
        active_class: config.active_class.clone(),
        state: RefCell::new(LightboxState::new()),
    });

    let triggers = query_all(doc, &config.trigger_selector())?;
    for trigger in &triggers {
        let lb = lightbox.clone();
        let item = trigger.clone();
        let (src_attr, alt_attr) = (config.trigger_attribute.clone(), config.alt_attribute.clone());
        listen(trigger, "click", move |e: Event| {
            e.prevent_default();
            let src = item.get_attribute(&src_attr).unwrap_or_default();
            let alt = item.get_attribute(&alt_attr).unwrap_or_default();
            lb.open(&src, &alt);
        })?;
    }

    if let Some(close) = lightbox.root.query_selector(&config.close_selector)? {
        let lb = lightbox.clone();
        listen(&close, "click", move |_| lb.close())?;
    }

    // Backdrop: only clicks on the overlay itself, not its children
    let lb = lightbox.clone();
    listen(&lightbox.root, "click", move |e: Event| {
        if e.target().is_some_and(|t| js_sys::Object::is(&t, &lb.root)) {
            lb.close();
        }
    })?;

    let lb = lightbox;
    listen(doc, "keydown", move |e: Event| {
        let Some(key) = e.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        let closes = lb.state.borrow().closes_on_key(&key);
        if closes {
            lb.close();
        }
    })?;

    log::debug!("Lightbox wired to {} trigger(s)", triggers.len());
    Ok(())
}
