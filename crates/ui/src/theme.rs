//! Theme toggle and system preference wiring

use std::cell::RefCell;
use std::rc::Rc;

use neo_lux_core::config::{ThemeConfig, ThemeTarget};
use neo_lux_core::{KeyValueStore, Theme, ThemeState};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, MediaQueryList, MediaQueryListEvent, Window};

use crate::dom::{listen, query_all};
use crate::error::Result;
use crate::storage::open_store;

struct ThemeController {
    state: RefCell<ThemeState<Box<dyn KeyValueStore>>>,
    target: Option<Element>,
    attribute: String,
    toggles: Vec<Element>,
}

impl ThemeController {
    /// Push the applied theme into the DOM
    fn render(&self) {
        let state = self.state.borrow();
        if let Some(target) = &self.target {
            let _ = match state.current() {
                Theme::Light => target.set_attribute(&self.attribute, Theme::Light.as_str()),
                Theme::Dark => target.remove_attribute(&self.attribute),
            };
        }
        for toggle in &self.toggles {
            let _ = toggle.set_attribute("aria-pressed", state.pressed_value());
        }
    }

    fn toggle(&self) {
        let next = self.state.borrow_mut().toggle();
        log::debug!("Theme toggled to {next}");
        self.render();
    }

    fn system_changed(&self, prefers_light: bool) {
        let applied = self.state.borrow_mut().system_changed(prefers_light);
        if let Some(theme) = applied {
            log::debug!("Following system theme: {theme}");
            self.render();
        }
    }
}

pub fn init(win: &Window, doc: &Document, config: &ThemeConfig) -> Result<()> {
    let query = win.match_media(&config.light_query).ok().flatten();
    let prefers_light = query.as_ref().is_some_and(MediaQueryList::matches);

    let state = ThemeState::init(open_store(win), &config.storage_key, prefers_light);
    let target = match config.target {
        ThemeTarget::Root => doc.document_element(),
        ThemeTarget::Body => doc.body().map(Element::from),
    };

    let controller = Rc::new(ThemeController {
        state: RefCell::new(state),
        target,
        attribute: config.attribute.clone(),
        toggles: query_all(doc, &config.toggle_selector)?,
    });
    controller.render();

    if let Some(query) = query {
        let c = controller.clone();
        listen(&query, "change", move |e: Event| {
            if let Some(change) = e.dyn_ref::<MediaQueryListEvent>() {
                c.system_changed(change.matches());
            }
        })?;
    }

    for toggle in &controller.toggles {
        let c = controller.clone();
        listen(toggle, "click", move |_| c.toggle())?;
    }

    log::debug!(
        "Theme {} applied, {} toggle(s)",
        controller.state.borrow().current(),
        controller.toggles.len()
    );
    Ok(())
}
