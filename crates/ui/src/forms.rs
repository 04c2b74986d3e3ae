//! Validated forms with a simulated submit
//!
//! Each `form[data-validate="true"]` re-validates a field on `input` and
//! runs the full check on `submit`. A valid submit goes through
//! [`SubmitFlow`]: no request is sent.

use std::rc::Rc;

use neo_lux_core::config::FormConfig;
use neo_lux_core::submit::{FormSurface, SubmitFlow};
use neo_lux_core::validate::{validate, Rule};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlFormElement};

use crate::controls::Control;
use crate::dom::{closest_any, listen, query_all, query_all_in, set_class};
use crate::error::Result;
use crate::timers::BrowserScheduler;

pub type FormFlow = Rc<SubmitFlow<DomForm, BrowserScheduler>>;

const CONTROLS: &str = "input, textarea, select";

pub struct DomForm {
    form: HtmlFormElement,
    submit: Option<Element>,
    success: Option<Element>,
    config: Rc<FormConfig>,
}

impl DomForm {
    fn controls(&self) -> Vec<Control> {
        query_all_in(&self.form, CONTROLS)
            .unwrap_or_default()
            .into_iter()
            .filter_map(Control::from_element)
            .collect()
    }

    fn password(&self) -> Option<String> {
        self.form
            .query_selector(&FormConfig::password_selector())
            .ok()
            .flatten()
            .and_then(Control::from_element)
            .map(|c| c.value())
    }

    /// Validate one control and update its container. Controls without a
    /// labeled container holding an error slot always pass.
    fn check(&self, control: &Control) -> bool {
        let Some(container) = closest_any(control.element(), &self.config.containers) else {
            return true;
        };
        let Ok(Some(slot)) = container.query_selector(&self.config.error_selector) else {
            return true;
        };

        let field = control.field();
        let password = if Rule::for_field(&field) == Rule::ConfirmPassword {
            self.password()
        } else {
            None
        };

        let result = validate(&field, password.as_deref());
        match &result {
            Ok(()) => slot.set_text_content(Some("")),
            Err(err) => slot.set_text_content(Some(&err.to_string())),
        }
        set_class(&container, &self.config.invalid_class, result.is_err());
        result.is_ok()
    }
}

impl FormSurface for DomForm {
    fn validate_all(&self) -> bool {
        // No short-circuit: every field gets its marker updated
        self.controls()
            .iter()
            .fold(true, |all, control| self.check(control) && all)
    }

    fn focus_first_invalid(&self) {
        let first = self
            .form
            .query_selector(&self.config.first_invalid_selector())
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());
        if let Some(el) = first {
            let _ = el.focus();
        }
    }

    fn set_busy(&self, busy: bool) {
        let Some(button) = &self.submit else {
            return;
        };
        set_class(button, &self.config.busy_class, busy);
        let _ = if busy {
            button.set_attribute("aria-busy", "true")
        } else {
            button.remove_attribute("aria-busy")
        };
    }

    fn set_success_visible(&self, visible: bool) {
        if let Some(success) = &self.success {
            set_class(success, &self.config.success_class, visible);
        }
    }

    fn reset(&self) {
        self.form.reset();
        let leftovers =
            query_all_in(&self.form, &self.config.invalid_container_selector()).unwrap_or_default();
        for container in leftovers {
            set_class(&container, &self.config.invalid_class, false);
        }
    }
}

fn wire(form: HtmlFormElement, config: &Rc<FormConfig>) -> Result<FormFlow> {
    let surface = DomForm {
        submit: form.query_selector(&config.submit_selector)?,
        success: form.query_selector(&config.success_selector)?,
        form,
        config: config.clone(),
    };
    let flow = SubmitFlow::new(surface, BrowserScheduler, config.timing());
    let form: &HtmlFormElement = &flow.surface().form;

    let f = flow.clone();
    listen(form, "input", move |e: Event| {
        let control = e
            .target()
            .and_then(|t| t.dyn_into::<Element>().ok())
            .and_then(Control::from_element);
        if let Some(control) = control {
            f.surface().check(&control);
        }
    })?;

    let f = flow.clone();
    listen(form, "submit", move |e: Event| {
        e.prevent_default();
        let outcome = f.submit();
        log::debug!("Form submit: {outcome:?}");
    })?;

    Ok(flow)
}

/// Wire every validated form; the returned flows own their pending timers
pub fn init(doc: &Document, config: &FormConfig) -> Result<Vec<FormFlow>> {
    let config = Rc::new(config.clone());
    let mut flows = Vec::new();

    for el in query_all(doc, &config.selector)? {
        let Ok(form) = el.dyn_into::<HtmlFormElement>() else {
            continue;
        };
        match wire(form, &config) {
            Ok(flow) => flows.push(flow),
            Err(e) => log::error!("Form setup failed: {e}"),
        }
    }

    log::debug!("{} validated form(s) wired", flows.len());
    Ok(flows)
}
