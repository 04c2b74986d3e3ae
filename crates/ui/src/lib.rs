//! Neo Lux site interactions (WASM)
//!
//! Boots seven independent controllers once the DOM is ready: theme, nav,
//! lightbox, sliders, scroll reveal, forms, and focus shimmer. A controller
//! whose markup is missing does nothing; one that fails to wire is logged
//! and the rest still start.

mod controls;
mod dom;
mod error;
mod forms;
mod lightbox;
mod nav;
mod reveal;
mod shimmer;
mod slider;
mod storage;
mod theme;
mod timers;

use std::cell::RefCell;

use neo_lux_core::{ConfigError, SiteConfig};
use wasm_bindgen::prelude::*;

use crate::dom::{get_document, get_window};
use crate::error::Result;

pub use crate::error::UiError;

/// Id of the optional inline JSON config block
pub const CONFIG_ELEMENT_ID: &str = "neo-lux-config";

/// Controllers that own cancellable work
struct Site {
    forms: Vec<forms::FormFlow>,
}

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

/// Parse the text of the config block; no block means defaults
pub fn config_from_source(source: Option<&str>) -> std::result::Result<SiteConfig, ConfigError> {
    source.map_or_else(|| Ok(SiteConfig::default()), SiteConfig::from_json)
}

#[wasm_bindgen(start)]
pub fn main_js() -> std::result::Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let document = get_document()?;
    let source = document
        .get_element_by_id(CONFIG_ELEMENT_ID)
        .and_then(|el| el.text_content());
    let (config, config_error) = match config_from_source(source.as_deref()) {
        Ok(config) => (config, None),
        Err(e) => (SiteConfig::default(), Some(e)),
    };

    let _ = console_log::init_with_level(config.log_level());
    if let Some(e) = config_error {
        log::warn!("Ignoring #{CONFIG_ELEMENT_ID}: {e}");
    }

    dom::on_ready(&document, move || {
        if let Err(e) = boot(&config) {
            log::error!("Site interactions failed to start: {e}");
        }
    })?;
    Ok(())
}

fn report(name: &str, result: Result<()>) {
    if let Err(e) = result {
        log::error!("{name} controller failed: {e}");
    }
}

fn boot(config: &SiteConfig) -> Result<()> {
    let window = get_window()?;
    let document = get_document()?;

    report("theme", theme::init(&window, &document, &config.theme));
    report("nav", nav::init(&window, &document, &config.nav));
    report("lightbox", lightbox::init(&document, &config.lightbox));
    report("slider", slider::init(&document, &config.slider));
    report("reveal", reveal::init(&document, &config.reveal));
    let forms = forms::init(&document, &config.forms).unwrap_or_else(|e| {
        log::error!("forms controller failed: {e}");
        Vec::new()
    });
    report("shimmer", shimmer::init(&document, &config.shimmer));

    SITE.with(|site| *site.borrow_mut() = Some(Site { forms }));
    log::info!("Neo Lux interactions ready");
    Ok(())
}

/// Cancel pending deferred work (simulated submits, success banners)
#[wasm_bindgen]
pub fn teardown() {
    let site = SITE.with(|site| site.borrow_mut().take());
    if let Some(site) = site {
        for flow in &site.forms {
            flow.teardown();
        }
        log::info!("Neo Lux interactions torn down");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_config_block_uses_defaults() {
        let config = config_from_source(None).unwrap();
        assert_eq!(config.forms.busy_ms, 650);
        assert_eq!(config.lightbox.selector, ".lightbox");
    }

    #[test]
    fn test_config_block_overrides() {
        let config =
            config_from_source(Some(r#"{"forms": {"success_ms": 5000}, "log_level": "warn"}"#))
                .unwrap();
        assert_eq!(config.forms.success_ms, 5000);
        assert_eq!(config.forms.busy_ms, 650);
        assert_eq!(config.log_level(), log::Level::Warn);
    }

    #[test]
    fn test_bad_config_block_is_an_error() {
        assert!(config_from_source(Some("not json")).is_err());
    }

    #[test]
    fn test_ui_error_messages() {
        assert_eq!(UiError::NoWindow.to_string(), "no global `window`");
        assert_eq!(UiError::Js("boom".into()).to_string(), "JS exception: boom");
    }
}
