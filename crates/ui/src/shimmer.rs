use neo_lux_core::config::ShimmerConfig;
use neo_lux_core::validate::shimmer_eligible;
use web_sys::Document;

use crate::controls::Control;
use crate::dom::{closest, listen, query_all, set_class};
use crate::error::Result;

/// Cosmetic `shimmer` class on the input container while a control has focus
pub fn init(doc: &Document, config: &ShimmerConfig) -> Result<()> {
    let mut wired = 0;
    for el in query_all(doc, &config.control_selector())? {
        let Some(control) = Control::from_element(el) else {
            continue;
        };
        if !shimmer_eligible(control.kind()) {
            continue;
        }

        for (event, on) in [("focus", true), ("blur", false)] {
            let target = control.element().clone();
            let (container, class) = (config.container.clone(), config.class.clone());
            listen(control.element(), event, move |_| {
                if let Some(parent) = closest(&target, &container) {
                    set_class(&parent, &class, on);
                }
            })?;
        }
        wired += 1;
    }
    log::debug!("Focus shimmer on {wired} control(s)");
    Ok(())
}
