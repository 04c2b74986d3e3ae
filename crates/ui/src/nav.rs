use std::cell::RefCell;

use neo_lux_core::config::NavConfig;
use neo_lux_core::scroll::{NavVisibility, ScrollTracker};
use web_sys::{Document, Window};

use crate::dom::{listen_passive, set_class};
use crate::error::Result;

/// Hide the header while scrolling down, show it on any upward scroll
pub fn init(win: &Window, doc: &Document, config: &NavConfig) -> Result<()> {
    let Some(nav) = doc.query_selector(&config.selector)? else {
        log::debug!("No {} element, nav controller skipped", config.selector);
        return Ok(());
    };

    let tracker = RefCell::new(ScrollTracker::new(
        win.scroll_y().unwrap_or(0.0),
        config.hide_after,
    ));
    let hidden_class = config.hidden_class.clone();
    let scroller = win.clone();

    listen_passive(win, "scroll", move |_| {
        let current = scroller.scroll_y().unwrap_or(0.0);
        let visibility = tracker.borrow_mut().update(current);
        set_class(&nav, &hidden_class, visibility == NavVisibility::Hidden);
    })
}
