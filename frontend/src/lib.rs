//! Page behaviors for the gym website, compiled to WebAssembly.
//!
//! Each `setup_*` binding looks for its own page region and does nothing when
//! the region is missing, so the same bundle serves every page.

pub mod components;
pub mod services;

use gloo::events::EventListener;
use tracing::info;

use crate::components::{back_to_top, calendar};
use crate::services::{config, contact_form, dom, nav, scroll};

/// Wire every behavior once the document has been parsed.
pub fn start() {
    let Some(document) = dom::document() else {
        return;
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| init()).forget();
    } else {
        init();
    }
}

fn init() {
    let config = config::load();
    let today = chrono::Local::now().date_naive();

    nav::setup_mobile_nav();
    contact_form::setup_contact_form();
    calendar::setup_calendar(&config, today);
    scroll::setup_scroll_animations(&config.reveal);
    scroll::setup_parallax(config.parallax_factor);
    scroll::setup_smooth_scroll(config.header_offset);
    nav::setup_active_nav_state();
    back_to_top::setup_back_to_top(config.back_to_top_threshold);

    info!("Page behaviors initialized");
}
