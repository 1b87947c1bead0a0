use gloo::events::EventListener;
use shared::effects;
use tracing::debug;

use crate::services::dom;

/// Hamburger button opens and closes the nav links on small screens.
pub fn setup_mobile_nav() {
    let (Some(toggle), Some(links)) = (dom::query(".nav__toggle"), dom::query(".nav__links")) else {
        return;
    };

    let button = toggle.clone();
    EventListener::new(&toggle, "click", move |_| {
        let open = links.class_list().toggle("is-open").unwrap_or(false);
        let _ = button.set_attribute("aria-expanded", if open { "true" } else { "false" });
    })
    .forget();
}

/// Mark the nav link for the page being viewed.
pub fn setup_active_nav_state() {
    let links = dom::query_all(".nav__links a");
    if links.is_empty() {
        return;
    }
    let Some(path) = dom::window().and_then(|w| w.location().pathname().ok()) else {
        return;
    };

    for link in &links {
        let href = link.get_attribute("href").unwrap_or_default();
        dom::set_class(link, "is-active", effects::is_active_link(&path, &href));
    }
    debug!("Active nav state set for {}", effects::current_page(&path));
}
