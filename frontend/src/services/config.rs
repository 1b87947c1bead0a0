use shared::SiteConfig;
use tracing::{debug, warn};

use crate::services::dom;

/// Id of the optional `<script type="application/json">` block holding
/// site overrides.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

pub fn load() -> SiteConfig {
    let Some(json) = dom::by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content()) else {
        debug!("No #{} block, using default site config", CONFIG_ELEMENT_ID);
        return SiteConfig::default();
    };

    SiteConfig::from_json(&json).unwrap_or_else(|err| {
        warn!("{}; falling back to default site config", err);
        SiteConfig::default()
    })
}
