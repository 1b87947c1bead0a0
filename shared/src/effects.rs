//! Arithmetic behind the scroll-driven page effects and nav highlighting.

/// Page name used when the path ends in `/`.
pub const INDEX_PAGE: &str = "index.html";

/// Last path segment of `path`, `index.html` for the site root.
pub fn current_page(path: &str) -> &str {
    match path.rsplit('/').next() {
        Some(page) if !page.is_empty() => page,
        _ => INDEX_PAGE,
    }
}

/// Whether a nav link pointing at `href` refers to the page at `path`.
pub fn is_active_link(path: &str, href: &str) -> bool {
    let link_page = href.rsplit('/').next().unwrap_or(href);
    link_page == current_page(path)
}

/// Selector for an in-page anchor, `None` for bare `#` links.
pub fn anchor_selector(href: &str) -> Option<&str> {
    match href {
        "" | "#" => None,
        _ if href.starts_with('#') => Some(href),
        _ => None,
    }
}

/// Document offset to scroll to so the target clears the sticky header.
pub fn scroll_target(element_top: f64, page_y_offset: f64, header_offset: f64) -> f64 {
    element_top + page_y_offset - header_offset
}

pub fn back_to_top_visible(page_y_offset: f64, threshold: f64) -> bool {
    page_y_offset > threshold
}

/// Vertical hero shift, `None` once the hero has scrolled out of view.
pub fn parallax_offset(scrolled: f64, hero_height: f64, factor: f64) -> Option<f64> {
    (scrolled < hero_height).then(|| scrolled * factor)
}

pub fn parallax_transform(offset: f64) -> String {
    format!("translateX(-6vw) translateY({offset}px)")
}

/// Delay before the `index`-th element of a group is revealed.
pub fn stagger_delay_ms(index: usize, step_ms: u32) -> u32 {
    u32::try_from(index).unwrap_or(u32::MAX).saturating_mul(step_ms)
}
