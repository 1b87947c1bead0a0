//! Scroll-driven effects: reveal on intersection, hero parallax and smooth
//! in-page anchor scrolling.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use gloo::events::{EventListener, EventListenerOptions};
use gloo::render::{request_animation_frame, AnimationFrame};
use gloo::timers::callback::Timeout;
use js_sys::Array;
use shared::config::RevealConfig;
use shared::effects;
use tracing::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::services::dom;

const ANIMATED: &str = "animated";
const SECTION: &str = "animate-on-scroll";
const CARD: &str = "animate-card";

pub fn setup_scroll_animations(config: &RevealConfig) {
    if dom::prefers_reduced_motion() {
        reveal_immediately();
        return;
    }
    observe_reveals(config);
}

/// Show every animatable element at once, used when motion is unwanted.
pub fn reveal_immediately() {
    for element in dom::query_all(".animate-on-scroll, .animate-card") {
        dom::set_class(&element, ANIMATED, true);
    }
}

/// Tag cards, headers and testimonials and reveal them as they scroll in.
pub fn observe_reveals(config: &RevealConfig) {
    let Some(observer) = reveal_observer(config) else {
        return;
    };

    for element in dom::query_all(".animate-on-scroll, .animate-card") {
        observer.observe(&element);
    }

    tag_and_observe(&observer, ".cards-grid .card", CARD, None);
    tag_and_observe(&observer, ".section__header", SECTION, None);
    tag_and_observe(&observer, ".testimonial-card", CARD, Some(config.testimonial_delay_ms));
    tag_and_observe(&observer, ".testimonial-stat", CARD, Some(config.stat_delay_ms));
}

/// Add `class` to every match of `selector`, optionally staggering the CSS
/// animation, and start watching it.
fn tag_and_observe(observer: &IntersectionObserver, selector: &str, class: &str, delay_step: Option<u32>) {
    for (index, element) in dom::query_all(selector).iter().enumerate() {
        dom::set_class(element, class, true);
        if let Some(step) = delay_step {
            let delay = effects::stagger_delay_ms(index, step);
            dom::set_style(element, "animation-delay", &format!("{delay}ms"));
        }
        observer.observe(element);
    }
}

fn reveal_observer(config: &RevealConfig) -> Option<IntersectionObserver> {
    let stagger = config.card_stagger_ms;
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                reveal(&target, stagger);
                observer.unobserve(&target);
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(config.threshold));
    options.set_root_margin(&config.root_margin);

    match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
        Ok(observer) => {
            // Lives as long as the page.
            callback.forget();
            Some(observer)
        }
        Err(err) => {
            warn!("IntersectionObserver unavailable: {:?}", err);
            None
        }
    }
}

fn reveal(target: &Element, stagger_ms: u32) {
    dom::set_class(target, ANIMATED, true);
    if !target.class_list().contains(SECTION) {
        return;
    }
    for (index, card) in dom::query_all_within(target, ".animate-card").into_iter().enumerate() {
        Timeout::new(effects::stagger_delay_ms(index, stagger_ms), move || {
            dom::set_class(&card, ANIMATED, true);
        })
        .forget();
    }
}

/// Slow drift of the hero image while the hero is on screen. Layout is read
/// at most once per animation frame.
pub fn setup_parallax(factor: f64) {
    let Some(visual) = dom::query(".hero__visual") else {
        return;
    };
    if dom::prefers_reduced_motion() {
        return;
    }
    let Some(window) = dom::window() else {
        return;
    };

    let ticking = Rc::new(Cell::new(false));
    let frame: Rc<RefCell<Option<AnimationFrame>>> = Rc::new(RefCell::new(None));

    EventListener::new(&window, "scroll", move |_| {
        if ticking.get() {
            return;
        }
        ticking.set(true);

        let ticking = ticking.clone();
        let visual = visual.clone();
        let next = request_animation_frame(move |_| {
            let hero_height = dom::query(".hero")
                .and_then(|hero| hero.dyn_into::<web_sys::HtmlElement>().ok())
                .map(|hero| f64::from(hero.offset_height()));
            if let Some(offset) =
                hero_height.and_then(|height| effects::parallax_offset(dom::scroll_y(), height, factor))
            {
                dom::set_style(&visual, "transform", &effects::parallax_transform(offset));
            }
            ticking.set(false);
        });
        *frame.borrow_mut() = Some(next);
    })
    .forget();
}

pub fn setup_smooth_scroll(header_offset: f64) {
    let anchors = dom::query_all(r##"a[href^="#"]"##);
    debug!("Smooth scrolling {} anchors", anchors.len());

    for anchor in anchors {
        let link = anchor.clone();
        EventListener::new_with_options(
            &anchor,
            "click",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                let href = link.get_attribute("href").unwrap_or_default();
                let Some(target) = effects::anchor_selector(&href).and_then(dom::query) else {
                    return;
                };
                event.prevent_default();
                let top = target.get_bounding_client_rect().top();
                dom::smooth_scroll_to(effects::scroll_target(top, dom::scroll_y(), header_offset));
            },
        )
        .forget();
    }
}
