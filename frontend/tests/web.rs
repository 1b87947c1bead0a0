//! Browser tests, run with `wasm-pack test --headless --firefox frontend`.

#![cfg(target_arch = "wasm32")]

use std::time::Duration;

use chrono::NaiveDate;
use frontend::components::{back_to_top, calendar};
use frontend::services::{contact_form, dom, nav, scroll};
use shared::config::{ClassRule, RevealConfig};
use shared::{ClassOccurrence, Difficulty, SiteConfig};
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Event, HtmlElement, HtmlInputElement};

wasm_bindgen_test_configure!(run_in_browser);

fn set_body(markup: &str) {
    let body = dom::document().and_then(|d| d.body()).unwrap();
    body.set_inner_html(markup);
}

async fn settle() {
    yew::platform::time::sleep(Duration::from_millis(20)).await;
}

fn click(selector: &str) {
    dom::query(selector).unwrap().dyn_into::<HtmlElement>().unwrap().click();
}

#[wasm_bindgen_test]
async fn test_calendar_grid_and_selection() {
    set_body(
        r#"<div class="calendar-month-header"></div>
           <div id="calendar-grid"></div>
           <div id="calendar-details"><p>Pick a day</p></div>"#,
    );

    // March 2024: 31 days starting on a Friday
    let today = NaiveDate::from_ymd_opt(2024, 3, 12).unwrap();
    calendar::setup_calendar(&SiteConfig::default(), today);
    settle().await;

    let grid = dom::by_id("calendar-grid").unwrap();
    assert_eq!(grid.child_element_count(), 43);
    assert_eq!(dom::query_all("#calendar-grid .calendar-day.empty").len(), 5);
    assert_eq!(dom::query(".calendar-month-header strong").unwrap().text_content().unwrap(), "March 2024");

    // 2024-03-04 is a Monday
    click(r#"[data-date="2024-03-04"]"#);
    settle().await;
    assert_eq!(dom::query_all(".calendar-day.selected").len(), 1);
    let details = dom::by_id("calendar-details").unwrap().text_content().unwrap();
    assert!(details.contains("March 4, 2024"));
    assert!(details.contains("Beginner Fundamentals"));
    assert!(details.contains("6:00 PM"));
    assert!(!details.contains("Pick a day"));

    // 2024-03-05 is a Tuesday, nothing scheduled
    click(r#"[data-date="2024-03-05"]"#);
    settle().await;
    let selected = dom::query_all(".calendar-day.selected");
    assert_eq!(selected.len(), 1);
    assert_eq!(selected[0].get_attribute("data-date").unwrap(), "2024-03-05");
    let details = dom::by_id("calendar-details").unwrap().text_content().unwrap();
    assert_eq!(details.trim(), "No classes scheduled for this date.");
}

#[wasm_bindgen_test]
fn test_calendar_needs_both_regions() {
    set_body(r#"<div id="calendar-grid"><span>static</span></div>"#);
    calendar::setup_calendar(&SiteConfig::default(), NaiveDate::from_ymd_opt(2024, 3, 12).unwrap());
    assert_eq!(dom::by_id("calendar-grid").unwrap().inner_html(), "<span>static</span>");
}

const FORM: &str = r#"
    <form id="contact-form">
        <input id="name" name="name"><span id="name-error"></span>
        <input id="email" name="email"><span id="email-error"></span>
        <input id="phone" name="phone"><span id="phone-error"></span>
        <input id="subject" name="subject"><span id="subject-error"></span>
        <textarea id="message" name="message"></textarea><span id="message-error"></span>
    </form>
    <div id="form-status" tabindex="-1"></div>
"#;

fn submit() {
    let form = dom::by_id("contact-form").unwrap();
    let event = Event::new("submit").unwrap();
    form.dispatch_event(&event).unwrap();
}

fn set_value(id: &str, value: &str) {
    dom::by_id(id).unwrap().dyn_into::<HtmlInputElement>().unwrap().set_value(value);
}

fn set_message(value: &str) {
    dom::by_id("message")
        .unwrap()
        .dyn_into::<web_sys::HtmlTextAreaElement>()
        .unwrap()
        .set_value(value);
}

fn active_id() -> Option<String> {
    dom::document().and_then(|d| d.active_element()).map(|el| el.id())
}

fn text(id: &str) -> String {
    dom::by_id(id).unwrap().text_content().unwrap_or_default()
}

#[wasm_bindgen_test]
fn test_contact_form_flow() {
    set_body(FORM);
    contact_form::setup_contact_form();

    submit();
    assert_eq!(text("name-error"), "Name is required.");
    assert_eq!(text("email-error"), "Email is required.");
    assert_eq!(text("phone-error"), "");
    assert_eq!(text("subject-error"), "Please select a subject.");
    assert_eq!(text("message-error"), "Message is required.");
    assert_eq!(text("form-status"), "Please correct the errors below.");
    assert_eq!(dom::by_id("form-status").unwrap().class_name(), "form-status error");
    assert_eq!(dom::by_id("name").unwrap().get_attribute("aria-invalid").unwrap(), "true");

    set_value("name", "Sam");
    set_value("email", "a@b.co");
    set_value("phone", "555-123-4567");
    set_value("subject", "classes");
    set_message("Hello!");

    submit();
    assert_eq!(text("name-error"), "");
    assert_eq!(text("form-status"), "Message sent! We will reply during business hours.");
    assert_eq!(dom::by_id("form-status").unwrap().class_name(), "form-status success");
    let name = dom::by_id("name").unwrap().dyn_into::<HtmlInputElement>().unwrap();
    assert_eq!(name.value(), "");
}

#[wasm_bindgen_test]
fn test_mobile_nav_toggle() {
    set_body(r#"<button class="nav__toggle"></button><ul class="nav__links"></ul>"#);
    nav::setup_mobile_nav();

    click(".nav__toggle");
    assert!(dom::query(".nav__links").unwrap().class_list().contains("is-open"));
    assert_eq!(dom::query(".nav__toggle").unwrap().get_attribute("aria-expanded").unwrap(), "true");

    click(".nav__toggle");
    assert!(!dom::query(".nav__links").unwrap().class_list().contains("is-open"));
    assert_eq!(dom::query(".nav__toggle").unwrap().get_attribute("aria-expanded").unwrap(), "false");
}

#[wasm_bindgen_test]
async fn test_calendar_details_list_items() {
    set_body(r#"<div id="calendar-grid"></div><div id="calendar-details"></div>"#);

    let mut config = SiteConfig::default();
    config.classes = vec![
        ClassRule::new("Tuesday", "Lead Climbing", Difficulty::Intermediate, "8:00 AM"),
        ClassRule {
            weekday: "Tuesday".to_string(),
            class: ClassOccurrence::new("Open Session", Difficulty::Advanced, None),
        },
    ];
    calendar::setup_calendar(&config, NaiveDate::from_ymd_opt(2024, 3, 12).unwrap());
    settle().await;

    assert_eq!(dom::query_all("#calendar-grid .has-class").len(), 4);

    click(r#"[data-date="2024-03-05"]"#);
    settle().await;

    let items = dom::query_all("#calendar-details li");
    assert_eq!(items.len(), 2);

    let first_dot = items[0].query_selector(".legend-dot").unwrap().unwrap();
    assert!(first_dot.class_list().contains("legend-dot--intermediate"));
    assert!(items[0].text_content().unwrap().contains("Lead Climbing"));
    assert_eq!(
        items[0].query_selector(".calendar-details-time").unwrap().unwrap().text_content().unwrap(),
        "8:00 AM"
    );

    let second_dot = items[1].query_selector(".legend-dot").unwrap().unwrap();
    assert!(second_dot.class_list().contains("legend-dot--advanced"));
    assert!(items[1].text_content().unwrap().contains("Open Session"));
    assert!(items[1].query_selector(".calendar-details-time").unwrap().is_none());

    let heading = dom::query("#calendar-details .calendar-details-date").unwrap();
    assert_eq!(heading.text_content().unwrap(), "March 5, 2024");
}

#[wasm_bindgen_test]
async fn test_calendar_renders_empty_when_schedule_fails() {
    set_body(r#"<div id="calendar-grid"></div><div id="calendar-details"></div>"#);

    let mut config = SiteConfig::default();
    config.classes[0].weekday = "Fryday".to_string();
    calendar::setup_calendar(&config, NaiveDate::from_ymd_opt(2024, 3, 12).unwrap());
    settle().await;

    assert_eq!(dom::by_id("calendar-grid").unwrap().child_element_count(), 43);
    assert!(dom::query_all("#calendar-grid .has-class").is_empty());

    // 2024-03-04 is a Monday, normally Beginner Fundamentals
    click(r#"[data-date="2024-03-04"]"#);
    settle().await;
    let details = dom::by_id("calendar-details").unwrap().text_content().unwrap();
    assert_eq!(details.trim(), "No classes scheduled for this date.");
}

#[wasm_bindgen_test]
fn test_typing_clears_inline_error() {
    set_body(FORM);
    contact_form::setup_contact_form();

    submit();
    assert_eq!(text("name-error"), "Name is required.");

    let name = dom::by_id("name").unwrap();
    name.dispatch_event(&Event::new("input").unwrap()).unwrap();

    assert_eq!(text("name-error"), "");
    assert_eq!(name.get_attribute("aria-invalid").unwrap(), "false");
    // Other fields keep their messages until edited
    assert_eq!(text("email-error"), "Email is required.");
}

#[wasm_bindgen_test]
fn test_focus_moves_to_first_invalid_field() {
    set_body(FORM);
    contact_form::setup_contact_form();

    set_value("name", "Sam");
    set_value("email", "nope");
    set_value("phone", "abc");
    set_message("hello");

    submit();
    assert_eq!(active_id().as_deref(), Some("email"));
    assert_eq!(text("email-error"), "Please enter a valid email address.");
    assert_eq!(text("phone-error"), "Please enter a valid phone number.");
}

#[wasm_bindgen_test]
fn test_focus_skips_fields_without_error_slot() {
    // No #name-error element, so the name field is never flagged
    set_body(
        r#"<form id="contact-form">
               <input id="name" name="name">
               <input id="email" name="email"><span id="email-error"></span>
               <input id="phone" name="phone"><span id="phone-error"></span>
               <input id="subject" name="subject"><span id="subject-error"></span>
               <textarea id="message" name="message"></textarea><span id="message-error"></span>
           </form>
           <div id="form-status" tabindex="-1"></div>"#,
    );
    contact_form::setup_contact_form();

    submit();
    assert!(dom::by_id("name").unwrap().get_attribute("aria-invalid").is_none());
    assert_eq!(active_id().as_deref(), Some("email"));
}

#[wasm_bindgen_test]
async fn test_back_to_top_visibility() {
    set_body("");
    back_to_top::setup_back_to_top(400.0);
    settle().await;

    let button = dom::query("button.back-to-top").unwrap();
    assert_eq!(button.get_attribute("aria-label").unwrap(), "Back to top");
    assert!(!button.class_list().contains("visible"));

    let body = dom::document().and_then(|d| d.body()).unwrap();
    body.style().set_property("height", "5000px").unwrap();
    let window = dom::window().unwrap();
    window.scroll_to_with_x_and_y(0.0, 1000.0);
    window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
    settle().await;
    assert!(dom::scroll_y() > 400.0);
    assert!(dom::query("button.back-to-top").unwrap().class_list().contains("visible"));

    window.scroll_to_with_x_and_y(0.0, 0.0);
    window.dispatch_event(&Event::new("scroll").unwrap()).unwrap();
    settle().await;
    assert!(!dom::query("button.back-to-top").unwrap().class_list().contains("visible"));

    body.style().remove_property("height").unwrap();
}

#[wasm_bindgen_test]
fn test_reveal_immediately_marks_everything() {
    set_body(
        r#"<section class="animate-on-scroll"><div class="animate-card"></div></section>
           <div class="animate-card"></div>
           <div class="plain"></div>"#,
    );
    scroll::reveal_immediately();

    assert_eq!(dom::query_all(".animated").len(), 3);
    assert!(!dom::query(".plain").unwrap().class_list().contains("animated"));
}

#[wasm_bindgen_test]
fn test_observe_reveals_tags_elements() {
    set_body(
        r#"<div class="cards-grid"><div class="card"></div><div class="card"></div></div>
           <div class="section__header"></div>
           <div class="testimonial-card"></div><div class="testimonial-card"></div>
           <div class="testimonial-stat"></div><div class="testimonial-stat"></div>"#,
    );
    scroll::observe_reveals(&RevealConfig::default());

    assert_eq!(dom::query_all(".cards-grid .card.animate-card").len(), 2);
    assert!(dom::query(".section__header").unwrap().class_list().contains("animate-on-scroll"));

    let delay = |el: &web_sys::Element| {
        el.clone()
            .dyn_into::<HtmlElement>()
            .unwrap()
            .style()
            .get_property_value("animation-delay")
            .unwrap()
    };
    let testimonials = dom::query_all(".testimonial-card");
    assert_eq!(delay(&testimonials[0]), "0ms");
    assert_eq!(delay(&testimonials[1]), "100ms");
    let stats = dom::query_all(".testimonial-stat");
    assert_eq!(delay(&stats[1]), "150ms");
}
