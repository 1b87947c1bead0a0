use gloo::events::{EventListener, EventListenerOptions};
use gloo::timers::callback::Timeout;
use shared::contact::{ContactField, ContactSubmission, FormOutcome};
use wasm_bindgen::JsCast;
use web_sys::{Element, FormData, HtmlElement, HtmlFormElement};

use crate::services::dom;

pub const FORM_ID: &str = "contact-form";
pub const STATUS_ID: &str = "form-status";

/// Inline validation for the contact form. Submitting never leaves the page.
pub fn setup_contact_form() {
    let Some(form) = dom::by_id(FORM_ID).and_then(|el| el.dyn_into::<HtmlFormElement>().ok()) else {
        return;
    };
    let Some(status) = dom::html_by_id(STATUS_ID) else {
        return;
    };

    let controls = dom::query_all_within(&form, "input, textarea, select");
    for control in &controls {
        let id = control.id();
        let target = control.clone();
        EventListener::new(control, "input", move |_| clear_field_error(&id, &target)).forget();
    }

    let form_target = form.clone();
    EventListener::new_with_options(
        &form_target,
        "submit",
        EventListenerOptions::enable_prevent_default(),
        move |event| {
            event.prevent_default();
            handle_submit(&form, &status, &controls);
        },
    )
    .forget();
}

fn handle_submit(form: &HtmlFormElement, status: &HtmlElement, controls: &[Element]) {
    status.set_text_content(None);
    for control in controls {
        clear_field_error(&control.id(), control);
    }

    let submission = read_submission(form);
    let outcome = submission.check();

    status.set_text_content(Some(outcome.status_message()));
    status.set_class_name(outcome.status_class());

    match &outcome {
        FormOutcome::Rejected(errors) => {
            for error in errors {
                show_field_error(error.field, &error.message);
            }
            if let Some(field) = first_marked_invalid(form) {
                let _ = field.focus();
            }
        }
        FormOutcome::Accepted => {
            tracing::info!("Contact form passed validation");
            form.reset();
            let _ = status.focus();
            let status = status.clone();
            Timeout::new(1_000, move || {
                let _ = status.blur();
            })
            .forget();
        }
    }
}

/// First control, in document order, that was flagged with `aria-invalid`.
fn first_marked_invalid(form: &HtmlFormElement) -> Option<HtmlElement> {
    form.query_selector(r#"[aria-invalid="true"]"#)
        .ok()
        .flatten()?
        .dyn_into::<HtmlElement>()
        .ok()
}

fn read_submission(form: &HtmlFormElement) -> ContactSubmission {
    let data = FormData::new_with_form(form).ok();
    let value = |field: ContactField| {
        data.as_ref()
            .and_then(|d| d.get(field.id()).as_string())
            .unwrap_or_default()
    };
    ContactSubmission::from_raw(
        &value(ContactField::Name),
        &value(ContactField::Email),
        &value(ContactField::Phone),
        &value(ContactField::Subject),
        &value(ContactField::Message),
    )
}

fn show_field_error(field: ContactField, message: &str) {
    if let Some(error_el) = dom::by_id(&field.error_id()) {
        error_el.set_text_content(Some(message));
        if let Some(control) = dom::by_id(field.id()) {
            let _ = control.set_attribute("aria-invalid", "true");
        }
    }
}

fn clear_field_error(id: &str, control: &Element) {
    if let Some(error_el) = dom::by_id(&format!("{id}-error")) {
        error_el.set_text_content(Some(""));
        let _ = control.set_attribute("aria-invalid", "false");
    }
}
