//! Form Validation & Submission
//!
//! Validates fields on blur and on submit, renders inline errors under
//! invalid fields, and simulates sending a valid form.

use std::collections::BTreeMap;

use gloo_timers::future::TimeoutFuture;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlButtonElement, HtmlFormElement, HtmlInputElement, HtmlTextAreaElement, SubmitEvent};

use crate::components::notification::{self, Severity};
use crate::config::SiteConfig;
use crate::dom;
use crate::error::DomResult;
use crate::styles::FIELD_ERROR_STYLE;
use crate::validation::{self, parse_min_length, FieldInput};

pub const ERROR_CLASS: &str = "error";
pub const FIELD_ERROR_CLASS: &str = "field-error";
const LOADING_LABEL: &str = r#"<span class="loading"></span> Sending..."#;
const SUCCESS_MESSAGE: &str = "Message sent successfully!";

/// A validatable form control
#[derive(Clone)]
pub enum FormField {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
}

impl FormField {
    pub fn from_element(el: Element) -> Option<Self> {
        match el.dyn_into::<HtmlInputElement>() {
            Ok(input) => Some(FormField::Input(input)),
            Err(el) => el.dyn_into::<HtmlTextAreaElement>().ok().map(FormField::TextArea),
        }
    }

    fn element(&self) -> &Element {
        match self {
            FormField::Input(input) => input,
            FormField::TextArea(area) => area,
        }
    }

    fn name(&self) -> String {
        match self {
            FormField::Input(input) => input.name(),
            FormField::TextArea(area) => area.name(),
        }
    }

    fn value(&self) -> String {
        match self {
            FormField::Input(input) => input.value(),
            FormField::TextArea(area) => area.value(),
        }
    }

    fn snapshot(&self) -> FieldInput {
        let el = self.element();
        let mut input = FieldInput::new(self.name(), self.value());
        if el.has_attribute("required") {
            input = input.required();
        }
        if let Some(min) = el.get_attribute("minlength").as_deref().and_then(parse_min_length) {
            input = input.min_length(min);
        }
        input
    }

    /// Show `message` under the field, or clear it. The errored class and
    /// the error line always change together.
    fn render(&self, message: Option<&str>) {
        let el = self.element();
        let parent = el.parent_element();
        if let Some(existing) = parent
            .as_ref()
            .and_then(|p| p.query_selector(&format!(".{}", FIELD_ERROR_CLASS)).ok().flatten())
        {
            existing.remove();
        }

        let Some(message) = message else {
            let _ = el.class_list().remove_1(ERROR_CLASS);
            return;
        };
        let _ = el.class_list().add_1(ERROR_CLASS);
        let (Some(document), Some(parent)) = (el.owner_document(), parent) else { return };
        let Ok(line) = document.create_element("div") else { return };
        line.set_class_name(FIELD_ERROR_CLASS);
        line.set_text_content(Some(message));
        let _ = line.set_attribute("style", FIELD_ERROR_STYLE);
        let _ = parent.append_child(&line);
    }

    /// Drop the errored mark and the error line under the field's parent
    pub fn clear_error(&self) {
        self.render(None);
    }

    /// Validate and render the outcome next to the field
    pub fn validate(&self) -> bool {
        let message = validation::feedback(&self.snapshot());
        self.render(message.as_deref());
        message.is_none()
    }
}

fn fields(form: &Element, selector: &str) -> Vec<FormField> {
    dom::query_all_in(form, selector)
        .unwrap_or_default()
        .into_iter()
        .filter_map(FormField::from_element)
        .collect()
}

/// Validate every required field; each one renders its own error
pub fn validate_form(form: &HtmlFormElement) -> bool {
    fields(form, "input[required], textarea[required]")
        .iter()
        .fold(true, |all_valid, field| field.validate() && all_valid)
}

/// Named field values, as a form submission would carry them
pub fn collect_values(form: &HtmlFormElement) -> BTreeMap<String, String> {
    fields(form, "input, textarea")
        .into_iter()
        .filter_map(|field| {
            let name = field.name();
            (!name.is_empty()).then(|| (name, field.value()))
        })
        .collect()
}

/// Disable the submit button, wait, then report success and reset.
/// Nothing is sent anywhere.
fn simulate_submission(form: HtmlFormElement, document: Document, config: &SiteConfig) {
    let button = form
        .query_selector("button[type=\"submit\"]")
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
    let label = button.as_ref().and_then(|b| b.text_content()).unwrap_or_default();
    if let Some(button) = &button {
        button.set_inner_html(LOADING_LABEL);
        button.set_disabled(true);
    }

    let timing = config.timing.clone();
    spawn_local(async move {
        TimeoutFuture::new(timing.submit_delay_ms).await;
        if let Some(button) = &button {
            button.set_text_content(Some(&label));
            button.set_disabled(false);
        }
        if let Err(e) = notification::show(&document, &timing, SUCCESS_MESSAGE, Severity::Success) {
            log::warn!("failed to show notification: {}", e);
        }
        form.reset();
    });
}

fn on_submit(form: &HtmlFormElement, document: &Document, config: &SiteConfig) {
    if !validate_form(form) {
        log::debug!("form {:?} has invalid fields", form.id());
        return;
    }
    if form.id() == config.selectors.contact_form_id {
        match serde_json::to_string(&collect_values(form)) {
            Ok(json) => log::info!("Contact form data: {}", json),
            Err(e) => log::warn!("failed to encode contact form data: {}", e),
        }
    }
    simulate_submission(form.clone(), document.clone(), config);
}

pub fn attach(document: &Document, config: &SiteConfig) -> DomResult<()> {
    let forms: Vec<HtmlFormElement> = dom::query_all(document, "form")?
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlFormElement>().ok())
        .collect();

    for form in &forms {
        let (submitted, doc, cfg) = (form.clone(), document.clone(), config.clone());
        dom_hooks::listen(form, "submit", move |ev: SubmitEvent| {
            ev.prevent_default();
            on_submit(&submitted, &doc, &cfg);
        })?;

        for field in fields(form, "input, textarea") {
            let blurred = field.clone();
            dom_hooks::listen(field.element(), "blur", move |_: Event| {
                blurred.validate();
            })?;
            let edited = field.clone();
            dom_hooks::listen(field.element(), "input", move |_: Event| edited.clear_error())?;
        }
    }

    log::debug!("validation attached to {} forms", forms.len());
    Ok(())
}
