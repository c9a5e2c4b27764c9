//! Site Bootstrap
//!
//! Attaches every page behavior once and publishes the script API on
//! `window.PortfolioWebsite`.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsValue;
use web_sys::{Document, Element, HtmlFormElement, Window};

use crate::components::lightbox::{self, Lightbox};
use crate::components::notification::{self, Severity};
use crate::components::{counter, form, nav_menu, scroll_effects, smooth_scroll};
use crate::config::SiteConfig;
use crate::error::DomResult;

/// Name of the global object exposed to page scripts
pub const PUBLIC_API: &str = "PortfolioWebsite";

/// An initialized page
pub struct Site {
    document: Document,
    config: SiteConfig,
    lightbox: Lightbox,
}

type AttachStep<'a> = (&'static str, &'a dyn Fn() -> DomResult<()>);

/// Run every step in order. Behaviors are independent: one failing to
/// attach does not stop the rest. Returns the names of those that failed.
fn attach_all(steps: &[AttachStep<'_>]) -> Vec<&'static str> {
    steps
        .iter()
        .filter_map(|(behavior, attach)| match attach() {
            Ok(()) => {
                log::debug!("attached {}", behavior);
                None
            }
            Err(e) => {
                log::error!("failed to attach {}: {}", behavior, e);
                Some(*behavior)
            }
        })
        .collect()
}

impl Site {
    /// Attach all behaviors. Call once per page.
    pub fn init(window: &Window, document: &Document) -> DomResult<Self> {
        let config = SiteConfig::load(document);

        // Mounted first: mounting also starts the task executor used by
        // notifications and form submission. The public API needs it.
        let lightbox = Lightbox::mount(document)?;

        let failed = {
            let steps: [AttachStep<'_>; 6] = [
                ("gallery lightbox", &|| lightbox::attach(document, &config, lightbox)),
                ("navigation", &|| nav_menu::attach(document, &config)),
                ("scroll effects", &|| scroll_effects::attach(window, document, &config)),
                ("smooth scrolling", &|| smooth_scroll::attach(window, document, &config)),
                ("form validation", &|| form::attach(document, &config)),
                ("counters", &|| counter::attach(document, &config)),
            ];
            attach_all(&steps)
        };
        if !failed.is_empty() {
            log::warn!("unavailable behaviors: {}", failed.join(", "));
        }

        Ok(Self {
            document: document.clone(),
            config,
            lightbox,
        })
    }

    /// Publish `showNotification`, `validateForm`, `openLightbox` and
    /// `closeLightbox` on the window
    pub fn expose(&self, window: &Window) -> DomResult<()> {
        let api = js_sys::Object::new();

        let (document, timing) = (self.document.clone(), self.config.timing.clone());
        let show = Closure::<dyn Fn(String, Option<String>)>::new(move |message: String, kind: Option<String>| {
            let severity = kind.as_deref().map(Severity::from_str).unwrap_or_default();
            if let Err(e) = notification::show(&document, &timing, &message, severity) {
                log::warn!("failed to show notification: {}", e);
            }
        });
        let validate = Closure::<dyn Fn(HtmlFormElement) -> bool>::new(|target: HtmlFormElement| form::validate_form(&target));

        let lightbox = self.lightbox;
        let open = Closure::<dyn Fn(Element)>::new(move |item: Element| lightbox.open(&item));
        let close = Closure::<dyn Fn()>::new(move || lightbox.close());

        for (name, function) in [
            ("showNotification", show.into_js_value()),
            ("validateForm", validate.into_js_value()),
            ("openLightbox", open.into_js_value()),
            ("closeLightbox", close.into_js_value()),
        ] {
            js_sys::Reflect::set(&api, &JsValue::from_str(name), &function)?;
        }
        js_sys::Reflect::set(window, &JsValue::from_str(PUBLIC_API), &api)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use super::*;
    use crate::error::DomError;

    #[test]
    fn test_failed_behavior_does_not_stop_the_rest() {
        let ran = Cell::new(0);
        let ok = || -> DomResult<()> {
            ran.set(ran.get() + 1);
            Ok(())
        };
        let missing = || -> DomResult<()> {
            ran.set(ran.get() + 1);
            Err(DomError::Missing(".gallery-item".into()))
        };

        let steps: [AttachStep<'_>; 3] = [("lightbox", &missing), ("navigation", &ok), ("counters", &ok)];
        assert_eq!(attach_all(&steps), vec!["lightbox"]);
        assert_eq!(ran.get(), 3);
    }

    #[test]
    fn test_all_attached() {
        let ok = || -> DomResult<()> { Ok(()) };
        let steps: [AttachStep<'_>; 2] = [("navigation", &ok), ("counters", &ok)];
        assert!(attach_all(&steps).is_empty());
    }
}
