//! Portfolio Site Frontend Entry Point
//!
//! Progressive enhancement for the static portfolio pages: navigation,
//! scroll effects, form validation, gallery lightbox, counters and toasts.

mod components;
mod config;
mod dom;
mod error;
mod motion;
mod site;
mod styles;
mod validation;

use log::LevelFilter;
use web_sys::{Document, Event, Window};

use error::{DomError, DomResult};
use site::Site;

fn start(window: &Window, document: &Document) {
    match Site::init(window, document).and_then(|site| site.expose(window)) {
        Ok(()) => log::info!("site ready"),
        Err(e) => log::error!("site init failed: {}", e),
    }
}

/// `document.readyState` before DOMContentLoaded has fired
fn still_loading(ready_state: &str) -> bool {
    ready_state == "loading"
}

fn boot() -> DomResult<()> {
    let window = web_sys::window().ok_or(DomError::NoWindow)?;
    let document = window.document().ok_or(DomError::NoDocument)?;

    if still_loading(&document.ready_state()) {
        let (win, doc) = (window.clone(), document.clone());
        dom_hooks::listen(&document, "DOMContentLoaded", move |_: Event| start(&win, &doc))?;
    } else {
        start(&window, &document);
    }
    Ok(())
}

fn main() {
    console_error_panic_hook::set_once();

    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    if console_logger::init(level).is_err() {
        web_sys::console::warn_1(&"logger already installed".into());
    }

    if let Err(e) = boot() {
        log::error!("{}", e);
    }
}
