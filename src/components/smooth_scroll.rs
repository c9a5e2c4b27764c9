//! Smooth Scrolling
//!
//! In-page anchor links scroll smoothly to their target, leaving room for
//! the fixed header.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, MouseEvent, ScrollBehavior, ScrollToOptions, Window};

use crate::config::SiteConfig;
use crate::dom;
use crate::error::DomResult;
use crate::motion::anchor_scroll_top;

fn scroll_to_anchor(window: &Window, document: &Document, header_selector: &str, link: &Element) {
    let Some(href) = link.get_attribute("href") else { return };

    // A bare "#" is not a valid selector; such links just do nothing.
    let target = match document.query_selector(&href) {
        Ok(Some(target)) => target,
        Ok(None) => return,
        Err(_) => {
            log::debug!("ignoring anchor with unusable href {:?}", href);
            return;
        }
    };
    let Ok(target) = target.dyn_into::<HtmlElement>() else { return };

    let header_height = dom::query_html(document, header_selector)
        .ok()
        .flatten()
        .map(|header| header.offset_height() as f64)
        .unwrap_or(0.0);

    let options = ScrollToOptions::new();
    options.set_top(anchor_scroll_top(target.offset_top() as f64, header_height));
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub fn attach(window: &Window, document: &Document, config: &SiteConfig) -> DomResult<()> {
    for link in dom::query_all(document, &config.selectors.anchor_links)? {
        let win = window.clone();
        let doc = document.clone();
        let header = config.selectors.header.clone();
        let clicked = link.clone();
        dom_hooks::listen(&link, "click", move |ev: MouseEvent| {
            ev.prevent_default();
            scroll_to_anchor(&win, &doc, &header, &clicked);
        })?;
    }
    Ok(())
}
