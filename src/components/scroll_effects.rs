//! Scroll Effects
//!
//! Header "scrolled" state, hero parallax and fade-in on first view.

use dom_hooks::VisibilityOptions;
use web_sys::{Document, Event, Window};

use crate::config::SiteConfig;
use crate::dom;
use crate::error::DomResult;
use crate::motion::{header_is_scrolled, parallax_offset};

pub const SCROLLED_CLASS: &str = "scrolled";
pub const FADE_IN_CLASS: &str = "animate-fadeInUp";

/// Toggle the header's `scrolled` class on every scroll event
fn attach_header(window: &Window, document: &Document, config: &SiteConfig) -> DomResult<()> {
    let Some(header) = dom::query(document, &config.selectors.header)? else {
        return Ok(());
    };
    let threshold = config.scroll.header_threshold;
    let win = window.clone();

    dom_hooks::listen(window, "scroll", move |_: Event| {
        let scroll_y = win.scroll_y().unwrap_or(0.0);
        let _ = header
            .class_list()
            .toggle_with_force(SCROLLED_CLASS, header_is_scrolled(scroll_y, threshold));
    })?;
    Ok(())
}

fn attach_parallax(window: &Window, document: &Document, config: &SiteConfig) -> DomResult<()> {
    let selector = format!("{} {}", config.selectors.hero, config.selectors.hero_image);
    let Some(image) = dom::query_html(document, &selector)? else {
        return Ok(());
    };
    let rate = config.scroll.parallax_rate;
    let win = window.clone();

    dom_hooks::listen(window, "scroll", move |_: Event| {
        let offset = parallax_offset(win.scroll_y().unwrap_or(0.0), rate);
        let _ = image
            .style()
            .set_property("transform", &format!("translateY({}px)", offset));
    })?;
    Ok(())
}

/// Add the fade-in class whenever an element enters the viewport.
/// Elements stay observed; adding the class again is a no-op.
fn attach_fade_in(document: &Document, config: &SiteConfig) -> DomResult<()> {
    let elements = dom::query_all(document, &config.selectors.fade_in)?;
    if elements.is_empty() {
        return Ok(());
    }
    let options = VisibilityOptions {
        threshold: config.scroll.fade_threshold,
        root_margin: Some(config.scroll.fade_root_margin.clone()),
    };
    dom_hooks::observe_visibility(&elements, &options, |el, _| {
        let _ = el.class_list().add_1(FADE_IN_CLASS);
    })?;
    Ok(())
}

pub fn attach(window: &Window, document: &Document, config: &SiteConfig) -> DomResult<()> {
    attach_header(window, document, config)?;
    attach_parallax(window, document, config)?;
    attach_fade_in(document, config)
}
