//! Mobile Navigation Menu
//!
//! The toggle button opens and closes the nav. Following a nav link or
//! clicking anywhere outside the menu closes it again.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MouseEvent, Node};

use crate::config::SiteConfig;
use crate::dom;
use crate::error::DomResult;

pub const ACTIVE_CLASS: &str = "active";

/// Toggle button and nav panel, kept in the same open/closed state
#[derive(Clone)]
struct Menu {
    toggle: Element,
    nav: Element,
}

impl Menu {
    fn is_open(&self) -> bool {
        self.nav.class_list().contains(ACTIVE_CLASS)
    }

    fn set_open(&self, open: bool) {
        for el in [&self.toggle, &self.nav] {
            let _ = el.class_list().toggle_with_force(ACTIVE_CLASS, open);
        }
    }

    fn contains(&self, node: Option<&Node>) -> bool {
        self.toggle.contains(node) || self.nav.contains(node)
    }
}

pub fn attach(document: &Document, config: &SiteConfig) -> DomResult<()> {
    let (Some(toggle), Some(nav)) = (
        dom::query(document, &config.selectors.menu_toggle)?,
        dom::query(document, &config.selectors.nav)?,
    ) else {
        log::debug!("no mobile menu on this page");
        return Ok(());
    };
    let menu = Menu { toggle, nav };

    let m = menu.clone();
    dom_hooks::listen(&menu.toggle, "click", move |_: MouseEvent| m.set_open(!m.is_open()))?;

    for link in dom::query_all_in(&menu.nav, "a")? {
        let m = menu.clone();
        dom_hooks::listen(&link, "click", move |_: MouseEvent| m.set_open(false))?;
    }

    let m = menu.clone();
    dom_hooks::listen(document, "click", move |ev: MouseEvent| {
        let target = ev.target().and_then(|t| t.dyn_into::<Node>().ok());
        if !m.contains(target.as_ref()) {
            m.set_open(false);
        }
    })?;
    Ok(())
}
