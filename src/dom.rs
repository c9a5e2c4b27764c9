//! DOM Helpers
//!
//! Thin wrappers over web-sys queries that return owned `Element` lists.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, NodeList};

use crate::error::{DomError, DomResult};

fn collect_elements(list: NodeList) -> Vec<Element> {
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// All elements in the document matching `selector`
pub fn query_all(document: &Document, selector: &str) -> DomResult<Vec<Element>> {
    Ok(collect_elements(document.query_selector_all(selector)?))
}

/// All descendants of `parent` matching `selector`
pub fn query_all_in(parent: &Element, selector: &str) -> DomResult<Vec<Element>> {
    Ok(collect_elements(parent.query_selector_all(selector)?))
}

/// First element matching `selector`, if any
pub fn query(document: &Document, selector: &str) -> DomResult<Option<Element>> {
    Ok(document.query_selector(selector)?)
}

pub fn query_html(document: &Document, selector: &str) -> DomResult<Option<HtmlElement>> {
    Ok(query(document, selector)?.and_then(|el| el.dyn_into::<HtmlElement>().ok()))
}

pub fn body(document: &Document) -> DomResult<HtmlElement> {
    document.body().ok_or_else(|| DomError::Missing("body".into()))
}

/// Inject a `<style>` block into `<head>` unless one with `id` exists
pub fn inject_style_once(document: &Document, id: &str, css: &str) -> DomResult<()> {
    if document.get_element_by_id(id).is_some() {
        return Ok(());
    }
    let style = document.create_element("style")?;
    style.set_id(id);
    style.set_text_content(Some(css));
    let head = document.head().ok_or_else(|| DomError::Missing("head".into()))?;
    head.append_child(&style)?;
    Ok(())
}
