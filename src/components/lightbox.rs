//! Gallery Lightbox
//!
//! Full-screen overlay showing one enlarged gallery image. The overlay is
//! mounted once; its open/closed state lives in a signal so the view and
//! the body scroll lock follow it.

use leptos::mount::mount_to;
use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlImageElement, KeyboardEvent, MouseEvent};

use crate::config::SiteConfig;
use crate::dom;
use crate::error::DomResult;
use crate::styles::{LIGHTBOX_CSS, LIGHTBOX_STYLE_ID};

/// Image shown in the lightbox
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LightboxItem {
    pub src: String,
    pub alt: String,
    pub caption: String,
}

impl LightboxItem {
    /// Read image and caption from a gallery item (`img` + optional `h3`)
    pub fn from_element(item: &Element) -> Option<Self> {
        let img = item
            .query_selector("img")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlImageElement>().ok())?;
        let caption = item
            .query_selector("h3")
            .ok()
            .flatten()
            .and_then(|el| el.text_content())
            .unwrap_or_default();
        Some(Self {
            src: img.src(),
            alt: img.alt(),
            caption,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavDirection {
    Prev,
    Next,
}

impl NavDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavDirection::Prev => "prev",
            NavDirection::Next => "next",
        }
    }
}

/// Where a click inside the overlay landed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Backdrop,
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightboxEvent {
    Open(LightboxItem),
    CloseControl,
    Click(ClickTarget),
    Key(String),
    NavControl(NavDirection),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open(LightboxItem),
}

impl LightboxState {
    pub fn is_open(&self) -> bool {
        matches!(self, LightboxState::Open(_))
    }

    pub fn item(&self) -> Option<&LightboxItem> {
        match self {
            LightboxState::Open(item) => Some(item),
            LightboxState::Closed => None,
        }
    }

    /// Apply one event. Returns the navigation the user asked for, if any;
    /// navigation itself never changes the shown item.
    pub fn apply(&mut self, event: LightboxEvent) -> Option<NavDirection> {
        match event {
            LightboxEvent::Open(item) => {
                *self = LightboxState::Open(item);
                None
            }
            LightboxEvent::CloseControl | LightboxEvent::Click(ClickTarget::Backdrop) => {
                *self = LightboxState::Closed;
                None
            }
            LightboxEvent::Click(ClickTarget::Content) => None,
            LightboxEvent::Key(_) if !self.is_open() => None,
            LightboxEvent::Key(key) => match key.as_str() {
                "Escape" => {
                    *self = LightboxState::Closed;
                    None
                }
                "ArrowLeft" => Some(NavDirection::Prev),
                "ArrowRight" => Some(NavDirection::Next),
                _ => None,
            },
            LightboxEvent::NavControl(direction) => self.is_open().then_some(direction),
        }
    }
}

/// Handle to the mounted lightbox
#[derive(Clone, Copy)]
pub struct Lightbox {
    state: RwSignal<LightboxState>,
}

impl Lightbox {
    /// Inject styles and mount the (closed) overlay at the end of the body
    pub fn mount(document: &Document) -> DomResult<Self> {
        dom::inject_style_once(document, LIGHTBOX_STYLE_ID, LIGHTBOX_CSS)?;
        let body = dom::body(document)?;
        let state = RwSignal::new(LightboxState::Closed);
        let lightbox = Self { state };
        mount_to(body, move || view! { <LightboxOverlay lightbox /> }).forget();
        Ok(lightbox)
    }

    pub fn dispatch(&self, event: LightboxEvent) {
        let mut intent = None;
        self.state.update(|state| intent = state.apply(event));
        if let Some(direction) = intent {
            navigate(direction);
        }
    }

    /// Open on a gallery item; items without an image are ignored
    pub fn open(&self, item: &Element) {
        match LightboxItem::from_element(item) {
            Some(item) => self.dispatch(LightboxEvent::Open(item)),
            None => log::warn!("gallery item has no image; lightbox not opened"),
        }
    }

    pub fn close(&self) {
        self.dispatch(LightboxEvent::CloseControl);
    }

    pub fn is_open(&self) -> bool {
        self.state.with_untracked(LightboxState::is_open)
    }

    pub fn on_keydown(&self, ev: &KeyboardEvent) {
        if self.is_open() {
            self.dispatch(LightboxEvent::Key(ev.key()));
        }
    }
}

// Gallery navigation is not implemented: the intent is only recorded.
fn navigate(direction: NavDirection) {
    log::info!("Navigate {} in lightbox", direction.as_str());
}

/// Body `overflow` to write when the open state goes from `prev` to `open`.
/// Nothing is written before the lightbox first opens.
fn scroll_lock_change(prev: Option<bool>, open: bool) -> Option<&'static str> {
    match (prev.unwrap_or(false), open) {
        (false, true) => Some("hidden"),
        (true, false) => Some(""),
        _ => None,
    }
}

#[component]
fn LightboxOverlay(lightbox: Lightbox) -> impl IntoView {
    let state = lightbox.state;

    // Scroll lock follows the open state
    Effect::new(move |prev: Option<bool>| {
        let open = state.with(LightboxState::is_open);
        if let (Some(overflow), Some(body)) = (scroll_lock_change(prev, open), document().body()) {
            if let Err(e) = body.style().set_property("overflow", overflow) {
                log::warn!("failed to set scroll lock: {:?}", e);
            }
        }
        open
    });

    let on_overlay_click = move |ev: MouseEvent| {
        let target = if ev.target() == ev.current_target() {
            ClickTarget::Backdrop
        } else {
            ClickTarget::Content
        };
        lightbox.dispatch(LightboxEvent::Click(target));
    };

    let src = move || state.with(|s| s.item().map(|i| i.src.clone()).unwrap_or_default());
    let alt = move || state.with(|s| s.item().map(|i| i.alt.clone()).unwrap_or_default());
    let caption = move || state.with(|s| s.item().map(|i| i.caption.clone()).unwrap_or_default());

    view! {
        <div
            class=move || if state.with(LightboxState::is_open) { "lightbox active" } else { "lightbox" }
            on:click=on_overlay_click
        >
            <div class="lightbox-content">
                <span class="lightbox-close" on:click=move |_| lightbox.close()>"×"</span>
                <img class="lightbox-image" src=src alt=alt />
                <div class="lightbox-caption">{caption}</div>
                <div class="lightbox-nav">
                    <button
                        class="lightbox-prev"
                        on:click=move |_| lightbox.dispatch(LightboxEvent::NavControl(NavDirection::Prev))
                    >
                        "‹"
                    </button>
                    <button
                        class="lightbox-next"
                        on:click=move |_| lightbox.dispatch(LightboxEvent::NavControl(NavDirection::Next))
                    >
                        "›"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// Open a mounted lightbox from gallery item clicks and route keys to it
pub fn attach(document: &Document, config: &SiteConfig, lightbox: Lightbox) -> DomResult<()> {
    let items = dom::query_all(document, &config.selectors.gallery_item)?;
    for item in &items {
        let clicked = item.clone();
        dom_hooks::listen(item, "click", move |_: MouseEvent| lightbox.open(&clicked))?;
    }

    dom_hooks::listen(document, "keydown", move |ev: KeyboardEvent| lightbox.on_keydown(&ev))?;

    log::debug!("lightbox attached to {} gallery items", items.len());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> LightboxItem {
        LightboxItem {
            src: format!("/img/{}.jpg", name),
            alt: name.to_string(),
            caption: format!("Caption {}", name),
        }
    }

    fn opened(name: &str) -> LightboxState {
        let mut state = LightboxState::default();
        state.apply(LightboxEvent::Open(item(name)));
        state
    }

    #[test]
    fn test_open_shows_item() {
        let state = opened("a");
        assert!(state.is_open());
        assert_eq!(state.item(), Some(&item("a")));
    }

    #[test]
    fn test_escape_closes() {
        let mut state = opened("a");
        state.apply(LightboxEvent::Key("Escape".into()));
        assert_eq!(state, LightboxState::Closed);
    }

    #[test]
    fn test_backdrop_click_closes() {
        let mut state = opened("a");
        state.apply(LightboxEvent::Click(ClickTarget::Backdrop));
        assert!(!state.is_open());
    }

    #[test]
    fn test_content_click_keeps_open() {
        let mut state = opened("a");
        state.apply(LightboxEvent::Click(ClickTarget::Content));
        assert_eq!(state, opened("a"));
    }

    #[test]
    fn test_close_control() {
        let mut state = opened("a");
        state.apply(LightboxEvent::CloseControl);
        assert!(!state.is_open());
    }

    #[test]
    fn test_arrows_record_intent_only() {
        let mut state = opened("a");
        assert_eq!(state.apply(LightboxEvent::Key("ArrowLeft".into())), Some(NavDirection::Prev));
        assert_eq!(state.apply(LightboxEvent::Key("ArrowRight".into())), Some(NavDirection::Next));
        assert_eq!(state, opened("a"));
    }

    #[test]
    fn test_keys_ignored_when_closed() {
        let mut state = LightboxState::Closed;
        assert_eq!(state.apply(LightboxEvent::Key("ArrowRight".into())), None);
        assert_eq!(state.apply(LightboxEvent::NavControl(NavDirection::Next)), None);
        state.apply(LightboxEvent::Key("Escape".into()));
        assert_eq!(state, LightboxState::Closed);
    }

    #[test]
    fn test_reopen_replaces_item() {
        let mut state = opened("a");
        state.apply(LightboxEvent::Open(item("b")));
        assert_eq!(state.item(), Some(&item("b")));
    }

    #[test]
    fn test_scroll_lock_leaves_page_alone_until_opened() {
        // First run with the lightbox closed keeps the page's own overflow
        assert_eq!(scroll_lock_change(None, false), None);
        assert_eq!(scroll_lock_change(Some(false), false), None);
        assert_eq!(scroll_lock_change(Some(false), true), Some("hidden"));
        assert_eq!(scroll_lock_change(Some(true), true), None);
        assert_eq!(scroll_lock_change(Some(true), false), Some(""));
    }
}
