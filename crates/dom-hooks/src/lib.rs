//! DOM Hooks
//!
//! Page-lifetime event listeners, viewport visibility triggers and
//! animation-frame loops. Every closure registered here is leaked on
//! purpose: nothing on the page is ever torn down.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::closure::Closure;
use wasm_bindgen::convert::FromWasmAbi;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, EventTarget, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Bind `handler` to `event` on `target` for the rest of the page lifetime
pub fn listen<E, F>(target: &EventTarget, event: &str, handler: F) -> Result<(), JsValue>
where
    E: FromWasmAbi + 'static,
    F: FnMut(E) + 'static,
{
    let callback = Closure::<dyn FnMut(E)>::new(handler);
    target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

/// Intersection options for visibility triggers
#[derive(Clone, Debug, PartialEq)]
pub struct VisibilityOptions {
    /// Fraction of the element that must be visible (0.0 = any pixel)
    pub threshold: f64,
    /// CSS margin applied to the viewport, e.g. `"0px 0px -50px 0px"`
    pub root_margin: Option<String>,
}

impl Default for VisibilityOptions {
    fn default() -> Self {
        Self { threshold: 0.0, root_margin: None }
    }
}

/// Call `on_visible` every time one of `elements` enters the viewport.
///
/// Elements stay observed; the callback gets the observer so it can
/// `unobserve` the element itself.
pub fn observe_visibility<F>(
    elements: &[Element],
    options: &VisibilityOptions,
    mut on_visible: F,
) -> Result<IntersectionObserver, JsValue>
where
    F: FnMut(&Element, &IntersectionObserver) + 'static,
{
    let callback = Closure::<dyn FnMut(js_sys::Array, IntersectionObserver)>::new(
        move |entries: js_sys::Array, observer: IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else { continue };
                if entry.is_intersecting() {
                    on_visible(&entry.target(), &observer);
                }
            }
        },
    );

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    if let Some(margin) = &options.root_margin {
        init.set_root_margin(margin);
    }

    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
    callback.forget();

    for element in elements {
        observer.observe(element);
    }
    Ok(observer)
}

/// Run `frame` once per animation frame until it returns `false`
pub fn animation_loop<F>(mut frame: F) -> Result<(), JsValue>
where
    F: FnMut() -> bool + 'static,
{
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

    let slot: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next = slot.clone();
    let scheduler = window.clone();

    *slot.borrow_mut() = Some(Closure::new(move || {
        if !frame() {
            // Release the closure; it is freed once this call returns.
            let _ = next.borrow_mut().take();
            return;
        }
        if let Some(callback) = next.borrow().as_ref() {
            let _ = scheduler.request_animation_frame(callback.as_ref().unchecked_ref());
        }
    }));

    if let Some(callback) = slot.borrow().as_ref() {
        window.request_animation_frame(callback.as_ref().unchecked_ref())?;
    }
    Ok(())
}
