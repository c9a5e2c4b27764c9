//! Counter Animation
//!
//! Counts `.counter[data-target]` elements up from zero the first time
//! they scroll into view.

use dom_hooks::VisibilityOptions;
use web_sys::{Document, Element};

use crate::config::SiteConfig;
use crate::dom;
use crate::error::DomResult;
use crate::motion::{parse_leading_int, CounterAnimation, CounterFrame, CounterTrigger};

pub const TARGET_ATTR: &str = "data-target";

fn run(counter: Element, mut animation: CounterAnimation) -> DomResult<()> {
    dom_hooks::animation_loop(move || {
        let frame = animation.step();
        counter.set_text_content(Some(&frame.value().to_string()));
        matches!(frame, CounterFrame::Running(_))
    })?;
    Ok(())
}

pub fn attach(document: &Document, config: &SiteConfig) -> DomResult<()> {
    let duration_ms = config.timing.counter_duration_ms;

    for counter in dom::query_all(document, &config.selectors.counter)? {
        let Some(target) = counter.get_attribute(TARGET_ATTR).as_deref().and_then(parse_leading_int) else {
            log::warn!("counter without a numeric {} skipped", TARGET_ATTR);
            continue;
        };

        let mut trigger = CounterTrigger::new(target, duration_ms);
        let options = VisibilityOptions::default();
        dom_hooks::observe_visibility(std::slice::from_ref(&counter), &options, move |el, observer| {
            observer.unobserve(el);
            let Some(animation) = trigger.on_visible() else { return };
            if let Err(e) = run(el.clone(), animation) {
                log::warn!("counter animation failed: {}", e);
            }
        })?;
    }
    Ok(())
}
