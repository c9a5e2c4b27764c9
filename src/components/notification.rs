//! Toast Notifications
//!
//! Each call mounts one independent toast on the body and schedules its
//! own enter, exit and removal. There is no queue and no stacking.

use gloo_timers::future::TimeoutFuture;
use leptos::mount::mount_to;
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::Document;

use crate::config::Timing;
use crate::dom;
use crate::error::DomResult;
use crate::styles::{NOTIFICATION_CSS, NOTIFICATION_STYLE_ID};

/// Toast color / severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    Success,
    Error,
    #[default]
    Info,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Success => "success",
            Severity::Error => "error",
            Severity::Info => "info",
        }
    }

    /// Unknown tags fall back to `Info`
    pub fn from_str(s: &str) -> Self {
        match s {
            "success" => Severity::Success,
            "error" => Severity::Error,
            _ => Severity::Info,
        }
    }
}

/// Lifecycle stage a toast moves into after insertion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Visible,
    Leaving,
    Removed,
}

/// Toast timeline, offsets measured from insertion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeline {
    pub show_at_ms: u32,
    pub hide_at_ms: u32,
    pub exit_ms: u32,
}

impl Timeline {
    /// Each phase with the wait (ms) since the previous step
    pub fn steps(&self) -> [(u32, Phase); 3] {
        [
            (self.show_at_ms, Phase::Visible),
            (self.hide_at_ms.saturating_sub(self.show_at_ms), Phase::Leaving),
            (self.exit_ms, Phase::Removed),
        ]
    }
}

impl From<&Timing> for Timeline {
    fn from(timing: &Timing) -> Self {
        Self {
            show_at_ms: timing.notification_enter_ms,
            hide_at_ms: timing.notification_visible_ms,
            exit_ms: timing.notification_exit_ms,
        }
    }
}

fn toast_class(severity: Severity, shown: bool) -> String {
    let mut class = format!("notification notification-{}", severity.as_str());
    if shown {
        class.push_str(" show");
    }
    class
}

#[component]
fn Toast(message: String, severity: Severity, shown: ArcRwSignal<bool>) -> impl IntoView {
    view! {
        <div class=move || toast_class(severity, shown.get()) role="status">
            {message}
        </div>
    }
}

/// Show a transient toast
pub fn show(document: &Document, timing: &Timing, message: &str, severity: Severity) -> DomResult<()> {
    dom::inject_style_once(document, NOTIFICATION_STYLE_ID, NOTIFICATION_CSS)?;
    let body = dom::body(document)?;
    let timeline = Timeline::from(timing);

    let shown = ArcRwSignal::new(false);
    let handle = {
        let shown = shown.clone();
        let message = message.to_string();
        mount_to(body, move || view! { <Toast message severity shown /> })
    };
    log::debug!("notification ({}): {}", severity.as_str(), message);

    spawn_local(async move {
        let mut handle = Some(handle);
        for (wait_ms, phase) in timeline.steps() {
            TimeoutFuture::new(wait_ms).await;
            match phase {
                Phase::Visible => shown.set(true),
                Phase::Leaving => shown.set(false),
                // Dropping the handle unmounts the toast
                Phase::Removed => drop(handle.take()),
            }
        }
    });
    Ok(())
}
