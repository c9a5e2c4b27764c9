//! Site Configuration
//!
//! Selectors of the markup contract plus scroll and timing constants.
//! A page may override any field with an inline JSON block:
//!
//! ```html
//! <script type="application/json" id="site-config">
//!   { "timing": { "submitDelayMs": 500 } }
//! </script>
//! ```

use serde::Deserialize;
use thiserror::Error;
use web_sys::Document;

/// Id of the optional inline configuration element
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SiteConfig {
    pub selectors: Selectors,
    pub scroll: ScrollConfig,
    pub timing: Timing,
}

/// CSS selectors the behaviors attach to
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Selectors {
    pub menu_toggle: String,
    pub nav: String,
    pub header: String,
    pub hero: String,
    pub hero_image: String,
    pub fade_in: String,
    pub gallery_item: String,
    pub counter: String,
    pub anchor_links: String,
    /// Element id (not a selector) of the contact form
    pub contact_form_id: String,
}

impl Default for Selectors {
    fn default() -> Self {
        Self {
            menu_toggle: ".mobile-menu-toggle".into(),
            nav: ".nav".into(),
            header: ".header".into(),
            hero: ".hero".into(),
            hero_image: ".hero-image".into(),
            fade_in: ".card, .gallery-item, .section-header".into(),
            gallery_item: ".gallery-item".into(),
            counter: ".counter".into(),
            anchor_links: "a[href^=\"#\"]".into(),
            contact_form_id: "contact-form".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScrollConfig {
    /// Vertical offset (px) past which the header is "scrolled"
    pub header_threshold: f64,
    pub parallax_rate: f64,
    pub fade_threshold: f64,
    pub fade_root_margin: String,
}

impl Default for ScrollConfig {
    fn default() -> Self {
        Self {
            header_threshold: 100.0,
            parallax_rate: 0.5,
            fade_threshold: 0.1,
            fade_root_margin: "0px 0px -50px 0px".into(),
        }
    }
}

/// Delays and durations, all in milliseconds
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Timing {
    pub submit_delay_ms: u32,
    pub notification_enter_ms: u32,
    pub notification_visible_ms: u32,
    pub notification_exit_ms: u32,
    pub counter_duration_ms: u32,
}

impl Default for Timing {
    fn default() -> Self {
        Self {
            submit_delay_ms: 2000,
            notification_enter_ms: 100,
            notification_visible_ms: 5000,
            notification_exit_ms: 300,
            counter_duration_ms: 2000,
        }
    }
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read the inline config block, falling back to defaults
    pub fn load(document: &Document) -> Self {
        let Some(text) = document
            .get_element_by_id(CONFIG_ELEMENT_ID)
            .and_then(|el| el.text_content())
        else {
            return Self::default();
        };

        match Self::from_json(&text) {
            Ok(config) => {
                log::debug!("loaded inline site config");
                config
            }
            Err(e) => {
                log::warn!("{}; using defaults", e);
                Self::default()
            }
        }
    }
}
