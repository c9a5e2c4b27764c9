//! Page Behaviors
//!
//! One module per behavior; each exposes an `attach` routine taking the
//! page roots and configuration explicitly.

pub mod counter;
pub mod form;
pub mod lightbox;
pub mod nav_menu;
pub mod notification;
pub mod scroll_effects;
pub mod smooth_scroll;
