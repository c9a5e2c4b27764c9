//! Injected Stylesheets
//!
//! Styles for the elements this crate creates itself. Page styles stay in
//! the site's own CSS.

pub const LIGHTBOX_STYLE_ID: &str = "lightbox-styles";
pub const NOTIFICATION_STYLE_ID: &str = "notification-styles";

pub const LIGHTBOX_CSS: &str = r#"
.lightbox {
    position: fixed;
    top: 0;
    left: 0;
    width: 100%;
    height: 100%;
    background: rgba(0, 0, 0, 0.9);
    display: none;
    align-items: center;
    justify-content: center;
    z-index: 10000;
}
.lightbox.active { display: flex; }
.lightbox-content {
    position: relative;
    max-width: 90%;
    max-height: 90%;
}
.lightbox-image {
    max-width: 100%;
    max-height: 80vh;
    object-fit: contain;
}
.lightbox-close {
    position: absolute;
    top: -40px;
    right: 0;
    color: white;
    font-size: 2rem;
    cursor: pointer;
}
.lightbox-caption {
    color: white;
    text-align: center;
    margin-top: 1rem;
}
.lightbox-nav button {
    position: absolute;
    top: 50%;
    transform: translateY(-50%);
    background: rgba(255, 255, 255, 0.2);
    border: none;
    color: white;
    font-size: 2rem;
    padding: 1rem;
    cursor: pointer;
    border-radius: 50%;
}
.lightbox-prev { left: -60px; }
.lightbox-next { right: -60px; }
"#;

pub const NOTIFICATION_CSS: &str = r#"
.notification {
    position: fixed;
    top: 20px;
    right: 20px;
    padding: 1rem 2rem;
    border-radius: 0.5rem;
    color: white;
    font-weight: 600;
    z-index: 10001;
    transform: translateX(100%);
    transition: transform 0.3s ease;
}
.notification-success { background: #10b981; }
.notification-error { background: #ef4444; }
.notification-info { background: #3b82f6; }
.notification.show { transform: translateX(0); }
"#;

/// Inline style of the error line appended under an invalid field
pub const FIELD_ERROR_STYLE: &str = "color: #ef4444; font-size: 0.875rem; margin-top: 0.25rem;";
