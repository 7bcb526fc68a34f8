//! Inline SVG icons.
//!
//! Rendered inline so they never depend on a static asset being present.

/// Common icon size class.
const ICON_SIZE: &str = "h-4 w-4";

fn svg(class: &str, body: &str) -> String {
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round" class="{ICON_SIZE} {class}" aria-hidden="true">{body}</svg>"#
    )
}

/// Arrow pointing right.
pub fn arrow_right_icon(class: &str) -> String {
    svg(class, r#"<path d="M14 5l7 7m0 0l-7 7m7-7H3"/>"#)
}

/// Chevron pointing left (wizard "Back").
pub fn chevron_left_icon(class: &str) -> String {
    svg(class, r#"<path d="M15 19l-7-7 7-7"/>"#)
}

/// Check/success icon.
pub fn check_icon(class: &str) -> String {
    svg(class, r#"<path d="M5 13l4 4L19 7"/>"#)
}

/// Telephone handset.
pub fn phone_icon(class: &str) -> String {
    svg(
        class,
        r#"<path d="M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 6V5z"/>"#,
    )
}

/// Envelope.
pub fn mail_icon(class: &str) -> String {
    svg(
        class,
        r#"<path d="M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z"/>"#,
    )
}

/// Hamburger menu icon.
pub fn menu_icon(class: &str) -> String {
    svg(
        class,
        r#"<line x1="4" y1="6" x2="20" y2="6"/><line x1="4" y1="12" x2="20" y2="12"/><line x1="4" y1="18" x2="20" y2="18"/>"#,
    )
}
