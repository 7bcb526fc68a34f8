//! Card containers.

/// Frosted card. `inner` is trusted markup; `attrs` are appended verbatim.
pub fn card(class: &str, attrs: &str, inner: &str) -> String {
    format!(
        r#"<div class="rounded-2xl border border-white/10 bg-white/5 backdrop-blur-sm {class}" {attrs}>{inner}</div>"#
    )
}

/// Round icon well used at the top of service and feature cards.
pub fn icon_well(inner: &str) -> String {
    format!(
        r#"<div class="flex items-center justify-center w-16 h-16 mb-6 rounded-full bg-accent/10 text-accent">{inner}</div>"#
    )
}
