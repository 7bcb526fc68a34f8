//! Button and call-to-action link components.

use crate::ui::html::escape;

/// Button visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    /// Gold call-to-action.
    #[default]
    Primary,
    /// Translucent button on dark backgrounds.
    Glass,
    /// Transparent with a light border.
    Outline,
    /// Text-only link style.
    Link,
}

impl ButtonVariant {
    /// Get CSS classes for this variant.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Primary => "bg-accent hover:bg-accent-dark text-white",
            Self::Glass => "bg-white/10 backdrop-blur-sm border border-white/20 hover:bg-white/20 text-white",
            Self::Outline => "bg-transparent border border-white/30 hover:border-white text-white",
            Self::Link => "bg-transparent text-accent underline-offset-4 hover:underline",
        }
    }
}

/// Button size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
    /// Pill-shaped navigation CTA.
    Pill,
}

impl ButtonSize {
    /// Get CSS classes for this size.
    #[must_use]
    pub fn classes(self) -> &'static str {
        match self {
            Self::Sm => "px-4 py-2 text-sm rounded-md",
            Self::Md => "px-6 py-3 rounded-md",
            Self::Lg => "px-8 py-4 text-lg rounded-lg",
            Self::Pill => "px-6 py-2 rounded-full font-semibold",
        }
    }
}

const BASE_CLASSES: &str = "inline-flex items-center justify-center gap-2 font-medium \
                            transition-all duration-300 focus-visible:outline-none \
                            focus-visible:ring-2 focus-visible:ring-accent";

fn classes(variant: ButtonVariant, size: ButtonSize, class: &str) -> String {
    format!(
        "{} {} {} {}",
        BASE_CLASSES,
        variant.classes(),
        size.classes(),
        class
    )
    .trim_end()
    .to_string()
}

/// Anchor styled as a button. `label_html` is trusted markup.
pub fn link_button(
    href: &str,
    label_html: &str,
    variant: ButtonVariant,
    size: ButtonSize,
    class: &str,
) -> String {
    format!(
        r#"<a href="{}" class="{}">{}</a>"#,
        escape(href),
        classes(variant, size, class),
        label_html
    )
}

/// `<button>` element. `attrs` are appended verbatim (htmx attributes etc.).
pub fn button(
    button_type: &str,
    label_html: &str,
    variant: ButtonVariant,
    size: ButtonSize,
    attrs: &str,
) -> String {
    format!(
        r#"<button type="{}" class="{}" {}>{}</button>"#,
        escape(button_type),
        classes(variant, size, ""),
        attrs,
        label_html
    )
}
