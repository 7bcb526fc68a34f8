//! Eyebrow badges above section headings.

use crate::ui::html::escape;

/// Badge visual variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum BadgeVariant {
    /// Gold text in a tinted pill ("OUR STORY").
    #[default]
    Pill,
    /// Text flanked by thin gold rules ("Core 3PL Services").
    Ruled,
}

/// Section eyebrow label.
pub fn badge(label: &str, variant: BadgeVariant) -> String {
    match variant {
        BadgeVariant::Pill => format!(
            r#"<div class="inline-block mb-6 px-4 py-1 bg-accent/10 rounded-full"><span class="text-accent font-medium text-sm">{}</span></div>"#,
            escape(label)
        ),
        BadgeVariant::Ruled => format!(
            r#"<div class="flex items-center justify-center mb-6"><div class="h-px w-12 bg-accent opacity-70 mr-4"></div><span class="type-eyebrow">{}</span><div class="h-px w-12 bg-accent opacity-70 ml-4"></div></div>"#,
            escape(label)
        ),
    }
}
