use crate::content::NAV_LINKS;
use crate::ui::RenderContext;
use crate::ui::components::{ButtonSize, ButtonVariant, link_button, menu_icon};
use crate::ui::html::escape;

/// Fixed header with in-page anchors and a collapsible mobile menu.
///
/// The toggle flips `aria-expanded` and the menu's `hidden` class in
/// `reveal.js`; without scripts the desktop links are still reachable.
pub fn navbar(ctx: &RenderContext<'_>) -> String {
    let logo = ctx.icon(
        "/images/Noerr-logo.png",
        "Noerr Motor Freight",
        "NOERR",
        "h-10 w-auto object-contain",
    );

    let desktop_links: String = NAV_LINKS
        .iter()
        .map(|(label, href)| {
            format!(
                r#"<a href="{}" class="text-sm font-medium text-white/80 hover:text-white transition-colors">{}</a>"#,
                escape(href),
                escape(label)
            )
        })
        .collect();

    let mobile_links: String = NAV_LINKS
        .iter()
        .map(|(label, href)| {
            format!(
                r#"<a href="{}" class="block px-4 py-3 text-white/90 hover:bg-white/10 rounded-lg" data-menu-link>{}</a>"#,
                escape(href),
                escape(label)
            )
        })
        .collect();

    let cta = link_button(
        "#contact",
        "Get Started",
        ButtonVariant::Primary,
        ButtonSize::Pill,
        "",
    );

    format!(
        r##"<header id="navbar" class="fixed top-0 inset-x-0 z-50 transition-all duration-300 bg-primary/80 backdrop-blur-md" data-navbar>
    <div class="max-w-7xl mx-auto flex h-16 md:h-20 items-center justify-between px-4 sm:px-6">
        <a href="#" class="flex items-center" aria-label="Noerr home">{logo}</a>
        <nav class="hidden md:flex items-center gap-8" aria-label="Primary">
            {desktop_links}
            {cta}
        </nav>
        <button type="button" class="md:hidden p-2 text-white" aria-label="Toggle menu" aria-controls="mobile-menu" aria-expanded="false" data-menu-toggle>{menu}</button>
    </div>
    <div id="mobile-menu" class="hidden md:hidden px-4 pb-4 bg-primary/95 backdrop-blur-md">
        {mobile_links}
        <a href="#contact" class="block mt-2 px-4 py-3 text-center bg-accent text-white rounded-full font-semibold" data-menu-link>Get Started</a>
    </div>
</header>
"##,
        menu = menu_icon("h-6 w-6"),
    )
}
