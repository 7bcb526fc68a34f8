use crate::content::{NAV_LINKS, tel_link};
use crate::ui::RenderContext;
use crate::ui::html::escape;

pub fn footer(ctx: &RenderContext<'_>) -> String {
    let links: String = NAV_LINKS
        .iter()
        .map(|(label, href)| {
            format!(
                r#"<a href="{}" class="text-sm text-gray-400 hover:text-white transition-colors">{}</a>"#,
                escape(href),
                escape(label)
            )
        })
        .collect();

    format!(
        r#"<footer class="bg-primary-dark border-t border-white/5 py-10">
    <div class="max-w-7xl mx-auto px-4 sm:px-6 flex flex-col md:flex-row items-center justify-between gap-6">
        <p class="text-sm text-gray-400">&copy; {year} Noerr Inc. All rights reserved.</p>
        <nav class="flex flex-wrap items-center gap-6" aria-label="Footer">{links}</nav>
        <a href="{tel}" class="text-sm text-gray-300 hover:text-white">{phone}</a>
    </div>
</footer>
"#,
        year = ctx.year,
        tel = tel_link(&ctx.site.phone),
        phone = escape(&ctx.site.phone),
    )
}
