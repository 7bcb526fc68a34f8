//! Document shell and the landing page.

use super::RenderContext;
use super::html::escape;
use super::sections::{self, WizardView};

const TITLE: &str = "Noerr Inc. | Tech-Enabled 3PL";
/// htmx 2 leaves 4xx bodies unswapped by default. Validation (422) and
/// rate-limit (429) responses carry markup the visitor must see.
pub const HTMX_CONFIG: &str = r#"{"responseHandling":[{"code":"204","swap":false},{"code":"[23]..","swap":true},{"code":"422","swap":true},{"code":"429","swap":true},{"code":"[45]..","swap":false,"error":true}]}"#;

const DESCRIPTION: &str = "Ecommerce fulfillment, B2B distribution, value-added services, \
                           trucking & transportation, and warehouse management for modern brands.";

/// Wrap `content` in the HTML document.
///
/// Reveal items ship with an inline hidden style; the `noscript` rule keeps
/// them visible when `reveal.js` never runs.
pub fn html_shell(title: &str, content: &str) -> String {
    let title = escape(title);
    let description = escape(DESCRIPTION);
    let htmx_config = escape(HTMX_CONFIG);
    format!(
        r#"<!DOCTYPE html>
<html lang="en" class="scroll-smooth">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1">
    <meta name="description" content="{description}">
    <meta property="og:title" content="{title}">
    <meta property="og:description" content="{description}">
    <title>{title}</title>

    <!-- HTMX (local) -->
    <meta name="htmx-config" content="{htmx_config}">
    <script src="/static/vendor/htmx-2.0.8.min.js"></script>

    <!-- Scroll reveal + parallax runtime -->
    <script defer src="/static/js/reveal.js"></script>
    <link rel="stylesheet" href="/static/css/site.css">
    <noscript><style>[data-reveal-item]{{opacity:1!important;transform:none!important}}</style></noscript>
</head>
<body class="bg-primary text-white antialiased font-sans">
    <main class="relative">
{content}
    </main>
</body>
</html>"#
    )
}

/// The full landing page with the contact wizard in `wizard`'s state.
pub fn render_page(ctx: &RenderContext<'_>, wizard: &WizardView) -> String {
    let body = [
        sections::navbar(ctx),
        sections::hero(ctx),
        sections::about(ctx),
        sections::services(ctx),
        sections::technology(ctx),
        sections::contact(ctx, wizard),
        sections::footer(ctx),
    ]
    .concat();

    html_shell(TITLE, &body)
}
