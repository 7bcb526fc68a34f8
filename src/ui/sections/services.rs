use crate::content::SERVICES;
use crate::reveal::{RevealConfig, Threshold};
use crate::ui::RenderContext;
use crate::ui::components::{
    BadgeVariant, ButtonSize, ButtonVariant, badge, card, icon_well, link_button,
};
use crate::ui::html::{escape, reveal_container, reveal_item};

/// Each card animates independently, once, shortly before it scrolls in.
pub fn card_reveal() -> RevealConfig {
    RevealConfig::default()
        .with_duration(0.5)
        .with_amount(20.0)
        .with_threshold(Threshold {
            element: 0.0,
            viewport: 1.0,
            offset_px: -50.0,
        })
}

fn service_cards(ctx: &RenderContext<'_>) -> String {
    let config = card_reveal();
    let item = reveal_item(&config);
    SERVICES
        .iter()
        .map(|service| {
            let benefits: String = service
                .benefits
                .iter()
                .map(|b| {
                    format!(
                        r#"<li class="flex items-start text-sm"><span class="mr-2 text-accent">✓</span><span class="text-gray-200">{}</span></li>"#,
                        escape(b)
                    )
                })
                .collect();
            card(
                "service-card group relative bg-secondary/10 border-white/5 p-8 overflow-hidden",
                &item,
                &format!(
                    r#"{well}<h3 class="type-h3 text-white mb-3">{title}</h3><p class="type-body mb-6">{description}</p><ul class="space-y-2">{benefits}</ul>"#,
                    well = icon_well(&ctx.icon(
                        service.icon,
                        service.title,
                        service.icon_fallback,
                        "w-8 h-8"
                    )),
                    title = escape(service.title),
                    description = escape(service.description),
                ),
            )
        })
        .collect()
}

/// Service catalogue and the closing call to action.
pub fn services(ctx: &RenderContext<'_>) -> String {
    let contact = link_button(
        "#contact",
        "Contact Us",
        ButtonVariant::Primary,
        ButtonSize::Md,
        "",
    );
    let learn_more = link_button(
        "#about",
        "Learn More",
        ButtonVariant::Outline,
        ButtonSize::Md,
        "",
    );

    format!(
        r#"<section id="services" class="py-20 md:py-32 bg-gradient-to-b from-primary to-primary-dark relative overflow-hidden">
    <div class="max-w-7xl mx-auto px-4 sm:px-6 relative z-10">
        <div class="mb-16 md:mb-20">
            {eyebrow}
            <h2 class="type-h2 text-white mb-6 text-center">Logistics That Scales With Your Brand</h2>
            <p class="type-body text-center max-w-2xl mx-auto">Purpose-built 3PL solutions for D2C and B2B with best-in-class execution.</p>
        </div>
        <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-8 mb-20" {container}>{cards}</div>
        <div class="rounded-2xl bg-gradient-to-r from-secondary/20 to-accent/10 p-8 md:p-12 mb-8 border border-white/5">
            <div class="grid md:grid-cols-2 gap-8 items-center">
                <div class="space-y-4">
                    <h3 class="text-2xl md:text-3xl font-display text-white">Ready to transform your supply chain?</h3>
                    <p class="text-gray-300">Talk to our team about a right-sized solution across fulfillment, distribution, and transportation.</p>
                    <div class="flex flex-wrap gap-4 pt-2">{contact}{learn_more}</div>
                </div>
                <figure class="bg-white/5 border border-white/10 rounded-xl p-6">
                    <blockquote class="text-white italic mb-4 text-sm">"Noerr helped us cut fulfillment costs and improve on-time delivery without sacrificing customer experience."</blockquote>
                    <figcaption>
                        <p class="text-white text-sm font-medium">Operations Lead, Growth Brand</p>
                        <p class="text-gray-400 text-xs">Consumer Goods</p>
                    </figcaption>
                </figure>
            </div>
        </div>
    </div>
</section>
"#,
        eyebrow = badge("Core 3PL Services", BadgeVariant::Ruled),
        container = reveal_container(&card_reveal()),
        cards = service_cards(ctx),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_reveal_fires_fifty_pixels_early() {
        assert_eq!(card_reveal().threshold.to_string(), "0% 100%-=50");
    }
}
