use crate::content::{CORE_VALUES, DIFFERENTIATORS};
use crate::reveal::{ParallaxConfig, PlayMode, RevealConfig, Threshold, TriggerScope};
use crate::ui::RenderContext;
use crate::ui::components::{
    BadgeVariant, ButtonSize, ButtonVariant, arrow_right_icon, badge, card, icon_well, link_button,
};
use crate::ui::html::{escape, parallax_layer, reveal_container, reveal_item};

/// Core value cards: staggered together once the grid's top reaches 75%,
/// reversed when scrolled back above it.
pub fn value_reveal() -> RevealConfig {
    RevealConfig::default()
        .with_threshold(Threshold {
            element: 0.0,
            viewport: 0.75,
            offset_px: 0.0,
        })
        .with_mode(PlayMode::Replay)
        .with_scope(TriggerScope::Container)
}

pub fn background_parallax() -> ParallaxConfig {
    ParallaxConfig::new(20.0)
}

fn values() -> String {
    let config = value_reveal();
    let item = reveal_item(&config);
    let cards: String = CORE_VALUES
        .iter()
        .map(|value| {
            card(
                "value-card p-6 rounded-xl hover:bg-white/10 transition-all duration-300",
                &item,
                &format!(
                    r#"<div class="font-display text-white text-xl mb-3">{}</div><p class="text-gray-400 text-sm">{}</p>"#,
                    escape(value.title),
                    escape(value.description)
                ),
            )
        })
        .collect();

    format!(
        r#"<div class="mb-24">
            <h3 class="text-2xl md:text-3xl font-display text-white text-center mb-12">Our Core Values</h3>
            <div class="grid md:grid-cols-2 lg:grid-cols-4 gap-6" {container}>{cards}</div>
        </div>"#,
        container = reveal_container(&config),
    )
}

fn differentiators(ctx: &RenderContext<'_>) -> String {
    let items: String = DIFFERENTIATORS
        .iter()
        .map(|diff| {
            format!(
                r#"<div class="text-center"><div class="flex justify-center">{well}</div><h4 class="text-xl font-display text-white mb-3">{title}</h4><p class="text-gray-400 text-sm max-w-xs mx-auto">{description}</p></div>"#,
                well = icon_well(&ctx.icon(diff.icon, diff.title, diff.icon_fallback, "w-8 h-8")),
                title = escape(diff.title),
                description = escape(diff.description),
            )
        })
        .collect();

    let cta = link_button(
        "#contact",
        &format!("<span>Get in Touch</span>{}", arrow_right_icon("")),
        ButtonVariant::Primary,
        ButtonSize::Md,
        "",
    );

    format!(
        r#"<div class="rounded-2xl bg-gradient-to-r from-heritage-800/50 to-heritage-900/50 border border-white/5 p-8 md:p-12">
            <h3 class="text-2xl md:text-3xl font-display text-white text-center mb-10">What Sets Us Apart</h3>
            <div class="grid md:grid-cols-3 gap-8">{items}</div>
            <div class="text-center mt-12">{cta}</div>
        </div>"#
    )
}

/// Company story, core values and differentiators.
pub fn about(ctx: &RenderContext<'_>) -> String {
    let heritage_logo = ctx.icon(
        "/images/old_noerr_logo.png",
        "Noerr Motor Freight Heritage Logo",
        "🚛",
        "drop-shadow-xl",
    );

    format!(
        r#"<section id="about" class="py-24 md:py-32 bg-gradient-to-b from-heritage-900 to-heritage-950 relative overflow-hidden">
    <div class="bg-pattern absolute inset-0 opacity-5 pointer-events-none" {parallax}></div>
    <div class="max-w-7xl mx-auto px-4 sm:px-6 relative z-10">
        <div class="mb-20 md:mb-28 max-w-3xl mx-auto text-center">
            {eyebrow}
            <h2 class="type-h2 text-white mb-6">Nearly a Century of Logistics Excellence</h2>
            <p class="text-xl text-gray-300">From our humble beginnings in 1927 to our tech-enabled future today, the Noerr family has continuously evolved to meet the changing needs of modern supply chains.</p>
        </div>
        <div class="grid lg:grid-cols-2 gap-12 items-center mb-24">
            <div class="order-2 lg:order-1 space-y-6">
                <h2 class="type-h3 text-white mb-6">Where Heritage Meets <span class="text-accent">Innovation</span></h2>
                <p class="text-lg text-gray-300 leading-relaxed">The Noerr family has been a cornerstone of American transportation for nearly a century, building a reputation for reliability and excellence that spans five generations.</p>
                <div class="space-y-4 text-gray-300 type-body">
                    <p>While we honor our traditions, we're firmly focused on the future. Today's Noerr combines time-tested logistics expertise with integrated technology partnerships to deliver solutions that modern brands demand in a rapidly evolving marketplace.</p>
                    <p>Our management team consists of 4th and 5th generation family members working alongside technology experts, engineers, and logistics specialists to provide an unmatched combination of personal service and technological innovation.</p>
                </div>
            </div>
            <div class="order-1 lg:order-2 relative">
                <div class="relative aspect-video md:aspect-square rounded-2xl overflow-hidden bg-gradient-to-br from-heritage-800/70 to-heritage-900/70 p-8 flex items-center justify-center">
                    <div class="text-center">
                        <div class="mb-6 flex justify-center">{heritage_logo}</div>
                        <div class="font-display text-white text-2xl mb-2">1927 - {year}</div>
                        <div class="text-gray-300">Nearly a century of evolution</div>
                    </div>
                </div>
            </div>
        </div>
        {values}
        {differentiators}
    </div>
</section>
"#,
        parallax = parallax_layer(&background_parallax()),
        eyebrow = badge("OUR STORY", BadgeVariant::Pill),
        year = ctx.year,
        values = values(),
        differentiators = differentiators(ctx),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetCatalog;
    use crate::config::SiteConfig;

    #[test]
    fn test_value_cards_start_hidden() {
        let html = values();
        assert_eq!(
            html.matches("data-reveal-item").count(),
            CORE_VALUES.len()
        );
        assert!(html.contains("opacity:0;transform:translateY(30px)"));
        assert!(html.contains("data-reveal-container"));
    }

    #[test]
    fn test_missing_differentiator_icons_fall_back() {
        let site = SiteConfig {
            static_dir: "static".into(),
            phone: "+1 (717) 242-0566".to_string(),
            email: "info@noerr.com".to_string(),
        };
        let assets = AssetCatalog::from_paths(["/icons/tech-platform.svg"]);
        let html = about(&RenderContext::new(&assets, &site, "contact").with_year(2030));

        assert!(html.contains(r#"src="/static/icons/tech-platform.svg""#));
        assert!(html.contains("🔍"));
        assert!(!html.contains("/static/icons/brand-focus.svg"));
        assert!(html.contains("1927 - 2030"));
    }
}
