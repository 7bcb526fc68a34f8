use crate::content::{TECH_COMPONENTS, TECH_FEATURES};
use crate::reveal::{Axis, ParallaxConfig, PlayMode, RevealConfig, Threshold, TriggerScope};
use crate::ui::RenderContext;
use crate::ui::components::{
    BadgeVariant, ButtonSize, ButtonVariant, badge, card, check_icon, icon_well, link_button,
};
use crate::ui::html::{escape, parallax_layer, reveal_container, reveal_item};

/// Feature cards: one at a time, once, 50px before they enter.
pub fn feature_reveal() -> RevealConfig {
    RevealConfig::default()
        .with_duration(0.6)
        .with_threshold(Threshold {
            element: 0.0,
            viewport: 1.0,
            offset_px: -50.0,
        })
}

/// Connected-systems list slides in from the left as a group at 80%.
pub fn component_reveal() -> RevealConfig {
    RevealConfig::default()
        .with_axis(Axis::X)
        .with_amount(-20.0)
        .with_duration(0.5)
        .with_mode(PlayMode::Replay)
        .with_scope(TriggerScope::Container)
}

pub fn background_parallax() -> ParallaxConfig {
    ParallaxConfig::new(15.0)
}

fn feature_cards(ctx: &RenderContext<'_>) -> String {
    let config = feature_reveal();
    let item = reveal_item(&config);
    TECH_FEATURES
        .iter()
        .map(|feature| {
            let stat = feature.stat.map_or_else(String::new, |stat| {
                format!(
                    r#"<div class="mt-auto pt-4 border-t border-white/10"><p class="text-accent font-medium">{}</p></div>"#,
                    escape(stat)
                )
            });
            card(
                "feature-card relative rounded-xl p-8 overflow-hidden group",
                &item,
                &format!(
                    r#"{well}<h3 class="text-xl font-display text-white mb-2">{title}</h3><p class="text-gray-400 text-sm mb-4">{description}</p>{stat}"#,
                    well = icon_well(&ctx.icon(
                        feature.icon,
                        feature.title,
                        feature.icon_fallback,
                        "w-6 h-6"
                    )),
                    title = escape(feature.title),
                    description = escape(feature.description),
                ),
            )
        })
        .collect()
}

fn components() -> String {
    let config = component_reveal();
    let item = reveal_item(&config);
    let rows: String = TECH_COMPONENTS
        .iter()
        .map(|component| {
            format!(
                r#"<li class="tech-component flex items-start" {item}><span class="mt-1 mr-3 text-accent">{check}</span><div><h4 class="text-white font-medium">{title}</h4><p class="text-gray-400 text-sm">{description}</p></div></li>"#,
                check = check_icon(""),
                title = escape(component.title),
                description = escape(component.description),
            )
        })
        .collect();
    format!(
        r#"<ul class="space-y-3" {container}>{rows}</ul>"#,
        container = reveal_container(&config)
    )
}

/// Integration story: feature cards and the connected-systems panel.
pub fn technology(ctx: &RenderContext<'_>) -> String {
    let discuss = link_button(
        "#contact",
        "Discuss Integrations",
        ButtonVariant::Primary,
        ButtonSize::Md,
        "",
    );

    format!(
        r#"<section id="technology" class="py-24 md:py-32 bg-gradient-to-b from-primary-dark to-primary relative overflow-hidden">
    <div class="tech-pattern absolute inset-0 opacity-5 pointer-events-none" {parallax}></div>
    <div class="max-w-7xl mx-auto px-4 sm:px-6 relative z-10">
        <div class="max-w-3xl mx-auto mb-20 text-center">
            {eyebrow}
            <h2 class="type-h2 text-white mb-6">Integrated Technology for Modern Logistics</h2>
            <p class="type-subhead mb-8">We connect with major technology providers (ERPs, WMS, TMS, e-commerce and marketplace platforms) to deliver visibility and seamless operations without forcing a new system.</p>
        </div>
        <div class="grid md:grid-cols-2 xl:grid-cols-4 gap-8 mb-20" {features_container}>{features}</div>
        <div class="mb-24 rounded-2xl bg-white/5 border border-white/10 p-8 md:p-12 relative overflow-hidden">
            <div class="relative z-10 grid md:grid-cols-2 gap-12 items-center">
                <div class="space-y-6">
                    <h3 class="text-3xl font-display text-white mb-4">Connected Systems</h3>
                    <p class="text-gray-300">We integrate with the systems you already use through standard EDI and REST APIs. Common connections include leading ERPs, e-commerce platforms, marketplaces, TMS/WMS, and visibility providers.</p>
                    {components}
                    <div class="pt-4">{discuss}</div>
                </div>
                {diagram}
            </div>
        </div>
    </div>
</section>
"#,
        parallax = parallax_layer(&background_parallax()),
        eyebrow = badge("PROPRIETARY TECHNOLOGY", BadgeVariant::Pill),
        features_container = reveal_container(&feature_reveal()),
        features = feature_cards(ctx),
        components = components(),
        diagram = card(
            "p-8 flex items-center justify-center min-h-64",
            "",
            &ctx.icon(
                "/images/connected-systems.svg",
                "Connected systems diagram",
                "🔗",
                "w-full h-auto",
            ),
        ),
    )
}
