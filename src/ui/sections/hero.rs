use crate::assets::AssetCatalog;
use crate::content::tel_link;
use crate::reveal::{Ease, EaseDirection, ParallaxConfig, RevealConfig, Threshold};
use crate::ui::RenderContext;
use crate::ui::components::{ButtonSize, ButtonVariant, arrow_right_icon, link_button, phone_icon};
use crate::ui::html::{parallax_layer, reveal_container, reveal_item};

const VIDEO: &str = "/videos/1693757_Semi_Semitrailer_3840x2160.mp4";
const POSTER: &str = "/images/hero-poster.jpg";

/// Video drift: starts at rest on load and runs until the hero has scrolled away.
pub fn video_parallax() -> ParallaxConfig {
    ParallaxConfig::new(20.0).with_start(Threshold {
        element: 0.0,
        viewport: 0.0,
        offset_px: 0.0,
    })
}

/// Headline entrance: plays as soon as the page loads.
pub fn hero_reveal() -> RevealConfig {
    RevealConfig::default()
        .with_amount(40.0)
        .with_duration(1.0)
        .with_stagger(0.15)
        .with_ease(Ease::Power {
            degree: 3,
            direction: EaseDirection::Out,
        })
        // bottom edge of the viewport: already crossed on first paint
        .with_threshold(Threshold {
            element: 0.0,
            viewport: 1.0,
            offset_px: 0.0,
        })
}

fn video(ctx: &RenderContext<'_>) -> String {
    // Skip the element entirely when the file is absent; the gradient stays.
    if !ctx.assets.resolves(VIDEO) {
        return String::new();
    }
    let poster = if ctx.assets.resolves(POSTER) {
        format!(r#" poster="{}""#, AssetCatalog::url(POSTER))
    } else {
        String::new()
    };
    format!(
        r#"<video autoplay loop muted playsinline{poster} class="absolute top-0 left-0 w-full h-full object-cover scale-105" {parallax}><source src="{src}" type="video/mp4"></video>"#,
        parallax = parallax_layer(&video_parallax()),
        src = AssetCatalog::url(VIDEO),
    )
}

/// Full-height hero with video background and the two primary CTAs.
pub fn hero(ctx: &RenderContext<'_>) -> String {
    let config = hero_reveal();
    let item = reveal_item(&config);

    let quote = link_button(
        "#contact",
        &format!(
            "<span>Get a Quote</span>{}",
            arrow_right_icon("transition-transform group-hover:translate-x-1")
        ),
        ButtonVariant::Primary,
        ButtonSize::Lg,
        "group w-full sm:w-auto",
    );
    let call = link_button(
        &tel_link(&ctx.site.phone),
        &format!("<span>Call Dispatch</span>{}", phone_icon("")),
        ButtonVariant::Outline,
        ButtonSize::Lg,
        "w-full sm:w-auto",
    );

    format!(
        r##"<section id="hero" class="hero-section min-h-[100svh] relative overflow-hidden bg-primary">
    <div class="absolute inset-0 w-full h-full">
        <div class="absolute inset-0 bg-gradient-to-b from-primary/80 via-primary/70 to-primary/90 z-10"></div>
        {video}
    </div>
    <div class="relative z-20 h-[100svh] flex flex-col justify-center items-center px-4 pt-16 md:pt-0">
        <div class="max-w-5xl mx-auto text-center" {container}>
            <h1 class="hero-text type-h1 text-white mb-6 md:mb-8 px-4" {item}>Trusted 3PL for Transportation, Warehousing, and Distribution</h1>
            <p class="hero-text type-subhead mb-8 md:mb-12 max-w-3xl mx-auto px-4" {item}>Nearly a century of family-owned trucking heritage delivering reliable regional service across Pennsylvania and the Northeast.</p>
            <div class="hero-text flex flex-col sm:flex-row justify-center gap-4 sm:gap-6 px-4 w-full max-w-xl mx-auto" {item}>
                {quote}
                {call}
            </div>
        </div>
        <a href="#about" class="scroll-indicator absolute bottom-4 sm:bottom-8 left-1/2 -translate-x-1/2 flex flex-col items-center text-white/70 text-xs sm:text-sm">
            <span class="mb-2">Scroll to explore</span>
            <svg class="w-5 h-5 sm:w-6 sm:h-6" xmlns="http://www.w3.org/2000/svg" fill="none" viewBox="0 0 24 24" stroke="currentColor" aria-hidden="true"><path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M19 14l-7 7m0 0l-7-7m7 7V3"/></svg>
        </a>
    </div>
</section>
"##,
        video = video(ctx),
        container = reveal_container(&config),
    )
}
