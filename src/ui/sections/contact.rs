//! Contact section and the three-step inquiry wizard.
//!
//! The wizard is swapped in place by htmx (`#contact-wizard`, `outerHTML`).
//! Every form also carries a plain `action`, so the same routes serve a
//! full page when scripts are off.

use crate::contact::{ContactFlow, ContactStep, ContactSubmission, InquiryType};
use crate::content::{LOCATIONS, MAIL_SUBJECT, mailto_link, tel_link};
use crate::reveal::{RevealConfig, Threshold};
use crate::ui::RenderContext;
use crate::ui::components::{
    BadgeVariant, ButtonSize, ButtonVariant, badge, button, card, check_icon, chevron_left_icon,
    mail_icon, phone_icon,
};
use crate::ui::html::{escape, reveal_container, reveal_item};

/// Swap target shared by every wizard request.
const HX_TARGET: &str = r##"hx-target="#contact-wizard" hx-swap="outerHTML""##;

const INPUT_CLASSES: &str = "w-full px-4 py-3 bg-white/10 border border-white/20 rounded-lg \
                             text-white placeholder-gray-400 focus:outline-none focus:ring-2 \
                             focus:ring-accent";

/// Everything the wizard needs to render one step.
#[derive(Debug, Clone, Default)]
pub struct WizardView {
    pub flow: ContactFlow,
    /// Values to refill after a rejected submission.
    pub draft: ContactSubmission,
    pub errors: Vec<String>,
}

impl WizardView {
    pub fn new(flow: ContactFlow) -> Self {
        Self {
            flow,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_draft(mut self, draft: ContactSubmission) -> Self {
        self.draft = draft;
        self
    }

    #[must_use]
    pub fn with_errors(mut self, errors: Vec<String>) -> Self {
        self.errors = errors;
        self
    }
}

fn step_indicator(step: ContactStep) -> String {
    let current = step.number();
    let dots: String = (1..=3u8)
        .map(|n| {
            let (class, aria) = if n == current {
                ("bg-accent w-8", r#" aria-current="step""#)
            } else if n < current {
                ("bg-accent/60 w-2", "")
            } else {
                ("bg-white/20 w-2", "")
            };
            format!(r#"<li class="h-2 rounded-full transition-all {class}"{aria}></li>"#)
        })
        .collect();
    format!(
        r#"<ol class="flex items-center gap-2 mb-8" aria-label="Step {current} of 3">{dots}</ol>"#
    )
}

/// Hidden copies of the typed details so choosing a category again refills them.
fn draft_fields(draft: &ContactSubmission) -> String {
    [
        ("name", &draft.name),
        ("company", &draft.company),
        ("email", &draft.email),
        ("phone", &draft.phone),
        ("message", &draft.message),
    ]
    .iter()
    .filter(|(_, value)| !value.is_empty())
    .map(|(name, value)| {
        format!(
            r#"<input type="hidden" name="{name}" value="{}">"#,
            escape(value)
        )
    })
    .collect()
}

fn select_step(
    ctx: &RenderContext<'_>,
    selected: Option<InquiryType>,
    draft: &ContactSubmission,
) -> String {
    let options: String = InquiryType::ALL
        .iter()
        .map(|&inquiry| {
            let is_selected = selected == Some(inquiry);
            let state = if is_selected {
                "border-accent bg-accent/10"
            } else {
                "border-white/10 bg-white/5 hover:bg-white/10"
            };
            format!(
                r#"<button type="submit" name="inquiryType" value="{id}" aria-pressed="{is_selected}" class="inquiry-option flex items-start gap-4 p-5 text-left rounded-xl border transition-all duration-300 {state}"><div class="w-12 h-12 shrink-0 rounded-lg bg-accent/10 flex items-center justify-center">{icon}</div><div><h4 class="text-white font-medium text-lg mb-1">{label}</h4><p class="text-gray-400 text-sm">{description}</p></div></button>"#,
                id = inquiry.id(),
                icon = ctx.icon(inquiry.icon(), inquiry.label(), inquiry.icon_fallback(), "w-6 h-6"),
                label = escape(inquiry.label()),
                description = escape(inquiry.description()),
            )
        })
        .collect();

    format!(
        r#"<h3 class="text-2xl font-display text-white mb-6">How can we help you?</h3>
        <p class="text-gray-300 mb-8">Select the service you're interested in:</p>
        <form action="/contact/select" method="post" hx-post="/contact/select" {HX_TARGET} class="grid md:grid-cols-2 gap-4">{kept}{options}</form>"#,
        kept = draft_fields(draft),
    )
}

fn text_field(
    name: &str,
    label: &str,
    input_type: &str,
    value: &str,
    placeholder: &str,
    required: bool,
) -> String {
    let required = if required { " required" } else { "" };
    format!(
        r#"<div><label for="{name}" class="block text-white mb-2">{label}</label><input id="{name}" name="{name}" type="{input_type}" value="{value}" placeholder="{placeholder}" class="{INPUT_CLASSES}"{required}></div>"#,
        value = escape(value),
    )
}

fn details_step(
    ctx: &RenderContext<'_>,
    inquiry: InquiryType,
    draft: &ContactSubmission,
    errors: &[String],
) -> String {
    // Submits the typed fields to /contact/back so they survive the round trip.
    let back = format!(
        r#"<button type="submit" formaction="/contact/back" formmethod="get" formnovalidate hx-get="/contact/back" hx-include="closest form" {HX_TARGET} class="inline-flex items-center gap-1 text-accent text-sm hover:underline">{icon}<span>Back</span></button>"#,
        icon = chevron_left_icon(""),
    );

    let error_list = if errors.is_empty() {
        String::new()
    } else {
        let items: String = errors
            .iter()
            .map(|e| format!("<li>{}</li>", escape(e)))
            .collect();
        format!(
            r#"<ul class="form-errors mb-6 p-4 rounded-lg border border-red-400/40 bg-red-500/10 text-red-200 text-sm list-disc list-inside" role="alert">{items}</ul>"#
        )
    };

    let submit = button(
        "submit",
        "Send Message",
        ButtonVariant::Primary,
        ButtonSize::Md,
        "",
    );

    format!(
        r#"<h3 class="text-2xl font-display text-white mb-6">Your Contact Information</h3>
        <div class="flex items-center gap-3 mb-6 text-gray-300"><span class="w-8 h-8 rounded-lg bg-accent/10 flex items-center justify-center">{icon}</span><span>{label}</span></div>
        {error_list}
        <form name="{form_name}" action="/contact" method="post" hx-post="/contact" {HX_TARGET} class="space-y-6">
            <input type="hidden" name="form-name" value="{form_name}">
            <input type="hidden" name="inquiryType" value="{id}">
            <p class="hidden"><label>Don't fill this out: <input name="bot-field" tabindex="-1" autocomplete="off"></label></p>
            <div class="grid md:grid-cols-2 gap-6">
                {name}{company}{email}{phone}
            </div>
            <div><label for="message" class="block text-white mb-2">Tell us about your needs</label><textarea id="message" name="message" rows="4" placeholder="Share details about your logistics requirements" class="{INPUT_CLASSES} resize-none" required>{message}</textarea></div>
            <div id="contact-notice" aria-live="polite"></div>
            <div class="flex items-center justify-between">{back}{submit}</div>
        </form>"#,
        icon = ctx.icon(inquiry.icon(), inquiry.label(), inquiry.icon_fallback(), "w-5 h-5"),
        label = escape(inquiry.label()),
        form_name = escape(ctx.form_name),
        id = inquiry.id(),
        name = text_field("name", "Name", "text", &draft.name, "Your name", true),
        company = text_field("company", "Company", "text", &draft.company, "Your company", true),
        email = text_field("email", "Email", "email", &draft.email, "Your email", true),
        phone = text_field("phone", "Phone", "tel", &draft.phone, "Your phone", false),
        message = escape(&draft.message),
    )
}

fn sent_step() -> String {
    format!(
        r#"<div class="text-center py-10">
            <div class="w-20 h-20 bg-accent/20 rounded-full flex items-center justify-center mx-auto mb-6">{check}</div>
            <h3 class="text-2xl font-display text-white mb-4">Thank You!</h3>
            <p class="text-gray-300 mb-8 max-w-md mx-auto">Your message has been received. One of our logistics experts will contact you within 24 hours to discuss your requirements.</p>
            <a href="/contact/step/select" hx-get="/contact/step/select" {HX_TARGET} class="inline-block text-accent border border-accent/30 hover:bg-accent/10 px-6 py-2 rounded-lg transition-all duration-300">Send Another Inquiry</a>
        </div>"#,
        check = check_icon("w-10 h-10 text-accent"),
    )
}

/// The wizard in its current step. Returned on its own for htmx requests.
pub fn wizard(ctx: &RenderContext<'_>, view: &WizardView) -> String {
    let step = view.flow.step();
    let body = match (step, view.flow.selected()) {
        (ContactStep::ContactDetails, Some(inquiry)) => {
            details_step(ctx, inquiry, &view.draft, &view.errors)
        }
        (ContactStep::Sent, _) => sent_step(),
        // A details step without a selection cannot be rendered; show step 1.
        (_, selected) => select_step(ctx, selected, &view.draft),
    };

    format!(
        r#"<div id="contact-wizard" data-step="{n}">{indicator}{body}</div>"#,
        n = step.number(),
        indicator = step_indicator(step),
    )
}

fn location_reveal() -> RevealConfig {
    RevealConfig::default()
        .with_amount(20.0)
        .with_duration(0.5)
        .with_threshold(Threshold {
            element: 0.0,
            viewport: 1.0,
            offset_px: 0.0,
        })
}

fn locations() -> String {
    let config = location_reveal();
    let item = reveal_item(&config);
    let cards: String = LOCATIONS
        .iter()
        .map(|location| {
            let email = if location.email.is_empty() {
                String::new()
            } else {
                format!(
                    r#"<div class="flex items-center">{icon}<span class="text-gray-300 text-sm">{email}</span></div>"#,
                    icon = mail_icon("text-accent mr-2"),
                    email = escape(location.email),
                )
            };
            card(
                "rounded-xl p-6",
                &item,
                &format!(
                    r#"<h4 class="text-xl font-display text-white mb-2">{city}, {state}</h4><p class="text-gray-400 text-sm mb-4">{address}</p><div class="space-y-2"><div class="flex items-center">{icon}<a href="{tel}" class="text-gray-300 text-sm hover:text-white">{phone}</a></div>{email}</div>"#,
                    city = escape(location.city),
                    state = escape(location.state),
                    address = escape(location.address),
                    icon = phone_icon("text-accent mr-2"),
                    tel = tel_link(location.phone),
                    phone = escape(location.phone),
                ),
            )
        })
        .collect();

    format!(
        r#"<div class="md:col-span-2 grid md:grid-cols-2 gap-6" {container}>
            <h3 class="text-2xl font-display text-white mb-4 md:col-span-2">Our Locations</h3>
            {cards}
        </div>"#,
        container = reveal_container(&config),
    )
}

fn quick_connect(ctx: &RenderContext<'_>) -> String {
    let link = |href: &str, icon: String, caption: &str, value: &str| {
        format!(
            r#"<a href="{href}" class="flex items-center p-4 bg-white/5 backdrop-blur-sm border border-white/10 rounded-xl hover:bg-white/10 transition-all duration-300"><div class="w-10 h-10 rounded-full bg-accent/20 flex items-center justify-center mr-4">{icon}</div><div><div class="text-sm text-gray-400">{caption}</div><div class="text-white">{value}</div></div></a>"#,
            href = escape(href),
            value = escape(value),
        )
    };

    let mut links = link(
        &tel_link(&ctx.site.phone),
        phone_icon("text-accent"),
        "Call Dispatch",
        &ctx.site.phone,
    );
    if !ctx.site.email.is_empty() {
        links.push_str(&link(
            &mailto_link(&ctx.site.email, MAIL_SUBJECT),
            mail_icon("text-accent"),
            "Email Us",
            &ctx.site.email,
        ));
    }

    format!(
        r#"<div>
            <h3 class="text-2xl font-display text-white mb-4">Quick Connect</h3>
            <div class="space-y-4">{links}</div>
        </div>"#
    )
}

/// Contact section: heading, wizard, offices and quick links.
pub fn contact(ctx: &RenderContext<'_>, view: &WizardView) -> String {
    format!(
        r#"<section id="contact" class="py-24 md:py-32 bg-gradient-to-b from-primary to-primary-dark relative overflow-hidden">
    <div class="max-w-7xl mx-auto px-4 sm:px-6 relative z-10">
        <div class="mb-16 md:mb-20 max-w-3xl mx-auto text-center">
            {eyebrow}
            <h2 class="text-4xl sm:text-5xl md:text-6xl font-display text-white mb-6">Transform Your Supply Chain</h2>
            <p class="text-xl text-gray-300">Our team of logistics experts and technology specialists are ready to help you build a more resilient, efficient supply chain that drives growth for your brand.</p>
        </div>
        <div class="max-w-4xl mx-auto bg-white/5 backdrop-blur-sm border border-white/10 rounded-2xl p-8 md:p-10 mb-16">
            {wizard}
        </div>
        <div class="grid md:grid-cols-3 gap-8">
            {locations}
            {quick_connect}
        </div>
    </div>
</section>
"#,
        eyebrow = badge("LET'S CONNECT", BadgeVariant::Pill),
        wizard = wizard(ctx, view),
        locations = locations(),
        quick_connect = quick_connect(ctx),
    )
}
