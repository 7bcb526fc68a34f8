//! HTML string helpers.

use crate::reveal::{ParallaxConfig, RevealConfig};

/// Escape text for use in element content or a double-quoted attribute.
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Attributes marking a section as a reveal container.
pub fn reveal_container(config: &RevealConfig) -> String {
    format!(
        r#"data-reveal-container data-reveal="{}""#,
        escape(&config.data_attribute())
    )
}

/// Attributes for one reveal target: marker plus its pre-reveal inline style.
pub fn reveal_item(config: &RevealConfig) -> String {
    format!(
        r#"data-reveal-item style="{}""#,
        config.initial_state().to_css(config.axis)
    )
}

/// Attributes for a parallax background layer.
pub fn parallax_layer(config: &ParallaxConfig) -> String {
    format!(
        r#"data-parallax="{}""#,
        escape(&config.data_attribute())
    )
}
