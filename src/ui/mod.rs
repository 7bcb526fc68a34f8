//! Server-rendered page and contact wizard fragments.
//!
//! Everything renders to `String`; handlers wrap the result in `Html`.
//!
//! # Structure
//!
//! - [`page`]: document shell and the full landing page
//! - [`sections`]: one module per page section, plus the wizard fragments
//! - [`components`]: reusable markup (buttons, cards, badges, icons)
//! - [`html`]: escaping and reveal/parallax attribute helpers

pub mod components;
pub mod html;
pub mod page;
pub mod sections;

use chrono::Datelike;

use crate::assets::{AssetCatalog, render_icon};
use crate::config::SiteConfig;

/// What every section needs to render.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub assets: &'a AssetCatalog,
    pub site: &'a SiteConfig,
    /// Value of the hidden `form-name` field.
    pub form_name: &'a str,
    /// Copyright year in the footer.
    pub year: i32,
}

impl<'a> RenderContext<'a> {
    pub fn new(assets: &'a AssetCatalog, site: &'a SiteConfig, form_name: &'a str) -> Self {
        Self {
            assets,
            site,
            form_name,
            year: chrono::Local::now().year(),
        }
    }

    #[must_use]
    pub fn with_year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    /// Icon image, or its glyph when the file is not in the catalog.
    pub fn icon(&self, path: &str, alt: &str, fallback: &str, class: &str) -> String {
        render_icon(self.assets, path, alt, fallback, class)
    }
}
