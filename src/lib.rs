//! Noerr logistics marketing site.
//!
//! A server-rendered single page for a third-party logistics provider: scroll
//! reveal and parallax effects driven by `data-*` attributes, and a three-step
//! contact wizard swapped in place with htmx.
//!
//! # Architecture
//!
//! - **Server**: Axum routes for the page and the wizard fragments
//! - **Reveal engine**: threshold/easing model shared by the renderer and tests
//! - **Contact**: wizard state machine, validation, fire-and-forget forwarding
//! - **UI**: HTML rendered to strings, HTMX for partial updates
//!
//! # Modules
//!
//! - [`reveal`]: scroll-triggered entrance animation and parallax
//! - [`contact`]: inquiry categories, wizard flow, form delivery
//! - [`assets`]: static asset catalog and icon fallback
//! - [`content`]: site copy and deep links
//! - [`ui`]: page sections and wizard fragments
//! - [`server`]: router, handlers, middleware

// Allow pedantic clippy warnings that don't add value for this codebase
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::missing_fields_in_debug)]
#![allow(clippy::implicit_hasher)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::unused_async)]
#![allow(clippy::too_many_lines)]

pub mod assets;
pub mod config;
pub mod contact;
pub mod content;
pub mod rate_limit;
pub mod reveal;
pub mod server;
pub mod ui;

use crate::assets::AssetCatalog;
use crate::config::AppConfig;
use crate::contact::FormSink;
use crate::rate_limit::SimpleRateLimiter;
use crate::ui::RenderContext;

use std::fmt;
use std::sync::Arc;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Global configuration.
    pub config: Arc<AppConfig>,
    /// Files available under the static directory, indexed at startup.
    pub assets: Arc<AssetCatalog>,
    /// Where valid contact submissions are forwarded.
    pub sink: Arc<dyn FormSink>,
    /// Bucket guarding `POST /contact`.
    pub rate_limiter: Arc<SimpleRateLimiter>,
}

impl AppState {
    /// Index the static directory and size the rate limiter from `config`.
    pub fn new(config: Arc<AppConfig>, sink: Arc<dyn FormSink>) -> Self {
        let assets = Arc::new(AssetCatalog::scan(&config.site.static_dir));
        let rate_limiter = Arc::new(SimpleRateLimiter::new(
            config.limits.contact_per_second,
            config.limits.contact_burst,
        ));
        Self {
            config,
            assets,
            sink,
            rate_limiter,
        }
    }

    pub fn render_context(&self) -> RenderContext<'_> {
        RenderContext::new(&self.assets, &self.config.site, &self.config.forms.form_name)
    }
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState")
            .field("assets", &self.assets.len())
            .field("sink", &self.sink.describe())
            .finish_non_exhaustive()
    }
}
