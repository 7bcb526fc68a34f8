//! Continuous background parallax.
//!
//! Unlike reveals, parallax never fires: the background's translation is a
//! function of how far the container has travelled through the viewport.

use serde::Serialize;

use super::geometry::{Rect, Viewport};
use super::threshold::Threshold;

/// Parallax settings for one section background.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParallaxConfig {
    /// Translation at full progress, as a percentage of the background height.
    pub amount_percent: f64,
    /// Seconds the rendered offset lags behind the scroll position (0 = none).
    pub scrub: f64,
    /// Where progress starts. Progress always ends when the container's
    /// bottom reaches the viewport top.
    pub start: Threshold,
}

impl Default for ParallaxConfig {
    fn default() -> Self {
        Self {
            amount_percent: 15.0,
            scrub: 1.5,
            start: Threshold::ENTERING,
        }
    }
}

impl ParallaxConfig {
    #[must_use]
    pub fn new(amount_percent: f64) -> Self {
        Self {
            amount_percent,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_start(mut self, start: Threshold) -> Self {
        self.start = start;
        self
    }

    /// JSON payload for the `data-parallax` attribute.
    #[must_use]
    pub fn data_attribute(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// Progress of `rect` through the viewport, in `[0, 1]`.
///
/// 0 while the container's top is still below the viewport bottom, 1 once its
/// bottom has passed the viewport top.
#[must_use]
pub fn parallax_progress(rect: &Rect, viewport: &Viewport) -> f64 {
    parallax_progress_from(&Threshold::ENTERING, rect, viewport)
}

/// Like [`parallax_progress`], but starting when `start` is crossed.
///
/// `"top top"` suits a container already on screen at load, such as a hero.
#[must_use]
pub fn parallax_progress_from(start: &Threshold, rect: &Rect, viewport: &Viewport) -> f64 {
    // Scroll offset at which the start point meets its viewport line.
    let begin = start.element_position(rect) - viewport.height * start.viewport - start.offset_px;
    let end = rect.bottom();
    let span = end - begin;
    if span <= 0.0 {
        return if viewport.scroll_y >= end { 1.0 } else { 0.0 };
    }
    ((viewport.scroll_y - begin) / span).clamp(0.0, 1.0)
}

/// Tracks the smoothed background offset for one container.
#[derive(Debug, Clone)]
pub struct ParallaxTracker {
    config: ParallaxConfig,
    rect: Rect,
    current: f64,
    last_sample: Option<f64>,
}

impl ParallaxTracker {
    #[must_use]
    pub fn new(config: ParallaxConfig, rect: Rect) -> Self {
        Self {
            config,
            rect,
            current: 0.0,
            last_sample: None,
        }
    }

    /// Offset the scroll position asks for, ignoring scrub.
    #[must_use]
    pub fn target(&self, viewport: &Viewport) -> f64 {
        parallax_progress_from(&self.config.start, &self.rect, viewport) * self.config.amount_percent
    }

    /// Advance to time `now` (seconds) and return the rendered offset percent.
    ///
    /// With scrub enabled the offset closes ~95% of the gap to the target
    /// within `scrub` seconds.
    pub fn sample(&mut self, viewport: &Viewport, now: f64) -> f64 {
        let target = self.target(viewport);
        match self.last_sample {
            Some(last) if self.config.scrub > 0.0 => {
                let dt = (now - last).max(0.0);
                let alpha = 1.0 - (-3.0 * dt / self.config.scrub).exp();
                self.current += (target - self.current) * alpha;
            }
            _ => self.current = target,
        }
        self.last_sample = Some(now);
        self.current
    }
}
