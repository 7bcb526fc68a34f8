//! Per-section reveal configuration.

use serde::{Deserialize, Serialize};

use super::easing::Ease;
use super::threshold::Threshold;

/// Axis the element translates along while revealing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    X,
    #[default]
    Y,
}

impl Axis {
    fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "x" | "X" => Some(Self::X),
            "y" | "Y" => Some(Self::Y),
            _ => None,
        }
    }

    fn css_function(self) -> &'static str {
        match self {
            Self::X => "translateX",
            Self::Y => "translateY",
        }
    }
}

/// Whether an element animates once per mount or on every entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayMode {
    /// Fire on the first crossing, then never revert or re-fire.
    #[default]
    Once,
    /// Play on each entry, reverse when scrolled back above the threshold.
    Replay,
}

/// What has to cross the threshold for an element to fire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TriggerScope {
    /// Every target is tracked against its own bounding box.
    #[default]
    Each,
    /// The container crossing fires all targets at once, staggered by index.
    Container,
}

impl TriggerScope {
    fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "each" => Some(Self::Each),
            "container" => Some(Self::Container),
            _ => None,
        }
    }
}

/// Loosely-typed options as they appear in section definitions or JSON.
///
/// Every field is optional; [`RevealConfig::from_options`] resolves them and
/// never fails.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RevealOptions {
    pub direction: Option<String>,
    pub amount: Option<f64>,
    pub duration: Option<f64>,
    pub stagger: Option<f64>,
    pub threshold: Option<String>,
    pub ease: Option<String>,
    pub once: Option<bool>,
    pub scope: Option<String>,
}

/// Fully-resolved reveal configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealConfig {
    pub axis: Axis,
    /// Starting offset in pixels along `axis`.
    pub amount: f64,
    /// Tween duration in seconds.
    pub duration: f64,
    /// Delay per element index, in seconds.
    pub stagger: f64,
    pub threshold: Threshold,
    pub ease: Ease,
    pub mode: PlayMode,
    pub scope: TriggerScope,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            axis: Axis::Y,
            amount: 30.0,
            duration: 0.8,
            stagger: 0.1,
            threshold: Threshold::default(),
            ease: Ease::DEFAULT,
            mode: PlayMode::Once,
            scope: TriggerScope::Each,
        }
    }
}

impl RevealConfig {
    /// Resolve options, replacing anything malformed with the default value.
    pub fn from_options(options: &RevealOptions) -> Self {
        let defaults = Self::default();

        let axis = options
            .direction
            .as_deref()
            .map_or(defaults.axis, |d| {
                Axis::parse(d).unwrap_or_else(|| {
                    fallback("direction", d);
                    defaults.axis
                })
            });

        let threshold = options
            .threshold
            .as_deref()
            .map_or(defaults.threshold, |t| {
                Threshold::parse(t).unwrap_or_else(|_| {
                    fallback("threshold", t);
                    defaults.threshold
                })
            });

        let scope = options
            .scope
            .as_deref()
            .map_or(defaults.scope, |s| {
                TriggerScope::parse(s).unwrap_or_else(|| {
                    fallback("scope", s);
                    defaults.scope
                })
            });

        Self {
            axis,
            amount: finite_or("amount", options.amount, defaults.amount),
            duration: non_negative_or("duration", options.duration, defaults.duration),
            stagger: non_negative_or("stagger", options.stagger, defaults.stagger),
            threshold,
            ease: options.ease.as_deref().map_or(defaults.ease, Ease::parse),
            mode: match options.once {
                Some(false) => PlayMode::Replay,
                _ => PlayMode::Once,
            },
            scope,
        }
    }

    #[must_use]
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axis = axis;
        self
    }

    #[must_use]
    pub fn with_amount(mut self, amount: f64) -> Self {
        self.amount = amount;
        self
    }

    #[must_use]
    pub fn with_duration(mut self, duration: f64) -> Self {
        self.duration = duration;
        self
    }

    #[must_use]
    pub fn with_stagger(mut self, stagger: f64) -> Self {
        self.stagger = stagger;
        self
    }

    #[must_use]
    pub fn with_threshold(mut self, threshold: Threshold) -> Self {
        self.threshold = threshold;
        self
    }

    #[must_use]
    pub fn with_ease(mut self, ease: Ease) -> Self {
        self.ease = ease;
        self
    }

    #[must_use]
    pub fn with_mode(mut self, mode: PlayMode) -> Self {
        self.mode = mode;
        self
    }

    #[must_use]
    pub fn with_scope(mut self, scope: TriggerScope) -> Self {
        self.scope = scope;
        self
    }

    /// Start delay for the element at `index`.
    #[must_use]
    pub fn delay_for(&self, index: usize) -> f64 {
        #[allow(clippy::cast_precision_loss)]
        let index = index as f64;
        index * self.stagger
    }

    /// State every target is rendered in before its threshold is crossed.
    #[must_use]
    pub fn initial_state(&self) -> VisualState {
        VisualState::hidden(self)
    }

    /// JSON payload for the `data-reveal` attribute read by the browser driver.
    #[must_use]
    pub fn data_attribute(&self) -> String {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct ClientConfig<'a> {
            axis: Axis,
            amount: f64,
            duration: f64,
            stagger: f64,
            threshold: &'a Threshold,
            ease: String,
            mode: PlayMode,
            scope: TriggerScope,
        }

        let client = ClientConfig {
            axis: self.axis,
            amount: self.amount,
            duration: self.duration,
            stagger: self.stagger,
            threshold: &self.threshold,
            ease: self.ease.to_string(),
            mode: self.mode,
            scope: self.scope,
        };
        // Only plain numbers and strings; serialization cannot fail.
        serde_json::to_string(&client).unwrap_or_default()
    }
}

fn fallback(field: &str, value: &str) {
    tracing::warn!(
        name: "reveal.config.fallback",
        field,
        value,
        "Invalid reveal option; using default"
    );
}

fn finite_or(field: &str, value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        Some(v) => {
            fallback(field, &v.to_string());
            default
        }
        None => default,
    }
}

fn non_negative_or(field: &str, value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v.is_finite() && v >= 0.0 => v,
        Some(v) => {
            fallback(field, &v.to_string());
            default
        }
        None => default,
    }
}

/// Opacity and translation of a revealed element.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisualState {
    pub opacity: f64,
    /// Translation along the configured axis, in pixels.
    pub offset: f64,
}

impl VisualState {
    /// Offset and transparent.
    #[must_use]
    pub fn hidden(config: &RevealConfig) -> Self {
        Self {
            opacity: 0.0,
            offset: config.amount,
        }
    }

    /// Identity position and opaque.
    #[must_use]
    pub fn shown() -> Self {
        Self {
            opacity: 1.0,
            offset: 0.0,
        }
    }

    /// State at eased progress `p` between hidden (0) and shown (1).
    #[must_use]
    pub fn at_progress(config: &RevealConfig, p: f64) -> Self {
        Self {
            opacity: p,
            offset: config.amount * (1.0 - p),
        }
    }

    /// Inline style for server-rendered markup.
    #[must_use]
    pub fn to_css(&self, axis: Axis) -> String {
        format!(
            "opacity:{};transform:{}({}px)",
            self.opacity,
            axis.css_function(),
            self.offset
        )
    }
}
