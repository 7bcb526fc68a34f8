//! Scroll-triggered entrance animations.
//!
//! This module models the page's scroll-reveal behaviour as a deterministic
//! engine: section containers register their target elements, scroll
//! positions are dispatched to the registry, and each element reports the
//! visual state (opacity and translation) it should have at a given time.
//!
//! The renderer uses the same types to emit every element's initial state and
//! a `data-reveal` attribute, so the browser driver plays back the exact
//! configuration that was tested here.
//!
//! # Architecture
//!
//! - [`Ease`]: named easing curves with a documented fallback
//! - [`Threshold`]: the "element edge crosses viewport line" rule
//! - [`RevealConfig`]: per-section animation options
//! - [`ObserverRegistry`]: live registrations, one-shot/replay firing, teardown
//! - [`ParallaxTracker`]: continuous background translation
//!
//! # Example
//!
//! ```rust
//! use noerr_site::reveal::{
//!     Container, ObserverRegistry, Rect, RevealConfig, RevealEvent, RevealTarget, Viewport,
//! };
//!
//! let registry = ObserverRegistry::new();
//! let section = Container::attached("services", Rect::new(0.0, 1000.0, 1200.0, 800.0));
//! let cards = vec![RevealTarget::new("card-0", Rect::new(0.0, 1100.0, 300.0, 200.0))];
//!
//! let _handle = registry
//!     .mount(&section, cards, RevealConfig::default())
//!     .expect("attached container with targets registers");
//!
//! let frame = registry.dispatch(Viewport::new(600.0, 800.0), 0.0);
//! assert!(matches!(frame.events[0], RevealEvent::Fired { .. }));
//! ```

mod config;
mod easing;
mod geometry;
mod parallax;
mod registry;
mod threshold;

pub use config::{Axis, PlayMode, RevealConfig, RevealOptions, TriggerScope, VisualState};
pub use easing::{Ease, EaseDirection};
pub use geometry::{Rect, Viewport};
pub use parallax::{ParallaxConfig, ParallaxTracker, parallax_progress, parallax_progress_from};
pub use registry::{
    Container, ObserverRegistry, ParallaxUpdate, RevealEvent, RevealHandle, RevealTarget,
    ScrollFrame,
};
pub use threshold::Threshold;

/// Errors produced while parsing animation configuration.
///
/// Callers that render pages never see these: [`RevealConfig::from_options`]
/// replaces malformed values with documented defaults.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RevealError {
    /// The threshold string could not be parsed.
    #[error("invalid threshold `{0}`")]
    InvalidThreshold(String),
    /// The easing name is not recognized.
    #[error("unknown easing curve `{0}`")]
    UnknownEase(String),
}
