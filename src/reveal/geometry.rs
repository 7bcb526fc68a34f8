//! Document-space geometry used by thresholds and parallax.

use serde::{Deserialize, Serialize};

/// Bounding box of an element in document coordinates (pixels).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Vertical position of a point `fraction` of the way down the box.
    #[must_use]
    pub fn at_fraction(&self, fraction: f64) -> f64 {
        self.top + self.height * fraction
    }
}

/// The visible window onto the document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Current vertical scroll offset.
    pub scroll_y: f64,
    /// Viewport height.
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub const fn new(scroll_y: f64, height: f64) -> Self {
        Self { scroll_y, height }
    }
}
