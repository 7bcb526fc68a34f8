//! The scroll position at which an element counts as "entered".

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use super::RevealError;
use super::geometry::{Rect, Viewport};

/// An "element edge crosses viewport line" rule.
///
/// Written as `"<element> <viewport>"`, e.g. `"top 80%"` or
/// `"top bottom-=50"`. A single token is a viewport position and implies the
/// element's top edge (`"60%"` is `"top 60%"`).
///
/// The element has entered once its edge is at or above the viewport line,
/// i.e. the user has scrolled far enough down.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Threshold {
    /// Point on the element, as a fraction of its height (0 = top).
    pub element: f64,
    /// Line in the viewport, as a fraction of its height (0 = top).
    pub viewport: f64,
    /// Pixel adjustment applied to the viewport line.
    pub offset_px: f64,
}

impl Default for Threshold {
    fn default() -> Self {
        Self {
            element: 0.0,
            viewport: 0.8,
            offset_px: 0.0,
        }
    }
}

impl Threshold {
    /// `"top bottom"`: the element's top meets the viewport bottom.
    pub const ENTERING: Self = Self {
        element: 0.0,
        viewport: 1.0,
        offset_px: 0.0,
    };

    pub fn parse(input: &str) -> Result<Self, RevealError> {
        let invalid = || RevealError::InvalidThreshold(input.to_string());
        let tokens: Vec<&str> = input.split_whitespace().collect();

        let (element, line) = match tokens.as_slice() {
            [line] => (0.0, *line),
            [element, line] => (parse_element(element).ok_or_else(invalid)?, *line),
            _ => return Err(invalid()),
        };
        let (viewport, offset_px) = parse_line(line).ok_or_else(invalid)?;

        Ok(Self {
            element,
            viewport,
            offset_px,
        })
    }

    /// Document-space y of the tracked point on `rect`.
    #[must_use]
    pub fn element_position(&self, rect: &Rect) -> f64 {
        rect.at_fraction(self.element)
    }

    /// Document-space y of the trigger line for `viewport`.
    #[must_use]
    pub fn line_position(&self, viewport: &Viewport) -> f64 {
        viewport.scroll_y + viewport.height * self.viewport + self.offset_px
    }

    #[must_use]
    pub fn is_crossed(&self, rect: &Rect, viewport: &Viewport) -> bool {
        self.element_position(rect) <= self.line_position(viewport)
    }
}

impl FromStr for Threshold {
    type Err = RevealError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Threshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}% {}%",
            self.element * 100.0,
            self.viewport * 100.0
        )?;
        if self.offset_px > 0.0 {
            write!(f, "+={}", self.offset_px)?;
        } else if self.offset_px < 0.0 {
            write!(f, "-={}", -self.offset_px)?;
        }
        Ok(())
    }
}

fn keyword(token: &str) -> Option<f64> {
    match token {
        "top" => Some(0.0),
        "center" => Some(0.5),
        "bottom" => Some(1.0),
        _ => None,
    }
}

fn percent(token: &str) -> Option<f64> {
    let value: f64 = token.strip_suffix('%')?.parse().ok()?;
    value.is_finite().then_some(value / 100.0)
}

fn pixels(token: &str) -> Option<f64> {
    let value: f64 = token.strip_suffix("px").unwrap_or(token).parse().ok()?;
    value.is_finite().then_some(value)
}

fn parse_element(token: &str) -> Option<f64> {
    keyword(token).or_else(|| percent(token))
}

/// Returns `(fraction, pixel offset)`.
fn parse_line(token: &str) -> Option<(f64, f64)> {
    let (base, offset) = if let Some(idx) = token.find("+=") {
        (&token[..idx], pixels(&token[idx + 2..])?)
    } else if let Some(idx) = token.find("-=") {
        (&token[..idx], -pixels(&token[idx + 2..])?)
    } else {
        (token, 0.0)
    };

    if let Some(fraction) = keyword(base).or_else(|| percent(base)) {
        return Some((fraction, offset));
    }
    // A bare pixel position measures from the viewport top.
    pixels(base).map(|px| (0.0, px + offset))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_token_implies_top_edge() {
        let t = Threshold::parse("60%").unwrap();
        assert_eq!(t.element, 0.0);
        assert!((t.viewport - 0.6).abs() < 1e-9);
        assert_eq!(t.offset_px, 0.0);
    }

    #[test]
    fn test_keywords_and_relative_offsets() {
        let t = Threshold::parse("top bottom-=50").unwrap();
        assert_eq!(t.element, 0.0);
        assert_eq!(t.viewport, 1.0);
        assert_eq!(t.offset_px, -50.0);

        let t = Threshold::parse("center center").unwrap();
        assert_eq!((t.element, t.viewport), (0.5, 0.5));

        let t = Threshold::parse("top 120px").unwrap();
        assert_eq!((t.viewport, t.offset_px), (0.0, 120.0));
    }

    #[test]
    fn test_rejects_malformed() {
        assert!(Threshold::parse("").is_err());
        assert!(Threshold::parse("top middle").is_err());
        assert!(Threshold::parse("top 80% extra").is_err());
        assert!(Threshold::parse("left 50%").is_err());
        assert!(Threshold::parse("top bottom-=abc").is_err());
    }

    #[test]
    fn test_crossing() {
        // "top 80%" on an 800px viewport: the line sits 640px below the scroll offset.
        let t = Threshold::default();
        let card = Rect::new(0.0, 1000.0, 300.0, 200.0);

        assert!(!t.is_crossed(&card, &Viewport::new(300.0, 800.0)));
        assert!(t.is_crossed(&card, &Viewport::new(360.0, 800.0)));
        assert!(t.is_crossed(&card, &Viewport::new(2000.0, 800.0)));
    }

    #[test]
    fn test_display_is_parseable() {
        let t = Threshold::parse("center bottom-=50").unwrap();
        assert_eq!(t.to_string(), "50% 100%-=50");
        assert_eq!(Threshold::parse(&t.to_string()).unwrap(), t);
    }
}
