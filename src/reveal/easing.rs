//! Easing curves.
//!
//! Names follow the GSAP vocabulary used by the page sections
//! (`power2.out`, `sine.inOut`, ...), plus CSS keywords and explicit
//! `cubic-bezier(x1, y1, x2, y2)` curves.

use std::f64::consts::PI;
use std::fmt;

use super::RevealError;

/// Direction of a named easing family.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EaseDirection {
    In,
    Out,
    InOut,
}

impl EaseDirection {
    fn suffix(self) -> &'static str {
        match self {
            Self::In => "in",
            Self::Out => "out",
            Self::InOut => "inOut",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "in" => Some(Self::In),
            "out" => Some(Self::Out),
            "inOut" | "inout" => Some(Self::InOut),
            _ => None,
        }
    }
}

/// An easing curve mapping linear progress in `[0, 1]` to eased progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Ease {
    /// No easing (`none`, `linear`).
    Linear,
    /// Polynomial family: `power1` (quad) through `power4` (quint).
    Power { degree: u8, direction: EaseDirection },
    /// Sinusoidal family.
    Sine(EaseDirection),
    /// Exponential deceleration.
    ExpoOut,
    /// CSS-style cubic Bézier with fixed end points (0,0) and (1,1).
    CubicBezier { x1: f64, y1: f64, x2: f64, y2: f64 },
}

impl Default for Ease {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Ease {
    /// Curve used whenever a configured name is not recognized.
    pub const DEFAULT: Self = Self::Power {
        degree: 2,
        direction: EaseDirection::Out,
    };

    /// Parse an easing name, falling back to [`Ease::DEFAULT`].
    pub fn parse(name: &str) -> Self {
        match Self::try_parse(name) {
            Ok(ease) => ease,
            Err(err) => {
                tracing::warn!(
                    name: "reveal.config.fallback",
                    error = %err,
                    fallback = %Self::DEFAULT,
                    "Unknown easing curve; using default"
                );
                Self::DEFAULT
            }
        }
    }

    /// Strict parse.
    pub fn try_parse(name: &str) -> Result<Self, RevealError> {
        let trimmed = name.trim();
        let unknown = || RevealError::UnknownEase(trimmed.to_string());

        match trimmed {
            "none" | "linear" => return Ok(Self::Linear),
            "ease" => return Ok(Self::bezier(0.25, 0.1, 0.25, 1.0)),
            "ease-in" => return Ok(Self::bezier(0.42, 0.0, 1.0, 1.0)),
            "ease-out" => return Ok(Self::bezier(0.0, 0.0, 0.58, 1.0)),
            "ease-in-out" => return Ok(Self::bezier(0.42, 0.0, 0.58, 1.0)),
            "expo.out" => return Ok(Self::ExpoOut),
            _ => {}
        }

        if let Some(args) = trimmed
            .strip_prefix("cubic-bezier(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            let points: Vec<f64> = args
                .split(',')
                .map(|p| p.trim().parse::<f64>())
                .collect::<Result<_, _>>()
                .map_err(|_| unknown())?;
            return match points.as_slice() {
                &[x1, y1, x2, y2]
                    if (0.0..=1.0).contains(&x1)
                        && (0.0..=1.0).contains(&x2)
                        && y1.is_finite()
                        && y2.is_finite() =>
                {
                    Ok(Self::bezier(x1, y1, x2, y2))
                }
                _ => Err(unknown()),
            };
        }

        let (family, direction) = match trimmed.split_once('.') {
            Some((family, dir)) => (family, EaseDirection::parse(dir).ok_or_else(unknown)?),
            // GSAP treats a bare family name as `.out`.
            None => (trimmed, EaseDirection::Out),
        };

        match family {
            "power0" => Ok(Self::Linear),
            "power1" | "power2" | "power3" | "power4" => {
                let degree = family.as_bytes()[5] - b'0';
                Ok(Self::Power { degree, direction })
            }
            "sine" => Ok(Self::Sine(direction)),
            _ => Err(unknown()),
        }
    }

    const fn bezier(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::CubicBezier { x1, y1, x2, y2 }
    }

    /// Map linear progress to eased progress. Input is clamped to `[0, 1]`.
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::Power { degree, direction } => {
                let exp = i32::from(degree) + 1;
                let ease_in = |x: f64| x.powi(exp);
                directed(direction, t, ease_in)
            }
            Self::Sine(direction) => directed(direction, t, |x| 1.0 - (x * PI / 2.0).cos()),
            Self::ExpoOut => {
                if t >= 1.0 {
                    1.0
                } else {
                    1.0 - 2f64.powf(-10.0 * t)
                }
            }
            Self::CubicBezier { x1, y1, x2, y2 } => cubic_bezier(x1, y1, x2, y2, t),
        }
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Linear => f.write_str("none"),
            Self::Power { degree, direction } => {
                write!(f, "power{degree}.{}", direction.suffix())
            }
            Self::Sine(direction) => write!(f, "sine.{}", direction.suffix()),
            Self::ExpoOut => f.write_str("expo.out"),
            Self::CubicBezier { x1, y1, x2, y2 } => {
                write!(f, "cubic-bezier({x1},{y1},{x2},{y2})")
            }
        }
    }
}

/// Build out/inOut variants from an "in" curve.
fn directed(direction: EaseDirection, t: f64, ease_in: impl Fn(f64) -> f64) -> f64 {
    match direction {
        EaseDirection::In => ease_in(t),
        EaseDirection::Out => 1.0 - ease_in(1.0 - t),
        EaseDirection::InOut => {
            if t < 0.5 {
                ease_in(t * 2.0) / 2.0
            } else {
                1.0 - ease_in((1.0 - t) * 2.0) / 2.0
            }
        }
    }
}

fn cubic_bezier(x1: f64, y1: f64, x2: f64, y2: f64, t: f64) -> f64 {
    // B(s) = 3(1-s)^2 s p1 + 3(1-s) s^2 p2 + s^3
    let sample = |s: f64, p1: f64, p2: f64| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * p1 + 3.0 * inv * s * s * p2 + s * s * s
    };
    let slope = |s: f64, p1: f64, p2: f64| {
        let inv = 1.0 - s;
        3.0 * inv * inv * p1 + 6.0 * inv * s * (p2 - p1) + 3.0 * s * s * (1.0 - p2)
    };

    // Newton first, bisection if the slope is too flat to trust.
    let mut s = t;
    for _ in 0..8 {
        let err = sample(s, x1, x2) - t;
        if err.abs() < 1e-7 {
            return sample(s, y1, y2);
        }
        let d = slope(s, x1, x2);
        if d.abs() < 1e-6 {
            break;
        }
        s = (s - err / d).clamp(0.0, 1.0);
    }

    let (mut lo, mut hi) = (0.0, 1.0);
    s = t;
    for _ in 0..50 {
        let x = sample(s, x1, x2);
        if (x - t).abs() < 1e-7 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }
    sample(s, y1, y2)
}
