use core::fmt;
use core::str::FromStr;

/// CSS transition timing functions understood by the carousel.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Ease {
    Linear,
    #[default]
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
}

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown timing function: {name}")]
pub struct ParseEaseError {
    pub name: alloc::string::String,
}

impl Ease {
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Ease => "ease",
            Self::EaseIn => "ease-in",
            Self::EaseOut => "ease-out",
            Self::EaseInOut => "ease-in-out",
        }
    }

    /// Control points of the equivalent `cubic-bezier(x1, y1, x2, y2)`.
    pub fn control_points(self) -> (f32, f32, f32, f32) {
        match self {
            Self::Linear => (0.0, 0.0, 1.0, 1.0),
            Self::Ease => (0.25, 0.1, 0.25, 1.0),
            Self::EaseIn => (0.42, 0.0, 1.0, 1.0),
            Self::EaseOut => (0.0, 0.0, 0.58, 1.0),
            Self::EaseInOut => (0.42, 0.0, 0.58, 1.0),
        }
    }

    /// Samples progress `t` in `[0, 1]`, for hosts that animate frame by frame.
    pub fn sample(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        if matches!(self, Self::Linear) {
            return t;
        }
        let (x1, y1, x2, y2) = self.control_points();

        // x(s) is monotonic on [0, 1] for every CSS keyword curve, so bisection converges.
        let mut lo = 0.0f32;
        let mut hi = 1.0f32;
        let mut s = t;
        for _ in 0..24 {
            let x = bezier(s, x1, x2);
            if (x - t) > -1e-5 && (x - t) < 1e-5 {
                break;
            }
            if x < t {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) * 0.5;
        }
        bezier(s, y1, y2)
    }
}

fn bezier(s: f32, p1: f32, p2: f32) -> f32 {
    let u = 1.0 - s;
    3.0 * u * u * s * p1 + 3.0 * u * s * s * p2 + s * s * s
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_css())
    }
}

impl FromStr for Ease {
    type Err = ParseEaseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "linear" => Ok(Self::Linear),
            "ease" => Ok(Self::Ease),
            "ease-in" => Ok(Self::EaseIn),
            "ease-out" => Ok(Self::EaseOut),
            "ease-in-out" => Ok(Self::EaseInOut),
            other => Err(ParseEaseError { name: other.into() }),
        }
    }
}
