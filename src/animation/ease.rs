//! Easing table.
//!
//! Every entry maps normalized time to normalized progress. Inputs are not clamped: the
//! driver feeds the raw elapsed fraction, and the back/elastic families leave `[0, 1]` on
//! purpose.

use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

use crate::animation::linearize::{LinearCurve, linearize};
use crate::foundation::error::{MotionError, MotionResult};

/// Signature shared by every easing function.
pub type EasingFn = fn(f64) -> f64;

const BACK_C1: f64 = 1.70158;
const BACK_C2: f64 = BACK_C1 * 1.525;
const BACK_C3: f64 = BACK_C1 + 1.0;
const ELASTIC_C4: f64 = (2.0 * PI) / 3.0;
const ELASTIC_C5: f64 = (2.0 * PI) / 4.5;
const BOUNCE_N1: f64 = 7.5625;
const BOUNCE_D1: f64 = 2.75;

/// Named easing function, addressed by its table key (`"easeOutExpo"`, ...).
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub enum Ease {
    Linear,
    /// Alias of [`Ease::InQuad`].
    In,
    /// Alias of [`Ease::OutQuad`].
    Out,
    /// Alias of [`Ease::InOutQuad`].
    InOut,
    InSine,
    OutSine,
    InOutSine,
    InCubic,
    OutCubic,
    InOutCubic,
    InQuint,
    OutQuint,
    InOutQuint,
    InQuad,
    OutQuad,
    InOutQuad,
    InQuart,
    OutQuart,
    InOutQuart,
    InExpo,
    #[default]
    OutExpo,
    InOutExpo,
    InCirc,
    OutCirc,
    InOutCirc,
    InBack,
    OutBack,
    InOutBack,
    InElastic,
    OutElastic,
    InOutElastic,
    InBounce,
    OutBounce,
    InOutBounce,
}

impl Ease {
    pub const ALL: [Ease; 34] = [
        Self::Linear,
        Self::In,
        Self::Out,
        Self::InOut,
        Self::InSine,
        Self::OutSine,
        Self::InOutSine,
        Self::InCubic,
        Self::OutCubic,
        Self::InOutCubic,
        Self::InQuint,
        Self::OutQuint,
        Self::InOutQuint,
        Self::InQuad,
        Self::OutQuad,
        Self::InOutQuad,
        Self::InQuart,
        Self::OutQuart,
        Self::InOutQuart,
        Self::InExpo,
        Self::OutExpo,
        Self::InOutExpo,
        Self::InCirc,
        Self::OutCirc,
        Self::InOutCirc,
        Self::InBack,
        Self::OutBack,
        Self::InOutBack,
        Self::InElastic,
        Self::OutElastic,
        Self::InOutElastic,
        Self::InBounce,
        Self::OutBounce,
        Self::InOutBounce,
    ];

    /// Table key of this easing.
    pub fn name(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::In => "easeIn",
            Self::Out => "easeOut",
            Self::InOut => "easeInOut",
            Self::InSine => "easeInSine",
            Self::OutSine => "easeOutSine",
            Self::InOutSine => "easeInOutSine",
            Self::InCubic => "easeInCubic",
            Self::OutCubic => "easeOutCubic",
            Self::InOutCubic => "easeInOutCubic",
            Self::InQuint => "easeInQuint",
            Self::OutQuint => "easeOutQuint",
            Self::InOutQuint => "easeInOutQuint",
            Self::InQuad => "easeInQuad",
            Self::OutQuad => "easeOutQuad",
            Self::InOutQuad => "easeInOutQuad",
            Self::InQuart => "easeInQuart",
            Self::OutQuart => "easeOutQuart",
            Self::InOutQuart => "easeInOutQuart",
            Self::InExpo => "easeInExpo",
            Self::OutExpo => "easeOutExpo",
            Self::InOutExpo => "easeInOutExpo",
            Self::InCirc => "easeInCirc",
            Self::OutCirc => "easeOutCirc",
            Self::InOutCirc => "easeInOutCirc",
            Self::InBack => "easeInBack",
            Self::OutBack => "easeOutBack",
            Self::InOutBack => "easeInOutBack",
            Self::InElastic => "easeInElastic",
            Self::OutElastic => "easeOutElastic",
            Self::InOutElastic => "easeInOutElastic",
            Self::InBounce => "easeInBounce",
            Self::OutBounce => "easeOutBounce",
            Self::InOutBounce => "easeInOutBounce",
        }
    }

    /// Look up an easing by table key.
    pub fn from_name(name: &str) -> MotionResult<Self> {
        Self::ALL
            .into_iter()
            .find(|e| e.name() == name)
            .ok_or_else(|| MotionError::unknown_easing(name))
    }

    /// Plain function pointer for this easing.
    pub fn function(self) -> EasingFn {
        match self {
            Self::Linear => linear,
            Self::In | Self::InQuad => ease_in_quad,
            Self::Out | Self::OutQuad => ease_out_quad,
            Self::InOut | Self::InOutQuad => ease_in_out_quad,
            Self::InSine => ease_in_sine,
            Self::OutSine => ease_out_sine,
            Self::InOutSine => ease_in_out_sine,
            Self::InCubic => ease_in_cubic,
            Self::OutCubic => ease_out_cubic,
            Self::InOutCubic => ease_in_out_cubic,
            Self::InQuint => ease_in_quint,
            Self::OutQuint => ease_out_quint,
            Self::InOutQuint => ease_in_out_quint,
            Self::InQuart => ease_in_quart,
            Self::OutQuart => ease_out_quart,
            Self::InOutQuart => ease_in_out_quart,
            Self::InExpo => ease_in_expo,
            Self::OutExpo => ease_out_expo,
            Self::InOutExpo => ease_in_out_expo,
            Self::InCirc => ease_in_circ,
            Self::OutCirc => ease_out_circ,
            Self::InOutCirc => ease_in_out_circ,
            Self::InBack => ease_in_back,
            Self::OutBack => ease_out_back,
            Self::InOutBack => ease_in_out_back,
            Self::InElastic => ease_in_elastic,
            Self::OutElastic => ease_out_elastic,
            Self::InOutElastic => ease_in_out_elastic,
            Self::InBounce => ease_in_bounce,
            Self::OutBounce => ease_out_bounce,
            Self::InOutBounce => ease_in_out_bounce,
        }
    }

    /// Apply this easing to normalized time `t`.
    pub fn apply(self, t: f64) -> f64 {
        (self.function())(t)
    }

    /// `true` for families that overshoot `[0, 1]` between the endpoints.
    pub fn overshoots(self) -> bool {
        matches!(
            self,
            Self::InBack
                | Self::OutBack
                | Self::InOutBack
                | Self::InElastic
                | Self::OutElastic
                | Self::InOutElastic
        )
    }

    /// Sample this easing into a piecewise-linear curve with `points` segments.
    pub fn linearize(self, points: usize) -> LinearCurve {
        linearize(self.function(), points)
    }
}

impl fmt::Display for Ease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Ease {
    type Err = MotionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl TryFrom<String> for Ease {
    type Error = MotionError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_name(&value)
    }
}

impl From<Ease> for String {
    fn from(value: Ease) -> Self {
        value.name().to_owned()
    }
}

pub fn linear(x: f64) -> f64 {
    x
}

pub fn ease_in_sine(x: f64) -> f64 {
    1.0 - ((x * PI) / 2.0).cos()
}

pub fn ease_out_sine(x: f64) -> f64 {
    ((x * PI) / 2.0).sin()
}

pub fn ease_in_out_sine(x: f64) -> f64 {
    -((PI * x).cos() - 1.0) / 2.0
}

pub fn ease_in_quad(x: f64) -> f64 {
    x * x
}

pub fn ease_out_quad(x: f64) -> f64 {
    1.0 - (1.0 - x) * (1.0 - x)
}

pub fn ease_in_out_quad(x: f64) -> f64 {
    if x < 0.5 {
        2.0 * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(2) / 2.0
    }
}

pub fn ease_in_cubic(x: f64) -> f64 {
    x * x * x
}

pub fn ease_out_cubic(x: f64) -> f64 {
    1.0 - (1.0 - x).powi(3)
}

pub fn ease_in_out_cubic(x: f64) -> f64 {
    if x < 0.5 {
        4.0 * x * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(3) / 2.0
    }
}

pub fn ease_in_quart(x: f64) -> f64 {
    x * x * x * x
}

pub fn ease_out_quart(x: f64) -> f64 {
    1.0 - (1.0 - x).powi(4)
}

pub fn ease_in_out_quart(x: f64) -> f64 {
    if x < 0.5 {
        8.0 * x * x * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(4) / 2.0
    }
}

pub fn ease_in_quint(x: f64) -> f64 {
    x * x * x * x * x
}

pub fn ease_out_quint(x: f64) -> f64 {
    1.0 - (1.0 - x).powi(5)
}

pub fn ease_in_out_quint(x: f64) -> f64 {
    if x < 0.5 {
        16.0 * x * x * x * x * x
    } else {
        1.0 - (-2.0 * x + 2.0).powi(5) / 2.0
    }
}

pub fn ease_in_expo(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else {
        2f64.powf(10.0 * x - 10.0)
    }
}

pub fn ease_out_expo(x: f64) -> f64 {
    if x == 1.0 {
        1.0
    } else {
        1.0 - 2f64.powf(-10.0 * x)
    }
}

pub fn ease_in_out_expo(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else if x == 1.0 {
        1.0
    } else if x < 0.5 {
        2f64.powf(20.0 * x - 10.0) / 2.0
    } else {
        (2.0 - 2f64.powf(-20.0 * x + 10.0)) / 2.0
    }
}

pub fn ease_in_circ(x: f64) -> f64 {
    1.0 - (1.0 - x.powi(2)).sqrt()
}

pub fn ease_out_circ(x: f64) -> f64 {
    (1.0 - (x - 1.0).powi(2)).sqrt()
}

pub fn ease_in_out_circ(x: f64) -> f64 {
    if x < 0.5 {
        (1.0 - (1.0 - (2.0 * x).powi(2)).sqrt()) / 2.0
    } else {
        ((1.0 - (-2.0 * x + 2.0).powi(2)).sqrt() + 1.0) / 2.0
    }
}

pub fn ease_in_back(x: f64) -> f64 {
    BACK_C3 * x * x * x - BACK_C1 * x * x
}

pub fn ease_out_back(x: f64) -> f64 {
    1.0 + BACK_C3 * (x - 1.0).powi(3) + BACK_C1 * (x - 1.0).powi(2)
}

pub fn ease_in_out_back(x: f64) -> f64 {
    if x < 0.5 {
        ((2.0 * x).powi(2) * ((BACK_C2 + 1.0) * 2.0 * x - BACK_C2)) / 2.0
    } else {
        ((2.0 * x - 2.0).powi(2) * ((BACK_C2 + 1.0) * (x * 2.0 - 2.0) + BACK_C2) + 2.0) / 2.0
    }
}

pub fn ease_in_elastic(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else if x == 1.0 {
        1.0
    } else {
        -(2f64.powf(10.0 * x - 10.0)) * ((x * 10.0 - 10.75) * ELASTIC_C4).sin()
    }
}

pub fn ease_out_elastic(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else if x == 1.0 {
        1.0
    } else {
        2f64.powf(-10.0 * x) * ((x * 10.0 - 0.75) * ELASTIC_C4).sin() + 1.0
    }
}

pub fn ease_in_out_elastic(x: f64) -> f64 {
    if x == 0.0 {
        0.0
    } else if x == 1.0 {
        1.0
    } else if x < 0.5 {
        -(2f64.powf(20.0 * x - 10.0) * ((20.0 * x - 11.125) * ELASTIC_C5).sin()) / 2.0
    } else {
        (2f64.powf(-20.0 * x + 10.0) * ((20.0 * x - 11.125) * ELASTIC_C5).sin()) / 2.0 + 1.0
    }
}

pub fn ease_in_bounce(x: f64) -> f64 {
    1.0 - ease_out_bounce(1.0 - x)
}

pub fn ease_out_bounce(x: f64) -> f64 {
    if x < 1.0 / BOUNCE_D1 {
        BOUNCE_N1 * x * x
    } else if x < 2.0 / BOUNCE_D1 {
        let x = x - 1.5 / BOUNCE_D1;
        BOUNCE_N1 * x * x + 0.75
    } else if x < 2.5 / BOUNCE_D1 {
        let x = x - 2.25 / BOUNCE_D1;
        BOUNCE_N1 * x * x + 0.9375
    } else {
        let x = x - 2.625 / BOUNCE_D1;
        BOUNCE_N1 * x * x + 0.984375
    }
}

pub fn ease_in_out_bounce(x: f64) -> f64 {
    if x < 0.5 {
        (1.0 - ease_out_bounce(1.0 - 2.0 * x)) / 2.0
    } else {
        (1.0 + ease_out_bounce(2.0 * x - 1.0)) / 2.0
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ease.rs"]
mod tests;
