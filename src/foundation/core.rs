use std::fmt;

pub use kurbo::Vec2;

/// Identifier of the root scope that owns the shared blur filter.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ScopeId(pub String);

impl ScopeId {
    /// Scope name hosts map to their primary content container.
    pub const DOCUMENT: &'static str = "document";

    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The host document's primary content container.
    pub fn document() -> Self {
        Self(Self::DOCUMENT.to_owned())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ScopeId {
    fn default() -> Self {
        Self::document()
    }
}

impl fmt::Display for ScopeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Per-axis Gaussian blur radius, in whole pixels.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct BlurRadius {
    pub x: u32,
    pub y: u32,
}

impl BlurRadius {
    pub const ZERO: Self = Self { x: 0, y: 0 };

    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    pub fn is_zero(self) -> bool {
        self == Self::ZERO
    }

    /// Value of the `stdDeviation` attribute: `"<x> <y>"`.
    pub fn std_deviation(self) -> String {
        format!("{} {}", self.x, self.y)
    }
}

impl fmt::Display for BlurRadius {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.x, self.y)
    }
}

/// Round to the nearest integer, with halves going towards positive infinity.
pub fn round_half_up(v: f64) -> f64 {
    (v + 0.5).floor()
}

/// Snap both axes to the nearest whole pixel.
pub fn snap_to_pixel(v: Vec2) -> Vec2 {
    Vec2::new(round_half_up(v.x), round_half_up(v.y))
}
