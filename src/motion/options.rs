//! Animation options.
//!
//! [`MotionBlurOptions`] is the caller-facing record: every field optional, JSON field names
//! in camelCase. [`MotionBlurOptions::resolve`] merges it with [`DEFAULTS`] into
//! [`ResolvedOptions`], which is all the driver ever reads.

use crate::animation::ease::Ease;
use crate::foundation::core::{ScopeId, Vec2};
use crate::foundation::error::{MotionError, MotionResult};
use crate::motion::position::PositionIntent;

/// Values used for omitted options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Defaults {
    pub duration_ms: f64,
    pub x: f64,
    pub y: f64,
    pub apply_toggle: bool,
    pub easing: Ease,
    pub use_motion_blur: bool,
    pub blur_multiplier: f64,
    pub block_movement: bool,
    pub doc_root: &'static str,
}

pub const DEFAULTS: Defaults = Defaults {
    duration_ms: 1000.0,
    x: 0.0,
    y: 0.0,
    apply_toggle: false,
    easing: Ease::OutExpo,
    use_motion_blur: true,
    blur_multiplier: 1.0,
    block_movement: false,
    doc_root: ScopeId::DOCUMENT,
};

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MotionBlurOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_absolute: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_absolute: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_toggle: Option<bool>,
    /// Easing table key, checked by [`MotionBlurOptions::resolve`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub easing: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_motion_blur: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub blur_multiplier: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_movement: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub doc_root: Option<ScopeId>,
}

impl MotionBlurOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_json(json: &str) -> MotionResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn duration_ms(mut self, ms: f64) -> Self {
        self.duration_ms = Some(ms);
        self
    }

    /// Relative displacement on both axes.
    pub fn by(mut self, x: f64, y: f64) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    /// Absolute target on both axes.
    pub fn to(mut self, x: f64, y: f64) -> Self {
        self.x_absolute = Some(x);
        self.y_absolute = Some(y);
        self
    }

    pub fn toggle(mut self, on: bool) -> Self {
        self.apply_toggle = Some(on);
        self
    }

    pub fn easing(mut self, ease: Ease) -> Self {
        self.easing = Some(ease.name().to_owned());
        self
    }

    pub fn easing_name(mut self, name: impl Into<String>) -> Self {
        self.easing = Some(name.into());
        self
    }

    pub fn motion_blur(mut self, on: bool) -> Self {
        self.use_motion_blur = Some(on);
        self
    }

    pub fn blur_multiplier(mut self, multiplier: f64) -> Self {
        self.blur_multiplier = Some(multiplier);
        self
    }

    pub fn block_movement(mut self, on: bool) -> Self {
        self.block_movement = Some(on);
        self
    }

    pub fn doc_root(mut self, scope: ScopeId) -> Self {
        self.doc_root = Some(scope);
        self
    }

    /// Fill every omitted field from [`DEFAULTS`] and look up the easing.
    ///
    /// Fails on an unknown easing name or a negative (or NaN) blur multiplier.
    pub fn resolve(&self) -> MotionResult<ResolvedOptions> {
        let easing = match self.easing.as_deref() {
            Some(name) => Ease::from_name(name)?,
            None => DEFAULTS.easing,
        };
        let blur_multiplier = self.blur_multiplier.unwrap_or(DEFAULTS.blur_multiplier);
        if blur_multiplier.is_nan() || blur_multiplier < 0.0 {
            return Err(MotionError::config(format!(
                "blurMultiplier must be non-negative, got {blur_multiplier}"
            )));
        }
        let absolute = match (self.x_absolute, self.y_absolute) {
            (Some(x), Some(y)) => Some(Vec2::new(x, y)),
            _ => None,
        };

        Ok(ResolvedOptions {
            duration_ms: self.duration_ms.unwrap_or(DEFAULTS.duration_ms),
            relative: Vec2::new(
                self.x.unwrap_or(DEFAULTS.x),
                self.y.unwrap_or(DEFAULTS.y),
            ),
            absolute,
            apply_toggle: self.apply_toggle.unwrap_or(DEFAULTS.apply_toggle),
            easing,
            use_motion_blur: self.use_motion_blur.unwrap_or(DEFAULTS.use_motion_blur),
            blur_multiplier,
            block_movement: self.block_movement.unwrap_or(DEFAULTS.block_movement),
            doc_root: self
                .doc_root
                .clone()
                .unwrap_or_else(|| ScopeId::new(DEFAULTS.doc_root)),
        })
    }
}

/// Fully populated options.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct ResolvedOptions {
    pub duration_ms: f64,
    pub relative: Vec2,
    /// Present only when both absolute axes were given.
    pub absolute: Option<Vec2>,
    pub apply_toggle: bool,
    pub easing: Ease,
    pub use_motion_blur: bool,
    pub blur_multiplier: f64,
    /// Skip per-frame offset writes. The completion snap still rewrites the origin rounded
    /// to whole pixels, so a fractional start position moves by up to half a pixel.
    pub block_movement: bool,
    pub doc_root: ScopeId,
}

impl ResolvedOptions {
    pub fn position_intent(&self) -> PositionIntent {
        PositionIntent {
            relative: self.relative,
            absolute: self.absolute,
            toggle: self.apply_toggle,
        }
    }
}

impl Default for ResolvedOptions {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULTS.duration_ms,
            relative: Vec2::new(DEFAULTS.x, DEFAULTS.y),
            absolute: None,
            apply_toggle: DEFAULTS.apply_toggle,
            easing: DEFAULTS.easing,
            use_motion_blur: DEFAULTS.use_motion_blur,
            blur_multiplier: DEFAULTS.blur_multiplier,
            block_movement: DEFAULTS.block_movement,
            doc_root: ScopeId::new(DEFAULTS.doc_root),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/options.rs"]
mod tests;
