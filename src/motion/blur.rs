//! Velocity-tracked blur.
//!
//! One filter definition per root scope, created lazily and never removed. Animations point
//! their element at it and overwrite its radius every frame, so concurrent blurred animations
//! sharing a scope see whichever radius was written last.

use crate::foundation::core::{BlurRadius, ScopeId, Vec2, round_half_up};
use crate::foundation::error::{MotionError, MotionResult};
use crate::host::{Document, FilterScope};

pub const FILTER_CONTAINER_ID: &str = "motion-blur-svg";
pub const FILTER_ID: &str = "svg-motion-blur";

/// Shared blur filter definition.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct BlurFilterDef {
    /// Id of the 1x1 `<svg>` wrapping the definition.
    pub container_id: String,
    pub filter_id: String,
    /// Filter primitive input.
    pub input: String,
    pub std_deviation: BlurRadius,
}

impl Default for BlurFilterDef {
    fn default() -> Self {
        Self {
            container_id: FILTER_CONTAINER_ID.to_owned(),
            filter_id: FILTER_ID.to_owned(),
            input: "SourceGraphic".to_owned(),
            std_deviation: BlurRadius::ZERO,
        }
    }
}

impl BlurFilterDef {
    /// Value elements use to reference this filter.
    pub fn reference(&self) -> String {
        format!("url(#{})", self.filter_id)
    }

    /// SVG markup for hosts that insert definitions as text.
    pub fn to_svg(&self) -> String {
        format!(
            concat!(
                r#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1" id="{}">"#,
                r#"<defs><filter id="{}"><feGaussianBlur in="{}" stdDeviation="{}"/></filter></defs>"#,
                "</svg>"
            ),
            self.container_id,
            self.filter_id,
            self.input,
            self.std_deviation.std_deviation(),
        )
    }
}

/// Ensure `scope` holds the blur filter and point `element` at it.
///
/// Returns `true` when the definition had to be created. Check-then-create: two animations
/// starting in the same tick on a host that defers insertion can both create one.
pub fn attach_motion_blur<D>(doc: &D, scope: &ScopeId, element: &D::Element) -> bool
where
    D: Document + FilterScope,
{
    let def = BlurFilterDef::default();
    let created = !doc.contains_id(scope, &def.container_id);
    if created {
        doc.append_filter(scope, &def);
        tracing::debug!(%scope, "created blur filter");
    }
    doc.set_filter(element, Some(&def.reference()));
    created
}

/// Per-animation blur state: the eased displacement of the previous frame.
#[derive(Clone, Debug, PartialEq)]
pub struct BlurTracker {
    scope: ScopeId,
    multiplier: f64,
    previous: Option<Vec2>,
}

impl BlurTracker {
    pub fn new(scope: ScopeId, multiplier: f64) -> Self {
        Self {
            scope,
            multiplier,
            previous: None,
        }
    }

    pub fn scope(&self) -> &ScopeId {
        &self.scope
    }

    pub fn previous(&self) -> Option<Vec2> {
        self.previous
    }

    /// Radius for `current` against the previous sample, then remember `current`.
    ///
    /// The first sample seeds the state and yields zero.
    pub fn advance(&mut self, current: Vec2) -> BlurRadius {
        let previous = *self.previous.get_or_insert(current);
        let delta = current - previous;
        self.previous = Some(current);
        BlurRadius::new(
            axis_radius(delta.x, self.multiplier),
            axis_radius(delta.y, self.multiplier),
        )
    }

    /// Advance and write the radius to the scope's filter.
    pub fn apply<F: FilterScope>(&mut self, host: &F, current: Vec2) -> MotionResult<BlurRadius> {
        let radius = self.advance(current);
        if !host.set_std_deviation(&self.scope, FILTER_ID, radius) {
            return Err(MotionError::filter_missing(&self.scope, FILTER_ID));
        }
        Ok(radius)
    }

    /// Detach `element` from the filter and zero the filter's radius.
    ///
    /// The reference is removed even when the filter turns out to be missing.
    pub fn reset<D>(&self, doc: &D, element: &D::Element) -> MotionResult<()>
    where
        D: Document + FilterScope,
    {
        doc.set_filter(element, None);
        if !doc.set_std_deviation(&self.scope, FILTER_ID, BlurRadius::ZERO) {
            return Err(MotionError::filter_missing(&self.scope, FILTER_ID));
        }
        Ok(())
    }
}

fn axis_radius(delta: f64, multiplier: f64) -> u32 {
    // NaN saturates to 0 in the cast.
    round_half_up(delta * multiplier).abs() as u32
}

#[cfg(test)]
#[path = "../../tests/unit/motion/blur.rs"]
mod tests;
