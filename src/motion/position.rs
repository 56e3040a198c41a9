use crate::foundation::core::Vec2;
use crate::host::ToggleStore;

/// Data key holding the toggle marker.
pub const TOGGLE_KEY: &str = "toggle";

/// What the caller asked for, before normalization.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PositionIntent {
    pub relative: Vec2,
    /// Present only when both absolute axes were supplied.
    pub absolute: Option<Vec2>,
    pub toggle: bool,
}

/// Reduce `intent` to the single displacement to animate by, starting from `origin`.
///
/// Absolute targets apply only when the relative offset is zero on both axes. In toggle mode
/// a stored marker is consumed and reversed; without one, the displacement is stored so the
/// next toggle call undoes it. An empty marker counts as no marker.
pub fn resolve_displacement<S>(origin: Vec2, intent: &PositionIntent, store: &mut S) -> Vec2
where
    S: ToggleStore + ?Sized,
{
    let mut displacement = match intent.absolute {
        Some(target) if intent.relative == Vec2::ZERO => target - origin,
        _ => intent.relative,
    };

    if intent.toggle {
        match store.get().filter(|marker| !marker.is_empty()) {
            Some(marker) => {
                let applied = parse_toggle_marker(&marker);
                displacement = Vec2::new(negate(applied.x), negate(applied.y));
                store.clear();
            }
            None => store.set(format_toggle_marker(displacement)),
        }
    }

    displacement
}

/// Parse an `"x,y"` marker. Missing or malformed components read as 0.
pub fn parse_toggle_marker(marker: &str) -> Vec2 {
    let mut parts = marker.split(',').map(parse_component);
    let x = parts.next().unwrap_or(0.0);
    let y = parts.next().unwrap_or(0.0);
    Vec2::new(x, y)
}

pub fn format_toggle_marker(displacement: Vec2) -> String {
    format!("{},{}", displacement.x, displacement.y)
}

fn parse_component(s: &str) -> f64 {
    s.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

// -0.0 would otherwise leak into written offsets.
fn negate(v: f64) -> f64 {
    if v == 0.0 { 0.0 } else { -v }
}

#[cfg(test)]
#[path = "../../tests/unit/motion/position.rs"]
mod tests;
