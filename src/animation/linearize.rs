use std::fmt;

/// Segment count used when callers do not pick one.
pub const DEFAULT_LINEAR_POINTS: usize = 50;

/// Piecewise-linear approximation of an easing curve.
///
/// `samples[i]` is the eased value at `i / (samples.len() - 1)`. [`fmt::Display`] renders the
/// CSS `linear(...)` easing form.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LinearCurve {
    pub samples: Vec<f64>,
}

impl LinearCurve {
    /// Number of linear segments between samples.
    pub fn segments(&self) -> usize {
        self.samples.len().saturating_sub(1)
    }

    /// `(time, value)` pairs, time uniformly spaced over `[0, 1]`.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let n = self.segments().max(1) as f64;
        self.samples
            .iter()
            .enumerate()
            .map(move |(i, &v)| (i as f64 / n, v))
    }
}

impl fmt::Display for LinearCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("linear(")?;
        for (i, v) in self.samples.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{v}")?;
        }
        f.write_str(")")
    }
}

/// Sample `ease` at `points + 1` uniform time fractions `i / points`.
///
/// `points == 0` is treated as a single segment.
pub fn linearize<F>(ease: F, points: usize) -> LinearCurve
where
    F: Fn(f64) -> f64,
{
    let n = points.max(1);
    let samples = (0..=n).map(|i| ease(i as f64 / n as f64)).collect();
    LinearCurve { samples }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/linearize.rs"]
mod tests;
