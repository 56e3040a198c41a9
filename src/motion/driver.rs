//! Frame-stepping animation driver.
//!
//! An [`Animation`] is created in the initialized state by [`Animation::prepare`]: options
//! are resolved, the origin is read, the blur filter is attached and the displacement is
//! fixed. Each [`Animation::step`] consumes one frame timestamp. The frame whose elapsed time
//! reaches the duration completes the animation: blur is reset and the position is snapped
//! to whole pixels.

use std::future::Future;

use crate::foundation::core::{Vec2, snap_to_pixel};
use crate::foundation::error::MotionResult;
use crate::host::{Document, ElementData, FilterScope, FrameScheduler};
use crate::motion::blur::{BlurTracker, attach_motion_blur};
use crate::motion::options::{MotionBlurOptions, ResolvedOptions};
use crate::motion::position::{TOGGLE_KEY, resolve_displacement};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Running,
    Completed,
    /// A step returned an error; no further frames are processed.
    Failed,
}

/// Mutable state of one running animation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunState {
    /// Timestamp of the first frame.
    pub start_ms: Option<f64>,
    /// Present when motion blur is enabled.
    pub blur: Option<BlurTracker>,
    /// Last position written to the element.
    pub last_written: Option<Vec2>,
    pub frames: u64,
}

#[derive(Debug)]
pub struct Animation<E> {
    element: E,
    options: ResolvedOptions,
    origin: Vec2,
    displacement: Vec2,
    state: RunState,
    phase: Phase,
}

impl<E: Clone + std::fmt::Debug> Animation<E> {
    /// Resolve options and capture everything the frames need.
    ///
    /// Fails before touching the document when the easing name is unknown.
    pub fn prepare<D>(doc: &D, element: E, options: &MotionBlurOptions) -> MotionResult<Self>
    where
        D: Document<Element = E> + FilterScope,
    {
        let options = options.resolve()?;
        let origin = doc.computed_offset(&element);

        let blur = options.use_motion_blur.then(|| {
            attach_motion_blur(doc, &options.doc_root, &element);
            BlurTracker::new(options.doc_root.clone(), options.blur_multiplier)
        });

        let mut toggle = ElementData::new(doc, &element, TOGGLE_KEY);
        let displacement = resolve_displacement(origin, &options.position_intent(), &mut toggle);

        tracing::debug!(
            ?element,
            origin = ?(origin.x, origin.y),
            displacement = ?(displacement.x, displacement.y),
            easing = %options.easing,
            duration_ms = options.duration_ms,
            "animation prepared"
        );

        Ok(Self {
            element,
            options,
            origin,
            displacement,
            state: RunState {
                blur,
                ..RunState::default()
            },
            phase: Phase::Running,
        })
    }

    pub fn element(&self) -> &E {
        &self.element
    }

    pub fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    pub fn origin(&self) -> Vec2 {
        self.origin
    }

    /// Displacement after absolute/toggle normalization.
    pub fn displacement(&self) -> Vec2 {
        self.displacement
    }

    pub fn state(&self) -> &RunState {
        &self.state
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Eased displacement at `elapsed_ms`. The fraction is not clamped.
    ///
    /// Non-positive durations jump straight to the target.
    pub fn eased_at(&self, elapsed_ms: f64) -> Vec2 {
        let fraction = if self.options.duration_ms > 0.0 {
            elapsed_ms / self.options.duration_ms
        } else {
            1.0
        };
        let progress = self.options.easing.apply(fraction);
        Vec2::new(
            progress * self.displacement.x,
            progress * self.displacement.y,
        )
    }

    /// Process one frame.
    ///
    /// Frames after completion or failure are ignored and report the terminal phase.
    pub fn step<D>(&mut self, doc: &D, timestamp_ms: f64) -> MotionResult<Phase>
    where
        D: Document<Element = E> + FilterScope,
    {
        if self.phase != Phase::Running {
            return Ok(self.phase);
        }
        match self.advance(doc, timestamp_ms) {
            Ok(phase) => {
                self.phase = phase;
                Ok(phase)
            }
            Err(err) => {
                self.phase = Phase::Failed;
                Err(err)
            }
        }
    }

    fn advance<D>(&mut self, doc: &D, timestamp_ms: f64) -> MotionResult<Phase>
    where
        D: Document<Element = E> + FilterScope,
    {
        let start = *self.state.start_ms.get_or_insert(timestamp_ms);
        let elapsed = timestamp_ms - start;
        let eased = self.eased_at(elapsed);

        let radius = match self.state.blur.as_mut() {
            Some(tracker) => Some(tracker.apply(doc, eased)?),
            None => None,
        };

        if !self.options.block_movement {
            let position = self.origin + eased;
            doc.write_offset(&self.element, position);
            self.state.last_written = Some(position);
        }
        self.state.frames += 1;

        tracing::trace!(
            frame = self.state.frames,
            elapsed_ms = elapsed,
            eased = ?(eased.x, eased.y),
            blur = ?radius,
            "frame"
        );

        if elapsed < self.options.duration_ms {
            return Ok(Phase::Running);
        }
        self.complete(doc)?;
        Ok(Phase::Completed)
    }

    fn complete<D>(&mut self, doc: &D) -> MotionResult<()>
    where
        D: Document<Element = E> + FilterScope,
    {
        if let Some(tracker) = &self.state.blur {
            tracker.reset(doc, &self.element)?;
        }
        let snapped = snap_to_pixel(self.state.last_written.unwrap_or(self.origin));
        doc.write_offset(&self.element, snapped);
        self.state.last_written = Some(snapped);

        tracing::debug!(
            element = ?self.element,
            frames = self.state.frames,
            position = ?(snapped.x, snapped.y),
            "animation completed"
        );
        Ok(())
    }

    /// Drive frames from `frames` until the animation completes, then hand back the element.
    #[tracing::instrument(
        skip_all,
        fields(easing = %self.options.easing, duration_ms = self.options.duration_ms)
    )]
    pub async fn run<D, S>(mut self, doc: &D, frames: &S) -> MotionResult<E>
    where
        D: Document<Element = E> + FilterScope,
        S: FrameScheduler,
    {
        loop {
            let timestamp = frames.next_frame().await;
            if self.step(doc, timestamp)? != Phase::Running {
                return Ok(self.element);
            }
        }
    }
}

/// Animate `element` as described by `options`.
///
/// Option errors are returned here, before any frame is requested. The returned future
/// drives the frames and resolves with `element` once the animation completes; it fails
/// only when the shared blur filter disappears mid-flight.
pub fn motion_blur<'a, D, S>(
    doc: &'a D,
    frames: &'a S,
    element: D::Element,
    options: &MotionBlurOptions,
) -> MotionResult<impl Future<Output = MotionResult<D::Element>> + use<'a, D, S>>
where
    D: Document + FilterScope,
    S: FrameScheduler,
{
    let animation = Animation::prepare(doc, element, options)?;
    Ok(animation.run(doc, frames))
}

#[cfg(test)]
#[path = "../../tests/unit/motion/driver.rs"]
mod tests;
