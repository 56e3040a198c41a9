//! Motionblur animates an element's 2D offset over time and can fake motion blur by driving a
//! shared Gaussian blur filter from the element's frame-to-frame speed.
//!
//! - Describe the move with [`MotionBlurOptions`]
//! - Hand the host [`Document`] and a [`FrameScheduler`] to [`motion_blur`]
//! - Await the returned future; it resolves with the element once the move has finished
//!
//! The easing table ([`Ease`]) and its piecewise-linear sampler ([`linearize`]) are usable on
//! their own.
#![forbid(unsafe_code)]

mod foundation;

pub mod animation;
pub mod host;
pub mod motion;

pub use crate::foundation::core::{BlurRadius, ScopeId, Vec2, round_half_up, snap_to_pixel};
pub use crate::foundation::error::{MotionError, MotionResult};

pub use crate::animation::ease::{Ease, EasingFn};
pub use crate::animation::linearize::{DEFAULT_LINEAR_POINTS, LinearCurve, linearize};
pub use crate::host::headless::{ElementId, HeadlessDocument, SteppedFrames};
pub use crate::host::{Document, ElementData, FilterScope, FrameScheduler, ToggleStore};
pub use crate::motion::blur::{BlurFilterDef, BlurTracker, FILTER_CONTAINER_ID, FILTER_ID};
pub use crate::motion::driver::{Animation, Phase, RunState, motion_blur};
pub use crate::motion::options::{DEFAULTS, Defaults, MotionBlurOptions, ResolvedOptions};
pub use crate::motion::position::{PositionIntent, TOGGLE_KEY, resolve_displacement};
