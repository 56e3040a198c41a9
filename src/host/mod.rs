//! Boundary between the animation driver and the environment it animates in.
//!
//! Hosts implement these traits over whatever element tree they own (a browser DOM binding,
//! a retained-mode UI, the in-memory [`headless`] document). Every method takes `&self`:
//! hosts are single-threaded and use interior mutability, so several animations can share
//! one document while they are in flight.

use std::fmt;
use std::future::Future;

use crate::foundation::core::{BlurRadius, ScopeId, Vec2};
use crate::motion::blur::BlurFilterDef;

pub mod headless;

/// Element style, filter and data access.
pub trait Document {
    /// Handle to an element. Cloned into the animation and handed back on completion.
    type Element: Clone + fmt::Debug;

    /// Current computed `left`/`top` offset. Read once per animation, at start.
    fn computed_offset(&self, element: &Self::Element) -> Vec2;

    /// Write the element's `left`/`top` offset.
    fn write_offset(&self, element: &Self::Element, offset: Vec2);

    /// Set or clear the element's filter reference (`url(#...)`).
    fn set_filter(&self, element: &Self::Element, filter: Option<&str>);

    fn data(&self, element: &Self::Element, key: &str) -> Option<String>;

    fn set_data(&self, element: &Self::Element, key: &str, value: &str);

    fn remove_data(&self, element: &Self::Element, key: &str);
}

/// Identifier-addressed lookup and insertion inside a root scope.
pub trait FilterScope {
    /// `true` when a node with `id` exists in `scope`.
    fn contains_id(&self, scope: &ScopeId, id: &str) -> bool;

    /// Append `filter` to `scope`. Callers check [`FilterScope::contains_id`] first.
    fn append_filter(&self, scope: &ScopeId, filter: &BlurFilterDef);

    /// Overwrite the `stdDeviation` of the blur primitive inside filter `filter_id`.
    ///
    /// Returns `false` when the filter cannot be found in `scope`.
    fn set_std_deviation(&self, scope: &ScopeId, filter_id: &str, radius: BlurRadius) -> bool;
}

/// "Call me before the next repaint" capability.
pub trait FrameScheduler {
    /// Resolve with the next frame's timestamp in milliseconds.
    ///
    /// Timestamps observed by one animation are strictly increasing.
    fn next_frame(&self) -> impl Future<Output = f64>;
}

/// Key-value slot holding one persisted string.
pub trait ToggleStore {
    fn get(&self) -> Option<String>;
    fn set(&mut self, value: String);
    fn clear(&mut self);
}

impl ToggleStore for Option<String> {
    fn get(&self) -> Option<String> {
        self.clone()
    }

    fn set(&mut self, value: String) {
        *self = Some(value);
    }

    fn clear(&mut self) {
        *self = None;
    }
}

/// One data key on one element, viewed as a [`ToggleStore`].
pub struct ElementData<'a, D: Document> {
    doc: &'a D,
    element: &'a D::Element,
    key: &'a str,
}

impl<'a, D: Document> ElementData<'a, D> {
    pub fn new(doc: &'a D, element: &'a D::Element, key: &'a str) -> Self {
        Self { doc, element, key }
    }
}

impl<D: Document> ToggleStore for ElementData<'_, D> {
    fn get(&self) -> Option<String> {
        self.doc.data(self.element, self.key)
    }

    fn set(&mut self, value: String) {
        self.doc.set_data(self.element, self.key, &value);
    }

    fn clear(&mut self) {
        self.doc.remove_data(self.element, self.key);
    }
}
