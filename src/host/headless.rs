//! In-memory host.
//!
//! Keeps element offsets, filter references, data slots and per-scope filter definitions in
//! plain collections and records every position write and blur update, so animations can be
//! driven and inspected without a renderer.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::future::{Future, ready};

use crate::foundation::core::{BlurRadius, ScopeId, Vec2};
use crate::host::{Document, FilterScope, FrameScheduler};
use crate::motion::blur::BlurFilterDef;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ElementId(pub usize);

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct ElementState {
    pub offset: Vec2,
    pub filter: Option<String>,
    pub data: BTreeMap<String, String>,
    /// Every offset written, in order.
    pub writes: Vec<Vec2>,
}

#[derive(Clone, Debug, Default, PartialEq, serde::Serialize)]
pub struct ScopeState {
    pub filters: Vec<BlurFilterDef>,
    /// Every `stdDeviation` written, in order.
    pub blur_history: Vec<BlurRadius>,
}

#[derive(Debug, Default)]
pub struct HeadlessDocument {
    elements: RefCell<Vec<ElementState>>,
    scopes: RefCell<BTreeMap<ScopeId, ScopeState>>,
}

impl HeadlessDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn create_element(&self, offset: Vec2) -> ElementId {
        let mut elements = self.elements.borrow_mut();
        elements.push(ElementState {
            offset,
            ..ElementState::default()
        });
        ElementId(elements.len() - 1)
    }

    /// Snapshot of an element, `None` for unknown ids.
    pub fn element(&self, id: ElementId) -> Option<ElementState> {
        self.elements.borrow().get(id.0).cloned()
    }

    pub fn offset(&self, id: ElementId) -> Option<Vec2> {
        self.elements.borrow().get(id.0).map(|e| e.offset)
    }

    pub fn filter(&self, id: ElementId) -> Option<String> {
        self.elements
            .borrow()
            .get(id.0)
            .and_then(|e| e.filter.clone())
    }

    pub fn writes(&self, id: ElementId) -> Vec<Vec2> {
        self.elements
            .borrow()
            .get(id.0)
            .map(|e| e.writes.clone())
            .unwrap_or_default()
    }

    /// Snapshot of a scope; unknown scopes read as empty.
    pub fn scope(&self, scope: &ScopeId) -> ScopeState {
        self.scopes.borrow().get(scope).cloned().unwrap_or_default()
    }

    pub fn filter_count(&self, scope: &ScopeId) -> usize {
        self.scopes
            .borrow()
            .get(scope)
            .map_or(0, |s| s.filters.len())
    }

    pub fn blur_history(&self, scope: &ScopeId) -> Vec<BlurRadius> {
        self.scope(scope).blur_history
    }

    /// Current `stdDeviation` of the first filter in `scope`.
    pub fn std_deviation(&self, scope: &ScopeId) -> Option<BlurRadius> {
        self.scopes
            .borrow()
            .get(scope)
            .and_then(|s| s.filters.first())
            .map(|f| f.std_deviation)
    }

    /// Drop every filter definition in `scope`, as an outside script would.
    pub fn remove_filters(&self, scope: &ScopeId) {
        if let Some(s) = self.scopes.borrow_mut().get_mut(scope) {
            s.filters.clear();
        }
    }
}

impl Document for HeadlessDocument {
    type Element = ElementId;

    fn computed_offset(&self, element: &ElementId) -> Vec2 {
        self.offset(*element).unwrap_or(Vec2::ZERO)
    }

    fn write_offset(&self, element: &ElementId, offset: Vec2) {
        if let Some(e) = self.elements.borrow_mut().get_mut(element.0) {
            e.offset = offset;
            e.writes.push(offset);
        }
    }

    fn set_filter(&self, element: &ElementId, filter: Option<&str>) {
        if let Some(e) = self.elements.borrow_mut().get_mut(element.0) {
            e.filter = filter.map(str::to_owned);
        }
    }

    fn data(&self, element: &ElementId, key: &str) -> Option<String> {
        self.elements
            .borrow()
            .get(element.0)
            .and_then(|e| e.data.get(key).cloned())
    }

    fn set_data(&self, element: &ElementId, key: &str, value: &str) {
        if let Some(e) = self.elements.borrow_mut().get_mut(element.0) {
            e.data.insert(key.to_owned(), value.to_owned());
        }
    }

    fn remove_data(&self, element: &ElementId, key: &str) {
        if let Some(e) = self.elements.borrow_mut().get_mut(element.0) {
            e.data.remove(key);
        }
    }
}

impl FilterScope for HeadlessDocument {
    fn contains_id(&self, scope: &ScopeId, id: &str) -> bool {
        self.scopes.borrow().get(scope).is_some_and(|s| {
            s.filters
                .iter()
                .any(|f| f.container_id == id || f.filter_id == id)
        })
    }

    fn append_filter(&self, scope: &ScopeId, filter: &BlurFilterDef) {
        self.scopes
            .borrow_mut()
            .entry(scope.clone())
            .or_default()
            .filters
            .push(filter.clone());
    }

    fn set_std_deviation(&self, scope: &ScopeId, filter_id: &str, radius: BlurRadius) -> bool {
        let mut scopes = self.scopes.borrow_mut();
        let Some(s) = scopes.get_mut(scope) else {
            return false;
        };
        let Some(f) = s.filters.iter_mut().find(|f| f.filter_id == filter_id) else {
            return false;
        };
        f.std_deviation = radius;
        s.blur_history.push(radius);
        true
    }
}

/// Synthetic frame clock: the first frame lands on `start_ms`, each later one `interval_ms`
/// after the previous.
#[derive(Debug)]
pub struct SteppedFrames {
    next_ms: Cell<f64>,
    interval_ms: f64,
    delivered: Cell<u64>,
}

impl SteppedFrames {
    pub fn new(start_ms: f64, interval_ms: f64) -> Self {
        Self {
            next_ms: Cell::new(start_ms),
            interval_ms,
            delivered: Cell::new(0),
        }
    }

    /// Clock ticking at `fps` frames per second, starting at zero.
    pub fn at_fps(fps: f64) -> Self {
        Self::new(0.0, 1000.0 / fps)
    }

    pub fn delivered(&self) -> u64 {
        self.delivered.get()
    }
}

impl FrameScheduler for SteppedFrames {
    fn next_frame(&self) -> impl Future<Output = f64> {
        let now = self.next_ms.get();
        self.next_ms.set(now + self.interval_ms);
        self.delivered.set(self.delivered.get() + 1);
        ready(now)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/headless.rs"]
mod tests;
