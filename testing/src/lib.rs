//! Test utilities for Waypoint sessions.
//!
//! - [`RecordingObserver`]: keeps every navigation event and the latest stack
//! - [`assert_stack!`]: compare a coordinator's stack against a route list

use std::cell::RefCell;
use std::rc::Rc;
use waypoint_core::{CentralCoordinator, CoordinatorHandle, NavigationEvent, StackObserver};

/// Observer that records everything it is told.
pub struct RecordingObserver<G> {
    events: RefCell<Vec<NavigationEvent<G>>>,
    last_stack: RefCell<Vec<G>>,
}

impl<G: Clone + 'static> RecordingObserver<G> {
    pub fn new() -> Self {
        Self {
            events: RefCell::new(Vec::new()),
            last_stack: RefCell::new(Vec::new()),
        }
    }

    /// Create a recorder and subscribe it to `central`.
    pub fn attach<H>(central: &CentralCoordinator<H>) -> Rc<Self>
    where
        H: CoordinatorHandle<Global = G>,
    {
        let recorder = Rc::new(Self::new());
        central.subscribe(recorder.clone());
        recorder
    }

    pub fn events(&self) -> Vec<NavigationEvent<G>> {
        self.events.borrow().clone()
    }

    /// Stack snapshot delivered with the most recent event.
    pub fn last_stack(&self) -> Vec<G> {
        self.last_stack.borrow().clone()
    }

    /// Number of events that changed the stack.
    pub fn mutation_count(&self) -> usize {
        self.events.borrow().iter().filter(|e| e.is_mutation()).count()
    }

    /// Forget every recorded event and the last snapshot.
    pub fn clear(&self) {
        self.events.borrow_mut().clear();
        self.last_stack.borrow_mut().clear();
    }
}

impl<G: Clone + 'static> Default for RecordingObserver<G> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: Clone> StackObserver<G> for RecordingObserver<G> {
    fn on_navigate(&self, event: &NavigationEvent<G>, stack: &[G]) {
        self.events.borrow_mut().push(event.clone());
        *self.last_stack.borrow_mut() = stack.to_vec();
    }
}

/// Assert that a `CentralCoordinator`'s stack equals the given routes,
/// oldest first.
///
/// ```rust,ignore
/// assert_stack!(central, [AppRoute::Abc(AbcRoute::ViewA)]);
/// assert_stack!(central, []);
/// ```
#[macro_export]
macro_rules! assert_stack {
    ($central:expr, [$($route:expr),* $(,)?]) => {{
        let actual = $central.routes();
        let expected = ::std::vec![$($route),*];
        assert_eq!(
            actual, expected,
            "navigation stack mismatch (left: actual, right: expected)"
        );
    }};
}
