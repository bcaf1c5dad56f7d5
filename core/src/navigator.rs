//! Navigator - Non-owning Stack Access
//!
//! The central coordinator keeps its navigation state behind an `Rc`. Flow
//! coordinators only ever receive a `Navigator`, which holds a `Weak` to
//! that state: it never keeps a session alive, and once the session is gone
//! every intent sent through it is dropped.

use crate::config::{EmptyPopPolicy, NavigatorConfig};
use crate::event::NavigationEvent;
use crate::observer::{StackObserver, SubscriptionId};
use crate::stack::NavigationStack;
use std::cell::RefCell;
use std::collections::VecDeque;
use std::fmt;
use std::rc::{Rc, Weak};
use uuid::Uuid;
use waypoint_flow::GlobalRoute;

/// Identifies one running navigation session in log output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    pub fn new() -> Self {
        SessionId(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

pub(crate) enum Intent<G> {
    Push(G),
    Pop,
    Reset,
}

/// State shared between the central coordinator and its navigators.
pub(crate) struct NavigationState<G> {
    pub(crate) stack: NavigationStack<G>,
    observers: Vec<(SubscriptionId, Rc<dyn StackObserver<G>>)>,
    next_subscription: u64,
    empty_pop: EmptyPopPolicy,
    pub(crate) session: SessionId,
    pub(crate) label: String,
    /// Intents waiting for the current notification pass to finish.
    pending: VecDeque<Intent<G>>,
    notifying: bool,
}

impl<G: GlobalRoute> NavigationState<G> {
    pub(crate) fn new(config: &NavigatorConfig) -> Self {
        NavigationState {
            stack: NavigationStack::new(),
            observers: Vec::new(),
            next_subscription: 0,
            empty_pop: config.empty_pop,
            session: SessionId::new(),
            label: config.session_label.clone(),
            pending: VecDeque::new(),
            notifying: false,
        }
    }

    pub(crate) fn subscribe(&mut self, observer: Rc<dyn StackObserver<G>>) -> SubscriptionId {
        let id = SubscriptionId(self.next_subscription);
        self.next_subscription += 1;
        self.observers.push((id, observer));
        id
    }

    pub(crate) fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.observers.len();
        self.observers.retain(|(sub, _)| *sub != id);
        self.observers.len() != before
    }

    fn mutate(&mut self, intent: Intent<G>) -> NavigationEvent<G> {
        match intent {
            Intent::Push(route) => {
                tracing::debug!(
                    waypoint.session = %self.session,
                    waypoint.label = %self.label,
                    flow = %route.flow_id(),
                    ?route,
                    "push"
                );
                self.stack.push(route.clone());
                NavigationEvent::Pushed {
                    route,
                    depth: self.stack.len(),
                }
            }
            Intent::Pop => match self.stack.pop() {
                Some(route) => {
                    tracing::debug!(
                        waypoint.session = %self.session,
                        waypoint.label = %self.label,
                        ?route,
                        "pop"
                    );
                    NavigationEvent::Popped {
                        route,
                        depth: self.stack.len(),
                    }
                }
                None => {
                    if self.empty_pop == EmptyPopPolicy::Warn {
                        tracing::warn!(
                            waypoint.session = %self.session,
                            waypoint.label = %self.label,
                            "pop requested on an empty navigation stack"
                        );
                    }
                    NavigationEvent::PopIgnored
                }
            },
            Intent::Reset => {
                let cleared = self.stack.clear();
                tracing::debug!(
                    waypoint.session = %self.session,
                    waypoint.label = %self.label,
                    cleared,
                    "reset to root"
                );
                NavigationEvent::Reset { cleared }
            }
        }
    }
}

/// Apply one intent and notify observers once the mutation is complete.
///
/// The borrow is released before observers run so they can read the
/// coordinator or navigate again. Intents issued while observers are being
/// notified are queued and applied after the current pass, so every
/// observer sees events in application order, each with its own snapshot.
pub(crate) fn apply<G: GlobalRoute>(state: &RefCell<NavigationState<G>>, intent: Intent<G>) {
    {
        let mut nav = state.borrow_mut();
        nav.pending.push_back(intent);
        if nav.notifying {
            tracing::debug!(
                waypoint.session = %nav.session,
                queued = nav.pending.len(),
                "intent queued behind running notification"
            );
            return;
        }
        nav.notifying = true;
    }

    let _pass = NotifyPass(state);
    loop {
        let (event, observers, snapshot) = {
            let mut nav = state.borrow_mut();
            let Some(intent) = nav.pending.pop_front() else {
                return;
            };
            let event = nav.mutate(intent);
            let observers: Vec<_> = nav.observers.iter().map(|(_, o)| Rc::clone(o)).collect();
            (event, observers, nav.stack.as_slice().to_vec())
        };

        for observer in observers {
            observer.on_navigate(&event, &snapshot);
        }
    }
}

/// Clears the notifying flag when a pass ends, including by panic.
struct NotifyPass<'a, G>(&'a RefCell<NavigationState<G>>);

impl<G> Drop for NotifyPass<'_, G> {
    fn drop(&mut self) {
        if let Ok(mut nav) = self.0.try_borrow_mut() {
            nav.notifying = false;
            nav.pending.clear();
        }
    }
}

/// Non-owning handle onto a session's navigation stack.
///
/// Cheap to clone. All operations are silent no-ops once the owning
/// `CentralCoordinator` has been dropped.
pub struct Navigator<G> {
    state: Weak<RefCell<NavigationState<G>>>,
}

impl<G: GlobalRoute> Navigator<G> {
    pub(crate) fn new(state: &Rc<RefCell<NavigationState<G>>>) -> Self {
        Navigator {
            state: Rc::downgrade(state),
        }
    }

    /// A navigator that was never attached to a session.
    pub fn detached() -> Self {
        Navigator { state: Weak::new() }
    }

    pub fn push(&self, route: G) {
        self.send(Intent::Push(route));
    }

    pub fn pop_one(&self) {
        self.send(Intent::Pop);
    }

    pub fn reset_to_root(&self) {
        self.send(Intent::Reset);
    }

    /// Whether the owning session is still alive.
    pub fn is_attached(&self) -> bool {
        self.state.strong_count() > 0
    }

    fn send(&self, intent: Intent<G>) {
        match self.state.upgrade() {
            Some(state) => apply(&state, intent),
            None => tracing::debug!("navigation session closed; intent dropped"),
        }
    }
}

impl<G> Clone for Navigator<G> {
    fn clone(&self) -> Self {
        Navigator {
            state: Weak::clone(&self.state),
        }
    }
}

impl<G> fmt::Debug for Navigator<G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Navigator")
            .field("attached", &(self.state.strong_count() > 0))
            .finish()
    }
}
