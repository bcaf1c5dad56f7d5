//! # Central Coordinator
//!
//! Owns the session's single navigation stack and the registry of flow
//! coordinators.
//!
//! ## Design
//!
//! * **Single writer**: only the central coordinator (directly, or through
//!   the `Navigator`s it hands out) mutates the stack.
//! * **One registration pass**: the registry is filled inside `new` and
//!   frozen before the coordinator is returned.
//! * **Synchronous observers**: every mutation is announced to subscribers
//!   before the navigating call returns.
//!
//! ```rust,ignore
//! let central = CentralCoordinator::new(NavigatorConfig::default(), |setup| {
//!     setup.register(Flow::Home, Handle::Home(FlowCoordinator::new(setup.navigator())))?;
//!     setup.register(Flow::Settings, Handle::Settings(FlowCoordinator::new(setup.navigator())))
//! })?;
//!
//! central.coordinator::<HomeRoute>().navigate_to(HomeRoute::Feed);
//! assert_eq!(central.depth(), 1);
//! ```

use crate::config::NavigatorConfig;
use crate::error::WiringError;
use crate::flow_coordinator::FlowCoordinator;
use crate::navigator::{self, Intent, NavigationState, Navigator, SessionId};
use crate::observer::{StackObserver, SubscriptionId};
use crate::registry::{
    CoordinatorHandle, CoordinatorRegistry, FlowIdOf, FromHandle, RegistryBuilder,
};
use crate::stack::NavigationStack;
use crate::telemetry::TracingObserver;
use std::cell::{Ref, RefCell};
use std::fmt;
use std::rc::Rc;
use waypoint_flow::FlowRoute;

type GlobalOfHandle<H> = <H as CoordinatorHandle>::Global;

/// Setup-time access handed to the registration closure.
pub struct Registrar<H: CoordinatorHandle> {
    navigator: Navigator<H::Global>,
    builder: RegistryBuilder<H>,
}

impl<H: CoordinatorHandle> Registrar<H> {
    /// A fresh non-owning back-reference for a flow coordinator.
    pub fn navigator(&self) -> Navigator<H::Global> {
        self.navigator.clone()
    }

    /// Register the coordinator for `identity`. Each identity exactly once.
    pub fn register(&mut self, identity: FlowIdOf<H>, handle: H) -> Result<(), WiringError> {
        self.builder.register(identity, handle)?;
        tracing::debug!(flow = %identity, "registered flow coordinator");
        Ok(())
    }
}

/// The session-wide navigation authority.
pub struct CentralCoordinator<H: CoordinatorHandle> {
    state: Rc<RefCell<NavigationState<H::Global>>>,
    registry: CoordinatorRegistry<H>,
}

impl<H: CoordinatorHandle> CentralCoordinator<H> {
    /// Build a session and run the single registration pass.
    ///
    /// Any wiring error aborts construction and is returned as-is.
    pub fn new<F>(config: NavigatorConfig, setup: F) -> Result<Self, WiringError>
    where
        F: FnOnce(&mut Registrar<H>) -> Result<(), WiringError>,
    {
        let state = Rc::new(RefCell::new(NavigationState::new(&config)));
        let mut registrar = Registrar {
            navigator: Navigator::new(&state),
            builder: RegistryBuilder::new(),
        };

        if let Err(err) = setup(&mut registrar) {
            tracing::error!(error = %err, "flow registration failed");
            return Err(err);
        }
        let registry = registrar.builder.build();

        let session = state.borrow().session;
        if config.trace_navigation {
            let observer = TracingObserver::new(session, &config.session_label);
            state.borrow_mut().subscribe(Rc::new(observer));
        }

        tracing::info!(
            waypoint.session = %session,
            waypoint.label = %config.session_label,
            coordinators = registry.len(),
            "navigation session started"
        );

        Ok(Self { state, registry })
    }

    /// Append `route` to the stack. Pushing the same route twice yields two
    /// entries.
    pub fn push(&self, route: GlobalOfHandle<H>) {
        navigator::apply(&self.state, Intent::Push(route));
    }

    /// Remove the top route. A no-op on an empty stack.
    pub fn pop_one(&self) {
        navigator::apply(&self.state, Intent::Pop);
    }

    /// Empty the stack in one step. The root screen is unaffected.
    pub fn reset_to_root(&self) {
        navigator::apply(&self.state, Intent::Reset);
    }

    /// Borrow the current stack.
    ///
    /// Do not navigate while holding the returned guard.
    pub fn stack(&self) -> Ref<'_, NavigationStack<GlobalOfHandle<H>>> {
        Ref::map(self.state.borrow(), |nav| &nav.stack)
    }

    /// Snapshot of the stack, oldest first.
    pub fn routes(&self) -> Vec<GlobalOfHandle<H>> {
        self.state.borrow().stack.as_slice().to_vec()
    }

    pub fn top(&self) -> Option<GlobalOfHandle<H>> {
        self.state.borrow().stack.top().cloned()
    }

    pub fn depth(&self) -> usize {
        self.state.borrow().stack.len()
    }

    pub fn registry(&self) -> &CoordinatorRegistry<H> {
        &self.registry
    }

    /// Handle registered for `identity`.
    ///
    /// # Panics
    /// When `identity` was never registered.
    pub fn resolve(&self, identity: FlowIdOf<H>) -> &H {
        self.registry.resolve(identity)
    }

    /// The coordinator serving route type `R`.
    ///
    /// # Panics
    /// When no coordinator for `R`'s flow was registered, or the registered
    /// handle wraps a different coordinator type.
    pub fn coordinator<R>(&self) -> &FlowCoordinator<R>
    where
        R: FlowRoute<Global = H::Global>,
        FlowCoordinator<R>: FromHandle<H>,
    {
        match self.registry.try_resolve_as::<FlowCoordinator<R>>(R::FLOW) {
            Ok(coordinator) => coordinator,
            Err(err) => panic!("{err}"),
        }
    }

    /// A non-owning handle onto this session's stack.
    pub fn navigator(&self) -> Navigator<H::Global> {
        Navigator::new(&self.state)
    }

    pub fn session(&self) -> SessionId {
        self.state.borrow().session
    }

    pub fn subscribe(&self, observer: Rc<dyn StackObserver<H::Global>>) -> SubscriptionId {
        self.state.borrow_mut().subscribe(observer)
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        self.state.borrow_mut().unsubscribe(id)
    }
}

impl<H: CoordinatorHandle> fmt::Debug for CentralCoordinator<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let nav = self.state.borrow();
        f.debug_struct("CentralCoordinator")
            .field("session", &nav.session)
            .field("label", &nav.label)
            .field("stack", &nav.stack)
            .field("registry", &self.registry)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::NavigationEvent;
    use crate::fixture::{Flow, Handle, HomeRoute, Route, SettingsRoute};
    use waypoint_flow::{Capability, CrossFlowNavigable, Navigable};

    fn central() -> CentralCoordinator<Handle> {
        CentralCoordinator::new(NavigatorConfig::default(), |setup: &mut Registrar<Handle>| {
            setup.register(Flow::Home, Handle::Home(FlowCoordinator::new(setup.navigator())))?;
            setup.register(
                Flow::Settings,
                Handle::Settings(FlowCoordinator::new(setup.navigator())),
            )
        })
        .unwrap()
    }

    #[test]
    fn test_navigate_to_lands_on_top() {
        let central = central();
        let home = central.coordinator::<HomeRoute>();

        for route in [HomeRoute::Feed, HomeRoute::Post(3)] {
            home.navigate_to(route.clone());
            let top = central.top().unwrap();
            assert_eq!(HomeRoute::from_global(&top), Some(&route));
        }
        assert_eq!(central.depth(), 2);
    }

    #[test]
    fn test_push_then_pop_round_trip() {
        let central = central();
        central.push(Route::Home(HomeRoute::Feed));
        let before = central.routes();

        let pushed = [
            Route::Settings(SettingsRoute::Account),
            Route::Home(HomeRoute::Post(1)),
            Route::Home(HomeRoute::Post(1)),
        ];
        for route in pushed.iter().cloned() {
            central.push(route);
        }
        assert_eq!(central.depth(), 4);
        for _ in &pushed {
            central.pop_one();
        }

        assert_eq!(central.routes(), before);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let central = central();
        central.reset_to_root();
        assert_eq!(central.depth(), 0);

        central.push(Route::Home(HomeRoute::Feed));
        central.push(Route::Settings(SettingsRoute::Privacy));
        central.reset_to_root();
        central.reset_to_root();
        assert!(central.stack().is_empty());
    }

    #[test]
    fn test_back_on_empty_stack_is_noop() {
        let central = central();
        central.coordinator::<SettingsRoute>().navigate_back();
        central.pop_one();
        assert_eq!(central.depth(), 0);
        assert_eq!(central.top(), None);
    }

    #[test]
    fn test_cross_flow_push() {
        let central = central();
        let home = central.coordinator::<HomeRoute>();
        home.navigate_to(HomeRoute::Feed);
        home.navigate_to_new_flow(Route::Settings(SettingsRoute::Privacy));

        assert_eq!(
            central.routes(),
            vec![
                Route::Home(HomeRoute::Feed),
                Route::Settings(SettingsRoute::Privacy)
            ]
        );
    }

    #[test]
    fn test_resolve_is_singleton_per_identity() {
        let central = central();
        let a = central.coordinator::<HomeRoute>();
        let b = central.coordinator::<HomeRoute>();
        assert!(std::ptr::eq(a, b));
        assert!(std::ptr::eq(central.resolve(Flow::Home), central.resolve(Flow::Home)));
        assert!(
            central
                .resolve(Flow::Home)
                .capabilities()
                .contains(Capability::Root)
        );
    }

    #[test]
    #[should_panic(expected = "coordinator for flow `orphan` not registered")]
    fn test_resolve_unregistered_panics() {
        let central = central();
        let _ = central.resolve(Flow::Orphan);
    }

    #[test]
    #[should_panic(expected = "coordinator for flow `settings` not registered")]
    fn test_coordinator_lookup_unregistered_panics() {
        let central: CentralCoordinator<Handle> =
            CentralCoordinator::new(NavigatorConfig::default(), |setup: &mut Registrar<Handle>| {
                setup.register(Flow::Home, Handle::Home(FlowCoordinator::new(setup.navigator())))
            })
            .unwrap();
        let _ = central.coordinator::<SettingsRoute>();
    }

    #[test]
    fn test_duplicate_registration_aborts_construction() {
        let result: Result<CentralCoordinator<Handle>, _> =
            CentralCoordinator::new(NavigatorConfig::default(), |setup: &mut Registrar<Handle>| {
                setup.register(Flow::Home, Handle::Home(FlowCoordinator::new(setup.navigator())))?;
                setup.register(Flow::Home, Handle::Home(FlowCoordinator::new(setup.navigator())))
            });
        assert!(matches!(
            result,
            Err(WiringError::DuplicateRegistration { ref flow }) if flow == "home"
        ));
    }

    #[test]
    fn test_observers_see_state_before_call_returns() {
        let central = central();
        let seen: Rc<RefCell<Vec<(NavigationEvent<Route>, usize)>>> = Rc::default();
        let log = Rc::clone(&seen);
        central.subscribe(Rc::new(move |event: &NavigationEvent<Route>, stack: &[Route]| {
            log.borrow_mut().push((event.clone(), stack.len()));
        }));

        central.push(Route::Home(HomeRoute::Feed));
        assert_eq!(seen.borrow().len(), 1);
        central.pop_one();
        central.pop_one();
        central.reset_to_root();

        assert_eq!(
            *seen.borrow(),
            vec![
                (
                    NavigationEvent::Pushed {
                        route: Route::Home(HomeRoute::Feed),
                        depth: 1
                    },
                    1
                ),
                (
                    NavigationEvent::Popped {
                        route: Route::Home(HomeRoute::Feed),
                        depth: 0
                    },
                    0
                ),
                (NavigationEvent::PopIgnored, 0),
                (NavigationEvent::Reset { cleared: 0 }, 0),
            ]
        );
    }

    #[test]
    fn test_observer_may_navigate_reentrantly() {
        let central = central();
        let nav = central.navigator();
        central.subscribe(Rc::new(move |event: &NavigationEvent<Route>, _: &[Route]| {
            if let NavigationEvent::Pushed {
                route: Route::Home(HomeRoute::Post(0)),
                ..
            } = event
            {
                nav.push(Route::Settings(SettingsRoute::Account));
            }
        }));

        central.push(Route::Home(HomeRoute::Post(0)));
        assert_eq!(
            central.routes(),
            vec![
                Route::Home(HomeRoute::Post(0)),
                Route::Settings(SettingsRoute::Account)
            ]
        );
    }

    #[test]
    fn test_flow_coordinators_outlived_by_screens_become_noops() {
        let central = central();
        let held = central.coordinator::<HomeRoute>().clone();
        assert!(held.is_attached());

        drop(central);
        assert!(!held.is_attached());
        held.navigate_to(HomeRoute::Feed);
        held.navigate_to_new_flow(Route::Settings(SettingsRoute::Account));
        held.navigate_back();
        held.navigate_to_root();
    }

    #[test]
    fn test_tracing_observer_installed_from_config() {
        let config = NavigatorConfig::default().with_tracing(true);
        let central: CentralCoordinator<Handle> =
            CentralCoordinator::new(config, |setup: &mut Registrar<Handle>| {
                setup.register(Flow::Home, Handle::Home(FlowCoordinator::new(setup.navigator())))
            })
            .unwrap();

        let probe = central.subscribe(Rc::new(|_: &NavigationEvent<Route>, _: &[Route]| {}));
        // The tracing observer took the first subscription slot.
        assert_eq!(probe, SubscriptionId(1));
        central.push(Route::Home(HomeRoute::Feed));
        assert_eq!(central.depth(), 1);
    }
}
