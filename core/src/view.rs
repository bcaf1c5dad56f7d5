//! Views - Route to Screen Dispatch
//!
//! Screens are opaque to this crate. A `ViewFactory` turns one flow's local
//! route into a screen value; a `RouteDispatch` is the single place that
//! matches on the whole global union; `RootDispatch` renders the fixed root
//! screen followed by one screen per stack entry.

use crate::coordinator::CentralCoordinator;
use crate::error::WiringError;
use crate::flow_coordinator::FlowCoordinator;
use crate::registry::{CoordinatorHandle, CoordinatorRegistry, FromHandle};
use std::iter;
use waypoint_flow::{Capability, FlowRoute, GlobalRoute};

/// Builds the screens of one flow.
///
/// Factories hold no state and never navigate. Navigation happens later,
/// from inside the produced screen, through the coordinator passed here.
pub trait ViewFactory {
    type Route: FlowRoute;
    type Screen;

    fn make_view(route: &Self::Route, coordinator: &FlowCoordinator<Self::Route>) -> Self::Screen;
}

/// Maps any global route to a screen.
pub trait RouteDispatch<H: CoordinatorHandle> {
    type Screen;

    fn dispatch(&self, route: &H::Global, registry: &CoordinatorRegistry<H>) -> Self::Screen;
}

/// Resolve the coordinator of `F`'s flow and let `F` build the screen.
///
/// # Panics
/// When the flow's coordinator is missing from `registry` or registered
/// under the wrong type.
pub fn render_with<F, H>(route: &F::Route, registry: &CoordinatorRegistry<H>) -> F::Screen
where
    F: ViewFactory,
    H: CoordinatorHandle<Global = <F::Route as FlowRoute>::Global>,
    FlowCoordinator<F::Route>: FromHandle<H>,
{
    match registry.try_resolve_as::<FlowCoordinator<F::Route>>(<F::Route as FlowRoute>::FLOW) {
        Ok(coordinator) => F::make_view(route, coordinator),
        Err(err) => panic!("{err}"),
    }
}

/// Root composition: a fixed base route plus the dispatch table.
pub struct RootDispatch<H: CoordinatorHandle, D> {
    root: H::Global,
    dispatch: D,
}

impl<H, D> RootDispatch<H, D>
where
    H: CoordinatorHandle,
    D: RouteDispatch<H>,
{
    /// Wire `root` as the base screen.
    ///
    /// The root route's flow must be registered and declare
    /// `Capability::Root`.
    pub fn new(
        root: H::Global,
        dispatch: D,
        central: &CentralCoordinator<H>,
    ) -> Result<Self, WiringError> {
        let flow = root.flow_id();
        let handle = central.registry().try_resolve(flow)?;
        if !handle.capabilities().contains(Capability::Root) {
            tracing::error!(flow = %flow, "root route belongs to a flow without root capability");
            return Err(WiringError::NotRootCapable {
                flow: flow.to_string(),
            });
        }
        Ok(Self { root, dispatch })
    }

    pub fn root(&self) -> &H::Global {
        &self.root
    }

    /// Root screen first, then one screen per stack entry, oldest first.
    pub fn render(&self, central: &CentralCoordinator<H>) -> Vec<D::Screen> {
        let routes = central.routes();
        let registry = central.registry();
        iter::once(&self.root)
            .chain(routes.iter())
            .map(|route| self.dispatch.dispatch(route, registry))
            .collect()
    }

    /// The screen currently visible: the stack top, or the root.
    pub fn render_top(&self, central: &CentralCoordinator<H>) -> D::Screen {
        let registry = central.registry();
        match central.top() {
            Some(route) => self.dispatch.dispatch(&route, registry),
            None => self.dispatch.dispatch(&self.root, registry),
        }
    }
}
