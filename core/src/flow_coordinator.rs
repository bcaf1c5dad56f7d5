use crate::navigator::Navigator;
use std::fmt;
use waypoint_flow::{
    CrossFlow, CrossFlowNavigable, FlowRoute, GlobalOf, GlobalRoute, Navigable, RootFlow,
    RootNavigable,
};

/// Coordinator for one flow.
///
/// Translates the flow's local intents into operations on the shared stack.
/// It holds nothing but a `Navigator`, so it never keeps the session alive
/// and every call becomes a no-op once the session is gone.
///
/// Capabilities follow the route type's declarations: the coordinator is
/// `RootNavigable` when `R: RootFlow` and `CrossFlowNavigable` when
/// `R: CrossFlow`.
pub struct FlowCoordinator<R: FlowRoute> {
    navigator: Navigator<R::Global>,
}

impl<R: FlowRoute> FlowCoordinator<R> {
    pub fn new(navigator: Navigator<R::Global>) -> Self {
        FlowCoordinator { navigator }
    }

    /// The flow this coordinator serves.
    pub fn identity(&self) -> <R::Global as GlobalRoute>::FlowId {
        R::FLOW
    }

    pub fn is_attached(&self) -> bool {
        self.navigator.is_attached()
    }
}

impl<R: FlowRoute> Navigable for FlowCoordinator<R> {
    type Route = R;

    fn navigate_to(&self, route: R) {
        self.navigator.push(route.into_global());
    }

    fn navigate_back(&self) {
        self.navigator.pop_one();
    }

    fn navigate_to_root(&self) {
        self.navigator.reset_to_root();
    }
}

impl<R: RootFlow> RootNavigable for FlowCoordinator<R> {}

impl<R: CrossFlow> CrossFlowNavigable for FlowCoordinator<R> {
    fn navigate_to_new_flow(&self, route: GlobalOf<R>) {
        self.navigator.push(route);
    }
}

impl<R: FlowRoute> Clone for FlowCoordinator<R> {
    fn clone(&self) -> Self {
        FlowCoordinator {
            navigator: self.navigator.clone(),
        }
    }
}

impl<R: FlowRoute> fmt::Debug for FlowCoordinator<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FlowCoordinator")
            .field("flow", &R::FLOW)
            .field("navigator", &self.navigator)
            .finish()
    }
}
