//! Coordinator handles for the three demo flows.

use crate::routes::{AbcRoute, AppRoute, C1C2C3Route, DefRoute, FlowId};
use waypoint::core::{CoordinatorHandle, FromHandle, Registrar};
use waypoint::{Capabilities, FlowCoordinator, WiringError};

pub type AbcCoordinator = FlowCoordinator<AbcRoute>;
pub type C1C2C3Coordinator = FlowCoordinator<C1C2C3Route>;
pub type DefCoordinator = FlowCoordinator<DefRoute>;

/// One registry entry per flow.
#[derive(Debug, Clone)]
pub enum FlowHandle {
    Abc(AbcCoordinator),
    C1C2C3(C1C2C3Coordinator),
    Def(DefCoordinator),
}

impl CoordinatorHandle for FlowHandle {
    type Global = AppRoute;

    fn flow_id(&self) -> FlowId {
        match self {
            FlowHandle::Abc(c) => c.identity(),
            FlowHandle::C1C2C3(c) => c.identity(),
            FlowHandle::Def(c) => c.identity(),
        }
    }

    fn capabilities(&self) -> Capabilities {
        match self {
            FlowHandle::Abc(c) => Capabilities::navigable().with_root(c).with_cross_flow(c),
            FlowHandle::C1C2C3(c) => Capabilities::navigable().with_root(c),
            FlowHandle::Def(_) => Capabilities::navigable(),
        }
    }
}

impl FromHandle<FlowHandle> for AbcCoordinator {
    fn from_handle(handle: &FlowHandle) -> Option<&Self> {
        match handle {
            FlowHandle::Abc(c) => Some(c),
            _ => None,
        }
    }
}

impl FromHandle<FlowHandle> for C1C2C3Coordinator {
    fn from_handle(handle: &FlowHandle) -> Option<&Self> {
        match handle {
            FlowHandle::C1C2C3(c) => Some(c),
            _ => None,
        }
    }
}

impl FromHandle<FlowHandle> for DefCoordinator {
    fn from_handle(handle: &FlowHandle) -> Option<&Self> {
        match handle {
            FlowHandle::Def(c) => Some(c),
            _ => None,
        }
    }
}

/// Register one coordinator per flow, all sharing the session navigator.
pub fn register_all(setup: &mut Registrar<FlowHandle>) -> Result<(), WiringError> {
    setup.register(FlowId::Abc, FlowHandle::Abc(FlowCoordinator::new(setup.navigator())))?;
    setup.register(
        FlowId::C1C2C3,
        FlowHandle::C1C2C3(FlowCoordinator::new(setup.navigator())),
    )?;
    setup.register(FlowId::Def, FlowHandle::Def(FlowCoordinator::new(setup.navigator())))
}
