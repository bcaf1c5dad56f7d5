//! Waypoint facade crate.
//!
//! This crate re-exports the flow, core and observe crates with a single entry point.

pub use waypoint_core as core;
pub use waypoint_flow as flow;
#[cfg(feature = "observe")]
pub use waypoint_observe as observe;

pub use waypoint_core::{
    CentralCoordinator, FlowCoordinator, NavigationEvent, NavigatorConfig, RootDispatch,
    WiringError,
};
pub use waypoint_flow::{Capabilities, Capability, FlowRoute, GlobalRoute};

pub mod prelude {
    pub use waypoint_core::prelude::*;
}
