pub mod config;
pub mod coordinator;
pub mod error;
pub mod event;
pub mod flow_coordinator;
pub mod navigator;
pub mod observer;
pub mod registry;
pub mod stack;
pub mod telemetry;
pub mod view;

#[cfg(test)]
mod fixture;

pub use config::{EmptyPopPolicy, NavigatorConfig};
pub use coordinator::{CentralCoordinator, Registrar};
pub use error::{ConfigError, WiringError};
pub use event::NavigationEvent;
pub use flow_coordinator::FlowCoordinator;
pub use navigator::{Navigator, SessionId};
pub use observer::{StackObserver, SubscriptionId};
pub use registry::{CoordinatorHandle, CoordinatorRegistry, FlowIdOf, FromHandle, RegistryBuilder};
pub use stack::NavigationStack;
pub use telemetry::TracingObserver;
pub use view::{RootDispatch, RouteDispatch, ViewFactory, render_with};

pub mod prelude {
    pub use crate::config::{EmptyPopPolicy, NavigatorConfig};
    pub use crate::coordinator::{CentralCoordinator, Registrar};
    pub use crate::error::WiringError;
    pub use crate::event::NavigationEvent;
    pub use crate::flow_coordinator::FlowCoordinator;
    pub use crate::navigator::Navigator;
    pub use crate::observer::StackObserver;
    pub use crate::registry::{CoordinatorHandle, CoordinatorRegistry, FromHandle};
    pub use crate::view::{RootDispatch, RouteDispatch, ViewFactory, render_with};
    pub use waypoint_flow::{
        Capabilities, Capability, CrossFlow, CrossFlowNavigable, FlowRoute, GlobalRoute, Navigable,
        RootFlow, RootNavigable,
    };
}
