//! Waypoint Flow - Route Model & Capability Layer
//!
//! This crate defines the **structural** aspects of Waypoint:
//! - `FlowRoute`: a flow-local route enumeration
//! - `GlobalRoute`: the application-wide union wrapping every flow's routes
//! - `Navigable` and friends: what a flow coordinator is allowed to do
//!
//! **IMPORTANT**: This layer is Pure Rust - no IO, no shared state, no logging.

pub mod capability;
pub mod route;

pub use capability::{
    Capabilities, Capability, CrossFlowNavigable, Navigable, RootNavigable,
};
pub use route::{CrossFlow, FlowIdentity, FlowRoute, GlobalOf, GlobalRoute, RootFlow};
