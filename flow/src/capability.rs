//! Capabilities - Navigation Contracts
//!
//! A flow coordinator is described by what it may do, not by what it is.
//!
//! - `Navigable`: move within the own flow, pop one level, reset to root
//! - `RootNavigable`: may be the presentation base (marker)
//! - `CrossFlowNavigable`: may push a route belonging to another flow
//!
//! Presentation wiring never inspects concrete coordinator types. It asks a
//! `Capabilities` set instead.

use crate::route::{FlowRoute, GlobalOf};

/// Navigation within one flow.
///
/// Every call is fire-and-forget: the coordinator never reports whether the
/// shared stack actually changed.
pub trait Navigable {
    /// The flow-local route type this coordinator understands.
    type Route: FlowRoute;

    /// Push a screen of this flow.
    fn navigate_to(&self, route: Self::Route);

    /// Pop the top-most screen, whichever flow it belongs to.
    fn navigate_back(&self);

    /// Return to the application root.
    fn navigate_to_root(&self);
}

/// A flow reachable as the stack's visual root. Carries no operations.
pub trait RootNavigable: Navigable {}

/// A flow that may hand control to a different flow.
///
/// The target is passed as an already-built global route, so the caller
/// never depends on the other flow's coordinator or local route type.
pub trait CrossFlowNavigable: Navigable {
    fn navigate_to_new_flow(&self, route: GlobalOf<Self::Route>);
}

/// One navigation capability.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Capability {
    Navigable,
    Root,
    CrossFlow,
}

impl Capability {
    const ALL: [Capability; 3] = [Capability::Navigable, Capability::Root, Capability::CrossFlow];

    const fn bit(self) -> u8 {
        match self {
            Capability::Navigable => 0b001,
            Capability::Root => 0b010,
            Capability::CrossFlow => 0b100,
        }
    }
}

/// The set of capabilities a coordinator declares.
///
/// The `with_*` builders take the coordinator itself so a declaration only
/// compiles when the matching trait is implemented:
///
/// ```rust,ignore
/// let caps = Capabilities::navigable()
///     .with_root(&coordinator)
///     .with_cross_flow(&coordinator);
/// assert!(caps.contains(Capability::CrossFlow));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Capabilities(u8);

impl Capabilities {
    /// The base set every flow coordinator has.
    pub const fn navigable() -> Self {
        Capabilities(Capability::Navigable.bit())
    }

    pub fn with_root<C: RootNavigable + ?Sized>(self, _coordinator: &C) -> Self {
        Capabilities(self.0 | Capability::Root.bit())
    }

    pub fn with_cross_flow<C: CrossFlowNavigable + ?Sized>(self, _coordinator: &C) -> Self {
        Capabilities(self.0 | Capability::CrossFlow.bit())
    }

    pub const fn contains(self, capability: Capability) -> bool {
        self.0 & capability.bit() != 0
    }

    /// Iterate the declared capabilities in a fixed order.
    pub fn iter(self) -> impl Iterator<Item = Capability> {
        Capability::ALL.into_iter().filter(move |c| self.contains(*c))
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::navigable()
    }
}
