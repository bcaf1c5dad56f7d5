//! Routes - The Typed Route Tree
//!
//! Every screen in an application belongs to exactly one flow. A flow owns a
//! closed enum of its screens (`FlowRoute`), and the application owns one
//! closed union (`GlobalRoute`) with a variant per flow.
//!
//! Only `GlobalRoute` values are ever stored on the shared navigation stack.
//! A flow reaches the stack by wrapping its local route into its own variant.
//!
//! # Example
//! ```rust,ignore
//! #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
//! enum FlowId { Checkout }
//!
//! #[derive(Debug, Clone, PartialEq, Eq, Hash)]
//! enum AppRoute { Checkout(CheckoutRoute) }
//!
//! #[derive(Debug, Clone, PartialEq, Eq, Hash)]
//! enum CheckoutRoute { Cart, Payment { order: u64 } }
//!
//! impl FlowRoute for CheckoutRoute {
//!     type Global = AppRoute;
//!     const FLOW: FlowId = FlowId::Checkout;
//!
//!     fn into_global(self) -> AppRoute { AppRoute::Checkout(self) }
//!
//!     fn from_global(route: &AppRoute) -> Option<&Self> {
//!         match route {
//!             AppRoute::Checkout(r) => Some(r),
//!         }
//!     }
//! }
//! ```

use std::fmt::{Debug, Display};
use std::hash::Hash;

/// Stable key naming one flow.
///
/// Implemented by the application's flow enum. It is an explicit value,
/// never a reflective type name, so registration and lookup are plain map
/// operations.
pub trait FlowIdentity: Copy + Eq + Hash + Debug + Display + 'static {}

impl<T> FlowIdentity for T where T: Copy + Eq + Hash + Debug + Display + 'static {}

/// The application-wide route union.
///
/// Equality and hashing must be structural (variant tag + payload), which is
/// what `#[derive(PartialEq, Eq, Hash)]` gives you.
pub trait GlobalRoute: Clone + Eq + Hash + Debug + 'static {
    /// The identity enum whose values tag this union's variants.
    type FlowId: FlowIdentity;

    /// The flow owning this route (the variant tag).
    fn flow_id(&self) -> Self::FlowId;
}

/// A route meaningful only inside one flow.
pub trait FlowRoute: Clone + Eq + Hash + Debug + 'static {
    /// The union this flow's variant lives in.
    type Global: GlobalRoute;

    /// Identity of the owning flow. `into_global` always yields a route
    /// whose `flow_id()` equals this value.
    const FLOW: <Self::Global as GlobalRoute>::FlowId;

    /// Wrap this local route into the flow's global variant.
    fn into_global(self) -> Self::Global;

    /// Decode a global route back into this flow's local route.
    ///
    /// Returns `None` when the route belongs to another flow.
    fn from_global(route: &Self::Global) -> Option<&Self>;
}

/// Shorthand for the global union of a local route type.
pub type GlobalOf<R> = <R as FlowRoute>::Global;

/// Declares that a flow may serve as the presentation base.
pub trait RootFlow: FlowRoute {}

/// Declares that a flow may push routes belonging to other flows.
pub trait CrossFlow: FlowRoute {}
