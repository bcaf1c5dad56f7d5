//! Registry - Explicit Coordinator Wiring
//!
//! Maps a flow identity to the one coordinator serving that flow.
//!
//! # Philosophy
//! > Identities are values. A missing identity is a wiring bug, not a runtime case.
//!
//! The registry does NOT use type names or `Any` downcasting. Coordinators
//! are stored as the application's tagged union (`CoordinatorHandle`) and a
//! concrete coordinator is recovered with an explicit variant match
//! (`FromHandle`).

use crate::error::WiringError;
use ahash::AHashMap;
use waypoint_flow::{Capabilities, GlobalRoute};

/// Identity type of a handle's global route union.
pub type FlowIdOf<H> = <<H as CoordinatorHandle>::Global as GlobalRoute>::FlowId;

/// The application's tagged union of flow coordinators.
pub trait CoordinatorHandle: 'static {
    /// The global route union the wrapped coordinators push.
    type Global: GlobalRoute;

    /// Flow served by the wrapped coordinator.
    fn flow_id(&self) -> FlowIdOf<Self>;

    /// Capabilities the wrapped coordinator declares.
    fn capabilities(&self) -> Capabilities;
}

/// Recover a concrete coordinator from the handle union.
pub trait FromHandle<H>: Sized {
    /// Returns `None` when `handle` wraps a different coordinator type.
    fn from_handle(handle: &H) -> Option<&Self>;
}

/// Collects registrations during the single setup pass.
pub struct RegistryBuilder<H: CoordinatorHandle> {
    entries: AHashMap<FlowIdOf<H>, H>,
}

impl<H: CoordinatorHandle> RegistryBuilder<H> {
    pub fn new() -> Self {
        RegistryBuilder {
            entries: AHashMap::new(),
        }
    }

    /// Register `handle` under `identity`.
    ///
    /// Fails without touching the existing entries when `identity` is taken
    /// or when the handle serves a different flow than `identity`.
    pub fn register(&mut self, identity: FlowIdOf<H>, handle: H) -> Result<(), WiringError> {
        let found = handle.flow_id();
        if found != identity {
            return Err(WiringError::IdentityMismatch {
                expected: identity.to_string(),
                found: found.to_string(),
            });
        }
        if self.entries.contains_key(&identity) {
            return Err(WiringError::duplicate(identity));
        }
        self.entries.insert(identity, handle);
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn build(self) -> CoordinatorRegistry<H> {
        CoordinatorRegistry {
            entries: self.entries,
        }
    }
}

impl<H: CoordinatorHandle> Default for RegistryBuilder<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Frozen identity → coordinator map. Offers lookups only.
pub struct CoordinatorRegistry<H: CoordinatorHandle> {
    entries: AHashMap<FlowIdOf<H>, H>,
}

impl<H: CoordinatorHandle> CoordinatorRegistry<H> {
    /// Look up the coordinator for `identity`.
    ///
    /// # Panics
    /// When `identity` was never registered. That is a wiring defect in the
    /// setup pass; use `try_resolve` to inspect it instead.
    pub fn resolve(&self, identity: FlowIdOf<H>) -> &H {
        match self.try_resolve(identity) {
            Ok(handle) => handle,
            Err(err) => panic!("{err}"),
        }
    }

    pub fn try_resolve(&self, identity: FlowIdOf<H>) -> Result<&H, WiringError> {
        self.entries
            .get(&identity)
            .ok_or_else(|| WiringError::unregistered(identity))
    }

    /// Look up a concrete coordinator registered under `identity`.
    pub fn try_resolve_as<C: FromHandle<H>>(
        &self,
        identity: FlowIdOf<H>,
    ) -> Result<&C, WiringError> {
        let handle = self.try_resolve(identity)?;
        C::from_handle(handle).ok_or_else(|| WiringError::HandleMismatch {
            flow: identity.to_string(),
        })
    }

    pub fn contains(&self, identity: FlowIdOf<H>) -> bool {
        self.entries.contains_key(&identity)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered identities, in no particular order.
    pub fn identities(&self) -> impl Iterator<Item = FlowIdOf<H>> + '_ {
        self.entries.keys().copied()
    }
}

impl<H: CoordinatorHandle> std::fmt::Debug for CoordinatorRegistry<H> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoordinatorRegistry")
            .field("coordinator_count", &self.entries.len())
            .finish()
    }
}
