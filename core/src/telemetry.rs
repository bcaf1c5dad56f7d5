//! # Telemetry: Navigation Tracing
//!
//! An observer that turns every navigation event into a `tracing` event.

use crate::event::NavigationEvent;
use crate::navigator::SessionId;
use crate::observer::StackObserver;
use std::fmt::Debug;

/// Logs each navigation event at `info` level.
///
/// Installed by the central coordinator when `trace_navigation` is set, or
/// subscribed by hand.
#[derive(Debug, Clone)]
pub struct TracingObserver {
    session: SessionId,
    label: String,
}

impl TracingObserver {
    pub fn new(session: SessionId, label: &str) -> Self {
        Self {
            session,
            label: label.to_string(),
        }
    }
}

impl<G: Debug> StackObserver<G> for TracingObserver {
    fn on_navigate(&self, event: &NavigationEvent<G>, stack: &[G]) {
        let top = stack.last();
        let kind = event.label();
        match event {
            NavigationEvent::Pushed { route, depth } => {
                tracing::info!(
                    waypoint.session = %self.session,
                    waypoint.label = %self.label,
                    kind,
                    ?route,
                    depth,
                    "Navigation: pushed"
                );
            }
            NavigationEvent::Popped { route, depth } => {
                tracing::info!(
                    waypoint.session = %self.session,
                    waypoint.label = %self.label,
                    kind,
                    ?route,
                    depth,
                    ?top,
                    "Navigation: popped"
                );
            }
            NavigationEvent::PopIgnored => {
                tracing::info!(
                    waypoint.session = %self.session,
                    waypoint.label = %self.label,
                    kind,
                    "Navigation: pop ignored (empty stack)"
                );
            }
            NavigationEvent::Reset { cleared } => {
                tracing::info!(
                    waypoint.session = %self.session,
                    waypoint.label = %self.label,
                    kind,
                    cleared,
                    "Navigation: reset to root"
                );
            }
        }
    }
}
