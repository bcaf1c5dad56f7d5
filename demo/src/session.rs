//! A running demo session: the central coordinator plus root composition.

use crate::flows::{FlowHandle, register_all};
use crate::routes::{AbcRoute, AppRoute};
use crate::screen::{Screen, ScreenError, ScreenSummary};
use crate::views::AppDispatch;
use serde::Serialize;
use waypoint::{CentralCoordinator, NavigatorConfig, RootDispatch, WiringError};

/// The route shown beneath every stack entry.
pub const ROOT_ROUTE: AppRoute = AppRoute::Abc(AbcRoute::ViewA);

pub struct AppSession {
    central: CentralCoordinator<FlowHandle>,
    root: RootDispatch<FlowHandle, AppDispatch>,
}

impl AppSession {
    /// Register all three flows and root the presentation at ABC's View A.
    pub fn start(config: NavigatorConfig) -> Result<Self, WiringError> {
        let central = CentralCoordinator::new(config, register_all)?;
        let root = RootDispatch::new(ROOT_ROUTE, AppDispatch, &central)?;
        Ok(Self { central, root })
    }

    pub fn central(&self) -> &CentralCoordinator<FlowHandle> {
        &self.central
    }

    /// Root screen followed by one screen per stack entry.
    pub fn screens(&self) -> Vec<Screen> {
        self.root.render(&self.central)
    }

    /// The screen on top.
    pub fn visible(&self) -> Screen {
        self.root.render_top(&self.central)
    }

    /// Press `label` on the visible screen.
    pub fn press(&self, label: &str) -> Result<(), ScreenError> {
        self.visible().press(label)
    }

    pub fn snapshot(&self) -> SessionSnapshot {
        SessionSnapshot {
            session: self.central.session().to_string(),
            root: self.root.root().clone(),
            stack: self.central.routes(),
            visible: self.visible().summary(),
        }
    }
}

/// Serializable state of a session, as printed by `--json`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub session: String,
    pub root: AppRoute,
    pub stack: Vec<AppRoute>,
    pub visible: ScreenSummary,
}
