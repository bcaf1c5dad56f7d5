//! Two-flow application shared by the unit tests of this crate.

use crate::flow_coordinator::FlowCoordinator;
use crate::registry::{CoordinatorHandle, FromHandle};
use std::fmt;
use waypoint_flow::{Capabilities, CrossFlow, FlowRoute, GlobalRoute, RootFlow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flow {
    Home,
    Settings,
    Orphan,
}

impl fmt::Display for Flow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Flow::Home => "home",
            Flow::Settings => "settings",
            Flow::Orphan => "orphan",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Route {
    Home(HomeRoute),
    Settings(SettingsRoute),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum HomeRoute {
    Feed,
    Post(u32),
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SettingsRoute {
    Account,
    Privacy,
}

impl GlobalRoute for Route {
    type FlowId = Flow;

    fn flow_id(&self) -> Flow {
        match self {
            Route::Home(_) => Flow::Home,
            Route::Settings(_) => Flow::Settings,
        }
    }
}

impl FlowRoute for HomeRoute {
    type Global = Route;
    const FLOW: Flow = Flow::Home;

    fn into_global(self) -> Route {
        Route::Home(self)
    }

    fn from_global(route: &Route) -> Option<&Self> {
        match route {
            Route::Home(r) => Some(r),
            _ => None,
        }
    }
}

impl RootFlow for HomeRoute {}
impl CrossFlow for HomeRoute {}

impl FlowRoute for SettingsRoute {
    type Global = Route;
    const FLOW: Flow = Flow::Settings;

    fn into_global(self) -> Route {
        Route::Settings(self)
    }

    fn from_global(route: &Route) -> Option<&Self> {
        match route {
            Route::Settings(r) => Some(r),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum Handle {
    Home(FlowCoordinator<HomeRoute>),
    Settings(FlowCoordinator<SettingsRoute>),
}

impl CoordinatorHandle for Handle {
    type Global = Route;

    fn flow_id(&self) -> Flow {
        match self {
            Handle::Home(c) => c.identity(),
            Handle::Settings(c) => c.identity(),
        }
    }

    fn capabilities(&self) -> Capabilities {
        match self {
            Handle::Home(c) => Capabilities::navigable().with_root(c).with_cross_flow(c),
            Handle::Settings(_) => Capabilities::navigable(),
        }
    }
}

impl FromHandle<Handle> for FlowCoordinator<HomeRoute> {
    fn from_handle(handle: &Handle) -> Option<&Self> {
        match handle {
            Handle::Home(c) => Some(c),
            _ => None,
        }
    }
}

impl FromHandle<Handle> for FlowCoordinator<SettingsRoute> {
    fn from_handle(handle: &Handle) -> Option<&Self> {
        match handle {
            Handle::Settings(c) => Some(c),
            _ => None,
        }
    }
}
