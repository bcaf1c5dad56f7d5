//! Route types of the demo application.
//!
//! Three flows: ABC (the root, may jump to other flows), C1C2C3 (root
//! capable) and DEF (plain).

use serde::Serialize;
use std::fmt;
use waypoint::flow::{CrossFlow, FlowRoute, GlobalRoute, RootFlow};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum FlowId {
    Abc,
    C1C2C3,
    Def,
}

impl FlowId {
    pub const ALL: [FlowId; 3] = [FlowId::Abc, FlowId::C1C2C3, FlowId::Def];
}

impl fmt::Display for FlowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            FlowId::Abc => "abc",
            FlowId::C1C2C3 => "c1c2c3",
            FlowId::Def => "def",
        };
        f.write_str(name)
    }
}

/// Every route the shared stack can hold.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "flow", content = "route", rename_all = "snake_case")]
pub enum AppRoute {
    Abc(AbcRoute),
    C1C2C3(C1C2C3Route),
    Def(DefRoute),
}

impl GlobalRoute for AppRoute {
    type FlowId = FlowId;

    fn flow_id(&self) -> FlowId {
        match self {
            AppRoute::Abc(_) => FlowId::Abc,
            AppRoute::C1C2C3(_) => FlowId::C1C2C3,
            AppRoute::Def(_) => FlowId::Def,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AbcRoute {
    ViewA,
    ViewB,
    ViewC,
}

impl FlowRoute for AbcRoute {
    type Global = AppRoute;
    const FLOW: FlowId = FlowId::Abc;

    fn into_global(self) -> AppRoute {
        AppRoute::Abc(self)
    }

    fn from_global(route: &AppRoute) -> Option<&Self> {
        match route {
            AppRoute::Abc(r) => Some(r),
            _ => None,
        }
    }
}

impl RootFlow for AbcRoute {}
impl CrossFlow for AbcRoute {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum C1C2C3Route {
    ViewC1,
    ViewC2,
    ViewC3,
}

impl FlowRoute for C1C2C3Route {
    type Global = AppRoute;
    const FLOW: FlowId = FlowId::C1C2C3;

    fn into_global(self) -> AppRoute {
        AppRoute::C1C2C3(self)
    }

    fn from_global(route: &AppRoute) -> Option<&Self> {
        match route {
            AppRoute::C1C2C3(r) => Some(r),
            _ => None,
        }
    }
}

impl RootFlow for C1C2C3Route {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DefRoute {
    ViewD,
    ViewE,
}

impl FlowRoute for DefRoute {
    type Global = AppRoute;
    const FLOW: FlowId = FlowId::Def;

    fn into_global(self) -> AppRoute {
        AppRoute::Def(self)
    }

    fn from_global(route: &AppRoute) -> Option<&Self> {
        match route {
            AppRoute::Def(r) => Some(r),
            _ => None,
        }
    }
}
