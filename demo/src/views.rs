//! View factories for each flow and the application-wide dispatch table.

use crate::flows::FlowHandle;
use crate::routes::{AbcRoute, AppRoute, C1C2C3Route, DefRoute};
use crate::screen::Screen;
use waypoint::core::{CoordinatorRegistry, RouteDispatch, ViewFactory, render_with};
use waypoint::flow::{CrossFlowNavigable, Navigable};
use waypoint::FlowCoordinator;

/// Bind a coordinator clone into a button action.
fn bind<R, F>(coordinator: &FlowCoordinator<R>, intent: F) -> impl Fn() + 'static
where
    R: waypoint::FlowRoute,
    F: Fn(&FlowCoordinator<R>) + 'static,
{
    let coordinator = coordinator.clone();
    move || intent(&coordinator)
}

pub struct AbcViews;

impl ViewFactory for AbcViews {
    type Route = AbcRoute;
    type Screen = Screen;

    fn make_view(route: &AbcRoute, coordinator: &FlowCoordinator<AbcRoute>) -> Screen {
        match route {
            AbcRoute::ViewA => Screen::new("View A")
                .button("Go to B", bind(coordinator, |c| c.navigate_to(AbcRoute::ViewB)))
                .button("Go to C", bind(coordinator, |c| c.navigate_to(AbcRoute::ViewC))),
            AbcRoute::ViewB => Screen::new("View B")
                .button("Go to C", bind(coordinator, |c| c.navigate_to(AbcRoute::ViewC)))
                .button("Go back", bind(coordinator, |c| c.navigate_back())),
            AbcRoute::ViewC => Screen::new("View C")
                .button(
                    "Go to D",
                    bind(coordinator, |c| c.navigate_to_new_flow(AppRoute::Def(DefRoute::ViewD))),
                )
                .button(
                    "Go to C1",
                    bind(coordinator, |c| {
                        c.navigate_to_new_flow(AppRoute::C1C2C3(C1C2C3Route::ViewC1))
                    }),
                )
                .button("Go back", bind(coordinator, |c| c.navigate_back()))
                .button("Go back to root", bind(coordinator, |c| c.navigate_to_root())),
        }
    }
}

pub struct C1C2C3Views;

impl ViewFactory for C1C2C3Views {
    type Route = C1C2C3Route;
    type Screen = Screen;

    fn make_view(route: &C1C2C3Route, coordinator: &FlowCoordinator<C1C2C3Route>) -> Screen {
        match route {
            C1C2C3Route::ViewC1 => Screen::new("View C1").button(
                "Go to C2",
                bind(coordinator, |c| c.navigate_to(C1C2C3Route::ViewC2)),
            ),
            C1C2C3Route::ViewC2 => Screen::new("View C2")
                .button("Go to C3", bind(coordinator, |c| c.navigate_to(C1C2C3Route::ViewC3)))
                .button("Go back", bind(coordinator, |c| c.navigate_back())),
            C1C2C3Route::ViewC3 => Screen::new("View C3")
                .button("Go back", bind(coordinator, |c| c.navigate_back()))
                .button("Go back to root", bind(coordinator, |c| c.navigate_to_root())),
        }
    }
}

pub struct DefViews;

impl ViewFactory for DefViews {
    type Route = DefRoute;
    type Screen = Screen;

    fn make_view(route: &DefRoute, coordinator: &FlowCoordinator<DefRoute>) -> Screen {
        match route {
            DefRoute::ViewD => Screen::new("View D")
                .button("Go to E", bind(coordinator, |c| c.navigate_to(DefRoute::ViewE)))
                .button("Go back", bind(coordinator, |c| c.navigate_back())),
            DefRoute::ViewE => {
                Screen::new("View E").button("Go back", bind(coordinator, |c| c.navigate_back()))
            }
        }
    }
}

/// Routes every `AppRoute` to its flow's factory.
#[derive(Debug, Clone, Copy, Default)]
pub struct AppDispatch;

impl RouteDispatch<FlowHandle> for AppDispatch {
    type Screen = Screen;

    fn dispatch(&self, route: &AppRoute, registry: &CoordinatorRegistry<FlowHandle>) -> Screen {
        match route {
            AppRoute::Abc(r) => render_with::<AbcViews, _>(r, registry),
            AppRoute::C1C2C3(r) => render_with::<C1C2C3Views, _>(r, registry),
            AppRoute::Def(r) => render_with::<DefViews, _>(r, registry),
        }
    }
}
