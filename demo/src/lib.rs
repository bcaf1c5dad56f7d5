//! Three-flow demo built on Waypoint.
//!
//! ABC is the root flow and may hand control to C1C2C3 or DEF. C1C2C3 is
//! root capable. DEF only navigates within itself.

pub mod flows;
pub mod routes;
pub mod screen;
pub mod session;
pub mod views;

pub use flows::FlowHandle;
pub use routes::{AbcRoute, AppRoute, C1C2C3Route, DefRoute, FlowId};
pub use screen::{Screen, ScreenError};
pub use session::{AppSession, SessionSnapshot};
