//! Headless dashboard: view state, reducer and fetch controller.

pub mod action;
pub mod controller;
pub mod reducer;
pub mod state;

pub use action::Action;
pub use controller::Dashboard;
pub use reducer::reduce;
pub use state::{format_usd, Payload, ViewState, BACKEND_WARNING};
