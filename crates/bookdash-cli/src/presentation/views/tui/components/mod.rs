//! TUI Components
//!
//! Components own UI state (cursor, scroll, section) and input handling,
//! and render through the view widgets. The renderer only routes keys
//! and recomputes view models when a component reports a change.

pub mod country_select;
pub mod dashboard;
pub mod dataframe;

pub use country_select::{CountrySelectComponent, SelectionAction};
pub use dashboard::{DashboardComponent, DashboardSection};
pub use dataframe::DataframeComponent;
