//! TUI View Components
//!
//! Ratatui `Widget` wrappers around view models. Views borrow their
//! view model and only map data onto widgets; state lives in components.

pub mod chart;
pub mod components;
pub mod home;
pub mod status_bar;
pub mod tables;

pub use chart::{BarChartWidget, KpiView};
pub use home::HomePageView;
pub use status_bar::StatusBarView;
pub use tables::{AuthorTablesView, CountryTitleTableView, DataframeTableView};

use ratatui::style::{Color, Modifier, Style};

pub(crate) fn header_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}
