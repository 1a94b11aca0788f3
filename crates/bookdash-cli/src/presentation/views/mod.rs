pub mod author;
pub mod chart;
pub mod dashboard;
pub mod dataframe;
pub mod home;
pub mod system;
pub mod tui;

pub use chart::BarChartView;
