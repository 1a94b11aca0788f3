pub mod author;
pub mod common;
pub mod dashboard;
pub mod dataframe;
pub mod home;
pub mod result;
pub mod system;

use std::fmt;

pub use author::{AuthorBookViewModel, AuthorTableViewModel};
pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel, ViewMode};
pub use dashboard::{
    BarChartViewModel, BarViewModel, CountryTitleRowViewModel, DashboardViewModel, KpiViewModel,
};
pub use dataframe::{DataframeViewModel, RecordRowViewModel};
pub use home::{CreditViewModel, HomeViewModel};
pub use result::CommandResultViewModel;
pub use system::{ConfigInitViewModel, ConfigViewModel, GuidanceViewModel};

/// Bridge between a view model and its text layout.
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
