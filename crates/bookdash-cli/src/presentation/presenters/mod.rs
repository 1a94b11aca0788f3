pub mod author;
pub mod dashboard;
pub mod dataframe;
pub mod home;
pub mod system;

pub use author::{build_author_table, present_author};
pub use dashboard::{build_dashboard, present_dashboard};
pub use dataframe::{build_dataframe, present_dataframe};
pub use home::{build_home, present_home};
pub use system::{present_config, present_config_init, present_guidance};
