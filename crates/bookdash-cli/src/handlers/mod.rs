pub mod author;
pub mod config;
pub mod context;
pub mod dashboard;
pub mod dataframe;
pub mod home;
pub mod tui;

pub use context::HandlerContext;
