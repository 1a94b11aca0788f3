pub mod config;
pub mod error;
pub mod loader;
pub mod session;

pub use config::{resolve_config_path, Config, DashboardConfig};
pub use error::{Error, Result};
pub use loader::{check_image_asset, load_records, read_records};
pub use session::{Session, SessionOptions};
