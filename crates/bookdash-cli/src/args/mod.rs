mod commands;
mod common;

pub use commands::{Cli, Commands, ConfigCommand};
pub use common::{CountryArgs, ViewModeArgs};
