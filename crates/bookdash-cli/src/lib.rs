// bookdash layering
//
// types    -> typed CSV record, age bands, projection rows
// engine   -> ReportGenerator: pure aggregates over an immutable RecordSet
// runtime  -> config file, CSV loading, startup checks (Session)
// cli      -> clap arguments, handlers, presentation (console + TUI)
//
// The dataset is loaded once per process. Every page recomputes its
// aggregates from the RecordSet with the current filter selection passed
// in explicitly; nothing is cached between requests.

mod args;
mod commands;
mod handlers;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, ConfigCommand, CountryArgs, ViewModeArgs};
pub use commands::run;
