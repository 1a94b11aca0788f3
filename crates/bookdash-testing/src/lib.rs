//! Testing infrastructure for bookdash integration tests.
//!
//! - `TestWorld`: isolated directory with a dataset, image and config path
//! - `fixtures`: CSV generation from typed records

pub mod fixtures;
pub mod world;

pub use fixtures::DatasetBuilder;
pub use world::{CliResult, TestWorld};
