//! API Facade for the application.
//!
//! High-level functions shared by the CLI adapter and library callers.

use std::path::Path;

use crate::app::commands;
use crate::app::config::load_config;

pub use crate::app::commands::demo::{DemoOptions, DemoReport};
pub use crate::domain::AppError;

/// Clone a freshly loaded sample roster and apply `options` to the clone.
pub fn demo(options: DemoOptions) -> Result<DemoReport, AppError> {
    commands::demo::execute(options)
}

/// Same as [`demo`], reading edits from the config in `dir` (or `config`)
/// before appending the extra values.
pub fn demo_with_config(
    config: Option<&Path>,
    dir: &Path,
    append: Vec<String>,
    remove: Vec<String>,
) -> Result<DemoReport, AppError> {
    let config = load_config(config, dir)?;
    commands::demo::execute(DemoOptions::merged(config.demo, append, remove))
}

/// Names of a roster after loading the sample data `times` times.
pub fn sample(times: u32) -> Result<Vec<String>, AppError> {
    commands::sample::execute(times)
}
