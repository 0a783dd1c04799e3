//! roster: an employee roster that duplicates itself into independent copies.

pub mod app;
pub mod domain;
pub mod ports;

pub use app::api::{DemoOptions, DemoReport, demo, demo_with_config, sample};
pub use domain::{AppError, CloneFailure, EmployeeRoster, SAMPLE_NAMES};
pub use ports::Prototype;
