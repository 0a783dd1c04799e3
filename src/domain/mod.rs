pub mod error;
pub mod roster;

pub use error::{AppError, CloneFailure};
pub use roster::{EmployeeRoster, SAMPLE_NAMES};
