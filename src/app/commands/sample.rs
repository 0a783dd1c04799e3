//! Load the sample names into a fresh roster.

use crate::domain::{AppError, EmployeeRoster};

/// Upper bound on repeated sample loads.
pub const MAX_TIMES: u32 = 10_000;

pub fn execute(times: u32) -> Result<Vec<String>, AppError> {
    if times > MAX_TIMES {
        return Err(AppError::config_error(format!(
            "times must be at most {}, got {}",
            MAX_TIMES, times
        )));
    }
    let mut roster = EmployeeRoster::new();
    for _ in 0..times {
        roster.load_sample_data();
    }
    Ok(roster.into_names())
}
