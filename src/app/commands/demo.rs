//! Clone a sample roster, edit the clone, and report both sides.

use log::info;
use serde::Serialize;

use crate::app::config::DemoConfig;
use crate::domain::{AppError, EmployeeRoster};
use crate::ports::Prototype;

#[derive(Debug, Clone, Default)]
pub struct DemoOptions {
    /// Names appended to the clone after cloning.
    pub append: Vec<String>,
    /// Names removed from the clone after appending.
    pub remove: Vec<String>,
}

impl DemoOptions {
    /// Config lists first, then values given on the command line.
    pub fn merged(config: DemoConfig, append: Vec<String>, remove: Vec<String>) -> Self {
        let DemoConfig { append: mut all_append, remove: mut all_remove } = config;
        all_append.extend(append);
        all_remove.extend(remove);
        Self { append: all_append, remove: all_remove }
    }

    /// Reject blank names to append, whichever source they came from.
    pub fn validate(&self) -> Result<(), AppError> {
        if let Some(pos) = self.append.iter().position(|name| name.trim().is_empty()) {
            return Err(AppError::config_error(format!(
                "append name #{} must not be blank",
                pos + 1
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DemoReport {
    pub original: Vec<String>,
    pub clone: Vec<String>,
}

pub fn execute(options: DemoOptions) -> Result<DemoReport, AppError> {
    options.validate()?;

    let mut original = EmployeeRoster::new();
    original.load_sample_data();

    let mut clone = original.try_clone()?;
    let names = clone.names_mut();
    names.extend(options.append);
    names.retain(|name| !options.remove.contains(name));
    info!("demo: original has {} name(s), clone has {}", original.len(), clone.len());

    Ok(DemoReport { original: original.into_names(), clone: clone.into_names() })
}
