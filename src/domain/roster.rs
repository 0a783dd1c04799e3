use log::debug;

use super::CloneFailure;
use crate::ports::Prototype;

/// Names appended by [`EmployeeRoster::load_sample_data`], in order.
pub const SAMPLE_NAMES: [&str; 4] = ["Ze", "Felipe", "Jose", "Sr Franca"];

/// An ordered list of employee names that can duplicate itself.
///
/// Order is significant and duplicates are allowed. A roster built with
/// [`EmployeeRoster::from_names`] takes ownership of the given vector as is;
/// independence from other rosters is only established by
/// [`Prototype::try_clone`].
#[derive(Debug, Default, PartialEq, Eq)]
pub struct EmployeeRoster {
    names: Vec<String>,
}

impl EmployeeRoster {
    pub fn new() -> Self {
        Self { names: Vec::new() }
    }

    /// Build a roster that owns `initial` directly, without copying it.
    pub fn from_names(initial: Vec<String>) -> Self {
        Self { names: initial }
    }

    /// Append the four sample names. Calling this twice appends them twice.
    pub fn load_sample_data(&mut self) {
        self.names.extend(SAMPLE_NAMES.iter().map(|name| name.to_string()));
        debug!("loaded sample data, roster now holds {} name(s)", self.names.len());
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn names_mut(&mut self) -> &mut Vec<String> {
        &mut self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

impl Prototype for EmployeeRoster {
    fn try_clone(&self) -> Result<Self, CloneFailure> {
        let mut names = Vec::new();
        names
            .try_reserve_exact(self.names.len())
            .map_err(|source| CloneFailure { len: self.names.len(), source })?;
        names.extend(self.names.iter().cloned());
        debug!("cloned roster of {} name(s)", names.len());
        Ok(Self::from_names(names))
    }
}

impl From<Vec<String>> for EmployeeRoster {
    fn from(names: Vec<String>) -> Self {
        Self::from_names(names)
    }
}

impl FromIterator<String> for EmployeeRoster {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self::from_names(iter.into_iter().collect())
    }
}
