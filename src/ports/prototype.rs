use crate::domain::CloneFailure;

/// Port for types that produce independent copies of themselves.
///
/// Every mutable container directly owned by the implementor must be
/// reallocated in the copy, so neither side observes the other's later
/// mutations. Duplication may fail; callers receive the failure rather
/// than a panic.
pub trait Prototype: Sized {
    fn try_clone(&self) -> Result<Self, CloneFailure>;
}
