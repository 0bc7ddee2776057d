//! Shared contract for self-validating task fields.

use super::TaskValidationError;

/// An immutable value whose invariants are enforced at construction.
///
/// Each field kind is its own Rust type, so values of different kinds can
/// never be compared even when their raw representations coincide. Equality
/// between two values of the same kind is structural.
pub trait ValidatedField: Sized + Clone + PartialEq {
    /// Human-readable field name.
    const FIELD: &'static str;

    /// Raw input accepted by [`Self::validate`].
    type Input;

    /// Borrowed view of the wrapped value.
    type Value: ?Sized;

    /// Validates raw input and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`TaskValidationError`] when the input violates the field's
    /// invariants.
    fn validate(input: Self::Input) -> Result<Self, TaskValidationError>;

    /// Returns the wrapped value.
    fn value(&self) -> &Self::Value;
}
