pub mod entities;
pub mod repositories;
pub mod validation;
pub mod value_objects;

use validation::{DomainError, ValidationHandler};

/// Opaque identifier of an aggregate or referenced entity
///
/// Identifiers compare by value and expose their canonical string form.
pub trait Identifier: std::fmt::Display + Clone + Eq + std::hash::Hash {
    fn value(&self) -> &str;
}

/// Root entity of a consistency boundary
///
/// Validation reports through a [`ValidationHandler`] so callers choose the
/// policy: accumulate everything or stop at the first error.
pub trait AggregateRoot {
    type Id: Identifier;

    fn id(&self) -> &Self::Id;

    fn validate<H: ValidationHandler>(&self, handler: &mut H) -> Result<(), DomainError>;
}
