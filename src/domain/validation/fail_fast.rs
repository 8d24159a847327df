use super::{DomainError, ValidationError, ValidationHandler};

/// Fail-on-first-error validation handler
///
/// `append` returns the error immediately instead of collecting it, so a
/// caller that propagates with `?` stops at the first violation. Used where
/// all-or-nothing validation is wanted.
#[derive(Debug, Clone, Default)]
pub struct FailFast {
    errors: Vec<ValidationError>,
}

impl FailFast {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl ValidationHandler for FailFast {
    fn append(&mut self, error: ValidationError) -> Result<(), DomainError> {
        self.errors.push(error.clone());
        Err(DomainError::with(vec![error]))
    }

    fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}
