use super::{DomainError, ValidationError, ValidationHandler};

/// Accumulate-and-continue validation handler
///
/// Collects every error so a caller can report all of them together.
#[derive(Debug, Clone, Default)]
pub struct Notification {
    errors: Vec<ValidationError>,
}

impl Notification {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn into_errors(self) -> Vec<ValidationError> {
        self.errors
    }
}

impl ValidationHandler for Notification {
    fn append(&mut self, error: ValidationError) -> Result<(), DomainError> {
        self.errors.push(error);
        Ok(())
    }

    fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}
