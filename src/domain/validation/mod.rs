mod fail_fast;
mod notification;

pub use fail_fast::FailFast;
pub use notification::Notification;

/// A single domain validation error message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    message: String,
}

impl ValidationError {
    pub fn new(message: impl Into<String>) -> Self {
        Self { message: message.into() }
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Failure raised when a validation policy refuses to continue
///
/// Carries the structured errors observed so far. A `DomainError` built
/// from a plain message has no structured errors and is treated as a
/// single generic failure by accumulating handlers.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{message}")]
pub struct DomainError {
    message: String,
    errors: Vec<ValidationError>,
}

impl DomainError {
    pub fn with(errors: Vec<ValidationError>) -> Self {
        let message = errors.first().map_or_else(String::new, |e| e.message().to_string());
        Self { message, errors }
    }

    pub fn from_message(message: impl Into<String>) -> Self {
        Self { message: message.into(), errors: Vec::new() }
    }

    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }
}

impl From<ValidationError> for DomainError {
    fn from(error: ValidationError) -> Self {
        Self::with(vec![error])
    }
}

impl From<String> for DomainError {
    fn from(message: String) -> Self {
        Self::from_message(message)
    }
}

/// Collects validation errors under one of two policies: accumulate and
/// continue ([`Notification`]) or fail on the first error ([`FailFast`]).
/// Call sites stay agnostic by propagating the `Result` of `append` with
/// `?`; the accumulating policy never returns `Err`.
pub trait ValidationHandler {
    fn append(&mut self, error: ValidationError) -> Result<(), DomainError>;

    fn errors(&self) -> &[ValidationError];

    fn append_all(&mut self, errors: Vec<ValidationError>) -> Result<(), DomainError> {
        for error in errors {
            self.append(error)?;
        }
        Ok(())
    }

    fn has_errors(&self) -> bool {
        !self.errors().is_empty()
    }

    fn first(&self) -> Option<&ValidationError> {
        self.errors().first()
    }

    /// Run a fallible block under this handler's policy
    ///
    /// Structured errors from a `DomainError` are merged into the handler;
    /// a failure without structured errors is recorded as a single generic
    /// error built from its message. Returns the block's value when it
    /// succeeds, `Ok(None)` when the failure was absorbed, and `Err` only
    /// when the policy refuses to continue.
    fn validate<T, F, E>(&mut self, block: F) -> Result<Option<T>, DomainError>
    where
        F: FnOnce() -> Result<T, E>,
        E: Into<DomainError>,
        Self: Sized,
    {
        match block() {
            Ok(value) => Ok(Some(value)),
            Err(err) => {
                let err: DomainError = err.into();
                let errors = if err.errors().is_empty() {
                    vec![ValidationError::new(err.to_string())]
                } else {
                    err.errors().to_vec()
                };
                self.append_all(errors)?;
                Ok(None)
            }
        }
    }
}
